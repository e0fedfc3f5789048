//! Truth tables of formulae

use crate::*;

use itertools::Itertools;
use log::{debug, trace};
use std::fmt;

/// The value of a formula for every assignment of its variables.
///
/// Variables are sorted alphabetically and rows are listed with the last variable varying fastest.
///
/// ```
/// use rpnkit::{get_truth_table, FormulaError};
/// # fn main() -> Result<(), FormulaError> {
///
/// let table = get_truth_table("AB&")?;
/// assert_eq!(table.rows.len(), 4);
/// assert_eq!(table.to_string(), "\
/// | A | B | = |
/// |---|---|---|
/// | 0 | 0 | 0 |
/// | 0 | 1 | 0 |
/// | 1 | 0 | 0 |
/// | 1 | 1 | 1 |
/// ");
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TruthTable {
    pub variables: Vec<Variable>,
    pub rows: Vec<TruthRow>,
}

/// One line of a truth table: the values of the variables and the resulting value of the formula
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TruthRow {
    pub values: Vec<bool>,
    pub result: bool,
}

/// Compute the truth table of a variable formula
///
/// Formulae containing fixed values are rejected with [FormulaError::UnexpectedValue].
pub fn get_truth_table(formula: &str) -> Result<TruthTable, FormulaError> {
    let formula: Formula = formula.parse()?;
    if let Some(b) = formula.iter().find_map(|s| match s {
        Symbol::Value(b) => Some(*b),
        _ => None,
    }) {
        return Err(FormulaError::UnexpectedValue(b));
    }
    TruthTable::compute(&formula)
}

/// Print the truth table of a variable formula on the standard output
pub fn print_truth_table(formula: &str) -> Result<(), FormulaError> {
    print!("{}", get_truth_table(formula)?);
    Ok(())
}

/// Test if some assignment of the variables satisfies the formula.
///
/// ```
/// use rpnkit::{sat, FormulaError};
/// # fn main() -> Result<(), FormulaError> {
///
/// assert!(sat("AB|")?);
/// assert!(!sat("AA!&")?);
/// assert!(sat("1")?);
/// # Ok(())
/// # }
/// ```
pub fn sat(formula: &str) -> Result<bool, FormulaError> {
    let formula: Formula = formula.parse()?;
    let table = TruthTable::compute(&formula)?;
    let satisfiable = table.rows.iter().any(|row| row.result);
    debug!("sat({}) = {}", formula, satisfiable);
    Ok(satisfiable)
}

impl TruthTable {
    /// Enumerate all assignments of the variables of a formula.
    ///
    /// Each row is computed by substituting the assignment in the formula and evaluating
    /// the resulting explicit formula. A formula without variables has a single row.
    pub fn compute(formula: &Formula) -> Result<Self, FormulaError> {
        let variables: Vec<Variable> = formula.variables().iter().collect();
        let rows = (0..(1usize << variables.len()))
            .map(|row| {
                let assignment = Assignment::from_row(&variables, row);
                let explicit = formula.substitute(&assignment);
                let result = explicit.eval()?;
                trace!("{} => {}", explicit, result);
                Ok(TruthRow {
                    values: variables.iter().map(|v| assignment.value(*v)).collect(),
                    result,
                })
            })
            .collect::<Result<Vec<TruthRow>, FormulaError>>()?;
        debug!("truth table of {}: {} rows", formula, rows.len());
        Ok(Self { variables, rows })
    }

    /// Textual cells of the table: a header with a result column, a separator and a row per assignment
    pub fn cells(&self) -> Vec<Vec<String>> {
        let width = self.variables.len() + 1;
        let header = self
            .variables
            .iter()
            .map(|v| v.to_string())
            .chain(std::iter::once("=".to_string()))
            .collect();
        let separator = vec!["---".to_string(); width];
        let mut cells = vec![header, separator];
        cells.extend(self.rows.iter().map(|row| {
            row.values
                .iter()
                .chain(std::iter::once(&row.result))
                .map(|b| bit(*b).to_string())
                .collect()
        }));
        cells
    }

    /// Test if the formula is true for all assignments
    pub fn is_tautology(&self) -> bool {
        self.rows.iter().all(|row| row.result)
    }
}

fn bit(b: bool) -> char {
    match b {
        false => '0',
        true => '1',
    }
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for line in self.cells() {
            writeln!(
                f,
                "|{}|",
                line.iter().map(|c| format!("{:^3}", c)).join("|")
            )?;
        }
        Ok(())
    }
}
