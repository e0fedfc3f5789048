//! Predicates on raw formula strings.
//!
//! These functions never fail: any string which is not a well-formed formula of the
//! expected kind is simply rejected.

use crate::*;

use itertools::Itertools;

/// Test if a string is a well-formed postfix formula
///
/// ```
/// use rpnkit::is_valid_formula;
///
/// assert!(is_valid_formula("A"));
/// assert!(is_valid_formula("AB&"));
/// assert!(!is_valid_formula("AB"));
/// assert!(!is_valid_formula("ABC|"));
/// assert!(!is_valid_formula(""));
/// ```
pub fn is_valid_formula(formula: &str) -> bool {
    formula.parse::<Formula>().is_ok()
}

/// Test if a string is a well-formed formula without variables
pub fn is_valid_explicit_formula(formula: &str) -> bool {
    matches!(formula.parse::<Formula>(), Ok(f) if f.is_explicit())
}

/// Test if a string is a well-formed formula without fixed Boolean values
pub fn is_valid_variable_formula(formula: &str) -> bool {
    matches!(formula.parse::<Formula>(), Ok(f) if f.is_variable_formula())
}

/// Test if a string is a formula in negation normal form.
///
/// A NNF formula is a variable formula which uses only the ```!```, ```&``` and ```|``` operators
/// and where negations are applied only to variables: each ```!``` directly follows a variable.
/// The single constants ```0``` and ```1``` are also accepted as they denote the NNF of
/// contradictions and tautologies.
pub fn is_nnf(formula: &str) -> bool {
    if formula == "0" || formula == "1" {
        return true;
    }
    match formula.parse::<Formula>() {
        Ok(f) => is_nnf_symbols(f.symbols()),
        Err(_) => false,
    }
}

/// Test if a string is a formula in conjunctive normal form.
///
/// A CNF formula is a NNF formula which is a conjunction of clauses, where each
/// clause is a disjunction of (possibly negated) variables.
pub fn is_cnf(formula: &str) -> bool {
    if !is_nnf(formula) {
        return false;
    }
    match formula.parse::<Formula>().and_then(|f| f.fold(&mut CnfShape)) {
        Ok(shape) => shape != Shape::Other,
        Err(_) => false,
    }
}

/// Shape of a NNF subformula, from the most to the least restricted
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Shape {
    Literal,
    Clause,
    Conjunction,
    Other,
}

struct CnfShape;

impl PostfixFold for CnfShape {
    type Item = Shape;

    fn value(&mut self, _: bool) -> Result<Shape, FormulaError> {
        Ok(Shape::Literal)
    }

    fn variable(&mut self, _: Variable) -> Result<Shape, FormulaError> {
        Ok(Shape::Literal)
    }

    fn negate(&mut self, shape: Shape) -> Result<Shape, FormulaError> {
        match shape {
            Shape::Literal => Ok(Shape::Literal),
            _ => Ok(Shape::Other),
        }
    }

    fn combine(&mut self, op: Operator, left: Shape, right: Shape) -> Result<Shape, FormulaError> {
        use Shape::*;
        Ok(match (op, left, right) {
            (_, Other, _) | (_, _, Other) => Other,
            (Operator::Or, Literal | Clause, Literal | Clause) => Clause,
            (Operator::Or, _, _) => Other,
            (Operator::And, _, _) => Conjunction,
            _ => Other,
        })
    }
}

fn is_nnf_symbols(symbols: &[Symbol]) -> bool {
    let standard = symbols.iter().all(|s| match s {
        Symbol::Variable(_) | Symbol::Not => true,
        Symbol::Binary(op) => op.is_standard(),
        Symbol::Value(_) => false,
    });
    standard
        && symbols
            .iter()
            .tuple_windows()
            .all(|(a, b)| *b != Symbol::Not || matches!(a, Symbol::Variable(_)))
}
