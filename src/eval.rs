//! Evaluation of formulae with a Boolean stack

use crate::*;

use log::trace;

/// Evaluate an explicit formula: a well-formed formula without variables.
///
/// ```
/// use rpnkit::{eval_formula, FormulaError};
/// # fn main() -> Result<(), FormulaError> {
///
/// assert!(eval_formula("01|")?);
/// assert!(!eval_formula("10>")?);
/// assert!(eval_formula("1011||=")?);
///
/// assert!(eval_formula("A1&").is_err());
/// assert!(eval_formula("111|").is_err());
/// # Ok(())
/// # }
/// ```
pub fn eval_formula(formula: &str) -> Result<bool, FormulaError> {
    formula.parse::<Formula>()?.eval()
}

/// Compute Boolean values, rejecting variables.
pub struct ExplicitEvaluator;

/// Compute Boolean values, looking up variables in an assignment.
pub struct AssignmentEvaluator<'a>(pub &'a Assignment);

impl PostfixFold for ExplicitEvaluator {
    type Item = bool;

    fn value(&mut self, b: bool) -> Result<bool, FormulaError> {
        Ok(b)
    }

    fn variable(&mut self, var: Variable) -> Result<bool, FormulaError> {
        Err(FormulaError::UnexpectedVariable(var))
    }

    fn negate(&mut self, item: bool) -> Result<bool, FormulaError> {
        Ok(!item)
    }

    fn combine(&mut self, op: Operator, left: bool, right: bool) -> Result<bool, FormulaError> {
        Ok(op.apply(left, right))
    }
}

impl PostfixFold for AssignmentEvaluator<'_> {
    type Item = bool;

    fn value(&mut self, b: bool) -> Result<bool, FormulaError> {
        Ok(b)
    }

    fn variable(&mut self, var: Variable) -> Result<bool, FormulaError> {
        Ok(self.0.value(var))
    }

    fn negate(&mut self, item: bool) -> Result<bool, FormulaError> {
        Ok(!item)
    }

    fn combine(&mut self, op: Operator, left: bool, right: bool) -> Result<bool, FormulaError> {
        Ok(op.apply(left, right))
    }
}

impl Formula {
    /// Evaluate an explicit formula
    ///
    /// Fails with [FormulaError::UnexpectedVariable] if the formula contains a variable.
    pub fn eval(&self) -> Result<bool, FormulaError> {
        self.fold(&mut ExplicitEvaluator)
    }

    /// Evaluate the formula, variables taking their value in the given assignment
    pub fn eval_with(&self, assignment: &Assignment) -> Result<bool, FormulaError> {
        self.fold(&mut AssignmentEvaluator(assignment))
    }

    /// Test if two formulae have the same value for all assignments of their variables
    pub fn is_equivalent(&self, other: &Formula) -> Result<bool, FormulaError> {
        let mut variables = self.variables();
        variables.union_with(&other.variables());
        let variables: Vec<Variable> = variables.iter().collect();
        for row in 0..(1usize << variables.len()) {
            let assignment = Assignment::from_row(&variables, row);
            if self.eval_with(&assignment)? != other.eval_with(&assignment)? {
                trace!("{} and {} differ on '{}'", self, other, assignment);
                return Ok(false);
            }
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use crate::*;
    use test_log::test;

    #[test]
    fn eval_unary() -> Result<(), FormulaError> {
        assert!(!eval_formula("0")?);
        assert!(eval_formula("1")?);
        assert!(eval_formula("0!")?);
        assert!(!eval_formula("1!")?);
        Ok(())
    }

    #[test]
    fn eval_binary() -> Result<(), FormulaError> {
        let cases = [
            ('|', [false, true, true, true]),
            ('&', [false, false, false, true]),
            ('^', [false, true, true, false]),
            ('>', [true, true, false, true]),
            ('=', [true, false, false, true]),
        ];
        for (op, expected) in cases {
            for (idx, operands) in ["00", "01", "10", "11"].iter().enumerate() {
                let formula = format!("{}{}", operands, op);
                assert_eq!(eval_formula(&formula)?, expected[idx], "{}", formula);
            }
        }
        Ok(())
    }

    #[test]
    fn eval_nested() -> Result<(), FormulaError> {
        assert!(eval_formula("10|1&")?);
        assert!(eval_formula("1011||=")?);
        assert!(eval_formula("1!1|")?);
        assert!(eval_formula("111^^")?);
        assert!(!eval_formula("1111^^^")?);
        assert!(!eval_formula("000==")?);
        assert!(eval_formula("111==")?);
        Ok(())
    }

    #[test]
    fn eval_right_nested_implications() -> Result<(), FormulaError> {
        // a > (b > c): false only for a=1, b=1, c=0
        for bits in ["000", "001", "010", "011", "100", "101", "111"] {
            assert!(eval_formula(&format!("{}>>", bits))?, "{}", bits);
        }
        assert!(!eval_formula("110>>")?);
        Ok(())
    }

    #[test]
    fn eval_rejects_invalid_input() {
        assert_eq!(eval_formula(""), Err(FormulaError::EmptyFormula));
        assert!(matches!(
            eval_formula("!1"),
            Err(FormulaError::MissingOperand { .. })
        ));
        assert!(matches!(
            eval_formula("42&"),
            Err(FormulaError::InvalidSymbol { .. })
        ));
        assert!(matches!(
            eval_formula("10||"),
            Err(FormulaError::MissingOperand { .. })
        ));
        assert_eq!(eval_formula("111|"), Err(FormulaError::UnusedOperands(2)));
        assert_eq!(
            eval_formula("1A|"),
            Err(FormulaError::UnexpectedVariable(Variable::new(0).unwrap()))
        );
    }

    #[test]
    fn eval_with_assignment() -> Result<(), FormulaError> {
        let formula: Formula = "AB>".parse()?;
        let assignment = |s: &str| s.parse::<Assignment>();
        assert!(formula.eval_with(&assignment("")?)?);
        assert!(formula.eval_with(&assignment("B")?)?);
        assert!(!formula.eval_with(&assignment("A")?)?);
        assert!(formula.eval_with(&assignment("AB")?)?);
        Ok(())
    }

    #[test]
    fn equivalence() -> Result<(), FormulaError> {
        let f: Formula = "AB>".parse()?;
        let g: Formula = "A!B|".parse()?;
        let h: Formula = "AB|".parse()?;
        assert!(f.is_equivalent(&g)?);
        assert!(!f.is_equivalent(&h)?);

        // variables missing on one side are still enumerated
        let taut: Formula = "AA!|".parse()?;
        assert!(taut.is_equivalent(&"1".parse::<Formula>()?)?);
        assert!(!taut.is_equivalent(&"B".parse::<Formula>()?)?);
        Ok(())
    }
}
