use crate::Variable;
use thiserror::Error;

/// Error raised when a formula is rejected or used outside of its domain.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormulaError {
    /// A character outside of the formula alphabet
    #[error("Invalid symbol '{symbol}' at position {position}")]
    InvalidSymbol { symbol: char, position: usize },

    /// The formula has no symbol at all
    #[error("The formula is empty")]
    EmptyFormula,

    /// An operator is applied before enough operands are available
    #[error("Missing operand for '{symbol}' at position {position}")]
    MissingOperand { symbol: char, position: usize },

    /// Some operands are never consumed by an operator
    #[error("{0} operands are left unused")]
    UnusedOperands(usize),

    /// A variable was found where only Boolean values are allowed
    #[error("Unexpected variable '{0}' in an explicit formula")]
    UnexpectedVariable(Variable),

    /// A Boolean value was found where only variables are allowed
    #[error("Unexpected constant '{0}' in a variable formula")]
    UnexpectedValue(bool),

    /// No set was provided for a variable
    #[error("No set given for variable '{0}' ({1} sets available)")]
    MissingSet(Variable, usize),

    /// The formula is nested too deeply to be handled as an expression tree
    #[error("Formula nested {depth} levels deep, expression trees are limited to {limit}")]
    TooDeep { depth: usize, limit: usize },

    /// The evaluation stack was popped while empty
    #[error("Evaluation stack underflow")]
    StackUnderflow,
}
