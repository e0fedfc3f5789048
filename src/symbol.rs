//! The alphabet of postfix formulae

use crate::*;

use std::convert::TryFrom;
use std::fmt;

/// Symbols denoting a Boolean constant
pub const VALUE_SYMBOLS: &str = "01";

/// Symbol of the negation, the only unary operator
pub const NOT_SYMBOL: char = '!';

/// Symbols of the binary operators
pub const BINARY_SYMBOLS: &str = "|&^>=";

/// Binary Boolean operators.
///
/// In postfix formulae, the operand pushed first is the left operand.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Operator {
    /// OR operator: at least one operand needs to be true
    Or,
    /// AND operator: both operands need to be true
    And,
    /// XOR operator: exactly one operand is true
    Xor,
    /// Material implication: false only if the left operand is true and the right one false
    Implication,
    /// Equivalence: both operands have the same value
    Equivalence,
}

/// A single symbol of a postfix formula.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Symbol {
    /// A fixed Boolean value (```0``` or ```1```)
    Value(bool),
    /// A variable (```A``` to ```Z```)
    Variable(Variable),
    /// The negation of the top operand (```!```)
    Not,
    /// A binary operation on the two top operands
    Binary(Operator),
}

impl Operator {
    pub const ALL: [Operator; 5] = [
        Operator::Or,
        Operator::And,
        Operator::Xor,
        Operator::Implication,
        Operator::Equivalence,
    ];

    /// The postfix symbol of this operator
    pub fn symbol(self) -> char {
        match self {
            Operator::Or => '|',
            Operator::And => '&',
            Operator::Xor => '^',
            Operator::Implication => '>',
            Operator::Equivalence => '=',
        }
    }

    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '|' => Some(Operator::Or),
            '&' => Some(Operator::And),
            '^' => Some(Operator::Xor),
            '>' => Some(Operator::Implication),
            '=' => Some(Operator::Equivalence),
            _ => None,
        }
    }

    /// Apply the operator, ```a``` being the operand pushed first
    pub fn apply(self, a: bool, b: bool) -> bool {
        match self {
            Operator::Or => a | b,
            Operator::And => a & b,
            Operator::Xor => a ^ b,
            Operator::Implication => !a | b,
            Operator::Equivalence => a == b,
        }
    }

    /// Test if this operator is allowed in negation normal forms
    pub fn is_standard(self) -> bool {
        matches!(self, Operator::And | Operator::Or)
    }

    /// Swap AND and OR, other operators are unchanged
    pub fn dual(self) -> Self {
        match self {
            Operator::And => Operator::Or,
            Operator::Or => Operator::And,
            _ => self,
        }
    }

    /// Define the priority of operators
    ///
    /// This priority controls the addition of necessary parenthesis when formatting infix expressions.
    pub fn priority(self) -> u8 {
        match self {
            Operator::And => 5,
            Operator::Xor => 4,
            Operator::Or => 3,
            Operator::Implication => 2,
            Operator::Equivalence => 1,
        }
    }
}

impl Symbol {
    /// Change of the evaluation stack size caused by this symbol
    pub fn depth_delta(self) -> isize {
        match self {
            Symbol::Value(_) | Symbol::Variable(_) => 1,
            Symbol::Not => 0,
            Symbol::Binary(_) => -1,
        }
    }

    /// The character representing this symbol
    pub fn as_char(self) -> char {
        match self {
            Symbol::Value(false) => '0',
            Symbol::Value(true) => '1',
            Symbol::Variable(v) => v.name(),
            Symbol::Not => NOT_SYMBOL,
            Symbol::Binary(op) => op.symbol(),
        }
    }
}

impl TryFrom<char> for Symbol {
    type Error = FormulaError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '0' => Ok(Symbol::Value(false)),
            '1' => Ok(Symbol::Value(true)),
            NOT_SYMBOL => Ok(Symbol::Not),
            'A'..='Z' => Variable::try_from(c).map(Symbol::Variable),
            _ => Operator::from_symbol(c)
                .map(Symbol::Binary)
                .ok_or(FormulaError::InvalidSymbol {
                    symbol: c,
                    position: 0,
                }),
        }
    }
}

impl From<Variable> for Symbol {
    fn from(var: Variable) -> Self {
        Symbol::Variable(var)
    }
}

impl From<bool> for Symbol {
    fn from(b: bool) -> Self {
        Symbol::Value(b)
    }
}

impl From<Operator> for Symbol {
    fn from(op: Operator) -> Self {
        Symbol::Binary(op)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
