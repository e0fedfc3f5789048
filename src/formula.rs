//! Validated postfix formulae

use crate::*;

use delegate::delegate;
use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

/// A well-formed Boolean formula in postfix (reverse Polish) notation.
///
/// A formula is an immutable sequence of [symbols](Symbol) where each operator follows its operand(s).
/// It can only be created by parsing a string, which checks that the formula is well-formed:
/// scanning the symbols from left to right, the size of the evaluation stack (+1 for each literal,
/// -1 for each binary operator) must remain strictly positive and end with exactly one operand.
///
/// ```
/// use rpnkit::{Formula, FormulaError};
/// # fn main() -> Result<(), FormulaError> {
///
/// let formula: Formula = "AB&C!|".parse()?;
/// assert_eq!(formula.len(), 6);
/// assert_eq!(formula.variables().to_string(), "ABC");
///
/// assert_eq!("AB".parse::<Formula>(), Err(FormulaError::UnusedOperands(2)));
/// assert!("A&".parse::<Formula>().is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Formula {
    symbols: Vec<Symbol>,
}

/// Hooks called by [Formula::fold] to compute a value from a postfix formula.
///
/// The fold maintains an explicit stack of items: literals push a new item, the negation replaces
/// the top item, and binary operators replace the two top items (```left``` was pushed first).
pub trait PostfixFold {
    type Item;

    /// Create the item for a fixed Boolean value
    fn value(&mut self, b: bool) -> Result<Self::Item, FormulaError>;

    /// Create the item for a variable
    fn variable(&mut self, var: Variable) -> Result<Self::Item, FormulaError>;

    /// Negate the top item
    fn negate(&mut self, item: Self::Item) -> Result<Self::Item, FormulaError>;

    /// Combine the two top items
    fn combine(
        &mut self,
        op: Operator,
        left: Self::Item,
        right: Self::Item,
    ) -> Result<Self::Item, FormulaError>;
}

impl Formula {
    /// Wrap a sequence of symbols which is already known to be well-formed
    pub(crate) fn from_valid_symbols(symbols: Vec<Symbol>) -> Self {
        debug_assert!(check_depth(symbols.iter().copied().map(Ok)).is_ok());
        Self { symbols }
    }

    /// Build a formula from a sequence of symbols, checking that it is well-formed
    pub fn from_symbols(symbols: Vec<Symbol>) -> Result<Self, FormulaError> {
        check_depth(symbols.iter().copied().map(Ok))?;
        Ok(Self { symbols })
    }

    delegate! {
        to self.symbols {
            /// Number of symbols in the formula
            pub fn len(&self) -> usize;

            /// Always false for a well-formed formula
            pub fn is_empty(&self) -> bool;

            /// Iterate over the symbols of the formula
            pub fn iter(&self) -> std::slice::Iter<'_, Symbol>;
        }
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Collect the set of variables used in this formula
    pub fn variables(&self) -> VarSet {
        self.symbols
            .iter()
            .filter_map(|s| match s {
                Symbol::Variable(v) => Some(*v),
                _ => None,
            })
            .collect()
    }

    /// Test if the formula contains at least one variable
    pub fn has_variables(&self) -> bool {
        self.symbols.iter().any(|s| matches!(s, Symbol::Variable(_)))
    }

    /// Test if the formula contains at least one fixed Boolean value
    pub fn has_values(&self) -> bool {
        self.symbols.iter().any(|s| matches!(s, Symbol::Value(_)))
    }

    /// An explicit formula contains no variable and can be evaluated directly
    pub fn is_explicit(&self) -> bool {
        !self.has_variables()
    }

    /// A variable formula contains no fixed Boolean value
    pub fn is_variable_formula(&self) -> bool {
        !self.has_values()
    }

    /// Replace all variables by their value in the given assignment, giving an explicit formula
    pub fn substitute(&self, assignment: &Assignment) -> Formula {
        let symbols = self
            .symbols
            .iter()
            .map(|s| match s {
                Symbol::Variable(v) => Symbol::Value(assignment.value(*v)),
                _ => *s,
            })
            .collect();
        Self { symbols }
    }

    /// Run the postfix stack machine, delegating the computation of each item to the folder
    pub fn fold<F: PostfixFold>(&self, folder: &mut F) -> Result<F::Item, FormulaError> {
        let mut stack: Vec<F::Item> = Vec::with_capacity(self.symbols.len());
        for symbol in &self.symbols {
            let item = match *symbol {
                Symbol::Value(b) => folder.value(b)?,
                Symbol::Variable(var) => folder.variable(var)?,
                Symbol::Not => {
                    let item = pop(&mut stack)?;
                    folder.negate(item)?
                }
                Symbol::Binary(op) => {
                    let right = pop(&mut stack)?;
                    let left = pop(&mut stack)?;
                    folder.combine(op, left, right)?
                }
            };
            stack.push(item);
        }

        let result = pop(&mut stack)?;
        match stack.len() {
            0 => Ok(result),
            n => Err(FormulaError::UnusedOperands(n + 1)),
        }
    }

    /// Length of the longest path from the last operator to a literal, counting both ends
    pub fn nesting_depth(&self) -> Result<usize, FormulaError> {
        self.fold(&mut DepthCounter)
    }
}

struct DepthCounter;

impl PostfixFold for DepthCounter {
    type Item = usize;

    fn value(&mut self, _: bool) -> Result<usize, FormulaError> {
        Ok(1)
    }

    fn variable(&mut self, _: Variable) -> Result<usize, FormulaError> {
        Ok(1)
    }

    fn negate(&mut self, depth: usize) -> Result<usize, FormulaError> {
        Ok(depth + 1)
    }

    fn combine(&mut self, _: Operator, left: usize, right: usize) -> Result<usize, FormulaError> {
        Ok(left.max(right) + 1)
    }
}

fn pop<T>(stack: &mut Vec<T>) -> Result<T, FormulaError> {
    stack.pop().ok_or(FormulaError::StackUnderflow)
}

/// Track the size of the evaluation stack along a sequence of symbols.
///
/// Fails as soon as an operator lacks operands, or at the end if the stack does not hold a single operand.
fn check_depth<I>(symbols: I) -> Result<(), FormulaError>
where
    I: IntoIterator<Item = Result<Symbol, FormulaError>>,
{
    let mut depth: isize = 0;
    for (position, symbol) in symbols.into_iter().enumerate() {
        let symbol = symbol?;
        depth += symbol.depth_delta();
        if depth <= 0 {
            return Err(FormulaError::MissingOperand {
                symbol: symbol.as_char(),
                position,
            });
        }
    }
    match depth {
        0 => Err(FormulaError::EmptyFormula),
        1 => Ok(()),
        n => Err(FormulaError::UnusedOperands(n as usize)),
    }
}

fn parse_symbol(position: usize, c: char) -> Result<Symbol, FormulaError> {
    Symbol::try_from(c).map_err(|_| FormulaError::InvalidSymbol {
        symbol: c,
        position,
    })
}

impl FromStr for Formula {
    type Err = FormulaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols = s
            .chars()
            .enumerate()
            .map(|(position, c)| parse_symbol(position, c))
            .collect::<Result<Vec<Symbol>, FormulaError>>()?;
        Self::from_symbols(symbols)
    }
}

impl TryFrom<&str> for Formula {
    type Error = FormulaError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl AsRef<[Symbol]> for Formula {
    fn as_ref(&self) -> &[Symbol] {
        &self.symbols
    }
}

impl<'a> IntoIterator for &'a Formula {
    type Item = &'a Symbol;
    type IntoIter = std::slice::Iter<'a, Symbol>;

    fn into_iter(self) -> Self::IntoIter {
        self.symbols.iter()
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for s in &self.symbols {
            write!(f, "{}", s)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::*;
    use std::convert::TryFrom;

    #[test]
    fn parse_and_display() -> Result<(), FormulaError> {
        for s in ["A", "1", "AB&", "A!B!&C!|", "ABCDE====", "10|1&"] {
            let formula: Formula = s.parse()?;
            assert_eq!(formula.to_string(), s);
        }
        Ok(())
    }

    #[test]
    fn rejection_reasons() {
        assert_eq!("".parse::<Formula>(), Err(FormulaError::EmptyFormula));
        assert_eq!(
            "!1".parse::<Formula>(),
            Err(FormulaError::MissingOperand {
                symbol: '!',
                position: 0
            })
        );
        assert_eq!(
            "10||".parse::<Formula>(),
            Err(FormulaError::MissingOperand {
                symbol: '|',
                position: 3
            })
        );
        assert_eq!(
            "ABC|".parse::<Formula>(),
            Err(FormulaError::UnusedOperands(2))
        );
        assert_eq!(
            "42&".parse::<Formula>(),
            Err(FormulaError::InvalidSymbol {
                symbol: '4',
                position: 0
            })
        );
        assert_eq!(
            "AB &".parse::<Formula>(),
            Err(FormulaError::InvalidSymbol {
                symbol: ' ',
                position: 2
            })
        );
    }

    #[test]
    fn content_flags() -> Result<(), FormulaError> {
        let explicit: Formula = "10|1&".parse()?;
        assert!(explicit.is_explicit());
        assert!(!explicit.is_variable_formula());

        let variables: Formula = "ZA|A&".parse()?;
        assert!(!variables.is_explicit());
        assert!(variables.is_variable_formula());
        assert_eq!(variables.variables().to_string(), "AZ");

        let mixed: Formula = "A1&".parse()?;
        assert!(!mixed.is_explicit());
        assert!(!mixed.is_variable_formula());
        Ok(())
    }

    #[test]
    fn conversions() -> Result<(), FormulaError> {
        let formula = Formula::try_from("AB&C!|")?;
        let symbols: &[Symbol] = formula.as_ref();
        assert_eq!(symbols, formula.symbols());
        assert_eq!(symbols[2], Symbol::Binary(Operator::And));
        assert_eq!((&formula).into_iter().count(), 6);
        assert_eq!(Formula::try_from("A&"), "A&".parse::<Formula>());
        Ok(())
    }

    #[test]
    fn nesting_depth() -> Result<(), FormulaError> {
        assert_eq!("A".parse::<Formula>()?.nesting_depth()?, 1);
        assert_eq!("A!!".parse::<Formula>()?.nesting_depth()?, 3);
        assert_eq!("AB&C!|".parse::<Formula>()?.nesting_depth()?, 3);
        assert_eq!("ABC&&D|!".parse::<Formula>()?.nesting_depth()?, 5);

        let chain: Formula = format!("A{}", "B&".repeat(20_000)).parse()?;
        assert_eq!(chain.nesting_depth()?, 20_001);
        Ok(())
    }

    #[test]
    fn substitution() -> Result<(), FormulaError> {
        let formula: Formula = "AB&A!|".parse()?;
        let assignment: Assignment = "A".parse()?;
        assert_eq!(formula.substitute(&assignment).to_string(), "10&1!|");
        Ok(())
    }

    #[test]
    fn from_symbols() {
        let symbols = vec![
            Symbol::from(Variable::new(0).unwrap()),
            Symbol::Not,
            Symbol::Value(true),
            Symbol::from(Operator::Or),
        ];
        assert_eq!(
            Formula::from_symbols(symbols).map(|f| f.to_string()),
            Ok("A!1|".to_string())
        );
        assert!(Formula::from_symbols(vec![Symbol::Not]).is_err());
    }
}
