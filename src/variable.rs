//! Propositional variables and sets of variables

use crate::*;

use bit_set::BitSet;
use std::convert::TryFrom;
use std::fmt;
use std::iter::FromIterator;
use std::str::FromStr;

/// Number of available variables (one per uppercase letter).
pub const VARIABLE_COUNT: usize = 26;

/// A single propositional variable, named by an uppercase letter.
///
/// Internally, a variable is identified by the index of its letter (```A``` is 0, ```Z``` is 25).
/// The natural order of variables is the alphabetical order of their names.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct Variable(pub(crate) u8);

impl Variable {
    /// Retrieve the variable for a specific index, if it is in range
    pub fn new(uid: usize) -> Option<Self> {
        match uid < VARIABLE_COUNT {
            true => Some(Self(uid as u8)),
            false => None,
        }
    }

    /// Return the internal index of the variable
    pub fn uid(&self) -> usize {
        self.0 as usize
    }

    /// Return the letter naming this variable
    pub fn name(&self) -> char {
        char::from(b'A' + self.0)
    }

    /// Iterate over all available variables in alphabetical order
    pub fn all() -> impl Iterator<Item = Variable> {
        (0..VARIABLE_COUNT as u8).map(Variable)
    }
}

impl TryFrom<char> for Variable {
    type Error = FormulaError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'A'..='Z' => Ok(Self(c as u8 - b'A')),
            _ => Err(FormulaError::InvalidSymbol {
                symbol: c,
                position: 0,
            }),
        }
    }
}

impl FromStr for Variable {
    type Err = FormulaError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let mut chars = name.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Variable::try_from(c),
            (None, _) => Err(FormulaError::EmptyFormula),
            (Some(_), Some(c)) => Err(FormulaError::InvalidSymbol {
                symbol: c,
                position: 1,
            }),
        }
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A set of variables with efficient bitwise operations.
///
/// A VarSet is an abstraction over [BitSet], iterating over its variables in alphabetical order.
///
/// ```
/// use rpnkit::{VarSet, Variable};
/// use std::convert::TryFrom;
///
/// let mut vs = VarSet::default();
/// vs.insert(Variable::try_from('C').unwrap());
/// vs.insert(Variable::try_from('A').unwrap());
///
/// assert_eq!(vs.len(), 2);
/// assert_eq!(vs.to_string(), "AC");
/// ```
#[derive(Clone, PartialEq, Eq, Default, Debug)]
pub struct VarSet {
    variables: BitSet,
}

impl VarSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable to this set
    pub fn insert(&mut self, var: Variable) {
        self.variables.insert(var.uid());
    }

    /// Remove a variable from this set
    pub fn remove(&mut self, var: Variable) {
        self.variables.remove(var.uid());
    }

    /// Test if a specific variable is in this set
    pub fn contains(&self, var: Variable) -> bool {
        self.variables.contains(var.uid())
    }

    /// Add all variables from the other set
    pub fn union_with(&mut self, vars: &Self) {
        self.variables.union_with(&vars.variables);
    }

    /// Return the number of variables in this set
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Return whether there are no selected variable in this set
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Create an iterator over the contained variables
    pub fn iter(&self) -> Iter<'_> {
        self.into_iter()
    }
}

impl FromIterator<Variable> for VarSet {
    fn from_iter<I: IntoIterator<Item = Variable>>(iter: I) -> Self {
        let mut vs = VarSet::default();
        vs.extend(iter);
        vs
    }
}

impl Extend<Variable> for VarSet {
    fn extend<T: IntoIterator<Item = Variable>>(&mut self, iter: T) {
        for v in iter {
            self.insert(v);
        }
    }
}

impl fmt::Display for VarSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for v in self {
            write!(f, "{}", v)?;
        }
        Ok(())
    }
}

/// Parse a set of variables from the letters of a string, ignoring spaces and commas
impl FromStr for VarSet {
    type Err = FormulaError;

    fn from_str(descr: &str) -> Result<Self, FormulaError> {
        let mut s = Self::default();
        for (position, c) in descr.chars().enumerate() {
            match c {
                ' ' | '\t' | ',' => (),
                _ => s.insert(
                    Variable::try_from(c)
                        .map_err(|_| FormulaError::InvalidSymbol { symbol: c, position })?,
                ),
            };
        }
        Ok(s)
    }
}

/// Iterate over variables in a [VarSet]
pub struct Iter<'a>(bit_set::Iter<'a, u32>);

impl Iterator for Iter<'_> {
    type Item = Variable;
    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|uid| Variable(uid as u8))
    }
}

impl<'a> IntoIterator for &'a VarSet {
    type Item = Variable;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        Iter(self.variables.iter())
    }
}

#[cfg(test)]
mod tests {
    use crate::*;
    use core::str::FromStr;
    use std::convert::TryFrom;

    #[test]
    fn variable_names() -> Result<(), FormulaError> {
        assert_eq!(Variable::try_from('A')?.uid(), 0);
        assert_eq!(Variable::try_from('Z')?.uid(), 25);
        assert_eq!(Variable::from_str(" Q ")?.name(), 'Q');

        assert!(Variable::try_from('a').is_err());
        assert!(Variable::try_from('0').is_err());
        assert!(Variable::from_str("AB").is_err());
        assert!(Variable::from_str("").is_err());

        assert_eq!(Variable::new(26), None);
        assert_eq!(Variable::all().count(), VARIABLE_COUNT);
        Ok(())
    }

    #[test]
    fn sorted_variable_set() -> Result<(), FormulaError> {
        let vs = VarSet::from_str("Z, C A C")?;
        assert_eq!(vs.len(), 3);
        assert_eq!(vs.to_string(), "ACZ");

        let names: Vec<char> = vs.iter().map(|v| v.name()).collect();
        assert_eq!(names, vec!['A', 'C', 'Z']);

        let mut other = VarSet::from_str("B")?;
        other.union_with(&vs);
        assert_eq!(other.to_string(), "ABCZ");
        other.remove(Variable::try_from('Z')?);
        assert!(!other.contains(Variable::try_from('Z')?));

        assert!(VarSet::from_str("A1").is_err());
        Ok(())
    }
}
