use crate::variable::Iter;
use crate::{FormulaError, VarSet, Variable};
use std::fmt;
use std::iter::FromIterator;
use std::str::FromStr;

/// An assignment of Boolean values to variables, defined by the set of variables set to ```true```.
///
/// All other variables are implicitly ```false```.
///
/// ```
/// use rpnkit::{Assignment, Variable};
/// use std::convert::TryFrom;
///
/// let a = Variable::try_from('A').unwrap();
/// let b = Variable::try_from('B').unwrap();
///
/// let mut assignment = Assignment::default();
/// assignment.set(a, true);
/// assignment.set(b, false);
///
/// assert!(assignment.value(a));
/// assert!(!assignment.value(b));
///
/// // Parse the set of true variables
/// let parsed: Assignment = "A C".parse().unwrap();
/// assert_eq!(parsed.to_string(), "AC");
/// ```
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct Assignment {
    pub(crate) active: VarSet,
}

impl Assignment {
    /// Build the assignment numbered `row` in a list of `variables` where the last variable varies fastest
    ///
    /// The first variable is mapped to the most significant bit of the row number.
    pub fn from_row(variables: &[Variable], row: usize) -> Self {
        let n = variables.len();
        variables
            .iter()
            .enumerate()
            .filter(|(idx, _)| (row >> (n - 1 - idx)) & 1 == 1)
            .map(|(_, v)| *v)
            .collect()
    }

    /// Assign a value to the given variable
    pub fn set(&mut self, var: Variable, value: bool) {
        match value {
            true => self.active.insert(var),
            false => self.active.remove(var),
        }
    }

    /// Retrieve the value assigned to a specific variable
    pub fn value(&self, var: Variable) -> bool {
        self.active.contains(var)
    }

    /// Iterate over the variables set to ```true```
    pub fn iter_active(&self) -> Iter<'_> {
        self.active.iter()
    }
}

impl From<VarSet> for Assignment {
    fn from(active: VarSet) -> Self {
        Self { active }
    }
}

impl FromIterator<Variable> for Assignment {
    fn from_iter<I: IntoIterator<Item = Variable>>(iter: I) -> Self {
        Self::from(VarSet::from_iter(iter))
    }
}

impl FromStr for Assignment {
    type Err = FormulaError;

    fn from_str(descr: &str) -> Result<Assignment, FormulaError> {
        let vs: VarSet = descr.parse()?;
        Ok(Self::from(vs))
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.active)
    }
}
