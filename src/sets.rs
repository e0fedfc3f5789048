//! Formulae interpreted over sets of integers

use crate::*;

use log::debug;
use std::collections::BTreeSet;

/// List all subsets of a set of integers.
///
/// Subsets are listed by deciding successively, for each element, to leave it out first, then to include it.
///
/// ```
/// use rpnkit::powerset;
///
/// assert_eq!(powerset(&[1, 2]), vec![vec![], vec![2], vec![1], vec![1, 2]]);
/// ```
pub fn powerset(set: &[i32]) -> Vec<Vec<i32>> {
    let mut subsets = Vec::new();
    let mut current = Vec::with_capacity(set.len());
    collect_subsets(set, &mut current, &mut subsets);
    subsets
}

fn collect_subsets(rest: &[i32], current: &mut Vec<i32>, subsets: &mut Vec<Vec<i32>>) {
    match rest.split_first() {
        None => subsets.push(current.clone()),
        Some((first, rest)) => {
            collect_subsets(rest, current, subsets);
            current.push(*first);
            collect_subsets(rest, current, subsets);
            current.pop();
        }
    }
}

/// Evaluate a formula where each variable denotes a set.
///
/// The variable ```A``` is the first set, ```B``` the second one and so on.
/// The negation is the complement in the union of all given sets, which also
/// defines the value of the constant ```1```. The result is sorted.
///
/// ```
/// use rpnkit::{eval_set, FormulaError};
/// # fn main() -> Result<(), FormulaError> {
///
/// let sets = [vec![0, 1, 2], vec![0, 3, 4]];
/// assert_eq!(eval_set("AB&", &sets)?, vec![0]);
/// assert_eq!(eval_set("AB|", &sets)?, vec![0, 1, 2, 3, 4]);
/// assert_eq!(eval_set("A!", &sets)?, vec![3, 4]);
/// # Ok(())
/// # }
/// ```
pub fn eval_set(formula: &str, sets: &[Vec<i32>]) -> Result<Vec<i32>, FormulaError> {
    let formula: Formula = formula.parse()?;
    let result = formula.fold(&mut SetEvaluator::new(sets))?;
    debug!("eval_set({}) over {} sets: {:?}", formula, sets.len(), result);
    Ok(result.into_iter().collect())
}

/// Compute sets of integers with the set operations matching each Boolean operator
pub struct SetEvaluator {
    sets: Vec<BTreeSet<i32>>,
    universe: BTreeSet<i32>,
}

impl SetEvaluator {
    pub fn new(sets: &[Vec<i32>]) -> Self {
        let sets: Vec<BTreeSet<i32>> = sets.iter().map(|s| s.iter().copied().collect()).collect();
        let universe = sets.iter().flatten().copied().collect();
        Self { sets, universe }
    }

    fn complement(&self, set: &BTreeSet<i32>) -> BTreeSet<i32> {
        self.universe.difference(set).copied().collect()
    }
}

impl PostfixFold for SetEvaluator {
    type Item = BTreeSet<i32>;

    fn value(&mut self, b: bool) -> Result<Self::Item, FormulaError> {
        match b {
            false => Ok(BTreeSet::new()),
            true => Ok(self.universe.clone()),
        }
    }

    fn variable(&mut self, var: Variable) -> Result<Self::Item, FormulaError> {
        self.sets
            .get(var.uid())
            .cloned()
            .ok_or(FormulaError::MissingSet(var, self.sets.len()))
    }

    fn negate(&mut self, item: Self::Item) -> Result<Self::Item, FormulaError> {
        Ok(self.complement(&item))
    }

    fn combine(
        &mut self,
        op: Operator,
        left: Self::Item,
        right: Self::Item,
    ) -> Result<Self::Item, FormulaError> {
        let result = match op {
            Operator::And => left.intersection(&right).copied().collect(),
            Operator::Or => left.union(&right).copied().collect(),
            Operator::Xor => left.symmetric_difference(&right).copied().collect(),
            Operator::Implication => self.complement(&left).union(&right).copied().collect(),
            Operator::Equivalence => {
                let diff: BTreeSet<i32> = left.symmetric_difference(&right).copied().collect();
                self.complement(&diff)
            }
        };
        Ok(result)
    }
}
