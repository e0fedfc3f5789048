//! Rewrite formulae into negation and conjunctive normal forms
//!
//! Both rewrites run on the postfix stack of [Formula::fold]: each operand on the stack is a
//! rewritten sub-formula, so arbitrarily long formulae are handled without recursion.

use crate::*;

use log::debug;

/// Rewrite a formula into an equivalent NNF (Negation Normal Form).
///
/// The result uses only the ```!```, ```&``` and ```|``` operators, with negations applied
/// only to variables. Fixed values are folded away: a formula which does not depend on its
/// variables is rewritten as ```0``` or ```1```.
///
/// ```
/// use rpnkit::{is_nnf, negation_normal_form, FormulaError};
/// # fn main() -> Result<(), FormulaError> {
///
/// assert_eq!(negation_normal_form("AB&!")?, "A!B!|");
/// assert_eq!(negation_normal_form("AB>")?, "A!B|");
/// assert_eq!(negation_normal_form("A!!")?, "A");
/// assert!(is_nnf(&negation_normal_form("AB|C&!")?));
/// # Ok(())
/// # }
/// ```
pub fn negation_normal_form(formula: &str) -> Result<String, FormulaError> {
    Ok(formula.parse::<Formula>()?.negation_normal_form()?.to_string())
}

/// Rewrite a formula into an equivalent CNF (Conjunctive Normal Form).
///
/// The result is a conjunction of clauses, where each clause is a disjunction of (possibly negated) variables.
///
/// ```
/// use rpnkit::{conjunctive_normal_form, FormulaError};
/// # fn main() -> Result<(), FormulaError> {
///
/// assert_eq!(conjunctive_normal_form("AB|C&")?, "AB|C&");
/// assert_eq!(conjunctive_normal_form("AB&C|")?, "AC|BC|&");
/// # Ok(())
/// # }
/// ```
pub fn conjunctive_normal_form(formula: &str) -> Result<String, FormulaError> {
    Ok(formula.parse::<Formula>()?.conjunctive_normal_form()?.to_string())
}

impl Formula {
    /// Equivalent formula in negation normal form
    ///
    /// Double negations cancel out, the XOR, implication and equivalence operators are replaced
    /// using only AND, OR and NOT, fixed values are folded into their parent operations and
    /// negations are pushed down to the variables with De Morgan's laws.
    pub fn negation_normal_form(&self) -> Result<Formula, FormulaError> {
        let nnf = match self.fold(&mut NnfBuilder)? {
            NnfItem::Fixed(b) => Formula::from_valid_symbols(vec![Symbol::Value(b)]),
            NnfItem::Rewritten { positive, .. } => Formula::from_valid_symbols(positive),
        };
        debug!("nnf({}) = {}", self, nnf);
        Ok(nnf)
    }

    /// Equivalent formula in conjunctive normal form
    ///
    /// The NNF of the formula is computed first, then disjunctions are distributed over conjunctions.
    pub fn conjunctive_normal_form(&self) -> Result<Formula, FormulaError> {
        let clauses = self.negation_normal_form()?.fold(&mut ClauseBuilder)?;
        let cnf = clauses_to_formula(&clauses);
        debug!("cnf({}) = {} ({} clauses)", self, cnf, clauses.len());
        Ok(cnf)
    }
}

/// A sub-formula rewritten in NNF.
///
/// The NNF of the negated sub-formula is kept along, negating an operand then amounts to swapping both forms.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NnfItem {
    /// The sub-formula does not depend on its variables
    Fixed(bool),

    /// Postfix symbols of the NNF of the sub-formula and of its negation
    Rewritten {
        positive: Vec<Symbol>,
        negative: Vec<Symbol>,
    },
}

/// Rewrite each operand on the postfix stack into its NNF
pub struct NnfBuilder;

impl NnfItem {
    fn negated(self) -> Self {
        match self {
            NnfItem::Fixed(b) => NnfItem::Fixed(!b),
            NnfItem::Rewritten { positive, negative } => NnfItem::Rewritten {
                positive: negative,
                negative: positive,
            },
        }
    }
}

/// Append the right operand and the operator to the left operand
fn joined(mut left: Vec<Symbol>, right: &[Symbol], op: Operator) -> Vec<Symbol> {
    left.extend_from_slice(right);
    left.push(Symbol::Binary(op));
    left
}

/// Combine two NNF operands with a binary operator, using only AND and OR in the result.
///
/// * ```a ^ b``` becomes ```(a & !b) | (!a & b)```
/// * ```a = b``` becomes ```(a & b) | (!a & !b)```
/// * ```a > b``` becomes ```!a | b```
///
/// The negated form is the De Morgan dual of each rewrite.
fn expand(
    op: Operator,
    pa: Vec<Symbol>,
    na: Vec<Symbol>,
    pb: Vec<Symbol>,
    nb: Vec<Symbol>,
) -> NnfItem {
    use Operator::*;
    let (positive, negative) = match op {
        And => (joined(pa, &pb, And), joined(na, &nb, Or)),
        Or => (joined(pa, &pb, Or), joined(na, &nb, And)),
        Implication => (joined(na, &pb, Or), joined(pa, &nb, And)),
        Xor => {
            let positive = joined(
                joined(pa.clone(), &nb, And),
                &joined(na.clone(), &pb, And),
                Or,
            );
            let negative = joined(joined(na, &pb, Or), &joined(pa, &nb, Or), And);
            (positive, negative)
        }
        Equivalence => {
            let positive = joined(
                joined(pa.clone(), &pb, And),
                &joined(na.clone(), &nb, And),
                Or,
            );
            let negative = joined(joined(na, &nb, Or), &joined(pa, &pb, Or), And);
            (positive, negative)
        }
    };
    NnfItem::Rewritten { positive, negative }
}

/// Simplify an operation where one operand has a fixed value
fn fold_fixed(op: Operator, fixed: bool, fixed_first: bool, other: NnfItem) -> NnfItem {
    match (op, fixed, fixed_first) {
        (Operator::And, false, _) | (Operator::Or, true, _) => NnfItem::Fixed(fixed),
        (Operator::And, true, _) | (Operator::Or, false, _) => other,
        (Operator::Xor, false, _) | (Operator::Equivalence, true, _) => other,
        (Operator::Xor, true, _) | (Operator::Equivalence, false, _) => other.negated(),
        // 0 > x and x > 1 are always true
        (Operator::Implication, false, true) | (Operator::Implication, true, false) => {
            NnfItem::Fixed(true)
        }
        (Operator::Implication, true, true) => other,
        (Operator::Implication, false, false) => other.negated(),
    }
}

impl PostfixFold for NnfBuilder {
    type Item = NnfItem;

    fn value(&mut self, b: bool) -> Result<NnfItem, FormulaError> {
        Ok(NnfItem::Fixed(b))
    }

    fn variable(&mut self, var: Variable) -> Result<NnfItem, FormulaError> {
        Ok(NnfItem::Rewritten {
            positive: vec![Symbol::Variable(var)],
            negative: vec![Symbol::Variable(var), Symbol::Not],
        })
    }

    fn negate(&mut self, item: NnfItem) -> Result<NnfItem, FormulaError> {
        Ok(item.negated())
    }

    fn combine(
        &mut self,
        op: Operator,
        left: NnfItem,
        right: NnfItem,
    ) -> Result<NnfItem, FormulaError> {
        let item = match (left, right) {
            (NnfItem::Fixed(a), NnfItem::Fixed(b)) => NnfItem::Fixed(op.apply(a, b)),
            (NnfItem::Fixed(a), other) => fold_fixed(op, a, true, other),
            (other, NnfItem::Fixed(b)) => fold_fixed(op, b, false, other),
            (
                NnfItem::Rewritten { positive: pa, negative: na },
                NnfItem::Rewritten { positive: pb, negative: nb },
            ) => expand(op, pa, na, pb, nb),
        };
        Ok(item)
    }
}

/// A disjunction of literals: variables with their polarity
pub type Clause = Vec<(Variable, bool)>;

/// Collect the clauses of a formula, distributing disjunctions over conjunctions.
///
/// An empty list of clauses is always true, an empty clause is always false.
pub struct ClauseBuilder;

fn conjunction(mut left: Vec<Clause>, right: Vec<Clause>) -> Vec<Clause> {
    left.extend(right);
    left
}

fn disjunction(mut left: Vec<Clause>, mut right: Vec<Clause>) -> Vec<Clause> {
    if left.len() == 1 && right.len() == 1 {
        if let (Some(mut clause), Some(other)) = (left.pop(), right.pop()) {
            clause.extend(other);
            return vec![clause];
        }
    }
    let mut clauses = Vec::with_capacity(left.len() * right.len());
    for a in &left {
        for b in &right {
            clauses.push(a.iter().chain(b.iter()).copied().collect());
        }
    }
    clauses
}

impl PostfixFold for ClauseBuilder {
    type Item = Vec<Clause>;

    fn value(&mut self, b: bool) -> Result<Self::Item, FormulaError> {
        match b {
            true => Ok(vec![]),
            false => Ok(vec![vec![]]),
        }
    }

    fn variable(&mut self, var: Variable) -> Result<Self::Item, FormulaError> {
        Ok(vec![vec![(var, true)]])
    }

    // !(c1 & c2 & ...) distributes !c1 | !c2 | ..., each !ci being a conjunction of literals
    fn negate(&mut self, item: Self::Item) -> Result<Self::Item, FormulaError> {
        let negated = item.into_iter().map(|clause| {
            clause
                .into_iter()
                .map(|(var, positive)| vec![(var, !positive)])
                .collect::<Vec<Clause>>()
        });
        Ok(negated.fold(vec![vec![]], disjunction))
    }

    fn combine(
        &mut self,
        op: Operator,
        left: Self::Item,
        right: Self::Item,
    ) -> Result<Self::Item, FormulaError> {
        let clauses = match op {
            Operator::And => conjunction(left, right),
            Operator::Or => disjunction(left, right),
            Operator::Implication => disjunction(self.negate(left)?, right),
            Operator::Xor => {
                let some_true = disjunction(left.clone(), right.clone());
                let some_false = disjunction(self.negate(left)?, self.negate(right)?);
                conjunction(some_true, some_false)
            }
            Operator::Equivalence => {
                let left_implies = disjunction(self.negate(left.clone())?, right.clone());
                let right_implies = disjunction(left, self.negate(right)?);
                conjunction(left_implies, right_implies)
            }
        };
        Ok(clauses)
    }
}

fn clauses_to_formula(clauses: &[Clause]) -> Formula {
    if clauses.is_empty() {
        return Formula::from_valid_symbols(vec![Symbol::Value(true)]);
    }
    if clauses.iter().any(|c| c.is_empty()) {
        return Formula::from_valid_symbols(vec![Symbol::Value(false)]);
    }
    let mut symbols = Vec::new();
    for (i, clause) in clauses.iter().enumerate() {
        for (j, (var, positive)) in clause.iter().enumerate() {
            symbols.push(Symbol::Variable(*var));
            if !positive {
                symbols.push(Symbol::Not);
            }
            if j > 0 {
                symbols.push(Symbol::Binary(Operator::Or));
            }
        }
        if i > 0 {
            symbols.push(Symbol::Binary(Operator::And));
        }
    }
    Formula::from_valid_symbols(symbols)
}

#[cfg(test)]
mod tests {
    use crate::*;

    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use test_log::test;

    fn check_nnf(formula: &str) -> Result<(), FormulaError> {
        let original: Formula = formula.parse()?;
        let nnf = original.negation_normal_form()?;
        assert!(is_nnf(&nnf.to_string()), "{} -> {} is not a NNF", formula, nnf);
        assert!(
            original.is_equivalent(&nnf)?,
            "{} and its NNF {} are not equivalent",
            formula,
            nnf
        );
        Ok(())
    }

    fn check_cnf(formula: &str) -> Result<(), FormulaError> {
        let original: Formula = formula.parse()?;
        let cnf = original.conjunctive_normal_form()?;
        assert!(is_cnf(&cnf.to_string()), "{} -> {} is not a CNF", formula, cnf);
        assert!(
            original.is_equivalent(&cnf)?,
            "{} and its CNF {} are not equivalent",
            formula,
            cnf
        );
        Ok(())
    }

    /// Generate a random well-formed formula using the variables A to E
    fn random_formula(rng: &mut StdRng, depth: usize) -> String {
        if depth == 0 || rng.gen_bool(0.2) {
            return match rng.gen_range(0..10) {
                0 => "0".to_string(),
                1 => "1".to_string(),
                n => char::from(b'A' + (n as u8 % 5)).to_string(),
            };
        }
        if rng.gen_bool(0.25) {
            return format!("{}!", random_formula(rng, depth - 1));
        }
        let op = BINARY_SYMBOLS
            .chars()
            .nth(rng.gen_range(0..BINARY_SYMBOLS.len()))
            .unwrap();
        format!(
            "{}{}{}",
            random_formula(rng, depth - 1),
            random_formula(rng, depth - 1),
            op
        )
    }

    #[test]
    fn rewrite_rules() -> Result<(), FormulaError> {
        assert_eq!(negation_normal_form("AB^")?, "AB!&A!B&|");
        assert_eq!(negation_normal_form("AB=")?, "AB&A!B!&|");
        assert_eq!(negation_normal_form("AB>")?, "A!B|");
        assert_eq!(negation_normal_form("AB&!")?, "A!B!|");
        assert_eq!(negation_normal_form("AB|!")?, "A!B!&");
        assert_eq!(negation_normal_form("AB|C&!")?, "A!B!&C!|");
        assert_eq!(negation_normal_form("AB>!")?, "AB!&");
        assert_eq!(negation_normal_form("AB^!")?, "A!B|AB!|&");
        assert_eq!(negation_normal_form("AB=!")?, "A!B!|AB|&");
        Ok(())
    }

    #[test]
    fn double_negations() -> Result<(), FormulaError> {
        assert_eq!(negation_normal_form("A!!")?, "A");
        assert_eq!(negation_normal_form("A!!!")?, "A!");
        assert_eq!(negation_normal_form("A!!!!!!")?, "A");
        assert_eq!(negation_normal_form("A!!B!!!&")?, "AB!&");
        assert_eq!(negation_normal_form("AB^!!")?, "AB!&A!B&|");
        Ok(())
    }

    #[test]
    fn explicit_values() -> Result<(), FormulaError> {
        assert_eq!(negation_normal_form("A1&")?, "A");
        assert_eq!(negation_normal_form("A0&")?, "0");
        assert_eq!(negation_normal_form("A1|")?, "1");
        assert_eq!(negation_normal_form("1A>")?, "A");
        assert_eq!(negation_normal_form("A0>")?, "A!");
        assert_eq!(negation_normal_form("0A>")?, "1");
        assert_eq!(negation_normal_form("A1^")?, "A!");
        assert_eq!(negation_normal_form("0A=")?, "A!");
        assert_eq!(negation_normal_form("10|1&")?, "1");
        assert_eq!(negation_normal_form("0!")?, "1");
        assert_eq!(negation_normal_form("AB&1^")?, "A!B!|");
        Ok(())
    }

    #[test]
    fn nnf_examples() -> Result<(), FormulaError> {
        let formulae = [
            "A",
            "A!",
            "A!!",
            "A!!!",
            "A!!!!",
            "A!!!!!",
            "A!!!!!!",
            "AB>",
            "A!B|",
            "AB=",
            "AB&A!B!&|",
            "AB|!",
            "A!B!&",
            "AB&!",
            "A!B!|",
            "AB|C&!",
            "A!B!&C!|",
            "AB|C&!D!&",
            "ABCDE>>>>",
            "ABCDE====",
            "ABCDE^^^^",
            "A!B!!C!!!D!!!!E!!!!!>>>>",
            "A!B!!C!!!D!!!!E!!!!!====",
            "A!B!!C!!!D!!!!E!!!!!^^^^",
            "AB=!C^!",
            "A1=B0^>!",
        ];
        for f in formulae {
            check_nnf(f)?;
        }
        Ok(())
    }

    #[test]
    fn cnf_examples() -> Result<(), FormulaError> {
        let formulae = [
            "A",
            "A!",
            "A!!",
            "AB>",
            "AB=",
            "AB|!",
            "AB&!",
            "AB|C&!",
            "AB|C&!D!&",
            "ABCDE>>>>",
            "ABC==",
            "ABC^^",
            "AB&CD&|EF&GH&||",
            "ABCDE&&&|",
            "A!B!!C!!!^^",
            "AB&CD&|",
            "AC>BCD&&!&",
            "A1&0|",
            "AA!&",
            "AA!|",
        ];
        for f in formulae {
            check_cnf(f)?;
        }
        assert_eq!(conjunctive_normal_form("AB&!")?, "A!B!|");
        assert_eq!(conjunctive_normal_form("AB|!")?, "A!B!&");
        assert_eq!(conjunctive_normal_form("ABC||")?, "AB|C|");
        assert_eq!(conjunctive_normal_form("AB&CD&|")?, "AC|AD|&BC|&BD|&");
        assert_eq!(conjunctive_normal_form("A1&0|")?, "A");
        assert_eq!(conjunctive_normal_form("A0&")?, "0");
        Ok(())
    }

    #[test]
    fn clauses_of_non_standard_operators() -> Result<(), FormulaError> {
        let formulae = ["AB^", "AB=", "AB>", "AB^!", "AB&C|!", "AB=C>!"];
        for f in formulae {
            let formula: Formula = f.parse()?;
            let clauses = formula.fold(&mut ClauseBuilder)?;
            let cnf = super::clauses_to_formula(&clauses);
            assert!(is_cnf(&cnf.to_string()), "{} -> {}", f, cnf);
            assert!(formula.is_equivalent(&cnf)?, "{} -> {}", f, cnf);
        }
        Ok(())
    }

    #[test]
    fn long_formulae() -> Result<(), FormulaError> {
        let n = 20_000;

        let conjunction = format!("A{}", "B&".repeat(n));
        assert_eq!(negation_normal_form(&conjunction)?, conjunction);
        assert_eq!(conjunctive_normal_form(&conjunction)?, conjunction);
        assert!(is_cnf(&conjunction));

        let disjunction = format!("A{}", "B!|".repeat(n));
        assert_eq!(conjunctive_normal_form(&disjunction)?, disjunction);

        let negations = format!("A{}", "!".repeat(n + 1));
        assert_eq!(negation_normal_form(&negations)?, "A!");

        let negated = format!("A{}!", "B&".repeat(n));
        let nnf = negation_normal_form(&negated)?;
        assert_eq!(nnf, format!("A!{}", "B!|".repeat(n)));
        assert!(is_nnf(&nnf));

        let implications = format!("A{}", "B>".repeat(n));
        assert!(is_nnf(&negation_normal_form(&implications)?));
        Ok(())
    }

    #[test]
    fn random_formulae_round_trip() -> Result<(), FormulaError> {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..300 {
            let depth = rng.gen_range(1..6);
            let formula = random_formula(&mut rng, depth);
            check_nnf(&formula)?;

            // the NNF of a NNF is equivalent and unchanged
            let nnf = negation_normal_form(&formula)?;
            let again = negation_normal_form(&nnf)?;
            assert_eq!(nnf, again, "NNF of {} is not stable", formula);
        }
        Ok(())
    }

    #[test]
    fn random_formulae_cnf() -> Result<(), FormulaError> {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let depth = rng.gen_range(1..4);
            check_cnf(&random_formula(&mut rng, depth))?;
        }
        Ok(())
    }
}
