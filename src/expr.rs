//! Boolean formulae as expression trees

use core::ops::BitAnd;
use core::ops::BitOr;
use core::ops::BitXor;
use core::ops::Not;
use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::*;

/// Deepest nesting of operators accepted when building an expression tree
pub const MAX_EXPR_DEPTH: usize = 1000;

/// A Boolean expression tree.
///
/// Represents a formula as a tree where internal nodes are negations or binary operations
/// and leaves are individual variables or fixed Boolean values.
/// Expressions are built from a postfix [Formula] and can be serialized back into one.
/// They overload the ```&```, ```|```, ```^``` and ```!``` operators to facilitate their
/// definition as readable rust statements, and can be displayed in infix notation (see [efmt]).
///
/// Expressions are immutable and share their subtrees.
/// They can not be [copied](Copy) but they can be [cloned](Clone) in constant time.
/// Walking a tree follows its nesting, building a tree from a formula is thus limited to
/// [MAX_EXPR_DEPTH] levels.
///
/// ```
/// use rpnkit::{Expr, FormulaError, Variable};
/// use std::convert::TryFrom;
/// # fn main() -> Result<(), FormulaError> {
///
/// let a = Expr::from(Variable::try_from('A')?);
/// let b = Expr::from(Variable::try_from('B')?);
/// let expr = !(a & !b);
/// assert_eq!(expr.to_string(), "AB!&!");
///
/// let parsed: Expr = "AB!&!".parse()?;
/// assert_eq!(parsed, expr);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum Expr {
    /// A fixed Boolean value
    Value(bool),

    /// A single variable
    Variable(Variable),

    /// The negation of an expression
    Not(Arc<Expr>),

    /// Two expressions connected with a binary operator
    Operation(Operator, Arc<(Expr, Expr)>),
}

/// Build expression trees from postfix formulae
pub struct TreeBuilder;

impl PostfixFold for TreeBuilder {
    type Item = Expr;

    fn value(&mut self, b: bool) -> Result<Expr, FormulaError> {
        Ok(Expr::Value(b))
    }

    fn variable(&mut self, var: Variable) -> Result<Expr, FormulaError> {
        Ok(Expr::Variable(var))
    }

    fn negate(&mut self, item: Expr) -> Result<Expr, FormulaError> {
        Ok(!item)
    }

    fn combine(&mut self, op: Operator, left: Expr, right: Expr) -> Result<Expr, FormulaError> {
        Ok(Expr::operation(op, left, right))
    }
}

impl Expr {
    /// Connect two expressions with a binary operator
    pub fn operation(op: Operator, left: Expr, right: Expr) -> Self {
        Expr::Operation(op, Arc::new((left, right)))
    }

    /// Test if this expression is a variable or a fixed value
    pub fn is_leaf(&self) -> bool {
        matches!(self, Expr::Value(_) | Expr::Variable(_))
    }

    /// Get the fixed value associated to this expression, or none if it is not fixed
    pub fn get_fixed(&self) -> Option<bool> {
        match self {
            Expr::Value(b) => Some(*b),
            _ => None,
        }
    }

    /// Serialize this expression into a postfix formula
    pub fn to_formula(&self) -> Formula {
        let mut symbols = Vec::new();
        self.collect_symbols(&mut symbols);
        Formula::from_valid_symbols(symbols)
    }

    fn collect_symbols(&self, symbols: &mut Vec<Symbol>) {
        enum Pending<'a> {
            Visit(&'a Expr),
            Emit(Symbol),
        }

        // Symbols which remain to be emitted, in reverse order
        let mut pending = vec![Pending::Visit(self)];
        while let Some(next) = pending.pop() {
            match next {
                Pending::Emit(symbol) => symbols.push(symbol),
                Pending::Visit(Expr::Value(b)) => symbols.push(Symbol::Value(*b)),
                Pending::Visit(Expr::Variable(var)) => symbols.push(Symbol::Variable(*var)),
                Pending::Visit(Expr::Not(child)) => {
                    pending.push(Pending::Emit(Symbol::Not));
                    pending.push(Pending::Visit(child));
                }
                Pending::Visit(Expr::Operation(op, children)) => {
                    pending.push(Pending::Emit(Symbol::Binary(*op)));
                    pending.push(Pending::Visit(&children.1));
                    pending.push(Pending::Visit(&children.0));
                }
            }
        }
    }

    pub(crate) fn fmt_with(
        &self,
        f: &mut dyn efmt::ExprFormatter,
        parent: Option<Operator>,
    ) -> fmt::Result {
        match self {
            Expr::Value(b) => f.write_value(*b),
            Expr::Variable(var) => f.write_variable(*var),
            Expr::Not(child) => {
                f.start_negation(child.is_leaf())?;
                child.fmt_with(f, None)?;
                f.end_negation(child.is_leaf())
            }
            Expr::Operation(op, children) => {
                f.start_operation(*op, parent)?;
                children.0.fmt_with(f, Some(*op))?;
                f.sep_operation(*op)?;
                children.1.fmt_with(f, Some(*op))?;
                f.end_operation(*op, parent)
            }
        }
    }

    /// Evaluate the expression, variables taking their value in the given assignment
    pub fn eval(&self, assignment: &Assignment) -> bool {
        match self {
            Expr::Value(b) => *b,
            Expr::Variable(var) => assignment.value(*var),
            Expr::Not(child) => !child.eval(assignment),
            Expr::Operation(op, children) => {
                op.apply(children.0.eval(assignment), children.1.eval(assignment))
            }
        }
    }

    /// Add all variables of this expression to the set of variables
    pub fn collect_variables(&self, variables: &mut VarSet) {
        match self {
            Expr::Value(_) => (),
            Expr::Variable(var) => variables.insert(*var),
            Expr::Not(child) => child.collect_variables(variables),
            Expr::Operation(_, children) => {
                children.0.collect_variables(variables);
                children.1.collect_variables(variables);
            }
        }
    }

    /// Construct the set of variables used in this expression
    pub fn variables(&self) -> VarSet {
        let mut variables = VarSet::default();
        self.collect_variables(&mut variables);
        variables
    }

    /// Number of nodes in the expression tree (also the length of its postfix formula)
    pub fn size(&self) -> usize {
        match self {
            Expr::Value(_) | Expr::Variable(_) => 1,
            Expr::Not(child) => 1 + child.size(),
            Expr::Operation(_, children) => 1 + children.0.size() + children.1.size(),
        }
    }
}

impl TryFrom<&Formula> for Expr {
    type Error = FormulaError;

    fn try_from(formula: &Formula) -> Result<Self, Self::Error> {
        let depth = formula.nesting_depth()?;
        if depth > MAX_EXPR_DEPTH {
            return Err(FormulaError::TooDeep {
                depth,
                limit: MAX_EXPR_DEPTH,
            });
        }
        formula.fold(&mut TreeBuilder)
    }
}

impl FromStr for Expr {
    type Err = FormulaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Expr::try_from(&s.parse::<Formula>()?)
    }
}

// Expressions are displayed in postfix notation
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut ef = efmt::PostfixFormatter::new(f);
        self.fmt_with(&mut ef, None)
    }
}

impl From<&Expr> for Formula {
    fn from(e: &Expr) -> Self {
        e.to_formula()
    }
}

impl From<bool> for Expr {
    fn from(b: bool) -> Self {
        Expr::Value(b)
    }
}

impl From<Variable> for Expr {
    fn from(var: Variable) -> Self {
        Expr::Variable(var)
    }
}

/* ************************************************************************************* */
/* ******************************   Operator overloading  ****************************** */
/* ************************************************************************************* */

impl Not for Expr {
    type Output = Self;
    fn not(self) -> Self::Output {
        Expr::Not(Arc::new(self))
    }
}

impl Not for &Expr {
    type Output = Expr;
    fn not(self) -> Self::Output {
        Expr::Not(Arc::new(self.clone()))
    }
}

impl<T: Into<Expr>> BitAnd<T> for Expr {
    type Output = Expr;
    fn bitand(self, rhs: T) -> Self::Output {
        Expr::operation(Operator::And, self, rhs.into())
    }
}

impl<T: Into<Expr>> BitAnd<T> for &Expr {
    type Output = Expr;
    fn bitand(self, rhs: T) -> Self::Output {
        Expr::operation(Operator::And, self.clone(), rhs.into())
    }
}

impl<T: Into<Expr>> BitOr<T> for Expr {
    type Output = Expr;
    fn bitor(self, rhs: T) -> Self::Output {
        Expr::operation(Operator::Or, self, rhs.into())
    }
}

impl<T: Into<Expr>> BitOr<T> for &Expr {
    type Output = Expr;
    fn bitor(self, rhs: T) -> Self::Output {
        Expr::operation(Operator::Or, self.clone(), rhs.into())
    }
}

impl<T: Into<Expr>> BitXor<T> for Expr {
    type Output = Expr;
    fn bitxor(self, rhs: T) -> Self::Output {
        Expr::operation(Operator::Xor, self, rhs.into())
    }
}

#[cfg(test)]
mod tests {
    use crate::*;
    use std::convert::TryFrom;

    fn var(c: char) -> Expr {
        Expr::from(Variable::try_from(c).unwrap())
    }

    #[test]
    fn build_from_formula() -> Result<(), FormulaError> {
        let e: Expr = "AB&C!|".parse()?;
        assert_eq!(e, (var('A') & var('B')) | !var('C'));
        assert_eq!(e.size(), 6);
        assert_eq!(e.to_formula().to_string(), "AB&C!|");

        let e: Expr = "AB>".parse()?;
        assert_eq!(e, Expr::operation(Operator::Implication, var('A'), var('B')));

        assert!("AB".parse::<Expr>().is_err());
        Ok(())
    }

    #[test]
    fn eval() -> Result<(), FormulaError> {
        let e: Expr = "AB^C&".parse()?;
        let assignment = |s: &str| s.parse::<Assignment>();
        assert!(e.eval(&assignment("AC")?));
        assert!(!e.eval(&assignment("ABC")?));
        assert!(!e.eval(&assignment("A")?));
        assert_eq!(e.variables().to_string(), "ABC");
        Ok(())
    }

    #[test]
    fn operator_overloading() -> Result<(), FormulaError> {
        assert_eq!(var('A') ^ var('B'), "AB^".parse::<Expr>()?);
        assert_eq!(!(var('A') ^ false) & true, "A0^!1&".parse::<Expr>()?);
        let a = var('A');
        assert_eq!((&a | !&a).to_string(), "AA!|");
        Ok(())
    }

    #[test]
    fn nesting_limit() -> Result<(), FormulaError> {
        let deepest: Formula = format!("A{}", "!".repeat(MAX_EXPR_DEPTH - 1)).parse()?;
        let e = Expr::try_from(&deepest)?;
        assert_eq!(e.size(), MAX_EXPR_DEPTH);
        assert_eq!(Formula::from(&e), deepest);

        let negations: Formula = format!("A{}", "!".repeat(20_000)).parse()?;
        assert_eq!(
            Expr::try_from(&negations),
            Err(FormulaError::TooDeep {
                depth: 20_001,
                limit: MAX_EXPR_DEPTH
            })
        );

        let chain = format!("A{}", "B&".repeat(20_000));
        assert!(matches!(
            chain.parse::<Expr>(),
            Err(FormulaError::TooDeep { .. })
        ));
        Ok(())
    }
}
