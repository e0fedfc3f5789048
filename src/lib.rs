//! Check, evaluate and rewrite propositional formulae written in postfix (reverse Polish) notation.
//!
//! A formula is a string where each operator follows its operand(s). The alphabet contains the
//! fixed values ```0``` and ```1```, the [variables](Variable) ```A``` to ```Z```, the negation ```!```
//! and the binary [operators](Operator) ```&``` (and), ```|``` (or), ```^``` (xor), ```>``` (implication)
//! and ```=``` (equivalence). For example ```AB&C!|``` denotes ```(A & B) | !C```.
//!
//! ```
//! use rpnkit::{eval_formula, is_valid_formula};
//! # use rpnkit::FormulaError;
//! # fn main() -> Result<(), FormulaError> {
//!
//! assert!(is_valid_formula("AB&C!|"));
//! assert!(!is_valid_formula("AB&C"));
//!
//! // Formulae without variables can be evaluated directly
//! assert!(eval_formula("10|1&")?);
//! assert!(!eval_formula("10>")?);
//! # Ok(())
//! # }
//! ```
//!
//! # Formulae and expressions
//!
//! Strings are parsed into a validated [Formula]: a flat sequence of [symbols](Symbol), which can be evaluated
//! with a stack machine (see [PostfixFold]). The normal forms are computed by the same stack machine.
//! A formula can also be turned into an [expression tree](Expr), which is serialized back into a
//! postfix formula and can be displayed in infix notation.
//!
//! ```
//! use rpnkit::{efmt, Expr, Formula};
//! # use rpnkit::FormulaError;
//! # fn main() -> Result<(), FormulaError> {
//!
//! let formula: Formula = "AB|C&!".parse()?;
//! let expr = Expr::try_from(&formula)?;
//! assert_eq!(expr.infix(&efmt::DEFAULT_FMT_CFG).to_string(), "!((A | B) & C)");
//! assert_eq!(expr.to_string(), "AB|C&!");
//! # Ok(())
//! # }
//! ```
//!
//! # Truth tables
//!
//! The [truth table](TruthTable) of a formula lists its value for all assignments of its variables,
//! sorted alphabetically, the last variable varying fastest.
//!
//! ```
//! use rpnkit::{get_truth_table, sat};
//! # use rpnkit::FormulaError;
//! # fn main() -> Result<(), FormulaError> {
//!
//! let table = get_truth_table("AB>")?;
//! let results: Vec<bool> = table.rows.iter().map(|r| r.result).collect();
//! assert_eq!(results, vec![true, true, false, true]);
//!
//! assert!(sat("AB>")?);
//! assert!(!sat("AA!&")?);
//! # Ok(())
//! # }
//! ```
//!
//! # Normal forms
//!
//! Any formula can be rewritten into an equivalent formula in negation normal form (NNF), using only
//! the ```&```, ```|``` and ```!``` operators with negations applied to variables only, and further
//! into conjunctive normal form (CNF).
//!
//! ```
//! use rpnkit::{conjunctive_normal_form, is_cnf, is_nnf, negation_normal_form};
//! # use rpnkit::FormulaError;
//! # fn main() -> Result<(), FormulaError> {
//!
//! let nnf = negation_normal_form("AB|C&!")?;
//! assert_eq!(nnf, "A!B!&C!|");
//! assert!(is_nnf(&nnf));
//!
//! let cnf = conjunctive_normal_form("AB&C|")?;
//! assert_eq!(cnf, "AC|BC|&");
//! assert!(is_cnf(&cnf));
//! # Ok(())
//! # }
//! ```

mod assignment;
pub mod efmt;
mod error;
mod eval;
mod expr;
mod formula;
mod normal_form;
mod sets;
mod symbol;
mod truth_table;
mod validate;
mod variable;

// Export public structures and API
pub use assignment::Assignment;
pub use error::FormulaError;
pub use eval::{eval_formula, AssignmentEvaluator, ExplicitEvaluator};
pub use expr::{Expr, TreeBuilder, MAX_EXPR_DEPTH};
pub use formula::{Formula, PostfixFold};
pub use normal_form::{
    conjunctive_normal_form, negation_normal_form, Clause, ClauseBuilder, NnfBuilder, NnfItem,
};
pub use sets::{eval_set, powerset, SetEvaluator};
pub use symbol::{Operator, Symbol, BINARY_SYMBOLS, NOT_SYMBOL, VALUE_SYMBOLS};
pub use truth_table::{get_truth_table, print_truth_table, sat, TruthRow, TruthTable};
pub use validate::{
    is_cnf, is_nnf, is_valid_explicit_formula, is_valid_formula, is_valid_variable_formula,
};
pub use variable::{VarSet, Variable, VARIABLE_COUNT};
