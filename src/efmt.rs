//! Formatting API for expressions

use crate::{Expr, Operator, Variable};
use delegate::delegate;

use std::fmt;

pub struct FormatterConfig<'a> {
    s_and: &'a str,
    s_or: &'a str,
    s_xor: &'a str,
    s_implies: &'a str,
    s_equiv: &'a str,
    s_not: &'a str,
}

pub static DEFAULT_FMT_CFG: FormatterConfig = FormatterConfig {
    s_and: "&",
    s_or: "|",
    s_xor: "^",
    s_implies: "->",
    s_equiv: "<->",
    s_not: "!",
};

pub static WORDS_FMT_CFG: FormatterConfig = FormatterConfig {
    s_and: "and",
    s_or: "or",
    s_xor: "xor",
    s_implies: "implies",
    s_equiv: "iff",
    s_not: "not ",
};

pub struct InfixFormatted<'a> {
    expr: &'a Expr,
    cfg: &'a FormatterConfig<'a>,
}

/// Define hooks to display separate parts of expressions.
///
/// The expression visits its inner tree and calls the hooks defined in this trait for each node and leaf.
/// A formatter is implemented on top of [fmt::Formatter] for each supported notation:
/// postfix (the default [Display](fmt::Display) of expressions), infix and prefix.
pub trait ExprFormatter {
    /// Pass-through function calling an internal [fmt::Formatter].
    ///
    /// This function enables the use of the ```write!``` macro in other functions.
    fn write_fmt(&mut self, args: fmt::Arguments) -> fmt::Result;

    /// Write a fixed Boolean node
    fn write_value(&mut self, b: bool) -> fmt::Result;

    /// Write a single variable
    fn write_variable(&mut self, var: Variable) -> fmt::Result;

    /// Start writing a negation, the flag indicates if the negated expression is a single leaf
    fn start_negation(&mut self, leaf: bool) -> fmt::Result;

    /// Stop writing a negation
    fn end_negation(&mut self, leaf: bool) -> fmt::Result;

    /// Start writing an operation
    fn start_operation(&mut self, op: Operator, parent: Option<Operator>) -> fmt::Result;

    /// Separate operands in the ongoing operation
    fn sep_operation(&mut self, op: Operator) -> fmt::Result;

    /// Stop writing an operation
    fn end_operation(&mut self, op: Operator, parent: Option<Operator>) -> fmt::Result;
}

impl FormatterConfig<'_> {
    pub fn operator(&self, op: Operator) -> &str {
        match op {
            Operator::And => self.s_and,
            Operator::Or => self.s_or,
            Operator::Xor => self.s_xor,
            Operator::Implication => self.s_implies,
            Operator::Equivalence => self.s_equiv,
        }
    }

    pub fn infix<'a>(&'a self, expr: &'a Expr) -> InfixFormatted<'a> {
        InfixFormatted { expr, cfg: self }
    }
}

impl Expr {
    /// Display this expression in infix notation with the selected configuration
    pub fn infix<'a>(&'a self, cfg: &'a FormatterConfig<'a>) -> InfixFormatted<'a> {
        cfg.infix(self)
    }
}

pub struct PostfixFormatter<'a, 'b>(&'a mut fmt::Formatter<'b>);
pub struct InfixFormatter<'a, 'b>(&'a mut fmt::Formatter<'b>, &'a FormatterConfig<'a>);
pub struct PrefixFormatter<'a, 'b>(InfixFormatter<'a, 'b>);

impl<'a, 'b> PostfixFormatter<'a, 'b> {
    pub fn new(f: &'a mut fmt::Formatter<'b>) -> Self {
        Self(f)
    }
}

impl<'a, 'b> InfixFormatter<'a, 'b> {
    pub fn new(f: &'a mut fmt::Formatter<'b>) -> Self {
        Self(f, &DEFAULT_FMT_CFG)
    }
    pub fn with(f: &'a mut fmt::Formatter<'b>, cfg: &'a FormatterConfig) -> Self {
        Self(f, cfg)
    }

    fn needs_parenthesis(op: Operator, parent: Option<Operator>) -> bool {
        match parent {
            None => false,
            Some(p) if p == op => op == Operator::Implication,
            Some(p) => op.priority() < p.priority(),
        }
    }
}

impl<'a, 'b> PrefixFormatter<'a, 'b> {
    pub fn new(f: &'a mut fmt::Formatter<'b>) -> Self {
        Self(InfixFormatter::new(f))
    }
}

impl ExprFormatter for PostfixFormatter<'_, '_> {
    fn write_fmt(&mut self, args: fmt::Arguments) -> fmt::Result {
        fmt::Formatter::write_fmt(self.0, args)
    }

    fn write_value(&mut self, b: bool) -> fmt::Result {
        match b {
            false => write!(self, "0"),
            true => write!(self, "1"),
        }
    }

    fn write_variable(&mut self, var: Variable) -> fmt::Result {
        write!(self, "{}", var)
    }

    fn start_negation(&mut self, _leaf: bool) -> fmt::Result {
        Ok(())
    }

    fn end_negation(&mut self, _leaf: bool) -> fmt::Result {
        write!(self, "!")
    }

    fn start_operation(&mut self, _op: Operator, _parent: Option<Operator>) -> fmt::Result {
        Ok(())
    }

    fn sep_operation(&mut self, _op: Operator) -> fmt::Result {
        Ok(())
    }

    fn end_operation(&mut self, op: Operator, _parent: Option<Operator>) -> fmt::Result {
        write!(self, "{}", op.symbol())
    }
}

impl ExprFormatter for InfixFormatter<'_, '_> {
    fn write_fmt(&mut self, args: fmt::Arguments) -> fmt::Result {
        fmt::Formatter::write_fmt(self.0, args)
    }

    fn write_value(&mut self, b: bool) -> fmt::Result {
        match b {
            false => write!(self, "0"),
            true => write!(self, "1"),
        }
    }

    fn write_variable(&mut self, var: Variable) -> fmt::Result {
        write!(self, "{}", var)
    }

    fn start_negation(&mut self, leaf: bool) -> fmt::Result {
        match leaf {
            true => write!(self, "{}", self.1.s_not),
            false => write!(self, "{}(", self.1.s_not),
        }
    }

    fn end_negation(&mut self, leaf: bool) -> fmt::Result {
        match leaf {
            true => Ok(()),
            false => write!(self, ")"),
        }
    }

    fn start_operation(&mut self, op: Operator, parent: Option<Operator>) -> fmt::Result {
        match Self::needs_parenthesis(op, parent) {
            true => write!(self, "("),
            false => Ok(()),
        }
    }

    fn sep_operation(&mut self, op: Operator) -> fmt::Result {
        write!(self, " {} ", self.1.operator(op))
    }

    fn end_operation(&mut self, op: Operator, parent: Option<Operator>) -> fmt::Result {
        match Self::needs_parenthesis(op, parent) {
            true => write!(self, ")"),
            false => Ok(()),
        }
    }
}

impl ExprFormatter for PrefixFormatter<'_, '_> {
    delegate! {
        to self.0 {
            fn write_fmt(&mut self, args: fmt::Arguments) -> fmt::Result;
            fn write_value(&mut self, b: bool) -> fmt::Result;
            fn write_variable(&mut self, var: Variable) -> fmt::Result;
        }
    }

    fn start_negation(&mut self, _leaf: bool) -> fmt::Result {
        write!(self, "(! ")
    }

    fn end_negation(&mut self, _leaf: bool) -> fmt::Result {
        write!(self, ")")
    }

    fn start_operation(&mut self, op: Operator, _parent: Option<Operator>) -> fmt::Result {
        write!(self, "({} ", op.symbol())
    }

    fn sep_operation(&mut self, _op: Operator) -> fmt::Result {
        write!(self, " ")
    }

    fn end_operation(&mut self, _op: Operator, _parent: Option<Operator>) -> fmt::Result {
        write!(self, ")")
    }
}

pub struct PrefixFormatted<'a>(pub &'a Expr);

impl fmt::Display for PrefixFormatted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut ef = PrefixFormatter::new(f);
        self.0.fmt_with(&mut ef, None)
    }
}

impl fmt::Display for InfixFormatted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut ef = InfixFormatter::with(f, self.cfg);
        self.expr.fmt_with(&mut ef, None)
    }
}

#[cfg(test)]
mod tests {
    use crate::efmt;
    use crate::*;

    #[test]
    fn postfix_display() -> Result<(), FormulaError> {
        for s in ["A", "0", "A!", "AB&C|", "AB&!C!|", "ABC>>"] {
            assert_eq!(s.parse::<Expr>()?.to_string(), s);
        }
        Ok(())
    }

    #[test]
    fn infix_display() -> Result<(), FormulaError> {
        let infix = |s: &str| -> Result<String, FormulaError> {
            let expr: Expr = s.parse()?;
            Ok(expr.infix(&efmt::DEFAULT_FMT_CFG).to_string())
        };
        assert_eq!(infix("AB&C|")?, "A & B | C");
        assert_eq!(infix("ABC|&")?, "A & (B | C)");
        assert_eq!(infix("AB&!C!|")?, "!(A & B) | !C");
        assert_eq!(infix("ABC>>")?, "A -> (B -> C)");
        assert_eq!(infix("AB>C>")?, "(A -> B) -> C");
        assert_eq!(infix("AB=1^")?, "(A <-> B) ^ 1");

        let expr: Expr = "A!B|".parse()?;
        assert_eq!(
            expr.infix(&efmt::WORDS_FMT_CFG).to_string(),
            "not A or B"
        );
        Ok(())
    }

    #[test]
    fn prefix_display() -> Result<(), FormulaError> {
        let expr: Expr = "AD!CB|&|".parse()?;
        assert_eq!(
            efmt::PrefixFormatted(&expr).to_string(),
            "(| A (& (! D) (| C B)))"
        );
        Ok(())
    }
}
