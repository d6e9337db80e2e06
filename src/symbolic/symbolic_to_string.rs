//! # Printing
//!
//! Infix rendering of expression trees with as few brackets as the operator
//! precedences allow:
//!
//! | Node | Precedence |
//! |---|---|
//! | `+ -` | 1 |
//! | `* /` | 2 |
//! | `^` | 3 |
//! | leaves, functions, negation | 4 |
//!
//! A child is bracketed when its precedence is lower than its parent's. The right
//! operand of `-`, `/` and `^` is also bracketed at equal precedence, so
//! `1 - (x0 + 1)` keeps its brackets while `x0 + x1 - x2` needs none.
//! Negation prints as `-arg`, or `-(arg)` when `arg` is a binary operator. A
//! negated or negative base of `^` is bracketed: `(-x0) ^ 2`, `(-2) ^ x0`.
//!
//! Variable names come from a [`VariableNames`] resolver; the default is `x<index>`.

use crate::symbolic::symbolic_engine::{BinaryOp, Expr, Node};
use std::collections::HashMap;
use std::fmt;

/// Maps a variable index to its display name.
pub trait VariableNames {
    fn name(&self, index: usize) -> String;
}

/// Default resolver: `x0`, `x1`, ...
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IndexedNames;

impl VariableNames for IndexedNames {
    fn name(&self, index: usize) -> String {
        format!("x{}", index)
    }
}

/// Explicit names per index, falling back to `x<index>` for the rest.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NameTable {
    names: HashMap<usize, String>,
}

impl NameTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`NameTable::insert`].
    pub fn with(mut self, index: usize, name: &str) -> Self {
        self.insert(index, name);
        self
    }

    pub fn insert(&mut self, index: usize, name: &str) {
        self.names.insert(index, name.to_string());
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.names.get(&index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl VariableNames for NameTable {
    fn name(&self, index: usize) -> String {
        match self.get(index) {
            Some(name) => name.to_string(),
            None => IndexedNames.name(index),
        }
    }
}

impl<F> VariableNames for F
where
    F: Fn(usize) -> String,
{
    fn name(&self, index: usize) -> String {
        self(index)
    }
}

impl Expr {
    /// Printing precedence of the node.
    pub fn precedence(&self) -> u8 {
        match self.node() {
            Node::Binary(BinaryOp::Add | BinaryOp::Sub, ..) => 1,
            Node::Binary(BinaryOp::Mul | BinaryOp::Div, ..) => 2,
            Node::Binary(BinaryOp::Pow, ..) => 3,
            Node::Literal(_) | Node::Var(_) | Node::Neg(_) | Node::Function(..) => 4,
        }
    }

    /// Renders the expression, resolving variable names through `names`.
    ///
    /// # Examples
    /// ```rust, ignore
    /// let names = NameTable::new().with(0, "t");
    /// assert_eq!((X0 + 2.0).to_string_with(&names), "t + 2");
    /// ```
    pub fn to_string_with(&self, names: &dyn VariableNames) -> String {
        match self.node() {
            Node::Literal(val) => format!("{}", val),
            Node::Var(index) => names.name(index),
            Node::Neg(arg) => {
                if arg.is_binary_operator() {
                    format!("-({})", arg.to_string_with(names))
                } else {
                    format!("-{}", arg.to_string_with(names))
                }
            }
            Node::Binary(op, lhs, rhs) => self.format_binary_operator(op, lhs, rhs, names),
            Node::Function(f, arg) => format!("{}({})", f, arg.to_string_with(names)),
        }
    }

    fn format_binary_operator(
        &self,
        op: BinaryOp,
        lhs: &Expr,
        rhs: &Expr,
        names: &dyn VariableNames,
    ) -> String {
        let lhs_needs_brackets = self.precedence() > lhs.precedence()
            || (op == BinaryOp::Pow && lhs.starts_with_minus());
        let right_grouping_matters = matches!(op, BinaryOp::Sub | BinaryOp::Div | BinaryOp::Pow);
        let rhs_needs_brackets = self.precedence() > rhs.precedence()
            || (right_grouping_matters && self.precedence() == rhs.precedence());
        format!(
            "{} {} {}",
            bracketed(lhs.to_string_with(names), lhs_needs_brackets),
            op,
            bracketed(rhs.to_string_with(names), rhs_needs_brackets)
        )
    }
}

impl Expr {
    // `-x0 ^ 2` would read as `-(x0 ^ 2)`
    fn starts_with_minus(&self) -> bool {
        match self.node() {
            Node::Neg(_) => true,
            Node::Literal(val) => val.is_sign_negative(),
            _ => false,
        }
    }
}

fn bracketed(s: String, needs_brackets: bool) -> String {
    if needs_brackets { format!("({})", s) } else { s }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_string_with(&IndexedNames))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbolic::symbolic_engine::{ElementaryFn, X0, X1, X2};
    use strum::IntoEnumIterator;

    #[test]
    fn test_print_leaves() {
        assert_eq!(Expr::Zero.to_string(), "0");
        assert_eq!(Expr::Unity.to_string(), "1");
        assert_eq!(Expr::Const(2.5).to_string(), "2.5");
        assert_eq!(Expr::Const(-3.0).to_string(), "-3");
        assert_eq!(X2.to_string(), "x2");
    }

    #[test]
    fn test_print_minimal_brackets() {
        let x = X0;
        assert_eq!((1.0 / (x.clone() * x.clone().exp())).to_string(), "1 / (x0 * exp(x0))");
        assert_eq!((-(x.clone() + 2.0)).to_string(), "-(x0 + 2)");
        assert_eq!((1.0 - (x.clone() + 1.0)).to_string(), "1 - (x0 + 1)");
        assert_eq!((X0 + X1 - X2).to_string(), "x0 + x1 - x2");
        assert_eq!((X0 + (X1 - X2)).to_string(), "x0 + x1 - x2");
        assert_eq!(((X0 + X1) * X2).to_string(), "(x0 + x1) * x2");
        assert_eq!((X0 * X1 * X2).to_string(), "x0 * x1 * x2");
        assert_eq!((X0 * X1).pow(X2).to_string(), "(x0 * x1) ^ x2");
        assert_eq!(X0.pow(X1 + 1.0).to_string(), "x0 ^ (x1 + 1)");
    }

    #[test]
    fn test_print_negation() {
        assert_eq!((-X0).to_string(), "-x0");
        assert_eq!((-X0.sin()).to_string(), "-sin(x0)");
        assert_eq!((-X0.pow(X1)).to_string(), "-(x0 ^ x1)");
    }

    #[test]
    fn test_print_negative_power_base() {
        assert_eq!((-X0).pow(X1).to_string(), "(-x0) ^ x1");
        assert_eq!(Expr::Const(-2.0).pow(X0).to_string(), "(-2) ^ x0");
        assert_eq!(X0.pow(-X1).to_string(), "x0 ^ -x1");
        assert_eq!(Expr::Const(2.0).pow(X0).to_string(), "2 ^ x0");
    }

    #[test]
    fn test_print_functions() {
        for f in ElementaryFn::iter() {
            let printed = f.wrap(X0).to_string();
            assert_eq!(printed, format!("{}(x0)", f));
        }
        assert_eq!(X0.tanh().to_string(), "tanh(x0)");
        assert_eq!(X0.sin().cos().to_string(), "cos(sin(x0))");
    }

    #[test]
    fn test_name_table() {
        let names = NameTable::new().with(0, "t").with(2, "z");
        let f = X0 * X1 + X2;
        assert_eq!(f.to_string_with(&names), "t * x1 + z");
        assert_eq!(names.len(), 2);
        assert_eq!(names.get(1), None);
    }

    #[test]
    fn test_closure_names() {
        let names = |index: usize| ["a", "b", "c"][index].to_string();
        assert_eq!((X0 / X1).to_string_with(&names), "a / b");
    }

    #[test]
    fn test_precedence() {
        assert_eq!((X0 + X1).precedence(), 1);
        assert_eq!((X0 - X1).precedence(), 1);
        assert_eq!((X0 * X1).precedence(), 2);
        assert_eq!((X0 / X1).precedence(), 2);
        assert_eq!(X0.pow(X1).precedence(), 3);
        assert_eq!(X0.exp().precedence(), 4);
        assert_eq!((-X0).precedence(), 4);
    }
}
