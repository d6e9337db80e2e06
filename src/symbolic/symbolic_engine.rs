//! # Symbolic Engine Module
//!
//! This module holds the expression tree every other part of the crate works on.
//! An expression is built once, never mutated, and is always kept in its
//! simplified canonical form: the operator overloads and the builder methods in
//! this module route through the smart constructors of
//! [`symbolic_simplify`](crate::symbolic::symbolic_simplify), so trivial
//! identities (`x + 0`, `x * 1`, `--x`, `exp(log(x))`, ...) never appear as nodes.
//!
//! ## Main Structures and Methods
//!
//! ### `Expr` Enum
//! - **Leaves**: `Zero`, `Unity`, `Const(f64)`, `Var(usize)`
//! - **Algebra**: `Neg`, `Add`, `Sub`, `Mul`, `Div`, `Pow`
//! - **Elementary functions**: `Exp`, `Log`, `Sqrt`, `Sin`, `Cos`, `Tan`, `Sinh`,
//!   `Cosh`, `Tanh`, `Asin`, `Acos`, `Atan`, `Asinh`, `Acosh`, `Atanh`
//!
//! ### `ElementaryFn` Enum
//! A flat tag for the fifteen one-argument functions. It knows the printed name of
//! each function, how to apply it to an `f64`, which function undoes it, and how to
//! wrap an argument into the matching `Expr` variant.
//!
//! ### `BinaryOp` Enum
//! Tag for the five two-operand operators, used by the printer and by the
//! dynamic-operand constructors in [`symbolic_traits`](crate::symbolic::symbolic_traits).
//!
//! ### `Node` View
//! [`Expr::node`] classifies any node as a literal, variable, negation, binary
//! operator or function application. Evaluation, differentiation and printing
//! match on this view, so adding an `Expr` variant fails to compile until
//! `Expr::node` handles it.
//!
//! ### Variables
//! Variables are positional: `Var(n)` reads the n-th value handed to the evaluator.
//! The constants `X0`..`X9`, [`Expr::var`], [`Expr::IndexedVars`] and the
//! [`vars!`](crate::vars) macro create them.
//!
//! ## Interesting Code Features
//!
//! 1. **Distinguished zero and one**: `Zero` and `Unity` are separate variants, so
//!    simplification rules match on them structurally instead of comparing floats.
//!
//! 2. **Operator Overloading**: `std::ops` traits are implemented for `Expr`, `&Expr`
//!    and `f64` on either side, all of them simplifying on construction:
//!    `x * 1.0` is `x`, `2.0 + 3.0 * Expr::Unity` is `Const(5.0)`.

#![allow(non_camel_case_types)]

use strum_macros::{Display, EnumIter, EnumString};

/// Core symbolic expression enum.
///
/// Variants are public so trees can be inspected and compared, but new trees
/// should be built through the smart constructors (`Expr::sum`, `Expr::product`,
/// the operator overloads, `x.sin()`, ...) which keep the tree simplified.
///
/// # Examples
/// ```rust, ignore
/// use RustedAD::symbolic::symbolic_engine::{Expr, X0};
/// let f = X0 * 1.0 + 0.0;
/// assert_eq!(f, X0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// the literal 0
    Zero,
    /// the literal 1
    Unity,
    /// any other numeric literal
    Const(f64),
    /// positional variable, bound to the n-th evaluation argument
    Var(usize),
    /// -arg
    Neg(Box<Expr>),
    /// left + right
    Add(Box<Expr>, Box<Expr>),
    /// left - right
    Sub(Box<Expr>, Box<Expr>),
    /// left * right
    Mul(Box<Expr>, Box<Expr>),
    /// left / right
    Div(Box<Expr>, Box<Expr>),
    /// base ^ exponent
    Pow(Box<Expr>, Box<Expr>),
    Exp(Box<Expr>),
    /// natural logarithm
    Log(Box<Expr>),
    Sqrt(Box<Expr>),
    Sin(Box<Expr>),
    Cos(Box<Expr>),
    Tan(Box<Expr>),
    Sinh(Box<Expr>),
    Cosh(Box<Expr>),
    Tanh(Box<Expr>),
    Asin(Box<Expr>),
    Acos(Box<Expr>),
    Atan(Box<Expr>),
    Asinh(Box<Expr>),
    Acosh(Box<Expr>),
    Atanh(Box<Expr>),
}

/// The one-argument elementary functions. The `Display` form is the name used by
/// the printer (`sin`, `asinh`, ...), and `FromStr` parses the same names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum ElementaryFn {
    Exp,
    Log,
    Sqrt,
    Sin,
    Cos,
    Tan,
    Sinh,
    Cosh,
    Tanh,
    Asin,
    Acos,
    Atan,
    Asinh,
    Acosh,
    Atanh,
}

impl ElementaryFn {
    /// Numerical value of the function at `x`.
    pub fn apply(self, x: f64) -> f64 {
        match self {
            ElementaryFn::Exp => x.exp(),
            ElementaryFn::Log => x.ln(),
            ElementaryFn::Sqrt => x.sqrt(),
            ElementaryFn::Sin => x.sin(),
            ElementaryFn::Cos => x.cos(),
            ElementaryFn::Tan => x.tan(),
            ElementaryFn::Sinh => x.sinh(),
            ElementaryFn::Cosh => x.cosh(),
            ElementaryFn::Tanh => x.tanh(),
            ElementaryFn::Asin => x.asin(),
            ElementaryFn::Acos => x.acos(),
            ElementaryFn::Atan => x.atan(),
            ElementaryFn::Asinh => x.asinh(),
            ElementaryFn::Acosh => x.acosh(),
            ElementaryFn::Atanh => x.atanh(),
        }
    }

    /// The function whose node this function cancels when applied on top of it:
    /// `exp(log(y)) = y`, `asin(sin(y)) = y`, ... `sqrt` has no partner.
    pub fn inverse(self) -> Option<ElementaryFn> {
        match self {
            ElementaryFn::Exp => Some(ElementaryFn::Log),
            ElementaryFn::Log => Some(ElementaryFn::Exp),
            ElementaryFn::Sqrt => None,
            ElementaryFn::Sin => Some(ElementaryFn::Asin),
            ElementaryFn::Cos => Some(ElementaryFn::Acos),
            ElementaryFn::Tan => Some(ElementaryFn::Atan),
            ElementaryFn::Sinh => Some(ElementaryFn::Asinh),
            ElementaryFn::Cosh => Some(ElementaryFn::Acosh),
            ElementaryFn::Tanh => Some(ElementaryFn::Atanh),
            ElementaryFn::Asin => Some(ElementaryFn::Sin),
            ElementaryFn::Acos => Some(ElementaryFn::Cos),
            ElementaryFn::Atan => Some(ElementaryFn::Tan),
            ElementaryFn::Asinh => Some(ElementaryFn::Sinh),
            ElementaryFn::Acosh => Some(ElementaryFn::Cosh),
            ElementaryFn::Atanh => Some(ElementaryFn::Tanh),
        }
    }

    /// Raw node construction, no simplification. Use [`Expr::function`] instead.
    pub(crate) fn wrap(self, arg: Expr) -> Expr {
        let arg = arg.boxed();
        match self {
            ElementaryFn::Exp => Expr::Exp(arg),
            ElementaryFn::Log => Expr::Log(arg),
            ElementaryFn::Sqrt => Expr::Sqrt(arg),
            ElementaryFn::Sin => Expr::Sin(arg),
            ElementaryFn::Cos => Expr::Cos(arg),
            ElementaryFn::Tan => Expr::Tan(arg),
            ElementaryFn::Sinh => Expr::Sinh(arg),
            ElementaryFn::Cosh => Expr::Cosh(arg),
            ElementaryFn::Tanh => Expr::Tanh(arg),
            ElementaryFn::Asin => Expr::Asin(arg),
            ElementaryFn::Acos => Expr::Acos(arg),
            ElementaryFn::Atan => Expr::Atan(arg),
            ElementaryFn::Asinh => Expr::Asinh(arg),
            ElementaryFn::Acosh => Expr::Acosh(arg),
            ElementaryFn::Atanh => Expr::Atanh(arg),
        }
    }
}

/// The two-operand algebraic operators; `Display` gives the infix symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
pub enum BinaryOp {
    #[strum(serialize = "+")]
    Add,
    #[strum(serialize = "-")]
    Sub,
    #[strum(serialize = "*")]
    Mul,
    #[strum(serialize = "/")]
    Div,
    #[strum(serialize = "^")]
    Pow,
}

impl BinaryOp {
    /// Builds `lhs op rhs` through the matching smart constructor.
    pub fn apply(self, lhs: Expr, rhs: Expr) -> Expr {
        match self {
            BinaryOp::Add => Expr::sum(lhs, rhs),
            BinaryOp::Sub => Expr::difference(lhs, rhs),
            BinaryOp::Mul => Expr::product(lhs, rhs),
            BinaryOp::Div => Expr::quotient(lhs, rhs),
            BinaryOp::Pow => Expr::power(lhs, rhs),
        }
    }
}

/// Shape of an [`Expr`] node as returned by [`Expr::node`]: literals collapse to
/// their value, the algebraic and function variants to their tag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Node<'a> {
    Literal(f64),
    Var(usize),
    Neg(&'a Expr),
    Binary(BinaryOp, &'a Expr, &'a Expr),
    Function(ElementaryFn, &'a Expr),
}

pub const X0: Expr = Expr::Var(0);
pub const X1: Expr = Expr::Var(1);
pub const X2: Expr = Expr::Var(2);
pub const X3: Expr = Expr::Var(3);
pub const X4: Expr = Expr::Var(4);
pub const X5: Expr = Expr::Var(5);
pub const X6: Expr = Expr::Var(6);
pub const X7: Expr = Expr::Var(7);
pub const X8: Expr = Expr::Var(8);
pub const X9: Expr = Expr::Var(9);

impl Expr {
    /// BASIC FEATURES

    /// Convenience method to wrap expression in Box for recursive structures.
    pub fn boxed(self) -> Box<Self> {
        Box::new(self)
    }

    /// Variable bound to the `index`-th evaluation argument.
    pub fn var(index: usize) -> Expr {
        Expr::Var(index)
    }

    /// Creates the variables `Var(0)` .. `Var(num_vars - 1)`.
    ///
    /// # Examples
    /// ```rust, ignore
    /// let xs = Expr::IndexedVars(3);
    /// assert_eq!(xs[2], Expr::Var(2));
    /// ```
    #[allow(non_snake_case)]
    pub fn IndexedVars(num_vars: usize) -> Vec<Expr> {
        (0..num_vars).map(Expr::Var).collect()
    }

    /// true for `Zero`, `Unity` and `Const`
    pub fn is_constant(&self) -> bool {
        matches!(self, Expr::Zero | Expr::Unity | Expr::Const(_))
    }

    /// Numeric value of a literal, `None` for anything else.
    pub fn constant_value(&self) -> Option<f64> {
        match self {
            Expr::Zero => Some(0.0),
            Expr::Unity => Some(1.0),
            Expr::Const(val) => Some(*val),
            _ => None,
        }
    }

    pub fn is_zero(&self) -> bool {
        matches!(self, Expr::Zero)
    }

    pub fn is_unity(&self) -> bool {
        matches!(self, Expr::Unity)
    }

    /// true for the two-operand algebraic nodes `+ - * / ^`
    pub fn is_binary_operator(&self) -> bool {
        matches!(
            self,
            Expr::Add(..) | Expr::Sub(..) | Expr::Mul(..) | Expr::Div(..) | Expr::Pow(..)
        )
    }

    /// Borrowed view of the node by shape. Every variant maps to exactly one
    /// [`Node`], so code matching on the view covers all of `Expr`.
    pub fn node(&self) -> Node<'_> {
        match self {
            Expr::Zero => Node::Literal(0.0),
            Expr::Unity => Node::Literal(1.0),
            Expr::Const(val) => Node::Literal(*val),
            Expr::Var(index) => Node::Var(*index),
            Expr::Neg(arg) => Node::Neg(arg),
            Expr::Add(lhs, rhs) => Node::Binary(BinaryOp::Add, lhs, rhs),
            Expr::Sub(lhs, rhs) => Node::Binary(BinaryOp::Sub, lhs, rhs),
            Expr::Mul(lhs, rhs) => Node::Binary(BinaryOp::Mul, lhs, rhs),
            Expr::Div(lhs, rhs) => Node::Binary(BinaryOp::Div, lhs, rhs),
            Expr::Pow(lhs, rhs) => Node::Binary(BinaryOp::Pow, lhs, rhs),
            Expr::Exp(arg) => Node::Function(ElementaryFn::Exp, arg),
            Expr::Log(arg) => Node::Function(ElementaryFn::Log, arg),
            Expr::Sqrt(arg) => Node::Function(ElementaryFn::Sqrt, arg),
            Expr::Sin(arg) => Node::Function(ElementaryFn::Sin, arg),
            Expr::Cos(arg) => Node::Function(ElementaryFn::Cos, arg),
            Expr::Tan(arg) => Node::Function(ElementaryFn::Tan, arg),
            Expr::Sinh(arg) => Node::Function(ElementaryFn::Sinh, arg),
            Expr::Cosh(arg) => Node::Function(ElementaryFn::Cosh, arg),
            Expr::Tanh(arg) => Node::Function(ElementaryFn::Tanh, arg),
            Expr::Asin(arg) => Node::Function(ElementaryFn::Asin, arg),
            Expr::Acos(arg) => Node::Function(ElementaryFn::Acos, arg),
            Expr::Atan(arg) => Node::Function(ElementaryFn::Atan, arg),
            Expr::Asinh(arg) => Node::Function(ElementaryFn::Asinh, arg),
            Expr::Acosh(arg) => Node::Function(ElementaryFn::Acosh, arg),
            Expr::Atanh(arg) => Node::Function(ElementaryFn::Atanh, arg),
        }
    }

    /// Splits a binary node into its operator and operands.
    pub fn as_binary(&self) -> Option<(BinaryOp, &Expr, &Expr)> {
        match self.node() {
            Node::Binary(op, lhs, rhs) => Some((op, lhs, rhs)),
            _ => None,
        }
    }

    /// Splits an elementary-function node into its tag and argument.
    pub fn as_function(&self) -> Option<(ElementaryFn, &Expr)> {
        match self.node() {
            Node::Function(f, arg) => Some((f, arg)),
            _ => None,
        }
    }

    /// Owned version of [`Expr::as_function`]; hands the expression back
    /// unchanged when it is not a function node.
    pub fn into_function(self) -> Result<(ElementaryFn, Expr), Expr> {
        let (f, arg) = match self {
            Expr::Exp(arg) => (ElementaryFn::Exp, arg),
            Expr::Log(arg) => (ElementaryFn::Log, arg),
            Expr::Sqrt(arg) => (ElementaryFn::Sqrt, arg),
            Expr::Sin(arg) => (ElementaryFn::Sin, arg),
            Expr::Cos(arg) => (ElementaryFn::Cos, arg),
            Expr::Tan(arg) => (ElementaryFn::Tan, arg),
            Expr::Sinh(arg) => (ElementaryFn::Sinh, arg),
            Expr::Cosh(arg) => (ElementaryFn::Cosh, arg),
            Expr::Tanh(arg) => (ElementaryFn::Tanh, arg),
            Expr::Asin(arg) => (ElementaryFn::Asin, arg),
            Expr::Acos(arg) => (ElementaryFn::Acos, arg),
            Expr::Atan(arg) => (ElementaryFn::Atan, arg),
            Expr::Asinh(arg) => (ElementaryFn::Asinh, arg),
            Expr::Acosh(arg) => (ElementaryFn::Acosh, arg),
            Expr::Atanh(arg) => (ElementaryFn::Atanh, arg),
            other => return Err(other),
        };
        Ok((f, *arg))
    }

    /// Number of nodes in the tree.
    pub fn node_count(&self) -> usize {
        match self.node() {
            Node::Literal(_) | Node::Var(_) => 1,
            Node::Neg(arg) | Node::Function(_, arg) => 1 + arg.node_count(),
            Node::Binary(_, lhs, rhs) => 1 + lhs.node_count() + rhs.node_count(),
        }
    }
}

impl From<f64> for Expr {
    fn from(value: f64) -> Self {
        Expr::constant(value)
    }
}

impl From<i32> for Expr {
    fn from(value: i32) -> Self {
        Expr::constant(value as f64)
    }
}

//___________________________________OPERATORS____________________________________

macro_rules! impl_binary_operator {
    ($op_trait:ident, $op_method:ident, $assign_trait:ident, $assign_method:ident, $constructor:path) => {
        impl std::ops::$op_trait for Expr {
            type Output = Expr;
            fn $op_method(self, rhs: Expr) -> Expr {
                $constructor(self, rhs)
            }
        }

        impl std::ops::$op_trait<&Expr> for Expr {
            type Output = Expr;
            fn $op_method(self, rhs: &Expr) -> Expr {
                $constructor(self, rhs.clone())
            }
        }

        impl std::ops::$op_trait<Expr> for &Expr {
            type Output = Expr;
            fn $op_method(self, rhs: Expr) -> Expr {
                $constructor(self.clone(), rhs)
            }
        }

        impl std::ops::$op_trait<&Expr> for &Expr {
            type Output = Expr;
            fn $op_method(self, rhs: &Expr) -> Expr {
                $constructor(self.clone(), rhs.clone())
            }
        }

        impl std::ops::$op_trait<f64> for Expr {
            type Output = Expr;
            fn $op_method(self, rhs: f64) -> Expr {
                $constructor(self, Expr::constant(rhs))
            }
        }

        impl std::ops::$op_trait<f64> for &Expr {
            type Output = Expr;
            fn $op_method(self, rhs: f64) -> Expr {
                $constructor(self.clone(), Expr::constant(rhs))
            }
        }

        impl std::ops::$op_trait<Expr> for f64 {
            type Output = Expr;
            fn $op_method(self, rhs: Expr) -> Expr {
                $constructor(Expr::constant(self), rhs)
            }
        }

        impl std::ops::$op_trait<&Expr> for f64 {
            type Output = Expr;
            fn $op_method(self, rhs: &Expr) -> Expr {
                $constructor(Expr::constant(self), rhs.clone())
            }
        }

        impl std::ops::$assign_trait for Expr {
            fn $assign_method(&mut self, rhs: Expr) {
                let lhs = std::mem::replace(self, Expr::Zero);
                *self = $constructor(lhs, rhs);
            }
        }
    };
}

impl_binary_operator!(Add, add, AddAssign, add_assign, Expr::sum);
impl_binary_operator!(Sub, sub, SubAssign, sub_assign, Expr::difference);
impl_binary_operator!(Mul, mul, MulAssign, mul_assign, Expr::product);
impl_binary_operator!(Div, div, DivAssign, div_assign, Expr::quotient);

impl std::ops::Neg for Expr {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Expr::negation(self)
    }
}

impl std::ops::Neg for &Expr {
    type Output = Expr;

    fn neg(self) -> Self::Output {
        Expr::negation(self.clone())
    }
}

//___________________________________MACROS____________________________________

/// Macro to create positional variables from a list of names
/// Usage: vars!(x, y, z) -> (Var(0), Var(1), Var(2))
#[macro_export]
macro_rules! vars {
    ($($var:ident),+ $(,)?) => {
        {
            let mut index = 0usize;
            ($(
                {
                    let $var = $crate::symbolic::symbolic_engine::Expr::Var(index);
                    index += 1;
                    $var
                }
            ),+)
        }
    };
}
