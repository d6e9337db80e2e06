// SYMBOLIC TRAITS //////////////////////////////////////////////////////////////////
// Conversion of dynamically typed operands into expressions.
// Numbers of the common primitive types and `Expr` itself are accepted,
// anything else is rejected with ExprError::InvalidOperandKind.

use crate::symbolic::symbolic_engine::{BinaryOp, ElementaryFn, Expr};
use crate::symbolic::symbolic_errors::ExprError;
use std::any::Any;

/// A value that can stand as an operand of an expression constructor.
pub trait AsExpression: Any {
    fn as_any(&self) -> &dyn Any;
    fn to_expr(&self) -> Expr;
    fn get_type(&self) -> String {
        std::any::type_name::<Self>().to_string()
    }
}

impl AsExpression for Expr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn to_expr(&self) -> Expr {
        self.clone()
    }
}

macro_rules! impl_as_expression_for_number {
    ($($t:ty),+) => {
        $(
            impl AsExpression for $t {
                fn as_any(&self) -> &dyn Any {
                    self
                }
                fn to_expr(&self) -> Expr {
                    Expr::constant(*self as f64)
                }
            }
        )+
    };
}

impl_as_expression_for_number!(f64, f32, i32, i64, u32, u64, usize, isize);

// tries every accepted operand type in turn
fn downcast_operand(value: &dyn Any) -> Option<Expr> {
    macro_rules! try_downcast {
        ($($t:ty),+) => {
            $(
                if let Some(v) = value.downcast_ref::<$t>() {
                    return Some(v.to_expr());
                }
            )+
        };
    }
    try_downcast!(Expr, f64, f32, i32, i64, u32, u64, usize, isize);
    None
}

impl Expr {
    /// Converts a type-erased operand into an expression.
    ///
    /// Only the concrete type id survives erasure, so the error names the
    /// operand as "unsupported operand"; use [`Expr::from_operand`] when the
    /// static type is known.
    pub fn from_any(value: &dyn Any) -> Result<Expr, ExprError> {
        downcast_operand(value).ok_or_else(|| ExprError::InvalidOperandKind {
            type_name: format!("unsupported operand {:?}", value.type_id()),
        })
    }

    /// Converts any `'static` value into an expression, reporting its type
    /// name when it is neither a number nor an `Expr`.
    ///
    /// # Examples
    /// ```rust, ignore
    /// assert_eq!(Expr::from_operand(&2.0).unwrap(), Expr::Const(2.0));
    /// assert!(Expr::from_operand(&"x").is_err());
    /// ```
    pub fn from_operand<T: Any>(value: &T) -> Result<Expr, ExprError> {
        downcast_operand(value).ok_or_else(|| ExprError::InvalidOperandKind {
            type_name: std::any::type_name::<T>().to_string(),
        })
    }

    /// `lhs op rhs` for type-erased operands.
    pub fn try_binary(op: BinaryOp, lhs: &dyn Any, rhs: &dyn Any) -> Result<Expr, ExprError> {
        let lhs = Expr::from_any(lhs)?;
        let rhs = Expr::from_any(rhs)?;
        Ok(op.apply(lhs, rhs))
    }

    /// `f(arg)` for a type-erased operand.
    pub fn try_function(f: ElementaryFn, arg: &dyn Any) -> Result<Expr, ExprError> {
        Ok(Expr::function(f, Expr::from_any(arg)?))
    }
}
