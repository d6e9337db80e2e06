//! # Smart Constructors
//!
//! Every node of an expression tree is created here. Each constructor tries an
//! ordered list of rewrite rules and returns the first match; only when no rule
//! applies does it allocate the plain node. Because the rules run at construction
//! time, derivatives and other generated trees never accumulate neutral
//! operations and there is no separate "simplify" pass.
//!
//! ## Rules, in priority order
//!
//! | Constructor | Rules |
//! |---|---|
//! | `sum` | fold constants; `0 + x = x`; `x + 0 = x` |
//! | `difference` | fold constants; `x - 0 = x`; `0 - x = -x` |
//! | `product` | fold constants; `0 * x = 0`; `1 * x = x`; `(-a) * (-b) = a * b`; `exp(a) * exp(b) = exp(a + b)`; `a * (1 / b) = a / b` (both sides) |
//! | `quotient` | fold constants; `0 / x = 0`; `x / 1 = x`; `x / x = 1`; `(-a) / (-b) = a / b`; `exp(a) / exp(b) = exp(a - b)`; `a / (b / c) = (a * c) / b`; `(a / b) / c = a / (b * c)` |
//! | `power` | `0 ^ 0 = 1`; `0 ^ x = 0`; `1 ^ x = 1`; `x ^ 0 = 1`; `x ^ 1 = x`; fold constants; `(a / b) ^ (-c) = (b / a) ^ c` (also for a negative literal exponent); `exp(a) ^ b = exp(a * b)`; `(a ^ b) ^ c = a ^ (b * c)` |
//! | `negation` | `--x = x`; `-0 = 0`; fold constants; `-(a * b) = (-a) * b`; `-(a / b) = (-a) / b` |
//! | `function` | `f(f⁻¹(y)) = y` for the pairs exp/log, sin/asin, cos/acos, tan/atan, sinh/asinh, cosh/acosh, tanh/atanh |
//!
//! Folded literals equal to exactly 0 or 1 become `Zero` / `Unity`.

use crate::symbolic::symbolic_engine::{ElementaryFn, Expr};
use log::trace;

/// Folds two literals with `op`, `None` unless both operands are literals.
fn fold(lhs: &Expr, rhs: &Expr, op: impl Fn(f64, f64) -> f64) -> Option<Expr> {
    match (lhs.constant_value(), rhs.constant_value()) {
        (Some(a), Some(b)) => Some(Expr::constant(op(a, b))),
        _ => None,
    }
}

impl Expr {
    //___________________________________LITERALS____________________________________

    /// Numeric literal; exactly 0 and 1 become `Zero` and `Unity`.
    pub fn constant(value: f64) -> Expr {
        if value == 0.0 {
            Expr::Zero
        } else if value == 1.0 {
            Expr::Unity
        } else {
            Expr::Const(value)
        }
    }

    //___________________________________ALGEBRA____________________________________

    /// lhs + rhs
    pub fn sum(lhs: Expr, rhs: Expr) -> Expr {
        if let Some(folded) = fold(&lhs, &rhs, |a, b| a + b) {
            trace!("sum: folded constants");
            return folded;
        }
        match (lhs, rhs) {
            (Expr::Zero, rhs) => rhs,
            (lhs, Expr::Zero) => lhs,
            (lhs, rhs) => Expr::Add(lhs.boxed(), rhs.boxed()),
        }
    }

    /// lhs - rhs
    pub fn difference(lhs: Expr, rhs: Expr) -> Expr {
        if let Some(folded) = fold(&lhs, &rhs, |a, b| a - b) {
            trace!("difference: folded constants");
            return folded;
        }
        match (lhs, rhs) {
            (lhs, Expr::Zero) => lhs,
            (Expr::Zero, rhs) => Expr::negation(rhs),
            (lhs, rhs) => Expr::Sub(lhs.boxed(), rhs.boxed()),
        }
    }

    /// lhs * rhs
    pub fn product(lhs: Expr, rhs: Expr) -> Expr {
        if let Some(folded) = fold(&lhs, &rhs, |a, b| a * b) {
            trace!("product: folded constants");
            return folded;
        }
        match (lhs, rhs) {
            (Expr::Zero, _) | (_, Expr::Zero) => Expr::Zero,
            (Expr::Unity, rhs) => rhs,
            (lhs, Expr::Unity) => lhs,
            (Expr::Neg(a), Expr::Neg(b)) => {
                trace!("product: (-a) * (-b) -> a * b");
                Expr::product(*a, *b)
            }
            (Expr::Exp(a), Expr::Exp(b)) => {
                trace!("product: exp(a) * exp(b) -> exp(a + b)");
                Expr::sum(*a, *b).exp()
            }
            (lhs, Expr::Div(num, den)) if num.is_unity() => {
                trace!("product: a * (1 / b) -> a / b");
                Expr::quotient(lhs, *den)
            }
            (Expr::Div(num, den), rhs) if num.is_unity() => {
                trace!("product: (1 / b) * a -> a / b");
                Expr::quotient(rhs, *den)
            }
            (lhs, rhs) => Expr::Mul(lhs.boxed(), rhs.boxed()),
        }
    }

    /// lhs / rhs
    pub fn quotient(lhs: Expr, rhs: Expr) -> Expr {
        if let Some(folded) = fold(&lhs, &rhs, |a, b| a / b) {
            trace!("quotient: folded constants");
            return folded;
        }
        match (lhs, rhs) {
            (Expr::Zero, _) => Expr::Zero,
            (lhs, Expr::Unity) => lhs,
            (lhs, rhs) if lhs == rhs => {
                trace!("quotient: x / x -> 1");
                Expr::Unity
            }
            (Expr::Neg(a), Expr::Neg(b)) => {
                trace!("quotient: (-a) / (-b) -> a / b");
                Expr::quotient(*a, *b)
            }
            (Expr::Exp(a), Expr::Exp(b)) => {
                trace!("quotient: exp(a) / exp(b) -> exp(a - b)");
                Expr::difference(*a, *b).exp()
            }
            (a, Expr::Div(b, c)) => {
                trace!("quotient: a / (b / c) -> (a * c) / b");
                Expr::quotient(Expr::product(a, *c), *b)
            }
            (Expr::Div(a, b), c) => {
                trace!("quotient: (a / b) / c -> a / (b * c)");
                Expr::quotient(*a, Expr::product(*b, c))
            }
            (lhs, rhs) => Expr::Div(lhs.boxed(), rhs.boxed()),
        }
    }

    /// base ^ exponent
    ///
    /// `0 ^ 0` is 1, and a zero base absorbs every other exponent, negative ones
    /// included.
    pub fn power(base: Expr, exponent: Expr) -> Expr {
        if base.is_zero() && exponent.is_zero() {
            return Expr::Unity;
        }
        if base.is_zero() {
            return Expr::Zero;
        }
        if base.is_unity() || exponent.is_zero() {
            return Expr::Unity;
        }
        if exponent.is_unity() {
            return base;
        }
        if let Some(folded) = fold(&base, &exponent, f64::powf) {
            trace!("power: folded constants");
            return folded;
        }
        match (base, exponent) {
            (Expr::Div(a, b), Expr::Neg(c)) => {
                trace!("power: (a / b) ^ (-c) -> (b / a) ^ c");
                Expr::power(Expr::quotient(*b, *a), *c)
            }
            // negated literals are folded, so -c arrives as a negative Const
            (Expr::Div(a, b), Expr::Const(c)) if c < 0.0 => {
                trace!("power: (a / b) ^ (-c) -> (b / a) ^ c");
                Expr::power(Expr::quotient(*b, *a), Expr::constant(-c))
            }
            (Expr::Exp(a), b) => {
                trace!("power: exp(a) ^ b -> exp(a * b)");
                Expr::product(*a, b).exp()
            }
            (Expr::Pow(a, b), c) => {
                trace!("power: (a ^ b) ^ c -> a ^ (b * c)");
                Expr::power(*a, Expr::product(*b, c))
            }
            (base, exponent) => Expr::Pow(base.boxed(), exponent.boxed()),
        }
    }

    /// -arg
    pub fn negation(arg: Expr) -> Expr {
        match arg {
            Expr::Neg(inner) => {
                trace!("negation: --x -> x");
                *inner
            }
            Expr::Zero => Expr::Zero,
            Expr::Unity => Expr::Const(-1.0),
            Expr::Const(val) => Expr::constant(-val),
            Expr::Mul(a, b) => {
                trace!("negation: -(a * b) -> (-a) * b");
                Expr::product(Expr::negation(*a), *b)
            }
            Expr::Div(a, b) => {
                trace!("negation: -(a / b) -> (-a) / b");
                Expr::quotient(Expr::negation(*a), *b)
            }
            other => Expr::Neg(other.boxed()),
        }
    }

    //___________________________________FUNCTIONS____________________________________

    /// f(arg), unwrapping `arg` when it is the inverse function's node.
    pub fn function(f: ElementaryFn, arg: Expr) -> Expr {
        match arg.into_function() {
            Ok((inner_fn, inner_arg)) if f.inverse() == Some(inner_fn) => {
                trace!("function: {}({}(y)) -> y", f, inner_fn);
                inner_arg
            }
            Ok((inner_fn, inner_arg)) => f.wrap(inner_fn.wrap(inner_arg)),
            Err(arg) => f.wrap(arg),
        }
    }

    /// Creates power expression self^rhs.
    pub fn pow(self, rhs: impl Into<Expr>) -> Expr {
        Expr::power(self, rhs.into())
    }

    /// e^(self)
    pub fn exp(self) -> Expr {
        Expr::function(ElementaryFn::Exp, self)
    }

    /// natural logarithm
    pub fn log(self) -> Expr {
        Expr::function(ElementaryFn::Log, self)
    }

    pub fn sqrt(self) -> Expr {
        Expr::function(ElementaryFn::Sqrt, self)
    }

    pub fn sin(self) -> Expr {
        Expr::function(ElementaryFn::Sin, self)
    }

    pub fn cos(self) -> Expr {
        Expr::function(ElementaryFn::Cos, self)
    }

    pub fn tan(self) -> Expr {
        Expr::function(ElementaryFn::Tan, self)
    }

    pub fn sinh(self) -> Expr {
        Expr::function(ElementaryFn::Sinh, self)
    }

    pub fn cosh(self) -> Expr {
        Expr::function(ElementaryFn::Cosh, self)
    }

    pub fn tanh(self) -> Expr {
        Expr::function(ElementaryFn::Tanh, self)
    }

    pub fn asin(self) -> Expr {
        Expr::function(ElementaryFn::Asin, self)
    }

    pub fn acos(self) -> Expr {
        Expr::function(ElementaryFn::Acos, self)
    }

    pub fn atan(self) -> Expr {
        Expr::function(ElementaryFn::Atan, self)
    }

    pub fn asinh(self) -> Expr {
        Expr::function(ElementaryFn::Asinh, self)
    }

    pub fn acosh(self) -> Expr {
        Expr::function(ElementaryFn::Acosh, self)
    }

    pub fn atanh(self) -> Expr {
        Expr::function(ElementaryFn::Atanh, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbolic::symbolic_engine::{X0, X1};
    use strum::IntoEnumIterator;

    #[test]
    fn test_constant_folding() {
        assert_eq!(Expr::constant(3.0) + 4.0, Expr::Const(7.0));
        assert_eq!(Expr::constant(3.0) - 3.0, Expr::Zero);
        assert_eq!(Expr::constant(0.5) * 2.0, Expr::Unity);
        assert_eq!(Expr::constant(6.0) / 3.0, Expr::Const(2.0));
        assert_eq!(Expr::constant(2.0).pow(3.0), Expr::Const(8.0));
        assert_eq!(-Expr::constant(2.0), Expr::Const(-2.0));
        assert_eq!(-Expr::Unity, Expr::Const(-1.0));
    }

    #[test]
    fn test_literal_normalisation() {
        assert_eq!(Expr::constant(0.0), Expr::Zero);
        assert_eq!(Expr::constant(1.0), Expr::Unity);
        assert_eq!(Expr::constant(2.5), Expr::Const(2.5));
        assert_eq!(Expr::from(1), Expr::Unity);
    }

    #[test]
    fn test_identity_elimination() {
        assert_eq!(X0 + 0.0, X0);
        assert_eq!(0.0 + X0, X0);
        assert_eq!(X0 - 0.0, X0);
        assert_eq!(0.0 - X0, Expr::Neg(X0.boxed()));
        assert_eq!(X0 * 1.0, X0);
        assert_eq!(1.0 * X0, X0);
        assert_eq!(X0 * 0.0, Expr::Zero);
        assert_eq!(0.0 * X0, Expr::Zero);
        assert_eq!(X0 / 1.0, X0);
        assert_eq!(0.0 / X0, Expr::Zero);
        assert_eq!(X0.pow(1.0), X0);
        assert_eq!(X0.pow(0.0), Expr::Unity);
        assert_eq!(-(-X0), X0);
        assert_eq!(-Expr::Zero, Expr::Zero);
    }

    #[test]
    fn test_power_special_bases() {
        assert_eq!(Expr::Zero.pow(Expr::Zero), Expr::Unity);
        assert_eq!(Expr::Zero.pow(X0), Expr::Zero);
        assert_eq!(Expr::Zero.pow(-1.0), Expr::Zero);
        assert_eq!(Expr::Unity.pow(X0), Expr::Unity);
    }

    #[test]
    fn test_division_by_self() {
        let f = X0.sin() + X1;
        assert_eq!(&f / &f, Expr::Unity);
    }

    #[test]
    fn test_negated_operands_cancel() {
        assert_eq!((-X0) * (-X1), Expr::Mul(X0.boxed(), X1.boxed()));
        assert_eq!((-X0) / (-X1), Expr::Div(X0.boxed(), X1.boxed()));
    }

    #[test]
    fn test_negation_moves_into_products() {
        assert_eq!(-(X0 * X1), Expr::Mul(Expr::Neg(X0.boxed()).boxed(), X1.boxed()));
        assert_eq!(-(X0 / X1), Expr::Div(Expr::Neg(X0.boxed()).boxed(), X1.boxed()));
        assert_eq!(-(-X0 * 1.0), X0);
    }

    #[test]
    fn test_exponential_merging() {
        assert_eq!(X0.exp() * X1.exp(), (X0 + X1).exp());
        assert_eq!(X0.exp() / X1.exp(), (X0 - X1).exp());
        assert_eq!(Expr::Unity.exp() * X0.exp(), (Expr::Unity + X0).exp());
        assert_eq!(X0.exp().pow(2.0), (X0 * 2.0).exp());
    }

    #[test]
    fn test_reciprocal_products() {
        assert_eq!(X0 * (1.0 / X1), Expr::Div(X0.boxed(), X1.boxed()));
        assert_eq!((1.0 / X1) * X0, Expr::Div(X0.boxed(), X1.boxed()));
    }

    #[test]
    fn test_nested_quotients() {
        // a / (b / c) -> (a * c) / b
        let expected = Expr::Div(Expr::Mul(X0.boxed(), Expr::Var(2).boxed()).boxed(), X1.boxed());
        assert_eq!(X0 / (X1 / Expr::Var(2)), expected);
        // (a / b) / c -> a / (b * c)
        let expected = Expr::Div(X0.boxed(), Expr::Mul(X1.boxed(), Expr::Var(2).boxed()).boxed());
        assert_eq!((X0 / X1) / Expr::Var(2), expected);
    }

    #[test]
    fn test_nested_powers() {
        assert_eq!(X0.pow(2.0).pow(2.0), X0.pow(4.0));
        assert_eq!((1.0 / X0).pow(-1.0), X0);
    }

    #[test]
    fn test_inverse_functions_cancel() {
        for f in ElementaryFn::iter() {
            if let Some(inverse) = f.inverse() {
                let nested = Expr::function(f, Expr::function(inverse, X0));
                assert_eq!(nested, X0, "{}({}(x0)) should cancel", f, inverse);
            }
        }
        assert_eq!(X0.log().exp(), X0);
        assert_eq!(X0.exp().log(), X0);
        assert_eq!(X0.asin().sin(), X0);
        assert_eq!(X0.sin().asin(), X0);
    }

    #[test]
    fn test_non_inverse_functions_nest() {
        let f = X0.sin().cos();
        assert_eq!(f, Expr::Cos(Expr::Sin(X0.boxed()).boxed()));
        let g = X0.sqrt().exp();
        assert_eq!(g, Expr::Exp(Expr::Sqrt(X0.boxed()).boxed()));
    }

    #[test]
    fn test_construction_is_deterministic() {
        let build = || (X0.sin() * X1.exp() + 2.0) / (X0 - 1.0);
        assert_eq!(build(), build());
    }

    #[test]
    fn test_assign_operators_simplify() {
        let mut expr = X0;
        expr += Expr::Zero;
        assert_eq!(expr, X0);
        expr *= Expr::Unity;
        assert_eq!(expr, X0);
        expr -= Expr::Zero;
        assert_eq!(expr, X0);
        expr /= Expr::Unity;
        assert_eq!(expr, X0);
        expr *= Expr::Zero;
        assert_eq!(expr, Expr::Zero);
    }
}
