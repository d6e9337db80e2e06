//! # Symbolic Engine Derivatives Module
//!
//! Exact symbolic differentiation of [`Expr`] trees with respect to positional
//! variables, plus numerical cross-checks of the result.
//!
//! ## Key Methods
//!
//! ### Differentiation
//! - `diff(index)` - partial derivative with respect to `Var(index)`
//! - `derive(&[i, j, ...])` - mixed partial derivative, indices applied left to right
//! - `n_th_derivative(index, n)` - n-th derivative with respect to one variable
//! - `diff_multi()` - every first partial derivative up to the expression dimension
//!
//! ### Numerical Analysis
//! - `compare_num(index, ...)` - validate one partial derivative numerically
//! - `compare_num_all(...)` - validate every partial derivative
//!
//! ## Interesting Code Features
//!
//! 1. **Simplified on the fly**: every derivative node is built through the smart
//!    constructors, so `d/dx (x * y)` is `y`, not `1 * y + x * 0`.
//!
//! 2. **Chain rule by table**: each elementary function contributes only its outer
//!    derivative; the argument's derivative is multiplied in front of it.
//!
//! 3. **Numerical Validation**: analytic partials are compared against central
//!    differences of the evaluated expression along a line of sample points.

use crate::symbolic::symbolic_engine::{BinaryOp, ElementaryFn, Expr, Node};
use crate::symbolic::symbolic_errors::ExprError;
use crate::symbolic::utils::{linspace_points, norm, numerical_partial};
use log::debug;

impl Expr {
    /// DIFFERENTIATION

    /// Computes the analytical partial derivative with respect to `Var(index)`.
    ///
    /// - Product rule: d(f*g) = f'*g + f*g'
    /// - Quotient rule: d(f/g) = (f'*g - f*g')/(g*g), or f'/g for a literal g
    /// - Power rule: d(f^c) = f'*c*f^(c-1) for a literal c,
    ///   d(f^g) = f^g * (f'*g/f + log(f)*g') otherwise
    /// - Chain rule: d(h(f)) = f' * h'(f)
    ///
    /// # Examples
    /// ```rust, ignore
    /// let f = X0.pow(2.0); // x0^2
    /// let df = f.diff(0); // 2 * x0
    /// ```
    pub fn diff(&self, index: usize) -> Expr {
        match self.node() {
            Node::Literal(_) => Expr::Zero,
            Node::Var(n) => {
                if n == index {
                    Expr::Unity
                } else {
                    Expr::Zero
                }
            }
            Node::Neg(arg) => Expr::negation(arg.diff(index)),
            Node::Binary(op, lhs, rhs) => self.diff_binary(op, lhs, rhs, index),
            Node::Function(f, arg) => {
                Expr::product(arg.diff(index), self.outer_derivative(f, arg))
            }
        }
    } // end of diff

    fn diff_binary(&self, op: BinaryOp, lhs: &Expr, rhs: &Expr, index: usize) -> Expr {
        match op {
            BinaryOp::Add => Expr::sum(lhs.diff(index), rhs.diff(index)),
            BinaryOp::Sub => Expr::difference(lhs.diff(index), rhs.diff(index)),
            BinaryOp::Mul => Expr::sum(
                Expr::product(lhs.diff(index), rhs.clone()),
                Expr::product(lhs.clone(), rhs.diff(index)),
            ),
            BinaryOp::Div => {
                if rhs.is_constant() {
                    Expr::quotient(lhs.diff(index), rhs.clone())
                } else {
                    let numerator = Expr::difference(
                        Expr::product(lhs.diff(index), rhs.clone()),
                        Expr::product(lhs.clone(), rhs.diff(index)),
                    );
                    Expr::quotient(numerator, Expr::product(rhs.clone(), rhs.clone()))
                }
            }
            BinaryOp::Pow => {
                let (base, exp) = (lhs, rhs);
                if exp.is_constant() {
                    let lowered =
                        Expr::power(base.clone(), Expr::difference(exp.clone(), Expr::Unity));
                    Expr::product(Expr::product(base.diff(index), exp.clone()), lowered)
                } else {
                    let inner = Expr::sum(
                        Expr::quotient(Expr::product(base.diff(index), exp.clone()), base.clone()),
                        Expr::product(base.clone().log(), exp.diff(index)),
                    );
                    Expr::product(self.clone(), inner)
                }
            }
        }
    }

    /// d f(a) / d a for the function node `self = f(a)`, written in terms of `a`
    /// and of `self` where that is shorter.
    fn outer_derivative(&self, f: ElementaryFn, arg: &Expr) -> Expr {
        let a = || arg.clone();
        let this = || self.clone();
        let one_minus_square = || Expr::difference(Expr::Unity, Expr::product(a(), a()));
        let one_plus_square = || Expr::sum(Expr::Unity, Expr::product(a(), a()));
        match f {
            ElementaryFn::Exp => this(),
            ElementaryFn::Log => Expr::quotient(Expr::Unity, a()),
            ElementaryFn::Sqrt => {
                Expr::quotient(Expr::Unity, Expr::product(Expr::Const(2.0), this()))
            }
            ElementaryFn::Sin => a().cos(),
            ElementaryFn::Cos => Expr::negation(a().sin()),
            ElementaryFn::Tan => Expr::sum(Expr::Unity, Expr::product(this(), this())),
            ElementaryFn::Sinh => a().cosh(),
            ElementaryFn::Cosh => a().sinh(),
            ElementaryFn::Tanh => Expr::difference(Expr::Unity, Expr::product(this(), this())),
            ElementaryFn::Asin => Expr::quotient(Expr::Unity, one_minus_square().sqrt()),
            ElementaryFn::Acos => {
                Expr::negation(Expr::quotient(Expr::Unity, one_minus_square().sqrt()))
            }
            ElementaryFn::Atan => Expr::quotient(Expr::Unity, one_plus_square()),
            ElementaryFn::Asinh => Expr::quotient(Expr::Unity, one_plus_square().sqrt()),
            ElementaryFn::Acosh => Expr::quotient(
                Expr::Unity,
                Expr::product(
                    Expr::difference(a(), Expr::Unity).sqrt(),
                    Expr::sum(a(), Expr::Unity).sqrt(),
                ),
            ),
            ElementaryFn::Atanh => Expr::quotient(Expr::Unity, one_minus_square()),
        }
    }

    /// Mixed partial derivative: differentiates by `indices[0]`, then the result
    /// by `indices[1]`, and so on. An empty slice returns the expression itself.
    ///
    /// # Examples
    /// ```rust, ignore
    /// let f = X0 * X1;
    /// assert_eq!(f.derive(&[0, 1]), Expr::Unity);
    /// ```
    pub fn derive(&self, indices: &[usize]) -> Expr {
        debug!("derive {} by {:?}", self, indices);
        indices
            .iter()
            .fold(self.clone(), |acc, index| acc.diff(*index))
    }

    /// n-th derivative with respect to `Var(index)`.
    pub fn n_th_derivative(&self, index: usize, n: usize) -> Expr {
        self.derive(&vec![index; n])
    }

    /// First partial derivatives with respect to `Var(0)` .. `Var(dimension - 1)`.
    pub fn diff_multi(&self) -> Vec<Expr> {
        (0..self.dimension()).map(|index| self.diff(index)).collect()
    }

    //___________________________________________________________________________________________________________________
    //                     NUMERICAL VALIDATION
    // _________________________________________________________________________________________________________________

    /// Validates the partial derivative by `Var(index)` against central
    /// differences.
    ///
    /// Sample points lie on the straight line from `start` to `end`
    /// (`num_values` of them); `start` and `end` must supply a value for every
    /// variable of the expression.
    ///
    /// # Returns
    /// Tuple of (norm of the difference, norm < max_norm)
    pub fn compare_num(
        &self,
        index: usize,
        start: &[f64],
        end: &[f64],
        num_values: usize,
        max_norm: f64,
    ) -> Result<(f64, bool), ExprError> {
        let derivative = self.diff(index);
        let domain = linspace_points(start, end, num_values);
        let step = numerical_step(start, end, num_values);

        let analytical = derivative.eval_many(&domain)?;
        let numerical = domain
            .iter()
            .map(|point| numerical_partial(|x: &[f64]| self.eval(x), point, index, step))
            .collect::<Result<Vec<f64>, ExprError>>()?;
        let norma_val = norm(&analytical, &numerical);
        Ok((norma_val, norma_val < max_norm))
    }

    /// [`Expr::compare_num`] for every partial derivative up to the dimension.
    pub fn compare_num_all(
        &self,
        start: &[f64],
        end: &[f64],
        num_values: usize,
        max_norm: f64,
    ) -> Result<Vec<(f64, bool)>, ExprError> {
        (0..self.dimension())
            .map(|index| self.compare_num(index, start, end, num_values, max_norm))
            .collect()
    }
}

// finite difference step: a small fraction of the sampling interval
fn numerical_step(start: &[f64], end: &[f64], num_values: usize) -> f64 {
    let max_end = end.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let min_start = start.iter().copied().fold(f64::INFINITY, f64::min);
    let step = (1.0 / 1e4) * (max_end - min_start) / (num_values.max(2) as f64 - 1.0);
    if step.is_finite() && step > 1e-8 {
        step
    } else {
        1e-6
    }
}
