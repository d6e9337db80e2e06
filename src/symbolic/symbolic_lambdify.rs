//! # Evaluation
//!
//! Numerical evaluation of expression trees. Arguments are positional: `Var(n)`
//! reads `args[n]`, and asking for an index past the end of `args` fails with
//! [`ExprError::TooFewArguments`]. Evaluation is a plain structural recursion with
//! no caching, so the same tree and arguments always give the same value.

use crate::symbolic::symbolic_engine::{BinaryOp, Expr, Node};
use crate::symbolic::symbolic_errors::ExprError;
use log::warn;

/// Boxed closure produced by [`Expr::lambdify`].
pub type LambdifiedFn = Box<dyn Fn(&[f64]) -> Result<f64, ExprError> + Send + Sync>;

impl Expr {
    /// Evaluates the expression with `args[n]` bound to `Var(n)`.
    ///
    /// # Examples
    /// ```rust, ignore
    /// let f = X0 * X1 + 1.0;
    /// assert_eq!(f.eval(&[2.0, 3.0]).unwrap(), 7.0);
    /// ```
    pub fn eval(&self, args: &[f64]) -> Result<f64, ExprError> {
        self.eval_node(args).inspect_err(|err| warn!("evaluation failed: {}", err))
    }

    fn eval_node(&self, args: &[f64]) -> Result<f64, ExprError> {
        let value = match self.node() {
            Node::Literal(val) => val,
            Node::Var(index) => *args.get(index).ok_or(ExprError::TooFewArguments {
                index,
                supplied: args.len(),
            })?,
            Node::Neg(arg) => -arg.eval_node(args)?,
            Node::Binary(op, lhs, rhs) => {
                let (lhs, rhs) = (lhs.eval_node(args)?, rhs.eval_node(args)?);
                match op {
                    BinaryOp::Add => lhs + rhs,
                    BinaryOp::Sub => lhs - rhs,
                    BinaryOp::Mul => lhs * rhs,
                    BinaryOp::Div => lhs / rhs,
                    BinaryOp::Pow => lhs.powf(rhs),
                }
            }
            Node::Function(f, arg) => f.apply(arg.eval_node(args)?),
        };
        Ok(value)
    }

    /// Converts the expression into a reusable closure over a copy of the tree.
    pub fn lambdify(&self) -> LambdifiedFn {
        let expr = self.clone();
        Box::new(move |args: &[f64]| expr.eval(args))
    }

    /// Evaluates the expression at every point of `points`, stopping at the
    /// first failure.
    pub fn eval_many(&self, points: &[Vec<f64>]) -> Result<Vec<f64>, ExprError> {
        points.iter().map(|point| self.eval(point)).collect()
    }

    /// Sorted, deduplicated indices of all variables in the expression.
    pub fn variable_indices(&self) -> Vec<usize> {
        let mut indices = Vec::new();
        self.collect_variables(&mut indices);
        indices.sort_unstable();
        indices.dedup();
        indices
    }

    fn collect_variables(&self, indices: &mut Vec<usize>) {
        match self.node() {
            Node::Literal(_) => {}
            Node::Var(index) => indices.push(index),
            Node::Neg(arg) | Node::Function(_, arg) => arg.collect_variables(indices),
            Node::Binary(_, lhs, rhs) => {
                lhs.collect_variables(indices);
                rhs.collect_variables(indices);
            }
        }
    }

    /// One more than the highest variable index, a literal counting as index 0.
    /// An expression without variables therefore has dimension 1.
    pub fn dimension(&self) -> usize {
        self.variable_indices().last().map_or(1, |max| max + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbolic::symbolic_engine::{X0, X1, X2};
    use approx::assert_relative_eq;

    #[test]
    fn test_eval_leaves() {
        assert_eq!(Expr::Zero.eval(&[]).unwrap(), 0.0);
        assert_eq!(Expr::Unity.eval(&[]).unwrap(), 1.0);
        assert_eq!(Expr::Const(2.5).eval(&[]).unwrap(), 2.5);
        assert_eq!(X1.eval(&[3.0, 4.0]).unwrap(), 4.0);
    }

    #[test]
    fn test_eval_algebra() {
        let f = (X0 + 1.0) * (X0 - 1.0) / X1;
        assert_relative_eq!(f.eval(&[3.0, 2.0]).unwrap(), 4.0, epsilon = 1e-12);
        let g = -X0.pow(X1);
        assert_relative_eq!(g.eval(&[2.0, 3.0]).unwrap(), -8.0, epsilon = 1e-12);
    }

    #[test]
    fn test_eval_functions() {
        let x: f64 = 0.3;
        let cases = vec![
            (X0.exp(), x.exp()),
            (X0.log(), x.ln()),
            (X0.sqrt(), x.sqrt()),
            (X0.sin(), x.sin()),
            (X0.cos(), x.cos()),
            (X0.tan(), x.tan()),
            (X0.sinh(), x.sinh()),
            (X0.cosh(), x.cosh()),
            (X0.tanh(), x.tanh()),
            (X0.asin(), x.asin()),
            (X0.acos(), x.acos()),
            (X0.atan(), x.atan()),
            (X0.asinh(), x.asinh()),
            (X0.atanh(), x.atanh()),
        ];
        for (f, expected) in cases {
            assert_relative_eq!(f.eval(&[x]).unwrap(), expected, epsilon = 1e-12);
        }
        assert_relative_eq!(X0.acosh().eval(&[1.5]).unwrap(), 1.5f64.acosh(), epsilon = 1e-12);
    }

    #[test]
    fn test_too_few_arguments() {
        let f = X0 * X2;
        let err = f.eval(&[1.0, 2.0]).unwrap_err();
        assert_eq!(err, ExprError::TooFewArguments { index: 2, supplied: 2 });
    }

    #[test]
    fn test_extra_arguments_are_ignored() {
        assert_eq!(X0.eval(&[5.0, 6.0, 7.0]).unwrap(), 5.0);
    }

    #[test]
    fn test_lambdify_and_eval_many() {
        let f = (X0 * X1).lambdify();
        assert_eq!(f(&[2.0, 5.0]).unwrap(), 10.0);
        let g = X0 + X1;
        let values = g.eval_many(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(values, vec![3.0, 7.0]);
        assert!(g.eval_many(&[vec![1.0]]).is_err());
    }

    #[test]
    fn test_dimension() {
        assert_eq!(Expr::Const(3.0).dimension(), 1);
        assert_eq!(Expr::Zero.dimension(), 1);
        assert_eq!(X0.dimension(), 1);
        assert_eq!((X0.sin() * X2.exp()).dimension(), 3);
        assert_eq!((X2 * X0 + X2).variable_indices(), vec![0, 2]);
    }
}
