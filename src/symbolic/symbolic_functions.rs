use crate::symbolic::symbolic_engine::Expr;
use crate::symbolic::symbolic_errors::ExprError;
use crate::symbolic::symbolic_to_string::{IndexedNames, VariableNames};
use itertools::Itertools;
use log::info;
use rayon::prelude::*;
use std::fmt;
///
/// calculate symbolic gradient and evaluate it
/// Example#
/// ```
/// use RustedAD::symbolic::symbolic_engine::{X0, X2};
/// use RustedAD::symbolic::symbolic_functions::Gradient;
///     // f(x0, x1, x2) = sin(x0) * exp(x2)
///     let f = X0.sin() * X2.exp();
///     let gradient = Gradient::new(&f);
///     // one partial derivative per variable index up to the highest one used
///     assert_eq!(gradient.dimension(), 3);
///     println!("gradient = {}", gradient);
///     // evaluate every partial derivative at the same point
///     let values = gradient.eval(&[0.0, 1.0, 0.0]).unwrap();
///     assert_eq!(values, vec![1.0, 0.0, 0.0]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Gradient {
    pub function: Expr,               // the differentiated expression
    pub symbolic_gradient: Vec<Expr>, // d function / d Var(i) for i in 0..dimension
}

impl Gradient {
    /// Builds every first partial derivative of `function`.
    pub fn new(function: &Expr) -> Self {
        let dimension = function.dimension();
        info!("building gradient of dimension {} for {}", dimension, function);
        let symbolic_gradient = (0..dimension).map(|i| function.diff(i)).collect();
        Self {
            function: function.clone(),
            symbolic_gradient,
        }
    }

    /// calculate the symbolic gradient in parallel; same result as [`Gradient::new`]
    pub fn new_parallel(function: &Expr) -> Self {
        let dimension = function.dimension();
        info!(
            "building gradient of dimension {} for {} in parallel",
            dimension, function
        );
        let symbolic_gradient: Vec<Expr> = (0..dimension)
            .into_par_iter()
            .map(|i| function.diff(i))
            .collect();
        Self {
            function: function.clone(),
            symbolic_gradient,
        }
    }

    pub fn dimension(&self) -> usize {
        self.symbolic_gradient.len()
    }

    pub fn derivatives(&self) -> &[Expr] {
        &self.symbolic_gradient
    }

    /// partial derivative by `Var(index)`, `None` past the dimension
    pub fn partial(&self, index: usize) -> Option<&Expr> {
        self.symbolic_gradient.get(index)
    }

    /// Evaluates every partial derivative with the same arguments.
    pub fn eval(&self, args: &[f64]) -> Result<Vec<f64>, ExprError> {
        self.symbolic_gradient
            .iter()
            .map(|partial| partial.eval(args))
            .collect()
    }

    /// Closure evaluating the whole gradient, owning a copy of the partials.
    pub fn lambdify(&self) -> Box<dyn Fn(&[f64]) -> Result<Vec<f64>, ExprError> + Send + Sync> {
        let partials = self.symbolic_gradient.clone();
        Box::new(move |args: &[f64]| partials.iter().map(|partial| partial.eval(args)).collect())
    }

    /// human readable gradient, one string per partial derivative
    pub fn readable_gradient(&self, names: &dyn VariableNames) -> Vec<String> {
        self.symbolic_gradient
            .iter()
            .map(|partial| partial.to_string_with(names))
            .collect()
    }

    /// `(d0, d1, ...)` with variable names resolved through `names`.
    pub fn to_string_with(&self, names: &dyn VariableNames) -> String {
        format!("({})", self.readable_gradient(names).iter().join(", "))
    }
}

impl fmt::Display for Gradient {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_string_with(&IndexedNames))
    }
}
