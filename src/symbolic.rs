#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
///____________________________________________________________________________________________________________________________
/// # Symbolic engine
/// a module
/// 1) builds symbolic expressions of positional variables x0, x1, ... that simplify themselves on construction
/// 2) evaluates them or turns them into Rust closures
/// 3) differentiates them exactly, to any order
/// 4) turns them into a string expression for printing and control results
///# Example#
/// ```
/// use RustedAD::symbolic::symbolic_engine::{Expr, X0, X1};
/// // f(x0, x1) = x0 * exp(x1) + 1
/// let f = X0 * X1.exp() + 1.0;
/// println!("f = {}", f);
/// // neutral operations never appear in the tree
/// assert_eq!(X0 * 1.0 + 0.0, X0);
/// // evaluate the function, argument i is bound to x_i
/// let value = f.eval(&[2.0, 0.0]).unwrap();
/// assert_eq!(value, 3.0);
/// // differentiate with respect to x0 and x1
/// let df_dx0 = f.diff(0);
/// let df_dx1 = f.diff(1);
/// println!("df_dx0 = {}, df_dx1 = {}", df_dx0, df_dx1);
/// assert_eq!(df_dx0, X1.exp());
/// // mixed derivative d^2 f / dx0 dx1
/// assert_eq!(f.derive(&[0, 1]), X1.exp());
/// // convert symbolic expression to a Rust function and evaluate the function
/// let function_of_x0_and_x1 = f.lambdify();
/// println!("f_res = {:?}", function_of_x0_and_x1(&[1.0, 2.0]));
/// // too few arguments is an error, not a panic
/// assert!(f.eval(&[1.0]).is_err());
/// ```
/// Example2#
/// ```
/// use RustedAD::symbolic::symbolic_engine::X0;
/// // compare numerical and analytical derivatives on points between start and end
/// let f = X0.sin() * X0.exp();
/// let (norm, res) = f.compare_num(0, &[0.0], &[2.0], 50, 1e-6).unwrap();
/// println!("norm = {}, res = {}", norm, res);
/// assert!(res);
/// ```
/// ________________________________________________________________________________________________________________________________________________
pub mod symbolic_engine;
pub mod symbolic_engine_derivatives;
/// smart constructors: local rewrite rules applied while building each node
pub mod symbolic_simplify;
/// numerical evaluation and closures
pub mod symbolic_lambdify;
/// infix printing with minimal brackets and injectable variable names
pub mod symbolic_to_string;
pub mod symbolic_errors;
///________________________________________________________________________________________________________________________________________________
///
/// calculate symbolic gradient and evaluate it
/// Example#
/// ```
/// use RustedAD::symbolic::symbolic_engine::{X0, X1};
/// use RustedAD::symbolic::symbolic_functions::Gradient;
/// use RustedAD::symbolic::symbolic_to_string::NameTable;
///     let f = X0 * X0 * X1;
///     let gradient = Gradient::new(&f);
///     // transform into human readable form with custom names
///     let names = NameTable::new().with(0, "x").with(1, "y");
///     println!("gradient = {}", gradient.to_string_with(&names));
///     // evaluate gradient to numerical values
///     let values = gradient.eval(&[3.0, 2.0]).unwrap();
///     assert_eq!(values, vec![12.0, 9.0]);
/// ```
pub mod symbolic_functions;
/// build expressions from dynamically typed operands
pub mod symbolic_traits;
///______________________________________________________________________________________________________________________________________________
/// numerical helpers: linspace, central differences, norms
/// _____________________________________________________________________________________________________________________________________________
pub mod utils;
