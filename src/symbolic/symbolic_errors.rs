use std::fmt;

/// Errors raised while building or evaluating expressions.
///
/// Simplification, differentiation and printing are total over well-formed
/// trees; only dynamic operand conversion and evaluation can fail.
#[derive(Debug, Clone, PartialEq)]
pub enum ExprError {
    /// an operand handed to a constructor is neither a number nor an `Expr`
    InvalidOperandKind { type_name: String },
    /// `Var(index)` was evaluated with only `supplied` argument values
    TooFewArguments { index: usize, supplied: usize },
}

impl fmt::Display for ExprError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ExprError::InvalidOperandKind { type_name } => write!(
                f,
                "Invalid operand kind: expected a number or an expression, got {}",
                type_name
            ),
            ExprError::TooFewArguments { index, supplied } => write!(
                f,
                "Too few arguments: variable x{} needs at least {} values, got {}",
                index,
                index + 1,
                supplied
            ),
        }
    }
}

impl std::error::Error for ExprError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = ExprError::TooFewArguments { index: 2, supplied: 1 };
        assert_eq!(
            err.to_string(),
            "Too few arguments: variable x2 needs at least 3 values, got 1"
        );
        let err = ExprError::InvalidOperandKind {
            type_name: "&str".to_string(),
        };
        assert!(err.to_string().contains("&str"));
    }
}
