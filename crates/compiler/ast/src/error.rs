//! Errors raised while constructing AST nodes.

/// Errors produced at the parser boundary when raw tokens are turned into
/// AST nodes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AstError {
    /// A numeric literal was built from input that is not an integer.
    #[error("cannot convert `{input}` to an integer literal")]
    ValueConversion { input: String },

    #[error("unknown move direction `{0}`")]
    UnknownDirection(String),

    #[error("unknown pen status `{0}`")]
    UnknownPenState(String),
}

pub type AstResult<T> = Result<T, AstError>;
