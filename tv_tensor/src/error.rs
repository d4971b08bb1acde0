use thiserror::Error;

use crate::shape::Shape;

/// Errors from tensor arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TensorError {
    /// Operands of an element-wise op differ in rank or in some dimension.
    #[error("shape mismatch: {left:?} vs {right:?}")]
    ShapeMismatch { left: Shape, right: Shape },
}

pub type TensorResult<T> = Result<T, TensorError>;
