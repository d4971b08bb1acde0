use thiserror::Error;
use tv_tensor::TensorError;

use crate::scene::TensorHandle;

/// Errors from building or driving a scene.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("invalid scene configuration: {0}")]
    InvalidConfig(String),

    #[error("no tensor at {0:?}")]
    UnknownHandle(TensorHandle),

    #[error(transparent)]
    Tensor(#[from] TensorError),
}

pub type SceneResult<T> = Result<T, SceneError>;
