//! # tv_tensor - Fixed-Shape Tensors for Visualization
//!
//! Small, value-like multi-dimensional arrays with exactly the operations the
//! visualizer needs: element-wise addition, scalar multiplication, a nested
//! text rendering, and a lossy fingerprint used to invalidate cached render
//! geometry.
//!
//! ## Overview
//!
//! - [`Shape`] and [`Strides`] - dimensions and row-major layout
//! - [`Tensor`] - immutable shape + flat data, identified by a [`TensorId`]
//! - [`TensorIds`] - explicit id counter owned by the code that creates tensors
//! - [`Fingerprint`] - shape plus first significant digit of every element
//!
//! ## Example
//!
//! ```
//! use tv_tensor::prelude::*;
//!
//! let mut ids = TensorIds::new();
//! let a = Tensor::new(&mut ids, Shape::new(vec![2, 3]), vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
//! let b = a.mult_scalar(2.0, &mut ids);
//! let c = a.add(&b, &mut ids).unwrap();
//!
//! assert_eq!(c.as_slice(), &[3.0, 6.0, 9.0, 12.0, 15.0, 18.0]);
//! assert_eq!(c.fingerprint().as_str(), "2x3_3.6.9.1.1.1");
//! ```

pub mod digits;
pub mod error;
pub mod id;
pub mod shape;
pub mod tensor;

pub use digits::{first_sig_digit, resize_data};
pub use error::{TensorError, TensorResult};
pub use id::{TensorId, TensorIds};
pub use shape::{Shape, Strides};
pub use tensor::{Fingerprint, Tensor};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{TensorError, TensorResult};
    pub use crate::id::{TensorId, TensorIds};
    pub use crate::shape::{Shape, Strides};
    pub use crate::tensor::{Fingerprint, Tensor};
}
