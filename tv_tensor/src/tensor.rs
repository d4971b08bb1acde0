//! The value-like tensor type: fixed shape, flat row-major data.

use std::fmt::{self, Write};

use tracing::{info, warn};

use crate::digits::{first_sig_digit, resize_data};
use crate::error::{TensorError, TensorResult};
use crate::id::{TensorId, TensorIds};
use crate::shape::{Shape, Strides};

/// A fixed-shape tensor of `f32` values stored row-major (last dimension fastest).
///
/// Tensors never change after construction; arithmetic returns new tensors
/// with fresh ids.
#[derive(Clone, Debug)]
pub struct Tensor {
    id: TensorId,
    shape: Shape,
    data: Vec<f32>,
}

impl Tensor {
    /// Create a tensor, drawing its id from `ids`.
    ///
    /// Never fails: if `data` does not hold exactly `shape.numel()` values it
    /// is truncated or zero-padded, and a warning is logged.
    pub fn new(ids: &mut TensorIds, shape: impl Into<Shape>, data: Vec<f32>) -> Self {
        let shape = shape.into();
        let expected = shape.numel();
        let data = if data.len() != expected {
            warn!(
                shape = %shape,
                expected,
                got = data.len(),
                "tensor data length does not match shape; resizing"
            );
            resize_data(data, expected, 0.0)
        } else {
            data
        };

        Tensor {
            id: ids.next_id(),
            shape,
            data,
        }
    }

    pub fn id(&self) -> TensorId {
        self.id
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Number of dimensions.
    pub fn ndim(&self) -> usize {
        self.shape.ndim()
    }

    /// Flat row-major data.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Total number of elements (1 for a scalar shape).
    pub fn numel(&self) -> usize {
        self.shape.numel()
    }

    /// Element-wise sum. Operands must have identical shapes.
    pub fn add(&self, other: &Tensor, ids: &mut TensorIds) -> TensorResult<Tensor> {
        if self.shape != other.shape {
            return Err(TensorError::ShapeMismatch {
                left: self.shape.clone(),
                right: other.shape.clone(),
            });
        }
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a + b)
            .collect();
        Ok(Tensor::new(ids, self.shape.clone(), data))
    }

    /// Element-wise scale by `k`.
    pub fn mult_scalar(&self, k: f32, ids: &mut TensorIds) -> Tensor {
        let data = self.data.iter().map(|&v| v * k).collect();
        Tensor::new(ids, self.shape.clone(), data)
    }

    /// Nested bracketed rendering mirroring the tensor's dimensions.
    ///
    /// The innermost dimension is a flat `[ a, b, c ]` list; every outer
    /// dimension wraps its slices in brackets on their own lines, indented two
    /// spaces per nesting level. A `[2, 3]` tensor renders as:
    ///
    /// ```text
    /// [
    ///   [ 1, 2, 3 ],
    ///   [ 4, 5, 6 ]
    /// ]
    /// ```
    pub fn pretty(&self) -> String {
        let mut out = String::new();
        if self.shape.is_scalar() {
            let _ = write!(out, "{}", self.data[0]);
            return out;
        }
        let strides = self.shape.contiguous_strides();
        write_slice(&mut out, &self.shape, &strides, &self.data, 0, 0);
        out
    }

    /// Lossy fingerprint: shape signature plus each element's first significant digit.
    ///
    /// Two tensors of the same shape whose elements agree on their leading
    /// digits have equal fingerprints, whatever the remaining digits are.
    pub fn fingerprint(&self) -> Fingerprint {
        let mut s = format!("{}_", self.shape);
        for (i, &v) in self.data.iter().enumerate() {
            if i > 0 {
                s.push('.');
            }
            let _ = write!(s, "{}", first_sig_digit(v));
        }
        Fingerprint(s)
    }

    /// Log shape and flat data.
    pub fn print(&self) {
        info!(id = %self.id, "{}", self);
    }

    /// Log the nested rendering from [`Tensor::pretty`].
    pub fn pretty_print(&self) {
        info!(id = %self.id, "\n{}", self.pretty());
    }
}

fn write_slice(
    out: &mut String,
    shape: &Shape,
    strides: &Strides,
    data: &[f32],
    depth: usize,
    offset: usize,
) {
    let indent = "  ".repeat(depth);
    let len = shape.dim(depth);

    if depth + 1 == shape.ndim() {
        out.push_str(&indent);
        out.push_str("[ ");
        write_joined(out, &data[offset..offset + len]);
        out.push_str(" ]");
        return;
    }

    out.push_str(&indent);
    out.push_str("[\n");
    let stride = strides.stride(depth);
    for i in 0..len {
        if i > 0 {
            out.push_str(",\n");
        }
        write_slice(out, shape, strides, data, depth + 1, offset + i * stride);
    }
    out.push('\n');
    out.push_str(&indent);
    out.push(']');
}

fn write_joined(out: &mut String, values: &[f32]) {
    for (i, v) in values.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "{}", v);
    }
}

/// `Tensor(2x3): [ 1, 2, 3, 4, 5, 6 ]`
impl fmt::Display for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut data = String::new();
        write_joined(&mut data, &self.data);
        write!(f, "Tensor({}): [ {} ]", self.shape, data)
    }
}

/// Approximate-equality signature of a tensor, see [`Tensor::fingerprint`].
///
/// Not cryptographic; only used to decide whether render geometry is stale.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint(String);

impl Fingerprint {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
