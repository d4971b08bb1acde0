//! Screen-space geometry of a parallel-coordinates diagram.

use tv_tensor::{Fingerprint, Shape, Tensor};

/// One axis crossing of an element's path.
///
/// `end` is the point on the next axis; the crossing on the last axis has none.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub x_start: f32,
    pub y_start: f32,
    pub end: Option<(f32, f32)>,
}

/// Path of a single tensor element, one [`Segment`] per dimension.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementLayout {
    /// Absolute value of the element.
    pub value: f32,
    /// Flat row-major index of the element.
    pub index: usize,
    pub segments: Vec<Segment>,
}

/// Render-cache entry for one tensor.
#[derive(Debug, Clone)]
pub struct TensorLayout {
    /// Elements in ascending order of magnitude, so the largest paint last.
    pub elements: Vec<ElementLayout>,
    pub shape: Shape,
    /// Fingerprint the geometry was computed from.
    pub fingerprint: Fingerprint,
    pub num_elements: usize,
    /// Largest absolute value, used to normalise color and weight.
    pub max_value: f32,
    /// Anchor (top-left of the panel) the geometry was computed for.
    pub x: f32,
    pub y: f32,
}

impl TensorLayout {
    /// Lay out `tensor` in a `width` x `height` panel anchored at `(x, y)`.
    pub fn compute(
        tensor: &Tensor,
        fingerprint: Fingerprint,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    ) -> Self {
        let shape = tensor.shape();
        let dims = shape.ndim();

        let mut values: Vec<(f32, usize)> = tensor
            .as_slice()
            .iter()
            .enumerate()
            .map(|(i, v)| (v.abs(), i))
            .collect();
        values.sort_by(|a, b| a.0.total_cmp(&b.0));
        let max_value = values.last().map_or(0.0, |&(v, _)| v);

        let sep_x = axis_separation(width, dims);
        let x0 = x + sep_x / 2.0;

        let elements = values
            .into_iter()
            .map(|(value, index)| {
                let coords = shape.unravel(index);
                let segments = (0..dims)
                    .map(|d| {
                        let end = (d + 1 < dims).then(|| {
                            (
                                x0 + (d + 1) as f32 * sep_x,
                                tick_y(y, height, shape.dim(d + 1), coords[d + 1]),
                            )
                        });
                        Segment {
                            x_start: x0 + d as f32 * sep_x,
                            y_start: tick_y(y, height, shape.dim(d), coords[d]),
                            end,
                        }
                    })
                    .collect();
                ElementLayout {
                    value,
                    index,
                    segments,
                }
            })
            .collect();

        TensorLayout {
            elements,
            shape: shape.clone(),
            fingerprint,
            num_elements: tensor.numel(),
            max_value,
            x,
            y,
        }
    }

    /// Magnitude of `element` relative to the largest one, in `[0, 1]`.
    pub fn ratio(&self, element: &ElementLayout) -> f32 {
        if self.max_value > 0.0 {
            element.value / self.max_value
        } else {
            0.0
        }
    }
}

/// Horizontal distance between neighbouring axes.
pub(crate) fn axis_separation(width: f32, dims: usize) -> f32 {
    if dims == 0 {
        0.0
    } else {
        width / dims as f32
    }
}

/// Vertical position of tick `coord` on an axis of `size` ticks.
pub(crate) fn tick_y(y: f32, height: f32, size: usize, coord: usize) -> f32 {
    y + (coord + 1) as f32 * height / (size + 1) as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use tv_tensor::TensorIds;

    const EPS: f32 = 1e-4;

    fn layout_of(shape: Vec<usize>, data: Vec<f32>) -> TensorLayout {
        let mut ids = TensorIds::new();
        let t = Tensor::new(&mut ids, shape, data);
        TensorLayout::compute(&t, t.fingerprint(), 10.0, 20.0, 200.0, 200.0)
    }

    #[test]
    fn test_elements_sorted_by_magnitude() {
        let layout = layout_of(vec![4], vec![-3.0, 1.0, 10.0, -0.5]);
        let order: Vec<usize> = layout.elements.iter().map(|e| e.index).collect();
        assert_eq!(order, vec![3, 1, 0, 2]);
        assert!((layout.max_value - 10.0).abs() < EPS);
        assert!(layout.elements.iter().all(|e| e.value >= 0.0));
    }

    #[test]
    fn test_segment_positions() {
        // shape [2, 3]: axes at x = 10 + 50 and 10 + 150
        let layout = layout_of(vec![2, 3], vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let e = layout.elements.iter().find(|e| e.index == 5).unwrap();
        assert_eq!(e.segments.len(), 2);

        // index 5 -> coords [1, 2]
        let s0 = e.segments[0];
        assert!((s0.x_start - 60.0).abs() < EPS);
        assert!((s0.y_start - (20.0 + 2.0 * 200.0 / 3.0)).abs() < EPS);
        let (xe, ye) = s0.end.unwrap();
        assert!((xe - 160.0).abs() < EPS);
        assert!((ye - (20.0 + 3.0 * 200.0 / 4.0)).abs() < EPS);

        let s1 = e.segments[1];
        assert!((s1.x_start - 160.0).abs() < EPS);
        assert!(s1.end.is_none());
    }

    #[test]
    fn test_scalar_layout_has_no_segments() {
        let layout = layout_of(vec![], vec![3.0]);
        assert_eq!(layout.elements.len(), 1);
        assert!(layout.elements[0].segments.is_empty());
    }

    #[test]
    fn test_all_zero_ratio() {
        let layout = layout_of(vec![2], vec![0.0, 0.0]);
        assert_eq!(layout.max_value, 0.0);
        for e in &layout.elements {
            assert_eq!(layout.ratio(e), 0.0);
        }
    }
}
