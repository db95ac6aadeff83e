//! Leaf space kinds: spaces described directly by a shape and dtype.

use crate::error::SpaceError;
use obskit_core::{num_elements, ObsDtype, Shape};
use smallvec::smallvec;

/// Bounded n-dimensional box of values.
///
/// Bounds are stored per element in row-major order. The dtype defaults
/// to `F32`; use [`with_dtype`](BoxSpace::with_dtype) for image (`U8`)
/// or double-precision boxes.
///
/// # Examples
///
/// ```
/// use obskit_space::BoxSpace;
/// use obskit_core::ObsDtype;
///
/// let b = BoxSpace::uniform(&[3], -1.0, 1.0).unwrap();
/// assert_eq!(b.shape(), &[3]);
/// assert_eq!(b.dtype(), ObsDtype::F32);
///
/// let img = BoxSpace::uniform(&[84, 84, 3], 0.0, 255.0).unwrap().with_dtype(ObsDtype::U8);
/// assert_eq!(img.dtype(), ObsDtype::U8);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct BoxSpace {
    shape: Shape,
    low: Vec<f64>,
    high: Vec<f64>,
    dtype: ObsDtype,
}

impl BoxSpace {
    /// Create a box with per-element bounds.
    ///
    /// # Errors
    ///
    /// Returns [`SpaceError::InvalidBounds`] if the shape's element count
    /// overflows `usize`, either bound vector's length differs from that
    /// count, a bound is NaN, or some `low[i] > high[i]`.
    pub fn new(shape: &[usize], low: Vec<f64>, high: Vec<f64>) -> Result<Self, SpaceError> {
        let n = element_count(shape)?;
        if low.len() != n || high.len() != n {
            return Err(SpaceError::InvalidBounds {
                reason: format!(
                    "shape {shape:?} has {n} elements, got {} low and {} high bounds",
                    low.len(),
                    high.len()
                ),
            });
        }
        for (i, (&l, &h)) in low.iter().zip(&high).enumerate() {
            if l.is_nan() || h.is_nan() {
                return Err(SpaceError::InvalidBounds {
                    reason: format!("NaN bound at element {i}"),
                });
            }
            if l > h {
                return Err(SpaceError::InvalidBounds {
                    reason: format!("low {l} > high {h} at element {i}"),
                });
            }
        }
        Ok(Self {
            shape: Shape::from_slice(shape),
            low,
            high,
            dtype: ObsDtype::F32,
        })
    }

    /// Create a box with the same bounds for every element.
    pub fn uniform(shape: &[usize], low: f64, high: f64) -> Result<Self, SpaceError> {
        let n = element_count(shape)?;
        Self::new(shape, vec![low; n], vec![high; n])
    }

    /// Unbounded box (`-inf..=inf` everywhere).
    ///
    /// # Panics
    ///
    /// If the shape's element count overflows `usize`. Use
    /// [`uniform`](BoxSpace::uniform) with infinite bounds to get an error
    /// instead.
    pub fn unbounded(shape: &[usize]) -> Self {
        let n = num_elements(shape)
            .unwrap_or_else(|| panic!("element count of shape {shape:?} overflows usize"));
        Self {
            shape: Shape::from_slice(shape),
            low: vec![f64::NEG_INFINITY; n],
            high: vec![f64::INFINITY; n],
            dtype: ObsDtype::F32,
        }
    }

    /// Replace the element type.
    pub fn with_dtype(mut self, dtype: ObsDtype) -> Self {
        self.dtype = dtype;
        self
    }

    /// Shape of samples from this box.
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Element type.
    pub fn dtype(&self) -> ObsDtype {
        self.dtype
    }

    /// Per-element lower bounds.
    pub fn low(&self) -> &[f64] {
        &self.low
    }

    /// Per-element upper bounds.
    pub fn high(&self) -> &[f64] {
        &self.high
    }
}

fn element_count(shape: &[usize]) -> Result<usize, SpaceError> {
    num_elements(shape).ok_or_else(|| SpaceError::InvalidBounds {
        reason: format!("element count of shape {shape:?} overflows usize"),
    })
}

/// A single categorical value in `0..n`. Scalar shape, `I64` dtype.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Discrete {
    n: u64,
}

impl Discrete {
    /// Create a discrete space with `n` categories.
    pub fn new(n: u64) -> Result<Self, SpaceError> {
        if n == 0 {
            return Err(SpaceError::EmptySpace { kind: "Discrete" });
        }
        Ok(Self { n })
    }

    /// Number of categories.
    pub fn n(&self) -> u64 {
        self.n
    }
}

/// Several independent categorical values; dimension `i` ranges over `0..nvec[i]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MultiDiscrete {
    nvec: Vec<u64>,
    shape: Shape,
}

impl MultiDiscrete {
    /// Create a multi-discrete space.
    ///
    /// # Errors
    ///
    /// [`SpaceError::EmptySpace`] if `nvec` is empty or any entry is zero.
    pub fn new(nvec: Vec<u64>) -> Result<Self, SpaceError> {
        if nvec.is_empty() || nvec.contains(&0) {
            return Err(SpaceError::EmptySpace {
                kind: "MultiDiscrete",
            });
        }
        let shape = smallvec![nvec.len()];
        Ok(Self { nvec, shape })
    }

    /// Category count per dimension.
    pub fn nvec(&self) -> &[u64] {
        &self.nvec
    }

    /// Shape `[nvec.len()]`.
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }
}

/// A fixed-length vector of binary flags, stored as `I8`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MultiBinary {
    shape: Shape,
}

impl MultiBinary {
    /// Create a binary space with `n` flags.
    pub fn new(n: usize) -> Self {
        Self {
            shape: smallvec![n],
        }
    }

    /// Shape `[n]`.
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_rejects_mismatched_bounds() {
        let err = BoxSpace::new(&[2, 2], vec![0.0; 3], vec![1.0; 4]).unwrap_err();
        assert!(matches!(err, SpaceError::InvalidBounds { .. }));
    }

    #[test]
    fn box_rejects_inverted_bounds() {
        let err = BoxSpace::uniform(&[2], 1.0, 0.0).unwrap_err();
        assert!(err.to_string().contains("low 1 > high 0"));
    }

    #[test]
    fn box_rejects_nan() {
        let err = BoxSpace::new(&[1], vec![f64::NAN], vec![1.0]).unwrap_err();
        assert!(matches!(err, SpaceError::InvalidBounds { .. }));
    }

    #[test]
    fn scalar_box_has_one_bound() {
        let b = BoxSpace::uniform(&[], -1.0, 1.0).unwrap();
        assert!(b.shape().is_empty());
        assert_eq!(b.low(), &[-1.0]);
    }

    #[test]
    fn box_rejects_overflowing_shape() {
        let big = usize::MAX / 2 + 1;
        let err = BoxSpace::new(&[big, 2], vec![], vec![]).unwrap_err();
        assert!(err.to_string().contains("overflows usize"));
        assert!(matches!(
            BoxSpace::uniform(&[usize::MAX, 2], 0.0, 1.0),
            Err(SpaceError::InvalidBounds { .. })
        ));
    }

    #[test]
    #[should_panic(expected = "overflows usize")]
    fn unbounded_box_panics_on_overflowing_shape() {
        let _ = BoxSpace::unbounded(&[usize::MAX, 2]);
    }

    #[test]
    fn unbounded_box_is_infinite() {
        let b = BoxSpace::unbounded(&[2]);
        assert!(b.low().iter().all(|l| l.is_infinite()));
        assert!(b.high().iter().all(|h| *h == f64::INFINITY));
    }

    #[test]
    fn discrete_requires_categories() {
        assert_eq!(
            Discrete::new(0),
            Err(SpaceError::EmptySpace { kind: "Discrete" })
        );
        assert_eq!(Discrete::new(4).unwrap().n(), 4);
    }

    #[test]
    fn multi_discrete_shape_follows_nvec() {
        let md = MultiDiscrete::new(vec![3, 5, 2]).unwrap();
        assert_eq!(md.shape(), &[3]);
        assert!(MultiDiscrete::new(vec![]).is_err());
        assert!(MultiDiscrete::new(vec![2, 0]).is_err());
    }

    #[test]
    fn multi_binary_shape() {
        assert_eq!(MultiBinary::new(6).shape(), &[6]);
    }
}
