//! Owned n-dimensional observation arrays.

use crate::error::ArrayError;
use obskit_core::{num_elements, ObsDtype, Shape};

/// Typed flat storage of an [`ObsArray`], row-major.
#[derive(Clone, Debug, PartialEq)]
pub enum ArrayData {
    /// 32-bit floats.
    F32(Vec<f32>),
    /// 64-bit floats.
    F64(Vec<f64>),
    /// Signed bytes.
    I8(Vec<i8>),
    /// Signed 64-bit integers.
    I64(Vec<i64>),
    /// Unsigned bytes.
    U8(Vec<u8>),
}

impl ArrayData {
    /// Zero-filled storage of `len` elements.
    pub fn zeros(dtype: ObsDtype, len: usize) -> Self {
        match dtype {
            ObsDtype::F32 => Self::F32(vec![0.0; len]),
            ObsDtype::F64 => Self::F64(vec![0.0; len]),
            ObsDtype::I8 => Self::I8(vec![0; len]),
            ObsDtype::I64 => Self::I64(vec![0; len]),
            ObsDtype::U8 => Self::U8(vec![0; len]),
        }
    }

    /// Element type of the storage.
    pub fn dtype(&self) -> ObsDtype {
        match self {
            Self::F32(_) => ObsDtype::F32,
            Self::F64(_) => ObsDtype::F64,
            Self::I8(_) => ObsDtype::I8,
            Self::I64(_) => ObsDtype::I64,
            Self::U8(_) => ObsDtype::U8,
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        match self {
            Self::F32(v) => v.len(),
            Self::F64(v) => v.len(),
            Self::I8(v) => v.len(),
            Self::I64(v) => v.len(),
            Self::U8(v) => v.len(),
        }
    }

    /// Returns `true` if there are no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

macro_rules! impl_from_vec {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<Vec<$ty>> for ArrayData {
                fn from(v: Vec<$ty>) -> Self {
                    Self::$variant(v)
                }
            }
        )*
    };
}

impl_from_vec!(f32 => F32, f64 => F64, i8 => I8, i64 => I64, u8 => U8);

/// An owned observation array: a shape plus typed row-major storage.
///
/// Arrays own their storage outright, so `clone()` is a deep copy and
/// mutating one array can never be observed through another.
///
/// # Examples
///
/// ```
/// use obskit_obs::ObsArray;
/// use obskit_core::ObsDtype;
///
/// let a = ObsArray::new(&[2, 2], vec![1.0f32, 2.0, 3.0, 4.0]).unwrap();
/// assert_eq!(a.shape(), &[2, 2]);
/// assert_eq!(a.dtype(), ObsDtype::F32);
/// assert_eq!(a.as_f32(), Some(&[1.0, 2.0, 3.0, 4.0][..]));
///
/// assert!(ObsArray::new(&[3], vec![0u8; 2]).is_err());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ObsArray {
    shape: Shape,
    data: ArrayData,
}

macro_rules! typed_access {
    ($($get:ident, $get_mut:ident, $ty:ty => $variant:ident;)*) => {
        $(
            #[doc = concat!("Elements as `", stringify!($ty), "`, if that is the dtype.")]
            pub fn $get(&self) -> Option<&[$ty]> {
                match &self.data {
                    ArrayData::$variant(v) => Some(v.as_slice()),
                    _ => None,
                }
            }

            #[doc = concat!("Mutable elements as `", stringify!($ty), "`, if that is the dtype.")]
            pub fn $get_mut(&mut self) -> Option<&mut [$ty]> {
                match &mut self.data {
                    ArrayData::$variant(v) => Some(v.as_mut_slice()),
                    _ => None,
                }
            }
        )*
    };
}

impl ObsArray {
    /// Create an array from a shape and matching storage.
    ///
    /// # Errors
    ///
    /// [`ArrayError::ShapeMismatch`] if the storage length differs from
    /// the shape's element count, [`ArrayError::CountOverflow`] if that
    /// count does not fit in `usize`.
    pub fn new(shape: &[usize], data: impl Into<ArrayData>) -> Result<Self, ArrayError> {
        let data = data.into();
        let expected = num_elements(shape).ok_or_else(|| ArrayError::CountOverflow {
            shape: Shape::from_slice(shape),
        })?;
        if data.len() != expected {
            return Err(ArrayError::ShapeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            shape: Shape::from_slice(shape),
            data,
        })
    }

    /// Zero-filled array.
    ///
    /// # Panics
    ///
    /// If the shape's element count overflows `usize`, like an oversized
    /// `Vec` allocation. Shapes taken from an [`ObsSpaceInfo`] never do.
    ///
    /// [`ObsSpaceInfo`]: obskit_space::ObsSpaceInfo
    pub fn zeros(shape: &[usize], dtype: ObsDtype) -> Self {
        let len = num_elements(shape)
            .unwrap_or_else(|| panic!("element count of shape {shape:?} overflows usize"));
        Self {
            shape: Shape::from_slice(shape),
            data: ArrayData::zeros(dtype, len),
        }
    }

    /// Shape of the array.
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Element type.
    pub fn dtype(&self) -> ObsDtype {
        self.data.dtype()
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the array has no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Typed storage.
    pub fn data(&self) -> &ArrayData {
        &self.data
    }

    /// Consume the array, returning its storage.
    pub fn into_data(self) -> ArrayData {
        self.data
    }

    typed_access! {
        as_f32, as_f32_mut, f32 => F32;
        as_f64, as_f64_mut, f64 => F64;
        as_i8, as_i8_mut, i8 => I8;
        as_i64, as_i64_mut, i64 => I64;
        as_u8, as_u8_mut, u8 => U8;
    }
}
