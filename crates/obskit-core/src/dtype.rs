//! Element type tags for observation arrays.

use std::fmt;

/// Element type of an observation array.
///
/// Covers the dtypes produced by the standard leaf spaces: `F32`/`F64`
/// for continuous boxes, `U8` for image boxes, `I64` for discrete
/// spaces and `I8` for binary spaces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ObsDtype {
    /// 32-bit float.
    F32,
    /// 64-bit float.
    F64,
    /// Signed 8-bit integer.
    I8,
    /// Signed 64-bit integer.
    I64,
    /// Unsigned 8-bit integer.
    U8,
}

impl ObsDtype {
    /// Size of one element in bytes.
    pub fn size_bytes(self) -> usize {
        match self {
            Self::F32 => 4,
            Self::F64 | Self::I64 => 8,
            Self::I8 | Self::U8 => 1,
        }
    }

    /// Conventional lowercase name, e.g. `"float32"`.
    pub fn name(self) -> &'static str {
        match self {
            Self::F32 => "float32",
            Self::F64 => "float64",
            Self::I8 => "int8",
            Self::I64 => "int64",
            Self::U8 => "uint8",
        }
    }

    /// Returns `true` for the floating-point dtypes.
    pub fn is_float(self) -> bool {
        matches!(self, Self::F32 | Self::F64)
    }
}

impl fmt::Display for ObsDtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
