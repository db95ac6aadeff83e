//! The [`Space`] descriptor union.

use crate::composite::{DictSpace, TupleSpace};
use crate::leaf::{BoxSpace, Discrete, MultiBinary, MultiDiscrete};
use obskit_core::ObsDtype;

const SCALAR: &[usize] = &[];

/// Declarative description of the data an environment produces.
///
/// Leaf kinds expose a shape and dtype directly. Composite kinds
/// (`Dict`, `Tuple`) describe structure and have neither.
#[derive(Clone, Debug, PartialEq)]
pub enum Space {
    /// Bounded n-dimensional box.
    Box(BoxSpace),
    /// Single categorical value.
    Discrete(Discrete),
    /// Vector of categorical values.
    MultiDiscrete(MultiDiscrete),
    /// Vector of binary flags.
    MultiBinary(MultiBinary),
    /// Named, ordered collection of sub-spaces.
    Dict(DictSpace),
    /// Positional collection of sub-spaces.
    Tuple(TupleSpace),
}

impl Space {
    /// Short name of the space kind, e.g. `"Box"`.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Box(_) => "Box",
            Self::Discrete(_) => "Discrete",
            Self::MultiDiscrete(_) => "MultiDiscrete",
            Self::MultiBinary(_) => "MultiBinary",
            Self::Dict(_) => "Dict",
            Self::Tuple(_) => "Tuple",
        }
    }

    /// Returns `true` for kinds with a shape and dtype.
    pub fn is_leaf(&self) -> bool {
        !matches!(self, Self::Dict(_) | Self::Tuple(_))
    }

    /// Sample shape, or `None` for composite kinds.
    pub fn shape(&self) -> Option<&[usize]> {
        match self {
            Self::Box(s) => Some(s.shape()),
            Self::Discrete(_) => Some(SCALAR),
            Self::MultiDiscrete(s) => Some(s.shape()),
            Self::MultiBinary(s) => Some(s.shape()),
            Self::Dict(_) | Self::Tuple(_) => None,
        }
    }

    /// Element type, or `None` for composite kinds.
    pub fn dtype(&self) -> Option<ObsDtype> {
        match self {
            Self::Box(s) => Some(s.dtype()),
            Self::Discrete(_) | Self::MultiDiscrete(_) => Some(ObsDtype::I64),
            Self::MultiBinary(_) => Some(ObsDtype::I8),
            Self::Dict(_) | Self::Tuple(_) => None,
        }
    }
}

impl From<BoxSpace> for Space {
    fn from(s: BoxSpace) -> Self {
        Self::Box(s)
    }
}

impl From<Discrete> for Space {
    fn from(s: Discrete) -> Self {
        Self::Discrete(s)
    }
}

impl From<MultiDiscrete> for Space {
    fn from(s: MultiDiscrete) -> Self {
        Self::MultiDiscrete(s)
    }
}

impl From<MultiBinary> for Space {
    fn from(s: MultiBinary) -> Self {
        Self::MultiBinary(s)
    }
}

impl From<DictSpace> for Space {
    fn from(s: DictSpace) -> Self {
        Self::Dict(s)
    }
}

impl From<TupleSpace> for Space {
    fn from(s: TupleSpace) -> Self {
        Self::Tuple(s)
    }
}
