use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// How a candidate type partitions its values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Unsigned,
    Signed,
    Float,
}

// Declaration order is the construction order and the tie-break order.
#[derive(
    Debug,
    Clone,
    Copy,
    EnumIter,
    EnumString,
    Display,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum CandidateType {
    U8,
    I8,
    U16,
    I16,
    U32,
    I32,
    U64,
    I64,
    F32,
    F64,
}

impl CandidateType {
    /// All ten candidates in construction order.
    pub fn all() -> Vec<CandidateType> {
        Self::iter().collect()
    }

    /// Size of one value in bytes.
    pub fn width(&self) -> usize {
        match self {
            Self::U8 | Self::I8 => 1,
            Self::U16 | Self::I16 => 2,
            Self::U32 | Self::I32 | Self::F32 => 4,
            Self::U64 | Self::I64 | Self::F64 => 8,
        }
    }

    pub fn family(&self) -> Family {
        match self {
            Self::U8 | Self::U16 | Self::U32 | Self::U64 => Family::Unsigned,
            Self::I8 | Self::I16 | Self::I32 | Self::I64 => Family::Signed,
            Self::F32 | Self::F64 => Family::Float,
        }
    }

    pub fn is_float(&self) -> bool {
        self.family() == Family::Float
    }

    /// Midpoint of the representable range.
    ///
    /// Integers halve their maximum with integer division before widening, so
    /// `u8` yields 127 and `i8` yields 63. Floats halve their largest finite
    /// magnitude.
    pub fn half_range_midpoint(&self) -> f64 {
        match self {
            Self::U8 => (u8::MAX / 2) as f64,
            Self::I8 => (i8::MAX / 2) as f64,
            Self::U16 => (u16::MAX / 2) as f64,
            Self::I16 => (i16::MAX / 2) as f64,
            Self::U32 => (u32::MAX / 2) as f64,
            Self::I32 => (i32::MAX / 2) as f64,
            Self::U64 => (u64::MAX / 2) as f64,
            Self::I64 => (i64::MAX / 2) as f64,
            Self::F32 => (f32::MAX / 2.0) as f64,
            Self::F64 => f64::MAX / 2.0,
        }
    }

    /// Position in construction order.
    pub fn ordinal(&self) -> usize {
        *self as usize
    }
}
