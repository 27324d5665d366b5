use super::types::Class;
use crate::candidate::CandidateType;
use crate::config::ByteOrder;

/// A primitive that can be decoded from raw bytes and classified.
pub trait Sample: Copy + Send + Sync + 'static {
    const CANDIDATE: CandidateType;
    const WIDTH: usize;

    /// `bytes.len()` must equal `WIDTH`.
    fn decode(bytes: &[u8], order: ByteOrder) -> Self;

    fn classify(self) -> Class;
}

macro_rules! decode_body {
    ($t:ty, $bytes:expr, $order:expr) => {{
        let mut raw = [0u8; std::mem::size_of::<$t>()];
        raw.copy_from_slice($bytes);
        match $order {
            ByteOrder::Little => <$t>::from_le_bytes(raw),
            ByteOrder::Big => <$t>::from_be_bytes(raw),
            ByteOrder::Native => <$t>::from_ne_bytes(raw),
        }
    }};
}

macro_rules! impl_unsigned {
    ($($t:ty => $cand:ident),* $(,)?) => {$(
        impl Sample for $t {
            const CANDIDATE: CandidateType = CandidateType::$cand;
            const WIDTH: usize = std::mem::size_of::<$t>();

            #[inline]
            fn decode(bytes: &[u8], order: ByteOrder) -> Self {
                decode_body!($t, bytes, order)
            }

            #[inline]
            fn classify(self) -> Class {
                if self == 0 {
                    Class::Zero
                } else {
                    Class::Positive(self as f64)
                }
            }
        }
    )*};
}

macro_rules! impl_signed {
    ($($t:ty => $cand:ident),* $(,)?) => {$(
        impl Sample for $t {
            const CANDIDATE: CandidateType = CandidateType::$cand;
            const WIDTH: usize = std::mem::size_of::<$t>();

            #[inline]
            fn decode(bytes: &[u8], order: ByteOrder) -> Self {
                decode_body!($t, bytes, order)
            }

            #[inline]
            fn classify(self) -> Class {
                if self == 0 {
                    Class::Zero
                } else if self > 0 {
                    Class::Positive(self as f64)
                } else {
                    Class::Negative(self as f64)
                }
            }
        }
    )*};
}

macro_rules! impl_float {
    ($($t:ty => $cand:ident),* $(,)?) => {$(
        impl Sample for $t {
            const CANDIDATE: CandidateType = CandidateType::$cand;
            const WIDTH: usize = std::mem::size_of::<$t>();

            #[inline]
            fn decode(bytes: &[u8], order: ByteOrder) -> Self {
                decode_body!($t, bytes, order)
            }

            #[inline]
            fn classify(self) -> Class {
                if !self.is_finite() {
                    Class::NonFinite
                } else if self == 0.0 {
                    Class::Zero
                } else if self > 0.0 {
                    Class::Positive(self as f64)
                } else {
                    Class::Negative(self as f64)
                }
            }
        }
    )*};
}

impl_unsigned!(u8 => U8, u16 => U16, u32 => U32, u64 => U64);
impl_signed!(i8 => I8, i16 => I16, i32 => I32, i64 => I64);
impl_float!(f32 => F32, f64 => F64);
