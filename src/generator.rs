//! Synthetic input for calibrating the scorer.
//!
//! The random source is always passed in, so a fixed seed reproduces the
//! same bytes.

use crate::config::ByteOrder;
use crate::error::{ProbeError, ProbeResult};
use std::io::Write;

fn encode(value: u64, order: ByteOrder) -> [u8; 8] {
    match order {
        ByteOrder::Little => value.to_le_bytes(),
        ByteOrder::Big => value.to_be_bytes(),
        ByteOrder::Native => value.to_ne_bytes(),
    }
}

fn check_range(low: u64, high: u64) -> ProbeResult<()> {
    if low > high {
        return Err(ProbeError::Range(format!(
            "empty range: low {} is above high {}",
            low, high
        )));
    }
    Ok(())
}

/// `count` values drawn uniformly from `[low, high]`, as 8-byte words.
pub fn uniform_u64(
    rng: &mut fastrand::Rng,
    count: usize,
    low: u64,
    high: u64,
    order: ByteOrder,
) -> ProbeResult<Vec<u8>> {
    check_range(low, high)?;
    let mut out = Vec::with_capacity(count * 8);
    for _ in 0..count {
        out.extend_from_slice(&encode(rng.u64(low..=high), order));
    }
    Ok(out)
}

/// Streaming form of [`uniform_u64`]. Returns the number of bytes written.
pub fn write_uniform_u64<W: Write>(
    writer: &mut W,
    rng: &mut fastrand::Rng,
    count: usize,
    low: u64,
    high: u64,
    order: ByteOrder,
) -> ProbeResult<u64> {
    check_range(low, high)?;
    for _ in 0..count {
        writer.write_all(&encode(rng.u64(low..=high), order))?;
    }
    writer.flush()?;
    Ok(count as u64 * 8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_bytes() {
        let a = uniform_u64(&mut fastrand::Rng::with_seed(7), 64, 0, 200, ByteOrder::Little);
        let b = uniform_u64(&mut fastrand::Rng::with_seed(7), 64, 0, 200, ByteOrder::Little);
        assert_eq!(a.unwrap(), b.unwrap());
    }

    #[test]
    fn inverted_range_is_rejected() {
        let res = uniform_u64(&mut fastrand::Rng::with_seed(1), 1, 10, 5, ByteOrder::Little);
        let err = res.unwrap_err();
        assert!(matches!(err, ProbeError::Range(_)));
        assert!(err.to_string().starts_with("Invalid generator input"));
    }
}
