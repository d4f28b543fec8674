use crate::error::{Error, Result};

/// Native integer width for binary expansions.
pub const MAX_BINARY_WIDTH: usize = u32::BITS as usize;

/// Big-endian binary expansion of `value` over `width` bits.
///
/// ```text
/// to_binary(6, 4) -> [0, 1, 1, 0]
/// ```
///
/// Bits of `value` above `width` are ignored.
pub fn to_binary(value: u32, width: usize) -> Result<Vec<bool>> {
    if width > MAX_BINARY_WIDTH {
        return Err(Error::OutOfRange {
            width,
            max: MAX_BINARY_WIDTH,
        });
    }
    Ok((0..width).rev().map(|bit| (value >> bit) & 1 == 1).collect())
}

/// Inverse of [`to_binary`]: reads `bits` as a big-endian number.
pub fn from_binary(bits: &[bool]) -> Result<u32> {
    if bits.len() > MAX_BINARY_WIDTH {
        return Err(Error::OutOfRange {
            width: bits.len(),
            max: MAX_BINARY_WIDTH,
        });
    }
    Ok(bits.iter().fold(0, |acc, &b| (acc << 1) | b as u32))
}

/// Parses a string of `'0'`/`'1'` characters.
pub fn parse_bits(s: &str) -> Result<Vec<bool>> {
    s.chars()
        .enumerate()
        .map(|(position, c)| match c {
            '0' => Ok(false),
            '1' => Ok(true),
            found => Err(Error::IllFormedInput { position, found }),
        })
        .collect()
}

/// Smallest power of two that is `>= len` and `>= 2`.
pub fn padded_len(len: usize) -> usize {
    len.max(2).next_power_of_two()
}

/// `true` iff every bit set in `sub` is also set in `sup`.
#[inline]
pub fn is_submask(sub: usize, sup: usize) -> bool {
    sub & sup == sub
}
