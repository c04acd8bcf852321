//! Base64 decoding entry points.

use crate::constants::{DECODE_TABLE, INVALID};
use crate::decode_quantum::decode_quantum;
use crate::Base64Error;

/// Packs eight sextets into the top 48 bits of a `u64`.
///
/// `None` if any of them is the [`INVALID`] marker; valid sextets never set
/// bits above 0x3F, so the OR of the lot equals the marker only then.
#[inline]
fn assemble64(src: &[u8]) -> Option<u64> {
    let n: [u8; 8] = std::array::from_fn(|i| DECODE_TABLE[src[i] as usize]);
    if n.iter().fold(0, |acc, &v| acc | v) == INVALID {
        return None;
    }
    Some(
        (n[0] as u64) << 58
            | (n[1] as u64) << 52
            | (n[2] as u64) << 46
            | (n[3] as u64) << 40
            | (n[4] as u64) << 34
            | (n[5] as u64) << 28
            | (n[6] as u64) << 22
            | (n[7] as u64) << 16,
    )
}

/// Packs four sextets into the top 24 bits of a `u32`.
#[inline]
fn assemble32(src: &[u8]) -> Option<u32> {
    let n: [u8; 4] = std::array::from_fn(|i| DECODE_TABLE[src[i] as usize]);
    if n[0] | n[1] | n[2] | n[3] == INVALID {
        return None;
    }
    Some((n[0] as u32) << 26 | (n[1] as u32) << 20 | (n[2] as u32) << 14 | (n[3] as u32) << 8)
}

/// Decodes a base64 string.
///
/// # Example
///
/// ```
/// use json_script_base64::from_base64;
///
/// assert_eq!(from_base64("aGVsbG8=").unwrap(), b"hello");
/// assert!(from_base64("aGVsbG8").is_ok());
/// assert!(from_base64("aGVsbG=8").is_err());
/// ```
pub fn from_base64(encoded: &str) -> Result<Vec<u8>, Base64Error> {
    from_base64_bin(encoded.as_bytes())
}

/// Decodes base64 bytes, taking whole 8- and 4-byte blocks at once while they
/// contain only alphabet characters.
///
/// Output and errors are identical to [`from_base64_bin_quantum`].
pub fn from_base64_bin(src: &[u8]) -> Result<Vec<u8>, Base64Error> {
    let mut dst = Vec::with_capacity(src.len() / 4 * 3 + 3);
    let mut si = 0;

    while src.len() - si >= 8 {
        match assemble64(&src[si..si + 8]) {
            Some(word) => {
                dst.extend_from_slice(&word.to_be_bytes()[..6]);
                si += 8;
            }
            None => si = decode_quantum(&mut dst, src, si)?,
        }
    }

    while src.len() - si >= 4 {
        match assemble32(&src[si..si + 4]) {
            Some(word) => {
                dst.extend_from_slice(&word.to_be_bytes()[..3]);
                si += 4;
            }
            None => si = decode_quantum(&mut dst, src, si)?,
        }
    }

    while si < src.len() {
        si = decode_quantum(&mut dst, src, si)?;
    }

    Ok(dst)
}

/// Decodes base64 bytes one quantum at a time.
pub fn from_base64_bin_quantum(src: &[u8]) -> Result<Vec<u8>, Base64Error> {
    let mut dst = Vec::with_capacity(src.len() / 4 * 3 + 3);
    let mut si = 0;
    while si < src.len() {
        si = decode_quantum(&mut dst, src, si)?;
    }
    Ok(dst)
}
