//! Standard base64 encoding function.

use crate::constants::{ALPHABET_BYTES, PAD};
use crate::Base64Error;

#[inline]
fn sextet(group: u32, shift: u32) -> char {
    ALPHABET_BYTES[((group >> shift) & 0x3F) as usize] as char
}

/// Encodes a byte slice to a standard, padded base64 string.
///
/// Empty input is rejected with [`Base64Error::EmptyInput`] rather than
/// producing an empty string.
///
/// # Example
///
/// ```
/// use json_script_base64::to_base64;
///
/// assert_eq!(to_base64(b"fo").unwrap(), "Zm8=");
/// assert!(to_base64(b"").is_err());
/// ```
pub fn to_base64(src: &[u8]) -> Result<String, Base64Error> {
    if src.is_empty() {
        return Err(Base64Error::EmptyInput);
    }

    let mut out = String::with_capacity(src.len().div_ceil(3) * 4);
    let mut chunks = src.chunks_exact(3);

    for chunk in chunks.by_ref() {
        let group = (chunk[0] as u32) << 16 | (chunk[1] as u32) << 8 | chunk[2] as u32;
        out.push(sextet(group, 18));
        out.push(sextet(group, 12));
        out.push(sextet(group, 6));
        out.push(sextet(group, 0));
    }

    match *chunks.remainder() {
        [] => {}
        [a] => {
            let group = (a as u32) << 16;
            out.push(sextet(group, 18));
            out.push(sextet(group, 12));
            out.push(PAD as char);
            out.push(PAD as char);
        }
        [a, b] => {
            let group = (a as u32) << 16 | (b as u32) << 8;
            out.push(sextet(group, 18));
            out.push(sextet(group, 12));
            out.push(sextet(group, 6));
            out.push(PAD as char);
        }
        _ => unreachable!("chunks_exact(3) leaves at most two bytes"),
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_rejected() {
        assert_eq!(to_base64(b""), Err(Base64Error::EmptyInput));
    }

    #[test]
    fn test_rfc4648_vectors() {
        assert_eq!(to_base64(b"f").unwrap(), "Zg==");
        assert_eq!(to_base64(b"fo").unwrap(), "Zm8=");
        assert_eq!(to_base64(b"foo").unwrap(), "Zm9v");
        assert_eq!(to_base64(b"foob").unwrap(), "Zm9vYg==");
        assert_eq!(to_base64(b"fooba").unwrap(), "Zm9vYmE=");
        assert_eq!(to_base64(b"foobar").unwrap(), "Zm9vYmFy");
    }

    #[test]
    fn test_high_bits() {
        assert_eq!(to_base64(&[0xFF, 0xFF, 0xFF]).unwrap(), "////");
        assert_eq!(to_base64(&[0xFB, 0xEF]).unwrap(), "++8=");
    }
}
