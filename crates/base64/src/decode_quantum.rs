//! Single-quantum decoder. This is the reference grammar for decoding.

use crate::constants::{is_newline, DECODE_TABLE, INVALID, PAD};
use crate::Base64Error;

fn skip_newlines(src: &[u8], mut si: usize) -> usize {
    while si < src.len() && is_newline(src[si]) {
        si += 1;
    }
    si
}

/// Decodes the quantum starting at `si`, appending up to three bytes to `dst`.
///
/// Returns the offset just past the consumed input. CR and LF are skipped
/// anywhere. A quantum cut short by end of input is accepted when it holds at
/// least two sextets; padding must be the last thing in the input.
pub(crate) fn decode_quantum(
    dst: &mut Vec<u8>,
    src: &[u8],
    mut si: usize,
) -> Result<usize, Base64Error> {
    let mut sextets = [0u8; 4];
    let mut len = 0;

    while len < sextets.len() {
        if si == src.len() {
            match len {
                0 => return Ok(si),
                1 => return Err(Base64Error::Truncated { offset: si }),
                _ => break,
            }
        }

        let byte = src[si];
        si += 1;

        let value = DECODE_TABLE[byte as usize];
        if value != INVALID {
            sextets[len] = value;
            len += 1;
            continue;
        }

        if is_newline(byte) {
            continue;
        }

        if byte != PAD {
            return Err(Base64Error::InvalidByte {
                offset: si - 1,
                byte,
            });
        }

        match len {
            0 | 1 => return Err(Base64Error::InvalidPadding { offset: si - 1 }),
            2 => {
                // "xx" needs a second '='
                si = skip_newlines(src, si);
                if si == src.len() || src[si] != PAD {
                    return Err(Base64Error::InvalidPadding { offset: si });
                }
                si += 1;
            }
            _ => {}
        }

        si = skip_newlines(src, si);
        if si < src.len() {
            return Err(Base64Error::TrailingData { offset: si });
        }
        break;
    }

    let group = (sextets[0] as u32) << 18
        | (sextets[1] as u32) << 12
        | (sextets[2] as u32) << 6
        | sextets[3] as u32;
    let bytes = [(group >> 16) as u8, (group >> 8) as u8, group as u8];
    dst.extend_from_slice(&bytes[..len - 1]);

    Ok(si)
}
