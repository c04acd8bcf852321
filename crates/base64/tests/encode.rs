//! Tests for base64 encoding (to_base64).

use json_script_base64::{to_base64, Base64Error};
use rand::Rng;

fn generate_blob() -> Vec<u8> {
    let mut rng = rand::thread_rng();
    let length = rng.gen_range(1..=100);
    (0..length).map(|_| rng.gen::<u8>()).collect()
}

/// Bit-by-bit encoder used as an independent oracle.
fn naive_encode(data: &[u8]) -> String {
    const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

    let bits: Vec<u8> = data
        .iter()
        .flat_map(|b| (0..8).rev().map(move |i| (b >> i) & 1))
        .collect();
    let mut out: String = bits
        .chunks(6)
        .map(|chunk| {
            let v = chunk
                .iter()
                .chain(std::iter::repeat(&0))
                .take(6)
                .fold(0usize, |acc, &bit| (acc << 1) | bit as usize);
            ALPHABET[v] as char
        })
        .collect();
    while out.len() % 4 != 0 {
        out.push('=');
    }
    out
}

#[test]
fn matches_naive_encoder() {
    for _ in 0..100 {
        let blob = generate_blob();
        assert_eq!(
            to_base64(&blob).unwrap(),
            naive_encode(&blob),
            "Failed for blob of length {}",
            blob.len()
        );
    }
}

#[test]
fn empty_input_is_an_error() {
    assert_eq!(to_base64(b""), Err(Base64Error::EmptyInput));
}

#[test]
fn single_byte() {
    assert_eq!(to_base64(b"f").unwrap(), "Zg==");
}

#[test]
fn two_bytes() {
    assert_eq!(to_base64(b"fo").unwrap(), "Zm8=");
}

#[test]
fn three_bytes() {
    assert_eq!(to_base64(b"foo").unwrap(), "Zm9v");
}

#[test]
fn hello_world() {
    assert_eq!(to_base64(b"hello world").unwrap(), "aGVsbG8gd29ybGQ=");
}

#[test]
fn output_length_is_padded_to_quanta() {
    for len in 1..=32usize {
        let data = vec![0xA5u8; len];
        assert_eq!(to_base64(&data).unwrap().len(), len.div_ceil(3) * 4);
    }
}
