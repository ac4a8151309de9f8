//! # Codec Layer Tests: WordCodec
//!
//! Validates the bytes <-> words transform: parity marker, word count,
//! odd-length padding, the invalid-words sentinel and strict/legacy lookup.

mod common;

use lexipix_codec::{LexipixError, LookupMode, Parity, WordCodec, WordSequence, INVALID_WORDS};
use std::time::Instant;

/// Verifies that decode(encode(x)) == x across lengths 0..=64 and a large payload.
#[test]
fn test_roundtrip_law() {
    let t = Instant::now();

    let codec = WordCodec::new(common::shipped_dictionary());

    for len in 0..=64 {
        let data = common::noise(len, len as u32 + 1);
        let words = codec.encode(&data);
        assert_eq!(codec.try_decode(words.tokens()).unwrap(), data, "len {}", len);
    }

    let large = common::noise(10_001, 99);
    let words = codec.encode(&large);
    assert_eq!(codec.decode(words.tokens()), large);

    let overhead = t.elapsed();
    println!("test_roundtrip_law: Testing Overhead = {:?}", overhead);
}

/// Verifies the parity marker and the ceil(len / 2) word count.
#[test]
fn test_parity_and_word_count() {
    let t = Instant::now();

    let codec = WordCodec::new(common::numbered_dictionary());

    for len in 0..40usize {
        let words = codec.encode(&vec![0xA5; len]);
        let expected_marker = if len % 2 == 0 { "Even" } else { "Odd" };
        assert_eq!(words.tokens()[0], expected_marker);
        assert_eq!(words.parity(), Some(Parity::of_len(len)));
        assert_eq!(words.len() - 1, len.div_ceil(2));
    }

    let overhead = t.elapsed();
    println!("test_parity_and_word_count: Testing Overhead = {:?}", overhead);
}

/// Verifies the empty and single-byte boundaries.
#[test]
fn test_boundaries() {
    let t = Instant::now();

    let codec = WordCodec::new(common::numbered_dictionary());
    let dictionary = codec.dictionary().clone();

    let empty = codec.encode(&[]);
    assert_eq!(empty.tokens(), &["Even"]);
    assert_eq!(codec.decode(&["Even"]), Vec::<u8>::new());

    let one = codec.encode(&[0x01]);
    assert_eq!(one.tokens(), &["Odd", dictionary.word_at(1)]);
    assert_eq!(codec.decode(&["Odd", dictionary.word_at(1)]), vec![0x01]);

    // An odd marker with no data words yields nothing rather than underflowing.
    assert_eq!(codec.decode(&["Odd"]), Vec::<u8>::new());

    let overhead = t.elapsed();
    println!("test_boundaries: Testing Overhead = {:?}", overhead);
}

/// Verifies little-endian chunk assembly against the numbered table.
#[test]
fn test_little_endian_chunks() {
    let t = Instant::now();

    let codec = WordCodec::new(common::numbered_dictionary());

    let words = codec.encode(&[0x34, 0x12, 0xFF, 0xFF, 0x07]);
    assert_eq!(
        words.to_string(),
        format!("Odd w{:05} w{:05} w{:05}", 0x1234, 0xFFFF, 0x0007)
    );

    let overhead = t.elapsed();
    println!("test_little_endian_chunks: Testing Overhead = {:?}", overhead);
}

/// Verifies the sentinel on empty input and the explicit error from try_decode.
#[test]
fn test_empty_sequence_sentinel() {
    let t = Instant::now();

    let codec = WordCodec::new(common::numbered_dictionary());
    let empty: [&str; 0] = [];

    assert_eq!(codec.decode(&empty), INVALID_WORDS.to_vec());
    assert_eq!(codec.decode(&empty), b"Invalid words.".to_vec());
    assert!(matches!(codec.try_decode(&empty), Err(LexipixError::EmptyWordSequence)));
    assert_eq!(codec.decode_text("   "), INVALID_WORDS.to_vec());

    let overhead = t.elapsed();
    println!("test_empty_sequence_sentinel: Testing Overhead = {:?}", overhead);
}

/// Verifies that decode tolerates case, punctuation and line breaks around words.
#[test]
fn test_decode_folds_tokens() {
    let t = Instant::now();

    let codec = WordCodec::new(common::numbered_dictionary());
    let text = "EVEN W04660, w00001.\nw00002!";
    let data = codec.try_decode_text(text).unwrap();
    assert_eq!(data, vec![0x34, 0x12, 0x01, 0x00, 0x02, 0x00]);

    let overhead = t.elapsed();
    println!("test_decode_folds_tokens: Testing Overhead = {:?}", overhead);
}

/// Verifies strict lookup reports the position of an unknown word, while the
/// compatibility entry point degrades to the sentinel.
#[test]
fn test_strict_lookup_miss() {
    let t = Instant::now();

    let codec = WordCodec::new(common::numbered_dictionary());
    assert_eq!(codec.lookup(), LookupMode::Strict);

    let words = ["Even", "w00001", "banana"];
    match codec.try_decode(&words) {
        Err(LexipixError::WordNotFound { position, word }) => {
            assert_eq!(position, 2);
            assert_eq!(word, "banana");
        }
        other => panic!("expected WordNotFound, got {:?}", other),
    }
    assert_eq!(codec.decode(&words), INVALID_WORDS.to_vec());

    let overhead = t.elapsed();
    println!("test_strict_lookup_miss: Testing Overhead = {:?}", overhead);
}

/// Verifies legacy lookup maps an unknown word to its insertion point.
#[test]
fn test_legacy_lookup_miss() {
    let t = Instant::now();

    let codec = WordCodec::new(common::numbered_dictionary()).with_lookup(LookupMode::Legacy);

    // "w00300x" sorts right after w00300, so it lands on 301 = 0x012D.
    let data = codec.try_decode(&["Even", "w00300x"]).unwrap();
    assert_eq!(data, vec![0x2D, 0x01]);

    // Past the end of the table wraps to zero.
    let data = codec.try_decode(&["Even", "zzz"]).unwrap();
    assert_eq!(data, vec![0x00, 0x00]);

    let overhead = t.elapsed();
    println!("test_legacy_lookup_miss: Testing Overhead = {:?}", overhead);
}

/// Verifies that the serialized form survives a text round trip.
#[test]
fn test_text_roundtrip() {
    let t = Instant::now();

    let codec = WordCodec::new(common::shipped_dictionary());
    let data = b"lexipix turns bytes into words.".to_vec();
    let text = codec.encode(&data).to_string();
    assert!(text.starts_with("Odd "));
    assert_eq!(WordSequence::parse(&text).len(), 1 + data.len().div_ceil(2));
    assert_eq!(codec.try_decode_text(&text).unwrap(), data);

    let overhead = t.elapsed();
    println!("test_text_roundtrip: Testing Overhead = {:?}", overhead);
}
