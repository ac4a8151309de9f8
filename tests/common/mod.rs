#![allow(dead_code)]

use lexipix_core::Dictionary;
use std::path::PathBuf;

/// Path of the word list shipped with the repository.
pub fn shipped_words_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets/words.txt")
}

pub fn shipped_dictionary() -> Dictionary {
    Dictionary::load(shipped_words_path()).expect("shipped word list must load")
}

/// Synthetic table: `w00000` .. `w65535`, already in sorted order.
pub fn numbered_words() -> Vec<String> {
    (0..0x10000).map(|i| format!("w{:05}", i)).collect()
}

pub fn numbered_dictionary() -> Dictionary {
    Dictionary::from_words(numbered_words()).expect("numbered table is complete")
}

/// Deterministic pseudo-random bytes (xorshift), for payloads that should not
/// accidentally look like an image header.
pub fn noise(len: usize, seed: u32) -> Vec<u8> {
    let mut state = seed.max(1);
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            (state >> 24) as u8
        })
        .collect()
}

/// A small valid RGBA PNG.
pub fn tiny_png(width: u32, height: u32) -> Vec<u8> {
    let mut out = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut out, width, height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().unwrap();
        let data = vec![0x7Fu8; (width * height * 4) as usize];
        writer.write_image_data(&data).unwrap();
    }
    out
}
