//! # lexipix-codec
//!
//! Bytes to words and back, plus the bitmap fallback used when decoded
//! bytes are not an image file of their own.

pub mod bitmap;
pub mod codec;
pub mod pipeline;
pub mod words;

pub use bitmap::{Bitmap, BitmapRenderer, MIN_RENDERABLE_LEN};
pub use codec::{WordCodec, INVALID_WORDS};
pub use pipeline::{sniff_container, Picture, Picturizer, TOO_SMALL_MESSAGE};
pub use words::{Parity, WordSequence, EVEN_TOKEN, ODD_TOKEN};

pub use image::ImageFormat;
pub use lexipix_core::{Dictionary, LexipixConfig, LexipixError, LookupMode, RenderStrategy};
