use image::ImageFormat;
use lexipix_core::{Dictionary, LexipixConfig, LexipixError};

use crate::bitmap::BitmapRenderer;
use crate::codec::WordCodec;
use crate::words::WordSequence;

pub const TOO_SMALL_MESSAGE: &str = "The image you entered would probably be too small to see.";

/// Outcome of turning a word sequence back into something displayable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Picture {
    /// The decoded bytes already form an image file; passed through verbatim.
    Container { format: ImageFormat, bytes: Vec<u8> },
    /// Raw bytes rendered by the fallback renderer and encoded as PNG.
    Rendered { side: u32, png: Vec<u8> },
    /// Too few decoded bytes to be worth rendering.
    TooSmall { len: usize },
}

impl Picture {
    pub fn content_type(&self) -> &'static str {
        match self {
            Picture::Container { format, .. } => format.to_mime_type(),
            Picture::Rendered { .. } => "image/png",
            Picture::TooSmall { .. } => "text/plain; charset=utf-8",
        }
    }

    /// The bytes a caller would emit: image data, or the too-small notice.
    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            Picture::Container { bytes, .. } => bytes,
            Picture::Rendered { png, .. } => png,
            Picture::TooSmall { .. } => TOO_SMALL_MESSAGE.as_bytes().to_vec(),
        }
    }
}

/// Detects whether `data` is a complete image in a supported container.
pub fn sniff_container(data: &[u8]) -> Option<ImageFormat> {
    let format = image::guess_format(data).ok()?;
    match image::load_from_memory_with_format(data, format) {
        Ok(_) => Some(format),
        Err(e) => {
            tracing::debug!("Picturizer: {:?} signature but undecodable: {}", format, e);
            None
        }
    }
}

/// The composed words <-> picture pipeline.
pub struct Picturizer {
    codec: WordCodec,
    renderer: BitmapRenderer,
    min_render_len: usize,
}

impl Picturizer {
    pub fn new(codec: WordCodec) -> Self {
        Self {
            codec,
            renderer: BitmapRenderer::default(),
            min_render_len: LexipixConfig::default().min_render_len,
        }
    }

    /// Wires a pipeline from configuration around an already-loaded dictionary.
    pub fn from_config(config: &LexipixConfig, dictionary: Dictionary) -> Self {
        Self::new(WordCodec::new(dictionary).with_lookup(config.lookup))
            .with_renderer(BitmapRenderer::new(config.render_strategy))
            .with_min_render_len(config.min_render_len)
    }

    pub fn with_renderer(mut self, renderer: BitmapRenderer) -> Self {
        self.renderer = renderer;
        self
    }

    pub fn with_min_render_len(mut self, min_render_len: usize) -> Self {
        self.min_render_len = min_render_len;
        self
    }

    pub fn codec(&self) -> &WordCodec {
        &self.codec
    }

    /// Encodes arbitrary bytes (typically an image file) as words.
    pub fn wordify(&self, data: &[u8]) -> WordSequence {
        let words = self.codec.encode(data);
        tracing::info!("Picturizer: there were {} words", words.len());
        words
    }

    /// Decodes words and produces a displayable picture.
    ///
    /// Undecodable input follows the codec's sentinel path, so it surfaces
    /// here as a (too small) payload rather than an error.
    pub fn picturize<S: AsRef<str>>(&self, words: &[S]) -> Result<Picture, LexipixError> {
        let data = self.codec.decode(words);

        if let Some(format) = sniff_container(&data) {
            tracing::info!("Picturizer: payload is a {:?} image ({} bytes)", format, data.len());
            return Ok(Picture::Container { format, bytes: data });
        }

        if data.len() < self.min_render_len {
            tracing::info!(
                "Picturizer: {} bytes is below the {} byte render threshold",
                data.len(),
                self.min_render_len
            );
            return Ok(Picture::TooSmall { len: data.len() });
        }

        let bitmap = self.renderer.render(&data)?;
        let png = bitmap.to_png()?;
        Ok(Picture::Rendered {
            side: bitmap.side(),
            png,
        })
    }

    pub fn picturize_text(&self, text: &str) -> Result<Picture, LexipixError> {
        self.picturize(WordSequence::parse(text).tokens())
    }
}
