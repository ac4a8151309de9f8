use lexipix_core::{LexipixError, RenderStrategy};

/// Shortest buffer that yields at least one full RGB triple.
pub const MIN_RENDERABLE_LEN: usize = 3;

/// A square, fully opaque RGBA image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bitmap {
    side: u32,
    rgba: Vec<u8>,
}

impl Bitmap {
    pub fn side(&self) -> u32 {
        self.side
    }

    /// RGBA of the pixel at column `x`, row `y`, or `None` outside the grid.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.side || y >= self.side {
            return None;
        }
        let at = (y as usize * self.side as usize + x as usize) * 4;
        let px = self.rgba.get(at..at + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Row-major RGBA8 samples.
    pub fn as_rgba(&self) -> &[u8] {
        &self.rgba
    }

    /// Encodes the bitmap as an 8-bit RGBA PNG.
    pub fn to_png(&self) -> Result<Vec<u8>, LexipixError> {
        let mut out = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut out, self.side, self.side);
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);
            let mut writer = encoder
                .write_header()
                .map_err(|e| LexipixError::Image(format!("png header: {e}")))?;
            writer
                .write_image_data(&self.rgba)
                .map_err(|e| LexipixError::Image(format!("png data: {e}")))?;
            writer
                .finish()
                .map_err(|e| LexipixError::Image(format!("png finish: {e}")))?;
        }
        Ok(out)
    }
}

/// Renders raw bytes as a square bitmap, three bytes per pixel.
///
/// ## Layout
/// Pixel `i` (row-major) takes the RGB triple at byte offset
/// `(i % (len / 3)) * 3`, so the triples repeat once the grid outgrows them.
/// Under [`RenderStrategy::Legacy`] the grid holds `ceil(sqrt(len / 2))`
/// pixels per side, which covers at least `len / 2` pixels and therefore
/// tiles the start of the buffer again past the `len / 3` mark. [`RenderStrategy::Consistent`] sizes the
/// grid from `len / 3` instead.
#[derive(Clone, Copy, Debug, Default)]
pub struct BitmapRenderer {
    strategy: RenderStrategy,
}

impl BitmapRenderer {
    pub fn new(strategy: RenderStrategy) -> Self {
        Self { strategy }
    }

    /// Side length of the bitmap produced for a buffer of `len` bytes.
    pub fn side_for(&self, len: usize) -> u32 {
        let pixel_count = match self.strategy {
            RenderStrategy::Legacy => len / 2,
            RenderStrategy::Consistent => len / 3,
        };
        ceil_sqrt(pixel_count) as u32
    }

    pub fn render(&self, data: &[u8]) -> Result<Bitmap, LexipixError> {
        if data.len() < MIN_RENDERABLE_LEN {
            return Err(LexipixError::BufferTooSmall {
                len: data.len(),
                min: MIN_RENDERABLE_LEN,
            });
        }

        let side = self.side_for(data.len());
        let cycle = data.len() / 3;
        let pixels = side as usize * side as usize;

        let mut rgba = Vec::with_capacity(pixels * 4);
        for i in 0..pixels {
            let idx = (i % cycle) * 3;
            rgba.extend_from_slice(&[data[idx], data[idx + 1], data[idx + 2], 0xFF]);
        }

        tracing::debug!(
            "BitmapRenderer: {} bytes -> {}x{} ({:?})",
            data.len(),
            side,
            side,
            self.strategy
        );
        Ok(Bitmap { side, rgba })
    }
}

/// Smallest `r` with `r * r >= n`.
fn ceil_sqrt(n: usize) -> usize {
    let mut r = (n as f64).sqrt() as usize;
    while r * r < n {
        r += 1;
    }
    while r > 0 && (r - 1) * (r - 1) >= n {
        r -= 1;
    }
    r
}
