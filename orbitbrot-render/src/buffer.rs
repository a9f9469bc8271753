/// An RGBA frame: 4 bytes per pixel, row-major, alpha always 255.
#[derive(Debug, Clone)]
pub struct RenderBuffer {
    pub width: u32,
    pub height: u32,
    pixels: Vec<u8>,
}

impl RenderBuffer {
    /// Create a new buffer filled with opaque black.
    pub fn new(width: u32, height: u32) -> Self {
        let mut pixels = vec![0u8; width as usize * height as usize * 4];
        for chunk in pixels.chunks_exact_mut(4) {
            chunk[3] = 255;
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Bytes per row.
    #[inline]
    pub fn stride(&self) -> usize {
        self.width as usize * 4
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// The RGBA bytes of pixel `(px, py)`.
    pub fn pixel(&self, px: u32, py: u32) -> [u8; 4] {
        let i = py as usize * self.stride() + px as usize * 4;
        [
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ]
    }

    /// Mutable bytes of rows `[start, end)`. The caller guarantees
    /// `start <= end <= height`.
    pub(crate) fn rows_mut(&mut self, start: u32, end: u32) -> &mut [u8] {
        let stride = self.stride();
        &mut self.pixels[start as usize * stride..end as usize * stride]
    }

    pub(crate) fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }
}
