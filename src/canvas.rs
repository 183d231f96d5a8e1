//! RGB8 pixel canvas.
//!
//! Row-major, top-to-bottom, three bytes per pixel. Pixel `(x, y)` lives at
//! bytes `3 * (y * width + x) .. +3`. Writes outside the canvas are dropped.

/// Flat RGB8 pixel buffer with explicit width and height.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Canvas {
    /// Bytes per pixel.
    pub const CHANNELS: usize = 3;

    /// Create a black canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * Self::CHANNELS],
        }
    }

    /// Create a canvas cleared to `rgb`.
    pub fn filled(width: u32, height: u32, rgb: [u8; 3]) -> Self {
        let mut canvas = Self::new(width, height);
        canvas.clear(rgb);
        canvas
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bytes in one row.
    pub fn stride(&self) -> usize {
        self.width as usize * Self::CHANNELS
    }

    #[inline]
    fn in_bounds(&self, x: i64, y: i64) -> bool {
        x >= 0 && x < self.width as i64 && y >= 0 && y < self.height as i64
    }

    #[inline]
    fn pixel_index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * Self::CHANNELS
    }

    /// Set every pixel to `rgb`.
    pub fn clear(&mut self, rgb: [u8; 3]) {
        for pixel in self.pixels.chunks_exact_mut(Self::CHANNELS) {
            pixel.copy_from_slice(&rgb);
        }
    }

    /// Write one pixel; out-of-range coordinates are ignored.
    #[inline]
    pub fn set_pixel(&mut self, x: i64, y: i64, rgb: [u8; 3]) {
        if self.in_bounds(x, y) {
            let idx = self.pixel_index(x as u32, y as u32);
            self.pixels[idx..idx + Self::CHANNELS].copy_from_slice(&rgb);
        }
    }

    /// Read one pixel, or `None` outside the canvas.
    pub fn get_pixel(&self, x: i64, y: i64) -> Option<[u8; 3]> {
        if !self.in_bounds(x, y) {
            return None;
        }
        let idx = self.pixel_index(x as u32, y as u32);
        let p = &self.pixels[idx..idx + Self::CHANNELS];
        Some([p[0], p[1], p[2]])
    }

    /// Fill the horizontal span `x1..=x2` of row `y`, clipped to the canvas.
    pub fn hline(&mut self, x1: i64, x2: i64, y: i64, rgb: [u8; 3]) {
        if y < 0 || y >= self.height as i64 || self.width == 0 {
            return;
        }
        let (lo, hi) = if x1 <= x2 { (x1, x2) } else { (x2, x1) };
        let lo = lo.max(0);
        let hi = hi.min(self.width as i64 - 1);
        for x in lo..=hi {
            self.set_pixel(x, y, rgb);
        }
    }

    /// Raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Raw bytes, mutable. Used by whole-buffer writers.
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    /// Consume the canvas, returning its bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.pixels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_is_row_major_top_down() {
        let mut c = Canvas::new(4, 3);
        c.set_pixel(1, 2, [10, 20, 30]);
        let idx = 3 * (2 * 4 + 1);
        assert_eq!(&c.as_bytes()[idx..idx + 3], &[10, 20, 30]);
        assert_eq!(c.as_bytes().len(), 4 * 3 * 3);
    }

    #[test]
    fn out_of_range_writes_are_dropped() {
        let mut c = Canvas::filled(2, 2, [1, 2, 3]);
        let before = c.clone();
        c.set_pixel(-1, 0, [255; 3]);
        c.set_pixel(0, -1, [255; 3]);
        c.set_pixel(2, 0, [255; 3]);
        c.set_pixel(0, 2, [255; 3]);
        c.set_pixel(i64::MAX, i64::MIN, [255; 3]);
        assert_eq!(c, before);
    }

    #[test]
    fn get_pixel_bounds() {
        let c = Canvas::filled(2, 2, [7, 8, 9]);
        assert_eq!(c.get_pixel(1, 1), Some([7, 8, 9]));
        assert_eq!(c.get_pixel(2, 1), None);
        assert_eq!(c.get_pixel(0, -1), None);
    }

    #[test]
    fn hline_clips() {
        let mut c = Canvas::new(4, 1);
        c.hline(5, -3, 0, [9, 9, 9]);
        assert!(c.as_bytes().iter().all(|&b| b == 9));
        c.hline(0, 3, 1, [1, 1, 1]);
        assert!(c.as_bytes().iter().all(|&b| b == 9));
    }

    #[test]
    fn empty_canvas_is_harmless() {
        let mut c = Canvas::new(0, 0);
        c.clear([1, 1, 1]);
        c.set_pixel(0, 0, [1, 1, 1]);
        c.hline(0, 10, 0, [1, 1, 1]);
        assert!(c.as_bytes().is_empty());
    }
}
