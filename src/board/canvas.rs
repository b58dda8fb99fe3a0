use crate::color::Color;

/// Axis-aligned rectangle in canvas pixel space, origin at the top-left
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Whether the point falls inside, right and bottom edges excluded
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// Square drawing surface the board is painted on
pub trait Canvas {
    /// Side length in pixels
    fn size(&self) -> f64;

    /// Erases everything painted so far
    fn clear(&mut self);

    fn fill_rect(&mut self, rect: Rect, color: Color);
}

/// In-memory raster canvas. A pixel belongs to a rectangle when its center
/// lies inside it; unpainted pixels are `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelCanvas {
    size: u32,
    pixels: Vec<Option<Color>>,
}

impl PixelCanvas {
    pub fn new(size: u32) -> Self {
        Self {
            size,
            pixels: vec![None; (size as usize) * (size as usize)],
        }
    }

    pub fn side(&self) -> u32 {
        self.size
    }

    /// Changes the side length, dropping the current contents
    pub fn resize(&mut self, size: u32) {
        self.size = size;
        self.pixels = vec![None; (size as usize) * (size as usize)];
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.size || y >= self.size {
            return None;
        }
        self.pixels[self.index(x, y)]
    }

    pub fn painted_count(&self) -> usize {
        self.pixels.iter().filter(|p| p.is_some()).count()
    }

    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.size as usize) + (x as usize)
    }

    /// Pixel indices along one axis whose centers fall in `[start, start + len)`
    fn span(&self, start: f64, len: f64) -> std::ops::Range<u32> {
        let side = self.size as f64;
        let first = (start - 0.5).ceil().clamp(0.0, side) as u32;
        let last = (start + len - 0.5).ceil().clamp(0.0, side) as u32;
        first..last.max(first)
    }
}

impl Canvas for PixelCanvas {
    fn size(&self) -> f64 {
        self.size as f64
    }

    fn clear(&mut self) {
        self.pixels.iter_mut().for_each(|p| *p = None);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        if !(rect.width > 0.0 && rect.height > 0.0) {
            return;
        }
        let columns = self.span(rect.x, rect.width);
        for y in self.span(rect.y, rect.height) {
            for x in columns.clone() {
                let index = self.index(x, y);
                self.pixels[index] = Some(color);
            }
        }
    }
}
