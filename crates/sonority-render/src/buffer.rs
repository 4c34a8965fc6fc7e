//! Pixel buffer and rectangle fills.

use crate::color::Rgb;

/// Half-open pixel rectangle `[x0, x1) x [y0, y1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    /// Left edge, inclusive.
    pub x0: u32,
    /// Top edge, inclusive.
    pub y0: u32,
    /// Right edge, exclusive.
    pub x1: u32,
    /// Bottom edge, exclusive.
    pub y1: u32,
}

impl Rect {
    /// Create a rectangle from its corners.
    pub const fn new(x0: u32, y0: u32, x1: u32, y1: u32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.x1.saturating_sub(self.x0)
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.y1.saturating_sub(self.y0)
    }
}

/// How a rectangle is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    /// Solid color.
    Solid(Rgb),
    /// Ink every `period`-th row.
    HorizontalHatch { ink: Rgb, period: u32 },
    /// Ink every `period`-th pixel in row-major order; with a band width that
    /// is not a multiple of `period` this reads as diagonal stripes.
    DiagonalHatch { ink: Rgb, period: u32 },
    /// Ink every `period`-th column.
    VerticalHatch { ink: Rgb, period: u32 },
}

/// A 2D RGB buffer, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripBuffer {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel data.
    pub data: Vec<Rgb>,
}

impl StripBuffer {
    /// Create a new buffer filled with a color.
    pub fn new(width: u32, height: u32, fill: Rgb) -> Self {
        let size = (width as usize) * (height as usize);
        Self {
            width,
            height,
            data: vec![fill; size],
        }
    }

    /// Create a new white buffer.
    pub fn new_white(width: u32, height: u32) -> Self {
        Self::new(width, height, Rgb::white())
    }

    /// Get a pixel at the given coordinates.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Rgb {
        self.data[self.index(x, y)]
    }

    /// Set a pixel; coordinates outside the buffer are ignored.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, color: Rgb) {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            self.data[idx] = color;
        }
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + x as usize
    }

    /// Paint `rect` with `fill`. Hatch counters start at zero for every call.
    pub fn fill_rect(&mut self, rect: Rect, fill: Fill) {
        match fill {
            Fill::Solid(color) => {
                for y in rect.y0..rect.y1 {
                    for x in rect.x0..rect.x1 {
                        self.set(x, y, color);
                    }
                }
            }
            Fill::HorizontalHatch { ink, period } => {
                for (k, y) in (rect.y0..rect.y1).enumerate() {
                    if k as u32 % period == 0 {
                        for x in rect.x0..rect.x1 {
                            self.set(x, y, ink);
                        }
                    }
                }
            }
            Fill::DiagonalHatch { ink, period } => {
                let mut m: u32 = 0;
                for y in rect.y0..rect.y1 {
                    for x in rect.x0..rect.x1 {
                        if m % period == 0 {
                            self.set(x, y, ink);
                        }
                        m = m.wrapping_add(1);
                    }
                }
            }
            Fill::VerticalHatch { ink, period } => {
                for y in rect.y0..rect.y1 {
                    for (k, x) in (rect.x0..rect.x1).enumerate() {
                        if k as u32 % period == 0 {
                            self.set(x, y, ink);
                        }
                    }
                }
            }
        }
    }

    /// Convert to packed 8-bit RGB bytes.
    pub fn to_rgb8(&self) -> Vec<u8> {
        self.data.iter().flat_map(|c| c.to_array()).collect()
    }
}
