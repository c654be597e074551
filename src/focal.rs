use crate::raster::{Raster, CHANNELS};
use ndarray::Axis;

/// How the averaging window is clamped at the right and bottom image edges
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum EdgePolicy {
    /// `[x - r, x + r]` clipped to the image on every side
    #[default]
    Symmetric,
    /// Bit-compatible with the historical blur: the upper bound is `x + r`
    /// (exclusive) unless `x + r` passes the last column, in which case it
    /// becomes the image width
    Legacy,
}

/// Half-open rectangle `[x_min, x_max) × [y_min, y_max)` of source pixels
/// averaged for one output pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub x_min: usize,
    pub x_max: usize,
    pub y_min: usize,
    pub y_max: usize,
}

impl Window {
    /// Window of `radius` around `(x, y)` on a `width × height` image.
    /// `(x, y)` must lie inside the image.
    pub fn around(
        x: usize,
        y: usize,
        radius: usize,
        width: usize,
        height: usize,
        policy: EdgePolicy,
    ) -> Self {
        let (x_min, x_max) = clamp_axis(x, radius, width, policy);
        let (y_min, y_max) = clamp_axis(y, radius, height, policy);
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    pub fn width(&self) -> usize {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> usize {
        self.y_max - self.y_min
    }

    /// Number of source pixels in the window
    pub fn count(&self) -> u64 {
        (self.width() * self.height()) as u64
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

fn clamp_axis(center: usize, radius: usize, len: usize, policy: EdgePolicy) -> (usize, usize) {
    let min = center.saturating_sub(radius);
    let reach = center.saturating_add(radius);
    let max = match policy {
        EdgePolicy::Symmetric => reach.saturating_add(1).min(len),
        EdgePolicy::Legacy => {
            if reach > len - 1 {
                len
            } else {
                reach
            }
        }
    };
    (min, max)
}

/// Per-channel running sums over a window, or the averages derived from them
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pixel {
    pub r: u64,
    pub g: u64,
    pub b: u64,
}

impl Pixel {
    #[inline]
    fn accumulate(&mut self, rgb: &[u8]) {
        self.r += u64::from(rgb[0]);
        self.g += u64::from(rgb[1]);
        self.b += u64::from(rgb[2]);
    }

    /// Truncating integer mean of each channel. `count` must be non-zero.
    pub fn mean(self, count: u64) -> Self {
        Self {
            r: self.r / count,
            g: self.g / count,
            b: self.b / count,
        }
    }

    /// Channel values narrowed to bytes, saturating at 255
    pub fn to_rgb(self) -> [u8; CHANNELS] {
        [self.r, self.g, self.b].map(|v| v.min(u64::from(u8::MAX)) as u8)
    }
}

/// Mean of every channel over the clamped window around `(x, y)`.
///
/// Sums are accumulated row by row and divided with truncation, never
/// rounded, so results are reproducible bit for bit. An empty window (only
/// reachable with [`EdgePolicy::Legacy`] at radius 0) yields the source
/// pixel unchanged.
pub fn average_at(
    raster: &Raster,
    radius: usize,
    x: usize,
    y: usize,
    policy: EdgePolicy,
) -> Pixel {
    let window = Window::around(x, y, radius, raster.width(), raster.height(), policy);

    if window.is_empty() {
        let px = raster.pixel(x, y);
        let mut center = Pixel::default();
        center.accumulate(&[px[0], px[1], px[2]]);
        return center;
    }

    let region = raster.region(window.x_min..window.x_max, window.y_min..window.y_max);
    let mut sum = Pixel::default();
    for row in region.axis_iter(Axis(0)) {
        for px in row.axis_iter(Axis(0)) {
            sum.accumulate(&[px[0], px[1], px[2]]);
        }
    }

    sum.mean(window.count())
}
