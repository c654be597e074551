use crate::error::{BlurError, Result};
use ndarray::{Array3, ArrayView1, ArrayView3};
use std::borrow::Cow;
use std::ops::Range;

/// Number of colour channels carried by every pixel (R, G, B).
pub const CHANNELS: usize = 3;

/// An 8-bit RGB pixel grid stored row-major as `(height, width, channel)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    data: Array3<u8>,
}

impl Raster {
    /// Create a zero-filled raster
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            data: Array3::zeros((height, width, CHANNELS)),
        }
    }

    /// Build a raster from interleaved row-major RGB bytes
    pub fn from_rgb_bytes(width: usize, height: usize, bytes: Vec<u8>) -> Result<Self> {
        let data = Array3::from_shape_vec((height, width, CHANNELS), bytes)?;
        Ok(Self { data })
    }

    /// Consume the raster, returning its interleaved row-major RGB bytes
    pub fn into_rgb_bytes(self) -> Vec<u8> {
        if self.data.is_standard_layout() {
            self.data.into_raw_vec_and_offset().0
        } else {
            self.data.iter().copied().collect()
        }
    }

    /// Interleaved row-major RGB bytes, borrowed when the storage already
    /// has that layout
    pub fn rgb_bytes(&self) -> Cow<'_, [u8]> {
        match self.data.as_slice() {
            Some(bytes) => Cow::Borrowed(bytes),
            None => Cow::Owned(self.data.iter().copied().collect()),
        }
    }

    pub fn width(&self) -> usize {
        self.data.dim().1
    }

    pub fn height(&self) -> usize {
        self.data.dim().0
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width(), self.height())
    }

    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Read one channel value. Panics if the coordinate is out of bounds.
    #[inline]
    pub fn get(&self, x: usize, y: usize, channel: usize) -> u8 {
        self.data[[y, x, channel]]
    }

    /// Write one channel value. Panics if the coordinate is out of bounds.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, channel: usize, value: u8) {
        self.data[[y, x, channel]] = value;
    }

    /// All channels of the pixel at `(x, y)`
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> ArrayView1<'_, u8> {
        self.data.slice(ndarray::s![y, x, ..])
    }

    /// Rows `ys` and columns `xs` of the raster, all channels
    pub fn region(&self, xs: Range<usize>, ys: Range<usize>) -> ArrayView3<'_, u8> {
        self.data.slice(ndarray::s![ys, xs, ..])
    }

    /// Fail on rasters with no pixels
    pub fn ensure_non_empty(&self) -> Result<()> {
        if self.is_empty() {
            return Err(BlurError::InvalidDimensions(self.width(), self.height()));
        }
        Ok(())
    }
}
