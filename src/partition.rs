use crate::error::{BlurError, Result};
use log::debug;

/// Smallest default unit of parallel work, in pixels
pub const MIN_SPAN: usize = 256;

/// A contiguous run of pixels in the flattened row-major index space
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelSpan {
    pub start: usize,
    pub end: usize,
}

impl PixelSpan {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Split of the `width × height` output grid into disjoint spans of at most
/// `span` pixels. Span `i` covers flat indices `[i * span, (i + 1) * span)`.
/// Spans larger than the grid are clamped to it, so `span * CHANNELS` never
/// exceeds the destination buffer length.
#[derive(Debug, Clone)]
pub struct WorkPartition {
    width: usize,
    total_pixels: usize,
    span: usize,
    pub num_spans: usize,
}

impl WorkPartition {
    pub fn new(width: usize, height: usize, span: usize) -> Result<Self> {
        if span == 0 {
            return Err(BlurError::InvalidSpan(span));
        }

        let total_pixels = width * height;
        let span = span.min(total_pixels.max(1));
        let num_spans = total_pixels.div_ceil(span);

        debug!(
            "WorkPartition: {}x{} image, span={} → {} spans",
            width, height, span, num_spans
        );

        Ok(Self {
            width,
            total_pixels,
            span,
            num_spans,
        })
    }

    /// One image row per span, but never fewer than [`MIN_SPAN`] pixels
    pub fn default_span(width: usize) -> usize {
        width.max(MIN_SPAN)
    }

    pub fn span(&self) -> usize {
        self.span
    }

    pub fn total_pixels(&self) -> usize {
        self.total_pixels
    }

    pub fn get_span(&self, span_idx: usize) -> PixelSpan {
        let start = span_idx
            .saturating_mul(self.span)
            .min(self.total_pixels);
        let end = start.saturating_add(self.span).min(self.total_pixels);
        PixelSpan { start, end }
    }

    /// `(x, y)` of a flat row-major pixel index
    #[inline]
    pub fn coordinate(&self, index: usize) -> (usize, usize) {
        (index % self.width, index / self.width)
    }

    pub fn iter(&self) -> impl Iterator<Item = PixelSpan> + '_ {
        (0..self.num_spans).map(|idx| self.get_span(idx))
    }
}
