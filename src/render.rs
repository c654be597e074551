use crate::error::Result;
use crate::focal::{average_at, EdgePolicy};
use crate::partition::WorkPartition;
use crate::raster::{Raster, CHANNELS};
use log::debug;
use rayon::prelude::*;

/// Blur `source` with a box of `radius`, using one image row per unit of
/// parallel work
pub fn render(source: &Raster, radius: usize, policy: EdgePolicy) -> Result<Raster> {
    render_with(
        source,
        radius,
        policy,
        WorkPartition::default_span(source.width()),
    )
}

/// Blur `source` with a box of `radius`, handing out `span` pixels at a time
/// to the rayon pool.
///
/// The destination buffer is split into disjoint `span`-pixel slices, so each
/// output pixel is written exactly once by exactly one worker. The result does
/// not depend on `span` or on the number of threads.
pub fn render_with(
    source: &Raster,
    radius: usize,
    policy: EdgePolicy,
    span: usize,
) -> Result<Raster> {
    let (width, height) = source.dimensions();
    let partition = WorkPartition::new(width, height, span)?;
    let mut bytes = vec![0u8; partition.total_pixels() * CHANNELS];

    debug!(
        "Rendering {}x{} with radius {} ({:?}) over {} spans of {} pixels",
        width,
        height,
        radius,
        policy,
        partition.num_spans,
        partition.span()
    );

    bytes
        .par_chunks_mut(partition.span() * CHANNELS)
        .enumerate()
        .for_each(|(span_idx, out)| {
            let span = partition.get_span(span_idx);
            let pixels = out.chunks_exact_mut(CHANNELS);
            for (index, dst) in (span.start..span.end).zip(pixels) {
                let (x, y) = partition.coordinate(index);
                dst.copy_from_slice(&average_at(source, radius, x, y, policy).to_rgb());
            }
        });

    Raster::from_rgb_bytes(width, height, bytes)
}
