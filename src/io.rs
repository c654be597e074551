use crate::error::{BlurError, Result};
use crate::raster::Raster;
use image::codecs::pnm::{PnmEncoder, PnmSubtype, SampleEncoding};
use image::{ExtendedColorType, ImageEncoder, ImageFormat};
use log::{debug, info};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Read an image from disk as 8-bit RGB.
///
/// The format is detected from the file contents, so binary PPM and any
/// other format enabled in the `image` crate are accepted. Alpha and extra
/// bit depth are discarded.
pub fn read_image<P: AsRef<Path>>(path: P) -> Result<Raster> {
    let path = path.as_ref();
    info!("Opening input image: {}", path.display());

    let decoded = image::ImageReader::open(path)?
        .with_guessed_format()?
        .decode()?;
    debug!("Decoded colour type: {:?}", decoded.color());

    let rgb = decoded.into_rgb8();
    let (width, height) = (rgb.width() as usize, rgb.height() as usize);
    let raster = Raster::from_rgb_bytes(width, height, rgb.into_raw())?;
    raster.ensure_non_empty()?;

    debug!("Image dimensions: {}x{}", width, height);
    Ok(raster)
}

/// Write an RGB raster to disk.
///
/// The format follows the file extension. Paths without an extension, or
/// with one the `image` crate does not recognise, are written as binary PPM.
pub fn write_image<P: AsRef<Path>>(raster: &Raster, path: P) -> Result<()> {
    let path = path.as_ref();
    info!("Creating output image: {}", path.display());

    let (width, height) = raster.dimensions();
    let invalid = || BlurError::InvalidDimensions(width, height);
    let w = u32::try_from(width).map_err(|_| invalid())?;
    let h = u32::try_from(height).map_err(|_| invalid())?;
    let bytes = raster.rgb_bytes();

    match ImageFormat::from_path(path) {
        Ok(format) if format != ImageFormat::Pnm => {
            image::save_buffer_with_format(path, &bytes, w, h, ExtendedColorType::Rgb8, format)?;
        }
        _ => {
            debug!("Encoding {} as binary PPM", path.display());
            let writer = BufWriter::new(File::create(path)?);
            PnmEncoder::new(writer)
                .with_subtype(PnmSubtype::Pixmap(SampleEncoding::Binary))
                .write_image(&bytes, w, h, ExtendedColorType::Rgb8)?;
        }
    }

    debug!("Wrote {}x{} pixels to {}", width, height, path.display());
    Ok(())
}
