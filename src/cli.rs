use crate::error::{BlurError, Result};
use crate::focal::EdgePolicy;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "blur")]
#[command(about = "Box-blur an RGB image: every pixel becomes the mean of its neighbourhood")]
#[command(version)]
pub struct Args {
    /// Blur radius in pixels (0 copies the image unchanged)
    #[arg(value_name = "RADIUS", allow_negative_numbers = true)]
    pub radius: i64,

    /// Input image path (PPM or any format the image crate can decode)
    #[arg(value_name = "INPUT")]
    pub input: String,

    /// Output image path; the format follows the extension
    #[arg(value_name = "OUTPUT")]
    pub output: String,

    /// Number of threads (default: all available)
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

    /// Pixels per unit of parallel work (default: one image row)
    #[arg(short, long, value_name = "PIXELS")]
    pub span: Option<usize>,

    /// How the window is clamped at the right and bottom edges
    #[arg(short, long, value_enum, default_value_t = EdgePolicy::Symmetric)]
    pub edge_policy: EdgePolicy,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Radius in pixels, rejecting negative values
    pub fn radius_px(&self) -> Result<usize> {
        usize::try_from(self.radius).map_err(|_| BlurError::InvalidRadius(self.radius))
    }

    /// Requested span, rejecting zero
    pub fn span_px(&self) -> Result<Option<usize>> {
        match self.span {
            Some(0) => Err(BlurError::InvalidSpan(0)),
            span => Ok(span),
        }
    }

    /// Requested thread count, rejecting zero
    pub fn thread_count(&self) -> Result<Option<usize>> {
        match self.threads {
            Some(0) => Err(BlurError::InvalidThreads(0)),
            threads => Ok(threads),
        }
    }
}
