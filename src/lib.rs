// Library exports for testing and reuse

pub mod cli;
pub mod error;
pub mod focal;
pub mod io;
pub mod partition;
pub mod raster;
pub mod render;

// Re-export commonly used types
pub use error::{BlurError, Result};
pub use focal::{average_at, EdgePolicy, Pixel, Window};
pub use io::{read_image, write_image};
pub use raster::Raster;
pub use render::{render, render_with};
