use thiserror::Error;

#[derive(Error, Debug)]
pub enum BlurError {
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Array shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),

    #[error("Thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("Invalid radius: {0} (must be non-negative)")]
    InvalidRadius(i64),

    #[error("Image has invalid dimensions: {0}x{1}")]
    InvalidDimensions(usize, usize),

    #[error("Invalid span: {0} pixels (must be positive)")]
    InvalidSpan(usize),

    #[error("Invalid thread count: {0} (must be positive)")]
    InvalidThreads(usize),
}

pub type Result<T> = std::result::Result<T, BlurError>;
