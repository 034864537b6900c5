use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Failures while turning input bytes into a pixel surface.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Input file is empty: {0}")]
    EmptyInput(String),

    #[error("File too large: {0} bytes. Maximum allowed: {1} bytes")]
    FileTooLarge(u64, u64),

    #[error("Unsupported input format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid image dimensions: {0}x{1}. Maximum allowed: {2}x{2}")]
    InvalidDimensions(u32, u32, u32),

    #[error("Image decoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("I/O error while reading image: {0}")]
    Io(#[from] std::io::Error),

    #[error("Decoding did not finish within {0:?}")]
    Timeout(Duration),

    #[error("Decoder task failed: {0}")]
    TaskFailed(String),
}

/// Failures while rasterizing the resized surface or serializing it.
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("Cannot rasterize a {width}x{height} surface")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("No encoder available for output type: {0}")]
    UnsupportedFormat(String),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("PNG optimization error: {0}")]
    PngOptimization(String),

    #[error("Encoder task failed: {0}")]
    TaskFailed(String),
}

/// Failures while measuring a text-encoded payload exactly.
#[derive(Debug, Error)]
pub enum EstimateError {
    #[error("Not a base64 data URL")]
    NotDataUrl,

    #[error("Invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),
}

#[derive(Debug, Error)]
pub enum CompressionError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error("Invalid quality value: {0}. Must be between 1 and 100")]
    InvalidQuality(u8),

    #[error("Invalid bounding box: {0}x{1}. Both sides must be positive")]
    InvalidBoundingBox(u32, u32),

    #[error("Invalid PNG optimization preset: {0}. Maximum allowed: {1}")]
    InvalidPngPreset(u8, u8),

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CompressionError {
    pub fn is_decode(&self) -> bool {
        matches!(self, CompressionError::Decode(_))
    }

    pub fn is_encode(&self) -> bool {
        matches!(self, CompressionError::Encode(_))
    }
}

pub type Result<T> = std::result::Result<T, CompressionError>;
