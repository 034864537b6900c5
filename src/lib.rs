//! Client-side image compression: decode a JPEG, PNG, WebP or GIF file, scale it
//! to fit a bounding box, re-encode it in its declared format and report the sizes.
//!
//! [`compress`] is the async entry point and [`compress_blocking`] wraps it for
//! synchronous callers.

pub mod cli;
pub mod constants;
pub mod decode;
pub mod encode;
pub mod error;
pub mod estimate;
pub mod formats;
pub mod logger;
pub mod options;
pub mod pipeline;
pub mod resize;
pub mod result;

pub use decode::{decode, DecodedImage, InputFile, SourceImage};
pub use encode::{encode, rasterize, EncodedImage};
pub use error::{CompressionError, DecodeError, EncodeError, EstimateError, Result};
pub use estimate::{estimate_size, exact_size, EncodedPayload};
pub use formats::OutputFormat;
pub use options::{BoundingBox, CompressionOptions, QualityLevel};
pub use pipeline::{compress, compress_blocking, inspect, plan_target};
pub use resize::{fit_within, TargetDimensions};
pub use result::{CompressedInfo, CompressionResult, OriginalInfo};
