//! Raster format handling keyed by mime type
//!
//! The pipeline always re-encodes into the format the caller declared for the
//! input file, so every lookup here starts from a mime type string.

use crate::constants::FALLBACK_MIME_TYPE;
use image::ImageFormat;
use std::fmt;
use std::path::Path;

/// Formats the pipeline can both decode and encode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// JPEG, the only format where quality changes fidelity
    Jpeg,
    /// PNG, lossless and post-optimized with oxipng
    Png,
    /// WebP, encoded losslessly
    WebP,
    /// GIF, single frame
    Gif,
}

impl OutputFormat {
    /// Parse a declared mime type. Parameters after `;` and letter case are ignored.
    pub fn from_mime(mime_type: &str) -> Option<Self> {
        let essence = mime_type.split(';').next().unwrap_or_default().trim();
        match essence.to_ascii_lowercase().as_str() {
            "image/jpeg" | "image/jpg" | "image/pjpeg" => Some(OutputFormat::Jpeg),
            "image/png" | "image/apng" => Some(OutputFormat::Png),
            "image/webp" => Some(OutputFormat::WebP),
            "image/gif" => Some(OutputFormat::Gif),
            _ => None,
        }
    }

    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_lowercase().as_str() {
            "jpg" | "jpeg" | "jfif" => Some(OutputFormat::Jpeg),
            "png" => Some(OutputFormat::Png),
            "webp" => Some(OutputFormat::WebP),
            "gif" => Some(OutputFormat::Gif),
            _ => None,
        }
    }

    pub fn from_image_format(format: ImageFormat) -> Option<Self> {
        match format {
            ImageFormat::Jpeg => Some(OutputFormat::Jpeg),
            ImageFormat::Png => Some(OutputFormat::Png),
            ImageFormat::WebP => Some(OutputFormat::WebP),
            ImageFormat::Gif => Some(OutputFormat::Gif),
            _ => None,
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            OutputFormat::Jpeg => "image/jpeg",
            OutputFormat::Png => "image/png",
            OutputFormat::WebP => "image/webp",
            OutputFormat::Gif => "image/gif",
        }
    }

    /// Convert to the image crate's ImageFormat
    pub fn to_image_format(&self) -> ImageFormat {
        match self {
            OutputFormat::Jpeg => ImageFormat::Jpeg,
            OutputFormat::Png => ImageFormat::Png,
            OutputFormat::WebP => ImageFormat::WebP,
            OutputFormat::Gif => ImageFormat::Gif,
        }
    }

    /// Whether the quality level influences the encoded output
    pub fn honors_quality(&self) -> bool {
        matches!(self, OutputFormat::Jpeg)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Jpeg => "JPEG",
            OutputFormat::Png => "PNG",
            OutputFormat::WebP => "WebP",
            OutputFormat::Gif => "GIF",
        };
        write!(f, "{}", name)
    }
}

/// Guess a mime type from a file name's extension, the way a browser labels a picked file.
pub fn mime_type_for_path(path: &Path) -> &'static str {
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(OutputFormat::from_extension)
        .map(|format| format.mime_type())
        .unwrap_or(FALLBACK_MIME_TYPE)
}
