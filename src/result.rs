use crate::constants::COMPRESSED_NAME_PREFIX;
use crate::encode::{to_data_url, EncodedImage};
use crate::estimate::{estimate_size, EncodedPayload};
use crate::formats::OutputFormat;
use crate::resize::TargetDimensions;

/// What the caller handed in, as reported back after compression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OriginalInfo {
    pub name: String,
    pub byte_size: u64,
    pub mime_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressedInfo {
    pub byte_size: u64,
    pub encoded_data: Vec<u8>,
    pub format: OutputFormat,
    pub dimensions: TargetDimensions,
}

/// Outcome of one pipeline invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressionResult {
    pub original: OriginalInfo,
    pub compressed: CompressedInfo,
}

impl CompressionResult {
    pub fn new(original: OriginalInfo, encoded: EncodedImage) -> Self {
        let byte_size = estimate_size(EncodedPayload::Binary(&encoded.data));
        Self {
            original,
            compressed: CompressedInfo {
                byte_size,
                encoded_data: encoded.data,
                format: encoded.format,
                dimensions: encoded.dimensions,
            },
        }
    }

    /// File name for saving the compressed payload: `compressed-<original name>`.
    pub fn download_name(&self) -> String {
        format!("{}{}", COMPRESSED_NAME_PREFIX, self.original.name)
    }

    pub fn data_url(&self) -> String {
        to_data_url(self.compressed.format, &self.compressed.encoded_data)
    }

    /// Percentage saved relative to the original; negative when the output grew.
    pub fn reduction_percent(&self) -> f64 {
        calculate_reduction(self.original.byte_size, self.compressed.byte_size)
    }
}

/// Format file size in human-readable format
///
/// Below 1 KiB sizes are shown in whole bytes, above that with two decimals
/// in KB or MB (e.g., "512 B", "1.50 KB", "2.00 MB").
pub fn format_file_size(bytes: u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = 1024 * 1024;

    if bytes < KIB {
        format!("{} B", bytes)
    } else if bytes < MIB {
        format!("{:.2} KB", bytes as f64 / KIB as f64)
    } else {
        format!("{:.2} MB", bytes as f64 / MIB as f64)
    }
}

/// Reduction as a percentage (positive means smaller, negative means the output grew)
pub fn calculate_reduction(original_size: u64, compressed_size: u64) -> f64 {
    if original_size == 0 {
        return 0.0;
    }
    ((original_size as f64 - compressed_size as f64) / original_size as f64) * 100.0
}

pub fn format_reduction(percent: f64) -> String {
    format!("{:.1}%", percent)
}
