use std::time::Duration;

pub const DEFAULT_QUALITY: u8 = 80;
pub const MIN_QUALITY: u8 = 1;
pub const MAX_QUALITY: u8 = 100;

pub const DEFAULT_MAX_WIDTH: u32 = 1920;
pub const DEFAULT_MAX_HEIGHT: u32 = 1080;

/// Upper bound on how long a single decode may run before it is reported as stalled.
pub const DEFAULT_DECODE_TIMEOUT: Duration = Duration::from_secs(30);

/// Maximum input size in bytes (100MB)
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;
pub const MAX_IMAGE_DIMENSION: u32 = 16384;

pub const DEFAULT_PNG_PRESET: u8 = 2;
pub const MAX_PNG_PRESET: u8 = 6;

/// NeuQuant sampling speed for GIF palettes, 1 (best) to 30 (fastest)
pub const GIF_ENCODER_SPEED: i32 = 10;

pub const COMPRESSED_NAME_PREFIX: &str = "compressed-";
pub const FALLBACK_MIME_TYPE: &str = "application/octet-stream";

pub const PROGRESS_SPINNER_TEMPLATE: &str = "{spinner:.green} {msg}";

// Common output message prefixes
pub const ORIGINAL_SIZE_PREFIX: &str = "📊 Original size:";
pub const COMPRESSED_SIZE_PREFIX: &str = "📈 Compressed size:";
pub const REDUCTION_PREFIX: &str = "🎯 Reduction:";
pub const SUCCESS_PREFIX: &str = "✅";
pub const WARNING_PREFIX: &str = "⚠️";
pub const INFO_PREFIX: &str = "📋";
