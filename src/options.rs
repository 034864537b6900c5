use crate::constants::{
    DEFAULT_DECODE_TIMEOUT, DEFAULT_MAX_HEIGHT, DEFAULT_MAX_WIDTH, DEFAULT_PNG_PRESET,
    DEFAULT_QUALITY, MAX_PNG_PRESET, MAX_QUALITY, MIN_QUALITY,
};
use crate::error::{CompressionError, Result};
use image::imageops::FilterType;
use std::time::Duration;

/// Lossy encoding fidelity, 1 (smallest) to 100 (most faithful).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QualityLevel(u8);

impl QualityLevel {
    pub fn new(quality: u8) -> Result<Self> {
        if !(MIN_QUALITY..=MAX_QUALITY).contains(&quality) {
            return Err(CompressionError::InvalidQuality(quality));
        }
        Ok(Self(quality))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Quality as the 0.0-1.0 factor handed to encoders.
    pub fn factor(&self) -> f32 {
        self.0 as f32 / 100.0
    }
}

impl Default for QualityLevel {
    fn default() -> Self {
        Self(DEFAULT_QUALITY)
    }
}

/// Maximum width/height envelope for the resized output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub max_width: u32,
    pub max_height: u32,
}

impl BoundingBox {
    pub fn new(max_width: u32, max_height: u32) -> Result<Self> {
        if max_width == 0 || max_height == 0 {
            return Err(CompressionError::InvalidBoundingBox(max_width, max_height));
        }
        Ok(Self {
            max_width,
            max_height,
        })
    }

    pub fn contains(&self, width: u32, height: u32) -> bool {
        width <= self.max_width && height <= self.max_height
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_WIDTH,
            max_height: DEFAULT_MAX_HEIGHT,
        }
    }
}

/// Everything one pipeline invocation needs besides the file itself.
///
/// Options are passed by value into [`crate::compress`], so the values in
/// effect when an invocation starts are the ones it finishes with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompressionOptions {
    pub quality: QualityLevel,
    pub bounds: BoundingBox,
    pub decode_timeout: Duration,
    pub filter: FilterType,
    /// oxipng preset applied to PNG output; `None` keeps the plain encoder output.
    pub png_preset: Option<u8>,
}

impl CompressionOptions {
    pub fn new(quality: Option<u8>) -> Result<Self> {
        let quality = QualityLevel::new(quality.unwrap_or(DEFAULT_QUALITY))?;

        Ok(Self {
            quality,
            ..Self::default()
        })
    }

    pub fn with_bounds(mut self, max_width: u32, max_height: u32) -> Result<Self> {
        self.bounds = BoundingBox::new(max_width, max_height)?;
        Ok(self)
    }

    pub fn with_decode_timeout(mut self, timeout: Duration) -> Self {
        self.decode_timeout = timeout;
        self
    }

    pub fn with_filter(mut self, filter: FilterType) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_png_preset(mut self, preset: Option<u8>) -> Result<Self> {
        if let Some(level) = preset.filter(|&level| level > MAX_PNG_PRESET) {
            return Err(CompressionError::InvalidPngPreset(level, MAX_PNG_PRESET));
        }
        self.png_preset = preset;
        Ok(self)
    }
}

impl Default for CompressionOptions {
    fn default() -> Self {
        Self {
            quality: QualityLevel::default(),
            bounds: BoundingBox::default(),
            decode_timeout: DEFAULT_DECODE_TIMEOUT,
            filter: FilterType::Lanczos3,
            png_preset: Some(DEFAULT_PNG_PRESET),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compression_options_default() {
        let options = CompressionOptions::new(None).unwrap();
        assert_eq!(options.quality.value(), 80);
        assert_eq!(options.bounds, BoundingBox::new(1920, 1080).unwrap());
        assert_eq!(options.decode_timeout, Duration::from_secs(30));
        assert_eq!(options.filter, FilterType::Lanczos3);
        assert_eq!(options.png_preset, Some(2));
    }

    #[test]
    fn test_compression_options_invalid_quality() {
        let result = CompressionOptions::new(Some(0));
        assert!(matches!(result, Err(CompressionError::InvalidQuality(0))));

        let result = CompressionOptions::new(Some(101));
        assert!(matches!(result, Err(CompressionError::InvalidQuality(101))));
    }

    #[test]
    fn test_quality_bounds_are_inclusive() {
        assert_eq!(QualityLevel::new(1).unwrap().value(), 1);
        assert_eq!(QualityLevel::new(100).unwrap().value(), 100);
        assert_eq!(QualityLevel::new(100).unwrap().factor(), 1.0);
        assert_eq!(QualityLevel::new(50).unwrap().factor(), 0.5);
    }

    #[test]
    fn test_with_bounds() {
        let options = CompressionOptions::new(Some(60))
            .unwrap()
            .with_bounds(640, 480)
            .unwrap();
        assert_eq!(options.bounds.max_width, 640);
        assert_eq!(options.bounds.max_height, 480);
        assert_eq!(options.quality.value(), 60);

        let result = CompressionOptions::default().with_bounds(0, 480);
        assert!(matches!(result, Err(CompressionError::InvalidBoundingBox(0, 480))));
    }

    #[test]
    fn test_with_png_preset() {
        let options = CompressionOptions::default().with_png_preset(None).unwrap();
        assert_eq!(options.png_preset, None);

        let options = CompressionOptions::default().with_png_preset(Some(6)).unwrap();
        assert_eq!(options.png_preset, Some(6));

        let result = CompressionOptions::default().with_png_preset(Some(7));
        assert!(matches!(result, Err(CompressionError::InvalidPngPreset(7, 6))));
    }

    #[test]
    fn test_bounding_box_contains() {
        let bounds = BoundingBox::default();
        assert!(bounds.contains(1920, 1080));
        assert!(bounds.contains(1, 1));
        assert!(!bounds.contains(1921, 1080));
        assert!(!bounds.contains(1920, 1081));
    }
}
