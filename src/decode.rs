use crate::constants::{MAX_FILE_SIZE, MAX_IMAGE_DIMENSION};
use crate::error::{CompressionError, DecodeError, Result};
use crate::formats::{mime_type_for_path, OutputFormat};
use image::{DynamicImage, ImageReader};
use std::fs;
use std::io::Cursor;
use std::path::Path;
use tracing::debug;

/// A file handed to the pipeline: raw bytes plus what the caller knows about them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputFile {
    pub name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl InputFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    /// Reads a file from disk, labelling it with a mime type guessed from its extension.
    ///
    /// # Example
    /// ```
    /// use std::path::Path;
    /// use image_shrink::InputFile;
    ///
    /// let result = InputFile::from_path(Path::new("nonexistent.jpg"));
    /// assert!(result.is_err());
    /// ```
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(CompressionError::FileNotFound(path.to_path_buf()));
        }

        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| CompressionError::FileNotFound(path.to_path_buf()))?;
        let bytes = fs::read(path)?;

        Ok(Self::new(name, mime_type_for_path(path), bytes))
    }

    pub fn byte_size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

/// Metadata of a successfully decoded input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceImage {
    pub name: String,
    pub byte_size: u64,
    pub mime_type: String,
    pub width: u32,
    pub height: u32,
}

/// A decoded input together with its pixel surface.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    pub source: SourceImage,
    pub surface: DynamicImage,
}

/// Decodes a file into a pixel surface.
///
/// The codec is picked from the bytes' magic numbers and falls back to the
/// declared mime type when sniffing is inconclusive. Animated GIFs yield
/// their first frame.
///
/// # Security
/// - Rejects inputs above `MAX_FILE_SIZE` before touching the codec
/// - Rejects surfaces above `MAX_IMAGE_DIMENSION` on either side
pub fn decode(file: &InputFile) -> std::result::Result<DecodedImage, DecodeError> {
    let byte_size = file.byte_size();
    if byte_size == 0 {
        return Err(DecodeError::EmptyInput(file.name.clone()));
    }
    if byte_size > MAX_FILE_SIZE {
        return Err(DecodeError::FileTooLarge(byte_size, MAX_FILE_SIZE));
    }

    let sniffed = ImageReader::new(Cursor::new(file.bytes.as_slice()))
        .with_guessed_format()?
        .format();
    let format = sniffed
        .and_then(OutputFormat::from_image_format)
        .or_else(|| OutputFormat::from_mime(&file.mime_type))
        .ok_or_else(|| DecodeError::UnsupportedFormat(describe_format(file, sniffed)))?;

    // header only, no pixel buffer yet
    let (width, height) = reader_for(file, format).into_dimensions()?;
    if width == 0 || height == 0 || width > MAX_IMAGE_DIMENSION || height > MAX_IMAGE_DIMENSION {
        return Err(DecodeError::InvalidDimensions(
            width,
            height,
            MAX_IMAGE_DIMENSION,
        ));
    }

    let surface = reader_for(file, format).decode()?;

    debug!(
        name = %file.name,
        codec = %format,
        width,
        height,
        byte_size,
        "decoded source image"
    );

    Ok(DecodedImage {
        source: SourceImage {
            name: file.name.clone(),
            byte_size,
            mime_type: file.mime_type.clone(),
            width,
            height,
        },
        surface,
    })
}

fn reader_for(file: &InputFile, format: OutputFormat) -> ImageReader<Cursor<&[u8]>> {
    ImageReader::with_format(Cursor::new(file.bytes.as_slice()), format.to_image_format())
}

fn describe_format(file: &InputFile, sniffed: Option<image::ImageFormat>) -> String {
    match sniffed {
        Some(format) => format!("{:?} data in {}", format, file.name),
        None if file.mime_type.is_empty() => format!("unrecognized data in {}", file.name),
        None => format!("{} ({})", file.mime_type, file.name),
    }
}
