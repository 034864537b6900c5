use crate::constants::GIF_ENCODER_SPEED;
use crate::error::EncodeError;
use crate::formats::OutputFormat;
use crate::options::QualityLevel;
use crate::resize::TargetDimensions;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image::codecs::gif::GifEncoder;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::webp::WebPEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, ExtendedColorType, GenericImageView, ImageFormat};
use oxipng::Options;
use std::borrow::Cow;
use std::io::Cursor;
use tracing::debug;

/// Serialized output of the encoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    pub data: Vec<u8>,
    pub format: OutputFormat,
    pub dimensions: TargetDimensions,
}

impl EncodedImage {
    /// `data:<mime>;base64,<payload>` form for text transports.
    pub fn to_data_url(&self) -> String {
        to_data_url(self.format, &self.data)
    }
}

pub fn to_data_url(format: OutputFormat, data: &[u8]) -> String {
    format!("data:{};base64,{}", format.mime_type(), STANDARD.encode(data))
}

/// Draw `surface` scaled to exactly `target`, stretching rather than cropping.
///
/// A surface already at the target size is borrowed instead of resampled.
pub fn rasterize<'a>(
    surface: &'a DynamicImage,
    target: TargetDimensions,
    filter: FilterType,
) -> Result<Cow<'a, DynamicImage>, EncodeError> {
    if target.width == 0 || target.height == 0 {
        return Err(EncodeError::InvalidDimensions {
            width: target.width,
            height: target.height,
        });
    }

    if surface.dimensions() == (target.width, target.height) {
        return Ok(Cow::Borrowed(surface));
    }

    Ok(Cow::Owned(surface.resize_exact(
        target.width,
        target.height,
        filter,
    )))
}

/// Rasterize `surface` at `target` and serialize it as `mime_type`.
///
/// Only JPEG honours `quality`. PNG, WebP and GIF are written losslessly and
/// accept the quality level without using it; PNG output is additionally run
/// through oxipng when `png_preset` is set.
pub fn encode(
    surface: &DynamicImage,
    target: TargetDimensions,
    mime_type: &str,
    quality: QualityLevel,
    filter: FilterType,
    png_preset: Option<u8>,
) -> Result<EncodedImage, EncodeError> {
    let format = OutputFormat::from_mime(mime_type)
        .ok_or_else(|| EncodeError::UnsupportedFormat(mime_type.to_string()))?;

    let drawn = rasterize(surface, target, filter)?;

    let data = match format {
        OutputFormat::Jpeg => encode_jpeg(&drawn, quality)?,
        OutputFormat::Png => encode_png(&drawn, png_preset)?,
        OutputFormat::WebP => encode_webp(&drawn)?,
        OutputFormat::Gif => encode_gif(&drawn)?,
    };

    debug!(
        codec = %format,
        width = target.width,
        height = target.height,
        quality = quality.value(),
        encoded_bytes = data.len(),
        "encoded target surface"
    );

    Ok(EncodedImage {
        data,
        format,
        dimensions: target,
    })
}

fn encode_jpeg(img: &DynamicImage, quality: QualityLevel) -> Result<Vec<u8>, EncodeError> {
    // JPEG has no alpha channel
    let rgb = img.to_rgb8();
    let mut buffer = Vec::new();
    let mut encoder = JpegEncoder::new_with_quality(&mut buffer, quality.value());
    encoder.encode(
        rgb.as_raw(),
        rgb.width(),
        rgb.height(),
        ExtendedColorType::Rgb8,
    )?;
    Ok(buffer)
}

fn encode_png(img: &DynamicImage, preset: Option<u8>) -> Result<Vec<u8>, EncodeError> {
    let mut buffer = Cursor::new(Vec::new());
    match img {
        DynamicImage::ImageRgb32F(_) | DynamicImage::ImageRgba32F(_) => {
            DynamicImage::ImageRgba16(img.to_rgba16()).write_to(&mut buffer, ImageFormat::Png)?
        }
        _ => img.write_to(&mut buffer, ImageFormat::Png)?,
    }
    let png = buffer.into_inner();

    let Some(level) = preset else {
        return Ok(png);
    };

    let mut oxipng_options = Options::from_preset(level);
    oxipng_options.force = true;

    oxipng::optimize_from_memory(&png, &oxipng_options)
        .map_err(|e| EncodeError::PngOptimization(e.to_string()))
}

fn encode_webp(img: &DynamicImage) -> Result<Vec<u8>, EncodeError> {
    // The pure-Rust WebP encoder only writes lossless streams
    let rgba = img.to_rgba8();
    let mut buffer = Vec::new();
    WebPEncoder::new_lossless(&mut buffer).encode(
        rgba.as_raw(),
        rgba.width(),
        rgba.height(),
        ExtendedColorType::Rgba8,
    )?;
    Ok(buffer)
}

fn encode_gif(img: &DynamicImage) -> Result<Vec<u8>, EncodeError> {
    let rgba = img.to_rgba8();
    let mut buffer = Vec::new();
    {
        // the trailer is written when the encoder is dropped
        let mut encoder = GifEncoder::new_with_speed(&mut buffer, GIF_ENCODER_SPEED);
        encoder.encode(
            rgba.as_raw(),
            rgba.width(),
            rgba.height(),
            ExtendedColorType::Rgba8,
        )?;
    }
    Ok(buffer)
}
