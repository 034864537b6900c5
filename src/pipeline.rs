use crate::decode::{decode, DecodedImage, InputFile, SourceImage};
use crate::encode::encode;
use crate::error::{CompressionError, DecodeError, EncodeError, Result};
use crate::options::CompressionOptions;
use crate::resize::{fit_within, TargetDimensions};
use crate::result::{CompressionResult, OriginalInfo};
use std::time::{Duration, Instant};
use tokio::task;
use tracing::{debug, info, warn};

/// Core image processing pipeline: decode -> plan size -> draw and encode -> measure
///
/// # Arguments
/// * `file` - The input bytes with their name and declared mime type
/// * `options` - Quality, bounding box and codec knobs for this invocation
///
/// # Returns
/// * `Ok(CompressionResult)` - Original info plus the encoded payload and its size
/// * `Err(CompressionError::Decode)` - The input is not a readable raster image
/// * `Err(CompressionError::Encode)` - The output could not be rasterized or serialized
///
/// `options` is moved in, so changes the caller makes to its own copy after
/// this call starts cannot reach the in-flight encode. Decoding and encoding
/// run on the blocking pool; decoding is abandoned with
/// `DecodeError::Timeout` once `options.decode_timeout` elapses.
pub async fn compress(file: InputFile, options: CompressionOptions) -> Result<CompressionResult> {
    let started = Instant::now();

    let DecodedImage { source, surface } = decode_with_timeout(file, options.decode_timeout).await?;

    let target = plan_target(&source, &options);
    debug!(
        source_width = source.width,
        source_height = source.height,
        target_width = target.width,
        target_height = target.height,
        "planned target dimensions"
    );

    let mime_type = source.mime_type.clone();
    let encoded = task::spawn_blocking(move || {
        encode(
            &surface,
            target,
            &mime_type,
            options.quality,
            options.filter,
            options.png_preset,
        )
    })
    .await
    .map_err(|e| EncodeError::TaskFailed(e.to_string()))??;

    let result = CompressionResult::new(
        OriginalInfo {
            name: source.name,
            byte_size: source.byte_size,
            mime_type: source.mime_type,
        },
        encoded,
    );

    info!(
        name = %result.original.name,
        original_bytes = result.original.byte_size,
        compressed_bytes = result.compressed.byte_size,
        width = target.width,
        height = target.height,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "compressed image"
    );

    Ok(result)
}

/// Decode a file and report the size the pipeline would draw it at, without encoding.
pub async fn inspect(
    file: InputFile,
    options: CompressionOptions,
) -> Result<(SourceImage, TargetDimensions)> {
    let decoded = decode_with_timeout(file, options.decode_timeout).await?;
    let target = plan_target(&decoded.source, &options);
    Ok((decoded.source, target))
}

/// Runs [`compress`] to completion on a private runtime.
///
/// The runtime is shut down without waiting for its blocking pool, so a
/// decode that outlived `options.decode_timeout` is detached and the
/// `DecodeError::Timeout` is returned as soon as the limit passes.
///
/// # Panics
///
/// Panics when called from within a tokio runtime, since a runtime cannot be
/// started or blocked on from inside another one. Use [`compress`] there.
pub fn compress_blocking(file: InputFile, options: CompressionOptions) -> Result<CompressionResult> {
    let runtime = tokio::runtime::Runtime::new()?;
    let outcome = runtime.block_on(compress(file, options));
    runtime.shutdown_background();
    outcome
}

pub fn plan_target(source: &SourceImage, options: &CompressionOptions) -> TargetDimensions {
    fit_within(source.width, source.height, &options.bounds)
}

async fn decode_with_timeout(file: InputFile, limit: Duration) -> Result<DecodedImage> {
    let name = file.name.clone();
    let decoding = task::spawn_blocking(move || decode(&file));

    match tokio::time::timeout(limit, decoding).await {
        Ok(Ok(decoded)) => Ok(decoded?),
        Ok(Err(join_error)) => Err(DecodeError::TaskFailed(join_error.to_string()).into()),
        Err(_) => {
            warn!(name = %name, timeout = ?limit, "decode stalled");
            Err(CompressionError::Decode(DecodeError::Timeout(limit)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, GenericImageView, ImageFormat, RgbImage};
    use std::io::Cursor;

    fn png_file(name: &str, width: u32, height: u32) -> InputFile {
        let img = DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
            image::Rgb([(x % 256) as u8, (y % 256) as u8, 64])
        }));
        let mut buffer = Cursor::new(Vec::new());
        img.write_to(&mut buffer, ImageFormat::Png).unwrap();
        InputFile::new(name, "image/png", buffer.into_inner())
    }

    #[tokio::test]
    async fn test_compress_within_bounds_keeps_size() {
        let options = CompressionOptions::new(Some(80)).unwrap();
        let result = compress(png_file("small.png", 100, 50), options).await.unwrap();

        assert_eq!(result.compressed.dimensions, TargetDimensions::new(100, 50));
        assert_eq!(result.original.name, "small.png");
        assert_eq!(result.original.mime_type, "image/png");
        assert_eq!(result.compressed.byte_size, result.compressed.encoded_data.len() as u64);
    }

    #[tokio::test]
    async fn test_compress_uses_custom_bounds() {
        let options = CompressionOptions::new(Some(50))
            .unwrap()
            .with_bounds(40, 40)
            .unwrap();
        let result = compress(png_file("wide.png", 200, 100), options).await.unwrap();

        assert_eq!(result.compressed.dimensions, TargetDimensions::new(40, 20));
        let decoded = image::load_from_memory(&result.compressed.encoded_data).unwrap();
        assert_eq!(decoded.dimensions(), (40, 20));
    }

    #[tokio::test]
    async fn test_compress_malformed_is_decode_error() {
        let file = InputFile::new("bad.jpg", "image/jpeg", b"fake image data".to_vec());
        let err = compress(file, CompressionOptions::default()).await.unwrap_err();
        assert!(err.is_decode());
    }

    #[tokio::test]
    async fn test_compress_unencodable_type_is_encode_error() {
        let mut file = png_file("drawing.svg", 10, 10);
        file.mime_type = "image/svg+xml".to_string();
        let err = compress(file, CompressionOptions::default()).await.unwrap_err();
        assert!(err.is_encode());
    }

    #[tokio::test]
    async fn test_inspect_reports_plan() {
        let (source, target) = inspect(png_file("tall.png", 20, 60), CompressionOptions::default()
            .with_bounds(100, 30)
            .unwrap())
        .await
        .unwrap();

        assert_eq!((source.width, source.height), (20, 60));
        assert_eq!(target, TargetDimensions::new(10, 30));
    }

    #[test]
    fn test_compress_blocking() {
        let result = compress_blocking(png_file("sync.png", 8, 8), CompressionOptions::default()).unwrap();
        assert_eq!(result.compressed.dimensions, TargetDimensions::new(8, 8));
        assert_eq!(result.download_name(), "compressed-sync.png");
    }
}
