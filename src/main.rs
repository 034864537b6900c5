use anyhow::{Context, Result};
use clap::Parser;
use image_shrink::cli::{Args, Commands};
use image_shrink::constants::{
    COMPRESSED_SIZE_PREFIX, INFO_PREFIX, ORIGINAL_SIZE_PREFIX, PROGRESS_SPINNER_TEMPLATE,
    REDUCTION_PREFIX, SUCCESS_PREFIX, WARNING_PREFIX,
};
use image_shrink::result::{format_file_size, format_reduction};
use image_shrink::{compress, inspect, logger, CompressionOptions, CompressionResult, InputFile};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    let args = Args::parse();

    let runtime = tokio::runtime::Runtime::new().context("Failed to start the async runtime")?;
    let outcome = runtime.block_on(run(args));
    // a decode abandoned after its timeout must not keep the process alive
    runtime.shutdown_background();
    outcome
}

async fn run(args: Args) -> Result<()> {
    match args.command {
        Commands::Compress {
            input,
            output_dir,
            quality,
            data_url,
            quiet,
            verbose,
        } => {
            // a data URL owns stdout, so the report is dropped
            let quiet = quiet || data_url;
            logger::init(quiet, verbose);
            run_compress(&input, output_dir, quality, data_url, quiet).await?;
        }
        Commands::Info { input } => {
            logger::init(false, false);
            show_image_info(&input).await?;
        }
    }

    Ok(())
}

async fn run_compress(
    input: &Path,
    output_dir: Option<PathBuf>,
    quality: Option<u8>,
    data_url: bool,
    quiet: bool,
) -> Result<()> {
    let options = CompressionOptions::new(quality)?;
    let file = InputFile::from_path(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;

    if !quiet {
        println!("🗜️  Compressing image: {:?}", input);
    }

    let spinner = create_spinner(quiet, "Compressing image...");
    let outcome = compress(file, options).await;
    spinner.finish_and_clear();
    let result = outcome.with_context(|| format!("Failed to compress {}", input.display()))?;

    if data_url {
        println!("{}", result.data_url());
        return Ok(());
    }

    let output_dir = output_dir.unwrap_or_else(|| default_output_dir(input));
    fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create output directory {}", output_dir.display()))?;
    let output_path = output_dir.join(result.download_name());
    fs::write(&output_path, &result.compressed.encoded_data)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    if !quiet {
        print_compression_result(&result, &output_path);
        if quality.is_some() && !result.compressed.format.honors_quality() {
            println!(
                "{} {} output is lossless; --quality has no effect",
                INFO_PREFIX, result.compressed.format
            );
        }
    }

    Ok(())
}

async fn show_image_info(input: &Path) -> Result<()> {
    println!("{} Getting info for: {:?}", INFO_PREFIX, input);

    let file = InputFile::from_path(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    let byte_size = file.byte_size();
    let (source, target) = inspect(file, CompressionOptions::default())
        .await
        .with_context(|| format!("Failed to decode {}", input.display()))?;

    println!("{} Basic Information:", INFO_PREFIX);
    println!("  📁 File: {}", source.name);
    println!("  🎭 Declared type: {}", source.mime_type);
    println!("  📏 Dimensions: {}x{} pixels", source.width, source.height);
    println!("  📦 File size: {} ({} bytes)", format_file_size(byte_size), byte_size);
    println!(
        "  📐 Aspect ratio: {:.2}:1",
        source.width as f64 / source.height as f64
    );

    if (target.width, target.height) == (source.width, source.height) {
        println!("  🎯 Output size: {} (already within bounds)", target);
    } else {
        println!("  🎯 Output size: {} (scaled down)", target);
    }

    Ok(())
}

fn print_compression_result(result: &CompressionResult, output_path: &Path) {
    let reduction = result.reduction_percent();

    println!(
        "{} {}",
        ORIGINAL_SIZE_PREFIX,
        format_file_size(result.original.byte_size)
    );
    println!(
        "{} {} ({})",
        COMPRESSED_SIZE_PREFIX,
        format_file_size(result.compressed.byte_size),
        result.compressed.dimensions
    );
    println!("{} {}", REDUCTION_PREFIX, format_reduction(reduction));

    if reduction > 0.0 {
        println!("{} Saved to {:?}", SUCCESS_PREFIX, output_path);
    } else {
        println!(
            "{}  File size increased by {}; saved to {:?}",
            WARNING_PREFIX,
            format_reduction(reduction.abs()),
            output_path
        );
    }
}

fn default_output_dir(input: &Path) -> PathBuf {
    match input.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn create_spinner(quiet: bool, message: &str) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template(PROGRESS_SPINNER_TEMPLATE) {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb
}
