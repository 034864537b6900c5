use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "image-shrink",
    about = "Resize and re-encode images within 1920x1080 at a chosen quality",
    long_about = "image-shrink decodes a JPEG, PNG, WebP or GIF image, scales it down to fit \
                  a 1920x1080 bounding box while keeping its aspect ratio, re-encodes it in \
                  its original format at the requested quality and reports the size change.",
    version,
    after_help = "EXAMPLES:\n  \
    image-shrink compress photo.jpg -q 70\n  \
    image-shrink compress screenshot.png -o ./out\n  \
    image-shrink compress avatar.webp --data-url\n  \
    image-shrink info photo.jpg"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(
        about = "Compress a single image file",
        long_about = "Compress a single image and save it as compressed-<name> in the output \
                      directory. The output keeps the input's format."
    )]
    Compress {
        #[arg(help = "Input image file path")]
        input: PathBuf,

        #[arg(
            short = 'o',
            long,
            help = "Output directory (default: next to the input)",
            long_help = "Directory that receives compressed-<name>. \
                         Created if missing. Defaults to the input file's directory."
        )]
        output_dir: Option<PathBuf>,

        #[arg(
            short = 'q',
            long,
            help = "Compression quality (1-100, default: 80)",
            long_help = "Compression quality from 1 (smallest) to 100 (most faithful). \
                         Only JPEG output changes with quality; PNG, WebP and GIF are lossless."
        )]
        quality: Option<u8>,

        #[arg(
            long,
            help = "Print a base64 data URL instead of writing a file",
            long_help = "Print the compressed image as a data:<mime>;base64 URL on stdout \
                         instead of saving it."
        )]
        data_url: bool,

        #[arg(short = 's', long, help = "Only print errors")]
        quiet: bool,

        #[arg(short = 'v', long, help = "Print per-stage details", conflicts_with = "quiet")]
        verbose: bool,
    },

    #[command(
        about = "Display image information and the planned output size",
        long_about = "Decode an image and show its dimensions, format and file size together \
                      with the dimensions compression would produce."
    )]
    Info {
        #[arg(help = "Image file path to analyze")]
        input: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_compress() {
        let args = Args::try_parse_from(["image-shrink", "compress", "a.jpg", "-q", "55", "-o", "out"]).unwrap();
        match args.command {
            Commands::Compress {
                input,
                output_dir,
                quality,
                data_url,
                quiet,
                verbose,
            } => {
                assert_eq!(input, PathBuf::from("a.jpg"));
                assert_eq!(output_dir, Some(PathBuf::from("out")));
                assert_eq!(quality, Some(55));
                assert!(!data_url && !quiet && !verbose);
            }
            Commands::Info { .. } => panic!("expected compress"),
        }
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        let result = Args::try_parse_from(["image-shrink", "compress", "a.jpg", "--quiet", "--verbose"]);
        assert!(result.is_err());
    }
}
