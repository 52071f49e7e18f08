use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use std::io::Write;
use std::path::PathBuf;

use gif2png::{ConvertConfig, PngCompression};

#[derive(Parser)]
#[command(name = "gif2png")]
#[command(about = "Convert every GIF in a directory to PNG and remove the originals", long_about = None)]
#[command(version)]
struct Args {
    /// Directory to scan (defaults to the configured directory, then `public`)
    #[arg(value_name = "DIR")]
    directory: Option<PathBuf>,

    /// PNG compression level
    #[arg(long, value_enum)]
    png_compression: Option<PngCompressionArg>,

    /// Remember the directory and compression level for later runs
    #[arg(long, default_value_t)]
    save_config: bool,

    /// Verbose output
    #[arg(short, long, default_value_t)]
    verbose: bool,

    /// Quiet mode (no log output)
    #[arg(short, long, default_value_t)]
    quiet: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum PngCompressionArg {
    Fast,
    Default,
    Best,
}

impl From<PngCompressionArg> for PngCompression {
    fn from(arg: PngCompressionArg) -> Self {
        match arg {
            PngCompressionArg::Fast => PngCompression::Fast,
            PngCompressionArg::Default => PngCompression::Default,
            PngCompressionArg::Best => PngCompression::Best,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    setup_logging(args.verbose, args.quiet);

    let config = build_config(&args);
    log::debug!("Using {config:?}");

    if args.save_config {
        match config.save() {
            Some(()) => log::info!("Saved configuration"),
            None => log::warn!("Failed to save configuration"),
        }
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    gif2png::convert(&config, &mut out)
        .with_context(|| format!("Failed to convert `{}`", config.directory.display()))?;
    out.flush().context("Failed to flush stdout")?;

    Ok(())
}

fn setup_logging(verbose: bool, quiet: bool) {
    if quiet {
        return;
    }

    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .format_target(false)
        .init();
}

/// Arguments win over the saved config, which wins over the defaults.
fn build_config(args: &Args) -> ConvertConfig {
    let mut config = ConvertConfig::load().unwrap_or_default();

    if let Some(directory) = &args.directory {
        config.directory = directory.clone();
    }
    if let Some(compression) = args.png_compression {
        config.compression = compression.into();
    }

    config
}
