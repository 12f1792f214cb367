use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use flexi_logger::Logger;
use font_embedder::{
    archive::{MAX_COMPRESSION_LEVEL, MIN_COMPRESSION_LEVEL},
    embed, EmbedOptions, HeaderSymbols, DEFAULT_ARRAY_NAME, DEFAULT_NAMESPACE, DEFAULT_SIZE_NAME,
};

#[derive(Parser, Debug)]
#[command(version, about = "Embed a TTF file as compressed C++ header data.", long_about = None)]
pub struct Cli {
    #[arg(help = "Input TTF file")]
    input_font: PathBuf,

    #[arg(help = "Output header path")]
    output_header: PathBuf,

    #[arg(help = "Name of the byte array symbol", long, default_value = DEFAULT_ARRAY_NAME)]
    array_name: String,

    #[arg(help = "Name of the size symbol", long, default_value = DEFAULT_SIZE_NAME)]
    size_name: String,

    #[arg(help = "Namespace for the generated symbols", long, default_value = DEFAULT_NAMESPACE)]
    namespace: String,

    #[arg(
        help = "Deflate compression level (1-9), defaults to the deflate default",
        long,
        value_parser = clap::value_parser!(i64).range(MIN_COMPRESSION_LEVEL..=MAX_COMPRESSION_LEVEL)
    )]
    compression_level: Option<i64>,

    #[arg(help = "Check that the archive decompresses to the input before writing", long, default_value_t = false)]
    verify: bool,

    #[arg(help = "Enable debug logging", short, long, default_value_t = false)]
    verbose: bool,
}

impl Cli {
    fn options(&self) -> EmbedOptions {
        EmbedOptions {
            symbols: HeaderSymbols::new(&self.array_name, &self.size_name, &self.namespace),
            compression_level: self.compression_level,
            verify: self.verify,
        }
    }
}

fn run(args: &Cli) -> anyhow::Result<()> {
    let report = embed(&args.input_font, &args.output_header, &args.options())?;
    println!("Generated {} with embedded ZIP font data", report.output_path.display());
    Ok(())
}

fn main() -> ExitCode {
    let args = Cli::parse();

    let level = if args.verbose { "debug" } else { "warn" };
    let _logger = match Logger::try_with_env_or_str(level).and_then(|logger| logger.log_to_stderr().start()) {
        Ok(handle) => Some(handle),
        Err(err) => {
            eprintln!("Failed to start logger: {err}");
            None
        }
    };

    if let Err(err) = run(&args) {
        eprintln!("Error: {err:#}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
