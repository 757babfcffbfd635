use std::{
    fs::File,
    io::{self, BufRead, BufReader, BufWriter, Write},
    path::PathBuf,
};

use avrhex::{logging::initialize_logger, Converter};
use clap::Parser;
use log::{debug, LevelFilter};
use miette::{IntoDiagnostic, Result, WrapErr};

#[derive(Debug, Parser)]
#[clap(about, version)]
struct Cli {
    /// File containing the word listing to convert; read from stdin when
    /// omitted
    listing: Option<PathBuf>,

    /// File to write the HEX image to; written to stdout when omitted
    #[clap(long, short = 'o')]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    miette::set_panic_hook();
    initialize_logger(LevelFilter::Info);

    let args = Cli::parse();
    debug!("{:#?}", args);

    let reader: Box<dyn BufRead> = match &args.listing {
        Some(path) => {
            let file = File::open(path)
                .into_diagnostic()
                .wrap_err_with(|| format!("Failed to open {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(BufReader::new(io::stdin().lock())),
    };

    let writer: Box<dyn Write> = match &args.output {
        Some(path) => {
            let file = File::create(path)
                .into_diagnostic()
                .wrap_err_with(|| format!("Failed to create {}", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(io::stdout().lock()),
    };

    Converter::new(writer).convert(reader)?;

    Ok(())
}
