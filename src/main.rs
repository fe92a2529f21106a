//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]

use std::path::Path;
use std::process::ExitCode;

use hufftext::compression::compress::compress_file;
use hufftext::compression::decompress::{decompress_file, test_file};
use hufftext::error::Result;
use hufftext::storage::FileStore;
use hufftext::tools::cli::{huffopts_init, HuffOpts, Mode};
use hufftext::tools::likeness::likeness;

use log::{error, info, warn, LevelFilter};
use simplelog::{Config, TermLogger, TerminalMode};

fn main() -> ExitCode {
    // Available log levels are Error, Warn, Info, Debug, Trace
    if let Err(e) = TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Stdout,
        simplelog::ColorChoice::Auto,
    ) {
        eprintln!("Could not start the logger: {}", e);
    }

    let options = huffopts_init();

    let mut failed = false;
    for file in &options.files {
        match run(&options, file) {
            Ok(true) => {}
            Ok(false) => failed = true,
            Err(e) => {
                error!("{}: {}", file.display(), e);
                failed = true;
            }
        }
    }

    info!("Done.\n");
    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Figure out what we need to do for one file and go do it. Returns false when a
/// test round trip did not give back the input.
fn run(options: &HuffOpts, file: &Path) -> Result<bool> {
    match options.op_mode {
        Mode::Zip => {
            let mut store = FileStore::for_input(file, options.force_overwrite);
            compress_file(options, &mut store)?;
            info!(
                "Compressed file stored in {} with its code table in {}",
                store.encoded.display(),
                store.table.display()
            );
        }
        Mode::Unzip => {
            let mut store = FileStore::for_compressed_file(file, options.force_overwrite);
            let content = decompress_file(options, &mut store)?;
            info!("Decompressed file stored in {}", store.decoded.display());
            if let Some(original) = &options.compare {
                compare(original, &content)?;
            }
        }
        Mode::Test => {
            let store = FileStore::for_input(file, options.force_overwrite);
            let (_, matched) = test_file(options, &store)?;
            if !matched {
                warn!("{} does not survive a round trip", file.display());
                return Ok(false);
            }
        }
    }
    Ok(true)
}

/// Report how alike the decompressed content is to the original file.
fn compare(original: &Path, content: &[u8]) -> Result<()> {
    let original_text = hufftext::storage::read_file(original)?;
    let score = likeness(
        &String::from_utf8_lossy(&original_text),
        &String::from_utf8_lossy(content),
    );
    info!(
        "{:.4} of the decompressed file is identical with {}",
        score,
        original.display()
    );
    Ok(())
}
