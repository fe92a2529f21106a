use clap::Parser;
use log::{info, warn};
use std::{fmt::Display, fmt::Formatter, path::PathBuf};

/// Verbosity of user information
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Errors,
    Warnings,
    Info,
    Debug,
    Trace,
}

impl Verbosity {
    pub fn level_filter(self) -> log::LevelFilter {
        match self {
            Verbosity::Quiet => log::LevelFilter::Off,
            Verbosity::Errors => log::LevelFilter::Error,
            Verbosity::Warnings => log::LevelFilter::Warn,
            Verbosity::Info => log::LevelFilter::Info,
            Verbosity::Debug => log::LevelFilter::Debug,
            Verbosity::Trace => log::LevelFilter::Trace,
        }
    }
}

impl From<u8> for Verbosity {
    fn from(v: u8) -> Self {
        match v {
            0 => Verbosity::Quiet,
            1 => Verbosity::Errors,
            2 => Verbosity::Warnings,
            3 => Verbosity::Info,
            4 => Verbosity::Debug,
            _ => Verbosity::Trace,
        }
    }
}

/// Zip, Unzip, Test
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Zip,
    Unzip,
    Test,
}
impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Everything the user can set to control program behavior
#[derive(Debug, Clone)]
pub struct HuffOpts {
    /// Files to read for input
    pub files: Vec<PathBuf>,
    /// Silently overwrite existing files with the same name
    pub force_overwrite: bool,
    /// Compress/Decompress/Test
    pub op_mode: Mode,
    /// Read input as UTF-8 text, folding chars above 255 to '?'
    pub text: bool,
    /// Original file to score the decompressed output against
    pub compare: Option<PathBuf>,
    /// Verbosity of user information
    pub verbose: Verbosity,
}

impl HuffOpts {
    pub fn new() -> Self {
        Self {
            files: vec![],
            force_overwrite: false,
            op_mode: Mode::Zip,
            text: false,
            compare: None,
            verbose: Verbosity::Info,
        }
    }
}

impl Default for HuffOpts {
    fn default() -> Self {
        Self::new()
    }
}

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "A Huffman coding file compressor",
    long_about = "
    Builds one Huffman code table from the byte frequencies of the input, and writes the
    packed bits next to the input as NAME_compressed.EXT with the code table beside it as
    NAME_compressed_list.EXT. Decompressing NAME_compressed.EXT writes
    NAME_compressed_decoded.EXT."
)]
pub struct Args {
    /// Files to process
    #[clap(required = true)]
    files: Vec<PathBuf>,

    /// Compress the input files (default)
    #[clap(short = 'z', long = "compress")]
    compress: bool,

    /// Decompress the input files
    #[clap(short = 'd', long = "decompress", conflicts_with = "compress")]
    decompress: bool,

    /// Compress and decompress in memory, and check the result matches
    #[clap(short = 't', long = "test", conflicts_with_all = &["compress", "decompress"])]
    test: bool,

    /// Overwrite existing output files
    #[clap(short = 'f', long = "force")]
    force: bool,

    /// Treat input as UTF-8 text. Chars above 255 are stored as '?'
    #[clap(long = "text")]
    text: bool,

    /// After decompressing, report how alike the output is to this original file
    #[clap(long = "compare", value_name = "ORIGINAL")]
    compare: Option<PathBuf>,

    /// Sets verbosity. -v0 is silent, -v5 is chatty
    #[clap(short = 'v', default_value_t = 3)]
    v: u8,
}

impl From<Args> for HuffOpts {
    fn from(args: Args) -> Self {
        let op_mode = if args.decompress {
            Mode::Unzip
        } else if args.test {
            Mode::Test
        } else {
            Mode::Zip
        };
        Self {
            files: args.files,
            force_overwrite: args.force,
            op_mode,
            text: args.text,
            compare: args.compare,
            verbose: Verbosity::from(args.v),
        }
    }
}

/// Read the command line into HuffOpts and set the log level from it.
pub fn huffopts_init() -> HuffOpts {
    let opts = HuffOpts::from(Args::parse());
    log::set_max_level(opts.verbose.level_filter());

    // Below we report initialization status to the user
    info!("---- Hufftext Initialization Start ----");
    info!("Verbosity set to {}", log::max_level());
    info!("Operational mode set to {}", opts.op_mode);
    for file in &opts.files {
        info!("Getting input from the file {}", file.display());
    }
    if opts.force_overwrite {
        info!("Forcing file overwriting")
    };
    if opts.text {
        info!("Reading input as text")
    };
    if opts.compare.is_some() && opts.op_mode != Mode::Unzip {
        warn!("--compare only applies when decompressing")
    };
    info!("---- Hufftext Initialization End ----\n");
    opts
}
