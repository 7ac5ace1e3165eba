//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use coverprep::EncodingFormat;

/// Coverprep - generate coverage instrumentation inputs for a compile step
#[derive(Parser)]
#[command(name = "coverprep")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file (defaults to .coverprep/config.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the package coverage config and print its path
    Pkgcfg(PkgcfgArgs),

    /// Write the instrumented output file list and print its path
    Outfilelist(OutfilelistArgs),

    /// Write both files and print the instrumentation tool flags
    Prepare(PrepareArgs),
}

#[derive(Args)]
pub struct PkgcfgArgs {
    /// Import path of the package
    #[arg(long)]
    pub pkg_path: String,

    /// Short package name
    #[arg(long)]
    pub pkg_name: String,

    /// Directory receiving the instrumented output
    #[arg(long, env = "COVERPREP_OUT_DIR")]
    pub out_dir: PathBuf,

    /// Encoding of the config file (overrides the config file)
    #[arg(long, value_enum)]
    pub format: Option<EncodingFormat>,
}

#[derive(Args)]
pub struct OutfilelistArgs {
    /// Directory receiving the instrumented output
    #[arg(long, env = "COVERPREP_OUT_DIR")]
    pub out_dir: PathBuf,

    /// Source files to be instrumented, in order
    pub sources: Vec<PathBuf>,
}

#[derive(Args)]
pub struct PrepareArgs {
    /// Import path of the package
    #[arg(long)]
    pub pkg_path: String,

    /// Short package name
    #[arg(long)]
    pub pkg_name: String,

    /// Directory receiving the instrumented output
    #[arg(long, env = "COVERPREP_OUT_DIR")]
    pub out_dir: PathBuf,

    /// Encoding of the config file (overrides the config file)
    #[arg(long, value_enum)]
    pub format: Option<EncodingFormat>,

    /// Source files to be instrumented, in order
    pub sources: Vec<PathBuf>,
}
