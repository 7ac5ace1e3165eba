//! `coverprep outfilelist` command

use anyhow::{Context, Result};

use crate::cli::OutfilelistArgs;
use coverprep::generate_manifest;

pub fn execute(args: OutfilelistArgs) -> Result<()> {
    let path = generate_manifest(&args.sources, &args.out_dir).with_context(|| {
        format!(
            "failed to generate output file list in {}",
            args.out_dir.display()
        )
    })?;

    println!("{}", path.display());
    Ok(())
}
