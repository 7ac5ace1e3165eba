//! `coverprep prepare` command

use anyhow::{Context, Result};

use crate::cli::PrepareArgs;
use crate::commands::pkgcfg::resolve_format;
use coverprep::prepare;
use coverprep::util::Config;

pub fn execute(args: PrepareArgs, config: &Config) -> Result<()> {
    let format = resolve_format(args.format, config);

    let inputs = prepare(
        &format,
        &args.pkg_path,
        &args.pkg_name,
        &args.sources,
        &args.out_dir,
    )
    .with_context(|| format!("failed to prepare coverage inputs for `{}`", args.pkg_path))?;

    for arg in inputs.tool_args() {
        println!("{}", arg.to_string_lossy());
    }
    Ok(())
}
