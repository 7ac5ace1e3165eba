//! `coverprep pkgcfg` command

use anyhow::{Context, Result};

use crate::cli::PkgcfgArgs;
use coverprep::util::Config;
use coverprep::{generate_config, EncodingFormat};

/// Pick the encoding: flag first, then config file.
pub fn resolve_format(flag: Option<EncodingFormat>, config: &Config) -> EncodingFormat {
    flag.unwrap_or(config.pkgcfg.format)
}

pub fn execute(args: PkgcfgArgs, config: &Config) -> Result<()> {
    let format = resolve_format(args.format, config);

    let path = generate_config(&format, &args.pkg_path, &args.pkg_name, &args.out_dir)
        .with_context(|| format!("failed to generate coverage config for `{}`", args.pkg_path))?;

    println!("{}", path.display());
    Ok(())
}
