/* ---------------------------------------------------------------------------
** This software is in the public domain, furnished "as is", without technical
** support, and with no warranty, express or implied, as to its usefulness for
** any purpose.
**
** SPDX-License-Identifier: Unlicense
**
** -------------------------------------------------------------------------*/

use anyhow::Error;
use clap::Parser;
use std::path::Path;
use std::process::ExitCode;

mod emit;
mod error;
mod locate;
mod macros;
mod process;
mod revision;
mod stamper;

use crate::error::StampError;
use crate::macros::Macros;
use crate::stamper::SvnCli;

/// Stamp the svn head revision of a tree into the generated VersionInfo files.
#[derive(Parser)]
#[command(version = env!("GIT_VERSION"))]
struct Opts {
    /// Directory=<path> [Increment=Yes]
    #[arg(value_name = "MACRO", trailing_var_arg = true, allow_hyphen_values = true)]
    macros: Vec<String>,
}

fn run(opts: Opts) -> Result<(), Error> {
    let macros = Macros::parse(&opts.macros)?;
    if !macros.contains("Directory") {
        return Err(StampError::Usage.into());
    }

    let svn = SvnCli::from_path()?;
    stamper::stamp(&macros, &svn, Path::new("."))?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let opts = Opts::parse();
    match run(opts) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            println!("{}", err);
            ExitCode::FAILURE
        }
    }
}
