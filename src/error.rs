/* ---------------------------------------------------------------------------
** This software is in the public domain, furnished "as is", without technical
** support, and with no warranty, express or implied, as to its usefulness for
** any purpose.
**
** SPDX-License-Identifier: Unlicense
**
** -------------------------------------------------------------------------*/

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can abort a stamping run.
///
/// The `Display` text of each variant is what gets printed to the console
/// before exiting with status 1.
#[derive(Debug, Error)]
pub enum StampError {
    #[error("Usage: version-stamper Directory=c:\\Apsim [Increment=Yes]")]
    Usage,

    #[error("Macro specified more than once: {0}")]
    DuplicateMacro(String),

    #[error("Cannot find PATH environment variable")]
    PathUnset,

    #[error("Cannot find {0} on PATH")]
    ExecutableNotFound(String),

    #[error("Cannot execute file: {}. File not found.", .0.display())]
    FileNotFound(PathBuf),

    #[error("Cannot run {}: {source}", .executable.display())]
    Spawn {
        executable: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot read output of {}: {source}", .executable.display())]
    Wait {
        executable: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error from {name}: {output}")]
    Process { name: String, output: String },

    #[error("Invalid string returned from svn: {0}")]
    InvalidOutput(String),

    #[error("Invalid revision number line from svn: {0}")]
    InvalidRevisionLine(String),

    #[error("Revision number {0} cannot be incremented")]
    RevisionOverflow(u32),

    #[error("Cannot write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot determine location of running program: {0}")]
    CurrentExe(#[source] io::Error),

    #[error("Running program {} has no parent directory", .0.display())]
    NoProgramDir(PathBuf),
}

pub type Result<T> = std::result::Result<T, StampError>;
