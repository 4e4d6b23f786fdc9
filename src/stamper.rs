/* ---------------------------------------------------------------------------
** This software is in the public domain, furnished "as is", without technical
** support, and with no warranty, express or implied, as to its usefulness for
** any purpose.
**
** SPDX-License-Identifier: Unlicense
**
** -------------------------------------------------------------------------*/

use crate::emit::VersionInfo;
use crate::error::{Result, StampError};
use crate::locate::{find_file_on_path, svn_executable_name};
use crate::macros::Macros;
use crate::process::{check_process_exited_properly, run_process};
use crate::revision::{apply_increment, extract_revision, increment_requested};
use log::{debug, info};
use std::path::{Path, PathBuf};

/// Something that can report the raw head revision log of a tree.
pub trait RevisionSource {
    fn head_log(&self, directory: &str) -> Result<String>;
}

/// The svn command line client.
pub struct SvnCli {
    executable: PathBuf,
    working_dir: PathBuf,
}

impl SvnCli {
    /// Locate svn on `PATH`. It runs from the directory holding this program.
    pub fn from_path() -> Result<Self> {
        let name = svn_executable_name();
        let executable =
            find_file_on_path(name)?.ok_or_else(|| StampError::ExecutableNotFound(name.to_string()))?;
        let current_exe = std::env::current_exe().map_err(StampError::CurrentExe)?;
        let working_dir = program_dir(&current_exe)?;
        debug!("using {} from {}", executable.display(), working_dir.display());
        Ok(Self::new(executable, working_dir))
    }

    pub fn new(executable: PathBuf, working_dir: PathBuf) -> Self {
        Self {
            executable,
            working_dir,
        }
    }
}

/// Directory holding the program at `exe`.
fn program_dir(exe: &Path) -> Result<PathBuf> {
    exe.parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .ok_or_else(|| StampError::NoProgramDir(exe.to_path_buf()))
}

impl RevisionSource for SvnCli {
    fn head_log(&self, directory: &str) -> Result<String> {
        let args = ["log", "-q", "-r", "HEAD", directory];
        let child = run_process(&self.executable, args, &self.working_dir)?;
        let result = check_process_exited_properly(&self.executable, child)?;
        debug!("svn exited with {:?}: {:?}", result.exit_code, result.output);
        Ok(result.output)
    }
}

/// Resolve the build number for the tree named by `Directory` and write the
/// version stubs into `out_dir`.
pub fn stamp(macros: &Macros, source: &dyn RevisionSource, out_dir: &Path) -> Result<VersionInfo> {
    let directory = macros.get("Directory").ok_or(StampError::Usage)?;
    let revision = extract_revision(&source.head_log(directory)?)?;
    let build = apply_increment(revision, increment_requested(macros))?;
    info!("{} is at revision {}, build number {}", directory, revision, build);

    let version = VersionInfo::new(build);
    version.write_all(out_dir)?;
    Ok(version)
}
