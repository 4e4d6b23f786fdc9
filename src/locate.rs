/* ---------------------------------------------------------------------------
** This software is in the public domain, furnished "as is", without technical
** support, and with no warranty, express or implied, as to its usefulness for
** any purpose.
**
** SPDX-License-Identifier: Unlicense
**
** -------------------------------------------------------------------------*/

use crate::error::{Result, StampError};
use log::debug;
use std::ffi::OsStr;
use std::path::{PathBuf, MAIN_SEPARATOR};

/// File name of the svn client for this host.
pub fn svn_executable_name() -> &'static str {
    if MAIN_SEPARATOR == '/' {
        "svn"
    } else {
        "svn.exe"
    }
}

/// Search the directories listed in `PATH` for `file_name`.
pub fn find_file_on_path(file_name: &str) -> Result<Option<PathBuf>> {
    let path = std::env::var_os("PATH").ok_or(StampError::PathUnset)?;
    Ok(find_file_in(file_name, &path))
}

/// Search every non-empty entry of a `PATH`-style list for `file_name`,
/// returning the first candidate that is an existing file.
pub fn find_file_in(file_name: &str, path: &OsStr) -> Option<PathBuf> {
    std::env::split_paths(path)
        .filter(|dir| !dir.as_os_str().is_empty())
        .map(|dir| dir.join(file_name))
        .inspect(|candidate| debug!("looking for {}", candidate.display()))
        .find(|candidate| candidate.is_file())
}
