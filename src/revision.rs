/* ---------------------------------------------------------------------------
** This software is in the public domain, furnished "as is", without technical
** support, and with no warranty, express or implied, as to its usefulness for
** any purpose.
**
** SPDX-License-Identifier: Unlicense
**
** -------------------------------------------------------------------------*/

use crate::error::{Result, StampError};
use crate::macros::Macros;

/// Pull the revision number out of `svn log -q -r HEAD` output.
///
/// The quiet log of a single revision is a separator line, a
/// `r<rev> | <author> | <date>` line and a closing separator.
pub fn extract_revision(stdout: &str) -> Result<u32> {
    let lines: Vec<&str> = stdout
        .split(['\r', '\n'])
        .filter(|line| !line.is_empty())
        .collect();
    let [_, revision_line, _] = lines.as_slice() else {
        return Err(StampError::InvalidOutput(stdout.to_string()));
    };

    let invalid = || StampError::InvalidRevisionLine(revision_line.to_string());
    let token = revision_line.split(' ').next().ok_or_else(invalid)?;
    let digits = token.strip_prefix('r').ok_or_else(invalid)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    digits.parse().map_err(|_| invalid())
}

/// True when `Increment=Yes` was given. The value is case sensitive.
pub fn increment_requested(macros: &Macros) -> bool {
    macros.get("Increment") == Some("Yes")
}

/// The build number to stamp. An incremented revision anticipates the commit
/// the build makes once it finishes.
pub fn apply_increment(revision: u32, increment: bool) -> Result<u32> {
    if increment {
        revision
            .checked_add(1)
            .ok_or(StampError::RevisionOverflow(revision))
    } else {
        Ok(revision)
    }
}
