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
use std::path::Path;
use std::process::{Child, Command, Stdio};

#[cfg(windows)]
const CREATE_NO_WINDOW: u32 = 0x0800_0000;

/// What a finished process left behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutput {
    pub output: String,
    pub exit_code: Option<i32>,
}

/// Start `executable` in `working_dir` with its output captured.
pub fn run_process<I, S>(executable: &Path, args: I, working_dir: &Path) -> Result<Child>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    if !executable.is_file() {
        return Err(StampError::FileNotFound(executable.to_path_buf()));
    }

    let mut command = Command::new(executable);
    command
        .args(args)
        .current_dir(working_dir)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    #[cfg(windows)]
    {
        use std::os::windows::process::CommandExt;
        command.creation_flags(CREATE_NO_WINDOW);
    }

    debug!("running {:?} in {}", command, working_dir.display());
    command.spawn().map_err(|source| StampError::Spawn {
        executable: executable.to_path_buf(),
        source,
    })
}

/// Drain `child` and wait for it.
///
/// A failed exit is an error carrying stdout followed by stderr, unless both
/// were empty, in which case the (empty) output is returned as is.
pub fn check_process_exited_properly(executable: &Path, child: Child) -> Result<ProcessOutput> {
    let finished = child.wait_with_output().map_err(|source| StampError::Wait {
        executable: executable.to_path_buf(),
        source,
    })?;

    let mut output = String::from_utf8_lossy(&finished.stdout).into_owned();
    let exit_code = finished.status.code();
    if !finished.status.success() {
        debug!("{} exited with {}", executable.display(), finished.status);
        output.push_str(&String::from_utf8_lossy(&finished.stderr));
        if !output.is_empty() {
            let name = executable
                .file_name()
                .unwrap_or(executable.as_os_str())
                .to_string_lossy()
                .into_owned();
            return Err(StampError::Process { name, output });
        }
    }

    Ok(ProcessOutput { output, exit_code })
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::tempdir;

    const SH: &str = "/bin/sh";

    fn sh(script: &str, dir: &Path) -> Result<ProcessOutput> {
        let child = run_process(Path::new(SH), ["-c", script], dir)?;
        check_process_exited_properly(Path::new(SH), child)
    }

    #[test]
    fn captures_stdout() {
        let dir = tempdir().unwrap();
        let result = sh("echo hello", dir.path()).unwrap();
        assert_eq!(result.output, "hello\n");
        assert_eq!(result.exit_code, Some(0));
    }

    #[test]
    fn runs_in_working_dir() {
        let dir = tempdir().unwrap();
        let result = sh("pwd", dir.path()).unwrap();
        let reported = Path::new(result.output.trim()).canonicalize().unwrap();
        assert_eq!(reported, dir.path().canonicalize().unwrap());
    }

    #[test]
    fn failure_names_executable_and_includes_stderr() {
        let dir = tempdir().unwrap();
        let err = sh("echo partial; echo 'no such path' >&2; exit 1", dir.path()).unwrap_err();
        match err {
            StampError::Process { name, output } => {
                assert_eq!(name, "sh");
                assert_eq!(output, "partial\nno such path\n");
            }
            other => panic!("unexpected error {other:?}"),
        }
        let dir = tempdir().unwrap();
        let message = sh("echo boom >&2; exit 2", dir.path()).unwrap_err().to_string();
        assert_eq!(message, "Error from sh: boom\n");
    }

    #[test]
    fn silent_failure_is_not_an_error() {
        let dir = tempdir().unwrap();
        let result = sh("exit 4", dir.path()).unwrap();
        assert_eq!(result.output, "");
        assert_eq!(result.exit_code, Some(4));
    }

    #[test]
    fn wait_failure_is_not_a_launch_failure() {
        let err = StampError::Wait {
            executable: PathBuf::from("/usr/bin/svn"),
            source: std::io::Error::from(std::io::ErrorKind::BrokenPipe),
        };
        assert!(err.to_string().starts_with("Cannot read output of /usr/bin/svn: "));
    }

    #[test]
    fn missing_executable_fails_before_launch() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("svn");
        let err = run_process(&missing, ["log"], dir.path()).unwrap_err();
        assert!(matches!(err, StampError::FileNotFound(ref p) if *p == missing));
        assert!(err.to_string().starts_with("Cannot execute file: "));
    }
}
