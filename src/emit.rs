/* ---------------------------------------------------------------------------
** This software is in the public domain, furnished "as is", without technical
** support, and with no warranty, express or implied, as to its usefulness for
** any purpose.
**
** SPDX-License-Identifier: Unlicense
**
** -------------------------------------------------------------------------*/

//! Generated version stubs for the make, C#, VB.NET and C++ parts of the build.

use crate::error::{Result, StampError};
use log::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub const MAJOR_VERSION: u32 = 7;
pub const MINOR_VERSION: u32 = 5;

pub const MAKE_FILE: &str = "VersionInfo.make";
pub const CSHARP_FILE: &str = "VersionInfo.cs";
pub const VB_FILE: &str = "VersionInfo.vb";
pub const CPP_FILE: &str = "VersionInfo.cpp";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionInfo {
    pub major: u32,
    pub minor: u32,
    pub build: u32,
}

impl VersionInfo {
    pub fn new(build: u32) -> Self {
        Self {
            major: MAJOR_VERSION,
            minor: MINOR_VERSION,
            build,
        }
    }

    /// `major.minor.build.0`, as used by `AssemblyFileVersion`.
    pub fn file_version(&self) -> String {
        format!("{}.{}.{}.0", self.major, self.minor, self.build)
    }

    pub fn make_lines(&self) -> Vec<String> {
        vec![
            format!("MAJOR_VERSION={}", self.major),
            format!("MINOR_VERSION={}", self.minor),
            format!("BUILD_NUMBER={}", self.build),
        ]
    }

    pub fn csharp_lines(&self) -> Vec<String> {
        vec![
            "using System.Reflection;".to_string(),
            format!("[assembly: AssemblyFileVersion(\"{}\")]", self.file_version()),
        ]
    }

    pub fn vb_lines(&self) -> Vec<String> {
        vec![
            "Imports System.Reflection".to_string(),
            format!("<Assembly: AssemblyFileVersion(\"{}\")>", self.file_version()),
        ]
    }

    pub fn cpp_lines(&self) -> Vec<String> {
        vec![
            format!(
                "std::string EXPORT getApsimVersion(void) {{return \"{}.{}\";}}",
                self.major, self.minor
            ),
            format!(
                "std::string EXPORT getApsimBuildNumber(void) {{return \"{}\";}}",
                self.build
            ),
        ]
    }

    /// Write all four stubs into `dir`, replacing existing ones. Returns the
    /// paths written, in order.
    pub fn write_all(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let outputs = [
            (MAKE_FILE, self.make_lines()),
            (CSHARP_FILE, self.csharp_lines()),
            (VB_FILE, self.vb_lines()),
            (CPP_FILE, self.cpp_lines()),
        ];

        let mut written = Vec::with_capacity(outputs.len());
        for (name, lines) in outputs {
            let path = dir.join(name);
            write_lines(&path, &lines).map_err(|source| StampError::Write {
                path: path.clone(),
                source,
            })?;
            info!("wrote {}", path.display());
            written.push(path);
        }
        Ok(written)
    }
}

fn write_lines(path: &Path, lines: &[String]) -> std::io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use std::fs;
    use tempfile::tempdir;

    fn info() -> VersionInfo {
        VersionInfo {
            major: 7,
            minor: 5,
            build: 482,
        }
    }

    #[test]
    fn new_uses_compiled_in_version() {
        let v = VersionInfo::new(10);
        assert_eq!((v.major, v.minor, v.build), (MAJOR_VERSION, MINOR_VERSION, 10));
    }

    #[test]
    fn writes_all_four_files() {
        let dir = tempdir().unwrap();
        let written = info().write_all(dir.path()).unwrap();
        let names: Vec<_> = written
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, [MAKE_FILE, CSHARP_FILE, VB_FILE, CPP_FILE]);

        let read = |name| fs::read_to_string(dir.path().join(name)).unwrap();
        assert_eq!(
            read(MAKE_FILE),
            indoc! {"
                MAJOR_VERSION=7
                MINOR_VERSION=5
                BUILD_NUMBER=482
            "}
        );
        assert_eq!(
            read(CSHARP_FILE),
            indoc! {r#"
                using System.Reflection;
                [assembly: AssemblyFileVersion("7.5.482.0")]
            "#}
        );
        assert_eq!(
            read(VB_FILE),
            indoc! {r#"
                Imports System.Reflection
                <Assembly: AssemblyFileVersion("7.5.482.0")>
            "#}
        );
        assert_eq!(
            read(CPP_FILE),
            indoc! {r#"
                std::string EXPORT getApsimVersion(void) {return "7.5";}
                std::string EXPORT getApsimBuildNumber(void) {return "482";}
            "#}
        );
    }

    #[test]
    fn overwrites_existing_files() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(MAKE_FILE), "stale\n".repeat(10)).unwrap();
        info().write_all(dir.path()).unwrap();
        let make = fs::read_to_string(dir.path().join(MAKE_FILE)).unwrap();
        assert!(!make.contains("stale"));
        assert_eq!(make.lines().count(), 3);
    }

    #[test]
    fn write_failure_names_file() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing");
        let err = info().write_all(&missing).unwrap_err();
        match err {
            StampError::Write { path, .. } => assert_eq!(path, missing.join(MAKE_FILE)),
            other => panic!("unexpected error {other:?}"),
        }
    }
}
