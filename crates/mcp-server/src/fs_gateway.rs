//! Filesystem primitives used by the generators.
//!
//! Every failure is reported as one [`GatewayError`] carrying the operation and the path; no
//! call is retried.

use devhelper_protocol::{EntryKind, ProjectEntry};
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayOp {
    CreateDir,
    Write,
    Read,
    List,
    Stat,
}

impl fmt::Display for GatewayOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::CreateDir => "create directory",
            Self::Write => "write",
            Self::Read => "read",
            Self::List => "list",
            Self::Stat => "stat",
        })
    }
}

#[derive(Debug, Error)]
#[error("Failed to {op} {}: {source}", path.display())]
pub struct GatewayError {
    pub op: GatewayOp,
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

impl GatewayError {
    fn new(op: GatewayOp, path: &Path, source: io::Error) -> Self {
        Self {
            op,
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn kind(&self) -> io::ErrorKind {
        self.source.kind()
    }
}

pub type Result<T> = std::result::Result<T, GatewayError>;

/// Create `path`. With `recursive`, missing parents are created and an existing directory is
/// not an error.
pub fn make_directories(path: &Path, recursive: bool) -> Result<()> {
    let created = if recursive {
        std::fs::create_dir_all(path)
    } else {
        std::fs::create_dir(path)
    };
    created.map_err(|err| GatewayError::new(GatewayOp::CreateDir, path, err))?;
    log::debug!("mkdir {}", path.display());
    Ok(())
}

pub fn write_text(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content).map_err(|err| GatewayError::new(GatewayOp::Write, path, err))?;
    log::debug!("wrote {} ({} bytes)", path.display(), content.len());
    Ok(())
}

pub fn read_text(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|err| GatewayError::new(GatewayOp::Read, path, err))
}

/// Entry names of a directory, sorted bytewise so listings are stable across filesystems.
pub fn list_entries(path: &Path) -> Result<Vec<String>> {
    let reader =
        std::fs::read_dir(path).map_err(|err| GatewayError::new(GatewayOp::List, path, err))?;
    let mut names = Vec::new();
    for entry in reader {
        let entry = entry.map_err(|err| GatewayError::new(GatewayOp::List, path, err))?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    names.sort();
    Ok(names)
}

/// Kind of the entry at `path`, following symlinks.
pub fn stat_entry(path: &Path) -> Result<EntryKind> {
    let meta =
        std::fs::metadata(path).map_err(|err| GatewayError::new(GatewayOp::Stat, path, err))?;
    Ok(if meta.is_dir() {
        EntryKind::Directory
    } else {
        EntryKind::File
    })
}

/// Recursive tree below `root`, hidden entries skipped.
///
/// Symlinks inside the tree are reported as files and never descended into, so the walk is
/// bounded by the real directory structure.
pub fn walk(root: &Path) -> Result<Vec<ProjectEntry>> {
    if stat_entry(root)? != EntryKind::Directory {
        return Err(GatewayError::new(
            GatewayOp::List,
            root,
            io::Error::new(io::ErrorKind::InvalidInput, "not a directory"),
        ));
    }
    walk_dir(root)
}

fn walk_dir(dir: &Path) -> Result<Vec<ProjectEntry>> {
    let mut entries = Vec::new();
    for name in list_entries(dir)? {
        if name.starts_with('.') {
            continue;
        }
        let path = dir.join(&name);
        let meta = std::fs::symlink_metadata(&path)
            .map_err(|err| GatewayError::new(GatewayOp::Stat, &path, err))?;
        if meta.is_dir() {
            entries.push(ProjectEntry::directory(name, walk_dir(&path)?));
        } else {
            entries.push(ProjectEntry::file(name));
        }
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn walk_skips_hidden_and_nests_children() {
        let tmp = tempdir().expect("tempdir");
        let root = tmp.path();
        std::fs::write(root.join("a.txt"), "a").unwrap();
        std::fs::create_dir(root.join("b")).unwrap();
        std::fs::write(root.join("b").join("c.txt"), "c").unwrap();
        std::fs::create_dir(root.join(".git")).unwrap();
        std::fs::write(root.join(".env"), "X=1").unwrap();

        let tree = walk(root).unwrap();
        assert_eq!(
            tree,
            vec![
                ProjectEntry::file("a.txt"),
                ProjectEntry::directory("b", vec![ProjectEntry::file("c.txt")]),
            ]
        );
    }

    #[test]
    fn walk_on_missing_path_reports_stat_error() {
        let tmp = tempdir().expect("tempdir");
        let err = walk(&tmp.path().join("nope")).unwrap_err();
        assert_eq!(err.op, GatewayOp::Stat);
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn walk_on_file_is_rejected() {
        let tmp = tempdir().expect("tempdir");
        let file = tmp.path().join("plain.txt");
        std::fs::write(&file, "x").unwrap();
        let err = walk(&file).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn recursive_mkdir_is_idempotent_and_plain_mkdir_is_not() {
        let tmp = tempdir().expect("tempdir");
        let nested = tmp.path().join("x").join("y");
        make_directories(&nested, true).unwrap();
        make_directories(&nested, true).unwrap();

        let err = make_directories(&nested, false).unwrap_err();
        assert_eq!(err.op, GatewayOp::CreateDir);
        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
    }

    #[test]
    fn write_then_read_and_list_sorted() {
        let tmp = tempdir().expect("tempdir");
        write_text(&tmp.path().join("b.txt"), "bee").unwrap();
        write_text(&tmp.path().join("a.txt"), "ay").unwrap();
        assert_eq!(read_text(&tmp.path().join("b.txt")).unwrap(), "bee");
        assert_eq!(list_entries(tmp.path()).unwrap(), vec!["a.txt", "b.txt"]);
        assert_eq!(stat_entry(tmp.path()).unwrap(), EntryKind::Directory);
        assert_eq!(stat_entry(&tmp.path().join("a.txt")).unwrap(), EntryKind::File);
    }

    #[test]
    fn error_message_names_operation_and_path() {
        let tmp = tempdir().expect("tempdir");
        let missing = tmp.path().join("missing").join("file.txt");
        let err = write_text(&missing, "x").unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("Failed to write "), "{message}");
        assert!(message.contains("file.txt"), "{message}");
    }
}
