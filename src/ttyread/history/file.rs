use super::HistoryStore;
use crate::error::{Result, TtyReadError};
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// History kept in a newline-delimited text file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHistory {
    path: PathBuf,
}

impl FileHistory {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    fn error(&self, source: io::Error) -> TtyReadError {
        TtyReadError::History {
            path: self.path.clone(),
            source,
        }
    }

    /// The file a save replaces: the link target when the path is a symlink.
    fn write_target(&self) -> PathBuf {
        match fs::symlink_metadata(&self.path) {
            Ok(meta) if meta.file_type().is_symlink() => {
                fs::canonicalize(&self.path).unwrap_or_else(|_| self.path.clone())
            }
            _ => self.path.clone(),
        }
    }
}

/// Splits file content into lines, keeping blank lines and raw bytes.
fn parse_lines(content: &[u8]) -> Vec<Vec<u8>> {
    if content.is_empty() {
        return Vec::new();
    }
    content
        .strip_suffix(b"\n")
        .unwrap_or(content)
        .split(|&b| b == b'\n')
        .map(<[u8]>::to_vec)
        .collect()
}

/// Renders lines as file content, each followed by `\n`.
fn format_lines(lines: &[Vec<u8>]) -> Vec<u8> {
    let mut content = Vec::with_capacity(lines.iter().map(|l| l.len() + 1).sum());
    for line in lines {
        content.extend_from_slice(line);
        content.push(b'\n');
    }
    content
}

fn write_temp(tmp: &Path, content: &[u8], target: &Path) -> io::Result<()> {
    let mut file = File::create(tmp)?;
    file.write_all(content)?;
    file.sync_all()?;
    if let Ok(meta) = fs::metadata(target) {
        fs::set_permissions(tmp, meta.permissions())?;
    }
    Ok(())
}

impl HistoryStore for FileHistory {
    fn load(&self) -> Result<Vec<Vec<u8>>> {
        match fs::read(&self.path) {
            Ok(content) => Ok(parse_lines(&content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(self.error(e)),
        }
    }

    fn save(&self, lines: &[Vec<u8>]) -> Result<()> {
        let target = self.write_target();
        let dir = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        if !dir.exists() {
            fs::create_dir_all(&dir).map_err(|e| self.error(e))?;
        }

        let name = target
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "history".to_string());
        let tmp = dir.join(format!(".{}-{}.tmp", name, Uuid::new_v4()));

        // Atomic replace: readers see either the old file or the new one.
        let content = format_lines(lines);
        let written = write_temp(&tmp, &content, &target).and_then(|_| fs::rename(&tmp, &target));
        if let Err(e) = written {
            let _ = fs::remove_file(&tmp);
            return Err(self.error(e));
        }
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
