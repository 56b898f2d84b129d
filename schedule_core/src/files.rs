//! Reading the learning objectives and writing the schedule page.

use crate::{Error, Result};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Read the whole learning objectives file
pub fn read_input(path: &Path) -> Result<String> {
    let contents = std::fs::read_to_string(path).map_err(|source| Error::MissingFile {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!("Read {} bytes from {:?}", contents.len(), path);
    Ok(contents)
}

/// Write the schedule page, replacing any existing file.
///
/// Atomically writes by:
/// 1. Writing to a temp file in the target directory
/// 2. Syncing to disk
/// 3. Renaming over the original
pub fn write_output(path: &Path, html: &str) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent)?;

    let mut temp = NamedTempFile::new_in(parent)?;
    temp.write_all(html.as_bytes())?;
    temp.as_file().sync_all()?;
    temp.persist(path).map_err(|e| Error::Io(e.error))?;

    tracing::info!("Wrote {} bytes to {:?}", html.len(), path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.md");

        match read_input(&path) {
            Err(Error::MissingFile { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected MissingFile, got {other:?}"),
        }
    }

    #[test]
    fn test_write_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site").join("index.html");

        write_output(&path, "<html>old</html>").unwrap();
        write_output(&path, "<html>new</html>").unwrap();

        assert_eq!(read_input(&path).unwrap(), "<html>new</html>");
    }
}
