//! Whole-file reads and writes over `std::fs`.
//!
//! Each call opens, works on and closes the file within its own scope.
//! Reads load the entire file into memory, so they are not meant for very
//! large files. Writes create missing parent directories first.
//!
//! Text functions default to UTF-8; the `_with` variants take any
//! [`Encoding`] from `encoding_rs`.
//!
//! ## Example
//!
//! ```rust
//! use nexuscorelib::files;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! let path = dir.path().join("nested/notes.txt");
//!
//! files::write_string(&path, "first\n").unwrap();
//! files::append_string(&path, "second\n").unwrap();
//! assert_eq!(files::read_lines(&path).unwrap(), vec!["first", "second"]);
//!
//! assert!(files::delete_if_exists(&path).unwrap());
//! assert!(!files::exists(&path));
//! ```

use encoding_rs::Encoding;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;

use crate::error::NexusError;
use crate::Result;

/// How a write treats existing file content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Replace existing content
    #[default]
    Truncate,
    /// Add to the end of existing content
    Append,
}

/// Read a whole file as UTF-8 text.
pub fn read_to_string(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let bytes = read_bytes(path)?;
    String::from_utf8(bytes).map_err(|source| NexusError::InvalidUtf8 {
        path: path.to_path_buf(),
        source,
    })
}

/// Read a whole file as text, replacing malformed UTF-8 with U+FFFD.
pub fn read_to_string_lossy(path: impl AsRef<Path>) -> Result<String> {
    let bytes = read_bytes(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Read a whole file as text in the given encoding.
///
/// Malformed input is replaced with U+FFFD rather than failing. A byte order
/// mark is kept as content, not used to switch encodings.
///
/// ```rust
/// use nexuscorelib::files;
/// use nexuscorelib::encoding_rs::WINDOWS_1252;
/// use tempfile::tempdir;
///
/// let dir = tempdir().unwrap();
/// let path = dir.path().join("latin1.txt");
/// files::write_bytes(&path, &[b'c', b'a', b'f', 0xE9]).unwrap();
/// assert_eq!(files::read_to_string_with(&path, WINDOWS_1252).unwrap(), "café");
/// ```
pub fn read_to_string_with(
    path: impl AsRef<Path>,
    encoding: &'static Encoding,
) -> Result<String> {
    let path = path.as_ref();
    let bytes = read_bytes(path)?;
    let (text, had_errors) = encoding.decode_without_bom_handling(&bytes);
    if had_errors {
        tracing::debug!(
            path = %path.display(),
            encoding = encoding.name(),
            "replaced malformed input"
        );
    }
    Ok(text.into_owned())
}

/// Read a whole file as bytes.
pub fn read_bytes(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| NexusError::read(path, e))?;
    tracing::trace!(path = %path.display(), bytes = bytes.len(), "read file");
    Ok(bytes)
}

/// Read a UTF-8 file as lines.
///
/// Lines end at `\n`, `\r\n` or `\r`; the terminators are not included and
/// a final terminator does not add an empty line.
pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let content = read_to_string(path)?;
    Ok(split_lines(&content))
}

/// Read a file in the given encoding as lines, split like [`read_lines`].
pub fn read_lines_with(
    path: impl AsRef<Path>,
    encoding: &'static Encoding,
) -> Result<Vec<String>> {
    let content = read_to_string_with(path, encoding)?;
    Ok(split_lines(&content))
}

fn split_lines(content: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut rest = content;

    while !rest.is_empty() {
        match rest.find(['\n', '\r']) {
            Some(pos) => {
                lines.push(rest[..pos].to_string());
                let skip = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[pos + skip..];
            }
            None => {
                lines.push(rest.to_string());
                break;
            }
        }
    }

    lines
}

/// Write text to a file, replacing any existing content.
pub fn write_string(path: impl AsRef<Path>, text: &str) -> Result<()> {
    write_bytes_with(path, text.as_bytes(), WriteMode::Truncate)
}

/// Append text to a file, creating it if needed.
pub fn append_string(path: impl AsRef<Path>, text: &str) -> Result<()> {
    write_bytes_with(path, text.as_bytes(), WriteMode::Append)
}

/// Write text in the given encoding using the given mode.
///
/// Encodings that `encoding_rs` cannot encode into (UTF-16LE/BE) write
/// UTF-8 instead. Characters the encoding cannot represent are written as
/// HTML numeric character references (`&#NNNN;`).
pub fn write_string_with(
    path: impl AsRef<Path>,
    text: &str,
    encoding: &'static Encoding,
    mode: WriteMode,
) -> Result<()> {
    let (bytes, used, had_unmappable) = encoding.encode(text);
    if had_unmappable || used != encoding {
        tracing::debug!(
            requested = encoding.name(),
            used = used.name(),
            had_unmappable,
            "text not fully representable in requested encoding"
        );
    }
    write_bytes_with(path, &bytes, mode)
}

/// Write bytes to a file, replacing any existing content.
pub fn write_bytes(path: impl AsRef<Path>, data: &[u8]) -> Result<()> {
    write_bytes_with(path, data, WriteMode::Truncate)
}

/// Append bytes to a file, creating it if needed.
pub fn append_bytes(path: impl AsRef<Path>, data: &[u8]) -> Result<()> {
    write_bytes_with(path, data, WriteMode::Append)
}

/// Write bytes to a file using the given mode.
///
/// Missing parent directories are created first, and the file is created
/// if it does not exist.
pub fn write_bytes_with(path: impl AsRef<Path>, data: &[u8], mode: WriteMode) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.exists() {
            create_dirs(parent)?;
        }
    }

    let mut options = OpenOptions::new();
    options.create(true);
    match mode {
        WriteMode::Truncate => options.write(true).truncate(true),
        WriteMode::Append => options.append(true),
    };

    let write_err = |source: std::io::Error| NexusError::FileWrite {
        path: path.to_path_buf(),
        source,
    };
    let mut file = options.open(path).map_err(write_err)?;
    file.write_all(data).map_err(write_err)?;
    file.flush().map_err(write_err)?;

    tracing::debug!(path = %path.display(), bytes = data.len(), ?mode, "wrote file");
    Ok(())
}

/// True if something exists at `path`.
///
/// Never fails: anything that cannot be confirmed to exist, including
/// paths behind permission errors, reports `false`.
pub fn exists(path: impl AsRef<Path>) -> bool {
    path.as_ref().try_exists().unwrap_or(false)
}

/// Create a directory and any missing parents. Existing directories are fine.
pub fn create_dirs(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    fs::create_dir_all(path).map_err(|source| NexusError::CreateDir {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "created directories");
    Ok(())
}

/// Delete a file or an empty directory if it exists.
///
/// Returns `true` if something was removed and `false` if nothing was
/// there. A non-empty directory or a permission problem is an error.
pub fn delete_if_exists(path: impl AsRef<Path>) -> Result<bool> {
    let path = path.as_ref();
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(false),
        Err(source) => {
            return Err(NexusError::Delete {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let removed = if metadata.is_dir() {
        fs::remove_dir(path)
    } else {
        fs::remove_file(path)
    };

    match removed {
        Ok(()) => {
            tracing::debug!(path = %path.display(), "deleted");
            Ok(true)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(source) => Err(NexusError::Delete {
            path: path.to_path_buf(),
            source,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use encoding_rs::{UTF_8, WINDOWS_1252};
    use tempfile::tempdir;

    #[test]
    fn test_text_roundtrip_utf8() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("hello.txt");

        write_string(&path, "héllo").unwrap();
        assert_eq!(read_to_string(&path).unwrap(), "héllo");
    }

    #[test]
    fn test_bytes_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.bin");
        let data: Vec<u8> = (0..=255).collect();

        write_bytes(&path, &data).unwrap();
        assert_eq!(read_bytes(&path).unwrap(), data);
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a/b/c/file.txt");

        write_string(&path, "deep").unwrap();
        assert!(dir.path().join("a/b/c").is_dir());
        assert_eq!(read_to_string(&path).unwrap(), "deep");
    }

    #[test]
    fn test_truncate_and_append() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("log.txt");

        write_string(&path, "one").unwrap();
        write_string(&path, "two").unwrap();
        assert_eq!(read_to_string(&path).unwrap(), "two");

        append_string(&path, "three").unwrap();
        append_bytes(&path, b"!").unwrap();
        assert_eq!(read_to_string(&path).unwrap(), "twothree!");
    }

    #[test]
    fn test_append_creates_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("new/append.txt");

        append_string(&path, "x").unwrap();
        assert_eq!(read_to_string(&path).unwrap(), "x");
    }

    #[test]
    fn test_read_missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.txt");

        assert!(read_to_string(&path).unwrap_err().is_not_found());
        assert!(read_bytes(&path).unwrap_err().is_not_found());
        assert!(read_lines(&path).unwrap_err().is_not_found());
    }

    #[test]
    fn test_read_invalid_utf8() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("latin1.txt");
        write_bytes(&path, &[b'c', b'a', b'f', 0xE9]).unwrap();

        let err = read_to_string(&path).unwrap_err();
        assert!(matches!(err, NexusError::InvalidUtf8 { .. }));
        assert_eq!(read_to_string_lossy(&path).unwrap(), "caf\u{FFFD}");
    }

    #[test]
    fn test_latin1_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("latin1.txt");

        write_string_with(&path, "café crème", WINDOWS_1252, WriteMode::Truncate).unwrap();
        let bytes = read_bytes(&path).unwrap();
        assert_eq!(bytes.len(), "café crème".chars().count());
        assert_eq!(bytes[3], 0xE9);
        assert_eq!(
            read_to_string_with(&path, WINDOWS_1252).unwrap(),
            "café crème"
        );

        write_string_with(&path, "!", WINDOWS_1252, WriteMode::Append).unwrap();
        assert_eq!(
            read_to_string_with(&path, WINDOWS_1252).unwrap(),
            "café crème!"
        );
    }

    #[test]
    fn test_read_latin1_bytes_with_encoding() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cafe.txt");
        write_bytes(&path, &[b'c', b'a', b'f', 0xE9]).unwrap();

        assert!(read_to_string(&path).is_err());
        let latin1 = Encoding::for_label(b"iso-8859-1").unwrap();
        assert_eq!(read_to_string_with(&path, latin1).unwrap(), "café");
    }

    #[test]
    fn test_decode_replaces_malformed_input() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.txt");
        write_bytes(&path, &[b'o', b'k', 0xFF]).unwrap();

        assert_eq!(read_to_string_with(&path, UTF_8).unwrap(), "ok\u{FFFD}");
    }

    #[test]
    fn test_read_lines_with_encoding() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("lines-latin1.txt");
        write_bytes(&path, &[0xE9, b'\r', b'\n', 0xE8, b'\n']).unwrap();

        assert_eq!(
            read_lines_with(&path, WINDOWS_1252).unwrap(),
            vec!["é", "è"]
        );
    }

    #[test]
    fn test_read_with_encoding_missing_file() {
        let dir = tempdir().unwrap();
        let err = read_to_string_with(dir.path().join("nope"), UTF_8).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_read_lines() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("lines.txt");

        write_string(&path, "a\r\nb\rc\n\nd\n").unwrap();
        assert_eq!(read_lines(&path).unwrap(), vec!["a", "b", "c", "", "d"]);

        write_string(&path, "").unwrap();
        assert!(read_lines(&path).unwrap().is_empty());
    }

    #[test]
    fn test_write_to_directory_fails() {
        let dir = tempdir().unwrap();
        let err = write_string(dir.path(), "nope").unwrap_err();
        assert!(matches!(err, NexusError::FileWrite { .. }));
    }

    #[test]
    fn test_exists() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("here.txt");

        assert!(exists(dir.path()));
        assert!(!exists(&path));
        write_string(&path, "").unwrap();
        assert!(exists(&path));
    }

    #[test]
    fn test_create_dirs_is_idempotent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("x/y/z");

        create_dirs(&path).unwrap();
        create_dirs(&path).unwrap();
        assert!(path.is_dir());
    }

    #[test]
    fn test_create_dirs_over_file_fails() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("file");
        write_string(&file, "").unwrap();

        let err = create_dirs(file.join("sub")).unwrap_err();
        assert!(matches!(err, NexusError::CreateDir { .. }));
    }

    #[test]
    fn test_delete_if_exists() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("gone.txt");
        let empty = dir.path().join("empty");

        assert!(!delete_if_exists(&file).unwrap());

        write_string(&file, "bye").unwrap();
        create_dirs(&empty).unwrap();
        assert!(delete_if_exists(&file).unwrap());
        assert!(delete_if_exists(&empty).unwrap());
        assert!(!exists(&file));
        assert!(!exists(&empty));
    }

    #[test]
    fn test_delete_non_empty_directory_fails() {
        let dir = tempdir().unwrap();
        let full = dir.path().join("full");
        write_string(full.join("inner.txt"), "keep").unwrap();

        let err = delete_if_exists(&full).unwrap_err();
        assert!(matches!(err, NexusError::Delete { .. }));
        assert!(exists(full.join("inner.txt")));
    }

    #[test]
    fn test_split_lines() {
        assert_eq!(split_lines("x"), vec!["x"]);
        assert_eq!(split_lines("x\n"), vec!["x"]);
        assert_eq!(split_lines("\n"), vec![""]);
        assert_eq!(split_lines("a\r\n\r\nb"), vec!["a", "", "b"]);
    }
}
