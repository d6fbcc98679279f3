//! File and terminal I/O helpers shared by the commands.
//!
//! - Reading player commands line by line
//! - Reading record files with automatic `.zst` decompression
//! - Locating record files below a directory
//! - Ensuring parent directories exist before file writes

use std::io::BufRead;
use std::path::{Path, PathBuf};

/// Reads a line of input, trimmed. `None` on EOF or read error.
///
/// # Example
///
/// ```rust
/// use std::io::Cursor;
/// # use mindshift_cli::io_utils::read_stdin_line;
///
/// let mut input = Cursor::new("  2 \n");
/// assert_eq!(read_stdin_line(&mut input), Some("2".to_string()));
/// assert_eq!(read_stdin_line(&mut input), None);
/// ```
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> Option<String> {
    let mut line = String::new();
    match stdin.read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line.trim().to_string()),
        Err(_) => None,
    }
}

/// Read text file with automatic .zst decompression detection.
///
/// If the path ends with ".zst" the file is decompressed with Zstandard.
/// A leading UTF-8 BOM is stripped.
///
/// # Example
///
/// ```rust,no_run
/// # use mindshift_cli::io_utils::read_text_auto;
/// let plain = read_text_auto("data/games.jsonl").unwrap();
/// let packed = read_text_auto("data/games.jsonl.zst").unwrap();
/// ```
pub fn read_text_auto(path: &str) -> Result<String, String> {
    let mut content = if path.ends_with(".zst") {
        let comp = std::fs::read(path).map_err(|e| e.to_string())?;
        // Use a conservative initial capacity; zstd will grow as needed
        let dec = zstd::bulk::decompress(&comp, 8 * 1024 * 1024).map_err(|e| e.to_string())?;
        String::from_utf8(dec).map_err(|e| e.to_string())?
    } else {
        std::fs::read_to_string(path).map_err(|e| e.to_string())?
    };
    strip_utf8_bom(&mut content);
    Ok(content)
}

/// Whether `path` names a game record file (`.jsonl` or `.jsonl.zst`).
pub fn is_record_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|f| f.to_str())
        .is_some_and(|name| name.ends_with(".jsonl") || name.ends_with(".jsonl.zst"))
}

/// Every record file below `dir`, recursively, in sorted order.
pub fn collect_record_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    let mut stack = vec![dir.to_path_buf()];
    while let Some(d) = stack.pop() {
        let rd = match std::fs::read_dir(&d) {
            Ok(v) => v,
            Err(_) => continue,
        };
        for e in rd.filter_map(Result::ok) {
            let p = e.path();
            if p.is_dir() {
                stack.push(p);
            } else if is_record_file(&p) {
                files.push(p);
            }
        }
    }
    files.sort();
    files
}

/// Ensure parent directory exists for given path, creating if needed.
pub fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create directory {}: {}", parent.display(), e))?;
    }
    Ok(())
}

fn strip_utf8_bom(s: &mut String) {
    const UTF8_BOM: &str = "\u{feff}";
    if s.starts_with(UTF8_BOM) {
        s.drain(..UTF8_BOM.len());
    }
}
