//! File I/O helpers shared by the commands.
//!
//! - Reading text files with automatic .zst decompression
//! - Ensuring parent directories exist before file writes
//!
//! Functions return `Result<_, String>`; commands wrap the message in
//! [`crate::CliError::InvalidInput`] together with the offending path.

use std::path::Path;

/// Largest decompressed input accepted from a `.zst` file.
const MAX_DECOMPRESSED: usize = 8 * 1024 * 1024;

/// Read text file with automatic .zst decompression detection.
///
/// If the path ends with ".zst", the file is decompressed with Zstandard.
/// A UTF-8 BOM is stripped if present.
///
/// # Example
///
/// ```rust,no_run
/// # use railbuild_cli::io_utils::read_text_auto;
/// let snapshot = read_text_auto("games/g-1.json.zst").unwrap();
/// ```
pub fn read_text_auto(path: &str) -> Result<String, String> {
    let mut content = if path.ends_with(".zst") {
        let comp = std::fs::read(path).map_err(|e| e.to_string())?;
        let dec = zstd::bulk::decompress(&comp, MAX_DECOMPRESSED).map_err(|e| e.to_string())?;
        String::from_utf8(dec).map_err(|e| e.to_string())?
    } else {
        std::fs::read_to_string(path).map_err(|e| e.to_string())?
    };
    strip_utf8_bom(&mut content);
    Ok(content)
}

/// True when the file (ignoring a trailing `.zst`) is TOML rather than JSON.
pub fn is_toml(path: &str) -> bool {
    path.trim_end_matches(".zst").ends_with(".toml")
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

/// Writes `content` to `path`, creating missing directories first.
pub fn write_text(path: &str, content: &str) -> Result<(), String> {
    let path = Path::new(path);
    ensure_parent_dir(path)?;
    std::fs::write(path, content).map_err(|e| format!("{}: {}", path.display(), e))
}

fn strip_utf8_bom(s: &mut String) {
    const UTF8_BOM: &str = "\u{feff}";
    if s.starts_with(UTF8_BOM) {
        s.drain(..UTF8_BOM.len());
    }
}
