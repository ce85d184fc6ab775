use std::borrow::Cow;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result, bail};

/// Largest transcript or state file accepted: 10MB
pub const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Path argument meaning "read standard input"
pub const STDIN_PATH: &str = "-";

/// Reject files over [`MAX_FILE_SIZE_BYTES`]
///
/// Takes the already-open handle so the size checked is the size read.
pub fn validate_file_size(file: &File, path: &Path) -> Result<()> {
    let metadata = file
        .metadata()
        .with_context(|| format!("Failed to read file metadata: {}", path.display()))?;

    let file_size = metadata.len();
    if file_size > MAX_FILE_SIZE_BYTES {
        bail!(
            "File too large: {} ({} bytes, max {} bytes)",
            path.display(),
            file_size,
            MAX_FILE_SIZE_BYTES
        );
    }

    Ok(())
}

fn read_limited(reader: impl Read, source: &str) -> Result<String> {
    let mut buffer = Vec::new();
    reader
        .take(MAX_FILE_SIZE_BYTES + 1)
        .read_to_end(&mut buffer)
        .with_context(|| format!("Failed to read transcript from {}", source))?;

    if buffer.len() as u64 > MAX_FILE_SIZE_BYTES {
        bail!("Transcript from {} is larger than {} bytes", source, MAX_FILE_SIZE_BYTES);
    }

    String::from_utf8(buffer).with_context(|| format!("Transcript from {} is not valid UTF-8", source))
}

/// Read a pasted transcript from a file, or from stdin when `path` is `-`
pub fn read_transcript(path: &Path) -> Result<String> {
    if path.as_os_str() == STDIN_PATH {
        return read_limited(io::stdin().lock(), "standard input");
    }

    let file = File::open(path)
        .with_context(|| format!("Failed to open transcript file: {}", path.display()))?;
    validate_file_size(&file, path)?;
    read_limited(file, &path.display().to_string())
}

/// Display a path with the home directory shown as `~`
pub fn format_path_with_tilde(path: &Path) -> String {
    format_path_with_home(path, dirs::home_dir().as_deref())
}

pub(crate) fn format_path_with_home(path: &Path, home: Option<&Path>) -> String {
    if let Some(relative) = home.and_then(|h| path.strip_prefix(h).ok()) {
        return Path::new("~").join(relative).display().to_string();
    }

    match path.to_string_lossy() {
        Cow::Borrowed(s) => s.to_string(),
        Cow::Owned(s) => s,
    }
}
