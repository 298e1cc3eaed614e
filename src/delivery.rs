use anyhow::{anyhow, Result};
use std::{
    env, fs,
    path::{Path, PathBuf},
};
use url::Url;

pub const FALLBACK_IMAGE_NAME: &str = "reference-image.jpg";

/// One named way of getting a value delivered.
pub type Strategy<'a, T> = (&'static str, Box<dyn FnOnce() -> Result<T> + 'a>);

/// Runs strategies in order; the first success short-circuits. The error
/// names every attempt that failed.
pub fn try_in_order<'a, T>(what: &str, strategies: Vec<Strategy<'a, T>>) -> Result<T> {
    let mut failures: Vec<String> = Vec::new();
    for (label, attempt) in strategies {
        match attempt() {
            Ok(value) => return Ok(value),
            Err(e) => failures.push(format!("{label}: {e}")),
        }
    }
    Err(anyhow!(
        "every way of delivering {what} failed: {}",
        failures.join("; ")
    ))
}

/// Filename for a reference image URL: last path segment with any query
/// stripped. Unparsable or pathless URLs fall back to plain string splitting,
/// then to a fixed name.
pub fn reference_image_filename(image_url: &str) -> String {
    let from_url = Url::parse(image_url)
        .ok()
        .and_then(|url| {
            url.path_segments()
                .and_then(|segments| segments.last().map(|s| s.to_string()))
        })
        .filter(|name| !name.is_empty());
    if let Some(name) = from_url {
        return name;
    }
    let last = image_url.rsplit('/').next().unwrap_or("");
    let name = last.split('?').next().unwrap_or("");
    if name.is_empty() {
        FALLBACK_IMAGE_NAME.to_string()
    } else {
        name.to_string()
    }
}

/// Writes `contents` to the preferred path, falling back to the same file
/// name under the system temp directory. Returns the path written.
pub fn save_bytes(contents: &[u8], preferred: &Path) -> Result<PathBuf> {
    let file_name = preferred
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_else(|| "prompt.json".into());
    let temp_path = env::temp_dir().join(file_name);
    let strategies: Vec<Strategy<PathBuf>> = vec![
        (
            "requested path",
            Box::new(|| {
                fs::write(preferred, contents)?;
                Ok(preferred.to_path_buf())
            }),
        ),
        (
            "temp directory",
            Box::new(move || {
                fs::write(&temp_path, contents)?;
                Ok(temp_path)
            }),
        ),
    ];
    try_in_order("the output file", strategies)
}

pub fn save_text(contents: &str, preferred: &Path) -> Result<PathBuf> {
    save_bytes(contents.as_bytes(), preferred)
}
