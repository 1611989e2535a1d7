use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::shared::constants::{CASCADE_BASE_URL, SYSTEM_CASCADE_DIRS};

#[derive(Error, Debug)]
pub enum CascadeResolveError {
    #[error("failed to create cache directory: {0}")]
    CacheDir(#[source] std::io::Error),
    #[error("download failed for {url}: {source}")]
    Download {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("failed to write cascade to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not determine cache directory")]
    NoCacheDir,
}

/// Progress callback: `(bytes_downloaded, total_bytes)`.
/// `total_bytes` is 0 if the server didn't provide Content-Length.
pub type ProgressFn = Box<dyn Fn(u64, u64) + Send>;

/// Locate a Haar cascade XML file by name, downloading it as a last resort.
///
/// Resolution order:
/// 1. `bundled_dir`, when given
/// 2. User cache directory
/// 3. System OpenCV data directories
/// 4. Download from the OpenCV repository into the cache
pub fn resolve(
    name: &str,
    bundled_dir: Option<&Path>,
    progress: Option<ProgressFn>,
) -> Result<PathBuf, CascadeResolveError> {
    let cache_dir = cascade_cache_dir()?;

    let mut search_dirs: Vec<PathBuf> = bundled_dir.map(Path::to_path_buf).into_iter().collect();
    search_dirs.push(cache_dir.clone());
    search_dirs.extend(SYSTEM_CASCADE_DIRS.iter().map(PathBuf::from));

    let url = format!("{CASCADE_BASE_URL}/{name}");
    resolve_in(name, &search_dirs, &cache_dir, &url, progress)
}

fn resolve_in(
    name: &str,
    search_dirs: &[PathBuf],
    cache_dir: &Path,
    url: &str,
    progress: Option<ProgressFn>,
) -> Result<PathBuf, CascadeResolveError> {
    if let Some(found) = find_existing(name, search_dirs) {
        log::debug!("Using cascade {}", found.display());
        return Ok(found);
    }

    log::info!("Cascade {name} not found locally, downloading from {url}");
    fs::create_dir_all(cache_dir).map_err(CascadeResolveError::CacheDir)?;
    let dest = cache_dir.join(name);
    download(url, &dest, progress)?;
    Ok(dest)
}

fn find_existing(name: &str, search_dirs: &[PathBuf]) -> Option<PathBuf> {
    search_dirs
        .iter()
        .map(|dir| dir.join(name))
        .find(|path| path.is_file())
}

/// Platform-specific cascade cache directory.
///
/// - macOS: `~/Library/Application Support/CoverPreview/cascades/`
/// - Linux: `$XDG_CACHE_HOME/CoverPreview/cascades/` or `~/.cache/CoverPreview/cascades/`
/// - Windows: `%LOCALAPPDATA%/CoverPreview/cascades/`
pub fn cascade_cache_dir() -> Result<PathBuf, CascadeResolveError> {
    #[cfg(target_os = "macos")]
    {
        dirs::data_dir()
            .map(|d| d.join("CoverPreview").join("cascades"))
            .ok_or(CascadeResolveError::NoCacheDir)
    }
    #[cfg(not(target_os = "macos"))]
    {
        dirs::cache_dir()
            .map(|d| d.join("CoverPreview").join("cascades"))
            .ok_or(CascadeResolveError::NoCacheDir)
    }
}

fn download(url: &str, dest: &Path, progress: Option<ProgressFn>) -> Result<(), CascadeResolveError> {
    let temp_path = dest.with_extension("part");

    let result = download_inner(url, dest, &temp_path, progress);

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }

    result
}

fn download_inner(
    url: &str,
    dest: &Path,
    temp_path: &Path,
    progress: Option<ProgressFn>,
) -> Result<(), CascadeResolveError> {
    let write_err = |path: &Path, source: std::io::Error| CascadeResolveError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut response = reqwest::blocking::get(url)
        .and_then(|r| r.error_for_status())
        .map_err(|e| CascadeResolveError::Download {
            url: url.to_string(),
            source: e,
        })?;

    let total = response.content_length().unwrap_or(0);
    let mut downloaded: u64 = 0;

    let mut file = fs::File::create(temp_path).map_err(|e| write_err(temp_path, e))?;

    let mut buf = vec![0u8; 64 * 1024];
    loop {
        let n = response
            .read(&mut buf)
            .map_err(|e| write_err(temp_path, e))?;
        if n == 0 {
            break;
        }
        file.write_all(&buf[..n])
            .map_err(|e| write_err(temp_path, e))?;
        downloaded += n as u64;
        if let Some(ref cb) = progress {
            cb(downloaded, total);
        }
    }

    file.flush().map_err(|e| write_err(temp_path, e))?;
    drop(file);

    fs::rename(temp_path, dest).map_err(|e| write_err(dest, e))?;

    Ok(())
}
