//! Directory scan: convert every `*.gif` entry to PNG and drop the original

use std::ffi::{OsStr, OsString};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::config::ConvertConfig;
use crate::error::{Error, FileError, Result};
use crate::image::{convert_file, PngCompression};

const GIF_SUFFIX: &[u8] = b".gif";
const PNG_SUFFIX: &[u8] = b".png";

/// Counts for one run over a directory.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub candidates: usize,
    pub converted: usize,
    pub failed: usize,
}

/// Whether a directory entry name is picked up for conversion.
///
/// Matched on the raw name, so names that are not valid UTF-8 still count.
pub fn is_candidate(file_name: &OsStr) -> bool {
    file_name.as_encoded_bytes().ends_with(GIF_SUFFIX)
}

/// Output name for a candidate: every `.gif` in the name becomes `.png`.
///
/// This is a plain text substitution, not anchored to the suffix, so
/// `my.gif.backup.gif` maps to `my.png.backup.png`.
pub fn target_name(file_name: &OsStr) -> OsString {
    let replaced = replace_all(file_name.as_encoded_bytes(), GIF_SUFFIX, PNG_SUFFIX);
    // SAFETY: only whole ASCII substrings are swapped for other ASCII
    // substrings, which keeps the platform encoding valid.
    unsafe { OsString::from_encoded_bytes_unchecked(replaced) }
}

/// Left to right, non-overlapping, like `str::replace`.
fn replace_all(haystack: &[u8], from: &[u8], to: &[u8]) -> Vec<u8> {
    let mut replaced = Vec::with_capacity(haystack.len());
    let mut rest = haystack;
    while let Some((&first, tail)) = rest.split_first() {
        if rest.starts_with(from) {
            replaced.extend_from_slice(to);
            rest = &rest[from.len()..];
        } else {
            replaced.push(first);
            rest = tail;
        }
    }
    replaced
}

/// Convert every GIF directly inside `config.directory`, reporting one line
/// per milestone to `out`.
///
/// The listing is read in full before any file is touched. Per-file failures
/// are reported and skipped. Only a failure to list the directory or to
/// write to `out` ends the run early.
pub fn convert<W: Write>(config: &ConvertConfig, out: &mut W) -> Result<Summary> {
    let directory = config.directory.as_path();
    log::info!("Scanning `{}`", directory.display());

    let read_dir_err = |source| Error::ReadDir {
        path: directory.to_path_buf(),
        source,
    };

    let listing = fs::read_dir(directory)
        .map_err(read_dir_err)?
        .map(|entry| entry.map(|entry| entry.file_name()))
        .collect::<io::Result<Vec<OsString>>>()
        .map_err(read_dir_err)?;
    log::debug!("Listed {} entries", listing.len());

    let mut summary = Summary::default();
    for file_name in listing.iter().filter(|name| is_candidate(name)) {
        summary.candidates += 1;
        match convert_entry(directory, file_name, config.compression, out)? {
            Ok(()) => summary.converted += 1,
            Err(e) => {
                let name = file_name.to_string_lossy();
                log::warn!("Failed to {} {}: {}", e.stage(), name, e);
                writeln!(out, "Could not convert {name}: {e}").map_err(Error::Report)?;
                summary.failed += 1;
            }
        }
    }

    log::info!(
        "Converted {} of {} GIF files in `{}`",
        summary.converted,
        summary.candidates,
        directory.display()
    );

    Ok(summary)
}

/// Convert the GIF `file_name` and remove it. The outer error is fatal, the
/// inner one belongs to this file only.
fn convert_entry<W: Write>(
    directory: &Path,
    file_name: &OsStr,
    compression: PngCompression,
    out: &mut W,
) -> Result<std::result::Result<(), FileError>> {
    let src = directory.join(file_name);
    let dst = directory.join(target_name(file_name));
    let name = file_name.to_string_lossy();
    log::debug!("Converting {} -> {}", src.display(), dst.display());

    if let Err(e) = convert_file(&src, &dst, compression) {
        return Ok(Err(e));
    }
    writeln!(out, "Converted {name} to PNG.").map_err(Error::Report)?;

    if let Err(e) = fs::remove_file(&src) {
        return Ok(Err(FileError::Remove(e)));
    }
    writeln!(out, "Removed {name}.").map_err(Error::Report)?;

    Ok(Ok(()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(name: &str) -> bool {
        is_candidate(OsStr::new(name))
    }

    fn target(name: &str) -> OsString {
        target_name(OsStr::new(name))
    }

    #[test]
    fn only_lowercase_gif_suffix_matches() {
        assert!(candidate("a.gif"));
        assert!(candidate(".gif"));
        assert!(candidate("my.gif.backup.gif"));
        assert!(!candidate("a.GIF"));
        assert!(!candidate("a.gif.bak"));
        assert!(!candidate("gif"));
        assert!(!candidate("b.txt"));
    }

    #[test]
    fn target_name_replaces_literal_text() {
        assert_eq!(target("a.gif"), "a.png");
        assert_eq!(target("Dr. STONE v01.gif"), "Dr. STONE v01.png");
        assert_eq!(target("my.gif.backup.gif"), "my.png.backup.png");
        assert_eq!(target("café.gif"), "café.png");
        assert_eq!(target(".gif.gif"), ".png.png");
    }

    #[test]
    fn replace_all_matches_str_replace() {
        for name in ["", "x", ".gi", ".gif", "a..gif", "a.gif.gif", "..gifgif.gif"] {
            assert_eq!(
                replace_all(name.as_bytes(), b".gif", b".png"),
                name.replace(".gif", ".png").into_bytes(),
                "{name}"
            );
        }
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_names_are_candidates() {
        use std::os::unix::ffi::OsStrExt;

        let name = OsStr::from_bytes(b"caf\xe9.gif");
        assert!(is_candidate(name));
        assert_eq!(target_name(name).as_bytes(), b"caf\xe9.png");
    }
}
