use crate::foundation::random::RandomSource;
use std::path::{Path, PathBuf};

const ID_ALPHABET: &[u8] = b"useandom-26T198340PX75pxJACKVERYMINDBUSHWOLF_GQZbfghjklqvwyzrict";
const ID_LEN: usize = 21;

/// Random URL-safe id of 21 characters.
pub fn random_id<R: RandomSource + ?Sized>(rng: &mut R) -> String {
    (0..ID_LEN)
        .map(|_| {
            let i = (rng.next_f64() * ID_ALPHABET.len() as f64) as usize;
            char::from(ID_ALPHABET[i.min(ID_ALPHABET.len() - 1)])
        })
        .collect()
}

/// `true` when sanitizing `name` leaves it unchanged and non-empty.
///
/// Windows rules apply on every platform: reserved device names (`CON`, `nul.webm`, ...),
/// trailing dots and spaces are rejected alongside separators, reserved and control characters
/// and names over 255 bytes.
pub fn is_valid_file_name(name: &str) -> bool {
    let options = sanitize_filename::Options {
        windows: true,
        truncate: true,
        replacement: "",
    };
    !name.is_empty() && sanitize_filename::sanitize_with_options(name, options) == name
}

/// Return `path` if nothing exists there; otherwise replace the last extension segment with a
/// random id and append `.webm` until the result is free.
pub fn unique_output_path<R: RandomSource + ?Sized>(path: &Path, rng: &mut R) -> PathBuf {
    unique_output_path_with(path, rng, |p| p.exists())
}

pub(crate) fn unique_output_path_with<R: RandomSource + ?Sized>(
    path: &Path,
    rng: &mut R,
    exists: impl Fn(&Path) -> bool,
) -> PathBuf {
    let mut candidate = path.to_path_buf();
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mut segments: Vec<String> = name.split('.').map(str::to_owned).collect();
    while exists(&candidate) {
        if let Some(last) = segments.last_mut() {
            *last = random_id(rng);
        }
        candidate = path.with_file_name(format!("{}.webm", segments.join(".")));
    }
    if candidate != path {
        tracing::info!(
            requested = %path.display(),
            chosen = %candidate.display(),
            "output exists; writing to a new name"
        );
    }
    candidate
}

#[cfg(test)]
#[path = "../../tests/unit/encode/output.rs"]
mod tests;
