/*!
 * Random selection of demo assets from a pool directory
 */

use std::path::{Path, PathBuf};

use rand::seq::SliceRandom;
use rand::Rng;
use walkdir::WalkDir;

use crate::category::extension_of;

/// Pick one file from `dir` whose extension matches the allowed set,
/// uniformly at random over the candidates in enumeration order.
///
/// Extension matching is case-insensitive; `allowed` holds lowercase
/// extensions with their leading dot. Dot-files are skipped. Returns `None`
/// when the directory cannot be read or no candidate matches.
pub fn pick<R: Rng>(dir: &Path, allowed: &[&str], rng: &mut R) -> Option<PathBuf> {
    let candidates: Vec<PathBuf> = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            let name = entry.file_name().to_string_lossy();
            if name.starts_with('.') {
                return false;
            }
            match extension_of(&name) {
                Some(ext) => allowed.contains(&ext.to_ascii_lowercase().as_str()),
                None => false,
            }
        })
        .map(|entry| entry.into_path())
        .collect();

    candidates.choose(rng).cloned()
}
