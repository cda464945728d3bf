/*!
 * File categories and extension-based classification
 */

use std::collections::HashMap;

use once_cell::sync::Lazy;
use strum::{Display, EnumIter};

/// Classification buckets for files. Fixed, closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum Category {
    Documents,
    Images,
    Audio,
    Videos,
    Others,
}

impl Category {
    /// Name of the folder files of this category are moved into
    pub fn folder_name(self) -> &'static str {
        match self {
            Category::Documents => "Documents",
            Category::Images => "Images",
            Category::Audio => "Audio",
            Category::Videos => "Videos",
            Category::Others => "Others",
        }
    }
}

/// Classification table. Matching is exact-string and case-sensitive:
/// `.JPG` is not a recognized image extension and classifies as Others.
static EXTENSION_CATEGORIES: Lazy<HashMap<&'static str, Category>> = Lazy::new(|| {
    let mut map = HashMap::new();
    for ext in [".txt", ".pdf", ".docx", ".doc", ".xlsx", ".pptx"] {
        map.insert(ext, Category::Documents);
    }
    for ext in [".jpg", ".jpeg", ".png", ".gif", ".bmp", ".svg"] {
        map.insert(ext, Category::Images);
    }
    for ext in [".mp3", ".wav", ".aac", ".flac", ".ogg"] {
        map.insert(ext, Category::Audio);
    }
    for ext in [".mp4", ".mkv", ".avi", ".mov", ".wmv"] {
        map.insert(ext, Category::Videos);
    }
    map
});

/// Extension of a file name, from the last `.` to the end, dot included.
/// `None` when the name has no dot at all.
pub fn extension_of(file_name: &str) -> Option<&str> {
    file_name.rfind('.').map(|idx| &file_name[idx..])
}

/// Classify a file name by its extension.
///
/// Names without an extension and unrecognized extensions fall to Others.
pub fn classify(file_name: &str) -> Category {
    match extension_of(file_name) {
        Some(ext) => EXTENSION_CATEGORIES
            .get(ext)
            .copied()
            .unwrap_or(Category::Others),
        None => Category::Others,
    }
}
