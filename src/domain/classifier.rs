//! Extension classifier: filename -> MediaKind by suffix lookup.

use crate::domain::MediaKind;

pub const VIDEO_EXTENSIONS: &[&str] = &[
    ".mp4", ".mov", ".avi", ".mkv", ".webm", ".m4v", ".wmv", ".flv", ".3gp", ".ogv",
];
pub const PHOTO_EXTENSIONS: &[&str] = &[
    ".jpg", ".jpeg", ".png", ".gif", ".bmp", ".webp", ".svg", ".tiff",
];
pub const AUDIO_EXTENSIONS: &[&str] = &[".mp3", ".wav", ".ogg", ".m4a", ".flac", ".aac", ".wma"];

/// Case-insensitive check that `filename` ends with one of `extensions`.
pub fn has_extension(filename: &str, extensions: &[&str]) -> bool {
    let lower = filename.to_lowercase();
    extensions.iter().any(|ext| lower.ends_with(ext))
}

/// Classify a filename. Total: anything unmatched is `Other`.
pub fn classify(filename: &str) -> MediaKind {
    if has_extension(filename, VIDEO_EXTENSIONS) {
        MediaKind::Video
    } else if has_extension(filename, PHOTO_EXTENSIONS) {
        MediaKind::Photo
    } else if has_extension(filename, AUDIO_EXTENSIONS) {
        MediaKind::Audio
    } else {
        MediaKind::Other
    }
}
