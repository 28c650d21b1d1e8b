//! Extension to MIME type lookup for media sources.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::util::extension_of;

/// MIME type used for video sources with an unrecognized extension.
pub const DEFAULT_VIDEO_MIME: &str = "video/mp4";

static VIDEO_MIME_TYPES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("mp4", "video/mp4"),
        ("webm", "video/webm"),
        ("ogg", "video/ogg"),
        ("mov", "video/quicktime"),
        ("avi", "video/x-msvideo"),
        ("mkv", "video/x-matroska"),
        ("m4v", "video/x-m4v"),
    ])
});

static IMAGE_MIME_TYPES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("avif", "image/avif"),
        ("webp", "image/webp"),
        ("png", "image/png"),
        ("jpg", "image/jpeg"),
        ("jpeg", "image/jpeg"),
        ("gif", "image/gif"),
        ("svg", "image/svg+xml"),
    ])
});

/// Returns true if the URL points at a video file.
pub fn is_video(url: &str) -> bool {
    extension_of(url).is_some_and(|ext| VIDEO_MIME_TYPES.contains_key(ext.as_str()))
}

/// MIME type for a video source, defaulting to [`DEFAULT_VIDEO_MIME`].
pub fn video_mime_type(url: &str) -> &'static str {
    extension_of(url)
        .and_then(|ext| VIDEO_MIME_TYPES.get(ext.as_str()).copied())
        .unwrap_or(DEFAULT_VIDEO_MIME)
}

/// MIME type for an image source, or `None` for unknown formats.
pub fn image_mime_type(url: &str) -> Option<&'static str> {
    extension_of(url).and_then(|ext| IMAGE_MIME_TYPES.get(ext.as_str()).copied())
}
