//! Content matcher: decides whether a message satisfies a channel mode.
//!
//! Pure and total. Only the filename extensions and the text are inspected;
//! attachment bytes never are.

use crate::domain::classifier::{self, AUDIO_EXTENSIONS, PHOTO_EXTENSIONS, VIDEO_EXTENSIONS};
use crate::domain::{ChannelMode, IncomingMessage, MediaKind};
use regex::Regex;
use std::sync::LazyLock;

/// `http://` or `https://` followed by at least one non-whitespace character.
static URL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)https?://\S+").expect("URL pattern is valid"));

/// Returns true if `text` contains an http(s) link.
pub fn contains_url(text: &str) -> bool {
    URL_REGEX.is_match(text)
}

/// The parts of a message the matcher looks at.
#[derive(Debug, Clone)]
pub struct Content<'a> {
    pub text: &'a str,
    pub url_present: bool,
    pub filenames: Vec<&'a str>,
}

impl<'a> Content<'a> {
    pub fn new(text: &'a str, filenames: Vec<&'a str>) -> Self {
        Self {
            text,
            url_present: contains_url(text),
            filenames,
        }
    }

    pub fn of(message: &'a IncomingMessage) -> Self {
        Self::new(&message.text, message.filenames().collect())
    }

    fn any_with(&self, extensions: &[&str]) -> bool {
        self.filenames
            .iter()
            .any(|f| classifier::has_extension(f, extensions))
    }
}

/// Decide pass/fail of `content` against `mode`.
///
/// `None` passes unconditionally. The coordinator never calls this for an
/// unmoderated channel; the fallback keeps the function total.
pub fn matches(mode: Option<ChannelMode>, content: &Content<'_>) -> bool {
    match mode {
        Some(ChannelMode::Video) => matches_video(content),
        Some(ChannelMode::Photo) => content.any_with(PHOTO_EXTENSIONS),
        Some(ChannelMode::Feed) => matches_feed(content),
        None => true,
    }
}

fn matches_video(content: &Content<'_>) -> bool {
    let has_video = content
        .filenames
        .iter()
        .any(|f| classifier::classify(f) == MediaKind::Video);
    has_video || content.url_present
}

/// Whitespace plus the ASCII file/group/record/unit separators.
fn is_blank_char(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

fn matches_feed(content: &Content<'_>) -> bool {
    let has_text = !content.text.trim_matches(is_blank_char).is_empty();
    // Checked on the name directly: `.gif` is in the photo set too.
    let has_gif = content.any_with(&[".gif"]);
    let has_audio = content.any_with(AUDIO_EXTENSIONS);
    let has_only_video = !content.filenames.is_empty()
        && content
            .filenames
            .iter()
            .all(|f| classifier::has_extension(f, VIDEO_EXTENSIONS))
        && !has_text;

    (has_text || has_gif || has_audio) && !has_only_video
}
