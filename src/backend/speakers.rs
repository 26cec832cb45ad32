//! Speaker list extraction from engine output.

use std::sync::LazyLock;

use regex::Regex;

// `{'p225': 0, 'p226': 1}` as printed by `tts --list_speaker_idxs`.
static DICT_ENTRY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"'((?:[^'\\]|\\.)+)'\s*:\s*\d+").unwrap());

// `dict_keys(['p225', 'p226'])` as printed by some releases.
static DICT_KEYS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"dict_keys\(\[([^\]]*)\]\)").unwrap());

static QUOTED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"'([^']+)'").unwrap());

static SPEAKER_SELECT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)<select[^>]*id\s*=\s*"speaker_id"[^>]*>(.*?)</select>"#).unwrap()
});

static OPTION_VALUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<option[^>]*value\s*=\s*"([^"]*)""#).unwrap());

/// Parse the speaker listing printed by the Coqui CLI.
///
/// Returns an empty list when the output holds no listing, which is what a
/// single-speaker model prints.
pub fn parse_speaker_listing(output: &str) -> Vec<String> {
    let mut speakers: Vec<String> = DICT_ENTRY
        .captures_iter(output)
        .map(|caps| caps[1].trim().to_string())
        .collect();

    if speakers.is_empty()
        && let Some(keys) = DICT_KEYS.captures(output)
    {
        speakers = QUOTED
            .captures_iter(&keys[1])
            .map(|caps| caps[1].trim().to_string())
            .collect();
    }

    normalize(speakers)
}

/// Parse speaker ids from the `tts-server` index page.
///
/// The page renders a `speaker_id` select only for multi-speaker models.
pub fn parse_speaker_options(html: &str) -> Vec<String> {
    let Some(select) = SPEAKER_SELECT.captures(html) else {
        return Vec::new();
    };

    let speakers = OPTION_VALUE
        .captures_iter(&select[1])
        .map(|caps| caps[1].trim().to_string())
        .collect();

    normalize(speakers)
}

fn normalize(mut speakers: Vec<String>) -> Vec<String> {
    speakers.retain(|s| !s.is_empty());
    let mut seen = std::collections::HashSet::new();
    speakers.retain(|s| seen.insert(s.clone()));
    speakers
}
