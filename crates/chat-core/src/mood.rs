//! Coarse sentiment tagging for chat replies.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Display mood attached to a chat reply.
///
/// The set is closed; the presentation layer maps each variant to an
/// animation or icon and must handle every one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Celebrating,
    Thinking,
    Excited,
    Happy,
    Curious,
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Celebrating => "celebrating",
            Self::Thinking => "thinking",
            Self::Excited => "excited",
            Self::Happy => "happy",
            Self::Curious => "curious",
        };
        write!(f, "{}", name)
    }
}

/// Keywords that read as a positive superlative.
const CELEBRATING_KEYWORDS: &[&str] = &["great", "awesome", "perfect"];

/// Keywords that read as hedging or deliberation.
const THINKING_KEYWORDS: &[&str] = &["think", "consider", "maybe"];

/// Emoji that read as upbeat.
const EXCITED_EMOJI: &[&str] = &["😊", "😃"];

/// Tag free text with a coarse mood.
///
/// Rules are checked in priority order and the first match wins:
/// superlatives, then hedging words, then exclamation marks or upbeat
/// emoji. Matching is case-insensitive. Text that matches nothing is
/// `Happy`; `Curious` is reserved for the fallback responder and is
/// never produced here.
pub fn detect_mood(text: &str) -> Mood {
    let lower = text.to_lowercase();

    if CELEBRATING_KEYWORDS.iter().any(|k| lower.contains(k)) {
        return Mood::Celebrating;
    }
    if THINKING_KEYWORDS.iter().any(|k| lower.contains(k)) {
        return Mood::Thinking;
    }
    if lower.contains('!') || EXCITED_EMOJI.iter().any(|e| lower.contains(e)) {
        return Mood::Excited;
    }

    Mood::Happy
}
