//! The ordered fallback rule chain.

use chat_core::{ChatReply, Mood};

/// One keyword rule in the fallback chain.
struct FallbackRule {
    /// Any of these substrings in the lowercased message fires the rule.
    keywords: &'static [&'static str],
    message: &'static str,
    mood: Mood,
    confidence: f32,
}

/// Rules evaluated top to bottom; the first match wins.
const RULES: &[FallbackRule] = &[
    FallbackRule {
        keywords: &["error", "bug"],
        message: "I see you're dealing with an error! Don't worry, debugging is part of \
                  the journey. Can you tell me more about what's happening? 🐛",
        mood: Mood::Thinking,
        confidence: 0.7,
    },
    FallbackRule {
        keywords: &["help", "how"],
        message: "I'm here to help! Whether it's coding questions, weather updates, or \
                  just chatting - I'm all ears! What do you need? 💡",
        mood: Mood::Happy,
        confidence: 0.8,
    },
    FallbackRule {
        keywords: &["weather", "temperature"],
        message: "Let me check the weather for you! I can show you current conditions \
                  and give you smart recommendations. Want me to check? ☀️",
        mood: Mood::Excited,
        confidence: 0.9,
    },
    FallbackRule {
        keywords: &["hello", "hi", "hey"],
        message: "Hey there, awesome coder! 👋 I'm your friendly coding companion. How \
                  can I make your day better?",
        mood: Mood::Happy,
        confidence: 0.95,
    },
    FallbackRule {
        keywords: &["tired", "stuck"],
        message: "Take a deep breath! 🌟 Every great developer faces challenges. \
                  Remember: bugs are just undocumented features waiting to be \
                  discovered! You've got this! 💪",
        mood: Mood::Celebrating,
        confidence: 0.8,
    },
];

/// Terminal rule when nothing else matched.
const DEFAULT_RULE: FallbackRule = FallbackRule {
    keywords: &[],
    message: "That's interesting! Tell me more about what you're working on. I'm here \
              to help with coding questions, weather updates, or just a friendly chat! 😊",
    mood: Mood::Curious,
    confidence: 0.6,
};

/// Produce a canned reply for `message`.
///
/// Matching is case-insensitive substring containment over the rule
/// chain in declaration order. Always returns a reply; unmatched input
/// falls through to the default rule.
pub fn respond(message: &str) -> ChatReply {
    let lower = message.to_lowercase();

    let rule = RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|k| lower.contains(k)))
        .unwrap_or(&DEFAULT_RULE);

    ChatReply {
        message: rule.message.to_string(),
        mood: rule.mood,
        confidence: rule.confidence,
    }
}
