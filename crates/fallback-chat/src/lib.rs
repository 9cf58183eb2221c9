//! Rule-based fallback responder for the weather companion.
//!
//! When the remote chat backend is unreachable, times out, or returns a
//! payload that cannot be used, the conversation session answers from
//! this local rule chain instead. Responding is infallible: every input
//! maps to a canned reply with a mood tag and a confidence constant.
//!
//! # Example
//!
//! ```rust
//! use chat_core::Mood;
//!
//! let reply = fallback_chat::respond("hello there");
//! assert_eq!(reply.mood, Mood::Happy);
//! assert_eq!(reply.confidence, 0.95);
//! ```

mod rules;

pub use rules::respond;
