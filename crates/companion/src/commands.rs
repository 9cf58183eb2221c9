//! REPL command parsing.

/// The closed set of REPL commands.
///
/// Anything that is not a slash command is a chat message. Unknown
/// slash commands parse to `Help` rather than being sent to the
/// backend by accident.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Send a chat message.
    Chat(String),
    /// Show the current weather alert.
    Weather,
    /// Print the conversation history.
    History,
    /// Clear the conversation history.
    Clear,
    /// Show usage.
    Help,
    /// Exit the REPL.
    Quit,
}

impl Command {
    /// Parse one input line. Blank lines parse to `None`.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }

        if let Some(name) = input.strip_prefix('/') {
            return Some(match name.trim() {
                "weather" => Self::Weather,
                "history" => Self::History,
                "clear" => Self::Clear,
                "quit" | "exit" => Self::Quit,
                _ => Self::Help,
            });
        }

        Some(Self::Chat(input.to_string()))
    }
}

/// Usage text for `/help` and unknown commands.
pub const USAGE: &str = "commands:\n  \
    /weather  show the current weather alert\n  \
    /history  print the conversation so far\n  \
    /clear    clear the conversation history\n  \
    /quit     exit\n\
    anything else is sent to the chat companion";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_line_is_none() {
        assert_eq!(Command::parse(""), None);
        assert_eq!(Command::parse("   "), None);
    }

    #[test]
    fn test_slash_commands() {
        assert_eq!(Command::parse("/weather"), Some(Command::Weather));
        assert_eq!(Command::parse("/history"), Some(Command::History));
        assert_eq!(Command::parse("/clear"), Some(Command::Clear));
        assert_eq!(Command::parse("/quit"), Some(Command::Quit));
        assert_eq!(Command::parse("/exit"), Some(Command::Quit));
    }

    #[test]
    fn test_unknown_slash_command_is_help() {
        assert_eq!(Command::parse("/frobnicate"), Some(Command::Help));
    }

    #[test]
    fn test_plain_text_is_chat() {
        assert_eq!(
            Command::parse("hello there"),
            Some(Command::Chat("hello there".to_string()))
        );
    }

    #[test]
    fn test_input_is_trimmed() {
        assert_eq!(Command::parse("  /weather  "), Some(Command::Weather));
    }
}
