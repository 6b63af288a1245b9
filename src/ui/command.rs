//! Command parsing for the command line
//!
//! Supports:
//! - `:q` or `:quit` → Quit
//! - `:h` or `:help` → Help
//! - `:l` or `:list` → toggle the unknown/NGL word lists
//! - `:known <path>` / `:ngl <path>` → reload a vocabulary list
//! - `:nongl` → analyze without an NGL list
//! - `:export <path>` → write the HTML report
//! - `@filename` → analyze a text, PDF or EPUB file
//! - `@@` → analyze the clipboard
//! - anything else → analyze the typed text itself

use crate::app::AppEvent;

/// Commands that can be parsed from command line input
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Quit,
    Help,
    ListWords,
    LoadKnown(String),
    LoadNgl(String),
    DisableNgl,
    Export(String),
    LoadFile(String),
    LoadClipboard,
    AnalyzeText(String),
    Unknown(String),
}

/// Parse command line input into a Command
pub fn parse_command(input: &str) -> Command {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Command::Unknown(trimmed.to_string());
    }

    if let Some(cmd) = trimmed.strip_prefix(':') {
        let (name, arg) = match cmd.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (cmd, ""),
        };
        match (name, arg.is_empty()) {
            ("q" | "quit", true) => Command::Quit,
            ("h" | "help", true) => Command::Help,
            ("l" | "list", true) => Command::ListWords,
            ("nongl", true) => Command::DisableNgl,
            ("known", false) => Command::LoadKnown(arg.to_string()),
            ("ngl", false) => Command::LoadNgl(arg.to_string()),
            ("export", false) => Command::Export(arg.to_string()),
            _ => Command::Unknown(trimmed.to_string()),
        }
    } else if let Some(rest) = trimmed.strip_prefix('@') {
        let filename = rest.trim();
        if filename.is_empty() || filename == "@" {
            Command::LoadClipboard
        } else {
            Command::LoadFile(filename.to_string())
        }
    } else {
        Command::AnalyzeText(input.to_string())
    }
}

/// Convert a parsed command into an AppEvent
pub fn command_to_app_event(command: Command) -> AppEvent {
    match command {
        Command::Quit => AppEvent::Quit,
        Command::Help => AppEvent::Help,
        Command::ListWords => AppEvent::ListWords,
        Command::LoadKnown(path) => AppEvent::LoadKnown(path),
        Command::LoadNgl(path) => AppEvent::LoadNgl(path),
        Command::DisableNgl => AppEvent::DisableNgl,
        Command::Export(path) => AppEvent::Export(path),
        Command::LoadFile(path) => AppEvent::LoadFile(path),
        Command::LoadClipboard => AppEvent::LoadClipboard,
        Command::AnalyzeText(text) => AppEvent::AnalyzeText(text),
        Command::Unknown(input) => AppEvent::InvalidCommand(input),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quit_variants() {
        assert_eq!(parse_command(":q"), Command::Quit);
        assert_eq!(parse_command(":quit"), Command::Quit);
    }

    #[test]
    fn test_parse_help_variants() {
        assert_eq!(parse_command(":h"), Command::Help);
        assert_eq!(parse_command(":help"), Command::Help);
    }

    #[test]
    fn test_parse_list_variants() {
        assert_eq!(parse_command(":l"), Command::ListWords);
        assert_eq!(parse_command(" :list "), Command::ListWords);
    }

    #[test]
    fn test_parse_vocabulary_commands() {
        assert_eq!(
            parse_command(":known lists/mine.txt"),
            Command::LoadKnown("lists/mine.txt".to_string())
        );
        assert_eq!(
            parse_command(":ngl   next words.txt "),
            Command::LoadNgl("next words.txt".to_string())
        );
        assert_eq!(parse_command(":nongl"), Command::DisableNgl);
    }

    #[test]
    fn test_parse_commands_missing_argument() {
        assert!(matches!(parse_command(":known"), Command::Unknown(_)));
        assert!(matches!(parse_command(":export  "), Command::Unknown(_)));
        assert!(matches!(parse_command(":q now"), Command::Unknown(_)));
    }

    #[test]
    fn test_parse_export() {
        assert_eq!(
            parse_command(":export out.html"),
            Command::Export("out.html".to_string())
        );
    }

    #[test]
    fn test_parse_load_file_with_spaces() {
        assert_eq!(
            parse_command("@  test.txt"),
            Command::LoadFile("test.txt".to_string())
        );
    }

    #[test]
    fn test_parse_load_clipboard() {
        assert_eq!(parse_command("@@"), Command::LoadClipboard);
        assert_eq!(parse_command("@"), Command::LoadClipboard);
    }

    #[test]
    fn test_parse_plain_text_is_analyzed_verbatim() {
        assert_eq!(
            parse_command("The cat sat. "),
            Command::AnalyzeText("The cat sat. ".to_string())
        );
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(matches!(parse_command(""), Command::Unknown(_)));
        assert!(matches!(parse_command("   "), Command::Unknown(_)));
    }

    #[test]
    fn test_parse_invalid_command() {
        assert!(matches!(parse_command(":nope"), Command::Unknown(_)));
    }

    #[test]
    fn test_command_to_app_event() {
        assert_eq!(command_to_app_event(Command::Quit), AppEvent::Quit);
        assert_eq!(
            command_to_app_event(Command::AnalyzeText("hi".to_string())),
            AppEvent::AnalyzeText("hi".to_string())
        );
        assert_eq!(
            command_to_app_event(Command::LoadNgl("n.txt".to_string())),
            AppEvent::LoadNgl("n.txt".to_string())
        );
        assert!(matches!(
            command_to_app_event(Command::Unknown("invalid".to_string())),
            AppEvent::InvalidCommand(_)
        ));
    }
}
