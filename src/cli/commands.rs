//! Session command definitions
//!
//! Each input line of the interactive session parses into one `Command`.

use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Command {
    /// Set the name field
    Name(String),
    /// Set the date field
    Date(String),
    /// Set the date field to today's date
    Today,
    /// Submit the form, optionally filling it from an inline `NAME@DATE`
    Add(Option<String>),
    /// Re-sort and render the listing
    List,
    /// Select a 1-based row of the last listing
    Select(String),
    /// Delete by the selected row's name, optionally selecting a row first
    Delete(Option<String>),
    /// Clear everything after confirmation
    Clear,
    /// Report items expiring within the warning window
    Check,
    Help,
    Quit,
}

pub(crate) const HELP: &str = "\
Commands:
  name <text>          Set the item name field
  date <YYYY-MM-DD>    Set the expiration date field
  today                Set the date field to today's date
  add [NAME@DATE]      Add the item in the fields (or the inline item)
  list | refresh       Show all items sorted by date
  select <row>         Select a row of the last listing
  delete [<row>]       Delete every item named like the selected row
  clear                Remove all items (asks for confirmation)
  check                Show items expiring within 7 days
  help                 Show this help
  quit | exit          Leave the session";

/// Parse one input line. Returns `Ok(None)` for blank lines.
pub(crate) fn parse_command(line: &str) -> Result<Option<Command>, AppError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };
    let arg = || (!rest.is_empty()).then(|| rest.to_string());

    let command = match word.to_ascii_lowercase().as_str() {
        "name" => Command::Name(rest.to_string()),
        "date" => Command::Date(rest.to_string()),
        "today" => Command::Today,
        "add" => Command::Add(arg()),
        "list" | "refresh" | "ls" => Command::List,
        "select" | "sel" => Command::Select(rest.to_string()),
        "delete" | "del" | "rm" => Command::Delete(arg()),
        "clear" => Command::Clear,
        "check" => Command::Check,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        _ => {
            return Err(AppError::UnknownCommand {
                input: word.to_string(),
            });
        }
    };
    Ok(Some(command))
}

/// Answer to a yes/no prompt; anything but an explicit yes is no
pub(crate) fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Command {
        parse_command(line).unwrap().unwrap()
    }

    #[test]
    fn blank_lines_are_skipped() {
        assert_eq!(parse_command("").unwrap(), None);
        assert_eq!(parse_command("   \t").unwrap(), None);
    }

    #[test]
    fn field_commands_keep_spaces() {
        assert_eq!(parse("name  Greek yogurt "), Command::Name("Greek yogurt".into()));
        assert_eq!(parse("date 2026-03-12"), Command::Date("2026-03-12".into()));
        assert_eq!(parse("name"), Command::Name(String::new()));
    }

    #[test]
    fn add_with_and_without_inline_item() {
        assert_eq!(parse("add"), Command::Add(None));
        assert_eq!(
            parse("add Milk@2026-03-12"),
            Command::Add(Some("Milk@2026-03-12".into()))
        );
    }

    #[test]
    fn delete_with_optional_row() {
        assert_eq!(parse("delete"), Command::Delete(None));
        assert_eq!(parse("rm 2"), Command::Delete(Some("2".into())));
    }

    #[test]
    fn command_word_is_case_insensitive() {
        assert_eq!(parse("LIST"), Command::List);
        assert_eq!(parse("Check"), Command::Check);
        assert_eq!(parse("refresh"), Command::List);
    }

    #[test]
    fn simple_commands() {
        assert_eq!(parse("today"), Command::Today);
        assert_eq!(parse("clear"), Command::Clear);
        assert_eq!(parse("select 3"), Command::Select("3".into()));
        assert_eq!(parse("help"), Command::Help);
        assert_eq!(parse("exit"), Command::Quit);
    }

    #[test]
    fn unknown_command_errors() {
        let err = parse_command("frobnicate now").unwrap_err();
        assert_eq!(err.to_string(), "Unknown command: frobnicate");
    }

    #[test]
    fn yes_answers() {
        assert!(is_yes("y"));
        assert!(is_yes(" YES\n"));
        assert!(!is_yes(""));
        assert!(!is_yes("n"));
        assert!(!is_yes("yep"));
    }
}
