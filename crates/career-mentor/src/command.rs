//! Parsing of input lines.

/// What the user asked for with one input line.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    /// A free-form question for the model.
    Ask(String),
    /// A canned question, by zero-based index.
    QuickQuestion(usize),
    /// Clear the conversation.
    Reset,
    /// Show the canned questions again.
    Help,
    /// Print the whole conversation again.
    History,
    /// Leave the program.
    Quit,
    /// A `/` command that is not known.
    Unknown(String),
}

impl Command {
    /// Parses an input line. Blank lines yield `None`.
    ///
    /// Quick questions are numbered from 1 on the command line.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        let Some(name) = line.strip_prefix('/') else {
            return Some(Command::Ask(line.to_owned()));
        };

        let command = match name {
            "reset" => Command::Reset,
            "help" => Command::Help,
            "history" => Command::History,
            "quit" | "exit" => Command::Quit,
            _ => match name.parse::<usize>() {
                Ok(number) if number > 0 => Command::QuickQuestion(number - 1),
                _ => Command::Unknown(line.to_owned()),
            },
        };
        Some(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_text() {
        assert_eq!(
            Command::parse("  How do I negotiate salary?\n"),
            Some(Command::Ask("How do I negotiate salary?".to_owned()))
        );
    }

    #[test]
    fn test_blank_lines() {
        assert_eq!(Command::parse(""), None);
        assert_eq!(Command::parse("   \n"), None);
    }

    #[test]
    fn test_commands() {
        assert_eq!(Command::parse("/reset"), Some(Command::Reset));
        assert_eq!(Command::parse("/help"), Some(Command::Help));
        assert_eq!(Command::parse("/history"), Some(Command::History));
        assert_eq!(Command::parse("/quit"), Some(Command::Quit));
        assert_eq!(Command::parse("/exit\n"), Some(Command::Quit));
        assert_eq!(Command::parse("/1"), Some(Command::QuickQuestion(0)));
        assert_eq!(Command::parse("/5"), Some(Command::QuickQuestion(4)));
    }

    #[test]
    fn test_unknown_commands() {
        assert_eq!(
            Command::parse("/0"),
            Some(Command::Unknown("/0".to_owned()))
        );
        assert_eq!(
            Command::parse("/salary"),
            Some(Command::Unknown("/salary".to_owned()))
        );
    }
}
