//! Command parsing.

/// Prefix marking a message as a command.
pub const COMMAND_PREFIX: char = '!';

/// Usage of `!add`.
pub const ADD_USAGE: &str = "Usage: !add <champion> <item, item, ...>";
/// Usage of `!get`.
pub const GET_USAGE: &str = "Usage: !get <champion>";
/// Usage of `!delete`.
pub const DELETE_USAGE: &str = "Usage: !delete <champion>";
/// Reply to unknown commands.
pub const HELP: &str =
    "Commands: !hello, !add <champion> <items>, !get <champion>, !delete <champion>";

/// Parsed chat command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// `!hello`
    Hello,
    /// `!add <champion> <build text>`
    Add {
        /// Champion the build is for.
        champion: String,
        /// Raw build text, split into item phrases later.
        build: String,
    },
    /// `!get <champion>`
    Get {
        /// Champion to list builds for.
        champion: String,
    },
    /// `!delete <champion>`
    Delete {
        /// Champion to delete the author's builds for.
        champion: String,
    },
    /// Unknown command or missing arguments, carries the text to reply with.
    Usage(&'static str),
}

impl Command {
    /// Parses a chat message.
    ///
    /// Returns `None` for messages that are not commands. The champion is the first word, or
    /// a double-quoted name for champions with spaces (`!get "miss fortune"`).
    pub fn parse(message: &str) -> Option<Self> {
        let body = message.trim().strip_prefix(COMMAND_PREFIX)?;
        let (name, args) = match body.split_once(char::is_whitespace) {
            Some((name, args)) => (name, args.trim()),
            None => (body, ""),
        };

        let command = match name.to_lowercase().as_str() {
            "hello" => Self::Hello,
            "add" => match split_champion(args) {
                Some((champion, build)) if !build.is_empty() => Self::Add {
                    champion,
                    build: build.to_string(),
                },
                _ => Self::Usage(ADD_USAGE),
            },
            "get" => match split_champion(args) {
                Some((champion, _)) => Self::Get { champion },
                None => Self::Usage(GET_USAGE),
            },
            "delete" => match split_champion(args) {
                Some((champion, _)) => Self::Delete { champion },
                None => Self::Usage(DELETE_USAGE),
            },
            _ => Self::Usage(HELP),
        };

        Some(command)
    }
}

/// Splits the leading champion name from the remaining arguments.
fn split_champion(args: &str) -> Option<(String, &str)> {
    let args = args.trim_start();

    let (champion, rest) = if let Some(quoted) = args.strip_prefix('"') {
        let (champion, rest) = quoted.split_once('"')?;
        (champion, rest)
    } else {
        match args.split_once(char::is_whitespace) {
            Some((champion, rest)) => (champion, rest),
            None => (args, ""),
        }
    };

    let champion = champion.trim();
    if champion.is_empty() {
        return None;
    }

    Some((champion.to_string(), rest.trim()))
}
