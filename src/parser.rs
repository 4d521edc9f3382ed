//! Turns a token stream into a [`CommandList`]: simple commands joined by
//! `&&`, with an optional trailing background marker on the last command.

use crate::error::ShellError;
use crate::tokenizer::Token;

/// One command: a verb plus its arguments, and whether it should run in
/// the background. Only the last `SimpleCommand` of a `CommandList` may
/// have `background` set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleCommand {
    pub argv: Vec<String>,
    pub background: bool,
}

impl SimpleCommand {
    pub fn verb(&self) -> &str {
        &self.argv[0]
    }
}

/// A non-empty sequence of [`SimpleCommand`]s joined by `&&`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandList {
    pub commands: Vec<SimpleCommand>,
}

/// Parse a token stream produced by [`crate::tokenizer::tokenize`].
///
/// Returns `Ok(None)` for an empty line (no tokens at all), which the
/// caller should treat as "re-prompt, no error" per the REPL contract.
pub fn parse(tokens: Vec<Token>) -> Result<Option<CommandList>, ShellError> {
    if tokens.is_empty() {
        return Ok(None);
    }

    let mut words: Vec<String> = tokens.into_iter().map(|t| t.text).collect();

    let background = if words.last().map(|s| s.as_str()) == Some("&") {
        words.pop();
        true
    } else {
        false
    };

    if words.is_empty() {
        // A line that was only "&" has no command to attach it to.
        return Err(ShellError::Parse);
    }

    let mut commands: Vec<Vec<String>> = Vec::new();
    let mut current: Vec<String> = Vec::new();

    for word in words {
        if word == "&&" {
            if current.is_empty() {
                return Err(ShellError::Parse);
            }
            commands.push(std::mem::take(&mut current));
        } else if word.contains('&') {
            // Any other occurrence of `&` (embedded, or a lone token that
            // isn't the recognized `&&` sequencer) is rejected.
            return Err(ShellError::Parse);
        } else {
            current.push(word);
        }
    }
    if current.is_empty() {
        // Trailing `&&` with nothing after it.
        return Err(ShellError::Parse);
    }
    commands.push(current);

    let last_index = commands.len() - 1;
    let commands = commands
        .into_iter()
        .enumerate()
        .map(|(i, argv)| SimpleCommand {
            argv,
            background: background && i == last_index,
        })
        .collect();

    Ok(Some(CommandList { commands }))
}
