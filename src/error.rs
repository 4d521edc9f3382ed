//! Structured error taxonomy for the shell.
//!
//! Every fallible operation in the interpreter returns a [`ShellError`].
//! Formatting to the exact `smash error: ...` text users see happens in
//! exactly one place, the executor's dispatch boundary, so the wording in
//! this file is the single source of truth for it.

use thiserror::Error;

/// Top-level error kind produced anywhere in the shell.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShellError {
    #[error("invalid arguments")]
    Parse,

    #[error("{0}")]
    Cd(#[from] CdError),

    #[error("{0}")]
    Fg(#[from] FgError),

    #[error("{0}")]
    Kill(#[from] KillError),

    #[error("{0}")]
    Alias(#[from] AliasError),

    #[error("{0}")]
    Unalias(#[from] UnaliasError),

    #[error("{0}")]
    Diff(#[from] DiffError),

    #[error("{0}")]
    Quit(#[from] QuitError),

    #[error("{0}: command not found")]
    CommandNotFound(String),

    #[error("{verb}: failed to start process: {message}")]
    Spawn { verb: String, message: String },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CdError {
    #[error("cd: expected 1 argument")]
    WrongArity,
    #[error("cd: too many arguments")]
    TooManyArguments,
    #[error("cd: old pwd not set")]
    OldPwdUnset,
    #[error("cd: target directory does not exist")]
    NotFound,
    #[error("cd: target is not a directory")]
    NotADirectory,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FgError {
    #[error("fg: jobs list is empty")]
    EmptyJobList,
    #[error("fg: job id {0} does not exist")]
    NoSuchJob(u32),
    #[error("fg: invalid arguments")]
    BadArgs,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KillError {
    #[error("kill: invalid arguments")]
    BadArgs,
    #[error("kill: job id {0} does not exist")]
    NoSuchJob(u32),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AliasError {
    #[error("alias: invalid alias format")]
    BadFormat,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnaliasError {
    #[error("unalias: {0} alias does not exist")]
    NoSuchAlias(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiffError {
    #[error("diff: expected 2 arguments")]
    WrongArity,
    #[error("diff: expected valid paths for files")]
    InvalidPath,
    #[error("diff: paths are not files")]
    NotAFile,
    #[error("diff: failed to open file")]
    OpenFailed,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuitError {
    #[error("quit: unexpected arguments")]
    UnexpectedArguments,
}

impl ShellError {
    /// Render the exact text written to the merged output stream.
    ///
    /// Parse errors are rendered bare (`smash error: invalid arguments`);
    /// every other kind already carries its own `verb: message` prefix.
    pub fn render(&self) -> String {
        format!("smash error: {}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_parse_error() {
        assert_eq!(ShellError::Parse.render(), "smash error: invalid arguments");
    }

    #[test]
    fn renders_cd_wrong_arity() {
        let e: ShellError = CdError::WrongArity.into();
        assert_eq!(e.render(), "smash error: cd: expected 1 argument");
    }

    #[test]
    fn renders_fg_no_such_job() {
        let e: ShellError = FgError::NoSuchJob(3).into();
        assert_eq!(e.render(), "smash error: fg: job id 3 does not exist");
    }

    #[test]
    fn renders_command_not_found() {
        let e = ShellError::CommandNotFound("frobnicate".to_string());
        assert_eq!(e.render(), "smash error: frobnicate: command not found");
    }
}
