//! Built-in command handlers. Each takes the shell state and the
//! command's arguments (verb excluded) and returns an exit status,
//! writing its own output to stdout and returning `Err` for the executor
//! to render as `smash error: ...` on failure.

mod alias_cmd;
mod cd;
mod diff;
mod fg;
mod jobs;
mod kill;
mod pwd;
mod quit;
mod showpid;
mod unalias_cmd;

use crate::error::ShellError;
use crate::shell::Shell;

/// The fixed set of verbs handled in-process rather than via fork/exec.
pub const BUILTIN_NAMES: &[&str] = &[
    "showpid", "pwd", "cd", "jobs", "kill", "fg", "alias", "unalias", "diff", "quit",
];

pub fn is_builtin(verb: &str) -> bool {
    BUILTIN_NAMES.contains(&verb)
}

/// Outcome of running a builtin: either the normal "return to the prompt"
/// case, or a request to end the REPL loop (`quit`).
pub enum Outcome {
    Continue(i32),
    Exit(i32),
}

pub fn dispatch(shell: &mut Shell, verb: &str, args: &[String]) -> Result<Outcome, ShellError> {
    match verb {
        "showpid" => showpid::run(shell, args),
        "pwd" => pwd::run(shell, args),
        "cd" => cd::run(shell, args),
        "jobs" => jobs::run(shell, args),
        "kill" => kill::run(shell, args),
        "fg" => fg::run(shell, args),
        "alias" => alias_cmd::run(shell, args),
        "unalias" => unalias_cmd::run(shell, args),
        "diff" => diff::run(shell, args),
        "quit" => quit::run(shell, args),
        _ => unreachable!("dispatch called with non-builtin verb {verb}"),
    }
}
