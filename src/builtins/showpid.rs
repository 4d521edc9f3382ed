use super::Outcome;
use crate::error::ShellError;
use crate::shell::Shell;

/// `showpid` — prints the shell's own pid. Extra arguments are tolerated
/// and ignored.
pub fn run(shell: &mut Shell, _args: &[String]) -> Result<Outcome, ShellError> {
    println!("smash pid is {}", shell.pid);
    Ok(Outcome::Continue(0))
}
