use super::Outcome;
use crate::error::ShellError;
use crate::shell::Shell;

/// `pwd` — prints the absolute current working directory. Extra
/// arguments are tolerated and ignored.
pub fn run(shell: &mut Shell, _args: &[String]) -> Result<Outcome, ShellError> {
    let cwd = shell.cwd().unwrap_or_default();
    println!("{}", cwd.display());
    Ok(Outcome::Continue(0))
}
