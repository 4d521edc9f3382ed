use super::Outcome;
use crate::error::{CdError, ShellError};
use crate::shell::Shell;

/// `cd <dir>` — changes the working directory, tracking `OLDPWD`.
/// `cd -` swaps to the previous directory and prints the path it lands
/// on, mirroring the interactive bash convention.
pub fn run(shell: &mut Shell, args: &[String]) -> Result<Outcome, ShellError> {
    if args.is_empty() {
        return Err(CdError::WrongArity.into());
    }
    if args.len() > 1 {
        return Err(CdError::TooManyArguments.into());
    }

    let (target, print_path) = if args[0] == "-" {
        let prev = shell.oldpwd.clone().ok_or(CdError::OldPwdUnset)?;
        (prev, true)
    } else {
        (args[0].clone(), false)
    };

    let path = std::path::Path::new(&target);
    if !path.exists() {
        return Err(CdError::NotFound.into());
    }
    if !path.is_dir() {
        return Err(CdError::NotADirectory.into());
    }

    let previous = shell.cwd().unwrap_or_default();
    std::env::set_current_dir(path).map_err(|_| CdError::NotFound)?;
    shell.oldpwd = Some(previous.display().to_string());

    if print_path {
        println!("{}", std::env::current_dir().unwrap_or_default().display());
    }

    Ok(Outcome::Continue(0))
}
