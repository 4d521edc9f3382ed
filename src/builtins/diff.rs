use super::Outcome;
use crate::error::{DiffError, ShellError};
use crate::shell::Shell;

/// `diff a b` — byte-compares two regular files, printing `0` if
/// identical and `1` otherwise.
pub fn run(_shell: &mut Shell, args: &[String]) -> Result<Outcome, ShellError> {
    if args.len() != 2 {
        return Err(DiffError::WrongArity.into());
    }

    let paths: Vec<&std::path::Path> = args.iter().map(|a| std::path::Path::new(a.as_str())).collect();
    for path in &paths {
        if !path.exists() {
            return Err(DiffError::InvalidPath.into());
        }
    }
    for path in &paths {
        if !path.is_file() {
            return Err(DiffError::NotAFile.into());
        }
    }

    let a = std::fs::read(paths[0]).map_err(|_| DiffError::OpenFailed)?;
    let b = std::fs::read(paths[1]).map_err(|_| DiffError::OpenFailed)?;

    let code = if a == b { 0 } else { 1 };
    println!("{}", code);
    Ok(Outcome::Continue(0))
}
