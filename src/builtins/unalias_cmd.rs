use super::Outcome;
use crate::error::{ShellError, UnaliasError};
use crate::shell::Shell;

/// `unalias name [name ...]` — removes each named alias in order,
/// stopping at the first name that does not exist.
pub fn run(shell: &mut Shell, args: &[String]) -> Result<Outcome, ShellError> {
    for name in args {
        if !shell.aliases.unset(name) {
            return Err(UnaliasError::NoSuchAlias(name.clone()).into());
        }
    }
    Ok(Outcome::Continue(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_existing_alias() {
        let mut shell = Shell::new();
        shell.aliases.set("x", "echo y");
        run(&mut shell, &["x".to_string()]).unwrap();
        assert!(shell.aliases.get("x").is_none());
    }

    #[test]
    fn stops_at_first_missing_name() {
        let mut shell = Shell::new();
        shell.aliases.set("a", "1");
        shell.aliases.set("b", "2");
        let err = run(&mut shell, &["missing".to_string(), "b".to_string()]).unwrap_err();
        assert_eq!(err, ShellError::Unalias(UnaliasError::NoSuchAlias("missing".to_string())));
        // `b` was never reached because we stopped at the first failure.
        assert_eq!(shell.aliases.get("b"), Some("2"));
    }
}
