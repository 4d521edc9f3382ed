use super::Outcome;
use crate::alias::parse_definition;
use crate::error::{AliasError, ShellError};
use crate::shell::Shell;

/// `alias` with no arguments lists every alias in definition order as
/// `name='replacement'`; `alias name='value'` defines or redefines one.
pub fn run(shell: &mut Shell, args: &[String]) -> Result<Outcome, ShellError> {
    if args.is_empty() {
        for (name, value) in shell.aliases.iter() {
            println!("{}='{}'", name, value);
        }
        return Ok(Outcome::Continue(0));
    }

    for arg in args {
        let (name, value) = parse_definition(arg).ok_or(AliasError::BadFormat)?;
        shell.aliases.set(&name, &value);
    }

    Ok(Outcome::Continue(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_definition_is_rejected() {
        let mut shell = Shell::new();
        let err = run(&mut shell, &["nope".to_string()]).unwrap_err();
        assert_eq!(err, ShellError::Alias(AliasError::BadFormat));
    }

    #[test]
    fn valid_definition_is_stored() {
        let mut shell = Shell::new();
        run(&mut shell, &["x='echo y'".to_string()]).unwrap();
        assert_eq!(shell.aliases.get("x"), Some("echo y"));
    }
}
