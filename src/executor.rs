//! Runs a parsed [`CommandList`] against the shell state, applying
//! alias expansion and `&&` short-circuit sequencing.

use crate::alias::expand_first_word;
use crate::builtins::{self, Outcome};
use crate::parser::CommandList;
use crate::process;
use crate::shell::Shell;
use crate::signal::reap_and_reconcile;

/// What the REPL driver should do after running one line.
pub enum RunOutcome {
    Continue,
    Exit(i32),
}

/// Execute every command in `list` left to right, stopping as soon as
/// one exits non-zero (the `&&` short-circuit). Errors are rendered to
/// stdout at this boundary and treated as a non-zero exit status for the
/// purpose of sequencing, per the error-handling design. `raw_line` is the
/// original input line `list` was parsed from; it backs `Job::command_text`
/// for any command in the chain that backgrounds, since that field records
/// the literal line the user typed, not the alias-expanded argv.
pub fn run(shell: &mut Shell, raw_line: &str, list: CommandList) -> RunOutcome {
    for simple in list.commands {
        reap_and_reconcile(&mut shell.jobs);

        let argv = match expand_first_word(&shell.aliases, simple.argv) {
            Ok(argv) => argv,
            Err(e) => {
                println!("{}", e.render());
                shell.last_status = 1;
                return RunOutcome::Continue;
            }
        };
        if argv.is_empty() {
            continue;
        }
        let verb = argv[0].clone();

        let status = if builtins::is_builtin(&verb) {
            match builtins::dispatch(shell, &verb, &argv[1..]) {
                Ok(Outcome::Continue(code)) => {
                    shell.last_status = code;
                    code
                }
                Ok(Outcome::Exit(code)) => return RunOutcome::Exit(code),
                Err(e) => {
                    println!("{}", e.render());
                    shell.last_status = 1;
                    1
                }
            }
        } else {
            run_external(shell, &argv, simple.background, raw_line)
        };

        if status != 0 {
            break;
        }
    }

    RunOutcome::Continue
}

/// `raw_line` with its trailing background marker (and the whitespace
/// around it) removed, matching the Job Table's `command_text` contract:
/// "the original line (without trailing `&`)".
fn strip_trailing_background(raw_line: &str) -> String {
    let trimmed = raw_line.trim_end();
    trimmed.strip_suffix('&').unwrap_or(trimmed).trim_end().to_string()
}

fn run_external(shell: &mut Shell, argv: &[String], background: bool, raw_line: &str) -> i32 {
    match process::spawn(argv) {
        Ok(pid) => {
            if background {
                let command_text = strip_trailing_background(raw_line);
                let id = shell.jobs.insert(pid, command_text);
                tracing::debug!(job_id = id, pid = pid.as_raw(), "started background job");
                0
            } else {
                let status = process::run_in_foreground(pid);
                shell.last_status = status;
                status
            }
        }
        Err(e) => {
            println!("{}", e.render());
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{parse, SimpleCommand};
    use crate::tokenizer::tokenize;

    fn parse_line(line: &str) -> CommandList {
        parse(tokenize(line).unwrap()).unwrap().unwrap()
    }

    #[test]
    fn short_circuit_stops_after_builtin_failure() {
        let mut shell = Shell::new();
        let list = CommandList {
            commands: vec![
                SimpleCommand { argv: vec!["cd".to_string()], background: false },
                SimpleCommand { argv: vec!["showpid".to_string()], background: false },
            ],
        };
        // cd with no args fails (wrong arity), so showpid must not run;
        // we only assert on the returned control-flow, not stdout.
        let outcome = run(&mut shell, "cd && showpid", list);
        assert!(matches!(outcome, RunOutcome::Continue));
        assert_eq!(shell.last_status, 1);
    }

    #[test]
    fn successful_chain_runs_every_command() {
        let mut shell = Shell::new();
        let line = "showpid && showpid";
        let list = parse_line(line);
        let outcome = run(&mut shell, line, list);
        assert!(matches!(outcome, RunOutcome::Continue));
        assert_eq!(shell.last_status, 0);
    }

    #[test]
    fn quit_requests_exit() {
        let mut shell = Shell::new();
        let line = "quit";
        let list = parse_line(line);
        let outcome = run(&mut shell, line, list);
        assert!(matches!(outcome, RunOutcome::Exit(0)));
    }

    #[test]
    fn strips_trailing_background_marker_with_no_space() {
        assert_eq!(strip_trailing_background("sleep 100&"), "sleep 100");
    }

    #[test]
    fn strips_trailing_background_marker_with_space() {
        assert_eq!(strip_trailing_background("sleep 100 &"), "sleep 100");
    }
}
