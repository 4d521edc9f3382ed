use std::thread::sleep;
use std::time::Duration;

use nix::sys::signal::Signal;

use super::Outcome;
use crate::error::{QuitError, ShellError};
use crate::shell::Shell;
use crate::signal::reap_and_reconcile;

/// Grace period between SIGTERM and the SIGKILL escalation in `quit kill`.
const TERM_GRACE_PERIOD: Duration = Duration::from_millis(200);

/// `quit` exits the shell cleanly; `quit kill` first terminates every
/// running background job (SIGTERM, then SIGKILL for stragglers) before
/// exiting.
pub fn run(shell: &mut Shell, args: &[String]) -> Result<Outcome, ShellError> {
    match args {
        [] => Ok(Outcome::Exit(0)),
        [arg] if arg == "kill" => {
            terminate_all_jobs(shell);
            Ok(Outcome::Exit(0))
        }
        _ => Err(QuitError::UnexpectedArguments.into()),
    }
}

fn terminate_all_jobs(shell: &mut Shell) {
    reap_and_reconcile(&mut shell.jobs);

    let pending: Vec<(u32, String, nix::unistd::Pid)> = shell
        .jobs
        .running()
        .map(|j| (j.id, j.command_text.clone(), j.pid))
        .collect();

    for (id, command_text, pid) in &pending {
        println!("[{}] {} - sending SIGTERM... {}", id, command_text, pid.as_raw());
        let _ = crate::process::send_signal(*pid, Signal::SIGTERM);
    }

    sleep(TERM_GRACE_PERIOD);
    reap_and_reconcile(&mut shell.jobs);

    for (id, command_text, pid) in &pending {
        if shell.jobs.get(*id).is_some() {
            let _ = crate::process::send_signal(*pid, Signal::SIGKILL);
        }
        println!("[{}] {} - done", id, command_text);
    }

    reap_and_reconcile(&mut shell.jobs);
}
