use nix::sys::signal::Signal;

use super::Outcome;
use crate::error::{KillError, ShellError};
use crate::shell::Shell;
use crate::signal::reap_and_reconcile;

/// `kill <signum> <job-id>` — sends a signal to a job's process group.
/// Accepts a bare or negated signal number, matching the shell's own
/// `kill -9 0` / `kill 9 0` forms seen in tests.
pub fn run(shell: &mut Shell, args: &[String]) -> Result<Outcome, ShellError> {
    if args.len() != 2 {
        return Err(KillError::BadArgs.into());
    }

    let signum: i32 = args[0]
        .trim_start_matches('-')
        .parse()
        .map_err(|_| KillError::BadArgs)?;
    let job_id: u32 = args[1].parse().map_err(|_| KillError::BadArgs)?;
    let signal = Signal::try_from(signum).map_err(|_| KillError::BadArgs)?;

    reap_and_reconcile(&mut shell.jobs);
    let job = shell.jobs.lookup(job_id)?;
    let pid = job.pid;

    crate::process::send_signal(pid, signal).map_err(|_| KillError::NoSuchJob(job_id))?;
    println!("signal number {} was sent to pid {}", signum, pid.as_raw());

    Ok(Outcome::Continue(0))
}
