use super::Outcome;
use crate::error::ShellError;
use crate::shell::Shell;
use crate::signal::reap_and_reconcile;

/// `jobs` — lists currently running background jobs in ascending id
/// order. Reconciles the job table first so recently-finished jobs never
/// appear.
pub fn run(shell: &mut Shell, _args: &[String]) -> Result<Outcome, ShellError> {
    reap_and_reconcile(&mut shell.jobs);
    for job in shell.jobs.running() {
        println!(
            "[{}] {} : {} {} secs",
            job.id,
            job.command_text,
            job.pid,
            job.elapsed_secs()
        );
    }
    Ok(Outcome::Continue(0))
}
