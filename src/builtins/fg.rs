use super::Outcome;
use crate::error::{FgError, ShellError};
use crate::process::run_in_foreground;
use crate::shell::Shell;
use crate::signal::reap_and_reconcile;

/// `fg [job-id]` — brings a background job into the foreground and waits
/// for it. With no argument, picks the most recently started running
/// job.
pub fn run(shell: &mut Shell, args: &[String]) -> Result<Outcome, ShellError> {
    if args.len() > 1 {
        return Err(FgError::BadArgs.into());
    }

    reap_and_reconcile(&mut shell.jobs);

    let id = match args.first() {
        None => {
            let job = shell.jobs.most_recent().ok_or(FgError::EmptyJobList)?;
            job.id
        }
        Some(arg) => arg.parse::<u32>().map_err(|_| FgError::BadArgs)?,
    };

    let job = shell
        .jobs
        .get(id)
        .filter(|j| j.state == crate::job::JobState::Running)
        .ok_or(FgError::NoSuchJob(id))?;

    println!("{} {}", job.command_text, job.pid);
    let pid = job.pid;

    let status = run_in_foreground(pid);
    shell.jobs.remove(id);
    shell.last_status = status;

    Ok(Outcome::Continue(status))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_jobs_is_empty_job_list() {
        let mut shell = Shell::new();
        let err = run(&mut shell, &[]).unwrap_err();
        assert_eq!(err, ShellError::Fg(FgError::EmptyJobList));
    }

    #[test]
    fn too_many_arguments_is_bad_args() {
        let mut shell = Shell::new();
        let err = run(&mut shell, &["0".to_string(), "1".to_string()]).unwrap_err();
        assert_eq!(err, ShellError::Fg(FgError::BadArgs));
    }

    #[test]
    fn nonexistent_job_id_is_rejected() {
        let mut shell = Shell::new();
        let err = run(&mut shell, &["7".to_string()]).unwrap_err();
        assert_eq!(err, ShellError::Fg(FgError::NoSuchJob(7)));
    }
}
