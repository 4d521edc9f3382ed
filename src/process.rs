//! Fork/exec and process-group discipline for external commands.

use std::ffi::CString;

use nix::sys::signal::{self, SaFlags, SigAction, SigHandler, SigSet, Signal};
use nix::sys::wait::{waitpid, WaitPidFlag, WaitStatus};
use nix::unistd::{execv, fork, getpid, setpgid, tcsetpgrp, ForkResult, Pid};

use crate::error::ShellError;

/// Search `PATH` for `verb`, the way `execvp` would, only to produce a
/// clean "command not found" before paying for a fork when possible.
/// Absolute/relative paths (containing a `/`) are used as-is.
fn resolve(verb: &str) -> Option<String> {
    if verb.contains('/') {
        return if std::path::Path::new(verb).exists() {
            Some(verb.to_string())
        } else {
            None
        };
    }
    let path = std::env::var("PATH").unwrap_or_default();
    std::env::split_paths(&path)
        .map(|dir| dir.join(verb))
        .find(|candidate| candidate.is_file())
        .map(|p| p.to_string_lossy().into_owned())
}

/// Reset the signals a shell ignores back to their default disposition
/// in a freshly-forked child, so the external program behaves as it
/// would under any other shell.
fn restore_default_signal_dispositions() -> nix::Result<()> {
    let action = SigAction::new(SigHandler::SigDfl, SaFlags::empty(), SigSet::empty());
    for sig in [
        Signal::SIGINT,
        Signal::SIGQUIT,
        Signal::SIGTSTP,
        Signal::SIGTTIN,
        Signal::SIGTTOU,
        Signal::SIGCHLD,
    ] {
        unsafe { signal::sigaction(sig, &action) }?;
    }
    Ok(())
}

/// Fork and exec `argv` in its own process group. Returns the child pid
/// to the parent immediately; the parent never blocks here regardless of
/// whether the command is meant to run in the foreground or background,
/// since foreground waiting is a separate, explicit step.
pub fn spawn(argv: &[String]) -> Result<Pid, ShellError> {
    let verb = &argv[0];
    let resolved = resolve(verb).ok_or_else(|| ShellError::CommandNotFound(verb.clone()))?;

    let c_path = CString::new(resolved).map_err(|_| ShellError::Spawn {
        verb: verb.clone(),
        message: "invalid path".to_string(),
    })?;
    let c_args: Vec<CString> = argv
        .iter()
        .map(|a| CString::new(a.as_str()).unwrap_or_else(|_| CString::new("?").unwrap()))
        .collect();

    match unsafe { fork() }.map_err(|e| ShellError::Spawn {
        verb: verb.clone(),
        message: e.to_string(),
    })? {
        ForkResult::Parent { child } => {
            let _ = setpgid(child, child);
            Ok(child)
        }
        ForkResult::Child => {
            let me = getpid();
            let _ = setpgid(me, me);
            let _ = restore_default_signal_dispositions();
            match execv(&c_path, &c_args) {
                Ok(_) => unreachable!(),
                Err(e) => {
                    tracing::debug!(verb = %verb, error = %e, "execv failed");
                    std::process::exit(127);
                }
            }
        }
    }
}

/// Hand the terminal to `pgid` and block until it exits or is signaled,
/// then reclaim terminal control for the shell itself. Returns the exit
/// status as a POSIX-style code (`128 + signum` if killed by a signal).
pub fn run_in_foreground(pid: Pid) -> i32 {
    let shell_pid = getpid();
    let stdin_fd = 0;
    let _ = tcsetpgrp(stdin_fd, pid);

    let status = loop {
        match waitpid(pid, Some(WaitPidFlag::WUNTRACED)) {
            Ok(WaitStatus::Exited(_, code)) => break code,
            Ok(WaitStatus::Signaled(_, sig, _)) => break 128 + sig as i32,
            Ok(WaitStatus::Stopped(_, _)) => break 128 + Signal::SIGTSTP as i32,
            Ok(_) => continue,
            Err(nix::errno::Errno::EINTR) => continue,
            Err(_) => break 1,
        }
    };

    let _ = tcsetpgrp(stdin_fd, shell_pid);
    status
}

/// Send `signal` to the process group led by `pid`. Every job's group
/// leader pid equals its group id (set at spawn time), so this reaches
/// the whole job, not just the leader.
pub fn send_signal(pid: Pid, signal: Signal) -> nix::Result<()> {
    signal::kill(Pid::from_raw(-pid.as_raw()), signal)
}
