//! SIGCHLD handling and reconciliation.
//!
//! The handler itself touches only an atomic flag: no allocation, no
//! locking, no stdio. Everything that turns a terminated child into a
//! job-table update happens later, on the main thread, at the safe
//! points the REPL driver calls through `reap_and_reconcile`.

use std::sync::atomic::{AtomicBool, Ordering};

use nix::sys::signal::{self, SigAction, SigHandler, Signal};
use nix::sys::wait::{waitpid, WaitPidFlag, WaitStatus};
use nix::unistd::Pid;

use crate::job::JobTable;

static CHLD_RECEIVED: AtomicBool = AtomicBool::new(false);

extern "C" fn on_sigchld(_signum: i32) {
    CHLD_RECEIVED.store(true, Ordering::SeqCst);
}

/// Install the SIGCHLD handler and make the shell itself ignore
/// `SIGINT`/`SIGTSTP`, so that the terminal's default process-group
/// delivery only affects a foreground child, never the shell process.
/// Must be called once, at shell startup, before any child is forked.
pub fn install_handler() -> nix::Result<()> {
    let action = unsafe {
        SigAction::new(
            SigHandler::Handler(on_sigchld),
            signal::SaFlags::SA_RESTART,
            signal::SigSet::empty(),
        )
    };
    unsafe { signal::sigaction(Signal::SIGCHLD, &action) }?;

    let ignore = SigAction::new(SigHandler::SigIgn, signal::SaFlags::empty(), signal::SigSet::empty());
    unsafe { signal::sigaction(Signal::SIGINT, &ignore) }?;
    unsafe { signal::sigaction(Signal::SIGTSTP, &ignore) }?;
    Ok(())
}

/// True if a SIGCHLD has arrived since the last check; clears the flag.
pub fn take_chld_flag() -> bool {
    CHLD_RECEIVED.swap(false, Ordering::SeqCst)
}

/// Reconcile the job table with reality, but only do the work of a
/// non-blocking reap pass if a SIGCHLD has actually arrived since the
/// last call. Safe to call at every safe point named in §4.5 (before the
/// prompt, before any job-table read): when the flag is clear it is a
/// no-op, and the `WNOHANG` loop itself is idempotent when it does run.
pub fn reap_and_reconcile(jobs: &mut JobTable) {
    if !take_chld_flag() {
        return;
    }
    loop {
        match waitpid(Pid::from_raw(-1), Some(WaitPidFlag::WNOHANG)) {
            Ok(WaitStatus::Exited(pid, code)) => {
                jobs.mark_finished(pid, code);
            }
            Ok(WaitStatus::Signaled(pid, sig, _)) => {
                jobs.mark_finished(pid, 128 + sig as i32);
            }
            Ok(WaitStatus::StillAlive) | Err(nix::errno::Errno::ECHILD) => break,
            Ok(_) => continue,
            Err(_) => break,
        }
    }
    jobs.sweep_finished();
}
