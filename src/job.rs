//! Job table: background process bookkeeping with lowest-free-id recycling.

use std::collections::BTreeMap;
use std::time::Instant;

use nix::unistd::Pid;

use crate::error::{KillError, ShellError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobState {
    Running,
    Finished(i32),
}

#[derive(Debug, Clone)]
pub struct Job {
    pub id: u32,
    pub pid: Pid,
    pub command_text: String,
    pub state: JobState,
    pub started_at: Instant,
}

impl Job {
    pub fn elapsed_secs(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}

/// Background process registry. IDs are assigned as the smallest
/// non-negative integer not currently held by a Running job, so that
/// killing job 0 while job 1 stays alive makes 0 assignable again on the
/// next background launch.
#[derive(Debug, Default)]
pub struct JobTable {
    jobs: BTreeMap<u32, Job>,
}

impl JobTable {
    pub fn new() -> Self {
        Self { jobs: BTreeMap::new() }
    }

    fn next_free_id(&self) -> u32 {
        let mut candidate = 0u32;
        for &id in self.jobs.keys() {
            if id == candidate {
                candidate += 1;
            } else if id > candidate {
                break;
            }
        }
        candidate
    }

    /// Register a newly forked background process and return its id.
    pub fn insert(&mut self, pid: Pid, command_text: String) -> u32 {
        let id = self.next_free_id();
        self.jobs.insert(
            id,
            Job {
                id,
                pid,
                command_text,
                state: JobState::Running,
                started_at: Instant::now(),
            },
        );
        id
    }

    pub fn get(&self, id: u32) -> Option<&Job> {
        self.jobs.get(&id)
    }

    /// Mark a tracked pid as finished; returns the affected job id if any.
    pub fn mark_finished(&mut self, pid: Pid, exit_code: i32) -> Option<u32> {
        for job in self.jobs.values_mut() {
            if job.pid == pid {
                job.state = JobState::Finished(exit_code);
                return Some(job.id);
            }
        }
        None
    }

    /// Drop every job already marked Finished. Called at reconciliation
    /// points after the reaper has updated states.
    pub fn sweep_finished(&mut self) {
        self.jobs.retain(|_, job| job.state == JobState::Running);
    }

    pub fn remove(&mut self, id: u32) -> Option<Job> {
        self.jobs.remove(&id)
    }

    /// Running jobs in ascending id order, for `jobs` and `quit kill`.
    pub fn running(&self) -> impl Iterator<Item = &Job> {
        self.jobs.values().filter(|j| j.state == JobState::Running)
    }

    /// The job with the highest id among currently Running jobs, used by
    /// `fg` with no argument.
    pub fn most_recent(&self) -> Option<&Job> {
        self.running().last()
    }

    pub fn is_empty(&self) -> bool {
        self.running().next().is_none()
    }

    pub fn lookup(&self, id: u32) -> Result<&Job, ShellError> {
        match self.get(id) {
            Some(job) if job.state == JobState::Running => Ok(job),
            _ => Err(KillError::NoSuchJob(id).into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pid(n: i32) -> Pid {
        Pid::from_raw(n)
    }

    #[test]
    fn ids_assigned_from_zero() {
        let mut t = JobTable::new();
        assert_eq!(t.insert(pid(100), "a".into()), 0);
        assert_eq!(t.insert(pid(101), "b".into()), 1);
        assert_eq!(t.insert(pid(102), "c".into()), 2);
    }

    #[test]
    fn recycles_lowest_free_id_after_removal() {
        let mut t = JobTable::new();
        let id0 = t.insert(pid(100), "a".into());
        let _id1 = t.insert(pid(101), "b".into());
        t.remove(id0);
        let reused = t.insert(pid(102), "c".into());
        assert_eq!(reused, 0);
    }

    #[test]
    fn sweep_finished_removes_only_finished_jobs() {
        let mut t = JobTable::new();
        let id0 = t.insert(pid(100), "a".into());
        let id1 = t.insert(pid(101), "b".into());
        t.mark_finished(pid(100), 0);
        t.sweep_finished();
        assert!(t.get(id0).is_none());
        assert!(t.get(id1).is_some());
    }

    #[test]
    fn most_recent_is_highest_running_id() {
        let mut t = JobTable::new();
        t.insert(pid(100), "a".into());
        let last = t.insert(pid(101), "b".into());
        assert_eq!(t.most_recent().unwrap().id, last);
    }

    #[test]
    fn lookup_missing_job_is_error() {
        let t = JobTable::new();
        assert!(t.lookup(9).is_err());
    }
}
