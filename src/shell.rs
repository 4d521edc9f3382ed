//! Process-wide mutable state threaded through the executor.

use crate::alias::AliasStore;
use crate::job::JobTable;

pub struct Shell {
    pub aliases: AliasStore,
    pub jobs: JobTable,
    pub oldpwd: Option<String>,
    pub last_status: i32,
    pub pid: i32,
}

impl Shell {
    pub fn new() -> Self {
        Self {
            aliases: AliasStore::new(),
            jobs: JobTable::new(),
            oldpwd: None,
            last_status: 0,
            pid: std::process::id() as i32,
        }
    }

    pub fn cwd(&self) -> std::io::Result<std::path::PathBuf> {
        std::env::current_dir()
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}
