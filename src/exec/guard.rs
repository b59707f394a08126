/// Scoped ownership of a candidate child process
///
/// The child is spawned as the leader of its own process group. Whatever path
/// leaves the runner (normal exit, timeout, early error), the guard makes sure
/// the group is signalled and the leader reaped before the handle is released.
use crate::exec::interrupt;
use nix::errno::Errno;
use nix::sys::signal::{killpg, Signal};
use nix::unistd::Pid;
use std::io;
use std::process::{Child, ExitStatus};
use std::time::{Duration, Instant};

/// Grace period between SIGTERM and SIGKILL
const TERM_GRACE: Duration = Duration::from_millis(200);

const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Signal escalation report for timeout/forced termination paths.
#[derive(Clone, Debug, Default)]
pub struct KillReport {
    pub term_sent: bool,
    pub kill_sent: bool,
    pub waited_ms: u64,
    pub notes: Vec<String>,
}

pub struct ChildGuard {
    child: Child,
    status: Option<ExitStatus>,
}

impl ChildGuard {
    /// Take ownership of `child`, which must lead its own process group
    pub fn new(child: Child) -> Self {
        interrupt::track(child.id() as i32);
        Self { child, status: None }
    }

    pub fn id(&self) -> u32 {
        self.child.id()
    }

    pub fn child_mut(&mut self) -> &mut Child {
        &mut self.child
    }

    fn group(&self) -> Pid {
        Pid::from_raw(self.child.id() as i32)
    }

    /// Non-blocking reap of the group leader
    pub fn try_wait(&mut self) -> io::Result<Option<ExitStatus>> {
        if let Some(status) = self.status {
            return Ok(Some(status));
        }
        let status = self.child.try_wait()?;
        self.status = status;
        Ok(status)
    }

    /// Poll until the leader exits or `deadline` passes
    pub fn wait_until(&mut self, deadline: Instant) -> io::Result<Option<ExitStatus>> {
        loop {
            if let Some(status) = self.try_wait()? {
                return Ok(Some(status));
            }
            if Instant::now() >= deadline {
                return Ok(None);
            }
            std::thread::sleep(POLL_INTERVAL);
        }
    }

    /// SIGTERM the group, give it a short grace, then SIGKILL and reap
    pub fn terminate(&mut self) -> KillReport {
        let mut report = KillReport::default();
        let start = Instant::now();
        let group = self.group();

        match killpg(group, Signal::SIGTERM) {
            Ok(()) => report.term_sent = true,
            Err(Errno::ESRCH) => report.notes.push("group already gone at SIGTERM".to_string()),
            Err(e) => {
                report.notes.push(format!("group SIGTERM failed: {e}"));
                if self.child.kill().is_ok() {
                    report.term_sent = true;
                }
            }
        }

        let grace_deadline = Instant::now() + TERM_GRACE;
        while Instant::now() < grace_deadline {
            if matches!(self.try_wait(), Ok(Some(_))) {
                break;
            }
            std::thread::sleep(POLL_INTERVAL);
        }

        // Descendants may outlive the leader, so the group is killed either way.
        match killpg(group, Signal::SIGKILL) {
            Ok(()) => report.kill_sent = true,
            Err(Errno::ESRCH) => {}
            Err(e) => {
                report.notes.push(format!("group SIGKILL failed: {e}"));
                if self.child.kill().is_ok() {
                    report.kill_sent = true;
                }
            }
        }

        if self.status.is_none() {
            match self.child.wait() {
                Ok(status) => self.status = Some(status),
                Err(e) => report.notes.push(format!("reap failed: {e}")),
            }
        }

        report.waited_ms = start.elapsed().as_millis() as u64;
        report
    }

    /// Kill anything left in the group after the leader exited normally
    pub fn reap_stragglers(&mut self) {
        match killpg(self.group(), Signal::SIGKILL) {
            Ok(()) => log::debug!("Killed leftover processes in group {}", self.id()),
            Err(Errno::ESRCH) => {}
            Err(e) => log::debug!("Group {} straggler kill failed: {}", self.id(), e),
        }
    }
}

impl Drop for ChildGuard {
    fn drop(&mut self) {
        interrupt::untrack(self.child.id() as i32);
        if self.status.is_none() {
            let report = self.terminate();
            log::warn!(
                "Child {} released without being reaped; terminated (term={}, kill={})",
                self.child.id(),
                report.term_sent,
                report.kill_sent
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::os::unix::process::CommandExt;
    use std::process::{Command, Stdio};

    fn spawn_sleeper() -> Child {
        Command::new("/bin/sh")
            .arg("-c")
            .arg("sleep 30")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .process_group(0)
            .spawn()
            .expect("spawn sleeper")
    }

    fn is_alive(pid: u32) -> bool {
        nix::sys::signal::kill(Pid::from_raw(pid as i32), None).is_ok()
    }

    #[test]
    fn test_terminate_reaps_running_child() {
        let _serial = interrupt::test_lock();
        let mut guard = ChildGuard::new(spawn_sleeper());
        let pid = guard.id();

        let report = guard.terminate();
        assert!(report.term_sent);
        assert!(guard.try_wait().unwrap().is_some());
        assert!(!is_alive(pid));
    }

    #[test]
    fn test_drop_terminates_unreaped_child() {
        let _serial = interrupt::test_lock();
        let pid = {
            let guard = ChildGuard::new(spawn_sleeper());
            guard.id()
        };
        assert!(!is_alive(pid));
    }

    #[test]
    fn test_wait_until_returns_status_for_fast_child() {
        let _serial = interrupt::test_lock();
        let child = Command::new("/bin/sh")
            .arg("-c")
            .arg("exit 3")
            .process_group(0)
            .spawn()
            .expect("spawn");
        let mut guard = ChildGuard::new(child);
        let status = guard
            .wait_until(Instant::now() + Duration::from_secs(5))
            .unwrap()
            .expect("child should exit");
        assert_eq!(status.code(), Some(3));
    }

    #[test]
    fn test_guard_tracks_group_until_dropped() {
        let _serial = interrupt::test_lock();
        let guard = ChildGuard::new(spawn_sleeper());
        let pid = guard.id() as i32;
        assert_eq!(interrupt::active_group(), Some(pid));
        drop(guard);
        assert_eq!(interrupt::active_group(), None);
    }
}
