/// Termination-signal handling for the engine process
///
/// Candidates run in their own process group, so a terminal Ctrl-C during
/// grading reaches only the engine. The handler kills the group of the child
/// currently being graded, then lets the signal take its default action.
use crate::config::types::Result;
use nix::sys::signal::{self, SaFlags, SigAction, SigHandler, SigSet, Signal};
use nix::unistd::Pid;
use std::os::raw::c_int;
use std::sync::atomic::{AtomicI32, Ordering};

/// Process group of the candidate being graded, 0 when idle
static ACTIVE_GROUP: AtomicI32 = AtomicI32::new(0);

/// Record `pgid` as the group to kill on interrupt
pub fn track(pgid: i32) {
    ACTIVE_GROUP.store(pgid, Ordering::SeqCst);
}

/// Forget `pgid` if it is still the tracked group
pub fn untrack(pgid: i32) {
    let _ = ACTIVE_GROUP.compare_exchange(pgid, 0, Ordering::SeqCst, Ordering::SeqCst);
}

pub fn active_group() -> Option<i32> {
    match ACTIVE_GROUP.load(Ordering::SeqCst) {
        0 => None,
        pgid => Some(pgid),
    }
}

/// SIGKILL the tracked group, if any. Async-signal-safe: one atomic swap and one syscall.
pub fn kill_active_group() -> bool {
    let pgid = ACTIVE_GROUP.swap(0, Ordering::SeqCst);
    pgid > 0 && signal::killpg(Pid::from_raw(pgid), Signal::SIGKILL).is_ok()
}

/// Install handlers for SIGINT, SIGTERM and SIGHUP
pub fn install_handlers() -> Result<()> {
    let action = SigAction::new(
        SigHandler::Handler(on_termination_signal),
        SaFlags::SA_RESTART,
        SigSet::empty(),
    );

    for sig in [Signal::SIGINT, Signal::SIGTERM, Signal::SIGHUP] {
        unsafe { signal::sigaction(sig, &action) }.map_err(std::io::Error::from)?;
    }

    log::debug!("Signal handlers installed (SIGINT, SIGTERM, SIGHUP)");
    Ok(())
}

/// No allocation, no locks, no I/O
extern "C" fn on_termination_signal(raw: c_int) {
    kill_active_group();

    let Ok(sig) = Signal::try_from(raw) else {
        return;
    };
    let default = SigAction::new(SigHandler::SigDfl, SaFlags::empty(), SigSet::empty());
    unsafe {
        let _ = signal::sigaction(sig, &default);
    }
    let _ = signal::raise(sig);
}

/// Serialises unit tests that touch the process-wide tracked group
#[cfg(test)]
pub(crate) fn test_lock() -> std::sync::MutexGuard<'static, ()> {
    static LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
    LOCK.lock().unwrap_or_else(|e| e.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::os::unix::process::CommandExt;
    use std::process::{Command, Stdio};
    use std::time::{Duration, Instant};

    #[test]
    fn test_untrack_ignores_stale_group() {
        let _serial = test_lock();
        track(4242);
        untrack(1111);
        assert_eq!(active_group(), Some(4242));
        untrack(4242);
        assert_eq!(active_group(), None);
    }

    #[test]
    fn test_kill_active_group_stops_tracked_child() {
        let _serial = test_lock();
        let mut child = Command::new("/bin/sh")
            .arg("-c")
            .arg("sleep 30")
            .stdout(Stdio::null())
            .process_group(0)
            .spawn()
            .expect("spawn sleeper");
        let pgid = child.id() as i32;

        track(pgid);
        assert!(kill_active_group());
        assert_eq!(active_group(), None);

        let deadline = Instant::now() + Duration::from_secs(5);
        let status = loop {
            if let Some(status) = child.try_wait().unwrap() {
                break status;
            }
            assert!(Instant::now() < deadline, "tracked child survived");
            std::thread::sleep(Duration::from_millis(10));
        };
        assert!(!status.success());
        assert!(!kill_active_group());
    }
}
