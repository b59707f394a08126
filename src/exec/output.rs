/// Bounded stdout/stderr collection for candidate processes
///
/// Each stream is drained on its own thread so a chatty child can never block
/// on a full pipe while the runner is polling it. Results come back over
/// bounded channels with a receive timeout, so a pipe held open by a stray
/// descendant cannot hang the engine.
use crate::config::types::{OutputIntegrity, OutputLimits};
use crossbeam_channel::{self, Receiver, RecvTimeoutError};
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::process::{ChildStderr, ChildStdout};
use std::thread;
use std::time::Duration;

/// Text captured from one candidate run, as seen by grading predicates
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapturedOutput {
    pub stdout: String,
    pub stderr: String,
}

impl CapturedOutput {
    pub fn new(stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }

    /// Decode raw stream bytes lossily and trim surrounding whitespace
    pub fn from_raw(stdout: &[u8], stderr: &[u8]) -> Self {
        Self {
            stdout: String::from_utf8_lossy(stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(stderr).trim().to_string(),
        }
    }
}

/// Raw collection result
#[derive(Debug, Clone, Default)]
pub struct CollectedOutput {
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
    pub stdout_integrity: OutputIntegrity,
    pub stderr_integrity: OutputIntegrity,
}

impl CollectedOutput {
    /// Worst integrity of the two streams
    pub fn combined_integrity(&self) -> OutputIntegrity {
        fn rank(i: OutputIntegrity) -> u8 {
            match i {
                OutputIntegrity::Complete => 0,
                OutputIntegrity::TruncatedByLimit => 1,
                OutputIntegrity::ReadError => 2,
                OutputIntegrity::CollectorTimeout => 3,
            }
        }
        if rank(self.stdout_integrity) >= rank(self.stderr_integrity) {
            self.stdout_integrity
        } else {
            self.stderr_integrity
        }
    }

    pub fn captured(&self) -> CapturedOutput {
        CapturedOutput::from_raw(&self.stdout, &self.stderr)
    }
}

type StreamResult = (Vec<u8>, OutputIntegrity);

/// Output collector with bounded collection
pub struct OutputCollector {
    limits: OutputLimits,
}

/// Collectors that have been started and not yet joined
pub struct PendingOutput {
    stdout_rx: Option<Receiver<StreamResult>>,
    stderr_rx: Option<Receiver<StreamResult>>,
    collection_timeout: Duration,
}

impl OutputCollector {
    pub fn new(limits: OutputLimits) -> Self {
        OutputCollector { limits }
    }

    /// Start draining both pipes; call [`PendingOutput::finish`] once the child is gone
    pub fn start(&self, stdout: Option<ChildStdout>, stderr: Option<ChildStderr>) -> PendingOutput {
        PendingOutput {
            stdout_rx: stdout.map(|s| spawn_collector("stdout", s, self.limits.stdout_limit)),
            stderr_rx: stderr.map(|s| spawn_collector("stderr", s, self.limits.stderr_limit)),
            collection_timeout: Duration::from_millis(self.limits.collection_timeout_ms),
        }
    }
}

impl PendingOutput {
    pub fn finish(self) -> CollectedOutput {
        let (stdout, stdout_integrity) = receive("stdout", self.stdout_rx, self.collection_timeout);
        let (stderr, stderr_integrity) = receive("stderr", self.stderr_rx, self.collection_timeout);
        CollectedOutput {
            stdout,
            stderr,
            stdout_integrity,
            stderr_integrity,
        }
    }
}

fn receive(name: &str, rx: Option<Receiver<StreamResult>>, timeout: Duration) -> StreamResult {
    let Some(rx) = rx else {
        return (Vec::new(), OutputIntegrity::Complete);
    };
    match rx.recv_timeout(timeout) {
        Ok(result) => result,
        Err(RecvTimeoutError::Timeout) => {
            log::warn!("{} collector did not finish within {:?}; pipe still held open", name, timeout);
            (Vec::new(), OutputIntegrity::CollectorTimeout)
        }
        Err(RecvTimeoutError::Disconnected) => {
            log::warn!("{} collector thread exited without a result", name);
            (Vec::new(), OutputIntegrity::ReadError)
        }
    }
}

fn spawn_collector<R: Read + Send + 'static>(
    name: &'static str,
    stream: R,
    limit: usize,
) -> Receiver<StreamResult> {
    let (tx, rx) = crossbeam_channel::bounded(1);
    let spawned = thread::Builder::new()
        .name(format!("collect-{name}"))
        .spawn(move || {
            let _ = tx.send(collect_stream(stream, limit));
        });
    if let Err(e) = spawned {
        log::warn!("Failed to spawn {} collector: {}", name, e);
    }
    rx
}

/// Read a stream to EOF, keeping at most `limit` bytes.
///
/// Bytes past the limit are drained and discarded so the writer never blocks.
fn collect_stream<R: Read>(mut stream: R, limit: usize) -> StreamResult {
    let mut buffer = Vec::new();
    let mut chunk = [0u8; 4096];
    let mut integrity = OutputIntegrity::Complete;

    loop {
        match stream.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => {
                let room = limit.saturating_sub(buffer.len());
                if n > room {
                    buffer.extend_from_slice(&chunk[..room]);
                    integrity = OutputIntegrity::TruncatedByLimit;
                } else {
                    buffer.extend_from_slice(&chunk[..n]);
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(_) => {
                integrity = OutputIntegrity::ReadError;
                break;
            }
        }
    }

    (buffer, integrity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_collect_stream_within_limit() {
        let (data, integrity) = collect_stream(Cursor::new(b"hello\n".to_vec()), 64);
        assert_eq!(data, b"hello\n");
        assert_eq!(integrity, OutputIntegrity::Complete);
    }

    #[test]
    fn test_collect_stream_truncates_but_drains() {
        let input = vec![b'x'; 10_000];
        let (data, integrity) = collect_stream(Cursor::new(input), 100);
        assert_eq!(data.len(), 100);
        assert_eq!(integrity, OutputIntegrity::TruncatedByLimit);
    }

    #[test]
    fn test_captured_output_is_trimmed_and_lossy() {
        let captured = CapturedOutput::from_raw(b"  out\n\n", b"\xffbad\n");
        assert_eq!(captured.stdout, "out");
        assert_eq!(captured.stderr, "\u{fffd}bad");
    }

    #[test]
    fn test_no_streams_collects_nothing() {
        let collector = OutputCollector::new(OutputLimits::default());
        let collected = collector.start(None, None).finish();
        assert!(collected.stdout.is_empty());
        assert!(collected.stderr.is_empty());
        assert_eq!(collected.combined_integrity(), OutputIntegrity::Complete);
    }

    #[test]
    fn test_combined_integrity_prefers_worst_stream() {
        let collected = CollectedOutput {
            stdout_integrity: OutputIntegrity::Complete,
            stderr_integrity: OutputIntegrity::TruncatedByLimit,
            ..Default::default()
        };
        assert_eq!(collected.combined_integrity(), OutputIntegrity::TruncatedByLimit);
    }
}
