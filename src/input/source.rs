//! Terminal byte source with signal wake-ups
//!
//! The event loop blocks in [`InputSource::wait`], which polls the tty and a
//! self-pipe written by the signal handlers. A resize or termination signal
//! therefore wakes the loop even while no key is pressed.

use std::fs::{File, OpenOptions};
use std::io::{self, Read};
use std::os::fd::AsFd;
use std::os::unix::net::UnixStream;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use nix::poll::{PollFd, PollFlags, PollTimeout};
use signal_hook::consts::signal::{SIGHUP, SIGINT, SIGTERM, SIGWINCH};
use signal_hook::SigId;

use super::decode::READ_BUFFER_SIZE;

/// Why [`InputSource::wait`] returned
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Wake {
    /// Raw bytes from one tty read
    Input(Vec<u8>),
    /// SIGWINCH: the terminal was resized
    Resize,
    /// SIGTERM, SIGHUP, SIGINT or tty hangup
    Terminate,
    /// Nothing happened before the timeout
    Timeout,
}

/// Unbuffered tty reader merged with a signal self-pipe
pub struct InputSource {
    tty: File,
    wake_read: UnixStream,
    resized: Arc<AtomicBool>,
    terminate: Arc<AtomicBool>,
    interrupted: Arc<AtomicBool>,
    signal_ids: Vec<SigId>,
}

impl InputSource {
    /// Open the controlling terminal for reading.
    pub fn open() -> io::Result<Self> {
        let tty = OpenOptions::new().read(true).open("/dev/tty")?;
        Self::with_reader(tty)
    }

    /// Use an already open file as the byte source.
    pub fn with_reader(tty: File) -> io::Result<Self> {
        let (wake_read, wake_write) = UnixStream::pair()?;
        wake_read.set_nonblocking(true)?;
        wake_write.set_nonblocking(true)?;

        let resized = Arc::new(AtomicBool::new(false));
        let terminate = Arc::new(AtomicBool::new(false));
        let interrupted = Arc::new(AtomicBool::new(false));

        let mut signal_ids = Vec::new();
        signal_ids.push(signal_hook::flag::register(SIGWINCH, Arc::clone(&resized))?);
        for signal in [SIGTERM, SIGHUP] {
            signal_ids.push(signal_hook::flag::register(signal, Arc::clone(&terminate))?);
        }
        signal_ids.push(signal_hook::flag::register(SIGINT, Arc::clone(&interrupted))?);
        for signal in [SIGWINCH, SIGTERM, SIGHUP, SIGINT] {
            signal_ids.push(signal_hook::low_level::pipe::register(
                signal,
                wake_write.try_clone()?,
            )?);
        }

        Ok(Self {
            tty,
            wake_read,
            resized,
            terminate,
            interrupted,
            signal_ids,
        })
    }

    /// Block until input arrives, a signal is delivered or `timeout` passes.
    ///
    /// `None` waits indefinitely.
    pub fn wait(&mut self, timeout: Option<Duration>) -> io::Result<Wake> {
        if let Some(wake) = self.pending_signal() {
            return Ok(wake);
        }

        let timeout = match timeout {
            Some(t) => PollTimeout::from(u16::try_from(t.as_millis()).unwrap_or(u16::MAX)),
            None => PollTimeout::NONE,
        };

        let (tty_ready, signal_ready) = {
            let mut poll_fds = [
                PollFd::new(self.tty.as_fd(), PollFlags::POLLIN),
                PollFd::new(self.wake_read.as_fd(), PollFlags::POLLIN),
            ];
            match nix::poll::poll(&mut poll_fds, timeout) {
                Ok(0) => return Ok(Wake::Timeout),
                Ok(_) => {}
                Err(nix::errno::Errno::EINTR) => {
                    return Ok(self.pending_signal().unwrap_or(Wake::Timeout))
                }
                Err(e) => return Err(io::Error::other(e)),
            }
            (is_ready(&poll_fds[0]), is_ready(&poll_fds[1]))
        };

        if signal_ready {
            self.drain_wake_pipe();
            if let Some(wake) = self.pending_signal() {
                return Ok(wake);
            }
        }

        if tty_ready {
            let mut buf = [0u8; READ_BUFFER_SIZE];
            return match self.tty.read(&mut buf) {
                Ok(0) => Ok(Wake::Terminate),
                Ok(n) => Ok(Wake::Input(buf[..n].to_vec())),
                Err(e)
                    if matches!(
                        e.kind(),
                        io::ErrorKind::WouldBlock | io::ErrorKind::Interrupted
                    ) =>
                {
                    Ok(Wake::Timeout)
                }
                Err(e) => Err(e),
            };
        }

        Ok(Wake::Timeout)
    }

    /// Forget interrupts and resizes that arrived while a child process
    /// owned the terminal.
    ///
    /// Ctrl-C inside a spawned shell reaches the whole foreground process
    /// group, including us. SIGTERM and SIGHUP stay pending.
    pub fn discard_pending_signals(&mut self) {
        self.drain_wake_pipe();
        self.interrupted.store(false, Ordering::SeqCst);
        self.resized.store(false, Ordering::SeqCst);
    }

    fn pending_signal(&self) -> Option<Wake> {
        if self.terminate.load(Ordering::SeqCst) || self.interrupted.load(Ordering::SeqCst) {
            Some(Wake::Terminate)
        } else if self.resized.swap(false, Ordering::SeqCst) {
            Some(Wake::Resize)
        } else {
            None
        }
    }

    fn drain_wake_pipe(&mut self) {
        let mut buf = [0u8; 64];
        while matches!(self.wake_read.read(&mut buf), Ok(n) if n > 0) {}
    }
}

impl Drop for InputSource {
    fn drop(&mut self) {
        for id in self.signal_ids.drain(..) {
            signal_hook::low_level::unregister(id);
        }
    }
}

fn is_ready(fd: &PollFd<'_>) -> bool {
    fd.revents().is_some_and(|r| {
        r.intersects(PollFlags::POLLIN | PollFlags::POLLHUP | PollFlags::POLLERR)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Seek, SeekFrom, Write};

    fn source_with(bytes: &[u8]) -> InputSource {
        let mut file = tempfile::tempfile().unwrap();
        file.write_all(bytes).unwrap();
        file.seek(SeekFrom::Start(0)).unwrap();
        InputSource::with_reader(file).unwrap()
    }

    #[test]
    fn test_wait_returns_available_bytes() {
        let mut source = source_with(b"\x1b[A");
        let wake = source.wait(Some(Duration::from_millis(100))).unwrap();
        assert_eq!(wake, Wake::Input(b"\x1b[A".to_vec()));
    }

    #[test]
    fn test_end_of_input_terminates() {
        let mut source = source_with(b"");
        let wake = source.wait(Some(Duration::from_millis(100))).unwrap();
        assert_eq!(wake, Wake::Terminate);
    }

    #[test]
    fn test_pending_resize_comes_before_input() {
        let mut source = source_with(b"x");
        source.resized.store(true, Ordering::SeqCst);
        let wake = source.wait(Some(Duration::from_millis(100))).unwrap();
        assert_eq!(wake, Wake::Resize);
        let wake = source.wait(Some(Duration::from_millis(100))).unwrap();
        assert_eq!(wake, Wake::Input(b"x".to_vec()));
    }

    #[test]
    fn test_pending_interrupt_terminates() {
        let mut source = source_with(b"x");
        source.interrupted.store(true, Ordering::SeqCst);
        let wake = source.wait(Some(Duration::from_millis(100))).unwrap();
        assert_eq!(wake, Wake::Terminate);
    }

    #[test]
    fn test_discard_pending_signals() {
        let mut source = source_with(b"x");
        source.interrupted.store(true, Ordering::SeqCst);
        source.resized.store(true, Ordering::SeqCst);
        source.discard_pending_signals();
        let wake = source.wait(Some(Duration::from_millis(100))).unwrap();
        assert_eq!(wake, Wake::Input(b"x".to_vec()));
    }

    #[test]
    fn test_termination_survives_discard() {
        let mut source = source_with(b"x");
        source.terminate.store(true, Ordering::SeqCst);
        source.discard_pending_signals();
        let wake = source.wait(Some(Duration::from_millis(100))).unwrap();
        assert_eq!(wake, Wake::Terminate);
    }
}
