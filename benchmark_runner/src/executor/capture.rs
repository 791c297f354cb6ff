//!
//! Background capture of a child process output stream.
//!

use std::io::Read;
use std::sync::mpsc;
use std::sync::mpsc::Receiver;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Instant;

use super::error::Error;

///
/// Drains a child process pipe on a separate thread, so the child never blocks
/// on a full pipe while the executor waits for it.
///
pub struct Capture {
    /// The stream name, used in errors.
    stream: &'static str,
    /// Receives the stream contents at EOF, if the pipe was available.
    receiver: Option<Receiver<std::io::Result<Vec<u8>>>>,
}

impl Capture {
    ///
    /// Starts reading `pipe` until EOF.
    ///
    pub fn start<R>(stream: &'static str, pipe: Option<R>) -> Self
    where
        R: Read + Send + 'static,
    {
        let receiver = pipe.map(|mut pipe| {
            let (sender, receiver) = mpsc::channel();
            std::thread::spawn(move || {
                let mut buffer = Vec::new();
                let result = pipe.read_to_end(&mut buffer).map(|_| buffer);
                // The receiver is gone if the executor has given up waiting.
                let _ = sender.send(result);
            });
            receiver
        });
        Self { stream, receiver }
    }

    ///
    /// Waits for EOF until `deadline` and returns the captured text, or `None`
    /// if the pipe is still open by then.
    ///
    /// The pipe outlives the process if a process it spawned inherited it.
    /// Invalid UTF-8 sequences are replaced.
    ///
    pub fn finish(self, deadline: Instant) -> Result<Option<String>, Error> {
        let Some(receiver) = self.receiver else {
            return Ok(Some(String::new()));
        };
        let timeout = deadline.saturating_duration_since(Instant::now());
        let bytes = match receiver.recv_timeout(timeout) {
            Ok(result) => result.map_err(|error| Error::Capturing {
                error,
                stream: self.stream,
            })?,
            Err(RecvTimeoutError::Timeout) => return Ok(None),
            Err(RecvTimeoutError::Disconnected) => {
                return Err(Error::CapturePanicked {
                    stream: self.stream,
                })
            }
        };
        Ok(Some(String::from_utf8_lossy(bytes.as_slice()).into_owned()))
    }
}
