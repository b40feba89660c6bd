use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, ReadHalf, WriteHalf};
use tokio::sync::Mutex;

use chirp_parser::{parse, Message};

use crate::error::Error;
use crate::stream::Stream;

type BoxedStream = Box<dyn Stream>;

/// A live connection over one exclusively owned byte stream.
///
/// Reads are serialized against other reads and writes against other
/// writes, with two independent locks: a pending read never blocks an
/// outgoing line. No ordering is guaranteed between a read and a
/// concurrent write.
pub struct Connection {
    reader: Mutex<Option<BufReader<ReadHalf<BoxedStream>>>>,
    writer: Mutex<Option<WriteHalf<BoxedStream>>>,
}

impl Connection {
    /// Adopts an already-established stream. The connection takes exclusive
    /// ownership; closing the connection closes the stream.
    pub fn new<S: Stream + 'static>(stream: S) -> Self {
        let (read_half, write_half) = tokio::io::split(Box::new(stream) as BoxedStream);
        Self {
            reader: Mutex::new(Some(BufReader::new(read_half))),
            writer: Mutex::new(Some(write_half)),
        }
    }

    /// Reads the next message.
    ///
    /// Blocks until a full line-feed-terminated line is available, stitching
    /// partial reads together; a trailing carriage-return stays in the line.
    /// End of stream, including a clean one, is a transport error.
    pub async fn read_message(&self) -> Result<Message, Error> {
        let mut guard = self.reader.lock().await;
        let reader = guard.as_mut().ok_or(Error::Closed)?;

        let mut line = Vec::new();
        reader.read_until(b'\n', &mut line).await?;
        if line.pop() != Some(b'\n') {
            // the stream ended before a full line
            return Err(Error::Transport(std::io::ErrorKind::UnexpectedEof.into()));
        }

        let line = String::from_utf8_lossy(&line);
        log::trace!("<- {line}");
        Ok(parse(&line))
    }

    /// Writes raw bytes and returns the number of bytes written. The bytes
    /// land on the wire as one unit with respect to other writers of this
    /// connection.
    pub async fn write_raw(&self, bytes: &[u8]) -> Result<usize, Error> {
        let mut guard = self.writer.lock().await;
        let writer = guard.as_mut().ok_or(Error::Closed)?;

        writer.write_all(bytes).await?;
        writer.flush().await?;
        log::trace!("-> {} bytes", bytes.len());
        Ok(bytes.len())
    }

    /// Writes one line, appending the CRLF terminator. Same atomicity
    /// guarantee as [`write_raw`](Self::write_raw).
    pub async fn send_line(&self, line: &str) -> Result<(), Error> {
        let mut buf = Vec::with_capacity(line.len() + 2);
        buf.extend_from_slice(line.as_bytes());
        buf.extend_from_slice(b"\r\n");
        self.write_raw(&buf).await?;
        Ok(())
    }

    /// Shuts the stream down and releases it. One-way: every operation
    /// issued afterwards, including a second `close`, fails with
    /// [`Error::Closed`].
    ///
    /// Waits for in-flight operations to release their locks; not meant to
    /// be raced against callers expecting to keep using the connection.
    pub async fn close(&self) -> Result<(), Error> {
        let mut writer_guard = self.writer.lock().await;
        let mut reader_guard = self.reader.lock().await;
        let mut writer = writer_guard.take().ok_or(Error::Closed)?;
        reader_guard.take();
        drop(reader_guard);

        writer.shutdown().await?;
        Ok(())
    }
}
