use crate::error::{ProbeError, ProbeResult};
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;
use tracing::{debug, info};

/// Reads a stream front to back in fixed-size chunks.
///
/// Each call fills as much of the requested size as the stream allows; only
/// the final chunk may come back short. Chunks are never padded.
pub struct ChunkedReader<R: Read> {
    inner: R,
    chunk_size: usize,
    limit: Option<u64>,
    delivered: u64,
    exhausted: bool,
}

impl ChunkedReader<File> {
    /// Opens `path`, returning the reader and the file length.
    pub fn open<P: AsRef<Path>>(path: P, chunk_size: usize) -> ProbeResult<(Self, u64)> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            ProbeError::Io(std::io::Error::new(
                e.kind(),
                format!("could not open '{}': {}", path.display(), e),
            ))
        })?;
        let len = file.metadata()?.len();
        info!("Opened {} ({} bytes)", path.display(), len);
        Ok((Self::new(file, chunk_size)?, len))
    }
}

impl<R: Read> ChunkedReader<R> {
    pub fn new(inner: R, chunk_size: usize) -> ProbeResult<Self> {
        if chunk_size == 0 {
            return Err(ProbeError::Config(
                "chunk_size must be greater than zero".to_string(),
            ));
        }
        Ok(Self {
            inner,
            chunk_size,
            limit: None,
            delivered: 0,
            exhausted: false,
        })
    }

    /// Caps the total number of bytes handed out.
    pub fn with_limit(mut self, limit: Option<u64>) -> Self {
        self.limit = limit;
        self
    }

    pub fn delivered(&self) -> u64 {
        self.delivered
    }

    /// Replaces the contents of `buf` with the next chunk and returns its
    /// length. Zero means the stream is done.
    pub fn read_next_chunk(&mut self, buf: &mut Vec<u8>) -> ProbeResult<usize> {
        buf.clear();
        if self.exhausted {
            return Ok(0);
        }

        let want = match self.limit {
            Some(limit) => {
                let left = limit.saturating_sub(self.delivered);
                (self.chunk_size as u64).min(left) as usize
            }
            None => self.chunk_size,
        };
        if want == 0 {
            self.exhausted = true;
            return Ok(0);
        }

        buf.resize(want, 0);
        let mut filled = 0;
        while filled < want {
            match self.inner.read(&mut buf[filled..]) {
                Ok(0) => {
                    self.exhausted = true;
                    break;
                }
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
        buf.truncate(filled);

        self.delivered += filled as u64;
        debug!(filled, total = self.delivered, "read chunk");
        Ok(filled)
    }
}
