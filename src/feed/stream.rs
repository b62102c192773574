//! Feed reading records from a byte stream such as a TCP connection

use anyhow::{Context, Result};
use log::{debug, info};
use std::io::{ErrorKind, Read};
use std::net::{TcpStream, ToSocketAddrs};

use super::record::{decode, RECORD_LEN};
use super::{FeedError, FeedResult, VehicleFeed};
use crate::simulation::VehicleRecord;

const READ_CHUNK: usize = 1024;

/// Decodes records from a non-blocking reader
///
/// Partial records are kept until the rest of their bytes arrive. A reader
/// returning `WouldBlock` simply means nothing new has arrived. When the
/// stream ends or a record is malformed, the records decoded before it are
/// still returned and the error is reported by the following poll.
pub struct StreamFeed<S> {
    stream: S,
    pending: Vec<u8>,
    closed: Option<FeedError>,
}

pub type TcpFeed = StreamFeed<TcpStream>;

impl<S> StreamFeed<S> {
    pub fn new(stream: S) -> Self {
        Self {
            stream,
            pending: Vec::new(),
            closed: None,
        }
    }

    /// Bytes received that don't yet form a full record
    pub fn pending_bytes(&self) -> usize {
        self.pending.len()
    }
}

impl StreamFeed<TcpStream> {
    /// Connect to a running generator
    pub fn connect<A: ToSocketAddrs + std::fmt::Debug>(addr: A) -> Result<Self> {
        let stream = TcpStream::connect(&addr)
            .with_context(|| format!("Failed to connect to vehicle feed at {:?}", addr))?;
        stream
            .set_nonblocking(true)
            .context("Failed to make the vehicle feed non-blocking")?;
        info!("Connected to vehicle feed at {:?}", addr);
        Ok(Self::new(stream))
    }
}

impl<S: Read + Send + Sync> VehicleFeed for StreamFeed<S> {
    fn poll(&mut self) -> FeedResult<Vec<VehicleRecord>> {
        if let Some(e) = self.closed.take() {
            return Err(e);
        }

        let mut chunk = [0u8; READ_CHUNK];
        let mut failure = None;
        loop {
            match self.stream.read(&mut chunk) {
                Ok(0) => {
                    failure = Some(FeedError::Disconnected);
                    break;
                }
                Ok(read) => self.pending.extend_from_slice(&chunk[..read]),
                Err(e) if e.kind() == ErrorKind::WouldBlock => break,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => {
                    failure = Some(FeedError::Io(e));
                    break;
                }
            }
        }

        let complete = self.pending.len() / RECORD_LEN * RECORD_LEN;
        let mut records = Vec::with_capacity(complete / RECORD_LEN);
        for bytes in self.pending[..complete].chunks_exact(RECORD_LEN) {
            let mut frame = [0u8; RECORD_LEN];
            frame.copy_from_slice(bytes);
            match decode(&frame) {
                Ok(record) => {
                    debug!(
                        "Received vehicle {} on Road {} Lane {}",
                        record.id, record.road, record.lane
                    );
                    records.push(record);
                }
                Err(e) => {
                    // Nothing after a malformed record can be trusted
                    failure = Some(e);
                    break;
                }
            }
        }
        self.pending.drain(..complete);

        match failure {
            Some(e) if records.is_empty() => Err(e),
            Some(e) => {
                self.closed = Some(e);
                Ok(records)
            }
            None => Ok(records),
        }
    }
}
