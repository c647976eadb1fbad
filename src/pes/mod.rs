//! Packetized elementary stream units and their optional header.
//!
//! A [`PesUnit`] is what the demultiplexer hands over once a PES packet has been
//! collected from the transport stream: the stream type from the PMT, the PES
//! stream id and everything that follows the `PES_packet_length` field.
//!
//! ```text
//! [byte0][flags][header_data_length][optional fields ...][elementary stream ...]
//! ```
//!
//! [`PesUnit::packet`] strips that header and returns the elementary stream
//! [`Packet`](crate::types::Packet) together with its PTS / DTS.

mod timestamp;

pub use timestamp::{Timestamp, parse_time};

use bytes::Bytes;
use tracing::trace;

use crate::{
    constants::{PES_FLAG_DTS, PES_FLAG_PTS, PES_MIN_HEADER_SIZE, PES_TIMESTAMP_SIZE},
    error::PesError,
    types::{Packet, StreamType},
};

/// PES - Packetized Elementary Stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PesUnit {
    pub stream_type: StreamType,
    pub stream_id: u8,
    pub payload: Bytes,
}

impl PesUnit {
    pub fn new(stream_type: impl Into<StreamType>, stream_id: u8, payload: impl Into<Bytes>) -> Self {
        Self {
            stream_type: stream_type.into(),
            stream_id,
            payload: payload.into(),
        }
    }

    /// Parses the optional PES header.
    ///
    /// The returned payload shares memory with `self.payload`. A DTS flag
    /// without the PTS flag is ignored, so such a packet carries neither.
    ///
    /// # Errors
    ///
    /// [`PesError::Truncated`] if the buffer is shorter than the fields the
    /// header declares. Timestamps are read at their fixed offsets whatever
    /// `header_data_length` says.
    pub fn packet(&self) -> Result<Packet, PesError> {
        let b = &self.payload[..];
        if b.len() < PES_MIN_HEADER_SIZE {
            return Err(PesError::truncated("PES header", PES_MIN_HEADER_SIZE, b.len()));
        }

        // first byte also flags ('10', scrambling, priority, alignment, copyright, original)
        let flags = b[1];
        let header_len = b[2];

        let mut pts = None;
        let mut dts = None;

        if flags & PES_FLAG_PTS != 0 {
            pts = Some(self.field("PTS", PES_MIN_HEADER_SIZE)?);
            if flags & PES_FLAG_DTS != 0 {
                dts = Some(self.field("DTS", PES_MIN_HEADER_SIZE + PES_TIMESTAMP_SIZE)?);
            }
        }

        let start = PES_MIN_HEADER_SIZE + header_len as usize;
        if b.len() < start {
            return Err(PesError::truncated("PES optional fields", start, b.len()));
        }

        let packet = Packet {
            stream_type: self.stream_type,
            pts,
            dts,
            payload: self.payload.slice(start..),
        };
        trace!(
            stream_type = %packet.stream_type,
            stream_id = self.stream_id,
            pts = ?packet.pts.map(Timestamp::ticks),
            dts = ?packet.dts.map(Timestamp::ticks),
            len = packet.payload.len(),
            "PES packet"
        );
        Ok(packet)
    }

    fn field(&self, name: &'static str, offset: usize) -> Result<Timestamp, PesError> {
        let need = offset + PES_TIMESTAMP_SIZE;
        match self.payload.get(offset..need) {
            Some(raw) => parse_time(raw),
            None => Err(PesError::truncated(name, need, self.payload.len())),
        }
    }
}
