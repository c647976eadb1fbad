// src/lib.rs
//! Elementary stream extraction from MPEG-TS PES units, plus codec
//! classification of the resulting packets.
//!
//! ```no_run
//! use mpegts_pes::{PesUnit, StreamType, get_media};
//!
//! # fn main() -> Result<(), mpegts_pes::PesError> {
//! let unit = PesUnit::new(StreamType::PCMA, 0xC0, vec![0x80u8, 0x00, 0x00, 0xD5, 0xD5]);
//! let pkt = unit.packet()?;
//! let media = get_media(&pkt);
//! # Ok(())
//! # }
//! ```

pub mod classifier;
pub mod constants;
pub mod error;
pub mod parsers;
pub mod pes;
pub mod report;
pub mod types;

pub use classifier::{CodecRegistry, Rule, get_media};
pub use error::PesError;
pub use pes::{PesUnit, Timestamp, parse_time};
pub use types::{Codec, Direction, Kind, Media, Packet, StreamType};

pub mod inspector {
    use bytes::Bytes;

    use crate::{classifier::CodecRegistry, pes::PesUnit, report::Report, types::StreamType};

    pub struct Options {
        pub stream_type: StreamType,
        pub stream_id: u8,
        pub payload: Bytes,
    }

    /// Decodes one PES unit and describes it; fails on a malformed header
    pub fn run(opts: Options, registry: &CodecRegistry) -> anyhow::Result<Report> {
        let unit = PesUnit::new(opts.stream_type, opts.stream_id, opts.payload);
        let pkt = unit.packet()?;
        let media = registry.get_media(&pkt);
        Ok(Report::new(unit.stream_id, &pkt, media))
    }
}
