use std::fmt;

use bytes::Bytes;
use serde::Serialize;

use crate::pes::Timestamp;

/// Codec family of an elementary stream, as signalled in the PMT
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct StreamType(u8);

impl StreamType {
    pub const MPEG2_VIDEO: StreamType = StreamType(0x02);
    pub const MPEG1_AUDIO: StreamType = StreamType(0x03);
    pub const MPEG2_AUDIO: StreamType = StreamType(0x04);
    pub const AAC_ADTS: StreamType = StreamType(0x0F);
    pub const AAC_LATM: StreamType = StreamType(0x11);
    pub const H264: StreamType = StreamType(0x1B);
    pub const H265: StreamType = StreamType(0x24);
    pub const AC3: StreamType = StreamType(0x81);
    pub const PCMA: StreamType = StreamType(0x90);

    pub const fn new(value: u8) -> Self {
        StreamType(value)
    }

    pub const fn as_u8(self) -> u8 {
        self.0
    }

    /// Short human readable name, "unk" for anything we do not know
    pub fn name(self) -> &'static str {
        match self {
            StreamType::MPEG2_VIDEO => "MPEG-2",
            StreamType::MPEG1_AUDIO | StreamType::MPEG2_AUDIO => "MP2",
            StreamType::AAC_ADTS => "AAC",
            StreamType::AAC_LATM => "AAC-LATM",
            StreamType::H264 => "H.264",
            StreamType::H265 => "HEVC",
            StreamType::AC3 => "AC-3",
            StreamType::PCMA => "PCMA",
            _ => "unk",
        }
    }
}

impl From<u8> for StreamType {
    fn from(value: u8) -> Self {
        StreamType(value)
    }
}

impl fmt::Display for StreamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:02X} ({})", self.0, self.name())
    }
}

/// Elementary stream packet: what is left of a PES unit once its header is gone
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Packet {
    pub stream_type: StreamType,
    pub pts: Option<Timestamp>,
    /// Only ever set together with `pts`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dts: Option<Timestamp>,
    pub payload: Bytes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Video,
    Audio,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Sendonly,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Codec {
    pub name: &'static str,
    pub clock_rate: u32,
    pub payload_type: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fmtp_line: Option<String>,
}

/// Media descriptor handed to the pipeline for a recognized stream
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Media {
    pub kind: Kind,
    pub direction: Direction,
    pub codecs: Vec<Codec>,
}

impl Media {
    /// The codec this media was built for
    pub fn codec(&self) -> Option<&Codec> {
        self.codecs.first()
    }
}
