//! Stream type → media descriptor

use std::{collections::HashMap, sync::LazyLock};

use tracing::debug;

use crate::{
    constants::{PAYLOAD_TYPE_PCMA, PAYLOAD_TYPE_RAW, PCMA_CLOCK_RATE, VIDEO_CLOCK_RATE},
    parsers,
    types::{Codec, Direction, Kind, Media, Packet, StreamType},
};

/// Looks at an elementary stream payload and returns codec format parameters, if any can be found yet
pub type Probe = fn(&[u8]) -> Option<String>;

/// How to build the codec description for a registered stream type
#[derive(Debug, Clone, Copy)]
pub enum Rule {
    /// Video; format parameters come from the payload
    Video {
        codec: &'static str,
        clock_rate: u32,
        payload_type: u8,
        probe: Probe,
    },
    /// Audio with a fixed sample clock, the payload is not inspected
    FixedAudio {
        codec: &'static str,
        clock_rate: u32,
        payload_type: u8,
    },
}

impl Rule {
    pub fn kind(&self) -> Kind {
        match self {
            Rule::Video { .. } => Kind::Video,
            Rule::FixedAudio { .. } => Kind::Audio,
        }
    }

    fn codec(&self, payload: &[u8]) -> Codec {
        match *self {
            Rule::Video {
                codec,
                clock_rate,
                payload_type,
                probe,
            } => Codec {
                name: codec,
                clock_rate,
                payload_type,
                fmtp_line: probe(payload),
            },
            Rule::FixedAudio {
                codec,
                clock_rate,
                payload_type,
            } => Codec {
                name: codec,
                clock_rate,
                payload_type,
                fmtp_line: None,
            },
        }
    }
}

/// Registry of the stream types we know how to describe
#[derive(Debug, Clone)]
pub struct CodecRegistry {
    rules: HashMap<StreamType, Rule>,
}

impl CodecRegistry {
    /// A registry without any rule
    pub fn empty() -> Self {
        Self {
            rules: HashMap::new(),
        }
    }

    /// Adds a rule, returning the one it replaces
    pub fn register(&mut self, stream_type: StreamType, rule: Rule) -> Option<Rule> {
        self.rules.insert(stream_type, rule)
    }

    pub fn with(mut self, stream_type: StreamType, rule: Rule) -> Self {
        self.register(stream_type, rule);
        self
    }

    pub fn rule(&self, stream_type: StreamType) -> Option<&Rule> {
        self.rules.get(&stream_type)
    }

    pub fn contains(&self, stream_type: StreamType) -> bool {
        self.rules.contains_key(&stream_type)
    }

    /// Describes the media carried by `pkt`, `None` for unknown stream types
    pub fn get_media(&self, pkt: &Packet) -> Option<Media> {
        let Some(rule) = self.rules.get(&pkt.stream_type) else {
            debug!(stream_type = %pkt.stream_type, "unrecognized stream type");
            return None;
        };

        Some(Media {
            kind: rule.kind(),
            direction: Direction::Sendonly,
            codecs: vec![rule.codec(&pkt.payload)],
        })
    }
}

impl Default for CodecRegistry {
    fn default() -> Self {
        Self::empty()
            .with(
                StreamType::H264,
                Rule::Video {
                    codec: "H264",
                    clock_rate: VIDEO_CLOCK_RATE,
                    payload_type: PAYLOAD_TYPE_RAW,
                    probe: parsers::h264::fmtp_line,
                },
            )
            .with(
                StreamType::PCMA,
                Rule::FixedAudio {
                    codec: "PCMA",
                    clock_rate: PCMA_CLOCK_RATE,
                    payload_type: PAYLOAD_TYPE_PCMA,
                },
            )
    }
}

static DEFAULT_REGISTRY: LazyLock<CodecRegistry> = LazyLock::new(CodecRegistry::default);

/// [`CodecRegistry::get_media`] with the default rules (H.264 and PCMA)
pub fn get_media(pkt: &Packet) -> Option<Media> {
    DEFAULT_REGISTRY.get_media(pkt)
}
