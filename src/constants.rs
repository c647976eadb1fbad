//! Constants for MPEG-TS PES decoding and codec classification

/// Mandatory part of the optional PES header: marker/flags byte, flags, header_data_length
pub const PES_MIN_HEADER_SIZE: usize = 3;
/// PTS / DTS fields are 5 bytes each (33 bits + 3 marker bits + 4 prefix bits)
pub const PES_TIMESTAMP_SIZE: usize = 5;

/// PTS_DTS_flags inside the second header byte
pub const PES_FLAG_PTS: u8 = 0b1000_0000;
pub const PES_FLAG_DTS: u8 = 0b0100_0000;

/// Stream id used when the caller does not know better (first video stream)
pub const PES_DEFAULT_STREAM_ID: u8 = 0xE0;

/// PTS constants
pub const PTS_CLOCK_HZ: u64 = 90_000; // 90 kHz
pub const PTS_WRAP_THRESHOLD: u64 = 1u64 << 33; // 33-bit PTS counter

/// Media clock rates
pub const VIDEO_CLOCK_RATE: u32 = 90_000;
pub const PCMA_CLOCK_RATE: u32 = 8_000;

/// RTP payload types
pub const PAYLOAD_TYPE_PCMA: u8 = 8; // static, RFC 3551
pub const PAYLOAD_TYPE_RAW: u8 = 255; // no RTP packetization, raw access units
