//! PTS / DTS fields of the optional PES header (ISO/IEC 13818-1, 2.4.3.7)

use std::{fmt, io, time::Duration};

use bitstream_io::{BigEndian, BitRead, BitReader};
use serde::Serialize;

use crate::{
    constants::{PES_TIMESTAMP_SIZE, PTS_CLOCK_HZ, PTS_WRAP_THRESHOLD},
    error::PesError,
};

/// 33-bit count of 90 kHz system clock ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize)]
#[serde(transparent)]
pub struct Timestamp(u64);

impl Timestamp {
    pub const MAX: Timestamp = Timestamp(PTS_WRAP_THRESHOLD - 1);

    /// Values wider than 33 bits are truncated, as on the wire.
    pub const fn from_ticks(ticks: u64) -> Self {
        Timestamp(ticks & (PTS_WRAP_THRESHOLD - 1))
    }

    pub const fn ticks(self) -> u64 {
        self.0
    }

    pub fn as_duration(self) -> Duration {
        let secs = self.0 / PTS_CLOCK_HZ;
        let rem = self.0 % PTS_CLOCK_HZ;
        Duration::new(secs, (rem * 1_000_000_000 / PTS_CLOCK_HZ) as u32)
    }

    pub fn as_secs_f64(self) -> f64 {
        self.0 as f64 / PTS_CLOCK_HZ as f64
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.6}s)", self.0, self.as_secs_f64())
    }
}

/// Decodes the 5-byte timestamp field at the start of `b`.
///
/// Layout, MSB first:
///
/// ```text
/// prefix:4 ts[32..30]:3 marker:1 | ts[29..15]:15 marker:1 | ts[14..0]:15 marker:1
/// ```
///
/// Prefix and marker bits are skipped, never checked.
pub fn parse_time(b: &[u8]) -> Result<Timestamp, PesError> {
    let field = b
        .get(..PES_TIMESTAMP_SIZE)
        .ok_or_else(|| PesError::truncated("timestamp", PES_TIMESTAMP_SIZE, b.len()))?;

    // exactly 40 bits are available, the reader cannot run dry
    let ticks = read_fields(&mut BitReader::endian(field, BigEndian))
        .map_err(|_| PesError::truncated("timestamp", PES_TIMESTAMP_SIZE, field.len()))?;
    Ok(Timestamp(ticks))
}

fn read_fields<R: io::Read>(br: &mut BitReader<R, BigEndian>) -> io::Result<u64> {
    br.skip(4)?; // '0010' / '0011' / '0001'
    let hi = br.read::<3, u64>()?;
    br.skip(1)?;
    let mid = br.read::<15, u64>()?;
    br.skip(1)?;
    let lo = br.read::<15, u64>()?;
    br.skip(1)?;
    Ok(hi << 30 | mid << 15 | lo)
}
