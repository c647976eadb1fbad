//! JSON report for a decoded PES unit

use serde::Serialize;

use crate::pes::Timestamp;
use crate::types::{Media, Packet};

/// Timestamp in both raw ticks and seconds
#[derive(Debug, Clone, Serialize)]
pub struct TimeJson {
    pub ticks: u64,
    pub seconds: f64,
}

impl From<Timestamp> for TimeJson {
    fn from(ts: Timestamp) -> Self {
        Self {
            ticks: ts.ticks(),
            seconds: ts.as_secs_f64(),
        }
    }
}

/// Snapshot of one decoded packet and what the classifier made of it
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub ts_time: String,
    pub stream_type: u8,
    pub stream_type_name: &'static str,
    pub stream_id: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pts: Option<TimeJson>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dts: Option<TimeJson>,
    pub payload_len: usize,
    pub media: Option<Media>,
}

impl Report {
    pub fn new(stream_id: u8, pkt: &Packet, media: Option<Media>) -> Self {
        Self {
            ts_time: chrono::Utc::now().to_rfc3339(),
            stream_type: pkt.stream_type.as_u8(),
            stream_type_name: pkt.stream_type.name(),
            stream_id,
            pts: pkt.pts.map(TimeJson::from),
            dts: pkt.dts.map(TimeJson::from),
            payload_len: pkt.payload.len(),
            media,
        }
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
