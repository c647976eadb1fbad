//! Codec payload probes
//!
//! These look into elementary stream payloads for the few things the
//! classifier needs to describe a stream, currently the H.264 fmtp line.

pub mod h264;
mod utils;

pub use utils::{NalUnits, nal_units};
