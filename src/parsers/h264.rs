//! H.264 parameter sets → SDP fmtp line

use base64::{Engine as _, engine::general_purpose};

use super::utils::nal_units;

mod nal_type {
    pub const NAL_SPS: u8 = 7;
    pub const NAL_PPS: u8 = 8;
}

/// Returns the NAL unit type of a NAL (start code already stripped)
pub fn nal_unit_type(nal: &[u8]) -> Option<u8> {
    nal.first().map(|b| b & 0x1F)
}

/// First SPS and PPS found in an Annex-B access unit
pub fn parameter_sets(data: &[u8]) -> (Option<&[u8]>, Option<&[u8]>) {
    let mut sps = None;
    let mut pps = None;
    for nal in nal_units(data) {
        match nal_unit_type(nal) {
            Some(nal_type::NAL_SPS) if sps.is_none() => sps = Some(nal),
            Some(nal_type::NAL_PPS) if pps.is_none() => pps = Some(nal),
            _ => {}
        }
        if sps.is_some() && pps.is_some() {
            break;
        }
    }
    (sps, pps)
}

/// Builds the fmtp line for an H.264 elementary stream payload.
///
/// Returns `None` until an access unit carrying both SPS and PPS shows up,
/// which usually means the first keyframe.
pub fn fmtp_line(data: &[u8]) -> Option<String> {
    let (Some(sps), Some(pps)) = parameter_sets(data) else {
        return None;
    };
    // profile_idc, constraint flags, level_idc
    let profile_level_id = sps.get(1..4)?;

    Some(format!(
        "packetization-mode=1;sprop-parameter-sets={},{};profile-level-id={:02x}{:02x}{:02x}",
        general_purpose::STANDARD.encode(sps),
        general_purpose::STANDARD.encode(pps),
        profile_level_id[0],
        profile_level_id[1],
        profile_level_id[2],
    ))
}
