use std::{sync::Arc, thread};

use mpegts_pes::{
    CodecRegistry, Kind, PesError, PesUnit, Rule, StreamType, Timestamp,
    constants::{PAYLOAD_TYPE_RAW, VIDEO_CLOCK_RATE},
    get_media,
    inspector::{Options, run},
};

/// Encodes a 33-bit timestamp the way a muxer writes it, marker bits set
fn timestamp(prefix: u8, ts: u64) -> [u8; 5] {
    [
        prefix << 4 | ((ts >> 29) & 0x0E) as u8 | 1,
        (ts >> 22) as u8,
        ((ts >> 14) & 0xFE) as u8 | 1,
        (ts >> 7) as u8,
        ((ts << 1) & 0xFE) as u8 | 1,
    ]
}

fn keyframe() -> Vec<u8> {
    let mut es = vec![0x00, 0x00, 0x00, 0x01, 0x09, 0xF0];
    es.extend_from_slice(&[0x00, 0x00, 0x00, 0x01, 0x67, 0x64, 0x00, 0x28, 0xAC, 0xD9]);
    es.extend_from_slice(&[0x00, 0x00, 0x00, 0x01, 0x68, 0xEB, 0xE3, 0xCB]);
    es.extend_from_slice(&[0x00, 0x00, 0x01, 0x65, 0x88, 0x84, 0x00, 0x33]);
    es
}

#[test]
fn h264_pts_only() {
    let es = keyframe();
    let mut raw = vec![0x80, 0x80, 0x05];
    raw.extend_from_slice(&timestamp(0b0010, 0x1_0000_0001));
    raw.extend_from_slice(&es);

    let pkt = PesUnit::new(StreamType::H264, 0xE0, raw).packet().unwrap();
    assert_eq!(pkt.stream_type, StreamType::H264);
    assert_eq!(pkt.pts, Some(Timestamp::from_ticks(0x1_0000_0001)));
    assert_eq!(pkt.dts, None);
    assert_eq!(&pkt.payload[..], &es[..]);

    let media = get_media(&pkt).unwrap();
    assert_eq!(media.kind, Kind::Video);
    let codec = media.codec().unwrap();
    assert_eq!(codec.clock_rate, 90_000);
    assert_eq!(
        codec.fmtp_line.as_deref(),
        Some("packetization-mode=1;sprop-parameter-sets=Z2QAKKzZ,aOvjyw==;profile-level-id=640028")
    );
}

#[test]
fn h264_pts_and_dts() {
    let mut raw = vec![0x84, 0xC0, 0x0A];
    raw.extend_from_slice(&timestamp(0b0011, 183_003));
    raw.extend_from_slice(&timestamp(0b0001, 180_000));
    raw.extend_from_slice(&[0x00, 0x00, 0x01, 0x41, 0x9A]);

    let pkt = PesUnit::new(0x1Bu8, 0xE0, raw).packet().unwrap();
    assert_eq!(pkt.pts.map(Timestamp::ticks), Some(183_003));
    assert_eq!(pkt.dts.map(Timestamp::ticks), Some(180_000));

    let media = get_media(&pkt).unwrap();
    assert_eq!(media.codec().unwrap().fmtp_line, None);
}

#[test]
fn pcma() {
    let mut raw = vec![0x81, 0x80, 0x05];
    raw.extend_from_slice(&timestamp(0b0010, 8_000));
    raw.extend_from_slice(&[0xD5; 160]);

    let pkt = PesUnit::new(StreamType::PCMA, 0xC0, raw).packet().unwrap();
    assert_eq!(pkt.payload.len(), 160);

    let media = get_media(&pkt).unwrap();
    assert_eq!(media.kind, Kind::Audio);
    assert_eq!(media.codec().unwrap().clock_rate, 8_000);
}

#[test]
fn unrecognized_stream_type_still_parses() {
    let pkt = PesUnit::new(0x06u8, 0xBD, vec![0x80u8, 0x00, 0x00, 0x47]).packet().unwrap();
    assert_eq!(&pkt.payload[..], &[0x47]);
    assert_eq!(get_media(&pkt), None);
}

#[test]
fn malformed_headers() {
    let cases: &[&[u8]] = &[
        &[],
        &[0x80],
        &[0x80, 0x80],
        &[0x80, 0x80, 0x05, 0x21, 0x00, 0x01, 0x00],
        &[0x80, 0x00, 0x10, 0x00],
    ];
    for raw in cases {
        let err = PesUnit::new(StreamType::H264, 0xE0, raw.to_vec()).packet().unwrap_err();
        assert!(matches!(err, PesError::Truncated { .. }), "{raw:02x?}: {err}");
        assert!(err.to_string().starts_with("malformed PES header"));
    }
}

#[test]
fn extra_rule_needs_no_parser_change() {
    fn probe(_: &[u8]) -> Option<String> {
        None
    }

    let registry = CodecRegistry::default().with(
        StreamType::H265,
        Rule::Video {
            codec: "H265",
            clock_rate: VIDEO_CLOCK_RATE,
            payload_type: PAYLOAD_TYPE_RAW,
            probe,
        },
    );

    let report = run(
        Options {
            stream_type: StreamType::H265,
            stream_id: 0xE0,
            payload: vec![0x80u8, 0x00, 0x00, 0x00, 0x00, 0x01, 0x40].into(),
        },
        &registry,
    )
    .unwrap();
    let media = report.media.unwrap();
    assert_eq!(media.kind, Kind::Video);
    assert_eq!(media.codec().unwrap().name, "H265");
}

#[test]
fn inspector_reports_malformed_unit() {
    let err = run(
        Options {
            stream_type: StreamType::H264,
            stream_id: 0xE0,
            payload: vec![0x80u8, 0xC0].into(),
        },
        &CodecRegistry::default(),
    )
    .unwrap_err();
    assert!(err.downcast_ref::<PesError>().is_some());
}

#[test]
fn parallel_decoding() {
    let registry = Arc::new(CodecRegistry::default());
    let handles: Vec<_> = (0..8u64)
        .map(|i| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                let mut raw = vec![0x80, 0x80, 0x05];
                raw.extend_from_slice(&timestamp(0b0010, i * 3_000));
                raw.extend_from_slice(&[0xD5; 80]);
                let pkt = PesUnit::new(StreamType::PCMA, 0xC0, raw).packet().unwrap();
                let media = registry.get_media(&pkt).unwrap();
                (pkt.pts.unwrap().ticks(), media.kind)
            })
        })
        .collect();

    for (i, h) in handles.into_iter().enumerate() {
        assert_eq!(h.join().unwrap(), (i as u64 * 3_000, Kind::Audio));
    }
}
