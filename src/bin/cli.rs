use anyhow::Context;
use clap::Parser;
use mpegts_pes::{
    CodecRegistry, StreamType,
    constants::PES_DEFAULT_STREAM_ID,
    inspector::{Options, run},
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[clap(about = "Decode one PES unit and print its elementary stream packet as JSON")]
struct Opt {
    /// PMT stream_type of the elementary stream (e.g. 0x1b for H.264, 0x90 for PCMA)
    #[clap(long, value_parser = parse_byte)]
    stream_type: u8,

    /// PES stream_id
    #[clap(long, value_parser = parse_byte, default_value_t = PES_DEFAULT_STREAM_ID)]
    stream_id: u8,

    /// File holding the PES unit, starting at the byte after PES_packet_length
    input: String,

    /// Treat INPUT as the PES unit itself, hex encoded
    #[clap(long, default_value_t = false)]
    hex: bool,

    /// Log filter, RUST_LOG syntax
    #[clap(long, default_value = "info")]
    log: String,
}

fn parse_byte(s: &str) -> Result<u8, String> {
    let res = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u8::from_str_radix(hex, 16),
        None => s.parse(),
    };
    res.map_err(|e| format!("{s}: {e}"))
}

fn parse_hex(s: &str) -> anyhow::Result<Vec<u8>> {
    hex::decode(s.split_whitespace().collect::<String>()).context("bad --hex input")
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let opt = Opt::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&opt.log).context("bad --log filter")?)
        .with_writer(std::io::stderr)
        .init();

    let payload = if opt.hex {
        parse_hex(&opt.input)?
    } else {
        tokio::fs::read(&opt.input)
            .await
            .with_context(|| format!("reading {}", opt.input))?
    };

    let report = run(
        Options {
            stream_type: StreamType::new(opt.stream_type),
            stream_id: opt.stream_id,
            payload: payload.into(),
        },
        &CodecRegistry::default(),
    )?;

    if report.media.is_none() {
        tracing::warn!(stream_type = opt.stream_type, "no codec registered for stream type");
    }
    println!("{}", report.to_json()?);
    Ok(())
}
