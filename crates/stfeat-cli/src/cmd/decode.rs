use clap::{Args, ValueEnum};
use stfeat_core::{DecodeConfig, FeatureError, FeatureKind};

use super::{FeatureArg, PolicyArg};
use crate::io::{input, jsonl};

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    Text,
    Jsonl,
}

#[derive(Args, Debug)]
pub struct DecodeArgs {
    #[arg(long, value_enum)]
    pub feature: FeatureArg,

    /// Binary input file holding back-to-back feature records
    #[arg(long, conflicts_with = "hex", required_unless_present = "hex")]
    pub r#in: Option<String>,

    /// Input as hex (whitespace and ':' separators allowed)
    #[arg(long)]
    pub hex: Option<String>,

    /// Byte offset of the first record
    #[arg(long, default_value_t = 0)]
    pub offset: usize,

    /// Timestamp assigned to the first record
    #[arg(long, default_value_t = 0)]
    pub start_ts: u64,

    /// Timestamp increment between records
    #[arg(long, default_value_t = 1)]
    pub ts_step: u64,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Handling of an over-unit quaternion vector when the scalar is rebuilt
    #[arg(long, value_enum, default_value_t = PolicyArg::Propagate)]
    pub scalar_policy: PolicyArg,
}

pub fn run(args: DecodeArgs) -> anyhow::Result<()> {
    let bytes = match (&args.r#in, &args.hex) {
        (Some(path), _) => input::read_file(path)?,
        (None, Some(hex)) => input::parse_hex(hex)?,
        (None, None) => anyhow::bail!("one of --in or --hex is required"),
    };

    let kind = FeatureKind::from(args.feature);
    let cfg = DecodeConfig::default().with_scalar_policy(args.scalar_policy.into());
    let decoder = kind.decoder(cfg);

    let mut offset = args.offset;
    let mut ts = args.start_ts;
    let mut records = 0usize;

    loop {
        let out = match decoder.extract(ts, &bytes, offset) {
            Ok(out) => out,
            Err(FeatureError::InsufficientData { available, .. }) => {
                if available > 0 {
                    eprintln!("trailing_bytes = {} (short of one {} record)", available, kind.name());
                }
                break;
            }
            Err(e) => {
                return Err(anyhow::Error::new(e)
                    .context(format!("decode record {records} at offset {offset}")));
            }
        };

        match args.format {
            OutputFormat::Text => println!("{}", out.sample),
            OutputFormat::Jsonl => jsonl::write_sample_stdout(&out.sample)?,
        }

        offset += out.bytes_consumed;
        ts = ts.wrapping_add(args.ts_step);
        records += 1;
    }

    tracing::info!(feature = kind.name(), records, "decode done");
    eprintln!("decode ok: feature={} records={} bytes={}", kind.name(), records, bytes.len());
    Ok(())
}
