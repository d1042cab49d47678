// crates/stfeat-cli/src/io/jsonl.rs

use anyhow::Context;
use stfeat_core::Sample;

/// One sample per line: {"timestamp":N,"values":{"<field>":v,...}}
/// Non-finite values are written as null.
pub fn write_sample_stdout(sample: &Sample) -> anyhow::Result<()> {
    let line = serde_json::to_string(sample).context("serialize sample")?;
    println!("{line}");
    Ok(())
}
