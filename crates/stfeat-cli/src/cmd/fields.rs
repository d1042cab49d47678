use clap::Args;
use stfeat_core::{DecodeConfig, FeatureKind};

use super::FeatureArg;

#[derive(Args, Debug)]
pub struct FieldsArgs {
    #[arg(long, value_enum)]
    pub feature: FeatureArg,
}

pub fn run(args: FieldsArgs) -> anyhow::Result<()> {
    let kind = FeatureKind::from(args.feature);
    let decoder = kind.decoder(DecodeConfig::default());

    println!("{} (min {} bytes)", kind.name(), kind.min_len());
    for f in decoder.fields() {
        let unit = if f.unit.is_empty() { "-" } else { f.unit };
        if f.is_bounded() {
            println!("  {:<6} {:<4} {:?} [{}, {}]", f.name, unit, f.field_type, f.min, f.max);
        } else {
            println!("  {:<6} {:<4} {:?}", f.name, unit, f.field_type);
        }
    }
    Ok(())
}
