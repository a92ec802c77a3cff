use anyhow::Result;
use betasdk::models::GraphType;

use super::catalog::{self, Decoded};
use crate::argsets::DecodeArgs;
use crate::helpers::read_payload;

pub fn decode(args: DecodeArgs) -> Result<()> {
    let decoder = catalog::decoder(&args.type_name)?;
    let payload = read_payload(args.input.as_deref())?;
    let model = catalog::decode_with(decoder, &args.type_name, &payload)?;
    log::info!("Decoded '{}' payload as {}", args.type_name, model.type_name());

    let encoded = model.encode()?;
    if args.pretty {
        println!("{}", serde_json::to_string_pretty(&encoded)?);
    } else {
        println!("{encoded}");
    }
    Ok(())
}
