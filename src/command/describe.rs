use anyhow::Result;
use betasdk::models::GraphType;
use serde::Serialize;
use serialization::{AdditionalDataHolder, ODATA_TYPE_KEY};

use super::catalog::{self, Decoded};
use crate::argsets::DescribeArgs;
use crate::helpers::read_payload;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Summary<'a> {
    requested_type: &'a str,
    resolved_type: &'static str,
    odata_type: Option<String>,
    unmodeled_properties: Vec<&'a str>,
}

fn summarize<'a>(requested_type: &'a str, model: &'a dyn Decoded) -> Result<Summary<'a>> {
    let encoded = model.encode()?;
    Ok(Summary {
        requested_type,
        resolved_type: model.type_name(),
        odata_type: encoded
            .get(ODATA_TYPE_KEY)
            .and_then(|tag| tag.as_str())
            .map(str::to_owned),
        unmodeled_properties: model.additional_data().keys().map(String::as_str).collect(),
    })
}

pub fn describe(args: DescribeArgs) -> Result<()> {
    let decoder = catalog::decoder(&args.type_name)?;
    let payload = read_payload(args.input.as_deref())?;
    let model = catalog::decode_with(decoder, &args.type_name, &payload)?;
    let summary = summarize(&args.type_name, model.as_ref())?;
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
