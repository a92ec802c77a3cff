use anyhow::Result;

use super::catalog;
use crate::argsets::ParseEnumArgs;

pub fn parse_enum(args: ParseEnumArgs) -> Result<()> {
    let parse = catalog::enum_parser(&args.enum_name)?;
    let ordinal = parse(&args.value)?;
    println!("{ordinal}");
    Ok(())
}
