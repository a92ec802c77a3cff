use anyhow::Result;
use itertools::Itertools;

use super::catalog;

pub fn types() -> Result<()> {
    println!("Types:");
    println!("{}", catalog::type_names().map(|name| format!("  {name}")).join("\n"));
    println!("Enums:");
    println!("{}", catalog::enum_names().map(|name| format!("  {name}")).join("\n"));
    Ok(())
}
