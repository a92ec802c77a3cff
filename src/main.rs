mod argsets;
mod command;
mod constants;
mod helpers;

use anyhow::{anyhow, Result};
use env_logger::Env;

use constants::{defaults, envvars};

const CMD_DECODE: &str = "decode";
const CMD_DESCRIBE: &str = "describe";
const CMD_PARSE_ENUM: &str = "parse-enum";
const CMD_TYPES: &str = "types";

fn main() -> Result<()> {
    let loaded = helpers::load_dotenv();
    env_logger::Builder::from_env(Env::default().filter_or(envvars::LOG_LEVEL, defaults::LOG_LEVEL))
        .init();
    for path in loaded {
        log::debug!("Loaded {path}");
    }

    let mut args = pico_args::Arguments::from_env();
    match args.subcommand()?.as_deref() {
        Some(CMD_DECODE) => {
            let decode_args = argsets::DecodeArgs {
                pretty: args.contains("--pretty"),
                input: args.opt_value_from_str("--input")?,
                type_name: args.free_from_str()?,
            };
            helpers::reject_unused(args)?;
            command::decode(decode_args)
        }
        Some(CMD_DESCRIBE) => {
            let describe_args = argsets::DescribeArgs {
                input: args.opt_value_from_str("--input")?,
                type_name: args.free_from_str()?,
            };
            helpers::reject_unused(args)?;
            command::describe(describe_args)
        }
        Some(CMD_PARSE_ENUM) => {
            let parse_enum_args = argsets::ParseEnumArgs {
                enum_name: args.free_from_str()?,
                value: args.free_from_str()?,
            };
            helpers::reject_unused(args)?;
            command::parse_enum(parse_enum_args)
        }
        Some(CMD_TYPES) => {
            helpers::reject_unused(args)?;
            command::types()
        }
        _ => Err(anyhow!(
            "Subcommand must be one of 'decode', 'describe', 'parse-enum', 'types'"
        )),
    }
}
