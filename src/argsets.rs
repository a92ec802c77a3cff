use std::path::PathBuf;

pub struct DecodeArgs {
    pub pretty: bool,
    pub input: Option<PathBuf>,
    pub type_name: String,
}

pub struct DescribeArgs {
    pub input: Option<PathBuf>,
    pub type_name: String,
}

pub struct ParseEnumArgs {
    pub enum_name: String,
    pub value: String,
}
