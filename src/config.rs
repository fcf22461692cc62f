use confique::Config as _;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, confique::Config)]
pub struct Config {
    /// SQL file holding the `CREATE TABLE` statements.
    #[config(env = "DDL2TS_INPUT", default = "tables.sql")]
    pub input: PathBuf,
    /// Directory receiving the generated TypeScript.
    #[config(env = "DDL2TS_OUT_DIR", default = "out")]
    pub out_dir: PathBuf,
    /// Optional `child extends parent` relations file.
    #[config(env = "DDL2TS_INHERITANCE")]
    pub inheritance: Option<PathBuf>,
    /// Skip tokens before `CREATE TABLE` and ignore trailing ones.
    #[config(env = "DDL2TS_LENIENT", default = false)]
    pub lenient: bool,
    /// Abort on the first statement that fails to parse.
    #[config(env = "DDL2TS_FAIL_FAST", default = false)]
    pub fail_fast: bool,
    /// Also write `metadata.json`.
    #[config(env = "DDL2TS_EMIT_JSON", default = false)]
    pub emit_json: bool,
}

impl Config {
    /// Environment first, then the optional TOML file, then defaults.
    pub fn load(file: Option<&Path>) -> crate::Result<Self> {
        let mut builder = Config::builder().env();
        if let Some(file) = file {
            builder = builder.file(file);
        }
        Ok(builder.load()?)
    }

    pub fn parse_mode(&self) -> crate::ParseMode {
        if self.lenient {
            crate::ParseMode::Lenient
        } else {
            crate::ParseMode::Strict
        }
    }
}
