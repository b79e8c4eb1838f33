use crate::*;
use confique::Config as _;

/// Settings for the interactive harness, read from `MINSQL_*` variables.
#[derive(Debug, confique::Config)]
pub struct Config {
    #[config(env = "MINSQL_PROMPT", default = "Enter a SQL command: ")]
    pub prompt: String,
    #[config(env = "MINSQL_SHOW_TOKENS", default = true)]
    pub show_tokens: bool,
    #[config(env = "MINSQL_SHOW_AST", default = true)]
    pub show_ast: bool,
    /// Fallback filter directive when `RUST_LOG` is unset.
    #[config(env = "MINSQL_LOG", default = "warn")]
    pub log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self::builder().env().load()?)
    }
}
