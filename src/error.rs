use thiserror::Error;

use crate::sim::PlayerId;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("No colours left in the palette, the field is full")]
    PaletteExhausted,

    #[error("Unknown player: {0}")]
    UnknownPlayer(PlayerId),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
