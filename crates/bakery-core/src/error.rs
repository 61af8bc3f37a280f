use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to load config from {path}")]
    ConfigLoad {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config at {path}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("failed to read file {path}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("file {path} has no usable file name")]
    NoFileName { path: PathBuf },

    #[error(
        "unknown tech stack '{tag}'; supported: {}",
        supported.join(", ")
    )]
    UnknownTechStack { tag: String, supported: Vec<String> },
}
