use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum RedactError {
    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsing(#[from] owned_ttf_parser::FaceParsingError),

    #[error(transparent)]
    /// [serde_json] failed to parse or serialize a document
    Json(#[from] serde_json::Error),

    /// The import text was empty after trimming
    #[error("Paste JSON first.")]
    EmptyImport,

    /// The import parsed, but was not a non-empty record array
    /// (bare or under an `emails` key)
    #[error("JSON must be an array or {{ emails: [...] }}.")]
    InvalidImport,
}
