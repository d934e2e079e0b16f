/// Failure to read a record from the Content Store.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// A required record is absent.
    #[error("Required content record '{key}' is missing")]
    MissingRecord { key: String },

    /// A record exists but does not parse into its model.
    #[error("Content record '{key}' is malformed: {source}")]
    Malformed {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// The backend failed for a reason other than absence.
    #[error("I/O error reading content '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },
}
