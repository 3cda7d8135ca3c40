//! Record decoding errors.

/// Errors raised while turning JSON into [`FormRecord`](super::FormRecord)s.
///
/// These describe malformed input, not invalid field values; field values
/// are judged by [`FormValidator`](super::FormValidator).
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    /// The input is not valid JSON.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A record must be a JSON object.
    #[error("expected a JSON object for a record, found {found}")]
    NotAnObject {
        /// JSON type that was found instead.
        found: &'static str,
    },

    /// A batch must be an object or an array of objects.
    #[error("expected a record or an array of records, found {found}")]
    NotARecordList {
        /// JSON type that was found instead.
        found: &'static str,
    },

    /// Field values must be scalars.
    #[error("field '{field}' holds {found}, expected a string, number or boolean")]
    UnsupportedValue {
        /// Name of the offending field.
        field: String,
        /// JSON type that was found.
        found: &'static str,
    },

    /// A record inside an array failed to decode.
    #[error("record {index}: {source}")]
    AtIndex {
        /// Zero-based position in the array.
        index: usize,
        /// Underlying failure.
        #[source]
        source: Box<RecordError>,
    },
}
