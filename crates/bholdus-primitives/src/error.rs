//! Error types for the identifier codec.

use thiserror::Error;

/// Errors that can occur while decoding or encoding a runtime identifier.
///
/// Every error is local to the single value being processed; callers that
/// decode whole event records decide whether to skip the record or abort.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The leading byte matched no variant of the union being decoded.
    /// Exactly one byte has been consumed from the stream.
    #[error("Unknown discriminant 0x{byte:02x} for {ty}")]
    UnknownDiscriminant { ty: &'static str, byte: u8 },

    #[error("Truncated stream while decoding {ty}: {source}")]
    TruncatedStream {
        ty: &'static str,
        #[source]
        source: parity_scale_codec::Error,
    },

    #[error("Write failed while encoding {ty}: {source}")]
    WriteFailure {
        ty: &'static str,
        #[source]
        source: std::io::Error,
    },

    /// A field of a composite identifier failed; `source` is the field's own error.
    #[error("{ty}.{field}: {source}")]
    Field {
        ty: &'static str,
        field: &'static str,
        #[source]
        source: Box<CodecError>,
    },

    #[error("{remaining} trailing byte(s) left after decoding {ty}")]
    TrailingBytes { ty: &'static str, remaining: usize },

    #[error("Invalid hex input: {reason}")]
    InvalidHex { reason: String },
}

impl CodecError {
    /// Wrap this error with the composite type and field it occurred in.
    pub fn in_field(self, ty: &'static str, field: &'static str) -> Self {
        CodecError::Field {
            ty,
            field,
            source: Box::new(self),
        }
    }

    /// Strip any `Field` annotations and return the underlying error.
    pub fn root_cause(&self) -> &CodecError {
        match self {
            CodecError::Field { source, .. } => source.root_cause(),
            other => other,
        }
    }

    /// Dotted path of composite fields leading to the root cause,
    /// e.g. `"TradingPair.currency_1"`. Empty when the error is not nested.
    pub fn field_path(&self) -> String {
        let mut parts = Vec::new();
        let mut current = self;
        while let CodecError::Field { ty, field, source } = current {
            if parts.is_empty() {
                parts.push((*ty).to_string());
            }
            parts.push((*field).to_string());
            current = &**source;
        }
        parts.join(".")
    }

    pub fn is_unknown_discriminant(&self) -> bool {
        matches!(self.root_cause(), CodecError::UnknownDiscriminant { .. })
    }

    pub fn is_truncated(&self) -> bool {
        matches!(self.root_cause(), CodecError::TruncatedStream { .. })
    }
}

/// Lets the identifiers sit inside `#[derive(Decode)]` event records.
/// The SCALE error only carries a static description, so the typed detail
/// is reduced to its kind.
impl From<CodecError> for parity_scale_codec::Error {
    fn from(err: CodecError) -> Self {
        match err {
            CodecError::Field { source, .. } => (*source).into(),
            CodecError::TruncatedStream { source, .. } => source,
            CodecError::UnknownDiscriminant { .. } => {
                "Unknown discriminant for runtime identifier".into()
            }
            CodecError::TrailingBytes { .. } => {
                "Input buffer has still data left after decoding".into()
            }
            CodecError::WriteFailure { .. } => "Write failed while encoding".into(),
            CodecError::InvalidHex { .. } => "Invalid hex input".into(),
        }
    }
}
