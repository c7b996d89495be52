use std::borrow::Cow;

/// Catalog slice error type.
#[potter_derive::potter_error]
pub enum CatalogError {
    /// The `{lang}` segment is not on the allowlist.
    #[error("Unknown language{}: {message}", format_context(.context))]
    UnknownLanguage { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The `{type}` segment is not one of the four categories.
    #[error("Unknown category{}: {message}", format_context(.context))]
    UnknownCategory { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A well-formed request addressed a record that does not exist.
    #[error("Not found{}: {message}", format_context(.context))]
    NotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Query parameters that cannot be parsed or are out of range.
    #[error("Invalid query{}: {message}", format_context(.context))]
    InvalidQuery { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// An embedded dataset failed to parse or validate.
    #[error("Dataset error{}: {source}", format_context(.context))]
    Dataset { source: serde_json::Error, context: Option<Cow<'static, str>> },

    #[error("Internal catalog error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

#[cfg(feature = "server")]
mod response {
    use super::CatalogError;
    use axum::Json;
    use axum::http::StatusCode;
    use axum::response::{IntoResponse, Response};
    use potter_derive::api_model;

    #[api_model]
    /// Error payload returned by every catalog endpoint
    pub struct ErrorBody {
        /// Human-readable description
        pub error: String,
        /// HTTP status code, repeated for clients that only see the body
        pub status: u16,
    }

    impl CatalogError {
        #[must_use]
        pub const fn status(&self) -> StatusCode {
            match self {
                Self::UnknownLanguage { .. } | Self::UnknownCategory { .. } | Self::NotFound { .. } => {
                    StatusCode::NOT_FOUND
                }
                Self::InvalidQuery { .. } => StatusCode::BAD_REQUEST,
                Self::Dataset { .. } | Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            }
        }
    }

    impl IntoResponse for CatalogError {
        fn into_response(self) -> Response {
            let status = self.status();
            if status.is_server_error() {
                tracing::error!(error = %self, "Catalog request failed");
            } else {
                tracing::debug!(error = %self, status = status.as_u16(), "Catalog request rejected");
            }

            (status, Json(ErrorBody { error: self.to_string(), status: status.as_u16() }))
                .into_response()
        }
    }
}

#[cfg(feature = "server")]
pub use response::ErrorBody;
