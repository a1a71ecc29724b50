use thiserror::Error;

/// Failures talking to the backend.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(#[from] gloo_net::Error),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("server responded with status {status}: {message}")]
    Server { status: u16, message: String },
    #[error("unexpected response body: {0}")]
    Decode(String),
}

/// Reasons the campaign page could not be activated.
#[derive(Debug, Error, PartialEq)]
pub enum MountError {
    #[error("no document available")]
    NoDocument,
    #[error("missing element `{0}`")]
    MissingElement(&'static str),
    #[error("element `{0}` has an unexpected type")]
    WrongType(&'static str),
    #[error("failed to register `{0}` listener")]
    Listener(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_failures_become_network_errors() {
        let err: ApiError = gloo_net::Error::GlooError("Failed to fetch".into()).into();
        assert!(matches!(err, ApiError::Network(_)));
        assert!(err.to_string().starts_with("request failed"));
    }

    #[test]
    fn messages_name_the_culprit() {
        assert_eq!(
            MountError::MissingElement("anti-spam").to_string(),
            "missing element `anti-spam`"
        );
        assert_eq!(
            ApiError::Server { status: 409, message: "duplicate name".into() }.to_string(),
            "server responded with status 409: duplicate name"
        );
    }
}
