/// Failure of a request to the backend.
///
/// `status` is the HTTP status code, or [`ApiError::TRANSPORT`] when there is no status
/// worth reporting: the request never produced a response, or its body was unreadable.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiError {
    pub status: u64,
    pub message: String,
}

impl ApiError {
    pub const TRANSPORT: u64 = 0;

    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            status: Self::TRANSPORT,
            message: message.into(),
        }
    }

    /// Successful response whose body could not be decoded.
    pub fn invalid_body(err: impl std::fmt::Display) -> Self {
        Self::transport(format!("Failed to parse response: {}", err))
    }

    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }

    /// Short description shown to the user.
    pub fn descriptor(&self) -> String {
        if self.status == Self::TRANSPORT {
            self.message.clone()
        } else {
            format!("HTTP error! status: {}", self.status)
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.status == Self::TRANSPORT {
            write!(f, "{}", self.message)
        } else {
            write!(f, "HTTP error! status: {}: {}", self.status, self.message)
        }
    }
}
