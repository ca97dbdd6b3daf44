/// Error surfaced to components by the API helpers.
///
/// Carries the HTTP status alongside the server's message so routes can
/// branch on it (a 401 renders the login prompt instead of an error page).
#[derive(Clone, Debug, PartialEq)]
pub struct ApiError {
    pub status: u64,
    pub message: String,
}

impl ApiError {
    /// Client-side failure with no response to take a status from.
    pub fn internal(message: String) -> Self {
        Self {
            status: 500,
            message,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status == 401
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.status)
    }
}
