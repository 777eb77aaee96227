use std::fmt;

/// An error carrying a human readable message.
#[derive(Clone, Debug)]
pub struct GenericError(String);

/// A result type with `GenericError`.
pub type GenericResult<T> = Result<T, GenericError>;

impl GenericError {
    /// Joins messages of all errors with given separator.
    pub fn join_many(errors: &[GenericError], separator: &str) -> String {
        errors.iter().map(|error| error.0.as_str()).collect::<Vec<_>>().join(separator)
    }
}

impl fmt::Display for GenericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for GenericError {}

impl From<String> for GenericError {
    fn from(message: String) -> Self {
        Self(message)
    }
}

impl From<&str> for GenericError {
    fn from(message: &str) -> Self {
        Self(message.to_string())
    }
}

impl From<std::io::Error> for GenericError {
    fn from(error: std::io::Error) -> Self {
        Self(format!("io error: {error}"))
    }
}

impl From<serde_json::Error> for GenericError {
    fn from(error: serde_json::Error) -> Self {
        Self(format!("json error: {error}"))
    }
}
