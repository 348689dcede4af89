/// Outcome of a career use case.
///
/// `Error` carries a diagnostic for logging at the HTTP boundary; it is never
/// rendered into a response body.
#[derive(Debug, Clone, PartialEq)]
pub enum CareerResult<T> {
    Success(T),
    NotFound,
    Error(String),
}

impl<T> CareerResult<T> {
    /// Legacy discriminant: `"success"` or `"failure"`.
    pub fn name(&self) -> &'static str {
        match self {
            CareerResult::Success(_) => "success",
            CareerResult::NotFound | CareerResult::Error(_) => "failure",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, CareerResult::Success(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, CareerResult::NotFound)
    }
}
