//! Response classification into a closed outcome set

/// Raw transport response consumed by the classifier.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// Classified outcome of a single request.
///
/// Exactly one variant carries data. Callers are expected to branch over
/// all six kinds; an unhandled kind is a compile error, not a runtime
/// surprise.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum ResponseOutcome<M> {
    /// The response decoded into a model
    Valid(M),
    /// A 200 response whose body has not been decoded yet
    Pending,
    /// 401, missing or invalid credentials
    Unauthorized,
    /// 301, the repository was renamed or transferred
    Moved,
    /// 403, access denied
    Forbidden,
    /// Absent response, 404, unknown status-code, or undecodable body
    Invalid,
}

impl<M> ResponseOutcome<M> {
    /// Maps a transport response to an outcome. `None` stands for a request
    /// that never produced a response (transport failure).
    ///
    /// A 200 classifies as [`ResponseOutcome::Pending`]: the body still has
    /// to survive decoding before the outcome becomes
    /// [`ResponseOutcome::Valid`].
    pub fn classify(response: Option<&RawResponse>) -> Self {
        match response {
            None => Self::Invalid,
            Some(raw) => match raw.status {
                401 => Self::Unauthorized,
                301 => Self::Moved,
                403 => Self::Forbidden,
                200 => Self::Pending,
                _ => Self::Invalid,
            },
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }

    pub fn is_moved(&self) -> bool {
        matches!(self, Self::Moved)
    }

    pub fn is_forbidden(&self) -> bool {
        matches!(self, Self::Forbidden)
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid)
    }

    /// Returns the decoded model of a valid outcome, discarding the rest.
    pub fn into_model(self) -> Option<M> {
        match self {
            Self::Valid(model) => Some(model),
            _ => None,
        }
    }
}
