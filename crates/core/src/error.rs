/// Outcomes of issue operations that are reported back to the client.
///
/// The `Display` text of every business variant is the exact message the
/// HTTP layer puts in the `error` field of the response body. Ids are kept
/// as the raw string the client sent so they can be echoed back verbatim,
/// even when they are not well-formed.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("required field(s) missing")]
    MissingRequiredFields,

    #[error("missing _id")]
    MissingId,

    #[error("no update field(s) sent")]
    NoFieldsProvided { id: String },

    #[error("could not update")]
    UpdateFailed { id: String },

    #[error("could not delete")]
    DeleteFailed { id: String },

    #[error("could not post")]
    PostFailed,

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),
}

impl CoreError {
    /// The issue id to echo alongside the error message, if the variant
    /// carries one.
    pub fn issue_id(&self) -> Option<&str> {
        match self {
            CoreError::NoFieldsProvided { id }
            | CoreError::UpdateFailed { id }
            | CoreError::DeleteFailed { id } => Some(id),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_wire_format() {
        assert_eq!(
            CoreError::MissingRequiredFields.to_string(),
            "required field(s) missing"
        );
        assert_eq!(CoreError::MissingId.to_string(), "missing _id");
        assert_eq!(
            CoreError::NoFieldsProvided { id: "x".into() }.to_string(),
            "no update field(s) sent"
        );
        assert_eq!(
            CoreError::UpdateFailed { id: "x".into() }.to_string(),
            "could not update"
        );
        assert_eq!(
            CoreError::DeleteFailed { id: "x".into() }.to_string(),
            "could not delete"
        );
        assert_eq!(CoreError::PostFailed.to_string(), "could not post");
    }

    #[test]
    fn only_id_carrying_variants_echo_an_id() {
        assert_eq!(
            CoreError::DeleteFailed { id: "abc".into() }.issue_id(),
            Some("abc")
        );
        assert_eq!(CoreError::MissingId.issue_id(), None);
        assert_eq!(CoreError::MissingRequiredFields.issue_id(), None);
    }
}
