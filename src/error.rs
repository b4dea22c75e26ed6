use std::backtrace::Backtrace;
use std::error::Error as StdError;
use std::fmt;

#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// Error related to invalid input supplied while building a model
    Validation,
    /// Error turning a model into JSON. Indicates a programming error, not bad data
    Serialization,
    /// Error reading a model from JSON that violates the documented schema
    MalformedResponse,
    /// Internal error from dependencies
    Internal,
}

#[derive(Debug)]
pub struct Error {
    kind: Kind,
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
    backtrace: Backtrace,
}

impl Error {
    pub fn with_source<S: StdError + Send + Sync + 'static>(kind: Kind, source: S) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
            backtrace: Backtrace::capture(),
        }
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn backtrace(&self) -> &Backtrace {
        &self.backtrace
    }

    pub fn inner(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.source.as_deref()
    }

    pub fn downcast_ref<E: StdError + 'static>(&self) -> Option<&E> {
        let e = self.source.as_deref()?;
        e.downcast_ref::<E>()
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Validation {
            reason: message.into(),
        }
        .into()
    }

    pub fn malformed<S: Into<String>>(type_name: &'static str, path: String, reason: S) -> Self {
        MalformedResponse {
            type_name,
            path,
            reason: reason.into(),
        }
        .into()
    }

    #[must_use]
    pub fn not_an_object(type_name: &'static str, found: &'static str) -> Self {
        NotAnObject { type_name, found }.into()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            Some(src) => write!(f, "{:?}: {}", self.kind, src),
            None => write!(f, "{:?}", self.kind),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn StdError + 'static))
    }
}

#[non_exhaustive]
#[derive(Debug)]
pub struct Validation {
    pub reason: String,
}

impl fmt::Display for Validation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid: {}", self.reason)
    }
}

impl StdError for Validation {}

/// JSON received for a model does not match its schema, e.g. a required field is missing.
#[non_exhaustive]
#[derive(Debug)]
pub struct MalformedResponse {
    /// Rust type that was being deserialized.
    pub type_name: &'static str,
    /// Path to the offending value, e.g. `activities[2].gift_card_id`.
    pub path: String,
    pub reason: String,
}

impl fmt::Display for MalformedResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "malformed {} at `{}`: {}",
            self.type_name, self.path, self.reason
        )
    }
}

impl StdError for MalformedResponse {}

/// A model serialized to something other than a JSON object.
#[non_exhaustive]
#[derive(Debug, Clone, Copy)]
pub struct NotAnObject {
    pub type_name: &'static str,
    /// JSON kind that was produced instead, e.g. `array`.
    pub found: &'static str,
}

impl fmt::Display for NotAnObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} serialized to a JSON {} instead of an object",
            self.type_name, self.found
        )
    }
}

impl StdError for NotAnObject {}

impl From<Validation> for Error {
    fn from(err: Validation) -> Self {
        Error::with_source(Kind::Validation, err)
    }
}

impl From<MalformedResponse> for Error {
    fn from(err: MalformedResponse) -> Self {
        Error::with_source(Kind::MalformedResponse, err)
    }
}

impl From<NotAnObject> for Error {
    fn from(err: NotAnObject) -> Self {
        Error::with_source(Kind::Serialization, err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::with_source(Kind::Serialization, e)
    }
}

impl From<serde_html_form::ser::Error> for Error {
    fn from(e: serde_html_form::ser::Error) -> Self {
        Error::with_source(Kind::Serialization, e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_display_should_name_path() {
        let err = MalformedResponse {
            type_name: "GiftCard",
            path: "balance_money.amount".to_owned(),
            reason: "invalid type: string \"ten\", expected i64".to_owned(),
        };

        assert_eq!(
            err.to_string(),
            "malformed GiftCard at `balance_money.amount`: invalid type: string \"ten\", expected i64"
        );
    }

    #[test]
    fn malformed_into_error_should_keep_kind() {
        let error = Error::malformed("Payout", "id".to_owned(), "missing field `id`");

        assert_eq!(error.kind(), Kind::MalformedResponse);
        let inner = error
            .downcast_ref::<MalformedResponse>()
            .expect("source should be MalformedResponse");
        assert_eq!(inner.path, "id");
    }

    #[test]
    fn not_an_object_is_serialization_error() {
        let error = Error::not_an_object("Vec<Money>", "array");

        assert_eq!(error.kind(), Kind::Serialization);
        assert!(
            error.to_string().contains("JSON array"),
            "unexpected message: {error}"
        );
    }
}
