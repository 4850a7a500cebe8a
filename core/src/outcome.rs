//! Result container returned by every `HeroService` operation.
//!
//! A failed request still resolves: the caller gets the operation's fallback
//! value, with the cause attached for anyone who wants to tell "no data"
//! apart from "request failed".

use crate::error::ApiError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// The request completed and produced this payload.
    Fetched(T),
    /// The request failed; `value` is the operation's fallback.
    Fallback { value: T, cause: ApiError },
}

impl<T> Outcome<T> {
    pub fn value(&self) -> &T {
        match self {
            Outcome::Fetched(value) | Outcome::Fallback { value, .. } => value,
        }
    }

    /// Drops the cause, yielding the payload or the fallback.
    pub fn into_value(self) -> T {
        match self {
            Outcome::Fetched(value) | Outcome::Fallback { value, .. } => value,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Outcome::Fallback { .. })
    }

    pub fn cause(&self) -> Option<&ApiError> {
        match self {
            Outcome::Fetched(_) => None,
            Outcome::Fallback { cause, .. } => Some(cause),
        }
    }

    pub fn into_result(self) -> Result<T, ApiError> {
        match self {
            Outcome::Fetched(value) => Ok(value),
            Outcome::Fallback { cause, .. } => Err(cause),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Fetched(value) => Outcome::Fetched(f(value)),
            Outcome::Fallback { value, cause } => Outcome::Fallback {
                value: f(value),
                cause,
            },
        }
    }
}
