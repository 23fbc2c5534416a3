//! Response shapes that may or may not wrap their payload in `{ "data": ... }`.

use serde::Deserialize;

/// A collection answer: either a bare array or `{ "data": [...] }`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Listing<T> {
    Bare(Vec<T>),
    Enveloped { data: Vec<T> },
}

impl<T> Listing<T> {
    /// The inner items, whichever shape arrived.
    pub fn into_items(self) -> Vec<T> {
        match self {
            Listing::Bare(items) | Listing::Enveloped { data: items } => items,
        }
    }
}

/// A single-record answer: either `{ "data": {...} }` or the bare record.
///
/// The enveloped shape is tried first so records whose fields are all
/// optional do not swallow the envelope. For answers that may be `null`,
/// decode `Option<Payload<T>>` rather than `Payload<Option<T>>`: a missing
/// `data` field would otherwise read as `None`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Payload<T> {
    Enveloped { data: T },
    Bare(T),
}

impl<T> Payload<T> {
    pub fn into_inner(self) -> T {
        match self {
            Payload::Enveloped { data } | Payload::Bare(data) => data,
        }
    }
}
