//! Pagination cursors.
//!
//! A cursor is pure data handed back and forth between caller and backend;
//! the backend keeps no state between listing calls. In token form a cursor
//! is either the name of the next entry to return or the empty string.

use std::fmt;

/// Continuation state of a paginated listing.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Cursor {
    /// Begin at the head of the listing.
    Start,
    /// Resume at the entry with this name, inclusive.
    At(String),
    /// The listing has no further pages.
    End,
}

impl Cursor {
    /// Parse a caller-supplied token.
    ///
    /// The empty token starts a listing from the beginning. Any other token
    /// is taken verbatim as an entry name.
    pub fn from_token(token: &str) -> Self {
        if token.is_empty() {
            Self::Start
        } else {
            Self::At(token.to_string())
        }
    }

    /// Token form of this cursor. Both sentinels render as `""`.
    pub fn token(&self) -> &str {
        match self {
            Self::At(name) => name,
            Self::Start | Self::End => "",
        }
    }

    pub fn is_start(&self) -> bool {
        matches!(self, Self::Start)
    }

    /// Returns `true` if no further pages remain.
    pub fn is_end(&self) -> bool {
        matches!(self, Self::End)
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::Start
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// One page of a listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page<T> {
    /// Entries on this page, possibly fewer than the requested page size.
    pub items: Vec<T>,
    /// Where the next page begins, or [`Cursor::End`].
    pub next: Cursor,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, next: Cursor) -> Self {
        Self { items, next }
    }

    /// Returns `true` if this is the last page.
    pub fn is_last(&self) -> bool {
        self.next.is_end()
    }
}
