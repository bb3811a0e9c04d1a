//! Cursor pagination over an ordered sequence.
//!
//! The cursor is the name of the first entry of the next page. Page
//! boundaries are computed on the sequence as given, before any filtering
//! the caller applies afterwards, so a filtered page may hold fewer entries
//! than requested while still advancing the cursor.

use flatbox_types::{Cursor, Page, StowError, StowResult};

/// Entries that can be addressed by a cursor.
pub trait Named {
    /// The name a cursor refers to.
    fn flat_name(&self) -> &str;
}

/// Cut one page out of `entries`, starting at `cursor`.
///
/// `entries` must already be in listing order. Fails with `BadCursor` if the
/// cursor names no entry, and with `InvalidArgument` for a zero page size.
pub fn paginate<E: Named>(
    mut entries: Vec<E>,
    cursor: &Cursor,
    page_size: usize,
) -> StowResult<Page<E>> {
    if page_size == 0 {
        return Err(StowError::InvalidArgument(
            "page size must be positive".to_string(),
        ));
    }

    match cursor {
        Cursor::Start => {}
        Cursor::At(name) => {
            let position = entries
                .iter()
                .position(|e| e.flat_name() == name)
                .ok_or_else(|| StowError::BadCursor(name.clone()))?;
            entries.drain(..position);
        }
        Cursor::End => return Err(StowError::BadCursor(String::new())),
    }

    let next = if entries.len() > page_size {
        let next = Cursor::At(entries[page_size].flat_name().to_string());
        entries.truncate(page_size);
        next
    } else {
        Cursor::End
    };

    Ok(Page::new(entries, next))
}
