//! Stable date orderings.
//!
//! Both sorts compare calendar dates only, so records with the same date keep
//! their source order even when one is written `2024` and the other
//! `2024-01-01`.

use folio_core::dates::ContentDate;

/// Newest first. Equal dates keep input order.
pub fn sort_by_date_descending<T>(items: &mut [T], date_of: impl Fn(&T) -> &ContentDate) {
    items.sort_by(|a, b| date_of(b).date().cmp(&date_of(a).date()));
}

/// Oldest first. Equal dates keep input order.
pub fn sort_chronological<T>(items: &mut [T], date_of: impl Fn(&T) -> &ContentDate) {
    items.sort_by_key(|item| date_of(item).date());
}
