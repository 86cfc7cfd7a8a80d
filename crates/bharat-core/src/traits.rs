// crates/bharat-core/src/traits.rs
use crate::error::Result;
use crate::record::FlattenedLocationRecord;
use crate::text::fold_key;

/// Name-based matching helpers for types that expose a canonical display name.
///
/// This trait centralizes accent-insensitive and case-insensitive
/// comparisons based on [`fold_key`]. Implementors provide a `&str` view of
/// their canonical name via [`NameMatch::name_str`], and get convenient helpers:
/// - [`NameMatch::is_named`]: equality on folded form
/// - [`NameMatch::name_contains`]: substring match on folded form
///
/// # Examples
/// ```rust
/// use bharat_core::traits::NameMatch;
///
/// struct Place(&'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Place("Bélgaum").is_named("belgaum"));
/// assert!(Place("Thiruvananthapuram").name_contains("ANANTHA"));
/// ```
pub trait NameMatch {
    /// Returns the canonical display name used for matching.
    fn name_str(&self) -> &str;

    #[inline]
    fn is_named(&self, q: &str) -> bool {
        fold_key(self.name_str()) == fold_key(q)
    }

    #[inline]
    fn name_contains(&self, q: &str) -> bool {
        fold_key(self.name_str()).contains(&fold_key(q))
    }
}

/// Default number of hits returned by a search.
pub const DEFAULT_SEARCH_LIMIT: usize = 50;

/// The search seam.
///
/// Implemented by the static-API reader, which only looks inside the
/// first-letter bucket of the query, and by in-memory record slices, which
/// scan every record (the admin view over a live copy of the data).
pub trait LocationSearch {
    /// Returns at most `limit` records matching `query`, in stored order.
    fn search(&self, query: &str, limit: usize) -> Result<Vec<FlattenedLocationRecord>>;
}
