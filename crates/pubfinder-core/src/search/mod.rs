//! Publication search: request shape, response wire types, and hit
//! normalization.
//!
//! The ranking itself happens in the search backend. This module only
//! builds the multi-match request and turns raw hits into
//! [`SearchResultItem`]s the views can render without further checks.

mod query;
pub mod types;

pub use query::{MultiMatch, QueryClause, SearchRequest};
pub use types::{Authors, Hit, HitSource, HitsEnvelope, SearchResponse, SearchResultItem, Year};
