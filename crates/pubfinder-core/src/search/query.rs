use serde::Serialize;

use crate::config::SEARCH_FIELDS;

/// Request body for a full-text search.
///
/// Serializes to
/// `{"query":{"multi_match":{"query":"...","fields":["title","description","journal","authors"]}}}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchRequest {
    pub query: QueryClause,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryClause {
    pub multi_match: MultiMatch,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MultiMatch {
    pub query: String,
    pub fields: Vec<String>,
}

impl SearchRequest {
    /// Multi-match query over the publication fields.
    pub fn multi_match(query: impl Into<String>) -> Self {
        Self {
            query: QueryClause {
                multi_match: MultiMatch {
                    query: query.into(),
                    fields: SEARCH_FIELDS.iter().map(|f| f.to_string()).collect(),
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_multi_match_body_shape() {
        let body = serde_json::to_value(SearchRequest::multi_match("market efficiency")).unwrap();
        assert_eq!(
            body,
            json!({
                "query": {
                    "multi_match": {
                        "query": "market efficiency",
                        "fields": ["title", "description", "journal", "authors"]
                    }
                }
            })
        );
    }
}
