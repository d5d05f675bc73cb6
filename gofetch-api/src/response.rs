use serde::{Deserialize, Deserializer, Serialize};

/// One search hit. Missing or `null` `url`/`title` decode as empty strings so a
/// sloppy record degrades the markup instead of failing the whole response.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SearchResultItem {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

fn null_as_empty<'de, D>(de: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(de)?.unwrap_or_default())
}

/// Paginated payload: `{ "total": n, "data": [...] }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Envelope {
    #[serde(default)]
    pub total: i64,
    #[serde(default)]
    pub data: Option<Vec<SearchResultItem>>,
}

/// Either shape the backend has served over time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum SearchResponse {
    /// Bare array of results.
    Legacy(Vec<SearchResultItem>),
    Paginated(Envelope),
}

impl SearchResponse {
    pub fn items(&self) -> &[SearchResultItem] {
        match self {
            SearchResponse::Legacy(items) => items,
            SearchResponse::Paginated(env) => env.data.as_deref().unwrap_or(&[]),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }
}

/// Decode a response body. A JSON `null` yields `Ok(None)` (absent response).
pub fn parse_body(body: &[u8]) -> Result<Option<SearchResponse>, serde_json::Error> {
    serde_json::from_slice(body)
}
