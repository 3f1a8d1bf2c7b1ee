use serde::de::{DeserializeOwned, IgnoredAny};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// A collection payload as the lessons API may return it.
///
/// Variants are tried in order: a bare list, an object wrapping the list
/// under `results` or `data`, and finally anything else, which normalizes to
/// an empty list. Records are kept as raw JSON until [`ListResponse::into_vec`]
/// decodes them one by one.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ListResponse {
    Bare(Vec<Value>),
    Wrapped {
        #[serde(default, deserialize_with = "list_or_none")]
        results: Option<Vec<Value>>,
        #[serde(default, deserialize_with = "list_or_none")]
        data: Option<Vec<Value>>,
    },
    Unrecognized(IgnoredAny),
}

impl ListResponse {
    /// Flattens the response into a plain ordered list of `T`.
    ///
    /// A record that does not decode as `T` is skipped; the rest of the list
    /// is kept in order.
    #[must_use]
    pub fn into_vec<T: DeserializeOwned>(self) -> Vec<T> {
        let records = match self {
            Self::Bare(list) => list,
            Self::Wrapped { results: Some(list), .. } | Self::Wrapped { data: Some(list), .. } => list,
            Self::Wrapped { .. } | Self::Unrecognized(_) => Vec::new(),
        };

        records
            .into_iter()
            .enumerate()
            .filter_map(|(index, record)| match serde_json::from_value(record) {
                Ok(decoded) => Some(decoded),
                Err(err) => {
                    tracing::debug!(index, %err, "Skipping malformed record");
                    None
                }
            })
            .collect()
    }
}

impl Default for ListResponse {
    fn default() -> Self {
        Self::Bare(Vec::new())
    }
}

// A wrapper key holding something other than a list is ignored so the next
// key still gets a chance.
fn list_or_none<'de, D>(deserializer: D) -> Result<Option<Vec<Value>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(list) => Some(list),
        _ => None,
    })
}
