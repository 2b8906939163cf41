//! Query-string handling for links that carry request-scoped UI state.
//!
//! Pagination cursors, the open panel and the open FAQ items all live in the
//! query string. Links that change one of them keep every other parameter.

use url::form_urlencoded;

/// Ordered query parameters of the current request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Parse a raw query string (without the leading `?`).
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        let pairs = raw
            .map(|raw| {
                form_urlencoded::parse(raw.as_bytes())
                    .map(|(key, value)| (key.into_owned(), value.into_owned()))
                    .collect()
            })
            .unwrap_or_default();
        Self { pairs }
    }

    /// First value for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Copy with `key` set to `value`, replacing any existing values.
    ///
    /// A replaced key keeps its original position.
    #[must_use]
    pub fn with(&self, key: &str, value: &str) -> Self {
        let mut pairs = Vec::with_capacity(self.pairs.len() + 1);
        let mut placed = false;
        for (k, v) in &self.pairs {
            if k == key {
                if !placed {
                    pairs.push((k.clone(), value.to_string()));
                    placed = true;
                }
            } else {
                pairs.push((k.clone(), v.clone()));
            }
        }
        if !placed {
            pairs.push((key.to_string(), value.to_string()));
        }
        Self { pairs }
    }

    /// Copy with every value for the given keys removed.
    #[must_use]
    pub fn without(&self, keys: &[&str]) -> Self {
        Self {
            pairs: self
                .pairs
                .iter()
                .filter(|(k, _)| !keys.contains(&k.as_str()))
                .cloned()
                .collect(),
        }
    }

    /// Whether there are no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Encoded query string without the leading `?`.
    #[must_use]
    pub fn encode(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(&self.pairs)
            .finish()
    }

    /// Link to `path` carrying these parameters.
    #[must_use]
    pub fn href(&self, path: &str) -> String {
        if self.is_empty() {
            path.to_string()
        } else {
            format!("{path}?{}", self.encode())
        }
    }
}
