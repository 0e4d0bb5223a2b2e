/*
[INPUT]:  Request parameter names and primitive values
[OUTPUT]: Canonical, insertion-ordered query string
[POS]:    HTTP layer - the single serialization used for signing and transmission
[UPDATE]: When adding parameter value types or changing encoding rules
*/

use rust_decimal::Decimal;
use url::form_urlencoded;

/// Insertion-ordered request parameters.
///
/// The same `encode()` output is fed to the signer and placed on the wire;
/// any divergence between the two would break the signature, so there is
/// exactly one serialization path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_str(&mut self, name: &str, value: &str) {
        self.pairs.push((name.to_string(), value.to_string()));
    }

    pub fn push_decimal(&mut self, name: &str, value: Decimal) {
        self.pairs.push((name.to_string(), value.to_string()));
    }

    pub fn push_u64(&mut self, name: &str, value: u64) {
        self.pairs.push((name.to_string(), value.to_string()));
    }

    /// Booleans are serialized as lowercase "true"/"false"
    pub fn push_bool(&mut self, name: &str, value: bool) {
        let rendered = if value { "true" } else { "false" };
        self.pairs.push((name.to_string(), rendered.to_string()));
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Serialize into the canonical percent-encoded query string
    pub fn encode(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.pairs {
            serializer.append_pair(key, value);
        }
        serializer.finish()
    }
}
