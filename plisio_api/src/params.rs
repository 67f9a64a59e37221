//! Parameter normalization: the ordered key/value data every request carries.

use serde_json::{Map, Value};
use url::form_urlencoded::byte_serialize;

use crate::request::RequestOverrides;

/// Key of the implicit receiver, which never reaches the wire.
pub const RECEIVER_KEY: &str = "self";

/// Insertion-ordered request data, plus an optional per-call override slot.
///
/// Keys keep the order they were first inserted in, so the rendered query
/// string follows the argument order of the endpoint.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Params {
    entries: Vec<(String, Value)>,
    overrides: Option<RequestOverrides>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds parameters from named arguments as captured at a call site.
    ///
    /// The receiver key is always dropped. With `exclude_unset`, entries whose
    /// value is `null` are dropped too.
    pub fn from_args<I, K>(args: I, exclude_unset: bool) -> Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        let mut params = Self::new();
        for (key, value) in args {
            let key = key.into();
            if key == RECEIVER_KEY || (exclude_unset && value.is_null()) {
                continue;
            }
            params.insert(key, value);
        }
        params
    }

    /// Sets `key`, replacing an existing value in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        let idx = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(idx).1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Attaches transport overrides for this call only.
    pub fn with_overrides(mut self, overrides: RequestOverrides) -> Self {
        self.overrides = Some(overrides);
        self
    }

    pub fn overrides(&self) -> Option<&RequestOverrides> {
        self.overrides.as_ref()
    }

    /// Removes and returns the per-call overrides.
    pub fn take_overrides(&mut self) -> Option<RequestOverrides> {
        self.overrides.take()
    }

    /// Renders `key=value` pairs joined by `&`.
    ///
    /// List values are joined with `,`. Keys and scalar values are
    /// form-encoded; the `=`, `&` and `,` separators are left literal.
    pub fn to_query_string(&self) -> String {
        self.entries
            .iter()
            .map(|(key, value)| format!("{}={}", encode(key), query_value(value)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// The data as a JSON object, for request bodies.
    pub fn to_json(&self) -> Value {
        Value::Object(self.entries.iter().cloned().collect::<Map<String, Value>>())
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self::from_args(iter, true)
    }
}

/// Lifts an optional argument into a parameter value, `null` when unset.
pub(crate) fn opt<T: Into<Value>>(value: Option<T>) -> Value {
    value.map(Into::into).unwrap_or(Value::Null)
}

/// Lifts a list argument, `null` when empty.
pub(crate) fn list<T, I>(values: I) -> Value
where
    I: IntoIterator<Item = T>,
    T: Into<Value>,
{
    let items: Vec<Value> = values.into_iter().map(Into::into).collect();
    if items.is_empty() {
        Value::Null
    } else {
        Value::Array(items)
    }
}

fn encode(raw: &str) -> String {
    byte_serialize(raw.as_bytes()).collect()
}

fn scalar(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn query_value(value: &Value) -> String {
    match value {
        Value::Array(items) => items
            .iter()
            .map(|item| encode(&scalar(item)))
            .collect::<Vec<_>>()
            .join(","),
        other => encode(&scalar(other)),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn drops_receiver_and_nulls() {
        let params = Params::from_args(
            vec![
                ("self", json!("client")),
                ("currency", json!("BTC")),
                ("search", Value::Null),
                ("page", json!(2)),
            ],
            true,
        );
        assert!(!params.contains_key(RECEIVER_KEY));
        assert!(params.iter().all(|(_, v)| !v.is_null()));
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn keeps_nulls_when_asked() {
        let params = Params::from_args(vec![("self", json!(1)), ("search", Value::Null)], false);
        assert!(!params.contains_key("self"));
        assert_eq!(params.get("search"), Some(&Value::Null));
    }

    #[test]
    fn insert_replaces_in_place() {
        let mut params = Params::new().with("a", 1).with("b", 2);
        params.insert("a", 3);
        assert_eq!(params.to_query_string(), "a=3&b=2");
        assert_eq!(params.remove("a"), Some(json!(3)));
        assert_eq!(params.to_query_string(), "b=2");
    }

    #[test]
    fn list_values_are_comma_joined() {
        let params = Params::new()
            .with("addresses", json!(["addr1", "addr2", "addr3"]))
            .with("currency", "BTC");
        assert_eq!(
            params.to_query_string(),
            "addresses=addr1,addr2,addr3&currency=BTC"
        );
    }

    #[test]
    fn scalars_render_like_their_text() {
        let params = Params::new()
            .with("flag", true)
            .with("amount", json!(0.5))
            .with("name", "Order #1 & more");
        insta::assert_snapshot!(
            params.to_query_string(),
            @"flag=true&amount=0.5&name=Order+%231+%26+more"
        );
    }

    #[test]
    fn empty_params_render_empty() {
        assert_eq!(Params::new().to_query_string(), "");
    }

    #[test]
    fn helpers_map_unset_to_null() {
        assert_eq!(opt::<String>(None), Value::Null);
        assert_eq!(opt(Some("x")), json!("x"));
        assert_eq!(list(Vec::<String>::new()), Value::Null);
        assert_eq!(list(vec!["a", "b"]), json!(["a", "b"]));
    }

    #[test]
    fn to_json_preserves_values() {
        let params = Params::new().with("b", 1).with("a", json!(["x"]));
        assert_eq!(params.to_json(), json!({"b": 1, "a": ["x"]}));
    }

    #[test]
    fn collecting_excludes_unset() {
        let params: Params = vec![("a", json!(1)), ("b", Value::Null)].into_iter().collect();
        assert_eq!(params.len(), 1);
    }
}
