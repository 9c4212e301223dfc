//! Request descriptor — an immutable description of one outbound call.

use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Scalar parameters keyed by name (query string or JSON body).
pub type Params = BTreeMap<String, Value>;

/// HTTP method supported by the REST layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Method {
    #[default]
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Description of an outbound HTTP request.
///
/// Built once per call and never mutated after it is handed to a transport.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    base_url: String,
    path: String,
    method: Method,
    query: Option<Params>,
    body: Option<Params>,
    headers: BTreeMap<String, String>,
}

impl ApiRequest {
    pub fn get(base_url: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(Method::Get, base_url, path)
    }

    pub fn post(base_url: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(Method::Post, base_url, path)
    }

    pub fn new(method: Method, base_url: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            path: path.into(),
            method,
            query: None,
            body: None,
            headers: BTreeMap::new(),
        }
    }

    pub fn with_query(mut self, query: Params) -> Self {
        self.query = Some(query);
        self
    }

    pub fn with_body(mut self, body: Params) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn with_headers(mut self, headers: BTreeMap<String, String>) -> Self {
        self.headers.extend(headers);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn query(&self) -> Option<&Params> {
        self.query.as_ref()
    }

    pub fn body(&self) -> Option<&Params> {
        self.body.as_ref()
    }

    pub fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }

    /// The unvalidated `base_url + path` concatenation.
    pub fn raw_url(&self) -> String {
        format!("{}{}", self.base_url, self.path)
    }

    /// Query parameters rendered as name/value text pairs.
    ///
    /// Strings are sent verbatim, other scalars as their JSON text, and
    /// `null` as an empty value.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        self.query
            .iter()
            .flatten()
            .map(|(name, value)| (name.clone(), scalar_text(value)))
            .collect()
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builder_sets_fields() {
        let req = ApiRequest::get("https://api.example.com/", "data.json")
            .with_header("Content-Type", "application/json");
        assert_eq!(req.method(), Method::Get);
        assert_eq!(req.raw_url(), "https://api.example.com/data.json");
        assert_eq!(req.headers().get("Content-Type").unwrap(), "application/json");
        assert!(req.query().is_none());
        assert!(req.body().is_none());
    }

    #[test]
    fn test_query_pairs_render_scalars() {
        let mut query = Params::new();
        query.insert("q".into(), json!("sol ana"));
        query.insert("limit".into(), json!(10));
        query.insert("verified".into(), json!(true));
        query.insert("cursor".into(), Value::Null);

        let req = ApiRequest::get("https://api.example.com", "/tokens").with_query(query);
        let pairs = req.query_pairs();
        assert_eq!(
            pairs,
            vec![
                ("cursor".to_string(), String::new()),
                ("limit".to_string(), "10".to_string()),
                ("q".to_string(), "sol ana".to_string()),
                ("verified".to_string(), "true".to_string()),
            ]
        );
    }

    #[test]
    fn test_method_display() {
        assert_eq!(Method::Get.to_string(), "GET");
        assert_eq!(Method::Post.to_string(), "POST");
        assert_eq!(Method::default(), Method::Get);
    }
}
