//! API queries: a path plus ordered query parameters.

use std::fmt;

use url::form_urlencoded;

/// A request against the API, before versioning and signing.
///
/// Parameters keep insertion order and keys may repeat, which is how the
/// API takes multi-valued filters (`route_types=0&route_types=1`).
///
/// # Examples
///
/// ```
/// use ptv_client::signing::Query;
///
/// let query = Query::parse("/routes?route_types=0&route_types=1");
/// assert_eq!(query.path(), "/routes");
/// assert_eq!(query.params().len(), 2);
///
/// let query = Query::new("/stops/route/1/route_type/0").param("direction_id", 1);
/// assert_eq!(query.to_string(), "/stops/route/1/route_type/0?direction_id=1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    path: String,
    params: Vec<(String, String)>,
}

impl Query {
    /// Create a query for a path with no parameters.
    ///
    /// A missing leading `/` is added.
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        let path = if path.starts_with('/') {
            path
        } else {
            format!("/{path}")
        };
        Self {
            path,
            params: Vec::new(),
        }
    }

    /// Parse free-form input such as `/routes?route_types=0`.
    ///
    /// The query string is form-decoded. Parameters with empty values are
    /// dropped and any `#fragment` is discarded.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        let raw = raw.split_once('#').map_or(raw, |(before, _)| before);
        let (path, query) = raw.split_once('?').unwrap_or((raw, ""));

        let mut parsed = Self::new(path);
        parsed.params = form_urlencoded::parse(query.as_bytes())
            .filter(|(_, value)| !value.is_empty())
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();
        parsed
    }

    /// Append a parameter, keeping any existing ones.
    pub fn param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.push(key, value);
        self
    }

    /// Append a parameter in place.
    pub fn push(&mut self, key: impl Into<String>, value: impl ToString) {
        self.params.push((key.into(), value.to_string()));
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    /// Returns true if any parameter has the given key.
    pub fn has_param(&self, key: &str) -> bool {
        self.params.iter().any(|(k, _)| k == key)
    }

    /// Form-encode the parameters, in order, followed by `extra`.
    pub(crate) fn encode_params<'a>(
        &'a self,
        extra: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.params.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .extend_pairs(extra)
            .finish()
    }
}

impl From<&str> for Query {
    fn from(raw: &str) -> Self {
        Query::parse(raw)
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)?;
        if !self.params.is_empty() {
            write!(f, "?{}", self.encode_params([]))?;
        }
        Ok(())
    }
}
