//! Query string encoding and the request parameter builder.

use std::collections::BTreeMap;

use uuid::Uuid;

use crate::errors::{Cielo24Error, Result};

/// Whether values are percent-encoded when joined into a query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Escaping {
    /// RFC 3986 unreserved characters stay literal, everything else is
    /// percent-encoded (a space becomes `%20`).
    #[default]
    Escaped,
    /// Values are emitted as given, for endpoints that expect raw bracketed
    /// list syntax.
    Verbatim,
}

/// Join `mapping` into `key=value&key=value`.
///
/// Keys are written as-is and pairs come out in key order. An empty mapping
/// encodes to `""`.
pub fn encode(mapping: &BTreeMap<String, String>, escaping: Escaping) -> String {
    mapping
        .iter()
        .map(|(key, value)| match escaping {
            Escaping::Escaped => format!("{key}={}", urlencoding::encode(value)),
            Escaping::Verbatim => format!("{key}={value}"),
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Accumulates the parameters of one API request.
///
/// Every `add*` call consumes the builder and hands back a new one, so a
/// shared base (version, token, job id) can be cloned and extended per call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryBuilder {
    params: BTreeMap<String, String>,
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a required parameter. Empty keys and values are rejected, as is a
    /// key that is already present.
    pub fn add(self, key: &str, value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(Cielo24Error::required("value"));
        }
        self.insert(key, value)
    }

    fn insert(mut self, key: &str, value: String) -> Result<Self> {
        if key.is_empty() {
            return Err(Cielo24Error::required("key"));
        }
        if self.params.contains_key(key) {
            return Err(Cielo24Error::Argument {
                name: "key",
                message: "parameter already present",
            });
        }
        self.params.insert(key.to_string(), value);
        Ok(self)
    }

    /// Add a parameter unless the value is missing or empty.
    pub fn add_optional<S: Into<String>>(self, key: &str, value: Option<S>) -> Result<Self> {
        match value.map(Into::into) {
            Some(value) if !value.is_empty() => self.add(key, value),
            _ => Ok(self),
        }
    }

    pub fn add_api_version(mut self, version: u32) -> Self {
        self.params.insert("v".to_string(), version.to_string());
        self
    }

    pub fn add_api_token(self, api_token: Uuid) -> Result<Self> {
        self.add_uuid("api_token", api_token)
    }

    pub fn add_job_id(self, job_id: Uuid) -> Result<Self> {
        self.add_uuid("job_id", job_id)
    }

    /// Ids travel as 32 lowercase hex digits without dashes.
    pub(crate) fn add_uuid(self, key: &'static str, id: Uuid) -> Result<Self> {
        if id.is_nil() {
            return Err(Cielo24Error::required(key));
        }
        self.add(key, id.simple().to_string())
    }

    /// Add every pair of an options mapping.
    ///
    /// Unlike [`add`](Self::add), empty values are kept (`force_case=`).
    /// Duplicate keys are still rejected.
    pub fn add_mapping(self, mapping: BTreeMap<String, String>) -> Result<Self> {
        mapping
            .into_iter()
            .try_fold(self, |builder, (key, value)| builder.insert(&key, value))
    }

    pub fn params(&self) -> &BTreeMap<String, String> {
        &self.params
    }

    pub fn to_query(&self, escaping: Escaping) -> String {
        encode(&self.params, escaping)
    }

    /// `server_url` + `path` + `?query`; the `?` is omitted when there are no
    /// parameters.
    pub fn build_url(&self, server_url: &str, path: &str, escaping: Escaping) -> String {
        let base = server_url.trim_end_matches('/');
        let query = self.to_query(escaping);
        if query.is_empty() {
            format!("{base}{path}")
        } else {
            format!("{base}{path}?{query}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn empty_mapping_encodes_to_empty_string() {
        assert_eq!(encode(&BTreeMap::new(), Escaping::Escaped), "");
    }

    #[test]
    fn reserved_characters_depend_on_mode() {
        let m = mapping(&[("callback_url", "http://a.b/c d"), ("v", "1")]);
        assert_eq!(
            encode(&m, Escaping::Escaped),
            "callback_url=http%3A%2F%2Fa.b%2Fc%20d&v=1"
        );
        assert_eq!(encode(&m, Escaping::Verbatim), "callback_url=http://a.b/c d&v=1");
    }

    #[test]
    fn unreserved_characters_stay_literal() {
        let m = mapping(&[("k", "A-z_0.9~")]);
        assert_eq!(encode(&m, Escaping::Escaped), "k=A-z_0.9~");
    }

    #[test]
    fn builder_rejects_empty_and_duplicate_parameters() {
        assert!(QueryBuilder::new().add("", "x").is_err());
        assert!(QueryBuilder::new().add("k", "").is_err());
        assert!(QueryBuilder::new().add("k", "1").unwrap().add("k", "2").is_err());
        assert!(QueryBuilder::new().add_job_id(Uuid::nil()).is_err());
    }

    #[test]
    fn builder_skips_missing_optionals() {
        let builder = QueryBuilder::new()
            .add_api_version(1)
            .add_optional("job_name", None::<String>)
            .unwrap()
            .add_optional("external_id", Some(""))
            .unwrap();
        assert_eq!(builder.to_query(Escaping::Escaped), "v=1");
    }

    #[test]
    fn mappings_keep_empty_values_but_not_duplicates() {
        let builder = QueryBuilder::new()
            .add_api_version(1)
            .add_mapping(mapping(&[("force_case", ""), ("srt_format", "")]))
            .unwrap();
        assert_eq!(builder.to_query(Escaping::Escaped), "force_case=&srt_format=&v=1");

        assert!(builder.add_mapping(mapping(&[("v", "2")])).is_err());
        assert!(QueryBuilder::new().add_mapping(mapping(&[("", "x")])).is_err());
    }

    #[test]
    fn ids_are_simple_hex() {
        let id = Uuid::parse_str("6ba7b810-9dad-11d1-80b4-00c04fd430c8").unwrap();
        let url = QueryBuilder::new()
            .add_api_version(1)
            .add_job_id(id)
            .unwrap()
            .build_url("https://api.cielo24.com/", "/api/job/info", Escaping::Escaped);
        assert_eq!(
            url,
            "https://api.cielo24.com/api/job/info?job_id=6ba7b8109dad11d180b400c04fd430c8&v=1"
        );
    }
}
