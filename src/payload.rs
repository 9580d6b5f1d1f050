//! Typed field extraction from provider JSON bodies
//!
//! Paths are JSON pointers (`/data/rir_allocation/rir_name`). Scalars that
//! are `null` or missing come back as absent values; only identifiers and
//! structural expectations produce a [`LookupError::Decode`].

use serde_json::Value;

use crate::error::LookupError;

/// A decoded response body together with the URL it came from
#[derive(Debug, Clone)]
pub struct Payload {
    url: String,
    root: Value,
}

impl Payload {
    pub fn parse(url: &str, body: &str) -> Result<Self, LookupError> {
        let root = serde_json::from_str(body).map_err(|e| LookupError::Decode {
            url: url.to_string(),
            path: String::new(),
            message: e.to_string(),
        })?;
        Ok(Self::new(url, root))
    }

    pub fn new(url: &str, root: Value) -> Self {
        Self {
            url: url.to_string(),
            root,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn decode_error(&self, path: &str, message: impl Into<String>) -> LookupError {
        LookupError::Decode {
            url: self.url.clone(),
            path: path.to_string(),
            message: message.into(),
        }
    }

    pub fn opt_str(&self, path: &str) -> Option<String> {
        opt_str(&self.root, path)
    }

    pub fn str_or_empty(&self, path: &str) -> String {
        self.opt_str(path).unwrap_or_default()
    }

    pub fn require_str(&self, path: &str) -> Result<String, LookupError> {
        self.opt_str(path)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| self.decode_error(path, "expected a non-empty string"))
    }

    pub fn require_asn(&self, path: &str) -> Result<u32, LookupError> {
        opt_asn(&self.root, path).ok_or_else(|| self.decode_error(path, "expected an AS number"))
    }

    /// Elements of the array at `path`; `null` or missing yields an empty slice.
    pub fn items(&self, path: &str) -> Result<&[Value], LookupError> {
        match self.root.pointer(path) {
            None | Some(Value::Null) => Ok(&[]),
            Some(Value::Array(items)) => Ok(items.as_slice()),
            Some(_) => Err(self.decode_error(path, "expected an array")),
        }
    }
}

/// String at `path`, `None` for null, missing, or non-string values.
pub fn opt_str(value: &Value, path: &str) -> Option<String> {
    value.pointer(path).and_then(Value::as_str).map(str::to_string)
}

/// AS number at `path`, accepting either a JSON number or a digit string.
pub fn opt_asn(value: &Value, path: &str) -> Option<u32> {
    match value.pointer(path)? {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(root: Value) -> Payload {
        Payload::new("http://example.test/asn/1", root)
    }

    #[test]
    fn test_invalid_json_is_decode_error() {
        let err = Payload::parse("http://example.test/", "<html>").unwrap_err();
        assert!(matches!(err, LookupError::Decode { .. }));
    }

    #[test]
    fn test_null_and_missing_are_absent() {
        let p = payload(json!({"data": {"website": null, "looking_glass": "", "n": 5}}));
        assert_eq!(p.opt_str("/data/website"), None);
        assert_eq!(p.opt_str("/data/missing"), None);
        assert_eq!(p.opt_str("/data/n"), None);
        assert_eq!(p.opt_str("/data/looking_glass"), Some(String::new()));
        assert_eq!(p.str_or_empty("/data/website"), "");
    }

    #[test]
    fn test_require_str() {
        let p = payload(json!({"ip": "1.1.1.1", "empty": ""}));
        assert_eq!(p.require_str("/ip").unwrap(), "1.1.1.1");
        let err = p.require_str("/empty").unwrap_err();
        match err {
            LookupError::Decode { path, .. } => assert_eq!(path, "/empty"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_require_asn() {
        let p = payload(json!({"a": 13335, "b": "14525", "c": -1, "d": 4294967296u64, "e": null}));
        assert_eq!(p.require_asn("/a").unwrap(), 13335);
        assert_eq!(p.require_asn("/b").unwrap(), 14525);
        assert!(p.require_asn("/c").is_err());
        assert!(p.require_asn("/d").is_err());
        assert!(p.require_asn("/e").is_err());
        assert!(p.require_asn("/f").is_err());
    }

    #[test]
    fn test_items() {
        let p = payload(json!({"list": [1, 2], "none": null, "obj": {}}));
        assert_eq!(p.items("/list").unwrap().len(), 2);
        assert!(p.items("/none").unwrap().is_empty());
        assert!(p.items("/missing").unwrap().is_empty());
        assert!(p.items("/obj").is_err());
    }
}
