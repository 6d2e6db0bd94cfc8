// File: src/form_data.rs
// Purpose: Submitted form fields from urlencoded or JSON request bodies

use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;
use std::collections::HashMap;

/// Form data from POST requests
#[derive(Debug, Clone, Default)]
pub struct FormData {
    fields: HashMap<String, String>,
}

impl FormData {
    /// Create empty form data
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from form fields with automatic trimming
    ///
    /// Password fields are kept exactly as typed.
    pub fn from_fields(fields: HashMap<String, String>) -> Self {
        let fields = fields
            .into_iter()
            .map(|(k, v)| {
                let v = if is_password_key(&k) { v } else { v.trim().to_string() };
                (k, v)
            })
            .collect();

        Self { fields }
    }

    /// Create from an `application/x-www-form-urlencoded` body
    ///
    /// A repeated key keeps its first value, like a single-valued form field.
    pub fn from_urlencoded(body: &[u8]) -> Self {
        let body = String::from_utf8_lossy(body);
        let mut fields = HashMap::new();

        for pair in body.split('&').filter(|pair| !pair.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            fields
                .entry(decode_component(key))
                .or_insert_with(|| decode_component(value));
        }

        Self::from_fields(fields)
    }

    /// Create from a JSON object; scalars are stringified, nulls dropped
    pub fn from_json(json: JsonValue) -> Self {
        let mut fields = HashMap::new();

        if let JsonValue::Object(map) = json {
            for (key, value) in map {
                match value {
                    JsonValue::Null => {}
                    JsonValue::String(s) => {
                        fields.insert(key, s);
                    }
                    other => {
                        fields.insert(key, other.to_string());
                    }
                }
            }
        }

        Self::from_fields(fields)
    }

    /// Get a form field value
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Check if a field exists
    pub fn has(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn as_map(&self) -> &HashMap<String, String> {
        &self.fields
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Submitted values safe to echo back: anything password-like is dropped
    pub fn display_values(&self) -> HashMap<String, String> {
        self.fields
            .iter()
            .filter(|(key, _)| !is_password_key(key))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Deserialize into a form struct
    pub fn parse<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        let json = serde_json::to_value(&self.fields)?;
        serde_json::from_value(json)
    }
}

fn is_password_key(key: &str) -> bool {
    key.contains("password")
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|decoded| decoded.into_owned())
        .unwrap_or(spaced)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    #[serde(default)]
    struct Sample {
        name: String,
        amount: String,
    }

    impl Default for Sample {
        fn default() -> Self {
            Self {
                name: String::new(),
                amount: "none".to_string(),
            }
        }
    }

    #[test]
    fn test_form_data_empty() {
        let form = FormData::new();
        assert!(form.is_empty());
        assert!(form.get("name").is_none());
    }

    #[test]
    fn test_form_data_trimming() {
        let mut fields = HashMap::new();
        fields.insert("name".to_string(), "  John  ".to_string());
        fields.insert("email".to_string(), "\ttest@example.com\n".to_string());

        let form = FormData::from_fields(fields);

        assert_eq!(form.get("name"), Some("John"));
        assert_eq!(form.get("email"), Some("test@example.com"));
    }

    #[test]
    fn test_passwords_are_not_trimmed() {
        let form = FormData::from_urlencoded(b"username=+bob+&password=+Abcde1%21+&password2=x+");

        assert_eq!(form.get("username"), Some("bob"));
        assert_eq!(form.get("password"), Some(" Abcde1! "));
        assert_eq!(form.get("password2"), Some("x "));
    }

    #[test]
    fn test_from_urlencoded() {
        let form = FormData::from_urlencoded(b"username=jane+doe&email=jane%40bank.test&flag&username=other");

        assert_eq!(form.get("username"), Some("jane doe"));
        assert_eq!(form.get("email"), Some("jane@bank.test"));
        assert_eq!(form.get("flag"), Some(""));
    }

    #[test]
    fn test_from_json_stringifies_scalars() {
        let form = FormData::from_json(serde_json::json!({
            "name": " Alice ",
            "amount": 30.5,
            "note": null
        }));

        assert_eq!(form.get("name"), Some("Alice"));
        assert_eq!(form.get("amount"), Some("30.5"));
        assert!(!form.has("note"));
    }

    #[test]
    fn test_display_values_drop_passwords() {
        let form = FormData::from_urlencoded(b"username=a&password=Secret1!&password2=Secret1!");
        let values = form.display_values();

        assert_eq!(values.len(), 1);
        assert_eq!(values.get("username").map(String::as_str), Some("a"));
    }

    #[test]
    fn test_parse_uses_defaults_for_missing_fields() {
        let form = FormData::from_urlencoded(b"name=Bob");
        let sample: Sample = form.parse().unwrap();

        assert_eq!(
            sample,
            Sample {
                name: "Bob".to_string(),
                amount: "none".to_string(),
            }
        );
    }
}
