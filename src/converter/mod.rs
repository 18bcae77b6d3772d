//! JSON to TextMate plist conversion.
//!
//! Objects become `<dict>` (keys in input order), arrays become `<array>` and
//! every scalar becomes a `<string>` holding its text.

use log::{debug, warn};
use serde_json::Value;
use uuid::Uuid;

use crate::error::Result;
use crate::types::{PlistDocument, PlistNode};
use crate::writer::{build_with_options, WriterOptions};

/// How non-string scalars are rendered as text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScalarStyle {
    /// JSON spelling: `true`, `false`, `null`.
    #[default]
    Canonical,
    /// Capitalised spelling used by older json2tm output: `True`, `False`, `None`.
    Legacy,
}

impl ScalarStyle {
    fn bool_text(self, value: bool) -> &'static str {
        match (self, value) {
            (ScalarStyle::Canonical, true) => "true",
            (ScalarStyle::Canonical, false) => "false",
            (ScalarStyle::Legacy, true) => "True",
            (ScalarStyle::Legacy, false) => "False",
        }
    }

    fn null_text(self) -> &'static str {
        match self {
            ScalarStyle::Canonical => "null",
            ScalarStyle::Legacy => "None",
        }
    }
}

/// Whether, and with which value, a `uuid` key is added to the root dict.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UuidInjection {
    #[default]
    Off,
    /// A fresh random UUID per document.
    Generate,
    /// A caller-supplied UUID, for reproducible output.
    Fixed(Uuid),
}

impl UuidInjection {
    fn resolve(self) -> Option<Uuid> {
        match self {
            UuidInjection::Off => None,
            UuidInjection::Generate => Some(Uuid::new_v4()),
            UuidInjection::Fixed(uuid) => Some(uuid),
        }
    }
}

impl From<bool> for UuidInjection {
    fn from(inject: bool) -> Self {
        if inject {
            UuidInjection::Generate
        } else {
            UuidInjection::Off
        }
    }
}

/// Options for a single conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    pub uuid: UuidInjection,
    pub scalar_style: ScalarStyle,
    pub writer: WriterOptions,
}

/// Convert a JSON value into the plist node it is written as.
pub fn node_from_json(value: &Value, style: ScalarStyle) -> PlistNode {
    match value {
        Value::Object(map) => PlistNode::Dict(
            map.iter()
                .map(|(key, value)| (key.clone(), node_from_json(value, style)))
                .collect(),
        ),
        Value::Array(items) => PlistNode::Array(items.iter().map(|item| node_from_json(item, style)).collect()),
        Value::String(s) => PlistNode::String(s.clone()),
        Value::Number(n) => PlistNode::String(n.to_string()),
        Value::Bool(b) => PlistNode::from(style.bool_text(*b)),
        Value::Null => PlistNode::from(style.null_text()),
    }
}

impl PlistDocument {
    /// Build a document whose root element holds the conversion of `value`.
    pub fn from_json(value: &Value, style: ScalarStyle) -> Self {
        PlistDocument::with_root(node_from_json(value, style))
    }

    /// Parse JSON text (keeping object key order) and build a document from it.
    pub fn from_json_str(json_text: &str, style: ScalarStyle) -> Result<Self> {
        let value: Value = serde_json::from_str(json_text)?;
        debug!("parsed {} bytes of JSON", json_text.len());
        Ok(Self::from_json(&value, style))
    }

    /// Serialize to XML text.
    pub fn to_xml(&self, options: &WriterOptions) -> String {
        build_with_options(self, options)
    }
}

/// Convert JSON text to a plist XML document, optionally tagging it with a random UUID.
pub fn convert(json_text: &str, inject_uuid: bool) -> Result<String> {
    let options = ConvertOptions {
        uuid: inject_uuid.into(),
        ..ConvertOptions::default()
    };
    convert_with_options(json_text, &options)
}

pub fn convert_with_options(json_text: &str, options: &ConvertOptions) -> Result<String> {
    let mut document = PlistDocument::from_json_str(json_text, options.scalar_style)?;

    if let Some(uuid) = options.uuid.resolve() {
        if document.inject_uuid(&uuid) {
            debug!("injected uuid {}", uuid);
        } else {
            warn!("top-level value is not an object; uuid not injected");
        }
    }

    Ok(document.to_xml(&options.writer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use serde_json::json;

    fn keys(node: &PlistNode) -> Vec<&str> {
        node.as_dict().unwrap().keys().map(String::as_str).collect()
    }

    /// Render a scalar parsed from JSON text, so numbers keep their source form.
    fn render(json_text: &str, style: ScalarStyle) -> String {
        let value: Value = serde_json::from_str(json_text).unwrap();
        node_from_json(&value, style).as_str().unwrap().to_string()
    }

    #[test]
    fn test_object_keeps_key_order() {
        let doc = PlistDocument::from_json_str(r#"{"z": 1, "a": 2, "m": {"y": 0, "b": 0}}"#, ScalarStyle::Canonical)
            .unwrap();
        let root = doc.root.as_ref().unwrap();
        assert_eq!(keys(root), vec!["z", "a", "m"]);
        assert_eq!(keys(root.get("m").unwrap()), vec!["y", "b"]);
    }

    #[test]
    fn test_array_keeps_length_and_order() {
        let node = node_from_json(&json!(["b", ["c"], {"d": "e"}, 1]), ScalarStyle::Canonical);
        let items = node.as_array().unwrap();
        assert_eq!(items.len(), 4);
        assert_eq!(items[0], PlistNode::from("b"));
        assert_eq!(items[1], PlistNode::Array(vec![PlistNode::from("c")]));
        assert_eq!(items[2].get("d").and_then(|v| v.as_str()), Some("e"));
        assert_eq!(items[3], PlistNode::from("1"));
    }

    #[test]
    fn test_scalar_rendering_canonical() {
        let style = ScalarStyle::Canonical;
        assert_eq!(node_from_json(&json!(42), style).as_str(), Some("42"));
        assert_eq!(node_from_json(&json!(-7), style).as_str(), Some("-7"));
        assert_eq!(node_from_json(&json!(1.5), style).as_str(), Some("1.5"));
        assert_eq!(node_from_json(&json!("abc"), style).as_str(), Some("abc"));
        assert_eq!(node_from_json(&json!(true), style).as_str(), Some("true"));
        assert_eq!(node_from_json(&json!(false), style).as_str(), Some("false"));
        assert_eq!(node_from_json(&Value::Null, style).as_str(), Some("null"));
    }

    #[test]
    fn test_number_text_is_kept_canonical() {
        let style = ScalarStyle::Canonical;
        assert_eq!(render("18446744073709551616", style), "18446744073709551616");
        assert_eq!(render("123456789012345678901", style), "123456789012345678901");
        assert_eq!(render("-9223372036854775809", style), "-9223372036854775809");
        assert_eq!(render("1e5", style), "1e5");
        assert_eq!(render("2.5E-3", style), "2.5E-3");
        assert_eq!(render("1e400", style), "1e400");
        assert_eq!(render("-0", style), "-0");
        assert_eq!(render("-0.0", style), "-0.0");
    }

    #[test]
    fn test_scalar_rendering_legacy() {
        let style = ScalarStyle::Legacy;
        assert_eq!(node_from_json(&json!(42), style).as_str(), Some("42"));
        assert_eq!(node_from_json(&json!("abc"), style).as_str(), Some("abc"));
        assert_eq!(node_from_json(&json!(true), style).as_str(), Some("True"));
        assert_eq!(node_from_json(&json!(false), style).as_str(), Some("False"));
        assert_eq!(node_from_json(&Value::Null, style).as_str(), Some("None"));
        assert_eq!(render("18446744073709551616", style), "18446744073709551616");
        assert_eq!(render("1e5", style), "1e5");
        assert_eq!(render("-0", style), "-0");
    }

    #[test]
    fn test_huge_numbers_convert_without_error() {
        let xml = convert("[18446744073709551616, 123456789012345678901, 1e400]", false).unwrap();
        assert!(xml.contains("<string>18446744073709551616</string>"));
        assert!(xml.contains("<string>123456789012345678901</string>"));
        assert!(xml.contains("<string>1e400</string>"));
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let err = convert("{\"name\": ", false).unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
        assert!(convert("", false).is_err());
        assert!(convert("{'single': 'quotes'}", false).is_err());
    }

    #[test]
    fn test_fixed_uuid_is_first_pair() {
        let uuid = Uuid::parse_str("6ba7b810-9dad-11d1-80b4-00c04fd430c8").unwrap();
        let options = ConvertOptions {
            uuid: UuidInjection::Fixed(uuid),
            ..ConvertOptions::default()
        };
        let xml = convert_with_options(r#"{"name": "Test"}"#, &options).unwrap();
        assert!(xml.contains(
            "    <dict>\n        <key>uuid</key>\n        <string>6ba7b810-9dad-11d1-80b4-00c04fd430c8</string>\n        <key>name</key>\n"
        ));
    }

    #[test]
    fn test_existing_uuid_key_is_kept() {
        let options = ConvertOptions {
            uuid: UuidInjection::Fixed(Uuid::nil()),
            ..ConvertOptions::default()
        };
        let xml = convert_with_options(r#"{"name": "T", "uuid": "keep-me", "z": 1}"#, &options).unwrap();
        let key_lines: Vec<&str> = xml.lines().map(str::trim).filter(|l| l.starts_with("<key>")).collect();
        assert_eq!(
            key_lines,
            vec!["<key>uuid</key>", "<key>name</key>", "<key>uuid</key>", "<key>z</key>"]
        );
        assert!(xml.contains("<string>00000000-0000-0000-0000-000000000000</string>"));
        assert!(xml.contains("<string>keep-me</string>"));
    }

    #[test]
    fn test_generated_uuid_is_valid() {
        let xml = convert(r#"{"name": "Test"}"#, true).unwrap();
        let start = xml.find("<key>uuid</key>").unwrap();
        let value = &xml[start..];
        let open = value.find("<string>").unwrap() + "<string>".len();
        let close = value.find("</string>").unwrap();
        assert!(Uuid::parse_str(&value[open..close]).is_ok());
    }

    #[test]
    fn test_uuid_on_non_object_is_not_an_error() {
        for input in ["[]", "[1, 2]", "\"text\"", "3", "null"] {
            let with_uuid = convert(input, true).unwrap();
            let without_uuid = convert(input, false).unwrap();
            assert_eq!(with_uuid, without_uuid, "input {}", input);
            assert!(!with_uuid.contains("<key>uuid</key>"));
        }
    }

    #[test]
    fn test_uuid_on_empty_object() {
        let xml = convert("{}", true).unwrap();
        assert!(xml.contains("<dict>\n        <key>uuid</key>\n"));
        assert!(!convert("{}", false).unwrap().contains("uuid"));
    }

    #[test]
    fn test_reconversion_is_byte_identical() {
        let input = r#"{"name": "Test", "patterns": [{"match": "\\b(if)\\b"}], "n": null}"#;
        assert_eq!(convert(input, false).unwrap(), convert(input, false).unwrap());
    }
}
