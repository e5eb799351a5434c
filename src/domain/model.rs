use crate::utils::error::{Result, ToolError};
use serde::Deserialize;
use serde_json::Value;

/// Label used for records without a usable `sellerName`, and for absent values when printed.
pub const NONE_LABEL: &str = "None";

/// One product entry. Every field is optional; JSON `null` is read as absent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProductRecord {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default, rename = "sellerName")]
    pub seller_name: Option<Value>,
    #[serde(default, rename = "createdAt")]
    pub created_at: Option<Value>,
}

impl ProductRecord {
    /// Grouping key for the seller summary. Missing and falsy sellers (null, `""`, `0`,
    /// `false`, `[]`, `{}`) collapse to `None`.
    pub fn seller_label(&self) -> String {
        match self.seller_name.as_ref() {
            Some(value) if !is_falsy(value) => display_value(value),
            _ => NONE_LABEL.to_string(),
        }
    }

    /// Case-insensitive substring match of `name` against any of `keywords`.
    pub fn matches_any(&self, keywords: &[&str]) -> bool {
        let name = self
            .name
            .as_ref()
            .map(display_value)
            .unwrap_or_default()
            .to_lowercase();

        keywords.iter().any(|keyword| name.contains(keyword))
    }
}

/// Pagination fields echoed from a wrapped listing.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ListingMeta {
    #[serde(default, rename = "hasMore")]
    pub has_more: Option<Value>,
    #[serde(default)]
    pub limit: Option<Value>,
    #[serde(default)]
    pub offset: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct RawListing {
    #[serde(default)]
    products: Option<Vec<ProductRecord>>,
    #[serde(flatten)]
    meta: ListingMeta,
}

/// The two accepted input shapes, resolved once before any reporting.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductDocument {
    /// Top-level object; records come from its `products` key.
    Listing {
        products: Vec<ProductRecord>,
        meta: ListingMeta,
    },
    /// Top-level array of records.
    Bare(Vec<ProductRecord>),
}

impl ProductDocument {
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(bytes)?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(_) => {
                let raw: RawListing = serde_json::from_value(value)?;
                let products = raw.products.unwrap_or_else(|| {
                    tracing::warn!(
                        "Document is an object without a `products` key; treating it as an empty listing"
                    );
                    Vec::new()
                });
                Ok(Self::Listing {
                    products,
                    meta: raw.meta,
                })
            }
            Value::Array(_) => Ok(Self::Bare(serde_json::from_value(value)?)),
            other => Err(ToolError::InvalidDocument {
                message: format!(
                    "expected an object or an array of products, found {}",
                    json_kind(&other)
                ),
            }),
        }
    }

    pub fn records(&self) -> &[ProductRecord] {
        match self {
            Self::Listing { products, .. } => products,
            Self::Bare(products) => products,
        }
    }

    pub fn listing_meta(&self) -> Option<&ListingMeta> {
        match self {
            Self::Listing { meta, .. } => Some(meta),
            Self::Bare(_) => None,
        }
    }
}

/// Strings print bare, other JSON values in compact JSON form.
/// Only absence uses the `None` marker; present booleans keep their JSON spelling.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Like [`display_value`], with absent values printed as `None`.
pub fn display_field(value: Option<&Value>) -> String {
    value.map(display_value).unwrap_or_else(|| NONE_LABEL.to_string())
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> ProductRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_listing_document_keeps_meta() {
        let doc = ProductDocument::from_slice(
            br#"{"products": [{"id": 1}, {"id": 2}], "hasMore": false, "limit": 10, "offset": 0}"#,
        )
        .unwrap();

        assert_eq!(doc.records().len(), 2);
        let meta = doc.listing_meta().unwrap();
        assert_eq!(meta.has_more, Some(json!(false)));
        assert_eq!(meta.limit, Some(json!(10)));
        assert_eq!(meta.offset, Some(json!(0)));
    }

    #[test]
    fn test_bare_array_has_no_meta() {
        let doc = ProductDocument::from_slice(br#"[{"name": "a"}, {"name": "b"}, {}]"#).unwrap();

        assert!(matches!(doc, ProductDocument::Bare(_)));
        assert_eq!(doc.records().len(), 3);
        assert!(doc.listing_meta().is_none());
    }

    #[test]
    fn test_object_without_products_is_empty_listing() {
        let doc = ProductDocument::from_slice(br#"{"items": [{"id": 1}], "limit": 5}"#).unwrap();

        assert!(doc.records().is_empty());
        let meta = doc.listing_meta().unwrap();
        assert_eq!(meta.limit, Some(json!(5)));
        assert_eq!(meta.has_more, None);
    }

    #[test]
    fn test_scalar_document_is_rejected() {
        let err = ProductDocument::from_slice(b"\"products\"").unwrap_err();
        assert!(matches!(err, ToolError::InvalidDocument { .. }));
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        let err = ProductDocument::from_slice(b"{\"products\": [").unwrap_err();
        assert!(matches!(err, ToolError::SerializationError(_)));
    }

    #[test]
    fn test_non_object_record_is_rejected() {
        assert!(ProductDocument::from_slice(br#"[1, 2, 3]"#).is_err());
    }

    #[test]
    fn test_seller_label_normalization() {
        assert_eq!(record(json!({"sellerName": "Alice"})).seller_label(), "Alice");
        assert_eq!(record(json!({"sellerName": ""})).seller_label(), "None");
        assert_eq!(record(json!({"sellerName": null})).seller_label(), "None");
        assert_eq!(record(json!({})).seller_label(), "None");
        assert_eq!(record(json!({"sellerName": 0})).seller_label(), "None");
        assert_eq!(record(json!({"sellerName": false})).seller_label(), "None");
        assert_eq!(record(json!({"sellerName": []})).seller_label(), "None");
        assert_eq!(record(json!({"sellerName": {}})).seller_label(), "None");
        assert_eq!(record(json!({"sellerName": 7})).seller_label(), "7");
        assert_eq!(record(json!({"sellerName": true})).seller_label(), "true");
    }

    #[test]
    fn test_keyword_match_is_case_insensitive() {
        let keywords = ["chaussure", "chaussur"];

        assert!(record(json!({"name": "Chaussures Nike"})).matches_any(&keywords));
        assert!(record(json!({"name": "CHAUSSURE de ville"})).matches_any(&keywords));
        assert!(!record(json!({"name": "Sac à main"})).matches_any(&keywords));
        assert!(!record(json!({})).matches_any(&keywords));
    }

    #[test]
    fn test_display_field() {
        assert_eq!(display_field(Some(&json!("x"))), "x");
        assert_eq!(display_field(Some(&json!(42))), "42");
        assert_eq!(display_field(Some(&json!(true))), "true");
        assert_eq!(display_field(None), "None");
    }
}
