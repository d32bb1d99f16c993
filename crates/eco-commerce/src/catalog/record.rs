//! Normalization of loosely-typed product records.
//!
//! Remote catalog endpoints return JSON arrays whose entries may miss
//! fields or carry them with the wrong type. Every record passes through
//! [`normalize`] exactly once, producing either a validated [`Product`] or
//! a [`RecordRejection`] naming the reason.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::catalog::{EcoScore, Product};
use crate::ids::ProductId;
use crate::money::{Currency, Money};

/// Image used when a record has none.
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/300x300?text=No+Image";

/// Scrapers emit this for cards without a title.
const UNTITLED_MARKER: &str = "untitled product";

/// A single product record as received from an external source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawProductRecord(pub Value);

impl From<Value> for RawProductRecord {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Why a record did not become a product.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecordRejection {
    /// The record is not a JSON object.
    #[error("record is not an object")]
    NotAnObject,

    /// Price is negative or not finite.
    #[error("invalid price {0}")]
    InvalidPrice(f64),

    /// Eco-score is numeric but outside 0..=100.
    #[error("eco-score {0} is outside 0..=100")]
    EcoScoreOutOfRange(f64),

    /// Another accepted record already uses this identifier.
    #[error("duplicate id {0}")]
    DuplicateId(String),
}

/// A rejected record with its position in the source sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Rejected {
    pub index: usize,
    pub reason: RecordRejection,
}

/// Validate one record, filling defaults for missing fields.
///
/// `index` is the record's position in the source array; it seeds the
/// placeholder name and identifier.
pub fn normalize(record: &RawProductRecord, index: usize) -> Result<Product, RecordRejection> {
    let fields = record.0.as_object().ok_or(RecordRejection::NotAnObject)?;

    let name = display_name(fields).unwrap_or_else(|| format!("Eco Product {}", index + 1));
    let id = identifier(fields)
        .or_else(|| non_blank_str(fields, "name").map(str::to_string))
        .unwrap_or_else(|| format!("product-{}", index));

    let price = price(fields)?;
    let price = Money::price(price, Currency::default())
        .map_err(|_| RecordRejection::InvalidPrice(price))?;

    let eco_score = eco_score(fields)?;

    Ok(Product {
        id: ProductId::new(id),
        name,
        image: non_blank_str(fields, "image")
            .unwrap_or(PLACEHOLDER_IMAGE)
            .to_string(),
        price,
        materials: string_list(fields, "materials"),
        brand: fields
            .get("brand")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        certifications: string_list(fields, "certifications"),
        eco_score,
        badges: string_list(fields, "badges"),
        sustainability_tags: string_list(fields, "sustainabilityTags"),
    })
}

fn non_blank_str<'a>(fields: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    fields
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
}

fn display_name(fields: &Map<String, Value>) -> Option<String> {
    ["title", "name"]
        .iter()
        .filter_map(|key| non_blank_str(fields, key))
        .find(|name| !name.to_lowercase().contains(UNTITLED_MARKER))
        .map(str::to_string)
}

fn identifier(fields: &Map<String, Value>) -> Option<String> {
    match fields.get("id")? {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn price(fields: &Map<String, Value>) -> Result<f64, RecordRejection> {
    let raw = match fields.get("price") {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    };
    if raw.is_finite() && raw >= 0.0 {
        Ok(raw)
    } else {
        Err(RecordRejection::InvalidPrice(raw))
    }
}

fn eco_score(fields: &Map<String, Value>) -> Result<EcoScore, RecordRejection> {
    let Some(raw) = fields.get("ecoScore").and_then(Value::as_f64) else {
        return Ok(EcoScore::default());
    };
    if raw.fract() != 0.0 {
        return Err(RecordRejection::EcoScoreOutOfRange(raw));
    }
    EcoScore::new(raw as i64).map_err(|_| RecordRejection::EcoScoreOutOfRange(raw))
}

fn string_list(fields: &Map<String, Value>, key: &str) -> Vec<String> {
    fields
        .get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> RawProductRecord {
        RawProductRecord(value)
    }

    #[test]
    fn test_full_record() {
        let product = normalize(
            &record(json!({
                "id": "2",
                "name": "Recycled Plastic Water Bottle",
                "image": "https://img/bottle.jpg",
                "price": 299,
                "materials": ["recycled plastic"],
                "brand": "EcoSip",
                "certifications": ["BPA-Free"],
                "ecoScore": 85,
                "badges": ["Bestseller"]
            })),
            0,
        )
        .unwrap();

        assert_eq!(product.id.as_str(), "2");
        assert_eq!(product.price.display_compact(), "\u{20b9}299");
        assert_eq!(product.materials, vec!["recycled plastic"]);
        assert_eq!(product.eco_score.value(), 85);
        assert_eq!(product.badges, vec!["Bestseller"]);
        assert!(product.sustainability_tags.is_empty());
    }

    #[test]
    fn test_empty_object_gets_defaults() {
        let product = normalize(&record(json!({})), 4).unwrap();
        assert_eq!(product.name, "Eco Product 5");
        assert_eq!(product.id.as_str(), "product-4");
        assert_eq!(product.image, PLACEHOLDER_IMAGE);
        assert_eq!(product.price.amount_minor, 0);
        assert!(product.materials.is_empty());
        assert!(product.certifications.is_empty());
        assert_eq!(product.brand, "");
        assert_eq!(product.eco_score.value(), 0);
    }

    #[test]
    fn test_title_preferred_and_untitled_skipped() {
        let product = normalize(
            &record(json!({"title": "Hemp Tote", "name": "ignored"})),
            0,
        )
        .unwrap();
        assert_eq!(product.name, "Hemp Tote");

        let product = normalize(
            &record(json!({"title": "Untitled Product #3", "name": "Cork Mat"})),
            0,
        )
        .unwrap();
        assert_eq!(product.name, "Cork Mat");

        let product = normalize(&record(json!({"title": "untitled product #9"})), 8).unwrap();
        assert_eq!(product.name, "Eco Product 9");
    }

    #[test]
    fn test_id_falls_back_to_raw_name() {
        let product = normalize(&record(json!({"name": "Cork Mat"})), 1).unwrap();
        assert_eq!(product.id.as_str(), "Cork Mat");

        let product = normalize(&record(json!({"id": 42, "name": "Cork Mat"})), 1).unwrap();
        assert_eq!(product.id.as_str(), "42");
    }

    #[test]
    fn test_string_price_is_parsed() {
        let product = normalize(&record(json!({"price": "24.99"})), 0).unwrap();
        assert_eq!(product.price.amount_minor, 2499);

        let product = normalize(&record(json!({"price": "n/a"})), 0).unwrap();
        assert_eq!(product.price.amount_minor, 0);
    }

    #[test]
    fn test_rejections() {
        assert_eq!(
            normalize(&record(json!("just a string")), 0),
            Err(RecordRejection::NotAnObject)
        );
        assert_eq!(
            normalize(&record(json!({"price": -5})), 0),
            Err(RecordRejection::InvalidPrice(-5.0))
        );
        assert_eq!(
            normalize(&record(json!({"ecoScore": 140})), 0),
            Err(RecordRejection::EcoScoreOutOfRange(140.0))
        );
    }

    #[test]
    fn test_non_numeric_eco_score_defaults_to_zero() {
        let product = normalize(&record(json!({"ecoScore": "high"})), 0).unwrap();
        assert_eq!(product.eco_score.value(), 0);
    }

    #[test]
    fn test_non_string_list_entries_are_dropped() {
        let product = normalize(
            &record(json!({"materials": ["cork", 7, null, "jute"], "certifications": "FSC"})),
            0,
        )
        .unwrap();
        assert_eq!(product.materials, vec!["cork", "jute"]);
        assert!(product.certifications.is_empty());
    }
}
