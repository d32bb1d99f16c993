//! Product and eco-score types.

use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Environmental rating of a product, 0 to 100 inclusive. Higher is greener.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(try_from = "i64", into = "u8")]
pub struct EcoScore(u8);

impl EcoScore {
    /// Create a score, rejecting values outside 0..=100.
    pub fn new(value: i64) -> Result<Self, CommerceError> {
        if (0..=100).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(CommerceError::EcoScoreOutOfRange(value))
        }
    }

    /// Get the raw score.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Badge band for this score.
    pub fn tier(&self) -> EcoTier {
        EcoTier::for_score(*self)
    }
}

impl TryFrom<i64> for EcoScore {
    type Error = CommerceError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        EcoScore::new(value)
    }
}

impl From<EcoScore> for u8 {
    fn from(score: EcoScore) -> Self {
        score.0
    }
}

impl fmt::Display for EcoScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Badge band of an eco-score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EcoTier {
    /// 80 and above.
    High,
    /// 50 to 79.
    Medium,
    /// Below 50.
    Low,
}

impl EcoTier {
    pub fn for_score(score: EcoScore) -> Self {
        match score.value() {
            80..=100 => EcoTier::High,
            50..=79 => EcoTier::Medium,
            _ => EcoTier::Low,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EcoTier::High => "high",
            EcoTier::Medium => "medium",
            EcoTier::Low => "low",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            EcoTier::High => "Eco Leader",
            EcoTier::Medium => "Eco Improving",
            EcoTier::Low => "Eco Concern",
        }
    }
}

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier within a catalog.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Image URL.
    pub image: String,
    /// Listing price.
    pub price: Money,
    /// Material tags (e.g., "organic cotton").
    pub materials: Vec<String>,
    /// Brand name.
    pub brand: String,
    /// Certification tags (e.g., "GOTS").
    pub certifications: Vec<String>,
    /// Environmental rating.
    pub eco_score: EcoScore,
    /// Marketing badges.
    #[serde(default)]
    pub badges: Vec<String>,
    /// Sustainability tags.
    #[serde(default)]
    pub sustainability_tags: Vec<String>,
}

impl Product {
    /// Create a product with no materials, certifications or tags.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Money,
        eco_score: EcoScore,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            image: String::new(),
            price,
            materials: Vec::new(),
            brand: String::new(),
            certifications: Vec::new(),
            eco_score,
            badges: Vec::new(),
            sustainability_tags: Vec::new(),
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = brand.into();
        self
    }

    pub fn with_materials<I, S>(mut self, materials: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.materials = materials.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_certifications<I, S>(mut self, certifications: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.certifications = certifications.into_iter().map(Into::into).collect();
        self
    }

    /// Lower-cased name, used by all text matching.
    pub fn name_key(&self) -> String {
        self.name.to_lowercase()
    }

    /// Lower-cased materials joined with single spaces.
    pub fn materials_key(&self) -> String {
        self.materials.join(" ").to_lowercase()
    }

    /// Badge band of this product's eco-score.
    pub fn tier(&self) -> EcoTier {
        self.eco_score.tier()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    #[test]
    fn test_eco_score_bounds() {
        assert!(EcoScore::new(0).is_ok());
        assert!(EcoScore::new(100).is_ok());
        assert_eq!(
            EcoScore::new(101),
            Err(CommerceError::EcoScoreOutOfRange(101))
        );
        assert!(EcoScore::new(-1).is_err());
    }

    #[test]
    fn test_eco_tiers() {
        assert_eq!(EcoScore::new(92).unwrap().tier(), EcoTier::High);
        assert_eq!(EcoScore::new(80).unwrap().tier(), EcoTier::High);
        assert_eq!(EcoScore::new(79).unwrap().tier(), EcoTier::Medium);
        assert_eq!(EcoScore::new(50).unwrap().tier(), EcoTier::Medium);
        assert_eq!(EcoScore::new(15).unwrap().tier(), EcoTier::Low);
    }

    #[test]
    fn test_eco_score_deserialize_rejects_out_of_range() {
        assert!(serde_json::from_str::<EcoScore>("150").is_err());
        assert_eq!(serde_json::from_str::<EcoScore>("78").unwrap().value(), 78);
    }

    #[test]
    fn test_product_keys() {
        let product = Product::new(
            "3",
            "Bamboo Toothbrush",
            Money::from_decimal(99.0, Currency::INR),
            EcoScore::new(78).unwrap(),
        )
        .with_materials(["Bamboo", "Castor Oil Bristles"]);

        assert_eq!(product.name_key(), "bamboo toothbrush");
        assert_eq!(product.materials_key(), "bamboo castor oil bristles");
        assert_eq!(product.tier(), EcoTier::Medium);
    }
}
