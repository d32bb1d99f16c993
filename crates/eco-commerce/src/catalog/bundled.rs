//! The catalog shipped with the storefront.
//!
//! Used when no remote endpoint is configured and as the fallback when the
//! remote source fails.

use crate::catalog::{Catalog, EcoScore, Product};
use crate::money::{Currency, Money};

struct Entry {
    id: &'static str,
    name: &'static str,
    image: &'static str,
    price: i64,
    materials: &'static [&'static str],
    brand: &'static str,
    certifications: &'static [&'static str],
    eco_score: u8,
}

const ENTRIES: &[Entry] = &[
    Entry {
        id: "1",
        name: "Organic Cotton T-Shirt",
        image: "https://images.unsplash.com/photo-1512436991641-6745cdb1723f",
        price: 799,
        materials: &["organic cotton"],
        brand: "GreenWear",
        certifications: &["GOTS", "Fair Trade"],
        eco_score: 92,
    },
    Entry {
        id: "2",
        name: "Recycled Plastic Water Bottle",
        image: "https://images.unsplash.com/photo-1506744038136-46273834b3fb",
        price: 299,
        materials: &["recycled plastic"],
        brand: "EcoSip",
        certifications: &["BPA-Free"],
        eco_score: 85,
    },
    Entry {
        id: "3",
        name: "Bamboo Toothbrush",
        image: "https://images.unsplash.com/photo-1464983953574-0892a716854b",
        price: 99,
        materials: &["bamboo"],
        brand: "NatureSmile",
        certifications: &["FSC Certified"],
        eco_score: 78,
    },
    Entry {
        id: "4",
        name: "Conventional Plastic Bag",
        image: "https://images.unsplash.com/photo-1503602642458-232111445657",
        price: 10,
        materials: &["plastic"],
        brand: "Generic",
        certifications: &[],
        eco_score: 15,
    },
    Entry {
        id: "5",
        name: "Fair Trade Coffee Beans",
        image: "https://images.unsplash.com/photo-1504674900247-0877df9cc836",
        price: 499,
        materials: &["arabica beans"],
        brand: "Ethical Beans",
        certifications: &["Fair Trade", "Rainforest Alliance"],
        eco_score: 88,
    },
];

/// The bundled five-product catalog, priced in whole rupees.
pub fn bundled_catalog() -> Catalog {
    let products = ENTRIES
        .iter()
        .map(|entry| Product {
            id: entry.id.into(),
            name: entry.name.to_string(),
            image: entry.image.to_string(),
            price: Money::new(entry.price * 100, Currency::INR),
            materials: entry.materials.iter().map(|s| s.to_string()).collect(),
            brand: entry.brand.to_string(),
            certifications: entry.certifications.iter().map(|s| s.to_string()).collect(),
            eco_score: EcoScore::new(i64::from(entry.eco_score)).unwrap_or_default(),
            badges: Vec::new(),
            sustainability_tags: Vec::new(),
        })
        .collect();
    // Ids in ENTRIES are distinct literals.
    Catalog::new(products).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ProductId;

    #[test]
    fn test_bundled_catalog_is_complete() {
        let catalog = bundled_catalog();
        assert_eq!(catalog.len(), ENTRIES.len());

        let toothbrush = catalog.get(&ProductId::new("3")).unwrap();
        assert_eq!(toothbrush.name, "Bamboo Toothbrush");
        assert_eq!(toothbrush.price.display_compact(), "\u{20b9}99");
        assert_eq!(toothbrush.eco_score.value(), 78);
    }
}
