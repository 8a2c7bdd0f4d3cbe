//! Entity-extraction tables
//!
//! Synonym dictionaries for property type and purpose, the location
//! gazetteer, and the preposition/marker phrases used when the gazetteer
//! misses. All lists are ordered; the extractor stops at the first hit.

use serde::{Deserialize, Serialize};

/// Canonical value plus the surface forms that map to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynonymEntry {
    pub canonical: String,
    pub synonyms: Vec<String>,
}

/// All data the entity extractor needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Ordered property-type dictionary; first matching type wins.
    pub property_types: Vec<SynonymEntry>,
    /// Ordered purpose dictionary (بيع / إيجار).
    pub purposes: Vec<SynonymEntry>,
    /// Known location names, scanned in order.
    pub locations: Vec<String>,
    /// Marker phrases preceding a location mention, e.g. "في منطقة".
    pub location_markers: Vec<String>,
}

fn synonyms(canonical: &str, synonyms: &[&str]) -> SynonymEntry {
    SynonymEntry {
        canonical: canonical.to_string(),
        synonyms: synonyms.iter().map(|s| s.to_string()).collect(),
    }
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            property_types: vec![
                synonyms("شقة", &["شقة", "شقه", "شقق", "apartment", "flat"]),
                synonyms("فيلا", &["فيلا", "فيلل", "فلل", "villa", "فله"]),
                synonyms("محل", &["محل", "دكان", "متجر", "shop", "store"]),
                synonyms(
                    "أرض",
                    &["أرض", "ارض", "قطعة أرض", "قطعه ارض", "land", "قطعة", "قطعه"],
                ),
            ],
            purposes: vec![
                synonyms(
                    "بيع",
                    &["بيع", "شراء", "اشتري", "أشتري", "أبيع", "ابيع", "buy", "sell", "purchase"],
                ),
                synonyms(
                    "إيجار",
                    &["إيجار", "ايجار", "استئجار", "أستأجر", "استاجر", "rent", "lease", "rental"],
                ),
            ],
            locations: [
                "وسط المدينة",
                "وسط البلد",
                "الأربعين",
                "الاربعين",
                "شارع الجمهورية",
                "الجمهورية",
                "المعادي",
                "المعادى",
                "الزهور",
                "فيصل",
                "شارع فيصل",
                "العجمي",
                "العجمى",
                "الهرم",
                "شارع الهرم",
                "المهندسين",
                "مدينة نصر",
                "مدينه نصر",
                "التجمع الخامس",
                "التجمع",
                "المقطم",
                "حي المقطم",
                "المريوطية",
                "المريوطيه",
                "شبرا",
                "شبرا مصر",
                "حلوان",
                "المنيا",
                "المنيه",
                "أسيوط",
                "اسيوط",
                "الفيوم",
                "المنصورة",
                "المنصوره",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            location_markers: [
                "في منطقة",
                "في منطقه",
                "بمنطقة",
                "بمنطقه",
                "في حي",
                "بحي",
                "بشارع",
                "في شارع",
                "في مدينة",
                "في مدينه",
                "بمدينة",
                "بمدينه",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_are_populated() {
        let config = ExtractionConfig::default();
        assert_eq!(config.property_types.len(), 4);
        assert_eq!(config.purposes.len(), 2);
        assert!(config.locations.len() > 30);
        assert!(config.location_markers.len() >= 12);
    }

    #[test]
    fn apartment_synonyms_include_latin_forms() {
        let config = ExtractionConfig::default();
        let flat = &config.property_types[0];
        assert_eq!(flat.canonical, "شقة");
        assert!(flat.synonyms.contains(&"apartment".to_string()));
    }
}
