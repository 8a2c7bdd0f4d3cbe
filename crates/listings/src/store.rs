//! In-memory listing store

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use aqarkam_core::{ListingSummary, Result, SearchGateway, SearchParams};

/// Moderation status of a listing. The gateway only serves approved ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingStatus {
    Pending,
    Approved,
    Rejected,
}

/// One stored property listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    pub title: String,
    pub price: f64,
    pub location: String,
    #[serde(rename = "type")]
    pub type_: String,
    pub purpose: String,
    pub area: f64,
    #[serde(rename = "mainImage")]
    pub main_image: String,
    pub status: ListingStatus,
    pub created_at: DateTime<Utc>,
}

impl Listing {
    /// Whether this listing satisfies the extracted parameters. Type and
    /// purpose match exactly; location matches as a substring in either
    /// direction ("المعادي" finds "المعادي الجديدة" and vice versa). The
    /// raw numeric substrings are not compared here — numeric filtering is
    /// a separate concern downstream.
    fn matches(&self, params: &SearchParams) -> bool {
        if let Some(type_) = &params.type_ {
            if &self.type_ != type_ {
                return false;
            }
        }
        if let Some(purpose) = &params.purpose {
            if &self.purpose != purpose {
                return false;
            }
        }
        if let Some(location) = &params.location {
            if !self.location.contains(location.as_str()) && !location.contains(&self.location) {
                return false;
            }
        }
        true
    }

    fn summary(&self) -> ListingSummary {
        ListingSummary {
            title: self.title.clone(),
            price: self.price,
            location: self.location.clone(),
            type_: self.type_.clone(),
            purpose: self.purpose.clone(),
            area: self.area,
            main_image: self.main_image.clone(),
        }
    }
}

/// Process-local listing datastore.
pub struct InMemoryListingStore {
    listings: RwLock<Vec<Listing>>,
    limit: usize,
}

impl InMemoryListingStore {
    pub fn new(limit: usize) -> Self {
        Self {
            listings: RwLock::new(Vec::new()),
            limit,
        }
    }

    pub fn with_listings(limit: usize, listings: Vec<Listing>) -> Self {
        Self {
            listings: RwLock::new(listings),
            limit,
        }
    }

    pub fn insert(&self, listing: Listing) {
        self.listings.write().push(listing);
    }

    pub fn len(&self) -> usize {
        self.listings.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.read().is_empty()
    }
}

#[async_trait]
impl SearchGateway for InMemoryListingStore {
    async fn search(&self, params: &SearchParams) -> Result<Vec<ListingSummary>> {
        let listings = self.listings.read();
        let mut matches: Vec<&Listing> = listings
            .iter()
            .filter(|l| l.status == ListingStatus::Approved && l.matches(params))
            .collect();

        // Newest first.
        matches.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let results: Vec<ListingSummary> =
            matches.into_iter().take(self.limit).map(Listing::summary).collect();
        tracing::debug!(count = results.len(), "listing search served");
        Ok(results)
    }
}

/// Seed data for the demo server.
pub fn sample_listings() -> Vec<Listing> {
    let now = Utc::now();
    let listing = |title: &str,
                   price: f64,
                   location: &str,
                   type_: &str,
                   purpose: &str,
                   area: f64,
                   status: ListingStatus,
                   age_days: i64| Listing {
        title: title.to_string(),
        price,
        location: location.to_string(),
        type_: type_.to_string(),
        purpose: purpose.to_string(),
        area,
        main_image: format!("/uploads/{}.jpg", title.replace(' ', "-")),
        status,
        created_at: now - Duration::days(age_days),
    };

    vec![
        listing("شقة مفروشة بالمعادي", 850_000.0, "المعادي", "شقة", "بيع", 130.0, ListingStatus::Approved, 2),
        listing("شقة للإيجار بالمعادي", 9_000.0, "المعادي", "شقة", "إيجار", 110.0, ListingStatus::Approved, 5),
        listing("شقة حديثة بالمعادي", 7_500.0, "المعادي", "شقة", "إيجار", 95.0, ListingStatus::Approved, 1),
        listing("شقة واسعة بالمعادي", 11_000.0, "المعادي", "شقة", "إيجار", 150.0, ListingStatus::Approved, 9),
        listing("فيلا بحديقة في التجمع الخامس", 6_500_000.0, "التجمع الخامس", "فيلا", "بيع", 420.0, ListingStatus::Approved, 3),
        listing("محل تجاري بشارع الجمهورية", 1_200_000.0, "شارع الجمهورية", "محل", "بيع", 60.0, ListingStatus::Approved, 12),
        listing("أرض بناء بحي المقطم", 2_000_000.0, "المقطم", "أرض", "بيع", 300.0, ListingStatus::Approved, 20),
        listing("شقة تحت المراجعة", 500_000.0, "المعادي", "شقة", "بيع", 100.0, ListingStatus::Pending, 0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> InMemoryListingStore {
        InMemoryListingStore::with_listings(3, sample_listings())
    }

    fn params_for_rent_flat() -> SearchParams {
        SearchParams {
            type_: Some("شقة".to_string()),
            purpose: Some("إيجار".to_string()),
            location: Some("المعادي".to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn filters_sorts_and_limits() {
        let results = store().search(&params_for_rent_flat()).await.unwrap();
        assert_eq!(results.len(), 3);
        // Newest of the three rental flats first.
        assert_eq!(results[0].title, "شقة حديثة بالمعادي");
        assert!(results.iter().all(|r| r.type_ == "شقة" && r.purpose == "إيجار"));
    }

    #[tokio::test]
    async fn pending_listings_are_invisible() {
        let params = SearchParams {
            type_: Some("شقة".to_string()),
            purpose: Some("بيع".to_string()),
            location: Some("المعادي".to_string()),
            ..Default::default()
        };
        let results = store().search(&params).await.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "شقة مفروشة بالمعادي");
    }

    #[tokio::test]
    async fn raw_numeric_params_do_not_filter() {
        let mut params = params_for_rent_flat();
        params.price_range = Some("500 الف".to_string());
        let results = store().search(&params).await.unwrap();
        assert_eq!(results.len(), 3);
    }

    #[tokio::test]
    async fn unknown_location_finds_nothing() {
        let params = SearchParams {
            location: Some("المنصورة".to_string()),
            ..Default::default()
        };
        let results = store().search(&params).await.unwrap();
        assert!(results.is_empty());
    }
}
