//! Listing datastore
//!
//! The search-gateway side of the chat service: property listings with an
//! approval status, queried by the extracted search parameters. The store
//! only ever serves approved listings, newest first, capped at the
//! configured limit.

pub mod store;

pub use store::{InMemoryListingStore, Listing, ListingStatus, sample_listings};
