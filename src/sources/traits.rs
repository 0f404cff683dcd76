use crate::errors::ListingError;
use crate::models::Listing;
use async_trait::async_trait;

/// Common trait for all listing stores
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Every listing in the store, in store order
    async fn get_all(&self) -> Result<Vec<Listing>, ListingError>;

    /// A single listing by id
    async fn get_by_id(&self, id: u64) -> Result<Listing, ListingError>;

    /// Get the name of the listing source
    fn source_name(&self) -> &'static str;

    /// Listings priced within `[min_price, max_price]`
    async fn get_by_price_range(
        &self,
        min_price: f64,
        max_price: f64,
    ) -> Result<Vec<Listing>, ListingError> {
        let listings = self.get_all().await?;
        Ok(listings
            .into_iter()
            .filter(|l| min_price <= l.price && l.price <= max_price)
            .collect())
    }

    /// Listings in the given city and state, ignoring case
    async fn get_by_location(&self, city: &str, state: &str) -> Result<Vec<Listing>, ListingError> {
        let listings = self.get_all().await?;
        Ok(listings
            .into_iter()
            .filter(|l| {
                l.city.to_lowercase() == city.to_lowercase()
                    && l.state.to_lowercase() == state.to_lowercase()
            })
            .collect())
    }

    /// Case-insensitive substring search over the text fields and features
    async fn search(&self, query: &str) -> Result<Vec<Listing>, ListingError> {
        let term = query.to_lowercase();
        let listings = self.get_all().await?;
        Ok(listings
            .into_iter()
            .filter(|l| {
                [
                    l.address.as_str(),
                    l.city.as_str(),
                    l.state.as_str(),
                    l.title.as_str(),
                    l.description.as_str(),
                ]
                .into_iter()
                .chain(l.features.iter().map(String::as_str))
                .any(|field| field.to_lowercase().contains(&term))
            })
            .collect())
    }
}
