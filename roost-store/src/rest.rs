use crate::app_config::ApiConfig;
use crate::StoreError;
use async_trait::async_trait;
use futures_util::future::try_join_all;
use reqwest::StatusCode;
use roost_core::{BookingRepository, ProfileRepository, PropertyRepository, RepoResult};
use roost_shared::{Booking, BookingWithProperty, NewBooking, Profile, Property};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Client for the booking backend's REST API.
#[derive(Clone)]
pub struct RestClient {
    http: reqwest::Client,
    base_url: String,
}

impl RestClient {
    pub fn new(api: &ApiConfig) -> Result<Self, StoreError> {
        let http = reqwest::Client::builder().timeout(api.timeout()).build()?;
        Ok(Self {
            http,
            base_url: api.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, StoreError> {
        let status = resp.status();
        if !status.is_success() {
            return Err(StoreError::Status {
                status: status.as_u16(),
                url: resp.url().to_string(),
            });
        }
        resp.json::<T>()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, StoreError> {
        let url = self.url(path);
        debug!(%url, "GET");
        let resp = self.http.get(&url).send().await?;
        Self::decode(resp).await
    }

    /// `None` when the backend answers 404.
    async fn fetch_property(&self, id: &str) -> Result<Option<Property>, StoreError> {
        match self.get_json(&format!("properties/{}", id)).await {
            Ok(property) => Ok(Some(property)),
            Err(StoreError::Status { status, .. }) if status == StatusCode::NOT_FOUND.as_u16() => {
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    async fn with_property(&self, booking: Booking) -> Result<BookingWithProperty, StoreError> {
        let property = self.fetch_property(&booking.property_id).await?;
        Ok(BookingWithProperty::new(booking, property))
    }
}

#[async_trait]
impl BookingRepository for RestClient {
    async fn create(&self, booking: &NewBooking) -> RepoResult<BookingWithProperty> {
        let url = self.url("bookings");
        debug!(%url, property_id = %booking.property_id, "POST");
        let resp = self
            .http
            .post(&url)
            .json(booking)
            .send()
            .await
            .map_err(StoreError::from)?;
        let created: Booking = Self::decode(resp).await?;

        // The booking exists at this point; the property is only decoration.
        let property = match self.fetch_property(&created.property_id).await {
            Ok(property) => property,
            Err(e) => {
                warn!(
                    property_id = %created.property_id,
                    "Failed to fetch property details for new booking: {}", e
                );
                None
            }
        };

        Ok(BookingWithProperty::new(created, property))
    }

    async fn list(&self) -> RepoResult<Vec<BookingWithProperty>> {
        let bookings: Vec<Booking> = self.get_json("bookings").await?;
        let joined = try_join_all(bookings.into_iter().map(|b| self.with_property(b))).await?;
        Ok(joined)
    }
}

#[async_trait]
impl PropertyRepository for RestClient {
    async fn list_properties(&self) -> RepoResult<Vec<Property>> {
        Ok(self.get_json("properties").await?)
    }

    async fn get_property(&self, id: &str) -> RepoResult<Option<Property>> {
        Ok(self.fetch_property(id).await?)
    }
}

#[async_trait]
impl ProfileRepository for RestClient {
    async fn get_profile(&self) -> RepoResult<Profile> {
        Ok(self.get_json("profile").await?)
    }
}
