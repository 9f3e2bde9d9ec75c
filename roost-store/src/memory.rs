use crate::StoreError;
use async_trait::async_trait;
use roost_core::repository::join_property;
use roost_core::{BookingRepository, CoreError, ProfileRepository, PropertyRepository, RepoResult};
use roost_shared::{Booking, BookingWithProperty, Masked, NewBooking, Profile, Property};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

/// Initial contents of the store, in the shape of a json-server `db.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Seed {
    #[serde(default)]
    pub properties: Vec<Property>,
    #[serde(default)]
    pub bookings: Vec<Booking>,
    #[serde(default = "guest_profile")]
    pub profile: Profile,
}

fn guest_profile() -> Profile {
    Profile {
        id: "user1".to_string(),
        name: "Guest".to_string(),
        email: Masked("guest@example.com".to_string()),
        bookings: Vec::new(),
    }
}

impl Default for Seed {
    fn default() -> Self {
        Self {
            properties: Vec::new(),
            bookings: Vec::new(),
            profile: guest_profile(),
        }
    }
}

impl Seed {
    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let raw = tokio::fs::read_to_string(path).await?;
        Ok(serde_json::from_str(&raw)?)
    }
}

/// Booking, property and profile data held in process memory.
pub struct InMemoryStore {
    properties: RwLock<Vec<Property>>,
    bookings: RwLock<Vec<Booking>>,
    profile: RwLock<Profile>,
}

impl InMemoryStore {
    pub fn new(seed: Seed) -> Self {
        info!(
            properties = seed.properties.len(),
            bookings = seed.bookings.len(),
            "Seeded in-memory store"
        );
        Self {
            properties: RwLock::new(seed.properties),
            bookings: RwLock::new(seed.bookings),
            profile: RwLock::new(seed.profile),
        }
    }

    pub async fn insert_property(&self, property: Property) {
        let mut properties = self.properties.write().await;
        properties.retain(|p| p.id != property.id);
        properties.push(property);
    }

    /// Drop a property from the catalogue. Bookings that point at it are
    /// kept.
    pub async fn remove_property(&self, id: &str) -> Option<Property> {
        let mut properties = self.properties.write().await;
        let index = properties.iter().position(|p| p.id == id)?;
        Some(properties.remove(index))
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new(Seed::default())
    }
}

#[async_trait]
impl BookingRepository for InMemoryStore {
    async fn create(&self, request: &NewBooking) -> RepoResult<BookingWithProperty> {
        if request.check_out_date <= request.check_in_date {
            return Err(CoreError::ValidationError(
                "check-out must be after check-in".to_string(),
            )
            .into());
        }

        let properties = self.properties.read().await;
        if !properties.iter().any(|p| p.id == request.property_id) {
            return Err(CoreError::NotFound(format!("property {}", request.property_id)).into());
        }

        let mut profile = self.profile.write().await;
        let booking = Booking {
            id: Uuid::new_v4().to_string(),
            property_id: request.property_id.clone(),
            user_id: Some(profile.id.clone()),
            check_in_date: Some(request.check_in_date.to_string()),
            check_out_date: Some(request.check_out_date.to_string()),
            status: Some(request.status.clone()),
        };
        profile.bookings.push(booking.id.clone());
        self.bookings.write().await.push(booking.clone());

        Ok(join_property(booking, &properties))
    }

    async fn list(&self) -> RepoResult<Vec<BookingWithProperty>> {
        let properties = self.properties.read().await;
        let bookings = self.bookings.read().await;
        Ok(bookings
            .iter()
            .cloned()
            .map(|b| join_property(b, &properties))
            .collect())
    }
}

#[async_trait]
impl PropertyRepository for InMemoryStore {
    async fn list_properties(&self) -> RepoResult<Vec<Property>> {
        Ok(self.properties.read().await.clone())
    }

    async fn get_property(&self, id: &str) -> RepoResult<Option<Property>> {
        Ok(self.properties.read().await.iter().find(|p| p.id == id).cloned())
    }
}

#[async_trait]
impl ProfileRepository for InMemoryStore {
    async fn get_profile(&self) -> RepoResult<Profile> {
        Ok(self.profile.read().await.clone())
    }
}
