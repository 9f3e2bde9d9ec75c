use roost_core::{BookingRepository, ProfileRepository, PropertyRepository};
use roost_store::InMemoryStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub bookings: Arc<dyn BookingRepository>,
    pub properties: Arc<dyn PropertyRepository>,
    pub profile: Arc<dyn ProfileRepository>,
}

impl AppState {
    /// All three repositories backed by the same in-memory store.
    pub fn in_memory(store: Arc<InMemoryStore>) -> Self {
        Self {
            bookings: store.clone(),
            properties: store.clone(),
            profile: store,
        }
    }
}
