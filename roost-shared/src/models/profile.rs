use crate::pii::Masked;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    #[serde(deserialize_with = "super::deserialize_id")]
    pub id: String,
    pub name: String,
    pub email: Masked<String>,
    /// Ids of the bookings made by this user.
    #[serde(default)]
    pub bookings: Vec<String>,
}
