//! Frontend Models
//!
//! Data structures matching the places API payload.

use serde::{Deserialize, Serialize};

/// Tourist place (owned by the external places API; read-only here)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: String,
    pub name: String,
    pub category: String,
    pub rating: f64,
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub business_friendly: bool,
    #[serde(default)]
    pub free_wifi: bool,
}
