//! Map Layer
//!
//! Surface abstraction, marker synchronization, and the Leaflet backend.

pub mod debounce;
pub mod leaflet;
pub mod surface;
pub mod sync;
