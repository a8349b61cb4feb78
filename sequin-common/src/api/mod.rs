//! API module for shared HTTP API types
//!
//! Response records exchanged between the player service and its clients.
//! Pure data only; the HTTP framework lives in `sequin-player`.

pub mod types;

pub use types::{
    ErrorResponse, HealthResponse, ModeResponse, PlayerSnapshot, PlaylistResponse,
    StatusResponse,
};
