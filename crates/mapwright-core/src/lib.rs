#![forbid(unsafe_code)]

//! Server-side model for an embeddable Google Maps widget.
//!
//! Design goals:
//! - one mutable `MapWidget` per page render, discarded after emission
//! - deterministic output (overlay order and script order are insertion order)
//! - default-valued options are elided from the client payload

pub mod events;
pub mod map;
pub mod overlay;
pub mod sanitize;

pub use events::ClientEvents;
pub use map::{
    ControlPosition, MapType, MapTypeControlStyle, MapWidget, MarkerClusteringOptions,
    ZoomControlStyle,
};
pub use overlay::{Circle, InfoWindow, LatLng, Marker, Overlay, OverlayKind, Polygon};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(
        "invalid map id {id:?}: must start with an ASCII letter and contain only letters, digits, '-' or '_'"
    )]
    InvalidMapId { id: String },
}
