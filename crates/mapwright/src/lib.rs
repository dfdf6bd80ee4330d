#![forbid(unsafe_code)]

//! `mapwright` renders Google Maps widgets server-side.
//!
//! Configure a [`MapWidget`], then (with the `render` feature) emit the HTML
//! container fragment and the JavaScript initialization call that re-creates
//! the configuration client-side.
//!
//! # Features
//!
//! - `render`: enable HTML/script emission (`mapwright::render`)
//!
//! # Example
//!
//! ```
//! # #[cfg(feature = "render")] {
//! use mapwright::{LatLng, MapWidget, Marker};
//! use mapwright::render::{render_html, render_initialization_script};
//!
//! let mut map = MapWidget::new("map1")?;
//! map.latitude = 23.1136;
//! map.longitude = -82.3666;
//! map.zoom = 12;
//! map.add_marker(Marker::new(LatLng::new(23.1136, -82.3666)));
//!
//! let html = render_html(&map);
//! let script = render_initialization_script(&map);
//! assert!(html.contains("id=\"map1\""));
//! assert!(script.contains("Zoom: 12"));
//! # }
//! # Ok::<(), mapwright::Error>(())
//! ```

pub use mapwright_core::*;

#[cfg(feature = "render")]
pub mod render {
    pub use mapwright_render::html::{HtmlElement, HtmlNode};
    pub use mapwright_render::literal::{JsLiteral, ObjectLiteralWriter};
    pub use mapwright_render::{
        loader_script_url, render_html, render_html_into, render_initialization_script,
        render_initialization_script_into, required_scripts, write_html,
        write_initialization_script,
    };
}
