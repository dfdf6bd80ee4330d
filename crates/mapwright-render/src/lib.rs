#![forbid(unsafe_code)]

//! Emission layer for the mapwright widget.
//!
//! Takes a configured [`mapwright_core::MapWidget`] and produces:
//! - an HTML fragment (container element + hidden info-window holders)
//! - a JavaScript initialization call re-hydrating the configuration
//! - the list of external scripts the embedding page must load
//!
//! All output is deterministic: key order is fixed, numbers are serialized
//! with `ryu-js` (JS-exact, `.` decimal separator, independent of the process
//! locale), and default-valued options are elided.

pub mod html;
pub mod literal;
pub mod map;

pub use html::{HtmlElement, HtmlNode};
pub use literal::{JsLiteral, ObjectLiteralWriter};
pub use map::{
    loader_script_url, render_html, render_html_into, render_initialization_script,
    render_initialization_script_into, required_scripts, write_html, write_initialization_script,
};
