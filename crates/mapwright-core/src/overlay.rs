use serde::{Deserialize, Serialize};

/// Geographic coordinate pair, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LatLng {
    pub latitude: f64,
    pub longitude: f64,
}

impl LatLng {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Popup content attached to a marker.
///
/// `content` is raw HTML supplied by the caller; it is sanitized (scripts,
/// inline event handlers and script-scheme URLs stripped) before it is placed
/// in the hidden info-window holder element.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct InfoWindow {
    pub content: String,
    pub max_width: Option<u32>,
    pub disable_auto_pan: bool,
}

impl InfoWindow {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Marker {
    #[serde(skip)]
    index: usize,
    pub position: LatLng,
    pub title: Option<String>,
    pub draggable: bool,
    pub clickable: bool,
    /// URL of a custom marker icon.
    pub icon: Option<String>,
    pub z_index: Option<i32>,
    pub window: Option<InfoWindow>,
}

impl Default for Marker {
    fn default() -> Self {
        Self::new(LatLng::default())
    }
}

impl Marker {
    pub fn new(position: LatLng) -> Self {
        Self {
            index: 0,
            position,
            title: None,
            draggable: false,
            clickable: true,
            icon: None,
            z_index: None,
            window: None,
        }
    }

    /// Index within the owning map's marker list; set on insertion.
    pub fn index(&self) -> usize {
        self.index
    }

    pub(crate) fn set_index(&mut self, index: usize) {
        self.index = index;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Polygon {
    #[serde(skip)]
    index: usize,
    pub paths: Vec<LatLng>,
    pub stroke_color: Option<String>,
    pub stroke_opacity: f64,
    pub stroke_weight: u32,
    pub fill_color: Option<String>,
    pub fill_opacity: f64,
    pub clickable: bool,
    pub z_index: Option<i32>,
}

impl Default for Polygon {
    fn default() -> Self {
        Self::new()
    }
}

impl Polygon {
    pub fn new() -> Self {
        Self {
            index: 0,
            paths: Vec::new(),
            stroke_color: None,
            stroke_opacity: 1.0,
            stroke_weight: 2,
            fill_color: None,
            fill_opacity: 0.35,
            clickable: true,
            z_index: None,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub(crate) fn set_index(&mut self, index: usize) {
        self.index = index;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Circle {
    #[serde(skip)]
    index: usize,
    pub center: LatLng,
    /// Radius in meters.
    pub radius: f64,
    pub stroke_color: Option<String>,
    pub stroke_opacity: f64,
    pub stroke_weight: u32,
    pub fill_color: Option<String>,
    pub fill_opacity: f64,
    pub clickable: bool,
    pub draggable: bool,
    pub editable: bool,
}

impl Default for Circle {
    fn default() -> Self {
        Self::new(LatLng::default(), 0.0)
    }
}

impl Circle {
    pub fn new(center: LatLng, radius: f64) -> Self {
        Self {
            index: 0,
            center,
            radius,
            stroke_color: None,
            stroke_opacity: 1.0,
            stroke_weight: 2,
            fill_color: None,
            fill_opacity: 0.35,
            clickable: true,
            draggable: false,
            editable: false,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub(crate) fn set_index(&mut self, index: usize) {
        self.index = index;
    }
}

/// The three overlay kinds the widget understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OverlayKind {
    Marker,
    Polygon,
    Circle,
}

/// A freshly bound overlay record, tagged by kind.
///
/// Replaces dispatch-by-type-name: [`MapWidget::bind_overlays`] matches on
/// this exhaustively, so an unknown kind cannot silently drop data.
///
/// [`MapWidget::bind_overlays`]: crate::map::MapWidget::bind_overlays
#[derive(Debug, Clone, PartialEq)]
pub enum Overlay {
    Marker(Marker),
    Polygon(Polygon),
    Circle(Circle),
}

impl Overlay {
    pub fn new(kind: OverlayKind) -> Self {
        match kind {
            OverlayKind::Marker => Overlay::Marker(Marker::default()),
            OverlayKind::Polygon => Overlay::Polygon(Polygon::default()),
            OverlayKind::Circle => Overlay::Circle(Circle::default()),
        }
    }

    pub fn kind(&self) -> OverlayKind {
        match self {
            Overlay::Marker(_) => OverlayKind::Marker,
            Overlay::Polygon(_) => OverlayKind::Polygon,
            Overlay::Circle(_) => OverlayKind::Circle,
        }
    }

    pub fn as_marker_mut(&mut self) -> Option<&mut Marker> {
        match self {
            Overlay::Marker(marker) => Some(marker),
            _ => None,
        }
    }

    pub fn as_polygon_mut(&mut self) -> Option<&mut Polygon> {
        match self {
            Overlay::Polygon(polygon) => Some(polygon),
            _ => None,
        }
    }

    pub fn as_circle_mut(&mut self) -> Option<&mut Circle> {
        match self {
            Overlay::Circle(circle) => Some(circle),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_new_matches_kind() {
        for kind in [OverlayKind::Marker, OverlayKind::Polygon, OverlayKind::Circle] {
            assert_eq!(Overlay::new(kind).kind(), kind);
        }
    }

    #[test]
    fn marker_json_uses_wire_names() {
        let marker: Marker = serde_json::from_str(
            r#"{"Position": {"Latitude": 1.5, "Longitude": -2.5}, "Title": "A", "Window": {"Content": "<b>hi</b>"}}"#,
        )
        .unwrap();
        assert_eq!(marker.position, LatLng::new(1.5, -2.5));
        assert_eq!(marker.title.as_deref(), Some("A"));
        assert_eq!(marker.window.as_ref().unwrap().content, "<b>hi</b>");
        assert!(marker.clickable);
    }
}
