use crate::events::ClientEvents;
use crate::overlay::{Circle, Marker, Overlay, OverlayKind, Polygon};
use crate::{Error, Result};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Client-side bootstrap script every widget depends on. Registered at
/// construction; the embedding page is responsible for actually loading it.
pub const WIDGET_SCRIPT: &str = "mapwright.googlemap.js";

/// Base map imagery, as exposed by the Google Maps API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MapType {
    #[default]
    Roadmap,
    Satellite,
    Hybrid,
    Terrain,
}

impl MapType {
    /// Numeric constant understood by the widget bootstrap script.
    pub fn code(self) -> u8 {
        match self {
            MapType::Roadmap => 0,
            MapType::Satellite => 1,
            MapType::Hybrid => 2,
            MapType::Terrain => 3,
        }
    }
}

/// Placement of a map control. Values mirror `google.maps.ControlPosition`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControlPosition {
    TopLeft,
    TopCenter,
    TopRight,
    LeftCenter,
    LeftTop,
    LeftBottom,
    RightTop,
    RightCenter,
    RightBottom,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl ControlPosition {
    pub fn code(self) -> u8 {
        match self {
            ControlPosition::TopLeft => 1,
            ControlPosition::TopCenter => 2,
            ControlPosition::TopRight => 3,
            ControlPosition::LeftCenter => 4,
            ControlPosition::LeftTop => 5,
            ControlPosition::LeftBottom => 6,
            ControlPosition::RightTop => 7,
            ControlPosition::RightCenter => 8,
            ControlPosition::RightBottom => 9,
            ControlPosition::BottomLeft => 10,
            ControlPosition::BottomCenter => 11,
            ControlPosition::BottomRight => 12,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MapTypeControlStyle {
    #[default]
    Default,
    HorizontalBar,
    DropdownMenu,
}

impl MapTypeControlStyle {
    pub fn code(self) -> u8 {
        match self {
            MapTypeControlStyle::Default => 0,
            MapTypeControlStyle::HorizontalBar => 1,
            MapTypeControlStyle::DropdownMenu => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ZoomControlStyle {
    #[default]
    Default,
    Small,
    Large,
}

impl ZoomControlStyle {
    pub fn code(self) -> u8 {
        match self {
            ZoomControlStyle::Default => 0,
            ZoomControlStyle::Small => 1,
            ZoomControlStyle::Large => 2,
        }
    }
}

/// Options forwarded to the client-side marker clusterer.
///
/// Only set when [`MapWidget::enable_markers_clustering`] is on; defaults
/// mirror the clustering library so unchanged fields are elided.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MarkerClusteringOptions {
    pub grid_size: u32,
    pub max_zoom: Option<u8>,
    pub zoom_on_click: bool,
    pub average_center: bool,
    pub minimum_cluster_size: u32,
}

impl Default for MarkerClusteringOptions {
    fn default() -> Self {
        Self {
            grid_size: 60,
            max_zoom: None,
            zoom_on_click: true,
            average_center: false,
            minimum_cluster_size: 2,
        }
    }
}

/// Server-side configuration of one Google Maps widget.
///
/// Created once per page render, mutated through its public fields and the
/// overlay methods, then handed to `mapwright-render` for emission. Not
/// reentrant and not meant to outlive the render pass.
#[derive(Debug, Clone)]
pub struct MapWidget {
    id: String,
    pub api_key: Option<String>,
    /// Two-letter ISO language code appended to the Maps JS loader URL.
    pub language: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    /// Zoom level; 0 means "unset" and renders as the client default (6).
    pub zoom: i32,
    /// Pixel width; 0 renders the container at 100% width.
    pub width: i32,
    pub height: i32,
    pub map_type: MapType,
    pub map_type_control_visible: bool,
    pub map_type_control_position: ControlPosition,
    pub map_type_control_style: MapTypeControlStyle,
    pub pan_control_visible: bool,
    pub pan_control_position: ControlPosition,
    pub zoom_control_visible: bool,
    pub zoom_control_position: ControlPosition,
    pub zoom_control_style: ZoomControlStyle,
    pub street_view_control_visible: bool,
    pub street_view_control_position: ControlPosition,
    pub scale_control_visible: bool,
    pub overview_map_control_visible: bool,
    pub overview_map_control_opened: bool,
    pub draggable: bool,
    pub disable_double_click_zoom: bool,
    pub enable_markers_clustering: bool,
    pub marker_clustering_options: MarkerClusteringOptions,
    pub client_events: ClientEvents,
    markers: Vec<Marker>,
    polygons: Vec<Polygon>,
    circles: Vec<Circle>,
    script_files: IndexSet<String>,
}

impl MapWidget {
    /// Creates a widget with the fixed baseline configuration.
    ///
    /// Fails fast when `id` is not usable as an HTML id token: the id seeds
    /// the container element and every generated info-window id.
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        if !is_valid_id(&id) {
            return Err(Error::InvalidMapId { id });
        }

        let mut script_files = IndexSet::new();
        script_files.insert(WIDGET_SCRIPT.to_string());

        Ok(Self {
            id,
            api_key: None,
            language: None,
            latitude: 23.0,
            longitude: -82.0,
            zoom: 0,
            width: 0,
            height: 300,
            map_type: MapType::Roadmap,
            map_type_control_visible: true,
            map_type_control_position: ControlPosition::TopRight,
            map_type_control_style: MapTypeControlStyle::Default,
            pan_control_visible: true,
            pan_control_position: ControlPosition::TopLeft,
            zoom_control_visible: true,
            zoom_control_position: ControlPosition::TopLeft,
            zoom_control_style: ZoomControlStyle::Default,
            street_view_control_visible: true,
            street_view_control_position: ControlPosition::TopLeft,
            scale_control_visible: false,
            overview_map_control_visible: false,
            overview_map_control_opened: false,
            draggable: true,
            disable_double_click_zoom: false,
            enable_markers_clustering: false,
            marker_clustering_options: MarkerClusteringOptions::default(),
            client_events: ClientEvents::default(),
            markers: Vec::new(),
            polygons: Vec::new(),
            circles: Vec::new(),
            script_files,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }

    /// Appends a marker, assigning the next free index. The index makes the
    /// marker's info-window DOM id (`<mapId>Marker<index>`) unique within one
    /// render pass.
    pub fn add_marker(&mut self, mut marker: Marker) -> &mut Marker {
        marker.set_index(self.markers.len());
        self.markers.push(marker);
        self.markers.last_mut().expect("marker just pushed")
    }

    pub fn add_polygon(&mut self, mut polygon: Polygon) -> &mut Polygon {
        polygon.set_index(self.polygons.len());
        self.polygons.push(polygon);
        self.polygons.last_mut().expect("polygon just pushed")
    }

    pub fn add_circle(&mut self, mut circle: Circle) -> &mut Circle {
        circle.set_index(self.circles.len());
        self.circles.push(circle);
        self.circles.last_mut().expect("circle just pushed")
    }

    /// Instantiates one overlay of `kind` per data item, lets `bind` populate
    /// it from the item, and appends it to the matching list.
    ///
    /// The binding closure runs synchronously, once per item, in input order.
    /// The kind dispatch is a closed enum match: there is no unknown-kind
    /// path.
    pub fn bind_overlays<T, F>(&mut self, kind: OverlayKind, items: impl IntoIterator<Item = T>, mut bind: F)
    where
        F: FnMut(&mut Overlay, &T),
    {
        for item in items {
            let mut overlay = Overlay::new(kind);
            bind(&mut overlay, &item);
            match overlay {
                Overlay::Marker(marker) => {
                    self.add_marker(marker);
                }
                Overlay::Polygon(polygon) => {
                    self.add_polygon(polygon);
                }
                Overlay::Circle(circle) => {
                    self.add_circle(circle);
                }
            }
        }
    }

    /// Registers an extra client-side script the page must load. Duplicates
    /// are ignored; order of first registration is preserved.
    pub fn register_script(&mut self, name: impl Into<String>) {
        self.script_files.insert(name.into());
    }

    pub fn script_files(&self) -> &IndexSet<String> {
        &self.script_files
    }
}

fn is_valid_id(id: &str) -> bool {
    let mut chars = id.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlay::LatLng;

    #[test]
    fn new_rejects_invalid_ids() {
        assert!(MapWidget::new("map1").is_ok());
        assert!(MapWidget::new("m").is_ok());
        assert!(MapWidget::new("my-map_2").is_ok());

        for bad in ["", "1map", "-map", "map 1", "map#1", "ünicode"] {
            let err = MapWidget::new(bad).unwrap_err();
            assert!(matches!(err, Error::InvalidMapId { .. }), "{bad:?}");
        }
    }

    #[test]
    fn new_applies_baseline_defaults() {
        let map = MapWidget::new("map1").unwrap();
        assert_eq!(map.latitude, 23.0);
        assert_eq!(map.longitude, -82.0);
        assert_eq!(map.zoom, 0);
        assert_eq!(map.width, 0);
        assert_eq!(map.height, 300);
        assert_eq!(map.map_type, MapType::Roadmap);
        assert_eq!(map.map_type_control_position, ControlPosition::TopRight);
        assert!(map.draggable);
        assert!(!map.enable_markers_clustering);
        assert!(map.markers().is_empty());
        assert!(map.polygons().is_empty());
        assert!(map.circles().is_empty());
        assert_eq!(
            map.script_files().iter().collect::<Vec<_>>(),
            vec![WIDGET_SCRIPT]
        );
    }

    #[test]
    fn add_marker_assigns_sequential_indexes() {
        let mut map = MapWidget::new("map1").unwrap();
        map.add_marker(Marker::new(LatLng::new(1.0, 2.0)));
        map.add_marker(Marker::new(LatLng::new(3.0, 4.0)));
        let indexes: Vec<usize> = map.markers().iter().map(|m| m.index()).collect();
        assert_eq!(indexes, vec![0, 1]);
    }

    #[test]
    fn bind_overlays_appends_in_input_order() {
        let mut map = MapWidget::new("map1").unwrap();
        let cities = [("Havana", 23.13, -82.38), ("Lisbon", 38.72, -9.14), ("Osaka", 34.69, 135.50)];

        map.bind_overlays(OverlayKind::Marker, cities, |overlay, &(name, lat, lng)| {
            let marker = overlay.as_marker_mut().expect("bound kind is marker");
            marker.position = LatLng::new(lat, lng);
            marker.title = Some(name.to_string());
        });

        assert_eq!(map.markers().len(), 3);
        assert_eq!(map.markers()[0].title.as_deref(), Some("Havana"));
        assert_eq!(map.markers()[2].title.as_deref(), Some("Osaka"));
        assert_eq!(map.markers()[2].index(), 2);
    }

    #[test]
    fn bind_overlays_dispatches_each_kind() {
        let mut map = MapWidget::new("map1").unwrap();
        map.bind_overlays(OverlayKind::Circle, [500.0, 1200.0], |overlay, &radius| {
            let circle = overlay.as_circle_mut().expect("bound kind is circle");
            circle.radius = radius;
        });
        map.bind_overlays(OverlayKind::Polygon, [()], |overlay, _| {
            let polygon = overlay.as_polygon_mut().expect("bound kind is polygon");
            polygon.paths.push(LatLng::new(0.0, 0.0));
        });

        assert_eq!(map.circles().len(), 2);
        assert_eq!(map.circles()[1].radius, 1200.0);
        assert_eq!(map.polygons().len(), 1);
    }

    #[test]
    fn register_script_deduplicates_preserving_order() {
        let mut map = MapWidget::new("map1").unwrap();
        map.register_script("a.js");
        map.register_script("b.js");
        map.register_script("a.js");
        let files: Vec<_> = map.script_files().iter().map(String::as_str).collect();
        assert_eq!(files, vec![WIDGET_SCRIPT, "a.js", "b.js"]);
    }
}
