//! Map renderer: HTML fragment, initialization script, script dependencies.

use crate::html::HtmlElement;
use crate::literal::{JsLiteral, ObjectLiteralWriter};
use indexmap::IndexSet;
use mapwright_core::sanitize::remove_script;
use mapwright_core::{
    Circle, ControlPosition, MapType, MapTypeControlStyle, MapWidget, Marker,
    MarkerClusteringOptions, Polygon, ZoomControlStyle,
};
use std::io;
use url::Url;

const MAPS_API_JS: &str = "https://maps.googleapis.com/maps/api/js";
const MAPS_API_VERSION: &str = "3.exp";
const CLUSTERER_SCRIPT: &str = "markerclusterer.js";

/// jQuery plugin name registered by the widget bootstrap script.
const INIT_FUNCTION: &str = "googleMap";

/// Zoom level the client falls back to when none was configured.
const UNSET_ZOOM_FALLBACK: i32 = 6;

// Control enums serialize as the Google Maps numeric constants.
impl JsLiteral for MapType {
    fn emit(&self, out: &mut String, ryu: &mut ryu_js::Buffer) {
        self.code().emit(out, ryu);
    }
}

impl JsLiteral for ControlPosition {
    fn emit(&self, out: &mut String, ryu: &mut ryu_js::Buffer) {
        self.code().emit(out, ryu);
    }
}

impl JsLiteral for MapTypeControlStyle {
    fn emit(&self, out: &mut String, ryu: &mut ryu_js::Buffer) {
        self.code().emit(out, ryu);
    }
}

impl JsLiteral for ZoomControlStyle {
    fn emit(&self, out: &mut String, ryu: &mut ryu_js::Buffer) {
        self.code().emit(out, ryu);
    }
}

/// Renders the widget's HTML fragment: the container element, then (when any
/// marker carries an info window) a hidden holder div with one `content` div
/// per templated marker, id'd `<mapId>Marker<index>`.
pub fn render_html_into(map: &MapWidget, out: &mut String) {
    container_element(map).write_into(out);

    let templated: Vec<&Marker> = map
        .markers()
        .iter()
        .filter(|marker| marker.window.is_some())
        .collect();
    if templated.is_empty() {
        return;
    }

    let mut holder = HtmlElement::new("div")
        .attr("id", format!("{}-InfoWindowsHolder", map.id()))
        .attr("style", "display: none");
    for marker in templated {
        let Some(window) = &marker.window else {
            continue;
        };
        holder = holder.child(
            HtmlElement::new("div")
                .attr("id", format!("{}Marker{}", map.id(), marker.index()))
                .class("content")
                .raw_html(remove_script(&window.content)),
        );
    }
    holder.write_into(out);
}

/// Convenience form of [`render_html_into`] producing static markup.
pub fn render_html(map: &MapWidget) -> String {
    let mut out = String::new();
    render_html_into(map, &mut out);
    out
}

/// Streams the HTML fragment to an `io::Write` sink (e.g. a response body).
pub fn write_html<W: io::Write>(map: &MapWidget, mut writer: W) -> io::Result<()> {
    writer.write_all(render_html(map).as_bytes())
}

fn container_element(map: &MapWidget) -> HtmlElement {
    let width = if map.width == 0 {
        "100%".to_string()
    } else {
        format!("{}px", map.width)
    };
    HtmlElement::new("div")
        .attr("id", map.id())
        .attr(
            "style",
            format!("position: relative; width: {width}; height: {}px;", map.height),
        )
        .class("mapwright-map")
}

/// Google Maps JS loader URL for this widget, carrying the configured API
/// key and UI language.
pub fn loader_script_url(map: &MapWidget) -> String {
    let mut url = Url::parse(MAPS_API_JS).expect("valid loader base url");
    {
        let mut query = url.query_pairs_mut();
        query.append_pair("v", MAPS_API_VERSION);
        if let Some(key) = &map.api_key {
            query.append_pair("key", key);
        }
        if let Some(language) = &map.language {
            query.append_pair("language", language);
        }
    }
    url.into()
}

/// Every external script the embedding page must load for this widget:
/// caller-registered files (bootstrap script first), the Maps JS loader, and
/// the clusterer when clustering is enabled. Deduplicated, insertion order.
pub fn required_scripts(map: &MapWidget) -> Vec<String> {
    let mut scripts: IndexSet<String> = map.script_files().iter().cloned().collect();
    scripts.insert(loader_script_url(map));
    if map.enable_markers_clustering {
        scripts.insert(CLUSTERER_SCRIPT.to_string());
    }
    scripts.into_iter().collect()
}

/// Serializes the full configuration into one initialization call.
///
/// Key order is fixed; options equal to the construction baseline are
/// elided (the client script applies the same defaults). Zoom 0 means
/// "unset" and is emitted as the client fallback level.
pub fn render_initialization_script_into(map: &MapWidget, out: &mut String) {
    let mut w = ObjectLiteralWriter::new(out);
    w.begin_call(map.id(), INIT_FUNCTION);

    w.append("ClientID", map.id());
    w.append_unless("DisableDoubleClickZoom", map.disable_double_click_zoom, false);
    w.append_unless("Draggable", map.draggable, true);
    w.append_unless("EnableMarkersClustering", map.enable_markers_clustering, false);
    w.append("Height", map.height);
    w.append("Latitude", map.latitude);
    w.append("Longitude", map.longitude);
    w.append_unless("MapType", map.map_type, MapType::Roadmap);
    w.append_unless(
        "MapTypeControlPosition",
        map.map_type_control_position,
        ControlPosition::TopRight,
    );
    w.append_unless("MapTypeControlVisible", map.map_type_control_visible, true);
    w.append_unless(
        "MapTypeControlStyle",
        map.map_type_control_style,
        MapTypeControlStyle::Default,
    );
    w.append_unless(
        "PanControlPosition",
        map.pan_control_position,
        ControlPosition::TopLeft,
    );
    w.append_unless("PanControlVisible", map.pan_control_visible, true);
    w.append_unless(
        "OverviewMapControlVisible",
        map.overview_map_control_visible,
        false,
    );
    w.append_unless(
        "OverviewMapControlOpened",
        map.overview_map_control_opened,
        false,
    );
    w.append_unless(
        "StreetViewControlVisible",
        map.street_view_control_visible,
        true,
    );
    w.append_unless(
        "StreetViewControlPosition",
        map.street_view_control_position,
        ControlPosition::TopLeft,
    );
    w.append_unless("ZoomControlVisible", map.zoom_control_visible, true);
    w.append_unless(
        "ZoomControlPosition",
        map.zoom_control_position,
        ControlPosition::TopLeft,
    );
    w.append_unless(
        "ZoomControlStyle",
        map.zoom_control_style,
        ZoomControlStyle::Default,
    );
    w.append_unless("ScaleControlVisible", map.scale_control_visible, false);
    w.append_unless("Width", map.width, 0);
    w.append(
        "Zoom",
        if map.zoom == 0 { UNSET_ZOOM_FALLBACK } else { map.zoom },
    );

    if map.enable_markers_clustering {
        w.object("MarkerClusteringOptions", |w| {
            write_clustering_options(w, &map.marker_clustering_options);
        });
    }
    if !map.markers().is_empty() {
        w.collection("Markers", map.markers(), write_marker);
    }
    if !map.polygons().is_empty() {
        w.collection("Polygons", map.polygons(), write_polygon);
    }
    if !map.circles().is_empty() {
        w.collection("Circles", map.circles(), write_circle);
    }

    for (event, handler) in map.client_events.iter() {
        w.append_raw(event, handler);
    }

    w.end_call();
}

/// Convenience form of [`render_initialization_script_into`].
pub fn render_initialization_script(map: &MapWidget) -> String {
    let mut out = String::new();
    render_initialization_script_into(map, &mut out);
    out
}

/// Streams the initialization script to an `io::Write` sink.
pub fn write_initialization_script<W: io::Write>(map: &MapWidget, mut writer: W) -> io::Result<()> {
    writer.write_all(render_initialization_script(map).as_bytes())
}

fn write_clustering_options(w: &mut ObjectLiteralWriter<'_>, options: &MarkerClusteringOptions) {
    let defaults = MarkerClusteringOptions::default();
    w.append_unless("GridSize", options.grid_size, defaults.grid_size);
    w.append_opt("MaxZoom", options.max_zoom);
    w.append_unless("ZoomOnClick", options.zoom_on_click, defaults.zoom_on_click);
    w.append_unless(
        "AverageCenter",
        options.average_center,
        defaults.average_center,
    );
    w.append_unless(
        "MinimumClusterSize",
        options.minimum_cluster_size,
        defaults.minimum_cluster_size,
    );
}

fn write_marker(w: &mut ObjectLiteralWriter<'_>, marker: &Marker) {
    w.append("Index", marker.index());
    w.append("Latitude", marker.position.latitude);
    w.append("Longitude", marker.position.longitude);
    w.append_opt("Title", marker.title.as_deref());
    w.append_unless("Draggable", marker.draggable, false);
    w.append_unless("Clickable", marker.clickable, true);
    w.append_opt("Icon", marker.icon.as_deref());
    w.append_opt("ZIndex", marker.z_index);
    if let Some(window) = &marker.window {
        w.object("Window", |w| {
            w.append_opt("MaxWidth", window.max_width);
            w.append_unless("DisableAutoPan", window.disable_auto_pan, false);
        });
    }
}

fn write_polygon(w: &mut ObjectLiteralWriter<'_>, polygon: &Polygon) {
    w.append("Index", polygon.index());
    w.collection("Paths", &polygon.paths, |w, point| {
        w.append("Latitude", point.latitude);
        w.append("Longitude", point.longitude);
    });
    w.append_opt("StrokeColor", polygon.stroke_color.as_deref());
    w.append_unless("StrokeOpacity", polygon.stroke_opacity, 1.0);
    w.append_unless("StrokeWeight", polygon.stroke_weight, 2);
    w.append_opt("FillColor", polygon.fill_color.as_deref());
    w.append_unless("FillOpacity", polygon.fill_opacity, 0.35);
    w.append_unless("Clickable", polygon.clickable, true);
    w.append_opt("ZIndex", polygon.z_index);
}

fn write_circle(w: &mut ObjectLiteralWriter<'_>, circle: &Circle) {
    w.append("Index", circle.index());
    w.append("Latitude", circle.center.latitude);
    w.append("Longitude", circle.center.longitude);
    w.append("Radius", circle.radius);
    w.append_opt("StrokeColor", circle.stroke_color.as_deref());
    w.append_unless("StrokeOpacity", circle.stroke_opacity, 1.0);
    w.append_unless("StrokeWeight", circle.stroke_weight, 2);
    w.append_opt("FillColor", circle.fill_color.as_deref());
    w.append_unless("FillOpacity", circle.fill_opacity, 0.35);
    w.append_unless("Clickable", circle.clickable, true);
    w.append_unless("Draggable", circle.draggable, false);
    w.append_unless("Editable", circle.editable, false);
}
