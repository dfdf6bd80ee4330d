use serde::{Deserialize, Serialize};

/// Client-side event handler bindings.
///
/// Each field holds the name of a JavaScript function defined by the
/// embedding page. Set handlers are emitted into the initialization literal
/// as raw function references (never quoted), in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ClientEvents {
    pub on_load: Option<String>,
    pub on_map_click: Option<String>,
    pub on_map_double_click: Option<String>,
    pub on_map_right_click: Option<String>,
    pub on_map_center_changed: Option<String>,
    pub on_map_zoom_changed: Option<String>,
    pub on_marker_click: Option<String>,
    pub on_marker_drag_end: Option<String>,
}

impl ClientEvents {
    /// Yields `(wire key, handler name)` for every bound event.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        [
            ("OnLoad", &self.on_load),
            ("OnMapClick", &self.on_map_click),
            ("OnMapDoubleClick", &self.on_map_double_click),
            ("OnMapRightClick", &self.on_map_right_click),
            ("OnMapCenterChanged", &self.on_map_center_changed),
            ("OnMapZoomChanged", &self.on_map_zoom_changed),
            ("OnMarkerClick", &self.on_marker_click),
            ("OnMarkerDragEnd", &self.on_marker_drag_end),
        ]
        .into_iter()
        .filter_map(|(key, handler)| handler.as_deref().map(|h| (key, h)))
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iter_yields_only_bound_events_in_declaration_order() {
        let events = ClientEvents {
            on_map_zoom_changed: Some("zoomed".to_string()),
            on_map_click: Some("clicked".to_string()),
            ..ClientEvents::default()
        };
        let bound: Vec<_> = events.iter().collect();
        assert_eq!(
            bound,
            vec![("OnMapClick", "clicked"), ("OnMapZoomChanged", "zoomed")]
        );
    }

    #[test]
    fn default_is_empty() {
        assert!(ClientEvents::default().is_empty());
    }
}
