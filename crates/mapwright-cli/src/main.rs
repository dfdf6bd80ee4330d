use mapwright::{
    Circle, ClientEvents, ControlPosition, MapType, MapTypeControlStyle, MapWidget, Marker,
    MarkerClusteringOptions, Polygon, ZoomControlStyle,
};
use mapwright_render::{render_html, render_initialization_script, required_scripts};
use serde::Deserialize;
use std::io::Read;

const USAGE: &str = "Usage: mapwright-cli <command> [input.json] [--out <path>]

Commands:
  html      render the widget HTML fragment
  script    render the JavaScript initialization call
  scripts   list the external scripts the page must load, one per line
  page      render an embeddable fragment: html + script tags + init call

Reads the map definition from <input.json>, or stdin when the path is
omitted or '-'.";

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Json(serde_json::Error),
    Map(mapwright::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Json(err) => write!(f, "invalid map definition: {err}"),
            CliError::Map(err) => write!(f, "{err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<mapwright::Error> for CliError {
    fn from(value: mapwright::Error) -> Self {
        Self::Map(value)
    }
}

#[derive(Debug, Clone, Copy)]
enum Command {
    Html,
    Script,
    Scripts,
    Page,
}

#[derive(Debug, Default)]
struct Args {
    command: Option<Command>,
    input: Option<String>,
    out: Option<String>,
}

/// JSON map definition. Every field is optional except `Id`; absent fields
/// keep the widget's construction baseline.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
struct MapFile {
    id: String,
    api_key: Option<String>,
    language: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
    zoom: Option<i32>,
    width: Option<i32>,
    height: Option<i32>,
    map_type: Option<MapType>,
    map_type_control_visible: Option<bool>,
    map_type_control_position: Option<ControlPosition>,
    map_type_control_style: Option<MapTypeControlStyle>,
    pan_control_visible: Option<bool>,
    pan_control_position: Option<ControlPosition>,
    zoom_control_visible: Option<bool>,
    zoom_control_position: Option<ControlPosition>,
    zoom_control_style: Option<ZoomControlStyle>,
    street_view_control_visible: Option<bool>,
    street_view_control_position: Option<ControlPosition>,
    scale_control_visible: Option<bool>,
    overview_map_control_visible: Option<bool>,
    overview_map_control_opened: Option<bool>,
    draggable: Option<bool>,
    disable_double_click_zoom: Option<bool>,
    enable_markers_clustering: Option<bool>,
    marker_clustering_options: Option<MarkerClusteringOptions>,
    client_events: ClientEvents,
    markers: Vec<Marker>,
    polygons: Vec<Polygon>,
    circles: Vec<Circle>,
    scripts: Vec<String>,
}

macro_rules! apply_overrides {
    ($map:ident, $file:ident: $($field:ident),+ $(,)?) => {
        $(if let Some(value) = $file.$field {
            $map.$field = value;
        })+
    };
}

impl MapFile {
    fn into_widget(self) -> Result<MapWidget, mapwright::Error> {
        let file = self;
        let mut map = MapWidget::new(file.id)?;
        map.api_key = file.api_key;
        map.language = file.language;
        apply_overrides!(map, file:
            latitude, longitude, zoom, width, height, map_type,
            map_type_control_visible, map_type_control_position, map_type_control_style,
            pan_control_visible, pan_control_position,
            zoom_control_visible, zoom_control_position, zoom_control_style,
            street_view_control_visible, street_view_control_position,
            scale_control_visible, overview_map_control_visible, overview_map_control_opened,
            draggable, disable_double_click_zoom, enable_markers_clustering,
            marker_clustering_options,
        );
        map.client_events = file.client_events;
        // Indexes from the file are ignored; insertion re-assigns them so the
        // generated DOM ids stay unique.
        for marker in file.markers {
            map.add_marker(marker);
        }
        for polygon in file.polygons {
            map.add_polygon(polygon);
        }
        for circle in file.circles {
            map.add_circle(circle);
        }
        for script in file.scripts {
            map.register_script(script);
        }
        Ok(map)
    }
}

fn parse_args(argv: impl IntoIterator<Item = String>) -> Result<Args, CliError> {
    let mut args = Args::default();
    let mut argv = argv.into_iter();
    while let Some(arg) = argv.next() {
        match arg.as_str() {
            "-h" | "--help" => return Err(CliError::Usage(USAGE)),
            "--out" => {
                args.out = Some(
                    argv.next()
                        .ok_or(CliError::Usage("--out requires a path"))?,
                );
            }
            "html" | "script" | "scripts" | "page" if args.command.is_none() => {
                args.command = Some(match arg.as_str() {
                    "html" => Command::Html,
                    "script" => Command::Script,
                    "scripts" => Command::Scripts,
                    _ => Command::Page,
                });
            }
            _ if args.input.is_none() => args.input = Some(arg),
            _ => return Err(CliError::Usage(USAGE)),
        }
    }
    Ok(args)
}

fn read_input(path: Option<&str>) -> Result<String, CliError> {
    match path {
        None | Some("-") => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn render_page(map: &MapWidget) -> String {
    let mut out = render_html(map);
    out.push('\n');
    for script in required_scripts(map) {
        out.push_str("<script src=\"");
        out.push_str(&script);
        out.push_str("\"></script>\n");
    }
    out.push_str("<script>");
    out.push_str(&render_initialization_script(map));
    out.push_str("</script>\n");
    out
}

fn run() -> Result<(), CliError> {
    let args = parse_args(std::env::args().skip(1))?;
    let Some(command) = args.command else {
        return Err(CliError::Usage(USAGE));
    };

    let text = read_input(args.input.as_deref())?;
    let file: MapFile = serde_json::from_str(&text)?;
    let map = file.into_widget()?;

    let output = match command {
        Command::Html => render_html(&map),
        Command::Script => render_initialization_script(&map),
        Command::Scripts => {
            let mut out = required_scripts(&map).join("\n");
            out.push('\n');
            out
        }
        Command::Page => render_page(&map),
    };

    match args.out.as_deref() {
        Some(path) => std::fs::write(path, output)?,
        None => print!("{output}"),
    }
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_file_overrides_only_present_fields() {
        let file: MapFile = serde_json::from_str(
            r#"{"Id": "map1", "Zoom": 9, "MapType": "Terrain", "Scripts": ["extra.js"]}"#,
        )
        .unwrap();
        let map = file.into_widget().unwrap();
        assert_eq!(map.zoom, 9);
        assert_eq!(map.map_type, MapType::Terrain);
        assert_eq!(map.latitude, 23.0);
        assert!(map.script_files().contains("extra.js"));
    }

    #[test]
    fn overlay_indexes_are_reassigned_on_load() {
        let file: MapFile = serde_json::from_str(
            r#"{"Id": "map1", "Markers": [
                {"Position": {"Latitude": 1.0, "Longitude": 2.0}},
                {"Position": {"Latitude": 3.0, "Longitude": 4.0}}
            ]}"#,
        )
        .unwrap();
        let map = file.into_widget().unwrap();
        let indexes: Vec<usize> = map.markers().iter().map(|m| m.index()).collect();
        assert_eq!(indexes, vec![0, 1]);
    }

    #[test]
    fn missing_id_is_rejected() {
        let file: MapFile = serde_json::from_str("{}").unwrap();
        assert!(file.into_widget().is_err());
    }
}
