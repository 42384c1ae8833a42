pub const CONTAINER_ID: &str = "container";
pub const PLUGIN_CONTAINER_ID: &str = "plugin_container";
pub const BODY_ID: &str = "body";

// Fixed-row geometry used to place the plugin menu without a layout engine.
pub const HEADER_TOP: f64 = 21.0;
pub const HEADER_HEIGHT: f64 = 37.0;
pub const LIST_TOP: f64 = 80.0;
pub const ROW_HEIGHT: f64 = 20.0;
pub const CHAR_WIDTH: f64 = 8.0;
pub const LIST_INDENT: f64 = 40.0;
pub const MARKER_WIDTH: f64 = 32.0;
