//! Wire keys shared by the server widget and the client view.

/// Widget width value.
pub const WIDTH: &str = "width";
/// Widget width unit symbol.
pub const WIDTH_UNITS: &str = "width_units";
/// Widget height value.
pub const HEIGHT: &str = "height";
/// Widget height unit symbol.
pub const HEIGHT_UNITS: &str = "height_units";
/// Whether client interactions flush immediately.
pub const IMMEDIATE: &str = "immediate";
/// Client readiness handshake variable.
pub const JS_INITIALIZED: &str = "js_initialized";
/// The wire-record list variable.
pub const EVENTS: &str = "events";
/// Prefix of sequence-suffixed new-event variables.
pub const NEW_EVENT_PREFIX: &str = "newevent";
/// The manifest wire-name list attribute.
pub const FIELDS: &str = "fields";
/// Whether any add-event listener is registered server-side.
pub const HAS_ADD_LISTENERS: &str = "has_addlisteners";
/// Prefix of per-event icon side-channel attributes.
pub const ICON_PREFIX: &str = "icon-";
/// Prefix of per-event icon alignment side-channel attributes.
pub const ICON_ALIGN_PREFIX: &str = "iconpos-";
/// Global editability option.
pub const EDITABLE: &str = "editable";
/// Animation option.
pub const ANIMATE: &str = "animate";
/// Default event style option.
pub const STYLE: &str = "style";
/// Axis placement option.
pub const AXIS_ON_TOP: &str = "axisontop";
/// Navigation controls option.
pub const NAVIGATION: &str = "navigation";
/// Viewport start bound.
pub const VIEWPORT_START: &str = "viewport_start";
/// Viewport end bound.
pub const VIEWPORT_END: &str = "viewport_end";
/// Timeline start bound.
pub const TIMELINE_START: &str = "timeline_start";
/// Timeline end bound.
pub const TIMELINE_END: &str = "timeline_end";
