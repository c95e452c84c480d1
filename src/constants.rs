// Default class markers shared with the page's stylesheet.

// Opt-in markers, one per toggle group
pub const CLICK_GROUP_CLASS: &str = "showhide";
pub const HOVER_GROUP_CLASS: &str = "showhide_step";

// State projection markers
pub const HIDDEN_CLASS: &str = "hidden";
pub const VISIBLE_CLASS: &str = "visible";

// Trigger events
pub const CLICK_EVENTS: &[&str] = &["click"];
pub const HOVER_EVENTS: &[&str] = &["mouseenter", "mouseleave"]; // one handler, both edges

// Expando property holding an element's registration id (not an attribute, so
// it is neither observed nor copied by cloneNode)
pub const REGISTRATION_PROPERTY: &str = "__showhideId";
