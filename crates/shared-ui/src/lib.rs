pub mod detail;
pub mod pages;
pub mod ui;

pub use pages::{
    render_password_page, render_tool_page, AddressFields, PasswordPageProps, ToolPageProps,
};

/// Stylesheet served at `/assets/lookup.css`.
pub const LOOKUP_CSS: &str = include_str!("../assets/lookup.css");
/// Autocomplete script served at `/assets/lookup.js`.
pub const LOOKUP_JS: &str = include_str!("../assets/lookup.js");
