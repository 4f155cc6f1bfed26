//! User-facing text shared by the JSON API and the HTML pages.

pub const NOT_CONFIGURED: &str =
    "The tool has not been configured yet. Please contact your administrator.";
pub const INCORRECT_PASSWORD: &str = "Incorrect password. Please try again.";
pub const ACCESS_GRANTED: &str = "Access granted.";
pub const ACCESS_REQUIRED: &str =
    "Session expired. Please refresh the page and enter the password.";
pub const FORM_EXPIRED: &str = "Your session has expired. Please refresh the page and try again.";
pub const ADDRESS_REQUIRED: &str = "Please enter a property address.";
pub const PASSWORD_REQUIRED: &str = "Please enter the access password.";
