pub mod cookies;
pub mod csrf;
pub mod extractors;
pub mod gate;
pub mod middleware;
pub mod password;
pub mod session;
