pub mod badge;
pub mod card;
pub mod layout;
pub mod results;

pub use badge::*;
pub use card::*;
pub use layout::*;
pub use results::*;
