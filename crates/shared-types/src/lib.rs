pub mod building;
pub mod error;
pub mod location;
pub mod lookup;
pub mod messages;
pub mod permit;
pub mod requests;
pub mod settings;

pub use building::*;
pub use error::*;
pub use location::*;
pub use lookup::*;
pub use permit::*;
pub use requests::*;
pub use settings::*;
