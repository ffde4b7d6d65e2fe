pub mod location;
pub mod user;

pub use location::Location;
pub use user::{User, UserPayload};
