mod auth;
mod device;

pub use auth::*;
pub use device::*;
