mod clock;
mod form;
mod schedule;

pub use clock::*;
pub use form::*;
pub use schedule::*;
