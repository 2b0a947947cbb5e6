pub mod location;
pub mod status_check;

pub use location::Location;
pub use status_check::StatusCheck;
