pub mod maybe_session;
pub mod tenant;
