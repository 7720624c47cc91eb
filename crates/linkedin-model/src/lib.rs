//! All LinkedIn API endpoint request and response objects.

pub mod asset;
pub mod auth;
pub mod error;
pub mod idtypes;
pub mod share;

pub use {asset::*, auth::*, error::*, idtypes::*, share::*};
