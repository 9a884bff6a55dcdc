//! Domain models
//!
//! This module contains all domain models used throughout the application.

pub mod account;
pub mod award;
pub mod challenge;
pub mod settings;
pub mod standings;
pub mod submission;
pub mod team;
pub mod user;
pub mod visibility;

pub use account::*;
pub use award::*;
pub use challenge::*;
pub use settings::*;
pub use standings::*;
pub use submission::*;
pub use team::*;
pub use user::*;
pub use visibility::*;
