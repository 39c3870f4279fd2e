//! Utility modules shared by the advisor and formatters

pub mod display_name;

pub use display_name::capitalize;
