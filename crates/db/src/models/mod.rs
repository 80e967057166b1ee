//! Row structs for the catalog and lookup tables.
//!
//! Each struct is `FromRow` + `Serialize` and matches the columns the
//! corresponding repository selects.

pub mod asset_type;
pub mod ticket_config;
