//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept a pool or a connection as the first argument.

pub mod asset_type_repo;
pub mod ticket_config_repo;

pub use asset_type_repo::AssetTypeRepo;
pub use ticket_config_repo::{TicketCategoryRepo, TicketTypeRepo};
