//! Libris catalog library
//!
//! An in-memory library catalog: books, members, and the borrowing that links
//! them. [`Library`] is the aggregate that owns both collections.

pub mod error;
pub mod library;
pub mod modules;
pub mod utils;

pub use error::{CatalogError, CatalogResult};
pub use libris_kernel::settings::CatalogPolicy;
pub use library::Library;
pub use modules::books::{Book, Isbn};
pub use modules::users::{User, UserId};
