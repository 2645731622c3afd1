//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod payment_session_repo;
pub mod product_repo;

pub use payment_session_repo::PaymentSessionRepo;
pub use product_repo::ProductRepo;
