//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod access_log_repo;
pub mod detection_repo;
pub mod vehicle_repo;

pub use access_log_repo::AccessLogRepo;
pub use detection_repo::DetectionRepo;
pub use vehicle_repo::VehicleRepo;
