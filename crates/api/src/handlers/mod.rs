pub mod access_log;
pub mod dashboard;
pub mod detection;
pub mod ingest;
pub mod lookup;
pub mod vehicle;
