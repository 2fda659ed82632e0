pub mod backup;
pub mod export;
pub mod filter;
pub mod import;
pub mod log;
pub mod places;
pub mod session;
