//! # JSON Storage Module
//!
//! File-based storage implementation for the desktop app.
//!
//! ## File Structure
//!
//! ```text
//! Finance Insights/
//! ├── monthlySalary              ← raw form text
//! ├── currency                   ← 3-letter code
//! ├── darkMode                   ← "true" / "false"
//! └── financialAnalysesHistory   ← JSON array of analysis records
//! ```
//!
//! Each storage key is one file in the data directory, written atomically via
//! a temp file and rename.

pub mod connection;
pub mod kv_repository;

pub use connection::JsonConnection;
pub use kv_repository::KvRepository;
