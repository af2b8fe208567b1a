//! Casuist Store - file-backed precedent database
//!
//! The database is read once at startup and cached for the process lifetime;
//! there is no hot-path I/O. Malformed entries are skipped with a warning,
//! never a failure - the I/O boundary is the only place errors originate.

pub mod store;

pub use store::PrecedentStore;
