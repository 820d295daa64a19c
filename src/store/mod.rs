//! Persistence layer.
//!
//! One module per table. Every query function is generic over the executor so the
//! same code runs against the pool or inside a transaction (`&mut *tx`).

pub mod projects;
pub mod tasks;
pub mod users;
