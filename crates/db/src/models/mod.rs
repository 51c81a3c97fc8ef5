//! Database row structs.
//!
//! Each submodule holds a `FromRow` struct matching one table and its
//! conversion into the corresponding `globetrotter_core` entity.

pub mod challenge;
pub mod destination;
