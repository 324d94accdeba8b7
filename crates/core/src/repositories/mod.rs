//! Data access and read-model services.
//!
//! Each submodule pairs a store trait (the seam a different backend plugs into) with a service
//! that shapes canonical records for the API layer.

pub mod positions;
pub mod submissions;
