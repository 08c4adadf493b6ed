//! Data export

pub mod csv;
