//! Network layer: the REST helper used for the initial history load.

pub mod api;
