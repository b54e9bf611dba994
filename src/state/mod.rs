//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State mutation lives here as plain, synchronous methods so it can be
//! unit-tested on native targets; components only wrap these models in
//! `RwSignal`s and call into them.

pub mod chat;
