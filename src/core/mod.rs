//! Core processing building blocks: square padding, Lanczos resizing, the
//! load-and-pad pipeline, and icon save helpers. These are internal primitives
//! consumed by the high-level `api` module.
pub mod params;
pub mod processing;
