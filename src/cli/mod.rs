//! Binary layer for appicon.
//!
//! Installs logging and drives one generation run (`runner`). There is no
//! argument parsing: paths come from `GeneratorParams::default()`.
//!
//! If you are embedding appicon into another application, prefer the
//! high-level `appicon::api` module instead of calling the binary code.
pub mod runner;

pub use runner::run;
