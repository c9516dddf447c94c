//! Configuration loading and command-line overrides.
//!
//! Pure schema parsing lives in `domain::config`; this module owns where the
//! file comes from and how flags are layered on top.

mod load_config;
mod overrides;

pub use load_config::load_config;
pub use overrides::ConfigOverrides;
