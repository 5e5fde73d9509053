mod app_context;
mod config_warnings;

pub use app_context::AppContext;
#[cfg(test)]
pub use app_context::tests::{flags as test_flags, offline_context};
pub use config_warnings::warn_unconfigured;
