pub mod engine;
pub mod server;

pub use engine::EngineConfig;
pub use server::ServerConfig;

use crate::error::AppError;

/// Parse an optional variable, naming it in the error.
pub(crate) fn parse_var<T, F>(lookup: &F, name: &str) -> Result<Option<T>, AppError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => raw.trim().parse::<T>().map(Some).map_err(|e| {
            AppError::config(format!("Invalid value for {name} ('{raw}'): {e}"))
        }),
    }
}
