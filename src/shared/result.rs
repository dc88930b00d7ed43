/// Result alias used across the application and adapter layers.
/// Errors that the CLI must classify are `TangleError` values wrapped in `anyhow::Error`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
