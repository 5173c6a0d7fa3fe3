/// Result alias used throughout the crate, carrying an `anyhow::Error`
/// so domain errors and transport errors propagate through the same `?`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
