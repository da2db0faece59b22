//! Container encoders and header probing.

/// Per-format encoders.
pub mod codec;
/// Header inspection of encoded bytes.
pub mod probe;
