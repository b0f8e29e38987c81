// Pagerate Core - URL canonicalization and content addressing

pub mod hash;
pub mod normalize;

pub use hash::{sha256_hex, url_hash};
pub use normalize::{normalize, NormalizeError};
