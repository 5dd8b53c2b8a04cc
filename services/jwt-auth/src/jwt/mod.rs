//! Claim set, signing secret and the compact JWS codec.

pub mod claims;
pub mod codec;
pub mod secret;

pub use claims::{Claims, REQUIRED_CLAIMS};
pub use codec::{JwtCodec, ALGORITHM_NAME};
pub use secret::SigningSecret;
