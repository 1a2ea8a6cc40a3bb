//! Domain models shared across thumbcache components.

pub mod request;
pub mod response;
pub mod size;

pub use request::ImageRequest;
pub use response::{ImageResponse, ProxyImageResponse};
pub use size::{SizeSpec, SizeSpecError};
