//! Character API access: wire types, HTTP client and the session page cache

mod cache;
mod client;
mod errors;
mod types;

pub use cache::PageCache;
pub use client::{CharacterSource, HttpCharacterClient};
pub use errors::{ApiError, ApiResult};
pub use types::{Character, CharacterPage, CharacterStatus, LocationRef, PageInfo};
