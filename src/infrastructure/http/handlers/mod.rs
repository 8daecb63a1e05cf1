//! HTTP Handlers

mod category;
mod collection;
mod course;
mod ping;
mod review;

pub use category::*;
pub use collection::*;
pub use course::*;
pub use ping::*;
pub use review::*;
