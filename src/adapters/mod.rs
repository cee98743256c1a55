// Adapters layer: concrete text sources for the content store.

pub mod http;
pub mod local;
pub mod memory;

pub use http::HttpTextSource;
pub use local::LocalTextSource;
pub use memory::StaticTextSource;
