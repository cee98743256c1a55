pub mod adapters;
pub mod config;
pub mod core;
pub mod dom;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::{HttpTextSource, LocalTextSource, StaticTextSource};
pub use crate::config::toml_config::RenderConfig;
pub use crate::core::bootstrap::{init_page, render_fallback, Renderer, FALLBACK_MESSAGE};
pub use crate::dom::{page_skeleton, Document};
pub use crate::domain::model::{BootState, PageKind, TransportPolicy};
pub use crate::utils::error::{RenderError, Result};
