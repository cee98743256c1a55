pub mod bootstrap;
pub mod contact;
pub mod fetcher;
pub mod loader;
pub mod pages;
pub mod writers;

pub use crate::domain::model::{BootState, ContactFields, PageKind, ResolvedContent, TransportPolicy};
pub use crate::domain::ports::{ElementRegistry, TextSource};
pub use crate::utils::error::Result;
