//! # PromptDesk Core - Domain Module

pub mod identity;
pub mod tenant;
pub mod prompt;

pub use identity::{Identity, NewIdentity, Role};
pub use tenant::Tenant;
pub use prompt::{PageMeta, Prompt, PromptPage, PromptRow, PromptSummary};
