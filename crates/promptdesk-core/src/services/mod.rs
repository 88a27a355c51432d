//! Domain services (business logic)

pub mod auth_service;
pub mod access_guard;
pub mod prompt_service;
pub mod provisioning_service;

pub use auth_service::AuthService;
pub use access_guard::AccessGuard;
pub use prompt_service::PromptService;
pub use provisioning_service::{ProvisionRequest, ProvisioningService};
