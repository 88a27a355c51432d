//! Repository traits (ports)

pub mod identity_repository;
pub mod tenant_repository;
pub mod prompt_repository;
pub mod health_repository;

pub use identity_repository::IdentityRepository;
pub use tenant_repository::TenantRepository;
pub use prompt_repository::PromptRepository;
pub use health_repository::HealthRepository;

#[cfg(test)]
pub use identity_repository::MockIdentityRepository;
#[cfg(test)]
pub use prompt_repository::MockPromptRepository;
#[cfg(test)]
pub use tenant_repository::MockTenantRepository;
