//! Request and response bodies

use promptdesk_core::domain::{PageMeta, PromptPage, PromptSummary};
use promptdesk_shared::constants::{DEFAULT_PAGE, DEFAULT_PAGE_LIMIT};
use promptdesk_shared::PageRequest;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// OAuth2 password-grant form. Extra fields such as `grant_type` are ignored.
#[derive(Debug, Deserialize)]
pub struct TokenRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

fn default_page() -> u32 {
    DEFAULT_PAGE
}

fn default_limit() -> u32 {
    DEFAULT_PAGE_LIMIT
}

#[derive(Debug, Deserialize, Validate)]
pub struct PromptQueryParams {
    #[serde(default = "default_page")]
    #[validate(range(min = 1, message = "page must be at least 1"))]
    pub page: u32,

    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 100, message = "limit must be between 1 and 100"))]
    pub limit: u32,
}

impl From<&PromptQueryParams> for PageRequest {
    fn from(params: &PromptQueryParams) -> Self {
        PageRequest::new(params.page, params.limit)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PromptDto {
    pub prompt_id: i32,
    pub prompt_title: String,
    pub prompt: String,
}

impl From<PromptSummary> for PromptDto {
    fn from(summary: PromptSummary) -> Self {
        Self {
            prompt_id: summary.id,
            prompt_title: summary.title,
            prompt: summary.body,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PaginationDto {
    pub page: u32,
    pub limit: u32,
    pub total: i64,
}

impl From<PageMeta> for PaginationDto {
    fn from(meta: PageMeta) -> Self {
        Self { page: meta.page, limit: meta.limit, total: meta.total }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PromptPageResponse {
    pub company_id: String,
    pub company_name: String,
    pub prompts: Vec<PromptDto>,
    pub pagination: PaginationDto,
}

impl From<PromptPage> for PromptPageResponse {
    fn from(page: PromptPage) -> Self {
        Self {
            company_id: page.tenant_id,
            company_name: page.tenant_name,
            prompts: page.prompts.into_iter().map(PromptDto::from).collect(),
            pagination: page.pagination.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub username: String,
}

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub message: String,
    pub user: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
