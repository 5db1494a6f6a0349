mod apply_cache_control;
mod refresh_domains;
mod resolve_query;

pub use apply_cache_control::ApplyCacheControlUseCase;
pub use refresh_domains::{DomainRefreshSummary, RefreshAuthoritativeDomainsUseCase};
pub use resolve_query::{AnswerSource, Resolution, ResolveQueryUseCase};
