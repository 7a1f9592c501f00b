use pcommon::BoxFuture;

use crate::{ModelRequest, ModelResponse, ProviderError, ProviderId};

pub type ProviderFuture<'a, T> = BoxFuture<'a, T>;

/// Remote chat-completion capability.
///
/// One call issues at most one outbound request and resolves with a single reply or a
/// classified [`ProviderError`].
pub trait ModelProvider: Send + Sync {
    fn id(&self) -> ProviderId;

    fn complete<'a>(
        &'a self,
        request: ModelRequest,
    ) -> ProviderFuture<'a, Result<ModelResponse, ProviderError>>;
}
