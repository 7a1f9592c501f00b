//! Secure in-memory credential management and file-based key loading.

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use crate::{ProviderError, ProviderId};

#[derive(Clone, PartialEq, Eq)]
pub struct SecretString {
    value: String,
}

impl SecretString {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn expose(&self) -> &str {
        self.value.as_str()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

impl std::fmt::Debug for SecretString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl Drop for SecretString {
    fn drop(&mut self) {
        // SAFETY: zero bytes are valid UTF-8.
        unsafe {
            self.value.as_mut_vec().fill(0);
        }
    }
}

/// Reads an API key from a file, trimming surrounding whitespace.
pub fn read_api_key_file(path: impl AsRef<Path>) -> Result<SecretString, ProviderError> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|err| {
        ProviderError::authentication(format!(
            "failed to read api key file {}: {err}",
            path.display()
        ))
    })?;

    let secret = SecretString::new(raw.trim());
    if secret.is_empty() {
        return Err(ProviderError::authentication(format!(
            "api key file {} is empty",
            path.display()
        )));
    }

    Ok(secret)
}

#[derive(Default)]
pub struct SecureCredentialManager {
    credentials: Mutex<HashMap<ProviderId, SecretString>>,
}

impl SecureCredentialManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_api_key(
        &self,
        provider: ProviderId,
        api_key: impl Into<String>,
    ) -> Result<(), ProviderError> {
        let api_key = SecretString::new(api_key);
        if api_key.is_empty() {
            return Err(ProviderError::authentication("api key must not be empty"));
        }

        self.credentials_mut()?.insert(provider, api_key);
        Ok(())
    }

    pub fn load_api_key_file(
        &self,
        provider: ProviderId,
        path: impl AsRef<Path>,
    ) -> Result<(), ProviderError> {
        let api_key = read_api_key_file(path)?;
        self.credentials_mut()?.insert(provider, api_key);
        Ok(())
    }

    pub fn api_key(&self, provider: ProviderId) -> Result<Option<SecretString>, ProviderError> {
        Ok(self.credentials_ref()?.get(&provider).cloned())
    }

    pub fn has_credentials(&self, provider: ProviderId) -> Result<bool, ProviderError> {
        Ok(self.credentials_ref()?.contains_key(&provider))
    }

    pub fn clear(&self, provider: ProviderId) -> Result<bool, ProviderError> {
        Ok(self.credentials_mut()?.remove(&provider).is_some())
    }

    fn credentials_ref(
        &self,
    ) -> Result<MutexGuard<'_, HashMap<ProviderId, SecretString>>, ProviderError> {
        self.credentials
            .lock()
            .map_err(|_| ProviderError::authentication("credential manager lock poisoned"))
    }

    fn credentials_mut(
        &self,
    ) -> Result<MutexGuard<'_, HashMap<ProviderId, SecretString>>, ProviderError> {
        self.credentials
            .lock()
            .map_err(|_| ProviderError::authentication("credential manager lock poisoned"))
    }
}

impl std::fmt::Debug for SecureCredentialManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecureCredentialManager")
            .field("credentials", &"[REDACTED]")
            .finish()
    }
}
