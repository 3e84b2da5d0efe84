//! `ProviderManager` — concurrent-safe named provider map with active-provider
//! swapping.

use crate::{ModelConfig, ModelList, Provider, build_provider};
use anyhow::{Result, bail};
use compact_str::CompactString;
use llm::{LLM, Request, Response};
use parking_lot::RwLock;
use std::{collections::BTreeMap, sync::Arc};

/// Manages a set of named providers with an active selection.
///
/// `active()` returns a clone of the current `Provider`; callers do not
/// hold the lock while performing LLM calls.
pub struct ProviderManager {
    inner: Arc<RwLock<Inner>>,
}

struct Inner {
    /// Resolved entries keyed by model name.
    providers: BTreeMap<CompactString, Entry>,
    /// Name of the currently active entry.
    active: CompactString,
}

struct Entry {
    config: ModelConfig,
    provider: Provider,
    model_id: CompactString,
}

/// Info about a single provider entry returned by `list()`.
#[derive(Debug, Clone)]
pub struct ProviderEntry {
    /// Entry name (key).
    pub name: CompactString,
    /// Bare model id sent to the backend.
    pub model_id: CompactString,
    /// Whether this is the active provider.
    pub active: bool,
}

impl ProviderManager {
    /// Resolve every entry of a model list.
    ///
    /// Entries that fail to resolve are logged and skipped. The first entry
    /// that resolves becomes active. Returns an error only when no entry
    /// resolved.
    pub fn from_list(list: &ModelList) -> Result<Self> {
        let mut providers = BTreeMap::new();
        let mut active = None;

        for config in &list.models {
            let name = config.name();
            match build_provider(config) {
                Ok((provider, model_id)) => {
                    let name = CompactString::from(name);
                    active.get_or_insert_with(|| name.clone());
                    providers.insert(
                        name,
                        Entry {
                            config: config.clone(),
                            provider,
                            model_id: model_id.into(),
                        },
                    );
                }
                Err(e) => tracing::warn!(model = name, "skipping model: {e}"),
            }
        }

        let Some(active) = active else {
            bail!("no model in the list could be resolved");
        };

        Ok(Self {
            inner: Arc::new(RwLock::new(Inner { providers, active })),
        })
    }

    /// Get a clone of the active provider.
    pub fn active(&self) -> Provider {
        let inner = self.inner.read();
        inner.providers[&inner.active].provider.clone()
    }

    /// Get the name of the active entry.
    pub fn active_name(&self) -> CompactString {
        self.inner.read().active.clone()
    }

    /// Get the bare model id of the active entry.
    pub fn active_model_id(&self) -> CompactString {
        let inner = self.inner.read();
        inner.providers[&inner.active].model_id.clone()
    }

    /// Get a clone of the active entry's config.
    pub fn active_config(&self) -> ModelConfig {
        let inner = self.inner.read();
        inner.providers[&inner.active].config.clone()
    }

    /// Get a provider and its model id by name.
    pub fn get(&self, name: &str) -> Option<(Provider, CompactString)> {
        let inner = self.inner.read();
        inner
            .providers
            .get(name)
            .map(|entry| (entry.provider.clone(), entry.model_id.clone()))
    }

    /// Switch to a different entry by name.
    pub fn switch(&self, name: &str) -> Result<()> {
        let mut inner = self.inner.write();
        if !inner.providers.contains_key(name) {
            bail!("provider '{name}' not found");
        }
        inner.active = CompactString::from(name);
        Ok(())
    }

    /// Resolve and add a new entry, replacing any entry with the same name.
    pub fn add(&self, config: &ModelConfig) -> crate::Result<()> {
        let (provider, model_id) = build_provider(config)?;
        self.inner.write().providers.insert(
            config.name().into(),
            Entry {
                config: config.clone(),
                provider,
                model_id: model_id.into(),
            },
        );
        Ok(())
    }

    /// Remove an entry by name. Fails if the entry is currently active.
    pub fn remove(&self, name: &str) -> Result<()> {
        let mut inner = self.inner.write();
        if inner.active == name {
            bail!("cannot remove the active provider '{name}'");
        }
        if inner.providers.remove(name).is_none() {
            bail!("provider '{name}' not found");
        }
        Ok(())
    }

    /// List all entries with their active status.
    pub fn list(&self) -> Vec<ProviderEntry> {
        let inner = self.inner.read();
        inner
            .providers
            .iter()
            .map(|(name, entry)| ProviderEntry {
                name: name.clone(),
                model_id: entry.model_id.clone(),
                active: *name == inner.active,
            })
            .collect()
    }
}

impl LLM for ProviderManager {
    /// Send through the active provider, filling in its model id when the
    /// request leaves `model` empty.
    async fn send(&self, request: &Request) -> Result<Response> {
        let (provider, model_id) = {
            let inner = self.inner.read();
            let entry = &inner.providers[&inner.active];
            (entry.provider.clone(), entry.model_id.clone())
        };
        if request.model.is_empty() {
            let request = Request {
                model: model_id,
                ..request.clone()
            };
            provider.send(&request).await
        } else {
            provider.send(request).await
        }
    }
}

impl std::fmt::Debug for ProviderManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.read();
        f.debug_struct("ProviderManager")
            .field("active", &inner.active)
            .field("count", &inner.providers.len())
            .finish()
    }
}

impl Clone for ProviderManager {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}
