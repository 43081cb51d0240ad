//! Variable registry: lookup, mutation, merge, load and save.

use std::sync::{Mutex, PoisonError};

use cv_core::{CATALOG, Var, VarBuilder, system_var};
use cv_document::{DocumentCodec, DocumentFormat};
use cv_store::KeyValueStore;
use indexmap::IndexSet;

use crate::config::RegistryConfig;
use crate::error::{RegistryError, RegistryResult};

/// Registry of named variables.
///
/// `vars` is the live set read by the evaluation engine and holds both
/// user variables and the built-in constants. `system_vars` is the catalog
/// as built by the last `load`. Names in `vars` are unique at all times.
///
/// Removing a constant from `vars` leaves its record in `system_vars`
/// until the next `load`; `merge` will then bring it back.
#[derive(Debug)]
pub struct VariableRegistry<C = DocumentFormat> {
    vars: Vec<Var>,
    system_vars: Vec<Var>,
    config: RegistryConfig,
    codec: C,
    // Serializes saves issued through shared references.
    persist: Mutex<()>,
}

impl VariableRegistry<DocumentFormat> {
    /// Empty registry with the default configuration.
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Empty registry using the configured storage key and document format.
    pub fn with_config(config: RegistryConfig) -> Self {
        let codec = config.format;
        Self::with_codec(config, codec)
    }
}

impl Default for VariableRegistry<DocumentFormat> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: DocumentCodec> VariableRegistry<C> {
    /// Empty registry with a custom codec; `config.format` is ignored.
    pub fn with_codec(config: RegistryConfig, codec: C) -> Self {
        Self {
            vars: Vec::new(),
            system_vars: Vec::new(),
            config,
            codec,
            persist: Mutex::new(()),
        }
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    pub fn vars(&self) -> &[Var] {
        &self.vars
    }

    pub fn system_vars(&self) -> &[Var] {
        &self.system_vars
    }

    /// Variables that would be persisted by `save`.
    pub fn user_vars(&self) -> impl Iterator<Item = &Var> {
        self.vars.iter().filter(|var| !var.is_system())
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.vars.iter().position(|var| var.name() == name)
    }

    pub fn get_var(&self, name: &str) -> Option<&Var> {
        self.vars.iter().find(|var| var.name() == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get_var(name).is_some()
    }

    /// Add a variable, or update the existing one with the same name.
    ///
    /// The target name is `name` when given, otherwise the builder's own
    /// name. On a collision the stored record is updated in place (it keeps
    /// its position) and a reference to it is returned; otherwise the new
    /// variable is appended.
    pub fn add_var(&mut self, name: Option<&str>, builder: VarBuilder) -> RegistryResult<&Var> {
        let target = name.unwrap_or(builder.name()).to_string();
        let candidate = builder.rename(target.as_str()).build()?;

        let idx = match self.position(&target) {
            Some(idx) => {
                self.vars[idx].copy_from(candidate);
                idx
            }
            None => {
                self.vars.push(candidate);
                self.vars.len() - 1
            }
        };
        Ok(&self.vars[idx])
    }

    /// Remove the variable with this name from the live set.
    ///
    /// `system_vars` is left untouched.
    pub fn remove(&mut self, name: &str) -> Option<Var> {
        let idx = self.position(name)?;
        Some(self.vars.remove(idx))
    }

    /// Replace the live set with `incoming` plus any missing constants.
    ///
    /// Duplicate names in `incoming` keep their first occurrence. An
    /// incoming variable named like a constant shadows it. The result keeps
    /// incoming order followed by the constants that were added back.
    pub fn merge(&mut self, incoming: impl IntoIterator<Item = Var>) {
        let mut result: IndexSet<Var> = incoming.into_iter().collect();
        let incoming_len = result.len();

        for system_var in &self.system_vars {
            if !result.contains(system_var) {
                result.insert(system_var.clone());
            }
        }

        tracing::debug!(
            incoming = incoming_len,
            restored_constants = result.len() - incoming_len,
            "merged variables"
        );
        self.vars = result.into_iter().collect();
    }

    /// Rebuild the registry from the store and the constant catalog.
    ///
    /// Without a store, or when the store has no entry under the storage
    /// key, only the constants are loaded. A restored variable named like a
    /// constant wins over the catalog value. On error the registry is left
    /// empty.
    pub fn load(&mut self, store: Option<&dyn KeyValueStore>) -> RegistryResult<()> {
        self.vars.clear();
        self.system_vars.clear();

        if let Some(store) = store
            && let Some(text) = store.get(&self.config.storage_key)?
        {
            let restored = self.codec.decode(&text).map_err(RegistryError::Decode)?;
            let mut seen = IndexSet::with_capacity(restored.len());
            for var in &restored {
                if !seen.insert(var.name()) {
                    return Err(RegistryError::DuplicateRestored {
                        name: var.name().to_string(),
                    });
                }
            }
            self.vars.extend(restored);
        }

        let restored_count = self.vars.len();
        for name in CATALOG {
            let constant = system_var(name).inspect_err(|_| {
                self.vars.clear();
                self.system_vars.clear();
            })?;
            if self.contains(name) {
                tracing::warn!(name, "stored variable shadows built-in constant");
            } else {
                self.vars.push(constant.clone());
            }
            self.system_vars.push(constant);
        }

        tracing::debug!(
            key = %self.config.storage_key,
            restored = restored_count,
            total = self.vars.len(),
            "loaded variables"
        );
        Ok(())
    }

    /// Persist the user variables under the storage key and commit.
    ///
    /// Constants are never written. Nothing reaches the store unless
    /// encoding succeeds.
    pub fn save(&self, store: &mut dyn KeyValueStore) -> RegistryResult<()> {
        let _guard = self.persist.lock().unwrap_or_else(PoisonError::into_inner);

        let user_vars: Vec<Var> = self.user_vars().cloned().collect();
        let text = self
            .codec
            .encode(&user_vars)
            .map_err(RegistryError::Encode)?;

        store.put(&self.config.storage_key, text)?;
        store.commit()?;

        tracing::debug!(
            key = %self.config.storage_key,
            saved = user_vars.len(),
            "saved variables"
        );
        Ok(())
    }
}
