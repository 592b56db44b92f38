//! The lookup table from host type names to [`Converter`]s.

use std::{
    collections::HashMap,
    sync::LazyLock,
};

use strum::IntoEnumIterator;
use thiserror::Error;

use crate::render::converter::Converter;

static BUILTIN: LazyLock<ConverterRegistry> = LazyLock::new(ConverterRegistry::builtin);

#[derive(Debug, Error, PartialEq, Eq)]
#[error("`{alias}` cannot alias `{target}`: no converter is registered for `{target}`")]
pub struct UnknownConverter {
    pub alias: String,
    pub target: String,
}

/// Maps primitive type names to their codec binding. Built once, then only read.
#[derive(Debug, Clone)]
pub struct ConverterRegistry {
    entries: HashMap<String, Converter>,
}

impl ConverterRegistry {
    /// A registry holding every built-in binding under its host type name.
    pub fn builtin() -> Self {
        let entries = Converter::iter()
            .map(|converter| (converter.to_string(), converter))
            .collect();

        Self { entries }
    }

    /// The process-wide built-in registry.
    pub fn shared() -> &'static Self {
        &BUILTIN
    }

    pub fn lookup(&self, name: &str) -> Option<Converter> {
        self.entries.get(name).copied()
    }

    /// Registers `name` under an existing binding, replacing any previous entry for `name`.
    pub fn register(&mut self, name: impl Into<String>, converter: Converter) {
        self.entries.insert(name.into(), converter);
    }

    /// Registers `alias` under whatever `target` currently resolves to, e.g. a `type UserId = u64;`
    /// declared in user code.
    pub fn alias(&mut self, alias: &str, target: &str) -> Result<(), UnknownConverter> {
        let converter = self.lookup(target).ok_or_else(|| UnknownConverter {
            alias: alias.to_string(),
            target: target.to_string(),
        })?;
        self.register(alias, converter);

        Ok(())
    }

    /// Registers a batch of aliases. An alias may target another alias of the same batch, whatever
    /// the order. Fails on the first alias whose target never resolves, cycles included.
    pub fn alias_all<'a>(
        &mut self,
        aliases: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<(), UnknownConverter> {
        let mut pending: Vec<_> = aliases.into_iter().collect();
        while let Some(&(alias, target)) = pending.first() {
            let before = pending.len();
            pending.retain(|&(alias, target)| self.alias(alias, target).is_err());
            if pending.len() == before {
                return self.alias(alias, target);
            }
        }

        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ConverterRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
