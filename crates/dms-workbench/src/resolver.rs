//! Variant resolution over the known module set.

use std::collections::HashMap;

use dms_model::{DataModule, Dmc, InfoVariant, ModuleKey};

/// The full set of known data modules, keyed by `(dmc, info_variant)`.
///
/// Inserting a record replaces any existing record with the same key, which
/// enforces the at-most-one-record-per-variant invariant at the container
/// level. Lookup order is irrelevant; the key is unique.
#[derive(Debug, Clone, Default)]
pub struct ModuleSet {
    modules: HashMap<ModuleKey, DataModule>,
}

/// The verbatim and simplified records of one data module.
///
/// Absence of either variant is a normal "nothing to show" state, not an
/// error; a module's rewrite may simply not have been generated yet.
#[derive(Debug, Clone, Copy, Default)]
pub struct VariantPair<'a> {
    pub verbatim: Option<&'a DataModule>,
    pub simplified: Option<&'a DataModule>,
}

impl<'a> VariantPair<'a> {
    pub fn variant(&self, variant: InfoVariant) -> Option<&'a DataModule> {
        match variant {
            InfoVariant::Verbatim => self.verbatim,
            InfoVariant::Simplified => self.simplified,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.verbatim.is_none() && self.simplified.is_none()
    }
}

impl ModuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_modules(modules: impl IntoIterator<Item = DataModule>) -> Self {
        let mut set = Self::new();
        for module in modules {
            set.insert(module);
        }
        set
    }

    /// Insert a record, returning the record it replaced, if any.
    pub fn insert(&mut self, module: DataModule) -> Option<DataModule> {
        self.modules.insert(module.key(), module)
    }

    pub fn get(&self, key: &ModuleKey) -> Option<&DataModule> {
        self.modules.get(key)
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// All records in key order, for stable list rendering.
    pub fn sorted(&self) -> Vec<&DataModule> {
        let mut records: Vec<&DataModule> = self.modules.values().collect();
        records.sort_by(|a, b| a.key().cmp(&b.key()));
        records
    }

    /// Resolve the variant pair for the current selection.
    ///
    /// `None` resolves to an empty pair (no module selected).
    pub fn resolve(&self, selection: Option<&ModuleKey>) -> VariantPair<'_> {
        match selection {
            Some(key) => self.resolve_dmc(&key.dmc),
            None => VariantPair::default(),
        }
    }

    /// Resolve both variants of a DMC.
    pub fn resolve_dmc(&self, dmc: &Dmc) -> VariantPair<'_> {
        VariantPair {
            verbatim: self
                .modules
                .get(&ModuleKey::new(dmc.clone(), InfoVariant::Verbatim)),
            simplified: self
                .modules
                .get(&ModuleKey::new(dmc.clone(), InfoVariant::Simplified)),
        }
    }
}
