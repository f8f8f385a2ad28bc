//! Options controlling a merge run.

use std::collections::HashSet;

/// MergeOptions is the full configuration of a merge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeOptions {
    /// Only merge `dependencies`, `devDependencies` and `peerDependencies`.
    pub only_dependencies: bool,
    /// Value written to the target's `name` field.
    pub name: Option<String>,
    /// Value written to the target's `version` field.
    pub package_version: Option<String>,
    /// Value written to the target's `description` field.
    pub description: Option<String>,
    /// Fields that are never merged.
    pub not_merge: HashSet<String>,
}

impl MergeOptions {
    /// Creates a new MergeOptionsBuilder.
    pub fn builder() -> MergeOptionsBuilder {
        MergeOptionsBuilder::new()
    }

    /// Returns the field overrides that are set, keyed by target field name.
    pub fn overrides(&self) -> Vec<(&'static str, &str)> {
        [
            ("name", &self.name),
            ("version", &self.package_version),
            ("description", &self.description),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.as_deref().map(|v| (field, v)))
        .collect()
    }
}

/// MergeOptionsBuilder is a builder for creating MergeOptions.
#[derive(Debug, Default)]
pub struct MergeOptionsBuilder {
    options: MergeOptions,
}

impl MergeOptionsBuilder {
    /// Creates a new MergeOptionsBuilder.
    pub fn new() -> Self {
        MergeOptionsBuilder::default()
    }

    /// Restricts the merge to dependency fields.
    pub fn only_dependencies(mut self, value: bool) -> Self {
        self.options.only_dependencies = value;
        self
    }

    /// Overrides the target's name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.options.name = Some(name.into());
        self
    }

    /// Overrides the target's version.
    pub fn package_version(mut self, version: impl Into<String>) -> Self {
        self.options.package_version = Some(version.into());
        self
    }

    /// Overrides the target's description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.options.description = Some(description.into());
        self
    }

    /// Adds fields to the exclusion set.
    pub fn not_merge<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.not_merge.extend(fields.into_iter().map(Into::into));
        self
    }

    /// Builds the MergeOptions.
    pub fn build(self) -> MergeOptions {
        self.options
    }
}
