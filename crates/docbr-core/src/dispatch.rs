//! Batch dispatcher.
//!
//! Resolves the document type, runs the per-element pipeline over the whole
//! batch and keeps results aligned with the input. Large batches are spread
//! over the rayon pool; `par_iter().map().collect()` keeps the order.

use rayon::prelude::*;
use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::{debug, warn};

use crate::engine::{select_attributes, MatchPolicy};
use crate::error::{DocbrError, Result};
use crate::models::config::EngineConfig;
use crate::pipeline::{ExtractedAttributes, PipelineOptions};
use crate::registry::{DocumentDescriptor, DocumentRegistry};

/// Batches at least this long run in parallel by default.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 4096;

/// Attribute values of one document, in registry (or request) order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AttributeMap {
    entries: Vec<(&'static str, Option<String>)>,
}

impl AttributeMap {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| *key == name)
            .and_then(|(_, value)| value.as_deref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(key, _)| *key == name)
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|(key, _)| *key).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Option<&str>)> {
        self.entries.iter().map(|(key, value)| (*key, value.as_deref()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<ExtractedAttributes> for AttributeMap {
    fn from(entries: ExtractedAttributes) -> Self {
        Self { entries }
    }
}

impl Serialize for AttributeMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, &value)?;
        }
        map.end()
    }
}

/// Result of an attribute request over a batch.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(untagged)]
pub enum AttributeColumn {
    /// Exactly one attribute was requested.
    Values(Vec<Option<String>>),
    /// Several attributes, or `"*"`.
    Maps(Vec<Option<AttributeMap>>),
}

impl AttributeColumn {
    pub fn len(&self) -> usize {
        match self {
            AttributeColumn::Values(values) => values.len(),
            AttributeColumn::Maps(maps) => maps.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Split the column into per-document values.
    pub fn into_values(self) -> Vec<AttributeValue> {
        match self {
            AttributeColumn::Values(values) => values.into_iter().map(AttributeValue::Value).collect(),
            AttributeColumn::Maps(maps) => maps.into_iter().map(AttributeValue::Map).collect(),
        }
    }
}

/// Attribute result of a single document.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Value(Option<String>),
    Map(Option<AttributeMap>),
}

impl AttributeValue {
    /// False for a nulled document or an absent single value.
    pub fn is_present(&self) -> bool {
        match self {
            AttributeValue::Value(value) => value.is_some(),
            AttributeValue::Map(map) => map.is_some(),
        }
    }
}

/// Runs parse, validate and attribute requests over batches.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    registry: &'static DocumentRegistry,
    options: PipelineOptions,
    parallel_threshold: usize,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Dispatcher {
    /// Dispatcher over the built-in registry with default settings.
    pub fn new() -> Self {
        Self {
            registry: DocumentRegistry::global(),
            options: PipelineOptions::default(),
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    /// Build a dispatcher from engine settings.
    pub fn from_config(config: &EngineConfig) -> Self {
        let policy = if config.anchored_matching {
            MatchPolicy::Whole
        } else {
            MatchPolicy::Anywhere
        };

        Self::new()
            .with_parallel_threshold(config.parallel_threshold)
            .with_float_suffix_strip(config.strip_float_suffix)
            .with_match_policy(policy)
    }

    /// Minimum batch length for the parallel path. `0` always runs in
    /// parallel.
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Set whether a trailing `.0` is dropped before normalizing.
    pub fn with_float_suffix_strip(mut self, strip: bool) -> Self {
        self.options.strip_float_suffix = strip;
        self
    }

    /// Set how much of the input a pattern match must cover.
    pub fn with_match_policy(mut self, policy: MatchPolicy) -> Self {
        self.options.match_policy = Some(policy);
        self
    }

    pub fn registry(&self) -> &'static DocumentRegistry {
        self.registry
    }

    pub fn options(&self) -> &PipelineOptions {
        &self.options
    }

    /// Canonical value of every element, masked when `mask` is set.
    ///
    /// Elements that do not qualify come back as `None` in place.
    pub fn parse<S>(&self, doctype: &str, batch: &[S], mask: bool) -> Result<Vec<Option<String>>>
    where
        S: AsRef<str> + Sync,
    {
        let descriptor = self.descriptor(doctype)?;
        debug!(
            "Parsing {} {} documents (mask: {}, {})",
            batch.len(),
            doctype,
            mask,
            self.path(batch.len())
        );

        let options = self.options;
        let parsed = self.run(batch, |raw| descriptor.parse_one(raw, mask, &options));

        debug!("Parsed {} of {} {} documents", parsed.iter().flatten().count(), parsed.len(), doctype);
        Ok(parsed)
    }

    /// Validity of every element.
    pub fn validate<S>(&self, doctype: &str, batch: &[S], lazy: bool) -> Result<Vec<bool>>
    where
        S: AsRef<str> + Sync,
    {
        let descriptor = self.descriptor(doctype)?;
        debug!(
            "Validating {} {} documents (lazy: {}, {})",
            batch.len(),
            doctype,
            lazy,
            self.path(batch.len())
        );

        let options = self.options;
        let valid = self.run(batch, |raw| descriptor.validate_one(raw, lazy, &options));

        debug!("{} of {} {} documents are valid", valid.iter().filter(|v| **v).count(), valid.len(), doctype);
        Ok(valid)
    }

    /// Extract the requested attributes of every element.
    ///
    /// A single concrete name yields bare values, anything else (including
    /// `"*"`) yields maps. Bad requests abort before any element is read.
    pub fn attributes<S, N>(
        &self,
        doctype: &str,
        batch: &[S],
        names: &[N],
        lazy: bool,
    ) -> Result<AttributeColumn>
    where
        S: AsRef<str> + Sync,
        N: AsRef<str>,
    {
        let descriptor = self.descriptor(doctype)?;
        let selection = select_attributes(descriptor.kind.key(), descriptor.attributes, names)
            .map_err(|e| {
                warn!("{}", e);
                DocbrError::from(e)
            })?;
        debug!(
            "Extracting {:?} from {} {} documents (lazy: {}, {})",
            selection.names(),
            batch.len(),
            doctype,
            lazy,
            self.path(batch.len())
        );

        let options = self.options;
        let pipeline = descriptor.category.pipeline();
        let extractors = selection.extractors.as_slice();
        let extracted = self.run(batch, |raw| pipeline.extract_one(raw, lazy, extractors, &options));

        let column = if selection.single {
            AttributeColumn::Values(
                extracted
                    .into_iter()
                    .map(|entry| entry.and_then(|mut values| values.pop()).and_then(|(_, value)| value))
                    .collect(),
            )
        } else {
            AttributeColumn::Maps(extracted.into_iter().map(|entry| entry.map(AttributeMap::from)).collect())
        };

        Ok(column)
    }

    fn descriptor(&self, doctype: &str) -> Result<&'static DocumentDescriptor> {
        self.registry.lookup(doctype).map_err(|e| {
            warn!("{}", e);
            DocbrError::from(e)
        })
    }

    fn is_parallel(&self, len: usize) -> bool {
        len >= self.parallel_threshold
    }

    fn path(&self, len: usize) -> &'static str {
        if self.is_parallel(len) { "parallel" } else { "sequential" }
    }

    fn run<S, T, F>(&self, batch: &[S], f: F) -> Vec<T>
    where
        S: AsRef<str> + Sync,
        T: Send,
        F: Fn(&str) -> T + Sync + Send,
    {
        if self.is_parallel(batch.len()) {
            batch.par_iter().map(|raw| f(raw.as_ref())).collect()
        } else {
            batch.iter().map(|raw| f(raw.as_ref())).collect()
        }
    }
}
