// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! JSON batch files read by `adcopy process`.
//!
//! Field names are parsed leniently ("Headline", "sitelink-title"), and each
//! source is mapped to its origin here so the pipeline only sees
//! [`Candidate`]s.

use adcopy_core::{split_response, Candidate, FieldKind, FieldParseError, Origin, RawCandidate};
use adcopy_pipeline::{expand_templates, placeholders, CuratedPlacement, FieldInput, GenerationBatch};
use indexmap::IndexMap;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BatchFileError {
    #[error("invalid batch JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Field(#[from] FieldParseError),
    #[error("field '{0}' appears more than once")]
    DuplicateField(FieldKind),
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BatchFile {
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub curated_placement: CuratedPlacement,
    #[serde(default)]
    pub fields: IndexMap<String, FieldFile>,
    /// Values for `${name}` placeholders in templates
    #[serde(default)]
    pub vars: IndexMap<String, String>,
}

/// Candidate sources for one field.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldFile {
    #[serde(default)]
    pub generated: Vec<RawCandidate>,
    /// Raw generator reply, split into candidates after `generated`
    #[serde(default)]
    pub generated_response: Option<String>,
    #[serde(default)]
    pub curated: Vec<RawCandidate>,
    #[serde(default)]
    pub saved: Vec<RawCandidate>,
    /// Curated templates, expanded after `curated`
    #[serde(default)]
    pub templates: Vec<String>,
}

impl BatchFile {
    pub fn parse(content: &str) -> Result<Self, BatchFileError> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn into_batch(self) -> Result<GenerationBatch, BatchFileError> {
        let mut fields = IndexMap::new();
        for (name, field) in self.fields {
            let kind: FieldKind = name.parse()?;
            let input = field.into_input(kind, &self.vars);
            if fields.insert(kind, input).is_some() {
                return Err(BatchFileError::DuplicateField(kind));
            }
        }
        Ok(GenerationBatch {
            fields,
            keywords: self.keywords,
            curated_placement: self.curated_placement,
        })
    }
}

impl FieldFile {
    fn into_input(self, kind: FieldKind, vars: &IndexMap<String, String>) -> FieldInput {
        for template in &self.templates {
            let missing: Vec<&str> = placeholders(template)
                .into_iter()
                .filter(|name| !vars.contains_key(*name))
                .collect();
            if !missing.is_empty() {
                tracing::warn!(
                    field = %kind,
                    template = %template,
                    ?missing,
                    "skipping template with unresolved placeholders"
                );
            }
        }

        let mut curated = with_origin(self.curated, Origin::Curated);
        curated.extend(expand_templates(&self.templates, vars));

        let mut generated = with_origin(self.generated, Origin::Generated);
        if let Some(response) = &self.generated_response {
            generated.extend(split_response(response).into_iter().map(Candidate::generated));
        }

        FieldInput {
            curated,
            saved: with_origin(self.saved, Origin::SavedBank),
            generated,
        }
    }
}

fn with_origin(raw: Vec<RawCandidate>, origin: Origin) -> Vec<Candidate> {
    raw.into_iter().map(|c| c.into_candidate(origin)).collect()
}

#[cfg(test)]
#[path = "batch_file_tests.rs"]
mod tests;
