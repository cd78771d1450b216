// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pipeline orchestration: normalize, truncate, and de-duplicate every
//! field of a generation batch, then score the headlines.

use crate::config::PipelineConfig;
use crate::dedup::{DuplicateFilter, Verdict};
use crate::length::enforce_length_with_ratio;
use crate::normalize::{normalize, normalize_multiline};
use crate::relevance::score_with_cap;
use adcopy_core::{Candidate, FieldKind, FieldSpec, RelevanceEstimate};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Where curated and saved-bank text goes relative to generated text.
///
/// Earlier candidates win duplicate ties, so `Front` lets operator text
/// beat generator output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CuratedPlacement {
    #[default]
    Front,
    Back,
}

/// Raw candidates for one field, grouped by source.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldInput {
    pub curated: Vec<Candidate>,
    pub saved: Vec<Candidate>,
    pub generated: Vec<Candidate>,
}

impl FieldInput {
    pub fn generated(generated: Vec<Candidate>) -> Self {
        Self {
            generated,
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.curated.is_empty() && self.saved.is_empty() && self.generated.is_empty()
    }

    /// Candidates in processing order for the given placement.
    pub fn ordered(&self, placement: CuratedPlacement) -> Vec<&Candidate> {
        let priority = self.curated.iter().chain(&self.saved);
        match placement {
            CuratedPlacement::Front => priority.chain(&self.generated).collect(),
            CuratedPlacement::Back => self.generated.iter().chain(priority).collect(),
        }
    }
}

/// One pipeline invocation's input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerationBatch {
    pub fields: IndexMap<FieldKind, FieldInput>,
    /// Campaign keywords, most important first
    pub keywords: Vec<String>,
    pub curated_placement: CuratedPlacement,
}

/// Why a candidate did not make it into the accepted list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RejectReason {
    /// Nothing left after normalization
    Empty,
    /// `of` indexes the field's accepted list
    ExactDuplicate { of: usize },
    NearDuplicate { of: usize, similarity: f64 },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rejection {
    pub candidate: Candidate,
    pub reason: RejectReason,
}

/// Validated output for one field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldResult {
    pub field: FieldKind,
    pub accepted: Vec<Candidate>,
    pub rejected: Vec<Rejection>,
}

impl FieldResult {
    /// Nothing usable survived; the operator needs to regenerate.
    pub fn is_exhausted(&self) -> bool {
        self.accepted.is_empty()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.accepted.iter().map(|c| c.text.as_str()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchResult {
    pub fields: Vec<FieldResult>,
    /// Present when the batch had a headline field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relevance: Option<RelevanceEstimate>,
}

impl BatchResult {
    pub fn field(&self, kind: FieldKind) -> Option<&FieldResult> {
        self.fields.iter().find(|f| f.field == kind)
    }

    /// Fields whose accepted list came out empty (all candidates rejected).
    pub fn exhausted_fields(&self) -> Vec<FieldKind> {
        self.fields
            .iter()
            .filter(|f| f.is_exhausted())
            .map(|f| f.field)
            .collect()
    }
}

/// The ad copy pipeline. Immutable; every [`Pipeline::run`] owns its state.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn run(&self, batch: &GenerationBatch) -> BatchResult {
        let fields: Vec<FieldResult> = batch
            .fields
            .iter()
            .map(|(&kind, input)| self.process_field(kind, input, batch.curated_placement))
            .collect();

        let relevance = fields
            .iter()
            .find(|f| f.field == FieldKind::Headline)
            .map(|headlines| {
                score_with_cap(
                    &headlines.texts(),
                    &batch.keywords,
                    self.config.keyword_cap,
                )
            });

        BatchResult { fields, relevance }
    }

    /// Run one field's candidates through every stage.
    pub fn process_field(
        &self,
        kind: FieldKind,
        input: &FieldInput,
        placement: CuratedPlacement,
    ) -> FieldResult {
        let spec = kind.spec();
        let mut filter = DuplicateFilter::new(&self.config);
        let mut rejected = Vec::new();

        for raw in input.ordered(placement) {
            let prepared = self.prepare(raw, spec);
            if prepared.text.is_empty() {
                rejected.push(Rejection {
                    candidate: raw.clone(),
                    reason: RejectReason::Empty,
                });
                continue;
            }
            let reason = match filter.offer(prepared.clone()) {
                Verdict::Accepted { .. } => continue,
                Verdict::ExactDuplicate { of } => RejectReason::ExactDuplicate { of },
                Verdict::NearDuplicate { of, similarity } => {
                    RejectReason::NearDuplicate { of, similarity }
                }
            };
            rejected.push(Rejection {
                candidate: prepared,
                reason,
            });
        }

        FieldResult {
            field: kind,
            accepted: filter.into_accepted(),
            rejected,
        }
    }

    /// Normalize then truncate one candidate for `spec`.
    pub fn prepare(&self, candidate: &Candidate, spec: &FieldSpec) -> Candidate {
        let normalize_for_field = |text: &str| {
            if spec.allows_line_breaks {
                normalize_multiline(text)
            } else {
                normalize(text)
            }
        };
        let truncate = |text: &str| {
            enforce_length_with_ratio(text, spec.max_length, self.config.boundary_ratio)
        };

        let text = truncate(&normalize_for_field(&candidate.text));
        // Cutting "AKCIÓ most" can leave an all-caps "AKCIÓ" behind
        let text = truncate(&normalize_for_field(&text));
        candidate.clone().with_text(text)
    }
}

#[cfg(test)]
#[path = "batch_tests.rs"]
mod tests;
