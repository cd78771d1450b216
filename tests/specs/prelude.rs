//! Test helpers for behavioral specifications.
//!
//! Provides a small builder DSL over `GenerationBatch` and `BatchResult`.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

pub use adcopy_core::{Candidate, FieldKind, Origin};
pub use adcopy_pipeline::{
    BatchResult, CuratedPlacement, FieldInput, GenerationBatch, Pipeline, PipelineConfig,
    RejectReason,
};

/// Create a batch builder
pub fn batch() -> BatchBuilder {
    BatchBuilder::default()
}

#[derive(Default)]
pub struct BatchBuilder {
    batch: GenerationBatch,
    config: PipelineConfig,
}

impl BatchBuilder {
    fn input(&mut self, kind: FieldKind) -> &mut FieldInput {
        self.batch.fields.entry(kind).or_default()
    }

    pub fn generated(mut self, kind: FieldKind, texts: &[&str]) -> Self {
        let input = self.input(kind);
        input
            .generated
            .extend(texts.iter().map(|t| Candidate::generated(*t)));
        self
    }

    pub fn curated(mut self, kind: FieldKind, texts: &[&str]) -> Self {
        let input = self.input(kind);
        input
            .curated
            .extend(texts.iter().map(|t| Candidate::curated(*t)));
        self
    }

    pub fn saved(mut self, kind: FieldKind, texts: &[&str]) -> Self {
        let input = self.input(kind);
        input.saved.extend(texts.iter().map(|t| Candidate::saved(*t)));
        self
    }

    pub fn headlines(self, texts: &[&str]) -> Self {
        self.generated(FieldKind::Headline, texts)
    }

    pub fn keywords(mut self, keywords: &[&str]) -> Self {
        self.batch.keywords = keywords.iter().map(|k| k.to_string()).collect();
        self
    }

    pub fn curated_last(mut self) -> Self {
        self.batch.curated_placement = CuratedPlacement::Back;
        self
    }

    pub fn config(mut self, config: PipelineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn run(self) -> Outcome {
        Outcome {
            result: Pipeline::new(self.config).run(&self.batch),
        }
    }
}

pub struct Outcome {
    pub result: BatchResult,
}

impl Outcome {
    /// Accepted texts for `kind`, in order
    pub fn accepted(&self, kind: FieldKind) -> Vec<&str> {
        self.field(kind).texts()
    }

    /// Rejected texts for `kind`, in order
    pub fn rejected(&self, kind: FieldKind) -> Vec<&str> {
        self.field(kind)
            .rejected
            .iter()
            .map(|r| r.candidate.text.as_str())
            .collect()
    }

    pub fn origins(&self, kind: FieldKind) -> Vec<Origin> {
        self.field(kind).accepted.iter().map(|c| c.origin).collect()
    }

    pub fn relevance(&self) -> u8 {
        self.result
            .relevance
            .map(|r| r.score())
            .expect("batch had no headline field")
    }

    pub fn field(&self, kind: FieldKind) -> &adcopy_pipeline::FieldResult {
        self.result
            .field(kind)
            .unwrap_or_else(|| panic!("no result for field {kind}"))
    }
}
