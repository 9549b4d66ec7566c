pub mod applicator;
pub mod patches;
pub mod pipeline;

pub use applicator::{apply_all, apply_rule, replace_in_source, MatchRetention, Occurrence, PatchResult, PatchRule};
pub use pipeline::{Patch, PatchOutcome, PatchPipeline, PatchReport};
