mod orchestrator;

pub use orchestrator::{BuildPhase, DocumentPipeline, PipelineBuilder};
