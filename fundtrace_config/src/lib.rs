mod schema;

pub use schema::{
    Config, CorpusConfig, EntitiesConfig, ExportConfig, PipelineConfig, SummaryConfig,
};
