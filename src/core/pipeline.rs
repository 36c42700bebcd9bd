pub use crate::app::pipelines::simple_pipeline::SimplePipeline;
