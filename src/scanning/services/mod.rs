mod batch_assembler;
mod component_extractor;
mod hint_tracker;
mod metadata_generator;
mod result_aggregator;
mod wfp_parser;

pub use batch_assembler::BatchAssembler;
pub use component_extractor::{ComponentExtraction, ComponentExtractor};
pub use hint_tracker::HintTracker;
pub use metadata_generator::MetadataGenerator;
pub use result_aggregator::ResultAggregator;
pub use wfp_parser::WfpParser;
