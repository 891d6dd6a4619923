use crate::config::ProcessorKind;
use crate::processor::for_loops::LoopProcessor;
use crate::processor::iterators::IterProcessor;
use crate::processor::processor_trait::ArrayProcessor;

/// Build a boxed processor for the requested `ProcessorKind`.
pub fn build_processor(kind: ProcessorKind) -> Box<dyn ArrayProcessor> {
    log::debug!("building {} array processor", kind);
    match kind {
        ProcessorKind::ForLoops => Box::new(LoopProcessor::new()),
        ProcessorKind::Iterators => Box::new(IterProcessor::new()),
    }
}
