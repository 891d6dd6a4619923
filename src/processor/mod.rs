pub mod for_loops;
pub mod iterators;
pub mod validation;

pub mod factory;
pub mod processor_trait;

pub use factory::build_processor;
pub use for_loops::LoopProcessor;
pub use iterators::IterProcessor;
pub use processor_trait::ArrayProcessor;
pub use validation::RawMatrix;
