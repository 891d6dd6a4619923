use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Selects which `ArrayProcessor` implementation the factory builds.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProcessorKind {
    /// Explicit index loops.
    #[default]
    ForLoops,
    /// Iterator adaptor pipelines.
    Iterators,
}

impl ProcessorKind {
    pub const ALL: [ProcessorKind; 2] = [ProcessorKind::ForLoops, ProcessorKind::Iterators];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProcessorKind::ForLoops => "for_loops",
            ProcessorKind::Iterators => "iterators",
        }
    }
}

impl fmt::Display for ProcessorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProcessorKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "for_loops" | "loops" => Ok(ProcessorKind::ForLoops),
            "iterators" | "iter" => Ok(ProcessorKind::Iterators),
            _ => Err(format!(
                "Unknown processor kind: {}. Expected one of: for_loops, iterators",
                s
            )),
        }
    }
}
