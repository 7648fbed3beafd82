pub mod compose;
pub mod config;
pub mod dataset;
pub mod describe;
pub mod element;
pub mod error;
pub mod graph;
pub mod ops;
pub mod registry;
pub mod resolver;
pub mod validation;
pub mod writer;

pub use config::{MappingConfig, DEFAULT_COORDINATE_SYSTEM};
pub use dataset::Dataset;
pub use element::{Element, ElementId, ElementKind};
pub use error::{MappingError, Result};
pub use graph::{build_graph, NodeKey, Path, TransformationGraph};
pub use ops::{TransformationArg, TransformationSelection};
pub use registry::{TransformationMap, TransformationRegistry};
pub use resolver::PathResolver;
pub use writer::{HistoryWriter, LoggingWriter, TransformationWriter, WriteMode, WriteRecord};
