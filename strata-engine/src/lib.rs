pub mod error;
pub mod gaps;
pub mod graph;
pub mod journey;
pub mod metrics;
pub mod record;
pub mod recommend;
pub mod score;
pub mod section;
pub mod seo;

pub use error::{AnalyticsError, Result};
pub use graph::SiteGraph;
pub use metrics::StructuralMetrics;
pub use record::{PageRecord, load_dataset};
