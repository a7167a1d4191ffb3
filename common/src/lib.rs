//! Case Archive Common Library
//!
//! CLIとWeb(WASM)で共有される型・カタログ・フィルタ処理

pub mod types;
pub mod error;
pub mod filter;
pub mod source;
pub mod catalog;
pub mod facets;
pub mod counter;
pub mod navigation;

pub use types::Case;
pub use error::{Error, LoadError, Result};
pub use filter::{Dimension, FilterState, FilterValue, ALL};
pub use source::{parse_cases, CaseSource, StaticSource};
pub use catalog::{CaseCatalog, LoadOutcome, LoadTicket};
pub use facets::{ArchiveStats, Facet, FacetCount, DEFAULT_FEATURED_COUNT};
pub use counter::{CounterAnimation, CounterSuffix};
pub use navigation::LinkKind;
