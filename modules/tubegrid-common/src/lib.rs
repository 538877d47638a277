pub mod config;
pub mod error;
pub mod links;
pub mod render;
pub mod searcher;
pub mod surface;
pub mod types;

pub use config::Config;
pub use error::TubeGridError;
pub use links::result_link;
pub use render::{render_results, ResultCard, ResultsView};
pub use searcher::VideoSearcher;
pub use surface::{ResultsSurface, SearchTicket};
pub use types::{ApiSearchKind, ResultKind, SearchCriteria, SearchRequest, ALLOWED_LIMITS};
