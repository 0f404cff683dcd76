pub mod count;
pub mod criteria;
pub mod engine;

pub use count::active_filter_count;
pub use criteria::{FilterCriteria, FilterUpdate, PropertyAge};
pub use engine::{apply, apply_at, matches};
