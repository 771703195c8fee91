//! Track discovery and per-track tag aggregation.

mod aggregate;
mod comments;
mod model;
mod scan;

pub use aggregate::aggregate;
pub use comments::{CommentSource, FlacComments};
pub use model::TrackEntry;
pub use scan::scan;
