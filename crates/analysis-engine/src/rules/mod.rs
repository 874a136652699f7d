//! Detection passes over the indexed document

pub mod contradictions;
pub mod references;

pub use contradictions::check_contradictions;
pub use references::check_references;
