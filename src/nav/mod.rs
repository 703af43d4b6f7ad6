pub mod node;
pub mod resolve;

pub use node::NavNode;
pub use resolve::{BreadcrumbEntry, Resolver};
