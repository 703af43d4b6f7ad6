pub mod caps;
pub mod config;
pub mod icons;
pub mod nav;

pub use crate::caps::CapabilitySet;
pub use crate::config::{load_config, ConfigError, NavConfig};
pub use crate::icons::{builtin, Icon, IconRef, IconRegistry};
pub use crate::nav::{BreadcrumbEntry, NavNode, Resolver};
