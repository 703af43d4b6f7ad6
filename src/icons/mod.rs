pub mod registry;

pub use registry::{builtin, IconRegistry};

use serde::{Deserialize, Serialize};

/// A renderable icon handle: a registry name plus the glyph the
/// rendering layer draws for it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Icon {
    pub name: String,
    pub glyph: String,
}

impl Icon {
    pub fn new(name: impl Into<String>, glyph: impl Into<String>) -> Self {
        Icon {
            name: name.into(),
            glyph: glyph.into(),
        }
    }
}

/// Reference to an icon as it appears in navigation data: either the
/// name of a registered icon or an inline icon definition.
///
/// Serialized form is either a bare string (`icon = "users"`) or a
/// table/object with `name` and `glyph` fields.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IconRef {
    Named(String),
    Direct(Icon),
}
