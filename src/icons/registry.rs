use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::{Icon, IconRef};

/// Name → icon lookup table. Unknown names are not errors; callers get
/// `None` and render without an icon.
#[derive(Clone, Debug, Default)]
pub struct IconRegistry {
    icons: HashMap<String, Icon>,
}

impl IconRegistry {
    pub fn new() -> Self {
        IconRegistry::default()
    }

    /// Register (or replace) an icon under its own name.
    pub fn register(&mut self, icon: Icon) {
        self.icons.insert(icon.name.clone(), icon);
    }

    pub fn lookup(&self, name: &str) -> Option<Icon> {
        self.icons.get(name).cloned()
    }

    /// Resolve an icon reference: direct icons pass through, named ones
    /// go through the table.
    pub fn resolve(&self, icon_ref: &IconRef) -> Option<Icon> {
        match icon_ref {
            IconRef::Named(name) => self.lookup(name),
            IconRef::Direct(icon) => Some(icon.clone()),
        }
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }
}

// The stock glyph set shipped with the crate. Covers the sections an
// HR/ERP navigation actually uses; anything beyond this comes from the
// caller registering its own icons.
static BUILTIN: Lazy<IconRegistry> = Lazy::new(|| {
    let mut reg = IconRegistry::new();
    for (name, glyph) in [
        ("home", "⌂"),
        ("dashboard", "▦"),
        ("users", "👥"),
        ("payroll", "💰"),
        ("reports", "📊"),
        ("settings", "⚙"),
        ("calendar", "📅"),
        ("documents", "📄"),
    ] {
        reg.register(Icon::new(name, glyph));
    }
    reg
});

/// The process-wide built-in icon registry.
pub fn builtin() -> &'static IconRegistry {
    &BUILTIN
}
