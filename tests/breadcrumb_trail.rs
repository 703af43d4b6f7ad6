use navTrail::{CapabilitySet, IconRef, NavNode, Resolver};

/// Navigation tree shaped like the HR/ERP app this crate serves: a
/// dashboard, an HR section with nested payroll pages, and a gated
/// reports module.
fn erp_nav() -> Vec<NavNode> {
    vec![
        NavNode::page("Dashboard", "/").with_icon(IconRef::Named("dashboard".into())),
        NavNode::section(
            "Human Resources",
            vec![
                NavNode::page("Employees", "/hr/employees")
                    .with_icon(IconRef::Named("users".into())),
                NavNode::page("Payroll", "/hr/payroll")
                    .with_icon(IconRef::Named("payroll".into()))
                    .with_capability("payroll")
                    .with_children(vec![
                        NavNode::page("Payslips", "/hr/payroll/payslips"),
                        NavNode::page("Tax Filings", "/hr/payroll/tax"),
                    ]),
            ],
        )
        .with_icon(IconRef::Named("users".into())),
        NavNode::page("Reports", "/reports")
            .with_icon(IconRef::Named("reports".into()))
            .with_capability("reports"),
    ]
}

#[test]
fn full_trail_for_grandchild_page() {
    let resolver = Resolver::with_builtin_icons();
    let trail = resolver.resolve(&erp_nav(), "/hr/payroll/tax", "/", "Page");

    let labels: Vec<&str> = trail.iter().map(|e| e.label.as_str()).collect();
    assert_eq!(
        labels,
        ["Home", "Human Resources", "Payroll", "Tax Filings"]
    );

    // Home links, the section has no path so no link, payroll links to
    // itself, the current page never links.
    assert_eq!(trail[0].href.as_deref(), Some("/"));
    assert_eq!(trail[1].href, None);
    assert_eq!(trail[2].href.as_deref(), Some("/hr/payroll"));
    assert_eq!(trail[3].href, None);
}

#[test]
fn keys_are_stable_and_distinct() {
    let resolver = Resolver::with_builtin_icons();
    let trail = resolver.resolve(&erp_nav(), "/hr/payroll/payslips", "/", "Page");
    let keys: Vec<&str> = trail.iter().map(|e| e.key.as_str()).collect();
    assert_eq!(
        keys,
        ["home", "Human Resources", "/hr/payroll", "/hr/payroll/payslips"]
    );
}

#[test]
fn capability_filter_changes_what_resolves() {
    let resolver = Resolver::with_builtin_icons();

    // With payroll enabled the nested page resolves to its full chain.
    let caps: CapabilitySet = ["payroll"].into_iter().collect();
    let tree = caps.filter_tree(&erp_nav());
    let trail = resolver.resolve(&tree, "/hr/payroll/payslips", "/", "Page");
    assert_eq!(trail.len(), 4);

    // Without it the subtree is gone and the same path falls back.
    let none = CapabilitySet::new();
    let tree = none.filter_tree(&erp_nav());
    let trail = resolver.resolve(&tree, "/hr/payroll/payslips", "/", "Page");
    assert_eq!(trail.len(), 2);
    assert_eq!(trail[1].label, "Page");
    assert_eq!(trail[1].href, None);
}

#[test]
fn resolver_does_not_mutate_the_tree() {
    let tree = erp_nav();
    let before = tree.clone();
    let resolver = Resolver::with_builtin_icons();
    let _ = resolver.resolve(&tree, "/hr/employees", "/", "Page");
    let _ = resolver.resolve(&tree, "/nowhere", "/", "Page");
    assert_eq!(tree, before);
}

#[test]
fn trail_serializes_to_json_shape() {
    let resolver = Resolver::with_builtin_icons();
    let trail = resolver.resolve(&erp_nav(), "/hr/employees", "/", "Page");
    let json = serde_json::to_value(&trail).unwrap();

    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0]["label"], "Home");
    assert_eq!(entries[0]["href"], "/");
    assert_eq!(entries[2]["href"], serde_json::Value::Null);
    assert_eq!(entries[2]["key"], "/hr/employees");
}

#[test]
fn server_json_payload_resolves_end_to_end() {
    // The shape the routing layer actually sends: bare-string icons,
    // some fields missing entirely.
    let payload = r#"[
        { "name": "Dashboard", "path": "/", "icon": "dashboard" },
        { "name": "Settings", "children": [
            { "name": "Company", "path": "/settings/company", "icon": "settings" },
            { "path": "/settings/anon" }
        ]}
    ]"#;
    let tree: Vec<NavNode> = serde_json::from_str(payload).unwrap();
    let resolver = Resolver::with_builtin_icons();

    let trail = resolver.resolve(&tree, "/settings/company", "/", "Page");
    assert_eq!(trail.len(), 3);
    assert_eq!(trail[2].icon.as_ref().unwrap().name, "settings");

    // A node with no name still resolves; it just renders blank.
    let trail = resolver.resolve(&tree, "/settings/anon", "/", "Page");
    assert_eq!(trail[2].label, "");
}
