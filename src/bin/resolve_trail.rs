// resolve_trail.rs: CLI front-end for the breadcrumb resolver.
// Usage: resolve-trail --config nav.toml --path /hr/payroll [--json]

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use navTrail::{config, CapabilitySet, NavConfig, Resolver};

#[derive(Parser, Debug)]
#[command(name = "resolve-trail", about = "Resolve a path to its breadcrumb trail")]
struct Args {
    /// Navigation config file (.toml or .json). Falls back to the
    /// per-user default location when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Current page path to resolve.
    #[arg(short, long)]
    path: String,

    /// Override the config's home href.
    #[arg(long)]
    home_href: Option<String>,

    /// Override the config's fallback page title.
    #[arg(long)]
    fallback: Option<String>,

    /// Emit the trail as a JSON array instead of text.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config_path = match args.config {
        Some(p) => p,
        None => match config::default_config_path() {
            Some(p) => p,
            None => bail!("no --config given and no per-user config directory available"),
        },
    };
    let cfg: NavConfig = config::load_config(&config_path)
        .with_context(|| format!("loading config from {}", config_path.display()))?;

    let caps: CapabilitySet = cfg.capability_set();
    let tree = caps.filter_tree(&cfg.nav);
    info!(
        nodes = tree.len(),
        modules = cfg.modules.len(),
        "navigation tree ready"
    );

    let home_href = args.home_href.as_deref().unwrap_or(&cfg.home_href);
    let fallback = args.fallback.as_deref().unwrap_or(&cfg.fallback_title);

    let resolver = Resolver::with_builtin_icons();
    let trail = resolver.resolve(&tree, &args.path, home_href, fallback);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&trail)?);
    } else {
        let rendered: Vec<String> = trail
            .iter()
            .map(|e| match (&e.icon, &e.href) {
                (Some(icon), Some(href)) => format!("{} {} ({})", icon.glyph, e.label, href),
                (Some(icon), None) => format!("{} {}", icon.glyph, e.label),
                (None, Some(href)) => format!("{} ({})", e.label, href),
                (None, None) => e.label.clone(),
            })
            .collect();
        println!("{}", rendered.join(" > "));
    }

    Ok(())
}
