use tracing_subscriber::EnvFilter;

const WORKSPACE_CRATES: &[&str] = &[
    "medchat",
    "presentation",
    "application",
    "infrastructure",
    "domain",
    "shared",
];

/// Directive used when `RUST_LOG` is not set.
pub fn default_directive(verbose: bool) -> String {
    if !verbose {
        return "warn".to_string();
    }
    let mut directive = String::from("warn");
    for name in WORKSPACE_CRATES {
        directive.push_str(&format!(",{}=debug", name));
    }
    directive
}

/// Installs the global fmt subscriber writing to stderr.
///
/// `RUST_LOG` takes precedence over `verbose`. Calling this twice is harmless;
/// the second installation is ignored.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
