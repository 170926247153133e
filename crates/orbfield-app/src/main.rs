mod cli;
mod page;

use std::process::ExitCode;

use orbfield_config::schema::OrbfieldConfig;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` plus the effective directive; a bad directive falls back to `info`.
fn env_filter(directive: &str) -> EnvFilter {
    let base = EnvFilter::from_default_env();
    match directive.parse() {
        Ok(d) => base.add_directive(d),
        Err(e) => {
            eprintln!("invalid log directive {directive:?}: {e}");
            base.add_directive(LevelFilter::INFO.into())
        }
    }
}

fn main() -> ExitCode {
    let args = cli::parse();

    // Config comes first so its [logging] level can pick the filter.
    let loaded = match &args.config {
        Some(path) => orbfield_config::load_config_from(path),
        None => orbfield_config::load_config(),
    };

    let directive = match (&args.log_level, &loaded) {
        (Some(level), _) => cli::log_directive(level),
        (None, Ok(config)) => config.logging.level.directive().to_string(),
        (None, Err(_)) => "orbfield=info".to_string(),
    };
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(&directive))
        .init();

    tracing::info!("orbfield v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    let mut config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        OrbfieldConfig::default()
    });
    if let Some(seed) = args.seed {
        config.render.seed = seed;
    }

    if args.dump_config {
        println!("{}", orbfield_config::config_to_json(&config));
        return ExitCode::SUCCESS;
    }

    let spec = page::PageSpec {
        frames: args.frames,
        fps: args.fps,
        device_pixel_ratio: args.dpr,
        hero_width: args.hero_width,
    };
    tracing::info!(
        frames = spec.frames,
        fps = spec.fps,
        dpr = spec.device_pixel_ratio,
        seed = config.render.seed,
        "running page"
    );

    match page::run(&config, &spec, &args.out_dir) {
        Ok(summary) => {
            tracing::info!(
                files = summary.written.len(),
                favicon_publishes = summary.favicon_publishes,
                fps = summary.average_fps,
                out_dir = %args.out_dir.display(),
                "done"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Run failed: {e}");
            ExitCode::FAILURE
        }
    }
}
