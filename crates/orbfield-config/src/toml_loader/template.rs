//! Default TOML config template with inline documentation comments.

/// The default config file content. Every key is commented out, so the
/// file parses to `OrbfieldConfig::default()`.
pub fn default_config_toml() -> &'static str {
    r##"# orbfield configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[density.logo]
# min_count = 220
# max_count = 1800
# particles_per_area = 0.095   # particles per CSS px^2 of sphere disc
# dpr_cap = 2.0                # 1.0-4.0
# radius_fraction = 0.45       # radius / min(width, height), (0, 0.5]

[density.hero]
# min_count = 220
# max_count = 3600
# particles_per_area = 0.16

[density.favicon]
# min_count = 200
# max_count = 1400
# particles_per_area = 0.085

[motion]
# noise = "gradient"           # gradient | layered
# amplitude = 0.06             # fraction of radius, 0.0-0.5
# frequency = 1.15
# time_scale = 0.35
# pulse_amount = 0.5           # breathing gain, 0.0-2.0
# drift = 0.018                # fraction of radius, 0.0-0.1
# spring = 0.08                # (0, 1]
# damping = 0.9                # [0, 0.999]
# smoothing = 0.08             # (0, 1)
# max_tilt = 0.4               # radians
# auto_speed = 0.3             # radians per second
# base_tilt = 0.25
# idle_amplitude = 0.12
# focal_ratio = 4.0            # focal length / radius

[palette]
# start = "#0066ff"
# end = "#00d4aa"
# backdrop = "#000000"
# brightness_jitter = 0.12

[favicon]
# enabled = true
# size_px = 64                 # 16-256
# throttle_ms = 400

[render]
# seed = 24301
# twinkle = 0.12

[logging]
# level = "INFO"               # TRACE | DEBUG | INFO | WARNING | ERROR
"##
}
