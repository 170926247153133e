//! A simulated page: the mounts a site would have, driven by a script of
//! pointer, visibility, resize and removal signals.

use std::f64::consts::TAU;
use std::fs;
use std::path::{Path, PathBuf};

use orbfield_common::{InstanceId, MountEvent, Size, SizeTier};
use orbfield_config::schema::OrbfieldConfig;
use orbfield_renderer::{
    FaviconPublisher, FrameScheduler, IconImage, IconSink, MountSpec, RasterSurface,
    SphereInstance,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Page layout and clock.
#[derive(Debug, Clone)]
pub struct PageSpec {
    pub frames: u32,
    pub fps: f64,
    pub device_pixel_ratio: f64,
    pub hero_width: f64,
}

/// Keeps the most recently published icon.
#[derive(Debug, Default)]
pub struct LatestIcon {
    pub latest: Option<IconImage>,
}

impl IconSink for LatestIcon {
    fn publish(&mut self, icon: &IconImage) {
        self.latest = Some(icon.clone());
    }
}

/// What a run produced.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub written: Vec<PathBuf>,
    pub favicon_publishes: u64,
    pub average_fps: f64,
}

/// Scripted signals for frame `frame` of `total`.
///
/// The hero gets a circular pointer sweep from one sixth to half way through
/// the run, then the pointer leaves; the page is hidden for a stretch; the hero is
/// resized; the last logo is unmounted near the end.
pub fn scripted_events(
    frame: u32,
    total: u32,
    hero: Option<(InstanceId, Size)>,
    last_logo: Option<InstanceId>,
) -> Vec<(Option<InstanceId>, MountEvent)> {
    let mut events = Vec::new();
    let at = |num: u64, den: u64| (total as u64 * num / den) as u32;
    let (sweep_start, sweep_end) = (at(1, 6), at(1, 2));

    if let Some((id, size)) = hero {
        if (sweep_start..sweep_end).contains(&frame) {
            let span = (sweep_end - sweep_start).max(1) as f64;
            let progress = (frame - sweep_start) as f64 / span;
            let (s, c) = (progress * TAU).sin_cos();
            events.push((
                Some(id),
                MountEvent::PointerMove {
                    x: size.width * (0.5 + 0.4 * c),
                    y: size.height * (0.5 + 0.4 * s),
                },
            ));
        }
        if frame == sweep_end {
            events.push((Some(id), MountEvent::PointerLeave));
        }
        if frame == at(4, 5) {
            events.push((
                Some(id),
                MountEvent::Resize {
                    width: size.width * 0.8,
                    height: size.height * 0.8,
                },
            ));
        }
    }

    if frame == at(3, 5) {
        events.push((None, MountEvent::VisibilityChanged(false)));
    }
    if frame == at(7, 10) {
        events.push((None, MountEvent::VisibilityChanged(true)));
    }
    if let Some(id) = last_logo {
        if frame == at(9, 10) {
            events.push((Some(id), MountEvent::Removed));
        }
    }
    events
}

fn mount_sphere(
    name: &str,
    size: Size,
    dpr: f64,
    tier: SizeTier,
    config: &OrbfieldConfig,
    rng: &mut StdRng,
) -> Option<(String, SphereInstance<RasterSurface>)> {
    let surface = RasterSurface::new(size, dpr);
    match SphereInstance::mount(Some(MountSpec::new(size, dpr, tier)), surface, config, rng) {
        Some(instance) => Some((name.to_string(), instance)),
        None => {
            tracing::warn!(name, "mount skipped");
            None
        }
    }
}

/// Run the page and write its final frames into `out_dir`.
pub fn run(
    config: &OrbfieldConfig,
    page: &PageSpec,
    out_dir: &Path,
) -> orbfield_common::Result<RunSummary> {
    let mut rng = StdRng::seed_from_u64(config.render.seed);
    let dpr = page.device_pixel_ratio;
    let hero_size = Size::new(page.hero_width, page.hero_width * 0.75);

    let mut spheres: Vec<(String, SphereInstance<RasterSurface>)> = [
        ("hero", hero_size, SizeTier::Hero),
        ("logo-nav", Size::new(32.0, 32.0), SizeTier::Logo),
        ("logo-footer", Size::new(56.0, 56.0), SizeTier::Logo),
    ]
    .into_iter()
    .filter_map(|(name, size, tier)| mount_sphere(name, size, dpr, tier, config, &mut rng))
    .collect();

    let mut favicon = FaviconPublisher::new(config, dpr, LatestIcon::default(), &mut rng);

    let fps = if page.fps.is_finite() && page.fps > 0.0 {
        page.fps
    } else {
        60.0
    };
    let average_fps;
    {
        let mut sched = FrameScheduler::new();
        let mut ids = Vec::with_capacity(spheres.len());
        for (name, instance) in spheres.iter_mut() {
            ids.push((name.as_str(), sched.register(Box::new(instance))));
        }
        if let Some(f) = favicon.as_mut() {
            sched.register(Box::new(f));
        }

        let hero = ids
            .iter()
            .find(|(name, _)| *name == "hero")
            .map(|(_, id)| (*id, hero_size));
        let last_logo = ids
            .iter()
            .rev()
            .find(|(name, _)| name.starts_with("logo"))
            .map(|(_, id)| *id);

        for frame in 0..page.frames {
            for (target, event) in scripted_events(frame, page.frames, hero, last_logo) {
                match target {
                    Some(id) => sched.dispatch(id, event),
                    None => sched.broadcast(event),
                }
            }
            let report = sched.tick(frame as f64 / fps);
            if frame > 0 && frame % fps.round().max(1.0) as u32 == 0 {
                tracing::info!(
                    frame,
                    drawn = report.drawn,
                    fps = sched.stats().fps(),
                    frame_ms = sched.stats().frame_time_ms(),
                    "tick"
                );
            }
        }
        average_fps = sched.stats().fps();
    }

    fs::create_dir_all(out_dir)?;
    let mut summary = RunSummary {
        average_fps,
        ..RunSummary::default()
    };

    for (name, instance) in &spheres {
        let path = out_dir.join(format!("{name}.png"));
        fs::write(&path, instance.surface().encode_png()?)?;
        tracing::info!(
            path = %path.display(),
            particles = instance.particle_count(),
            frames = instance.frames_drawn(),
            state = ?instance.state(),
            "frame written"
        );
        summary.written.push(path);
    }

    if let Some(f) = &favicon {
        summary.favicon_publishes = f.publish_count();
        if let Some(icon) = &f.sink().latest {
            let png = out_dir.join("favicon.png");
            let url = out_dir.join("favicon.txt");
            fs::write(&png, &icon.png)?;
            fs::write(&url, &icon.data_url)?;
            tracing::info!(
                path = %png.display(),
                publishes = f.publish_count(),
                "favicon written"
            );
            summary.written.push(png);
            summary.written.push(url);
        }
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(frames: u32) -> PageSpec {
        PageSpec {
            frames,
            fps: 60.0,
            device_pixel_ratio: 1.0,
            hero_width: 120.0,
        }
    }

    #[test]
    fn script_sweeps_then_leaves() {
        let hero = Some((InstanceId(1), Size::new(100.0, 100.0)));
        let moves = (0..120)
            .flat_map(|f| scripted_events(f, 120, hero, None))
            .filter(|(_, e)| matches!(e, MountEvent::PointerMove { .. }))
            .count();
        assert_eq!(moves, 40);

        let leave = scripted_events(60, 120, hero, None);
        assert!(leave.contains(&(Some(InstanceId(1)), MountEvent::PointerLeave)));
    }

    #[test]
    fn script_hides_and_shows_page() {
        let hidden = scripted_events(72, 120, None, None);
        assert_eq!(hidden, vec![(None, MountEvent::VisibilityChanged(false))]);
        let shown = scripted_events(84, 120, None, None);
        assert_eq!(shown, vec![(None, MountEvent::VisibilityChanged(true))]);
    }

    #[test]
    fn script_removes_last_logo() {
        let events = scripted_events(108, 120, None, Some(InstanceId(3)));
        assert_eq!(events, vec![(Some(InstanceId(3)), MountEvent::Removed)]);
    }

    #[test]
    fn pointer_stays_inside_hero() {
        let size = Size::new(200.0, 150.0);
        for f in 0..240 {
            for (_, e) in scripted_events(f, 240, Some((InstanceId(1), size)), None) {
                if let MountEvent::PointerMove { x, y } = e {
                    assert!((0.0..=size.width).contains(&x));
                    assert!((0.0..=size.height).contains(&y));
                }
            }
        }
    }

    #[test]
    fn run_writes_frames_and_favicon() {
        let dir = tempfile::tempdir().unwrap();
        let summary = run(&OrbfieldConfig::default(), &page(60), dir.path()).unwrap();

        for name in ["hero.png", "logo-nav.png", "logo-footer.png", "favicon.png", "favicon.txt"] {
            assert!(dir.path().join(name).exists(), "{name} missing");
        }
        assert_eq!(summary.written.len(), 5);
        assert!(summary.favicon_publishes >= 1);
        assert!((summary.average_fps - 60.0).abs() < 1e-3);

        let url = std::fs::read_to_string(dir.path().join("favicon.txt")).unwrap();
        assert!(url.starts_with("data:image/png;base64,"));
    }

    #[test]
    fn disabled_favicon_writes_no_icon() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = OrbfieldConfig::default();
        config.favicon.enabled = false;
        let summary = run(&config, &page(10), dir.path()).unwrap();
        assert_eq!(summary.favicon_publishes, 0);
        assert!(!dir.path().join("favicon.png").exists());
    }
}
