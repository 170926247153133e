//! Live page icon: an offscreen favicon-tier sphere whose frames are
//! published as PNG data URLs at a throttled cadence.

use base64::Engine as _;
use orbfield_common::{MountEvent, Size, SizeTier};
use orbfield_config::schema::OrbfieldConfig;
use rand::Rng;

use crate::density::DensityPolicy;
use crate::instance::{InstanceState, MountSpec, SphereInstance};
use crate::surface::RasterSurface;

/// One published icon frame.
#[derive(Debug, Clone, PartialEq)]
pub struct IconImage {
    pub png: Vec<u8>,
    /// `data:image/png;base64,…`
    pub data_url: String,
    /// Host clock time of publication, seconds.
    pub published_at: f64,
}

/// Receives published icons (the page's `<link rel="icon">` in a browser).
pub trait IconSink {
    fn publish(&mut self, icon: &IconImage);
}

impl<F: FnMut(&IconImage)> IconSink for F {
    fn publish(&mut self, icon: &IconImage) {
        self(icon)
    }
}

/// PNG bytes as a `data:` URL.
pub fn png_data_url(png: &[u8]) -> String {
    let b64 = base64::engine::general_purpose::STANDARD.encode(png);
    format!("data:image/png;base64,{b64}")
}

/// Allows an action only when strictly more than `interval` seconds have
/// passed since the last one. The first call is always allowed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PublishThrottle {
    interval: f64,
    last: Option<f64>,
}

impl PublishThrottle {
    pub fn new(interval: f64) -> Self {
        Self {
            interval: interval.max(0.0),
            last: None,
        }
    }

    pub fn from_millis(ms: u64) -> Self {
        Self::new(ms as f64 / 1000.0)
    }

    pub fn interval(&self) -> f64 {
        self.interval
    }

    /// Whether a publish at `now` is allowed. Never for a non-finite `now`.
    pub fn ready(&self, now: f64) -> bool {
        if !now.is_finite() {
            return false;
        }
        match self.last {
            None => true,
            Some(last) => now - last > self.interval,
        }
    }

    /// Record a publish at `now`; non-finite readings are dropped.
    pub fn mark(&mut self, now: f64) {
        if now.is_finite() {
            self.last = Some(now);
        }
    }
}

pub struct FaviconPublisher<K: IconSink> {
    instance: SphereInstance<RasterSurface>,
    sink: K,
    throttle: PublishThrottle,
    published: u64,
}

impl<K: IconSink> FaviconPublisher<K> {
    /// Mount the offscreen favicon sphere. `None` when the favicon is
    /// disabled or its surface cannot be created.
    pub fn new<R: Rng + ?Sized>(
        config: &OrbfieldConfig,
        device_pixel_ratio: f64,
        sink: K,
        rng: &mut R,
    ) -> Option<Self> {
        if !config.favicon.enabled {
            tracing::debug!("favicon disabled");
            return None;
        }

        let edge = config.favicon.size_px as f64;
        let size = Size::new(edge, edge);
        let dpr = DensityPolicy::for_tier(&config.density, SizeTier::Favicon)
            .effective_dpr(device_pixel_ratio);
        let surface = RasterSurface::new(size, dpr);

        let instance = SphereInstance::mount(
            Some(MountSpec::new(size, dpr, SizeTier::Favicon)),
            surface,
            config,
            rng,
        )?
        .with_pausable(true);

        let throttle = PublishThrottle::from_millis(config.favicon.throttle_ms);
        tracing::info!(
            size_px = config.favicon.size_px,
            dpr,
            throttle_ms = config.favicon.throttle_ms,
            "favicon publisher started"
        );

        Some(Self {
            instance,
            sink,
            throttle,
            published: 0,
        })
    }

    /// Render a frame and publish it if the throttle allows.
    /// Returns whether a frame was rendered.
    pub fn frame(&mut self, now: f64) -> bool {
        if !self.instance.frame(now) {
            return false;
        }
        if self.throttle.ready(now) {
            self.publish(now);
        }
        true
    }

    fn publish(&mut self, now: f64) {
        match self.instance.surface().encode_png() {
            Ok(png) => {
                let data_url = png_data_url(&png);
                let icon = IconImage {
                    png,
                    data_url,
                    published_at: now,
                };
                self.sink.publish(&icon);
                self.throttle.mark(now);
                self.published += 1;
                tracing::debug!(
                    bytes = icon.png.len(),
                    count = self.published,
                    "favicon published"
                );
            }
            Err(e) => {
                // throttle is left untouched so the next frame retries
                tracing::warn!(error = %e, "favicon encode failed");
            }
        }
    }

    pub fn handle_event(&mut self, event: MountEvent) {
        self.instance.handle_event(event);
    }

    pub fn set_page_visible(&mut self, visible: bool) {
        self.instance.set_page_visible(visible);
    }

    pub fn tear_down(&mut self) {
        self.instance.tear_down();
    }

    pub fn state(&self) -> InstanceState {
        self.instance.state()
    }

    pub fn wants_frame(&self) -> bool {
        self.instance.wants_frame()
    }

    pub fn publish_count(&self) -> u64 {
        self.published
    }

    pub fn instance(&self) -> &SphereInstance<RasterSurface> {
        &self.instance
    }

    pub fn sink(&self) -> &K {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut K {
        &mut self.sink
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[derive(Default)]
    struct Collect(Vec<IconImage>);

    impl IconSink for Collect {
        fn publish(&mut self, icon: &IconImage) {
            self.0.push(icon.clone());
        }
    }

    fn publisher() -> FaviconPublisher<Collect> {
        let mut rng = StdRng::seed_from_u64(42);
        FaviconPublisher::new(&OrbfieldConfig::default(), 1.0, Collect::default(), &mut rng)
            .unwrap()
    }

    fn run(p: &mut FaviconPublisher<Collect>, from: usize, to: usize) {
        for frame in from..to {
            p.frame(frame as f64 / 60.0);
        }
    }

    #[test]
    fn throttle_first_call_always_ready() {
        let t = PublishThrottle::from_millis(400);
        assert!(t.ready(0.0));
        assert!(t.ready(-5.0));
    }

    #[test]
    fn throttle_ignores_non_finite_clock() {
        let mut t = PublishThrottle::from_millis(400);
        assert!(!t.ready(f64::NAN));
        t.mark(f64::NAN);
        assert!(t.ready(0.0));
        t.mark(1.0);
        t.mark(f64::INFINITY);
        assert!(t.ready(1.5));
    }

    #[test]
    fn publishes_resume_after_non_finite_frame() {
        let mut p = publisher();
        assert!(p.frame(f64::NAN));
        assert_eq!(p.publish_count(), 0);
        run(&mut p, 1, 600);
        assert!(p.publish_count() >= 20, "published {}", p.publish_count());
        assert!(p.sink().0.iter().all(|icon| icon.published_at.is_finite()));
    }

    #[test]
    fn throttle_is_strict() {
        let mut t = PublishThrottle::from_millis(400);
        t.mark(1.0);
        assert!(!t.ready(1.2));
        assert!(!t.ready(1.4));
        assert!(t.ready(1.41));
    }

    #[test]
    fn data_url_prefix() {
        let url = png_data_url(&[1, 2, 3]);
        assert_eq!(url, "data:image/png;base64,AQID");
    }

    #[test]
    fn favicon_tier_at_64px() {
        let p = publisher();
        let n = p.instance().particle_count();
        assert!((200..=1400).contains(&n), "n = {n}");
        assert_eq!(p.instance().tier(), SizeTier::Favicon);
        assert_eq!(p.instance().surface().width_px(), 64);
        assert!(p.instance().is_pausable());
    }

    #[test]
    fn pixel_ratio_is_capped_at_two() {
        let mut rng = StdRng::seed_from_u64(1);
        let p = FaviconPublisher::new(&OrbfieldConfig::default(), 3.0, Collect::default(), &mut rng)
            .unwrap();
        assert_eq!(p.instance().surface().width_px(), 128);
    }

    #[test]
    fn first_frame_publishes() {
        let mut p = publisher();
        assert!(p.frame(0.0));
        assert_eq!(p.publish_count(), 1);
        let icon = &p.sink().0[0];
        assert!(icon.data_url.starts_with("data:image/png;base64,"));
        assert_eq!(&icon.png[..4], b"\x89PNG");
    }

    #[test]
    fn never_publishes_twice_within_throttle() {
        let mut p = publisher();
        run(&mut p, 0, 600);
        let icons = &p.sink().0;
        // ten seconds at 60 fps with a 400 ms throttle
        assert!(icons.len() >= 20, "published {}", icons.len());
        for pair in icons.windows(2) {
            assert!(pair[1].published_at - pair[0].published_at > 0.4);
        }
        assert_eq!(p.publish_count() as usize, icons.len());
    }

    #[test]
    fn hidden_page_publishes_nothing() {
        let mut p = publisher();
        p.set_page_visible(false);
        run(&mut p, 0, 300);
        assert_eq!(p.publish_count(), 0);
        assert_eq!(p.state(), InstanceState::Paused);

        p.handle_event(MountEvent::VisibilityChanged(true));
        run(&mut p, 300, 301);
        assert_eq!(p.publish_count(), 1);
    }

    #[test]
    fn pause_mid_stream_stops_publishing() {
        let mut p = publisher();
        run(&mut p, 0, 120);
        let before = p.publish_count();
        p.set_page_visible(false);
        run(&mut p, 120, 600);
        assert_eq!(p.publish_count(), before);
        assert!(!p.wants_frame());
    }

    #[test]
    fn disabled_favicon_is_not_created() {
        let mut config = OrbfieldConfig::default();
        config.favicon.enabled = false;
        let mut rng = StdRng::seed_from_u64(1);
        assert!(FaviconPublisher::new(&config, 1.0, Collect::default(), &mut rng).is_none());
    }

    #[test]
    fn closure_sink() {
        let mut urls = Vec::new();
        {
            let mut rng = StdRng::seed_from_u64(1);
            let mut p = FaviconPublisher::new(
                &OrbfieldConfig::default(),
                1.0,
                |icon: &IconImage| urls.push(icon.data_url.clone()),
                &mut rng,
            )
            .unwrap();
            p.frame(0.0);
            p.frame(1.0);
        }
        assert_eq!(urls.len(), 2);
    }
}
