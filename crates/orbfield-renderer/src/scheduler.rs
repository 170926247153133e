//! Cooperative frame scheduler: one timeline, many instances.
//!
//! Stands in for the platform's next-paint callback. Events queued between
//! ticks are delivered at the start of the next tick, then every instance
//! that wants a frame draws once, in registration order.

use orbfield_common::{EventQueue, InstanceId, MountEvent};

use crate::favicon::{FaviconPublisher, IconSink};
use crate::instance::{InstanceState, SphereInstance};
use crate::perf::FrameStats;
use crate::surface::DrawSurface;

/// Anything the scheduler can drive.
pub trait Animated {
    /// Draw one frame at `now` seconds. Returns whether anything was drawn.
    fn frame(&mut self, now: f64) -> bool;

    /// Deliver a mount or page signal.
    fn handle_event(&mut self, event: MountEvent);

    /// Current lifecycle state.
    fn state(&self) -> InstanceState;

    fn wants_frame(&self) -> bool {
        matches!(
            self.state(),
            InstanceState::Uninitialized | InstanceState::Animating
        )
    }
}

impl<T: Animated + ?Sized> Animated for &mut T {
    fn frame(&mut self, now: f64) -> bool {
        (**self).frame(now)
    }

    fn handle_event(&mut self, event: MountEvent) {
        (**self).handle_event(event)
    }

    fn state(&self) -> InstanceState {
        (**self).state()
    }
}

impl<S: DrawSurface> Animated for SphereInstance<S> {
    fn frame(&mut self, now: f64) -> bool {
        SphereInstance::frame(self, now)
    }

    fn handle_event(&mut self, event: MountEvent) {
        SphereInstance::handle_event(self, event)
    }

    fn state(&self) -> InstanceState {
        SphereInstance::state(self)
    }
}

impl<K: IconSink> Animated for FaviconPublisher<K> {
    fn frame(&mut self, now: f64) -> bool {
        FaviconPublisher::frame(self, now)
    }

    fn handle_event(&mut self, event: MountEvent) {
        FaviconPublisher::handle_event(self, event)
    }

    fn state(&self) -> InstanceState {
        FaviconPublisher::state(self)
    }
}

/// What one tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickReport {
    pub events: usize,
    pub drawn: usize,
    pub removed: usize,
}

pub struct FrameScheduler<'a> {
    instances: Vec<(InstanceId, Box<dyn Animated + 'a>)>,
    queue: EventQueue,
    next_id: u32,
    stats: FrameStats,
}

impl<'a> FrameScheduler<'a> {
    pub fn new() -> Self {
        Self {
            instances: Vec::new(),
            queue: EventQueue::new(),
            next_id: 1,
            stats: FrameStats::new(),
        }
    }

    pub fn register(&mut self, instance: Box<dyn Animated + 'a>) -> InstanceId {
        let id = InstanceId(self.next_id);
        self.next_id += 1;
        tracing::debug!(%id, "instance registered");
        self.instances.push((id, instance));
        id
    }

    /// Queue an event for one instance.
    pub fn dispatch(&mut self, id: InstanceId, event: MountEvent) {
        self.queue.push(id, event);
    }

    /// Queue an event for every instance (page visibility).
    pub fn broadcast(&mut self, event: MountEvent) {
        self.queue.push_broadcast(event);
    }

    /// Run one frame of the shared timeline at `now` seconds.
    pub fn tick(&mut self, now: f64) -> TickReport {
        let mut report = TickReport::default();

        let pending: Vec<_> = self.queue.drain().collect();
        for (target, event) in pending {
            match target {
                Some(id) => match self.instances.iter_mut().find(|(i, _)| *i == id) {
                    Some((_, instance)) => {
                        instance.handle_event(event);
                        report.events += 1;
                    }
                    None => tracing::debug!(%id, ?event, "event for unknown instance dropped"),
                },
                None => {
                    for (_, instance) in self.instances.iter_mut() {
                        instance.handle_event(event);
                        report.events += 1;
                    }
                }
            }
        }

        for (_, instance) in self.instances.iter_mut() {
            if instance.wants_frame() && instance.frame(now) {
                report.drawn += 1;
            }
        }
        if report.drawn > 0 {
            self.stats.record(now);
        }

        let before = self.instances.len();
        self.instances
            .retain(|(_, instance)| instance.state() != InstanceState::TornDown);
        report.removed = before - self.instances.len();
        if report.removed > 0 {
            tracing::debug!(removed = report.removed, "torn-down instances dropped");
        }

        report
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    pub fn contains(&self, id: InstanceId) -> bool {
        self.instances.iter().any(|(i, _)| *i == id)
    }

    pub fn state_of(&self, id: InstanceId) -> Option<InstanceState> {
        self.instances
            .iter()
            .find(|(i, _)| *i == id)
            .map(|(_, instance)| instance.state())
    }

    pub fn stats(&self) -> &FrameStats {
        &self.stats
    }
}

impl Default for FrameScheduler<'_> {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================
