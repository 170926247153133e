use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::types::InstanceId;

/// Signals a mount point (or the page) delivers to a sphere instance.
///
/// Pointer coordinates are CSS pixels relative to the mount's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum MountEvent {
    PointerMove { x: f64, y: f64 },
    PointerLeave,
    Resize { width: f64, height: f64 },
    VisibilityChanged(bool),
    Removed,
}

/// FIFO of pending signals, drained once per frame on the single timeline.
///
/// `None` as the target means the event goes to every instance.
#[derive(Debug, Default)]
pub struct EventQueue {
    pending: VecDeque<(Option<InstanceId>, MountEvent)>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, target: InstanceId, event: MountEvent) {
        self.pending.push_back((Some(target), event));
    }

    pub fn push_broadcast(&mut self, event: MountEvent) {
        self.pending.push_back((None, event));
    }

    pub fn drain(&mut self) -> impl Iterator<Item = (Option<InstanceId>, MountEvent)> + '_ {
        self.pending.drain(..)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_preserves_order() {
        let mut queue = EventQueue::new();
        let orb = InstanceId(1);

        queue.push(orb, MountEvent::PointerMove { x: 4.0, y: 8.0 });
        queue.push_broadcast(MountEvent::VisibilityChanged(false));
        queue.push(orb, MountEvent::PointerLeave);
        assert_eq!(queue.len(), 3);

        let drained: Vec<_> = queue.drain().collect();
        assert_eq!(
            drained[0],
            (Some(orb), MountEvent::PointerMove { x: 4.0, y: 8.0 })
        );
        assert_eq!(drained[1], (None, MountEvent::VisibilityChanged(false)));
        assert_eq!(drained[2], (Some(orb), MountEvent::PointerLeave));
        assert!(queue.is_empty());
    }

    #[test]
    fn serialize_tagged() {
        let event = MountEvent::Resize {
            width: 64.0,
            height: 32.0,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"Resize\""));
        let back: MountEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn serialize_unit_variant() {
        let json = serde_json::to_string(&MountEvent::Removed).unwrap();
        assert_eq!(json, "{\"type\":\"Removed\"}");
    }
}
