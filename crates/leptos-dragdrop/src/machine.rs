//! Drag State Machine
//!
//! Pure gesture interpretation, independent of the DOM.
//! `Idle -> Pending (pointer down) -> Dragging (moved past threshold) -> released`.

/// Movement threshold in pixels to start dragging
pub const DRAG_THRESHOLD_PX: i32 = 5;

/// Current phase of a pointer gesture
#[derive(Clone, Debug, PartialEq)]
pub enum DragPhase<K, Z> {
    /// No pointer down on a draggable item
    Idle,
    /// Pointer down on an item, not yet moved far enough to count as a drag
    Pending { id: K, start_x: i32, start_y: i32 },
    /// Actively dragging; `over` is the zone currently under the pointer
    Dragging { id: K, over: Option<Z> },
}

/// What a released pointer amounted to
#[derive(Clone, Debug, PartialEq)]
pub enum DragOutcome<K, Z> {
    /// Pointer went down and up without passing the threshold
    Click(K),
    /// Released over a drop zone
    Dropped { id: K, zone: Z },
    /// Released while dragging but outside every zone
    Cancelled(K),
}

#[derive(Clone, Debug, PartialEq)]
pub struct DragMachine<K, Z> {
    phase: DragPhase<K, Z>,
}

impl<K, Z> Default for DragMachine<K, Z> {
    fn default() -> Self {
        Self { phase: DragPhase::Idle }
    }
}

impl<K: Clone + PartialEq, Z: Clone + PartialEq> DragMachine<K, Z> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &DragPhase<K, Z> {
        &self.phase
    }

    /// Record a pending drag. Ignored while another gesture is in progress.
    pub fn pointer_down(&mut self, id: K, x: i32, y: i32) {
        if matches!(self.phase, DragPhase::Idle) {
            self.phase = DragPhase::Pending { id, start_x: x, start_y: y };
        }
    }

    /// Promote a pending gesture to a drag once it moves past the threshold.
    /// Returns true on the move that started the drag.
    pub fn pointer_move(&mut self, x: i32, y: i32) -> bool {
        let DragPhase::Pending { id, start_x, start_y } = &self.phase else {
            return false;
        };
        let dx = (x - start_x).abs();
        let dy = (y - start_y).abs();
        if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
            self.phase = DragPhase::Dragging { id: id.clone(), over: None };
            true
        } else {
            false
        }
    }

    pub fn enter_zone(&mut self, zone: Z) {
        if let DragPhase::Dragging { over, .. } = &mut self.phase {
            *over = Some(zone);
        }
    }

    /// Leaving a zone only clears the hover if it is still the hovered one,
    /// so an enter on the next zone that fires first is not undone.
    pub fn leave_zone(&mut self, zone: &Z) {
        if let DragPhase::Dragging { over, .. } = &mut self.phase {
            if over.as_ref() == Some(zone) {
                *over = None;
            }
        }
    }

    /// Finish the gesture and reset to idle.
    pub fn pointer_up(&mut self) -> Option<DragOutcome<K, Z>> {
        match std::mem::replace(&mut self.phase, DragPhase::Idle) {
            DragPhase::Idle => None,
            DragPhase::Pending { id, .. } => Some(DragOutcome::Click(id)),
            DragPhase::Dragging { id, over: Some(zone) } => Some(DragOutcome::Dropped { id, zone }),
            DragPhase::Dragging { id, over: None } => Some(DragOutcome::Cancelled(id)),
        }
    }

    pub fn dragging_id(&self) -> Option<&K> {
        match &self.phase {
            DragPhase::Dragging { id, .. } => Some(id),
            _ => None,
        }
    }

    pub fn hovered_zone(&self) -> Option<&Z> {
        match &self.phase {
            DragPhase::Dragging { over, .. } => over.as_ref(),
            _ => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq)]
    enum Zone {
        Left,
        Right,
    }

    fn dragging(id: &str) -> DragMachine<String, Zone> {
        let mut m = DragMachine::new();
        m.pointer_down(id.to_string(), 100, 100);
        assert!(m.pointer_move(120, 100));
        m
    }

    #[test]
    fn test_small_movement_is_a_click() {
        let mut m: DragMachine<String, Zone> = DragMachine::new();
        m.pointer_down("a".into(), 10, 10);
        assert!(!m.pointer_move(13, 14));
        assert!(!m.is_dragging());
        assert_eq!(m.pointer_up(), Some(DragOutcome::Click("a".into())));
        assert_eq!(m.phase(), &DragPhase::Idle);
    }

    #[test]
    fn test_threshold_starts_drag_once() {
        let mut m: DragMachine<String, Zone> = DragMachine::new();
        m.pointer_down("a".into(), 0, 0);
        assert!(m.pointer_move(0, 6));
        assert!(!m.pointer_move(0, 40));
        assert_eq!(m.dragging_id(), Some(&"a".to_string()));
    }

    #[test]
    fn test_drop_over_zone() {
        let mut m = dragging("a");
        m.enter_zone(Zone::Right);
        assert_eq!(m.hovered_zone(), Some(&Zone::Right));
        assert_eq!(
            m.pointer_up(),
            Some(DragOutcome::Dropped { id: "a".into(), zone: Zone::Right })
        );
        assert!(m.hovered_zone().is_none());
    }

    #[test]
    fn test_release_outside_zones_cancels() {
        let mut m = dragging("a");
        m.enter_zone(Zone::Left);
        m.leave_zone(&Zone::Left);
        assert_eq!(m.pointer_up(), Some(DragOutcome::Cancelled("a".into())));
    }

    #[test]
    fn test_stale_leave_keeps_new_zone() {
        let mut m = dragging("a");
        m.enter_zone(Zone::Left);
        m.enter_zone(Zone::Right);
        m.leave_zone(&Zone::Left);
        assert_eq!(m.hovered_zone(), Some(&Zone::Right));
    }

    #[test]
    fn test_zone_events_ignored_without_drag() {
        let mut m: DragMachine<String, Zone> = DragMachine::new();
        m.enter_zone(Zone::Left);
        assert!(m.hovered_zone().is_none());
        assert_eq!(m.pointer_up(), None);

        m.pointer_down("a".into(), 0, 0);
        m.enter_zone(Zone::Left);
        assert_eq!(m.pointer_up(), Some(DragOutcome::Click("a".into())));
    }

    #[test]
    fn test_second_pointer_down_ignored_mid_gesture() {
        let mut m = dragging("a");
        m.pointer_down("b".into(), 0, 0);
        assert_eq!(m.dragging_id(), Some(&"a".to_string()));
    }
}
