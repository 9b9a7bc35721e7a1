//! Pointer drag state machine

use xellanix_ui::PointerKind;

/// Whether a thumb is currently being dragged
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        /// Pointer that started the drag; other pointers are ignored
        pointer: PointerKind,
        /// Pointer x at press time
        origin_x: f32,
        /// Thumb offset at press time
        origin_offset: f64,
    },
}

/// Tracks a press-move-release sequence and maps pointer motion to thumb offsets
///
/// The controller only knows about pixels. Turning offsets into values is left
/// to [`SliderBounds`](super::SliderBounds).
#[derive(Debug, Clone, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Idle → Dragging. Returns `false` if a drag is already in progress.
    pub fn begin(&mut self, pointer: PointerKind, x: f32, thumb_offset: f64) -> bool {
        if self.is_dragging() {
            return false;
        }
        self.state = DragState::Dragging {
            pointer,
            origin_x: x,
            origin_offset: thumb_offset,
        };
        true
    }

    /// Thumb offset for a pointer at `x`, clamped to `[0, travel]`
    ///
    /// `None` while idle or when the event comes from another pointer.
    pub fn offset_for(&self, pointer: PointerKind, x: f32, travel: f64) -> Option<f64> {
        match self.state {
            DragState::Dragging {
                pointer: active,
                origin_x,
                origin_offset,
            } if active == pointer => {
                let delta = f64::from(x) - f64::from(origin_x);
                Some((origin_offset + delta).clamp(0.0, travel.max(0.0)))
            }
            _ => None,
        }
    }

    /// Dragging → Idle. Returns `true` if the release ended a drag of `pointer`.
    pub fn end(&mut self, pointer: PointerKind) -> bool {
        match self.state {
            DragState::Dragging { pointer: active, .. } if active == pointer => {
                self.state = DragState::Idle;
                true
            }
            _ => false,
        }
    }

    /// Drop any drag in progress without caring which pointer owns it
    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_follows_delta_from_origin() {
        let mut drag = DragController::new();
        assert!(drag.begin(PointerKind::Mouse, 40.0, 30.0));
        assert_eq!(drag.offset_for(PointerKind::Mouse, 50.0, 100.0), Some(40.0));
        assert_eq!(drag.offset_for(PointerKind::Mouse, 0.0, 100.0), Some(0.0));
        assert_eq!(drag.offset_for(PointerKind::Mouse, 500.0, 100.0), Some(100.0));
    }

    #[test]
    fn test_idle_yields_nothing() {
        let drag = DragController::new();
        assert_eq!(drag.offset_for(PointerKind::Mouse, 10.0, 100.0), None);
    }

    #[test]
    fn test_other_pointer_is_ignored() {
        let mut drag = DragController::new();
        drag.begin(PointerKind::Touch(1), 0.0, 0.0);

        assert_eq!(drag.offset_for(PointerKind::Touch(2), 10.0, 100.0), None);
        assert!(!drag.end(PointerKind::Mouse));
        assert!(drag.is_dragging());
        assert!(drag.end(PointerKind::Touch(1)));
        assert_eq!(drag.state(), DragState::Idle);
    }

    #[test]
    fn test_second_begin_is_rejected() {
        let mut drag = DragController::new();
        assert!(drag.begin(PointerKind::Mouse, 0.0, 0.0));
        assert!(!drag.begin(PointerKind::Touch(0), 5.0, 5.0));
        drag.cancel();
        assert!(!drag.is_dragging());
    }
}
