//! Document-level listeners and keyboard focus
//!
//! Components that must keep receiving pointer events after the pointer leaves
//! their bounds (a slider thumb being dragged) attach a listener to the
//! [`Document`]. Attaching returns a [`Subscription`]; the listener stays
//! registered exactly as long as that guard is alive.

use crate::events::{InteractionEvent, TargetedEvent};
use crate::node::NodeId;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

type ListenerFn = dyn Fn(&InteractionEvent);

struct Listener {
    id: u64,
    callback: Rc<ListenerFn>,
}

#[derive(Default)]
struct ListenerTable {
    next_id: u64,
    listeners: Vec<Listener>,
}

/// Shared event root of one UI surface
///
/// Cloning is cheap and every clone refers to the same listeners and focus.
#[derive(Clone, Default)]
pub struct Document {
    table: Rc<RefCell<ListenerTable>>,
    focused: Rc<RefCell<Option<NodeId>>>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a document-level listener on behalf of `owner`
    ///
    /// The listener sees every event passed to [`Document::dispatch`] until the
    /// returned subscription is dropped.
    pub fn listen(
        &self,
        owner: NodeId,
        callback: impl Fn(&InteractionEvent) + 'static,
    ) -> Subscription {
        let mut table = self.table.borrow_mut();
        let id = table.next_id;
        table.next_id += 1;
        log::debug!("document listener {} attached for {}", id, owner);
        table.listeners.push(Listener {
            id,
            callback: Rc::new(callback),
        });

        Subscription {
            id,
            owner,
            table: Rc::downgrade(&self.table),
        }
    }

    /// Number of listeners currently attached
    pub fn listener_count(&self) -> usize {
        self.table.borrow().listeners.len()
    }

    /// Deliver an event to every attached listener
    ///
    /// The listener list is snapshotted first, so listeners may attach or drop
    /// subscriptions (including their own) while being called. Returns how many
    /// listeners were invoked.
    pub fn dispatch(&self, event: &InteractionEvent) -> usize {
        let callbacks: Vec<Rc<ListenerFn>> = self
            .table
            .borrow()
            .listeners
            .iter()
            .map(|listener| Rc::clone(&listener.callback))
            .collect();

        for callback in &callbacks {
            callback(event);
        }
        callbacks.len()
    }

    /// Currently focused node, if any
    pub fn focused(&self) -> Option<NodeId> {
        self.focused.borrow().clone()
    }

    pub fn is_focused(&self, id: &NodeId) -> bool {
        self.focused.borrow().as_ref() == Some(id)
    }

    /// Move keyboard focus, returning the Blur/Focus events the host must route
    pub fn set_focus(&self, node_id: Option<NodeId>) -> Vec<TargetedEvent> {
        let mut focused = self.focused.borrow_mut();
        if *focused == node_id {
            return Vec::new();
        }

        let mut events = Vec::new();
        if let Some(old_focus) = focused.take() {
            events.push(TargetedEvent {
                event: InteractionEvent::Blur,
                target: old_focus,
            });
        }
        if let Some(new_focus) = &node_id {
            events.push(TargetedEvent {
                event: InteractionEvent::Focus,
                target: new_focus.clone(),
            });
        }

        *focused = node_id;
        events
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("listeners", &self.listener_count())
            .field("focused", &self.focused())
            .finish()
    }
}

/// Guard keeping a document listener attached
///
/// Dropping the guard detaches the listener. If the document is already gone
/// the drop is a no-op.
#[must_use = "the listener is detached as soon as the subscription is dropped"]
pub struct Subscription {
    id: u64,
    owner: NodeId,
    table: Weak<RefCell<ListenerTable>>,
}

impl Subscription {
    /// Whether the listener is still registered with a live document
    pub fn is_attached(&self) -> bool {
        self.table.upgrade().is_some_and(|table| {
            table
                .borrow()
                .listeners
                .iter()
                .any(|listener| listener.id == self.id)
        })
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(table) = self.table.upgrade() {
            table
                .borrow_mut()
                .listeners
                .retain(|listener| listener.id != self.id);
            log::debug!("document listener {} detached for {}", self.id, self.owner);
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("owner", &self.owner)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::PointerKind;
    use crate::primitives::Point;
    use std::cell::Cell;

    fn pointer_up() -> InteractionEvent {
        InteractionEvent::PointerUp {
            pointer: PointerKind::Mouse,
            position: Point::new(0.0, 0.0),
        }
    }

    #[test]
    fn test_listener_lives_as_long_as_subscription() {
        let document = Document::new();
        let hits = Rc::new(Cell::new(0));

        let counter = Rc::clone(&hits);
        let subscription = document.listen(NodeId::new("a"), move |_| {
            counter.set(counter.get() + 1);
        });
        assert!(subscription.is_attached());
        assert_eq!(document.dispatch(&pointer_up()), 1);

        drop(subscription);
        assert_eq!(document.listener_count(), 0);
        assert_eq!(document.dispatch(&pointer_up()), 0);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_listener_can_drop_itself_during_dispatch() {
        let document = Document::new();
        let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));

        let inner = Rc::clone(&slot);
        let subscription = document.listen(NodeId::new("self"), move |_| {
            inner.borrow_mut().take();
        });
        *slot.borrow_mut() = Some(subscription);

        document.dispatch(&pointer_up());
        assert_eq!(document.listener_count(), 0);
    }

    #[test]
    fn test_subscription_outliving_document() {
        let document = Document::new();
        let subscription = document.listen(NodeId::new("late"), |_| {});
        drop(document);
        assert!(!subscription.is_attached());
        drop(subscription);
    }

    #[test]
    fn test_focus_moves_generate_blur_then_focus() {
        let document = Document::new();
        let a = NodeId::new("a");
        let b = NodeId::new("b");

        let events = document.set_focus(Some(a.clone()));
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event, InteractionEvent::Focus);

        let events = document.set_focus(Some(b.clone()));
        assert_eq!(events[0].target, a);
        assert_eq!(events[0].event, InteractionEvent::Blur);
        assert_eq!(events[1].target, b);
        assert!(document.is_focused(&b));

        assert!(document.set_focus(Some(b)).is_empty());
    }
}
