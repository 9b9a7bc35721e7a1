//! External control handle shared between a host and bound slider visuals
//!
//! A [`SliderHandle`] mirrors `min`, `max`, `step` and `value`, holds at most
//! one subscriber per [`CallbackKind`] and a list of element updaters. Every
//! `set` re-renders each bound element through its updater, which is how a
//! slider and a numeric field stay consistent without a shared store.

use super::quantize::SliderBounds;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

/// Field of the handle addressed by [`SliderHandle::get`] / [`SliderHandle::set`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SliderField {
    Min,
    Max,
    Step,
    Value,
}

/// Notification kinds a host can subscribe to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallbackKind {
    /// Settled value (release, key-up, commit)
    Change,
    /// Live value while an interaction is in progress
    Input,
}

/// Which subscribers [`SliderHandle::remove_callback`] removes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackTarget {
    Kind(CallbackKind),
    All,
}

impl From<CallbackKind> for CallbackTarget {
    fn from(kind: CallbackKind) -> Self {
        Self::Kind(kind)
    }
}

/// Snapshot of the mirrored fields, passed to element updaters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderValues {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub value: f64,
}

impl SliderValues {
    pub fn get(&self, field: SliderField) -> f64 {
        match field {
            SliderField::Min => self.min,
            SliderField::Max => self.max,
            SliderField::Step => self.step,
            SliderField::Value => self.value,
        }
    }

    fn set(&mut self, field: SliderField, value: f64) {
        match field {
            SliderField::Min => self.min = value,
            SliderField::Max => self.max = value,
            SliderField::Step => self.step = value,
            SliderField::Value => self.value = value,
        }
    }

    pub fn bounds(&self) -> SliderBounds {
        SliderBounds::new(self.min, self.max, self.step)
    }

    /// Snap the value onto the current range and step
    fn settle(&mut self) {
        self.value = self.bounds().quantize(self.value);
    }
}

impl Default for SliderValues {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
            step: 1.0,
            value: 0.0,
        }
    }
}

/// Batch of optional field updates for [`SliderHandle::init`]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HandleInit {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub step: Option<f64>,
    pub value: Option<f64>,
}

/// Registration token returned by [`SliderHandle::element_updater`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UpdaterId(u64);

type ValueCallback = Rc<dyn Fn(f64)>;
type ElementUpdater = Rc<dyn Fn(&SliderValues)>;

#[derive(Default)]
struct HandleState {
    values: SliderValues,
    on_change: Option<ValueCallback>,
    on_input: Option<ValueCallback>,
    updaters: Vec<(UpdaterId, ElementUpdater)>,
    next_updater: u64,
}

impl HandleState {
    fn slot(&mut self, kind: CallbackKind) -> &mut Option<ValueCallback> {
        match kind {
            CallbackKind::Change => &mut self.on_change,
            CallbackKind::Input => &mut self.on_input,
        }
    }
}

/// Host-owned control object for one or more slider visuals
///
/// Clones share the same state. Bound elements only keep a
/// [`WeakSliderHandle`], so dropping every host clone unbinds them.
#[derive(Clone, Default)]
pub struct SliderHandle {
    state: Rc<RefCell<HandleState>>,
}

impl SliderHandle {
    /// Handle with the default range `0..=100`, step 1, value 0
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_values(values: SliderValues) -> Self {
        let mut values = values;
        values.settle();
        let handle = Self::new();
        handle.state.borrow_mut().values = values;
        handle
    }

    pub fn get(&self, field: SliderField) -> f64 {
        self.state.borrow().values.get(field)
    }

    /// Store a field and re-render every bound element
    ///
    /// The stored value is snapped onto the range and step, so the handle
    /// reports what bound sliders display.
    ///
    /// Change/input subscribers are not notified; see [`SliderHandle::fire_callback`].
    pub fn set(&self, field: SliderField, value: f64) {
        {
            let mut state = self.state.borrow_mut();
            state.values.set(field, value);
            state.values.settle();
        }
        self.notify_updaters();
    }

    pub fn values(&self) -> SliderValues {
        self.state.borrow().values
    }

    pub fn min(&self) -> f64 {
        self.get(SliderField::Min)
    }

    pub fn max(&self) -> f64 {
        self.get(SliderField::Max)
    }

    pub fn step(&self) -> f64 {
        self.get(SliderField::Step)
    }

    pub fn value(&self) -> f64 {
        self.get(SliderField::Value)
    }

    pub fn set_min(&self, min: f64) {
        self.set(SliderField::Min, min);
    }

    pub fn set_max(&self, max: f64) {
        self.set(SliderField::Max, max);
    }

    pub fn set_step(&self, step: f64) {
        self.set(SliderField::Step, step);
    }

    pub fn set_value(&self, value: f64) {
        self.set(SliderField::Value, value);
    }

    /// Apply only the provided fields, then re-render bound elements once
    pub fn init(&self, init: HandleInit) {
        {
            let mut state = self.state.borrow_mut();
            let fields = [
                (SliderField::Min, init.min),
                (SliderField::Max, init.max),
                (SliderField::Step, init.step),
                (SliderField::Value, init.value),
            ];
            for (field, value) in fields {
                if let Some(value) = value {
                    state.values.set(field, value);
                }
            }
            state.values.settle();
        }
        self.notify_updaters();
    }

    /// Install the subscriber for `kind`, discarding any previous one
    pub fn callback(&self, kind: CallbackKind, callback: impl Fn(f64) + 'static) {
        *self.state.borrow_mut().slot(kind) = Some(Rc::new(callback));
    }

    pub fn remove_callback(&self, target: impl Into<CallbackTarget>) {
        let mut state = self.state.borrow_mut();
        match target.into() {
            CallbackTarget::Kind(kind) => *state.slot(kind) = None,
            CallbackTarget::All => {
                state.on_change = None;
                state.on_input = None;
            }
        }
    }

    pub fn has_callback(&self, kind: CallbackKind) -> bool {
        self.state.borrow_mut().slot(kind).is_some()
    }

    /// Invoke the subscriber for `kind` if one is installed
    pub fn fire_callback(&self, kind: CallbackKind, value: f64) {
        let callback = self.state.borrow_mut().slot(kind).clone();
        if let Some(callback) = callback {
            callback(value);
        }
    }

    /// Register a visual-sync callback invoked after every `set`
    pub fn element_updater(&self, updater: impl Fn(&SliderValues) + 'static) -> UpdaterId {
        let mut state = self.state.borrow_mut();
        let id = UpdaterId(state.next_updater);
        state.next_updater += 1;
        state.updaters.push((id, Rc::new(updater)));
        id
    }

    /// Unregister an updater; returns whether it was registered
    pub fn remove_element_updater(&self, id: UpdaterId) -> bool {
        let mut state = self.state.borrow_mut();
        let before = state.updaters.len();
        state.updaters.retain(|(updater_id, _)| *updater_id != id);
        state.updaters.len() != before
    }

    pub fn updater_count(&self) -> usize {
        self.state.borrow().updaters.len()
    }

    pub fn downgrade(&self) -> WeakSliderHandle {
        WeakSliderHandle {
            state: Rc::downgrade(&self.state),
        }
    }

    fn notify_updaters(&self) {
        // No borrow may be held while updaters run: they read the handle back
        let (values, updaters): (SliderValues, Vec<ElementUpdater>) = {
            let state = self.state.borrow();
            (
                state.values,
                state
                    .updaters
                    .iter()
                    .map(|(_, updater)| Rc::clone(updater))
                    .collect(),
            )
        };
        for updater in updaters {
            updater(&values);
        }
    }
}

impl fmt::Debug for SliderHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("SliderHandle")
            .field("values", &state.values)
            .field("on_change", &state.on_change.is_some())
            .field("on_input", &state.on_input.is_some())
            .field("updaters", &state.updaters.len())
            .finish()
    }
}

/// Non-owning reference held by bound elements
#[derive(Clone, Default)]
pub struct WeakSliderHandle {
    state: Weak<RefCell<HandleState>>,
}

impl WeakSliderHandle {
    pub fn upgrade(&self) -> Option<SliderHandle> {
        self.state.upgrade().map(|state| SliderHandle { state })
    }
}

impl fmt::Debug for WeakSliderHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeakSliderHandle")
            .field("alive", &(self.state.strong_count() > 0))
            .finish()
    }
}
