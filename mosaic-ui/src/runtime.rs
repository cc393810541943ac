//! Headless runtime: builds frames, remembers component state across frames
//! and routes host events to view nodes by key.

use std::{
    any::{Any, TypeId},
    cell::RefCell,
    time::Duration,
};

use derive_setters::Setters;
use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::{debug, trace, warn};

use crate::{
    Dp, State,
    clock::{FrameClock, ManualClock, SystemClock, set_frame_time},
    context::provide_context,
    dp::set_scale_factor,
    gesture::{GestureEvent, LayoutEvent},
    view::ViewNode,
};

/// Errors returned when an event cannot be delivered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// No frame has been built yet.
    #[error("no frame has been built yet")]
    NoFrame,
    /// No node in the current frame carries the key.
    #[error("no node with key `{0}` in the current frame")]
    UnknownKey(String),
    /// The node exists but has no handler for the event.
    #[error("node `{key}` has no {event} handler")]
    NoHandler {
        /// Node key.
        key: String,
        /// Event name.
        event: &'static str,
    },
    /// The node is disabled and refuses touches.
    #[error("node `{0}` is disabled")]
    Disabled(String),
}

/// Host configuration.
#[derive(Debug, Clone, Copy, PartialEq, Setters)]
pub struct RuntimeConfig {
    /// Logical screen width.
    pub screen_width: Dp,
    /// Logical screen height.
    pub screen_height: Dp,
    /// Physical pixels per dp.
    pub scale_factor: f64,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            screen_width: Dp(390.0),
            screen_height: Dp(844.0),
            scale_factor: 1.0,
        }
    }
}

/// Screen size, provided as context during every frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenMetrics {
    /// Logical width.
    pub width: Dp,
    /// Logical height.
    pub height: Dp,
}

impl Default for ScreenMetrics {
    fn default() -> Self {
        let config = RuntimeConfig::default();
        Self {
            width: config.screen_width,
            height: config.screen_height,
        }
    }
}

type SlotKey = (String, TypeId);

struct Slot {
    value: Box<dyn Any>,
    live: bool,
}

thread_local! {
    static SLOTS: RefCell<FxHashMap<SlotKey, Slot>> = RefCell::new(FxHashMap::default());
}

/// Returns the state remembered under `key`, creating it with `init` on first
/// use.
///
/// Inside [`Runtime::frame`], state that no build touched during a frame is
/// dropped when the frame ends, which is how a component that leaves the tree
/// loses its state. Keys are scoped per type, so different components may use
/// the same key string.
pub fn remember_with_key<T, F>(key: &str, init: F) -> State<T>
where
    T: Send + Sync + 'static,
    F: FnOnce() -> T,
{
    let slot_key = (key.to_string(), TypeId::of::<T>());
    let existing = SLOTS.with(|slots| {
        let mut slots = slots.borrow_mut();
        let slot = slots.get_mut(&slot_key)?;
        slot.live = true;
        slot.value.downcast_ref::<State<T>>().cloned()
    });
    if let Some(state) = existing {
        return state;
    }
    let state = State::new(init());
    SLOTS.with(|slots| {
        slots.borrow_mut().insert(
            slot_key,
            Slot {
                value: Box::new(state.clone()),
                live: true,
            },
        );
    });
    state
}

fn begin_slot_generation() {
    SLOTS.with(|slots| {
        for slot in slots.borrow_mut().values_mut() {
            slot.live = false;
        }
    });
}

fn collect_dead_slots() -> usize {
    // Dropped values may run their own `Drop`, so take them out before the
    // borrow ends and drop afterwards.
    let dead: Vec<Slot> = SLOTS.with(|slots| {
        let mut slots = slots.borrow_mut();
        let keys: Vec<SlotKey> = slots
            .iter()
            .filter(|(_, slot)| !slot.live)
            .map(|(key, _)| key.clone())
            .collect();
        keys.into_iter().filter_map(|key| slots.remove(&key)).collect()
    });
    dead.len()
}

/// Drives component builds and event delivery without a platform host.
pub struct Runtime<C: FrameClock = SystemClock> {
    config: RuntimeConfig,
    clock: C,
    tree: Option<ViewNode>,
    key_index: FxHashMap<String, Vec<usize>>,
    frames: u64,
}

impl Runtime<ManualClock> {
    /// A runtime on a [`ManualClock`] starting at zero.
    pub fn headless(config: RuntimeConfig) -> Self {
        Self::new(config, ManualClock::new())
    }

    /// Moves the manual clock forward.
    pub fn advance(&self, by: Duration) {
        self.clock.advance(by);
    }
}

impl<C: FrameClock> Runtime<C> {
    /// Creates a runtime and applies the configured scale factor.
    pub fn new(config: RuntimeConfig, clock: C) -> Self {
        set_scale_factor(config.scale_factor);
        Self {
            config,
            clock,
            tree: None,
            key_index: FxHashMap::default(),
            frames: 0,
        }
    }

    /// Host configuration.
    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// The frame clock.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Number of frames built.
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Builds a frame at the clock's current time and keeps the tree for
    /// dispatch.
    pub fn frame(&mut self, build: impl FnOnce() -> ViewNode) -> &ViewNode {
        let now = self.clock.now();
        set_frame_time(now);
        begin_slot_generation();
        let metrics = ScreenMetrics {
            width: self.config.screen_width,
            height: self.config.screen_height,
        };
        let tree = provide_context(metrics, build);
        let dropped = collect_dead_slots();
        if dropped > 0 {
            debug!(dropped, "released state of components that left the tree");
        }
        self.frames += 1;
        self.key_index = index_keys(&tree);
        trace!(
            frame = self.frames,
            at_ms = now.as_millis() as u64,
            nodes = tree.node_count(),
            "frame built"
        );
        self.tree.insert(tree)
    }

    /// The last built tree.
    pub fn tree(&self) -> Option<&ViewNode> {
        self.tree.as_ref()
    }

    /// Looks up a node of the last built tree.
    pub fn find(&self, key: &str) -> Option<&ViewNode> {
        let path = self.key_index.get(key)?;
        let mut node = self.tree.as_ref()?;
        for &index in path {
            node = node.children.get(index)?;
        }
        Some(node)
    }

    fn target(&self, key: &str) -> Result<&ViewNode, DispatchError> {
        if self.tree.is_none() {
            return Err(DispatchError::NoFrame);
        }
        let node = self.find(key).ok_or_else(|| {
            warn!(key, "dispatch to unknown key");
            DispatchError::UnknownKey(key.to_string())
        })?;
        if node.disabled {
            debug!(key, "dispatch to disabled node dropped");
            return Err(DispatchError::Disabled(key.to_string()));
        }
        Ok(node)
    }

    fn handler<H: Clone>(
        &self,
        key: &str,
        event: &'static str,
        pick: impl FnOnce(&ViewNode) -> Option<&H>,
    ) -> Result<H, DispatchError> {
        let node = self.target(key)?;
        trace!(key, event, "dispatch");
        pick(node).cloned().ok_or_else(|| DispatchError::NoHandler {
            key: key.to_string(),
            event,
        })
    }

    /// Delivers a tap.
    pub fn press(&self, key: &str) -> Result<(), DispatchError> {
        self.handler(key, "press", |n| n.handlers.on_press.as_ref())?
            .call();
        Ok(())
    }

    /// Delivers a long press.
    pub fn long_press(&self, key: &str) -> Result<(), DispatchError> {
        self.handler(key, "long_press", |n| n.handlers.on_long_press.as_ref())?
            .call();
        Ok(())
    }

    /// Delivers one pan gesture phase.
    pub fn gesture(&self, key: &str, event: GestureEvent) -> Result<(), DispatchError> {
        self.handler(key, event.name(), |n| n.handlers.on_gesture.as_ref())?
            .call(event);
        Ok(())
    }

    /// Delivers a whole horizontal drag: start, one move per cumulative
    /// offset in `moves`, then end.
    pub fn drag(
        &self,
        key: &str,
        moves: impl IntoIterator<Item = f32>,
    ) -> Result<(), DispatchError> {
        let handler = self.handler(key, "gesture", |n| n.handlers.on_gesture.as_ref())?;
        handler.call(GestureEvent::Start);
        for dx in moves {
            handler.call(GestureEvent::horizontal(dx));
        }
        handler.call(GestureEvent::End);
        Ok(())
    }

    /// Delivers a layout measurement.
    pub fn layout(&self, key: &str, event: LayoutEvent) -> Result<(), DispatchError> {
        // Layout is reported for disabled nodes too.
        let node = self.find(key).ok_or_else(|| {
            if self.tree.is_none() {
                DispatchError::NoFrame
            } else {
                DispatchError::UnknownKey(key.to_string())
            }
        })?;
        let handler = node
            .handlers
            .on_layout
            .clone()
            .ok_or_else(|| DispatchError::NoHandler {
                key: key.to_string(),
                event: "layout",
            })?;
        handler.call(event);
        Ok(())
    }

    /// Delivers a text edit.
    pub fn change_text(&self, key: &str, text: impl Into<String>) -> Result<(), DispatchError> {
        self.handler(key, "change_text", |n| n.handlers.on_change_text.as_ref())?
            .call(text.into());
        Ok(())
    }

    /// Delivers a focus change.
    pub fn focus(&self, key: &str, focused: bool) -> Result<(), DispatchError> {
        self.handler(key, "focus", |n| n.handlers.on_focus_change.as_ref())?
            .call(focused);
        Ok(())
    }

    /// Delivers a close request to a modal.
    pub fn request_close(&self, key: &str) -> Result<(), DispatchError> {
        self.handler(key, "request_close", |n| {
            n.handlers.on_request_close.as_ref()
        })?
        .call();
        Ok(())
    }
}

fn index_keys(tree: &ViewNode) -> FxHashMap<String, Vec<usize>> {
    fn visit(node: &ViewNode, path: &mut Vec<usize>, index: &mut FxHashMap<String, Vec<usize>>) {
        if let Some(key) = &node.key {
            if index.contains_key(key) {
                warn!(key = key.as_str(), "duplicate view key, first node wins");
            } else {
                index.insert(key.clone(), path.clone());
            }
        }
        for (i, child) in node.children.iter().enumerate() {
            path.push(i);
            visit(child, path, index);
            path.pop();
        }
    }
    let mut index = FxHashMap::default();
    visit(tree, &mut Vec::new(), &mut index);
    index
}
