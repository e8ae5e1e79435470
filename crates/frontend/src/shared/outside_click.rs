//! Outside-click detection for popups and row dropdowns.
//!
//! `use_outside_click` fires a callback on every `mousedown` whose target is
//! neither the anchor element nor one of its descendants. While the anchor is
//! `None` nothing is registered.

use leptos::ev;
use leptos::html;
use leptos::prelude::window_event_listener;
use leptos::prelude::*;
use std::collections::HashMap;
use std::hash::Hash;
use wasm_bindgen::JsCast;

/// Something that can tell whether an event target lies inside it.
pub trait Containment {
    type Node;

    fn contains_node(&self, node: &Self::Node) -> bool;
}

impl Containment for web_sys::Node {
    type Node = web_sys::Node;

    fn contains_node(&self, node: &web_sys::Node) -> bool {
        self.contains(Some(node))
    }
}

/// `true` when a pointer-down on `target` should count as an outside click.
///
/// No anchor means nothing to protect, so never outside.
pub fn is_outside<A: Containment>(anchor: Option<&A>, target: Option<&A::Node>) -> bool {
    match (anchor, target) {
        (None, _) => false,
        (Some(_), None) => true,
        (Some(anchor), Some(target)) => !anchor.contains_node(target),
    }
}

/// Attach a window `mousedown` listener for the current anchor.
///
/// The listener is removed when the anchor changes or the owner is disposed,
/// so at most one registration exists per hook.
pub fn use_outside_click(anchor: Signal<Option<NodeRef<html::Div>>>, on_outside: Callback<()>) {
    Effect::new(move |_| {
        let Some(node_ref) = anchor.get() else {
            return;
        };

        let handle = window_event_listener(ev::mousedown, move |event: web_sys::MouseEvent| {
            let anchor_node: Option<web_sys::Node> = node_ref
                .get_untracked()
                .map(|el| AsRef::<web_sys::Node>::as_ref(&el).clone());
            let target: Option<web_sys::Node> = event
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Node>().ok());

            if is_outside(anchor_node.as_ref(), target.as_ref()) {
                on_outside.run(());
            }
        });

        on_cleanup(move || handle.remove());
    });
}

/// Explicit id → element handle mapping for per-row anchors.
///
/// Rows register their handle when rendered; entries for ids that left the
/// collection are evicted with [`AnchorRegistry::retain`].
#[derive(Debug, Clone)]
pub struct AnchorRegistry<K, H> {
    anchors: HashMap<K, H>,
}

impl<K, H> Default for AnchorRegistry<K, H> {
    fn default() -> Self {
        Self {
            anchors: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash + Copy, H: Copy> AnchorRegistry<K, H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers (or replaces) the handle for `key`.
    pub fn register(&mut self, key: K, handle: H) {
        self.anchors.insert(key, handle);
    }

    pub fn get(&self, key: &K) -> Option<H> {
        self.anchors.get(key).copied()
    }

    pub fn remove(&mut self, key: &K) -> Option<H> {
        self.anchors.remove(key)
    }

    pub fn retain(&mut self, mut keep: impl FnMut(&K) -> bool) {
        self.anchors.retain(|k, _| keep(k));
    }

    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }
}
