//! Declarative view nodes.
//!
//! Components return a [`ViewNode`] tree. A host maps every node onto a
//! native view of the matching [`ViewKind`], applies its [`Style`] and wires
//! its [`Handlers`]. Nodes that events must reach carry a `key`; the headless
//! [`Runtime`](crate::Runtime) dispatches by key.

use std::fmt;

use crate::{
    Callback, CallbackWith, Color,
    gesture::{GestureEvent, LayoutEvent},
    style::{Style, TextTransform},
};

/// Parameters of an editable text field.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TextFieldSpec {
    /// Current text.
    pub value: String,
    /// Hint shown while the value is empty.
    pub placeholder: Option<String>,
    /// Color of the hint.
    pub placeholder_color: Option<Color>,
    /// Accepts line breaks.
    pub multiline: bool,
    /// Accepts input.
    pub editable: bool,
    /// Maximum number of characters the host accepts.
    pub max_length: Option<usize>,
}

/// Entry/exit animation of a modal.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ModalAnimation {
    /// Appear and disappear instantly.
    #[default]
    None,
    /// Fade in and out.
    Fade,
    /// Slide up from the bottom edge.
    Slide,
}

/// Parameters of a modal layer.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ModalSpec {
    /// Whether the layer is presented.
    pub visible: bool,
    /// Whether content below stays visible behind the layer.
    pub transparent: bool,
    /// Presentation animation.
    pub animation: ModalAnimation,
}

/// What kind of native view a node maps to.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewKind {
    /// Plain container.
    View,
    /// Text leaf.
    Text(String),
    /// Container that reports presses.
    Pressable,
    /// Editable text field.
    TextField(TextFieldSpec),
    /// Layer presented above the rest of the screen.
    Modal(ModalSpec),
}

/// Event handlers attached to a node.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Handlers {
    /// Tap.
    pub on_press: Option<Callback>,
    /// Long press.
    pub on_long_press: Option<Callback>,
    /// Layout measurement.
    pub on_layout: Option<CallbackWith<LayoutEvent>>,
    /// Pan gesture phases.
    pub on_gesture: Option<CallbackWith<GestureEvent>>,
    /// Text edits on a text field.
    pub on_change_text: Option<CallbackWith<String>>,
    /// Focus gained (`true`) or lost (`false`).
    pub on_focus_change: Option<CallbackWith<bool>>,
    /// Back button or dismiss request on a modal.
    pub on_request_close: Option<Callback>,
}

/// A node in a declarative view tree.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewNode {
    /// Stable identifier used for event dispatch.
    pub key: Option<String>,
    /// Native view kind.
    pub kind: ViewKind,
    /// Style attributes.
    pub style: Style,
    /// Whether the host should suppress touch handlers.
    pub disabled: bool,
    /// Event handlers.
    pub handlers: Handlers,
    /// Child nodes in paint order.
    pub children: Vec<ViewNode>,
}

impl ViewNode {
    fn with_kind(kind: ViewKind) -> Self {
        Self {
            key: None,
            kind,
            style: Style::default(),
            disabled: false,
            handlers: Handlers::default(),
            children: Vec::new(),
        }
    }

    /// A plain container.
    pub fn view() -> Self {
        Self::with_kind(ViewKind::View)
    }

    /// A text leaf.
    pub fn text(content: impl Into<String>) -> Self {
        Self::with_kind(ViewKind::Text(content.into()))
    }

    /// A pressable container.
    pub fn pressable() -> Self {
        Self::with_kind(ViewKind::Pressable)
    }

    /// An editable text field.
    pub fn text_field(spec: TextFieldSpec) -> Self {
        Self::with_kind(ViewKind::TextField(spec))
    }

    /// A modal layer.
    pub fn modal(spec: ModalSpec) -> Self {
        Self::with_kind(ViewKind::Modal(spec))
    }

    /// Sets the dispatch key.
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Replaces the style.
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Layers `style` over the current style.
    pub fn merge_style(mut self, style: &Style) -> Self {
        self.style = self.style.merge(style);
        self
    }

    /// Marks the node as disabled.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Appends a child.
    pub fn child(mut self, child: ViewNode) -> Self {
        self.children.push(child);
        self
    }

    /// Appends a child when present.
    pub fn child_opt(mut self, child: Option<ViewNode>) -> Self {
        self.children.extend(child);
        self
    }

    /// Appends several children.
    pub fn children(mut self, children: impl IntoIterator<Item = ViewNode>) -> Self {
        self.children.extend(children);
        self
    }

    /// Sets the press handler.
    pub fn on_press(mut self, handler: impl Into<Callback>) -> Self {
        self.handlers.on_press = Some(handler.into());
        self
    }

    /// Sets the long-press handler.
    pub fn on_long_press(mut self, handler: impl Into<Callback>) -> Self {
        self.handlers.on_long_press = Some(handler.into());
        self
    }

    /// Sets the layout handler.
    pub fn on_layout(mut self, handler: impl Into<CallbackWith<LayoutEvent>>) -> Self {
        self.handlers.on_layout = Some(handler.into());
        self
    }

    /// Sets the pan gesture handler.
    pub fn on_gesture(mut self, handler: impl Into<CallbackWith<GestureEvent>>) -> Self {
        self.handlers.on_gesture = Some(handler.into());
        self
    }

    /// Sets the text-change handler.
    pub fn on_change_text(mut self, handler: impl Into<CallbackWith<String>>) -> Self {
        self.handlers.on_change_text = Some(handler.into());
        self
    }

    /// Sets the focus handler.
    pub fn on_focus_change(mut self, handler: impl Into<CallbackWith<bool>>) -> Self {
        self.handlers.on_focus_change = Some(handler.into());
        self
    }

    /// Sets the close-request handler.
    pub fn on_request_close(mut self, handler: impl Into<Callback>) -> Self {
        self.handlers.on_request_close = Some(handler.into());
        self
    }

    /// Finds the first node with `key`, depth first.
    pub fn find(&self, key: &str) -> Option<&ViewNode> {
        if self.key.as_deref() == Some(key) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(key))
    }

    /// Visits every node depth first with its depth.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a ViewNode, usize)) {
        self.walk_at(0, visit);
    }

    fn walk_at<'a>(&'a self, depth: usize, visit: &mut impl FnMut(&'a ViewNode, usize)) {
        visit(self, depth);
        for child in &self.children {
            child.walk_at(depth + 1, visit);
        }
    }

    /// Text as the host would display it, with the style's case transform
    /// applied. `None` for non-text nodes.
    pub fn rendered_text(&self) -> Option<String> {
        let ViewKind::Text(content) = &self.kind else {
            return None;
        };
        Some(match self.style.text_transform {
            Some(TextTransform::Uppercase) => content.to_uppercase(),
            Some(TextTransform::Lowercase) => content.to_lowercase(),
            None => content.clone(),
        })
    }

    /// All rendered text in the subtree, joined by single spaces.
    pub fn text_content(&self) -> String {
        let mut parts = Vec::new();
        self.walk(&mut |node, _| {
            if let Some(text) = node.rendered_text() {
                parts.push(text);
            }
        });
        parts.join(" ")
    }

    /// Number of nodes in the subtree.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        self.walk(&mut |_, _| count += 1);
        count
    }
}

impl fmt::Display for ViewNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut result = Ok(());
        self.walk(&mut |node, depth| {
            if result.is_err() {
                return;
            }
            let indent = "  ".repeat(depth);
            let label = match &node.kind {
                ViewKind::View => "View".to_string(),
                ViewKind::Text(_) => format!(
                    "Text {:?}",
                    node.rendered_text().unwrap_or_default()
                ),
                ViewKind::Pressable => "Pressable".to_string(),
                ViewKind::TextField(spec) => format!("TextField {:?}", spec.value),
                ViewKind::Modal(spec) => format!("Modal visible={}", spec.visible),
            };
            result = match &node.key {
                Some(key) => writeln!(f, "{indent}{label} #{key}"),
                None => writeln!(f, "{indent}{label}"),
            };
        });
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ViewNode {
        ViewNode::view().key("root").children([
            ViewNode::text("title").style(Style::new().text_transform(TextTransform::Uppercase)),
            ViewNode::pressable()
                .key("root.action")
                .child(ViewNode::text("go")),
        ])
    }

    #[test]
    fn find_locates_nested_keys() {
        let tree = sample();
        assert!(tree.find("root.action").is_some());
        assert!(tree.find("missing").is_none());
        assert_eq!(tree.node_count(), 4);
    }

    #[test]
    fn text_content_applies_case_transform() {
        assert_eq!(sample().text_content(), "TITLE go");
    }

    #[test]
    fn display_indents_children() {
        let dump = sample().to_string();
        assert!(dump.starts_with("View #root\n"));
        assert!(dump.contains("  Pressable #root.action\n"));
        assert!(dump.contains("    Text \"go\"\n"));
    }
}
