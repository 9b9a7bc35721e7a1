use crate::content::Content;
use crate::layout::{Align, Layout, Offset, Size, Spacing};
use crate::primitives::Shape;
use crate::style::{InteractionState, Style};
use std::fmt;

/// Stable identifier used for event targeting and lookups in a node tree
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Derive the id of a named part of this node (e.g. `slider_thumb`)
    pub fn child(&self, part: &str) -> NodeId {
        NodeId(format!("{}_{}", self.0, part))
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A UI node that can contain a shape, content and children
///
/// Components build a fresh tree every time they are asked to render; the
/// tree is a plain description handed to a renderer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Node {
    id: Option<NodeId>,
    width: Size,
    height: Size,
    offset: Offset,
    padding: Spacing,
    gap: f32,
    layout: Layout,
    align: Align,
    shape: Option<Shape>,
    content: Option<Content>,
    style: Style,
    hover_style: Option<Style>,
    active_style: Option<Style>,
    disabled_style: Option<Style>,
    disabled: bool,
    focusable: bool,
    children: Vec<Node>,
}

impl Node {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: impl Into<NodeId>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_width(mut self, width: Size) -> Self {
        self.width = width;
        self
    }

    pub fn with_height(mut self, height: Size) -> Self {
        self.height = height;
        self
    }

    /// Set both width and height to fixed pixel values
    pub fn with_size(self, width: f32, height: f32) -> Self {
        self.with_width(Size::px(width)).with_height(Size::px(height))
    }

    pub fn with_offset(mut self, offset: Offset) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_padding(mut self, padding: Spacing) -> Self {
        self.padding = padding;
        self
    }

    /// Space between consecutive children along the layout axis
    pub fn with_gap(mut self, gap: f32) -> Self {
        self.gap = gap;
        self
    }

    pub fn with_layout_direction(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn with_shape(mut self, shape: Shape) -> Self {
        self.shape = Some(shape);
        self
    }

    pub fn with_content(mut self, content: Content) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn with_hover_style(mut self, style: Style) -> Self {
        self.hover_style = Some(style);
        self
    }

    pub fn with_active_style(mut self, style: Style) -> Self {
        self.active_style = Some(style);
        self
    }

    pub fn with_disabled_style(mut self, style: Style) -> Self {
        self.disabled_style = Some(style);
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Mark the node as a keyboard focus target
    pub fn with_focusable(mut self, focusable: bool) -> Self {
        self.focusable = focusable;
        self
    }

    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn id(&self) -> Option<&NodeId> {
        self.id.as_ref()
    }

    pub fn width(&self) -> Size {
        self.width
    }

    pub fn height(&self) -> Size {
        self.height
    }

    pub fn offset(&self) -> Offset {
        self.offset
    }

    pub fn padding(&self) -> Spacing {
        self.padding
    }

    pub fn gap(&self) -> f32 {
        self.gap
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn align(&self) -> Align {
        self.align
    }

    pub fn shape(&self) -> Option<&Shape> {
        self.shape.as_ref()
    }

    pub fn content(&self) -> Option<&Content> {
        self.content.as_ref()
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn is_focusable(&self) -> bool {
        self.focusable
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Text of this node's content, if it is text
    pub fn text(&self) -> Option<&str> {
        match &self.content {
            Some(Content::Text(text)) => Some(&text.text),
            _ => None,
        }
    }

    /// Depth-first search for the node with the given id
    pub fn find(&self, id: &str) -> Option<&Node> {
        if self.id.as_ref().is_some_and(|own| own.as_str() == id) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    /// Style a renderer should draw for the given interaction state
    ///
    /// A disabled node always resolves to its disabled layer regardless of the
    /// requested state.
    pub fn resolved_style(&self, state: InteractionState) -> Style {
        let layer = if self.disabled {
            self.disabled_style.as_ref()
        } else {
            match state {
                InteractionState::Idle => None,
                InteractionState::Hovered => self.hover_style.as_ref(),
                InteractionState::Active => self
                    .active_style
                    .as_ref()
                    .or(self.hover_style.as_ref()),
                InteractionState::Disabled => self.disabled_style.as_ref(),
            }
        };

        match layer {
            Some(layer) => self.style.merge(layer),
            None => self.style.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::content::TextContent;

    #[test]
    fn test_find_nested() {
        let tree = Node::new().with_id("root").with_child(
            Node::new()
                .with_child(Node::new().with_id("leaf").with_content(Content::Text(
                    TextContent::new("hello"),
                ))),
        );

        assert_eq!(tree.find("leaf").and_then(Node::text), Some("hello"));
        assert!(tree.find("missing").is_none());
    }

    #[test]
    fn test_disabled_layer_wins() {
        let node = Node::new()
            .with_style(Style::fill(Color::rgb(1.0, 0.0, 0.0)))
            .with_hover_style(Style::fill(Color::rgb(0.0, 1.0, 0.0)))
            .with_disabled_style(Style::opacity(0.5))
            .with_disabled(true);

        let style = node.resolved_style(InteractionState::Hovered);
        assert_eq!(style.fill_color, Some(Color::rgb(1.0, 0.0, 0.0)));
        assert_eq!(style.opacity, Some(0.5));
    }

    #[test]
    fn test_child_id() {
        assert_eq!(NodeId::new("volume").child("thumb").as_str(), "volume_thumb");
    }
}
