//! Modal popup shown over a dimmed smoke layer
//!
//! A [`PopupProvider`] owns the popup's item and visibility. Code running
//! inside [`PopupProvider::provide`] reaches it through [`use_popup`] without
//! having the provider passed down explicitly.

use crate::button::{icon_button, Button, ButtonStyle};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::time::{Duration, Instant};
use thiserror::Error;
use xellanix_ui::{
    Align, Color, Content, Icon, ImageContent, InteractionEvent, Layout, Node, Palette, Rect,
    Shape, Size, Spacing, Style, TextContent,
};

/// How long the panel plays its "out" animation before the popup closes
pub const DISMISS_DELAY: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PopupError {
    #[error("use_popup must be called within PopupProvider::provide")]
    OutsideProvider,
}

/// Visibility of the popup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PopupPhase {
    #[default]
    Closed,
    Open,
    /// Dismissal animation running since the given instant
    Closing { since: Instant },
}

#[derive(Debug, Clone)]
pub struct PopupStyle {
    /// Color of the layer drawn over the page while open
    pub smoke_color: Color,
    pub panel_color: Color,
    pub text_color: Color,
    pub panel_padding: Spacing,
    pub panel_radius: f32,
    pub header_gap: f32,
    pub icon_size: f32,
    pub font_size: f32,
    pub button: ButtonStyle,
}

impl PopupStyle {
    pub fn from_palette(palette: &Palette) -> Self {
        Self {
            smoke_color: palette.crust.with_alpha(0.6),
            panel_color: palette.mantle,
            text_color: palette.text,
            panel_padding: Spacing::all(16.0),
            panel_radius: 12.0,
            header_gap: 8.0,
            icon_size: 24.0,
            font_size: 18.0,
            button: ButtonStyle::icon(palette),
        }
    }
}

impl Default for PopupStyle {
    fn default() -> Self {
        Self::from_palette(&Palette::mocha())
    }
}

type BackHandler = Rc<dyn Fn()>;

struct PopupShared {
    icon_src: String,
    icon_text: String,
    item: Option<Node>,
    phase: PopupPhase,
    back: Option<BackHandler>,
    back_button: Button,
    close_button: Button,
}

impl PopupShared {
    fn close_at(&mut self, now: Instant) {
        if self.phase == PopupPhase::Open {
            log::debug!("popup closing");
            self.phase = PopupPhase::Closing { since: now };
        }
    }
}

thread_local! {
    static PROVIDERS: RefCell<Vec<Rc<RefCell<PopupShared>>>> = const { RefCell::new(Vec::new()) };
}

/// Pops the provider installed by [`PopupProvider::provide`], even on unwind
struct ProviderScope;

impl Drop for ProviderScope {
    fn drop(&mut self) {
        PROVIDERS.with(|providers| {
            providers.borrow_mut().pop();
        });
    }
}

/// Access the innermost provider installed on this thread
pub fn use_popup() -> Result<PopupContext, PopupError> {
    PROVIDERS.with(|providers| {
        providers
            .borrow()
            .last()
            .cloned()
            .map(|shared| PopupContext { shared })
            .ok_or(PopupError::OutsideProvider)
    })
}

/// Owner of the popup item and visibility, rendered above the page
#[derive(Clone)]
pub struct PopupProvider {
    shared: Rc<RefCell<PopupShared>>,
    style: PopupStyle,
}

impl PopupProvider {
    /// Provider whose panel header shows `icon_src` and `icon_text`
    pub fn new(icon_src: impl Into<String>, icon_text: impl Into<String>) -> Self {
        Self {
            shared: Rc::new(RefCell::new(PopupShared {
                icon_src: icon_src.into(),
                icon_text: icon_text.into(),
                item: None,
                phase: PopupPhase::Closed,
                back: None,
                back_button: Button::new("popup_back"),
                close_button: Button::new("popup_close"),
            })),
            style: PopupStyle::default(),
        }
    }

    pub fn with_style(mut self, style: PopupStyle) -> Self {
        self.style = style;
        self
    }

    /// Show a back button in the header that runs `handler` when clicked
    pub fn with_back(self, handler: impl Fn() + 'static) -> Self {
        self.context().set_back(handler);
        self
    }

    /// Run `scope` with this provider reachable through [`use_popup`]
    pub fn provide<R>(&self, scope: impl FnOnce() -> R) -> R {
        PROVIDERS.with(|providers| providers.borrow_mut().push(Rc::clone(&self.shared)));
        let _scope = ProviderScope;
        scope()
    }

    pub fn context(&self) -> PopupContext {
        PopupContext {
            shared: Rc::clone(&self.shared),
        }
    }

    pub fn phase(&self) -> PopupPhase {
        self.shared.borrow().phase
    }

    /// "Hide-all" marker: true while the popup covers the page
    pub fn hides_background(&self) -> bool {
        self.phase() != PopupPhase::Closed
    }

    /// Finish a pending dismissal once [`DISMISS_DELAY`] has elapsed
    ///
    /// Returns `true` if the popup closed during this call.
    pub fn update(&self, now: Instant) -> bool {
        let mut shared = self.shared.borrow_mut();
        match shared.phase {
            PopupPhase::Closing { since } if now.saturating_duration_since(since) >= DISMISS_DELAY => {
                shared.phase = PopupPhase::Closed;
                log::debug!("popup closed");
                true
            }
            _ => false,
        }
    }

    /// Header button bounds in window coordinates, set by the host after layout
    pub fn set_button_bounds(&self, close: Rect, back: Option<Rect>) {
        let mut shared = self.shared.borrow_mut();
        shared.close_button.set_bounds(close);
        shared.back_button.set_bounds(back.unwrap_or_default());
    }

    /// Route pointer events to the header buttons; returns `true` on a click
    pub fn handle_event(&self, event: &InteractionEvent) -> bool {
        self.handle_event_at(event, Instant::now())
    }

    fn handle_event_at(&self, event: &InteractionEvent, now: Instant) -> bool {
        let back = {
            let mut shared = self.shared.borrow_mut();
            if shared.phase != PopupPhase::Open {
                return false;
            }

            if shared.close_button.handle_event(event) {
                shared.close_at(now);
                return true;
            }
            if shared.back.is_none() || !shared.back_button.handle_event(event) {
                return false;
            }
            shared.back.clone()
        };

        if let Some(back) = back {
            back();
        }
        true
    }

    /// Smoke layer with the panel while visible, an empty layer while closed
    pub fn node(&self) -> Node {
        let shared = self.shared.borrow();
        let smoke = Node::new()
            .with_id("smoke_layer")
            .with_width(Size::Fill)
            .with_height(Size::Fill)
            .with_layout_direction(Layout::Vertical)
            .with_align(Align::Center);

        if shared.phase == PopupPhase::Closed {
            return smoke;
        }

        let style = &self.style;
        let mut header = Vec::new();
        if shared.back.is_some() {
            header.push(icon_button(
                "popup_back",
                Icon::ArrowLeft,
                shared.back_button.state(),
                &style.button,
            ));
        }
        header.push(
            Node::new()
                .with_width(Size::Fill)
                .with_layout_direction(Layout::Horizontal)
                .with_align(Align::Center)
                .with_gap(style.header_gap)
                .with_children(vec![
                    Node::new()
                        .with_size(style.icon_size, style.icon_size)
                        .with_content(Content::Image(ImageContent {
                            src: shared.icon_src.clone(),
                            alt: format!("{} Icon", shared.icon_text),
                        })),
                    Node::new().with_content(Content::Text(
                        TextContent::new(shared.icon_text.clone())
                            .with_font_size(style.font_size)
                            .with_color(style.text_color),
                    )),
                ]),
        );
        header.push(icon_button(
            "popup_close",
            Icon::Close,
            shared.close_button.state(),
            &style.button,
        ));

        let mut container = Node::new()
            .with_id("popup_container")
            .with_width(Size::Fill)
            .with_align(Align::Center);
        if let Some(item) = &shared.item {
            container = container.with_child(item.clone());
        }

        let mut panel = Node::new()
            .with_id("popup")
            .with_width(Size::FitContent)
            .with_layout_direction(Layout::Vertical)
            .with_padding(style.panel_padding)
            .with_gap(style.header_gap)
            .with_shape(Shape::rounded(style.panel_color, style.panel_radius))
            .with_children(vec![
                Node::new()
                    .with_width(Size::Fill)
                    .with_layout_direction(Layout::Horizontal)
                    .with_align(Align::Center)
                    .with_children(header),
                container,
            ]);
        panel = match shared.phase {
            PopupPhase::Closing { .. } => panel.with_style(Style {
                fill_color: Some(style.panel_color),
                opacity: Some(0.0),
                ..Default::default()
            }),
            _ => panel.with_style(Style::fill(style.panel_color)),
        };

        smoke
            .with_shape(Shape::rounded(style.smoke_color, 0.0))
            .with_style(Style::fill(style.smoke_color))
            .with_child(panel)
    }
}

impl fmt::Debug for PopupProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shared = self.shared.borrow();
        f.debug_struct("PopupProvider")
            .field("icon_text", &shared.icon_text)
            .field("phase", &shared.phase)
            .field("has_item", &shared.item.is_some())
            .finish()
    }
}

/// Handle to the nearest provider, obtained from [`use_popup`]
#[derive(Clone)]
pub struct PopupContext {
    shared: Rc<RefCell<PopupShared>>,
}

impl PopupContext {
    pub fn set_item(&self, item: Node) {
        self.shared.borrow_mut().item = Some(item);
    }

    pub fn clear_item(&self) {
        self.shared.borrow_mut().item = None;
    }

    pub fn item(&self) -> Option<Node> {
        self.shared.borrow().item.clone()
    }

    /// Show the popup; reopening during dismissal cancels it
    pub fn open(&self) {
        let mut shared = self.shared.borrow_mut();
        if shared.phase != PopupPhase::Open {
            log::debug!("popup opened");
            shared.phase = PopupPhase::Open;
        }
    }

    /// Start the dismissal animation
    pub fn close(&self) {
        self.close_at(Instant::now());
    }

    pub fn close_at(&self, now: Instant) {
        self.shared.borrow_mut().close_at(now);
    }

    /// Whether the popup is visible, including while it animates out
    pub fn is_open(&self) -> bool {
        self.shared.borrow().phase != PopupPhase::Closed
    }

    pub fn phase(&self) -> PopupPhase {
        self.shared.borrow().phase
    }

    pub fn set_back(&self, handler: impl Fn() + 'static) {
        self.shared.borrow_mut().back = Some(Rc::new(handler));
    }

    pub fn clear_back(&self) {
        self.shared.borrow_mut().back = None;
    }
}

impl fmt::Debug for PopupContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PopupContext")
            .field("phase", &self.phase())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use xellanix_ui::{Point, PointerKind};

    fn click_at(provider: &PopupProvider, x: f32, y: f32, now: Instant) -> bool {
        let position = Point::new(x, y);
        provider.handle_event_at(
            &InteractionEvent::PointerDown {
                pointer: PointerKind::Mouse,
                position,
            },
            now,
        );
        provider.handle_event_at(
            &InteractionEvent::PointerUp {
                pointer: PointerKind::Mouse,
                position,
            },
            now,
        )
    }

    #[test]
    fn test_use_popup_outside_provider_fails() {
        assert_eq!(use_popup().err(), Some(PopupError::OutsideProvider));
    }

    #[test]
    fn test_use_popup_inside_provider() {
        let provider = PopupProvider::new("logo.png", "Xellanix");
        provider.provide(|| {
            let popup = use_popup().expect("inside provider");
            popup.set_item(Node::new().with_id("settings"));
            popup.open();
        });

        assert!(provider.hides_background());
        assert!(provider.node().find("settings").is_some());
        assert!(use_popup().is_err());
    }

    #[test]
    fn test_nested_providers_resolve_innermost() {
        let outer = PopupProvider::new("a.png", "Outer");
        let inner = PopupProvider::new("b.png", "Inner");

        outer.provide(|| {
            inner.provide(|| {
                if let Ok(popup) = use_popup() {
                    popup.open();
                }
            });
            assert_eq!(use_popup().map(|popup| popup.is_open()), Ok(false));
        });
        assert!(inner.context().is_open());
        assert!(!outer.context().is_open());
    }

    #[test]
    fn test_scope_restored_after_panic() {
        let provider = PopupProvider::new("a.png", "A");
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            provider.provide(|| panic!("boom"));
        }));
        assert!(result.is_err());
        assert!(use_popup().is_err());
    }

    #[test]
    fn test_close_waits_for_dismiss_delay() {
        let provider = PopupProvider::new("a.png", "A");
        let popup = provider.context();
        let start = Instant::now();

        popup.open();
        popup.close_at(start);
        assert!(matches!(popup.phase(), PopupPhase::Closing { .. }));
        assert!(provider.hides_background());

        assert!(!provider.update(start + Duration::from_millis(299)));
        assert!(popup.is_open());
        assert!(provider.update(start + DISMISS_DELAY));
        assert!(!provider.hides_background());
        assert!(provider.node().children().is_empty());
    }

    #[test]
    fn test_reopen_cancels_dismissal() {
        let provider = PopupProvider::new("a.png", "A");
        let popup = provider.context();
        let start = Instant::now();

        popup.open();
        popup.close_at(start);
        popup.open();
        assert!(!provider.update(start + DISMISS_DELAY));
        assert_eq!(popup.phase(), PopupPhase::Open);
    }

    #[test]
    fn test_header_buttons() {
        let backs = Rc::new(Cell::new(0));
        let counter = Rc::clone(&backs);
        let provider =
            PopupProvider::new("a.png", "A").with_back(move || counter.set(counter.get() + 1));
        provider.set_button_bounds(
            Rect::from_min_size([200.0, 0.0], [32.0, 32.0]),
            Some(Rect::from_min_size([0.0, 0.0], [32.0, 32.0])),
        );
        let popup = provider.context();
        let now = Instant::now();

        // Closed popups ignore clicks
        assert!(!click_at(&provider, 10.0, 10.0, now));

        popup.open();
        assert!(provider.node().find("popup_back").is_some());
        assert!(click_at(&provider, 10.0, 10.0, now));
        assert_eq!(backs.get(), 1);

        assert!(click_at(&provider, 210.0, 10.0, now));
        assert_eq!(popup.phase(), PopupPhase::Closing { since: now });
    }
}
