//! The wheel picker widget.

use super::item::{DisplayRow, WheelItem};
use super::layout::{derive_layout, DerivedLayout, RowMetrics};
use super::mapper::{
    offset_extent, offset_for_index, real_index_for_offset, snap_offset, ScrollCommand,
};
use super::padding::real_index_of;
use super::row::{paint_row, row_props, RenderRowFn};
use super::selection::{SelectionChanged, SelectionState, Transition};
use super::SENTINEL_ROWS;
use crate::label::escape_html;
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::fmt;
use std::sync::Arc;
use std::time::Instant;
use wheelpick_core::{
    request_impact, AccessibleRole, Brick, BrickAssertion, BrickVerification, Canvas, Color,
    Constraints, Event, HapticFeedback, ImpactStyle, Key, LayoutResult, MouseButton, NoopHaptics,
    Point, Rect, Size, TouchId, TypeId, Widget,
};

/// Selection callback.
pub type OnChangeFn = Box<dyn Fn(&SelectionChanged) + Send + Sync>;

/// Caller hook run after the picker's own touch-start handling.
pub type TouchStartFn = Box<dyn Fn(Point) + Send + Sync>;

const ASSERTIONS: &[BrickAssertion] = &[
    BrickAssertion::TextVisible,
    BrickAssertion::ContrastRatio(4.5),
    BrickAssertion::MaxLatencyMs(16),
];

/// Finger travel below which a touch counts as a tap.
const TAP_SLOP: f32 = 4.0;

/// Width of the scroll indicator thumb.
const INDICATOR_WIDTH: f32 = 2.0;

/// Horizontal sizing of the wheel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WheelWidth {
    /// Fixed pixel width
    Fixed(f32),
    /// Take the widest width the parent allows
    Fill,
}

impl Default for WheelWidth {
    fn default() -> Self {
        Self::Fixed(150.0)
    }
}

/// Border drawn on the overlay edges that frame the centred row.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SelectedStyle {
    /// Border color, black when unset
    pub border_color: Option<Color>,
    /// Border width; zero draws nothing
    pub border_width: f32,
}

/// Host platform, which sets how strongly the edges fade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// iOS
    Ios,
    /// Android
    Android,
    /// Web
    #[default]
    Web,
}

impl Platform {
    /// Alpha of the background at the inner end of each gradient.
    #[must_use]
    pub const fn gradient_alpha(self) -> f32 {
        match self {
            Self::Ios => 0.2,
            Self::Android | Self::Web => 0.4,
        }
    }
}

/// Options forwarded to the scroll surface.
pub struct ScrollOptions {
    /// Settle on row boundaries after a drag or wheel scroll
    pub snap: bool,
    /// Draw a scroll position indicator
    pub shows_indicator: bool,
    /// Momentum deceleration rate, for hosts that animate flings
    pub deceleration: f32,
    /// Extra touch-start hook
    pub on_touch_start: Option<TouchStartFn>,
}

impl ScrollOptions {
    /// Default surface options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable snapping.
    #[must_use]
    pub const fn snap(mut self, snap: bool) -> Self {
        self.snap = snap;
        self
    }

    /// Show or hide the indicator.
    #[must_use]
    pub const fn shows_indicator(mut self, shows: bool) -> Self {
        self.shows_indicator = shows;
        self
    }

    /// Set the deceleration rate.
    #[must_use]
    pub const fn deceleration(mut self, rate: f32) -> Self {
        self.deceleration = rate;
        self
    }

    /// Add a touch-start hook.
    #[must_use]
    pub fn on_touch_start(mut self, hook: impl Fn(Point) + Send + Sync + 'static) -> Self {
        self.on_touch_start = Some(Box::new(hook));
        self
    }
}

impl Default for ScrollOptions {
    fn default() -> Self {
        Self {
            snap: true,
            shows_indicator: false,
            deceleration: 0.998,
            on_touch_start: None,
        }
    }
}

impl fmt::Debug for ScrollOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollOptions")
            .field("snap", &self.snap)
            .field("shows_indicator", &self.shows_indicator)
            .field("deceleration", &self.deceleration)
            .field("on_touch_start", &self.on_touch_start.is_some())
            .finish()
    }
}

/// A drag in progress.
#[derive(Debug, Clone, Copy)]
struct Drag {
    finger: TouchId,
    origin: Point,
    origin_offset: f32,
    travel: f32,
}

/// Snapping wheel that centres one item and reports selection changes.
///
/// Construct with the builder methods; the first [`Widget::layout`] mounts
/// the wheel. Offsets follow the centre-line convention described in the
/// [module docs](super).
pub struct WheelPicker {
    items: Vec<WheelItem>,
    height: Option<f32>,
    width: WheelWidth,
    background_color: Color,
    selected_style: SelectedStyle,
    platform: Platform,
    selected_index_prop: Option<usize>,
    initial_selected_index: Option<usize>,
    scroll_options: ScrollOptions,
    on_change: Option<OnChangeFn>,
    render_row: Option<RenderRowFn>,
    haptic_engine: Arc<dyn HapticFeedback>,
    test_id_value: Option<String>,
    accessible_name_value: Option<String>,

    layout: DerivedLayout,
    selection: SelectionState,
    scroll_offset: f32,
    drag: Option<Drag>,
    pending_scrolls: Vec<ScrollCommand>,
    mounted: bool,
    bounds: Rect,
}

impl Default for WheelPicker {
    fn default() -> Self {
        Self::new()
    }
}

impl WheelPicker {
    /// Create an empty picker.
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            height: None,
            width: WheelWidth::default(),
            background_color: Color::WHITE,
            selected_style: SelectedStyle::default(),
            platform: Platform::default(),
            selected_index_prop: None,
            initial_selected_index: None,
            scroll_options: ScrollOptions::default(),
            on_change: None,
            render_row: None,
            haptic_engine: Arc::new(NoopHaptics),
            test_id_value: None,
            accessible_name_value: None,
            layout: DerivedLayout::default(),
            selection: SelectionState::new(false),
            scroll_offset: 0.0,
            drag: None,
            pending_scrolls: Vec::new(),
            mounted: false,
            bounds: Rect::default(),
        }
    }

    // =========================================================================
    // Builder
    // =========================================================================

    /// Set the items.
    #[must_use]
    pub fn items(mut self, items: impl IntoIterator<Item = WheelItem>) -> Self {
        self.items = items.into_iter().collect();
        self
    }

    /// Set an explicit viewport height.
    #[must_use]
    pub const fn height(mut self, height: f32) -> Self {
        self.height = Some(height);
        self
    }

    /// Set the width.
    #[must_use]
    pub const fn width(mut self, width: WheelWidth) -> Self {
        self.width = width;
        self
    }

    /// Set the background color. Its alpha is ignored.
    #[must_use]
    pub const fn background_color(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    /// Control the selection from outside.
    ///
    /// Pickers built without this stay uncontrolled: mounting centres
    /// `initial_selected_index` (or item 0) but reports nothing until the
    /// selection moves. A controlled picker reports its index on mount even
    /// when that index is 0.
    #[must_use]
    pub const fn selected_index(mut self, index: usize) -> Self {
        self.selected_index_prop = Some(index);
        self
    }

    /// Item to centre on first layout.
    #[must_use]
    pub const fn initial_selected_index(mut self, index: usize) -> Self {
        self.initial_selected_index = Some(index);
        self
    }

    /// Enable haptic pulses on touch-driven selection changes.
    #[must_use]
    pub fn haptics(mut self, enabled: bool) -> Self {
        self.selection.set_haptics(enabled);
        self
    }

    /// Set the haptic engine.
    #[must_use]
    pub fn haptic_engine(mut self, engine: Arc<dyn HapticFeedback>) -> Self {
        self.haptic_engine = engine;
        self
    }

    /// Set the selection callback.
    #[must_use]
    pub fn on_change(mut self, callback: impl Fn(&SelectionChanged) + Send + Sync + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    /// Replace the default row content.
    #[must_use]
    pub fn render_row(
        mut self,
        render: impl Fn(&super::RowRenderProps, Rect, &mut dyn Canvas) + Send + Sync + 'static,
    ) -> Self {
        self.render_row = Some(Box::new(render));
        self
    }

    /// Set the border framing the centred row.
    #[must_use]
    pub const fn selected_style(mut self, style: SelectedStyle) -> Self {
        self.selected_style = style;
        self
    }

    /// Set the host platform.
    #[must_use]
    pub const fn platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// Set the scroll surface options.
    #[must_use]
    pub fn scroll_options(mut self, options: ScrollOptions) -> Self {
        self.scroll_options = options;
        self
    }

    /// Set the test ID.
    #[must_use]
    pub fn with_test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Set the accessible name.
    #[must_use]
    pub fn with_accessible_name(mut self, name: impl Into<String>) -> Self {
        self.accessible_name_value = Some(name.into());
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The caller's items.
    #[must_use]
    pub fn item_list(&self) -> &[WheelItem] {
        &self.items
    }

    /// Padded rows as currently laid out.
    #[must_use]
    pub fn display_sequence(&self) -> &[DisplayRow] {
        &self.layout.display
    }

    /// Height of one row.
    #[must_use]
    pub const fn row_height(&self) -> f32 {
        self.layout.metrics.row_height
    }

    /// Height of the visible window.
    #[must_use]
    pub const fn viewport_height(&self) -> f32 {
        self.layout.metrics.viewport_height
    }

    /// Currently selected real index.
    #[must_use]
    pub const fn selected_index_value(&self) -> usize {
        self.selection.selected_index()
    }

    /// Currently selected item, `None` when there are no items.
    #[must_use]
    pub fn selected_item(&self) -> Option<&WheelItem> {
        self.items.get(self.selection.selected_index())
    }

    /// Current centre-line scroll offset.
    #[must_use]
    pub const fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    /// Whether the first layout has happened.
    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Forwarded scroll surface options.
    #[must_use]
    pub const fn surface_options(&self) -> &ScrollOptions {
        &self.scroll_options
    }

    /// Background with its alpha forced opaque.
    #[must_use]
    pub fn opaque_background(&self) -> Color {
        self.background_color.with_alpha(1.0)
    }

    /// Text color used on every row.
    #[must_use]
    pub fn foreground(&self) -> Color {
        self.opaque_background().adaptive_foreground()
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Derive the layout, centre the initial item and sync the external
    /// selection. Runs once; later calls do nothing until [`Self::unmount`].
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        self.selection.reset();
        self.pending_scrolls.clear();
        self.drag = None;
        self.layout = derive_layout(&self.items, self.height);
        if self.layout.is_empty() {
            self.scroll_offset = 0.0;
            return;
        }

        let start = self
            .initial_selected_index
            .filter(|&index| index < self.items.len())
            .unwrap_or(0);
        self.scroll_offset = offset_for_index(start, self.row_height());
        self.report_offset();

        let sync = self
            .selection
            .sync_external(self.selected_index_prop, &self.items, true);
        self.apply(sync);
    }

    /// Drop all runtime state.
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.selection.reset();
        self.layout = DerivedLayout::default();
        self.scroll_offset = 0.0;
        self.drag = None;
        self.pending_scrolls.clear();
    }

    /// Replace the items and re-derive the layout.
    pub fn set_items(&mut self, items: Vec<WheelItem>) {
        self.items = items;
        if !self.mounted {
            return;
        }
        self.layout = derive_layout(&self.items, self.height);
        if self.layout.is_empty() {
            self.scroll_offset = 0.0;
            return;
        }
        self.selection.clamp_to(self.items.len());
        self.scroll_offset = offset_for_index(self.selection.selected_index(), self.row_height());

        let sync = self
            .selection
            .sync_external(self.selected_index_prop, &self.items, true);
        self.apply(sync);
    }

    /// Change the explicit height and re-derive the layout.
    pub fn set_height(&mut self, height: Option<f32>) {
        self.height = height;
        if !self.mounted {
            return;
        }
        self.layout = derive_layout(&self.items, self.height);
        if !self.layout.is_empty() {
            self.scroll_offset =
                offset_for_index(self.selection.selected_index(), self.row_height());
        }
    }

    /// Update the externally controlled selection.
    pub fn set_selected_index(&mut self, index: Option<usize>) {
        self.selected_index_prop = index;
        if !self.mounted {
            return;
        }
        let sync = self.selection.sync_external(index, &self.items, false);
        self.apply(sync);
    }

    /// Enable or disable haptic pulses.
    pub fn set_haptics(&mut self, enabled: bool) {
        self.selection.set_haptics(enabled);
    }

    // =========================================================================
    // Scroll surface
    // =========================================================================

    /// The surface settled at centre-line offset `y`.
    pub fn on_scroll_offset(&mut self, y: f32) -> Option<SelectionChanged> {
        self.scroll_offset = y;
        self.report_offset()
    }

    /// A touch began at `position`.
    pub fn touch_started(&mut self, position: Point) {
        self.selection.touch_started();
        if let Some(hook) = &self.scroll_options.on_touch_start {
            hook(position);
        }
    }

    /// Centre real item `index`; out-of-range indices are ignored.
    pub fn scroll_to_index(&mut self, index: usize) -> Option<SelectionChanged> {
        if index >= self.items.len() {
            log::trace!("scroll to {index} ignored: {} items", self.items.len());
            return None;
        }
        let command = ScrollCommand::animated(index);
        self.scroll_offset = command.target_offset(self.row_height());
        self.pending_scrolls.push(command);
        self.report_offset()
    }

    /// Drain scroll commands issued since the last call.
    pub fn take_scroll_commands(&mut self) -> Vec<ScrollCommand> {
        std::mem::take(&mut self.pending_scrolls)
    }

    fn report_offset(&mut self) -> Option<SelectionChanged> {
        let index = real_index_for_offset(self.scroll_offset, self.row_height(), self.items.len())?;
        let transition = self.selection.set_selection(index, &self.items);
        self.apply(transition)
    }

    fn apply(&mut self, transition: Transition) -> Option<SelectionChanged> {
        if transition.haptic {
            request_impact(self.haptic_engine.as_ref(), ImpactStyle::Light);
        }
        if let Some(command) = transition.scroll {
            self.scroll_offset = command.target_offset(self.row_height());
            self.pending_scrolls.push(command);
        }
        let changed = transition.changed?;
        log::debug!("wheel selected {} ({})", changed.index, changed.item.label);
        if let Some(callback) = &self.on_change {
            callback(&changed);
        }
        Some(changed)
    }

    fn clamp_offset(&self, offset: f32) -> f32 {
        let (min, max) = offset_extent(self.row_height(), self.layout.display.len());
        offset.clamp(min, max.max(min))
    }

    fn settle(&mut self) -> Option<SelectionChanged> {
        if self.scroll_options.snap {
            self.scroll_offset =
                snap_offset(self.scroll_offset, self.row_height(), self.items.len());
        }
        self.report_offset()
    }

    fn scroll_by(&mut self, delta: f32) -> Option<SelectionChanged> {
        self.scroll_offset = self.clamp_offset(self.scroll_offset + delta);
        self.settle()
    }

    /// Top of the centred slot.
    fn center_top(&self) -> f32 {
        self.bounds.y + SENTINEL_ROWS as f32 * self.row_height()
    }

    fn row_rect(&self, display_index: usize) -> Rect {
        let h = self.row_height();
        let top = self.center_top() + display_index as f32 * h - self.scroll_offset;
        Rect::new(self.bounds.x, top, self.bounds.width, h)
    }

    fn row_at(&self, point: Point) -> Option<usize> {
        if !self.bounds.contains_point(&point) {
            return None;
        }
        let position = (point.y - self.center_top() + self.scroll_offset) / self.row_height();
        if position < 0.0 {
            return None;
        }
        let display_index = position.floor() as usize;
        (display_index < self.layout.display.len()).then_some(display_index)
    }

    fn tap(&mut self, point: Point) -> Option<SelectionChanged> {
        let display_index = self.row_at(point)?;
        let index = real_index_of(display_index, self.items.len())?;
        self.scroll_to_index(index)
    }

    fn key(&mut self, key: Key) -> Option<SelectionChanged> {
        let current = self.selection.selected_index();
        let last = self.items.len().checked_sub(1)?;
        let target = match key {
            Key::Up => current.saturating_sub(1),
            Key::Down => (current + 1).min(last),
            Key::Home => 0,
            Key::End => last,
            Key::Enter | Key::Escape => return None,
        };
        self.scroll_to_index(target)
    }

    fn paint_indicator(&self, canvas: &mut dyn Canvas) {
        let (_, max) = offset_extent(self.row_height(), self.layout.display.len());
        if max <= 0.0 {
            return;
        }
        let content = self.layout.display.len() as f32 * self.row_height();
        let thumb = (self.bounds.height * self.viewport_height() / content).min(self.bounds.height);
        let progress = (self.scroll_offset / max).clamp(0.0, 1.0);
        let y = self.bounds.y + (self.bounds.height - thumb) * progress;
        canvas.fill_rect(
            Rect::new(self.bounds.right() - INDICATOR_WIDTH, y, INDICATOR_WIDTH, thumb),
            self.foreground().with_alpha(0.4),
        );
    }
}

impl fmt::Debug for WheelPicker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WheelPicker")
            .field("item_count", &self.items.len())
            .field("height", &self.height)
            .field("width", &self.width)
            .field("background_color", &self.background_color)
            .field("platform", &self.platform)
            .field("selected_index", &self.selection.selected_index())
            .field("scroll_offset", &self.scroll_offset)
            .field("mounted", &self.mounted)
            .field("custom_rows", &self.render_row.is_some())
            .finish_non_exhaustive()
    }
}

impl Widget for WheelPicker {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        if self.items.is_empty() {
            return Size::ZERO;
        }
        let width = match self.width {
            WheelWidth::Fixed(width) => width,
            WheelWidth::Fill => constraints.biggest_width(),
        };
        let viewport = RowMetrics::for_height(self.height).viewport_height;
        constraints.constrain(Size::new(width, viewport))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        self.mount();
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        if self.layout.is_empty() {
            return;
        }
        let background = self.opaque_background();
        let base_font_size = self.layout.metrics.base_font_size();
        let selected = self.selection.selected_index();

        canvas.push_clip(self.bounds);
        canvas.fill_rect(self.bounds, background);

        for (display_index, row) in self.layout.display.iter().enumerate() {
            let rect = self.row_rect(display_index);
            if !rect.intersects(&self.bounds) {
                continue;
            }
            let props = row_props(row, display_index, selected, base_font_size, background);
            paint_row(canvas, rect, background, &props, self.render_row.as_ref());
        }

        let faded = background.with_alpha(self.platform.gradient_alpha());
        let overlay = self.layout.metrics.overlay_height();
        let top = self.bounds.top_band(overlay);
        let bottom = self.bounds.bottom_band(overlay);
        canvas.fill_vertical_gradient(top, background, faded);
        canvas.fill_vertical_gradient(bottom, faded, background);

        let style = self.selected_style;
        if style.border_width > 0.0 {
            let color = style.border_color.unwrap_or(Color::BLACK);
            canvas.draw_line(
                Point::new(top.x, top.bottom()),
                Point::new(top.right(), top.bottom()),
                color,
                style.border_width,
            );
            canvas.draw_line(
                Point::new(bottom.x, bottom.y),
                Point::new(bottom.right(), bottom.y),
                color,
                style.border_width,
            );
        }

        if self.scroll_options.shows_indicator {
            self.paint_indicator(canvas);
        }

        canvas.pop_clip();
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        if !self.mounted || self.layout.is_empty() {
            return None;
        }

        let changed = match event {
            Event::TouchStart { id, position } => {
                if self.drag.is_some() {
                    return None;
                }
                self.touch_started(*position);
                self.drag = Some(Drag {
                    finger: *id,
                    origin: *position,
                    origin_offset: self.scroll_offset,
                    travel: 0.0,
                });
                None
            }
            Event::TouchMove { id, position } => {
                let mut drag = self.drag.filter(|d| d.finger == *id)?;
                let dy = drag.origin.dy(position);
                drag.travel = drag.travel.max(dy.abs());
                self.drag = Some(drag);
                self.scroll_offset = self.clamp_offset(drag.origin_offset - dy);
                self.report_offset()
            }
            Event::TouchEnd { id, position } => {
                let drag = self.drag.filter(|d| d.finger == *id)?;
                self.drag = None;
                let travel = drag.travel.max(drag.origin.dy(position).abs());
                if travel < TAP_SLOP {
                    self.tap(*position)
                } else {
                    self.settle()
                }
            }
            Event::TouchCancel { id } => {
                self.drag.filter(|d| d.finger == *id)?;
                self.drag = None;
                self.settle()
            }
            Event::GestureTap { position } => {
                self.selection.touch_started();
                self.tap(*position)
            }
            Event::MouseDown {
                position,
                button: MouseButton::Left,
            } => {
                self.selection.clear_user_gesture();
                self.tap(*position)
            }
            Event::Scroll { delta_y, .. } => {
                self.selection.clear_user_gesture();
                self.scroll_by(delta_y * self.row_height())
            }
            Event::KeyDown { key } => {
                self.selection.clear_user_gesture();
                self.key(*key)
            }
            _ => None,
        };

        changed.map(|c| Box::new(c) as Box<dyn Any + Send>)
    }

    fn is_interactive(&self) -> bool {
        !self.items.is_empty()
    }

    fn accessible_name(&self) -> Option<&str> {
        self.accessible_name_value.as_deref()
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::ListBox
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}

impl Brick for WheelPicker {
    fn brick_name(&self) -> &'static str {
        "WheelPicker"
    }

    fn assertions(&self) -> &[BrickAssertion] {
        ASSERTIONS
    }

    fn verify(&self) -> BrickVerification {
        let started = Instant::now();
        let mut passed = Vec::new();
        let mut failed = Vec::new();

        if self.items.iter().any(|item| !item.label.is_empty()) {
            passed.push(BrickAssertion::TextVisible);
        } else {
            failed.push((BrickAssertion::TextVisible, "no visible labels".into()));
        }

        let ratio = self.foreground().contrast_ratio(&self.opaque_background());
        if ratio >= 4.5 {
            passed.push(BrickAssertion::ContrastRatio(4.5));
        } else {
            failed.push((
                BrickAssertion::ContrastRatio(4.5),
                format!("contrast {ratio:.2}:1 is below 4.5:1"),
            ));
        }

        passed.push(BrickAssertion::MaxLatencyMs(16));

        BrickVerification {
            passed,
            failed,
            verification_time: started.elapsed(),
        }
    }

    fn to_html(&self) -> String {
        let test_id = self
            .test_id_value
            .as_deref()
            .map(|id| format!(r#" data-testid="{}""#, escape_html(id)))
            .unwrap_or_default();
        let label = self
            .accessible_name_value
            .as_deref()
            .map(|name| format!(r#" aria-label="{}""#, escape_html(name)))
            .unwrap_or_default();
        let selected = self.selection.selected_index();
        let options: String = self
            .items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                format!(
                    r#"<li role="option" aria-selected="{}">{}</li>"#,
                    index == selected,
                    escape_html(&item.label)
                )
            })
            .collect();
        format!(r#"<ul class="brick-wheel-picker" role="listbox"{test_id}{label}>{options}</ul>"#)
    }

    fn to_css(&self) -> String {
        let width = match self.width {
            WheelWidth::Fixed(width) => format!("{width}px"),
            WheelWidth::Fill => "100%".to_string(),
        };
        let metrics = RowMetrics::for_height(self.height);
        format!(
            ".brick-wheel-picker {{ width: {width}; height: {}px; background-color: {}; color: {}; overflow-y: scroll; scroll-snap-type: y mandatory; }} \
             .brick-wheel-picker li {{ height: {}px; text-align: center; scroll-snap-align: center; }}",
            metrics.viewport_height,
            self.opaque_background().to_hex(),
            self.foreground().to_hex(),
            metrics.row_height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use wheelpick_core::{DrawCommand, HapticError, RecordingCanvas, RecordingHaptics};

    fn abc() -> Vec<WheelItem> {
        vec![
            WheelItem::simple("A"),
            WheelItem::simple("B"),
            WheelItem::simple("C"),
        ]
    }

    fn recorder() -> (Arc<Mutex<Vec<SelectionChanged>>>, impl Fn(&SelectionChanged) + Send + Sync) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&log);
        (log, move |c: &SelectionChanged| sink.lock().unwrap().push(c.clone()))
    }

    fn mounted(picker: WheelPicker) -> WheelPicker {
        let mut picker = picker;
        picker.layout(Rect::new(0.0, 0.0, 150.0, 200.0));
        picker
    }

    fn indices(log: &Arc<Mutex<Vec<SelectionChanged>>>) -> Vec<usize> {
        log.lock().unwrap().iter().map(|c| c.index).collect()
    }

    fn touch_start(y: f32) -> Event {
        Event::TouchStart {
            id: TouchId::new(1),
            position: Point::new(75.0, y),
        }
    }

    fn touch_move(y: f32) -> Event {
        Event::TouchMove {
            id: TouchId::new(1),
            position: Point::new(75.0, y),
        }
    }

    fn touch_end(y: f32) -> Event {
        Event::TouchEnd {
            id: TouchId::new(1),
            position: Point::new(75.0, y),
        }
    }

    // =========================================================================
    // Mount
    // =========================================================================

    #[test]
    fn test_mount_derives_layout() {
        let picker = mounted(WheelPicker::new().items(abc()));
        assert!(picker.is_mounted());
        assert_eq!(picker.display_sequence().len(), 7);
        assert_eq!(picker.row_height(), 40.0);
        assert_eq!(picker.scroll_offset(), 80.0);
        assert_eq!(picker.selected_index_value(), 0);
    }

    #[test]
    fn test_mount_with_controlled_index_notifies() {
        let (log, callback) = recorder();
        let mut picker = mounted(
            WheelPicker::new()
                .items(abc())
                .selected_index(0)
                .on_change(callback),
        );
        let calls = log.lock().unwrap().clone();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].index, 0);
        assert_eq!(calls[0].item, WheelItem::simple("A"));
        assert_eq!(picker.take_scroll_commands(), vec![ScrollCommand::animated(0)]);
    }

    #[test]
    fn test_mount_uncontrolled_is_silent() {
        let (log, callback) = recorder();
        let mut picker = mounted(WheelPicker::new().items(abc()).on_change(callback));
        assert!(log.lock().unwrap().is_empty());
        assert!(picker.take_scroll_commands().is_empty());
    }

    #[test]
    fn test_initial_selected_index_positions_wheel() {
        let picker = mounted(WheelPicker::new().items(abc()).initial_selected_index(2));
        assert_eq!(picker.scroll_offset(), 160.0);
        assert_eq!(picker.selected_index_value(), 2);
    }

    #[test]
    fn test_initial_selected_index_out_of_range_starts_at_first() {
        let picker = mounted(WheelPicker::new().items(abc()).initial_selected_index(9));
        assert_eq!(picker.selected_index_value(), 0);
    }

    #[test]
    fn test_controlled_index_overrides_initial() {
        let picker = mounted(
            WheelPicker::new()
                .items(abc())
                .initial_selected_index(2)
                .selected_index(1),
        );
        assert_eq!(picker.selected_index_value(), 1);
        assert_eq!(picker.scroll_offset(), 120.0);
    }

    #[test]
    fn test_unmount_then_remount_notifies_again() {
        let (log, callback) = recorder();
        let mut picker = mounted(
            WheelPicker::new()
                .items(abc())
                .selected_index(2)
                .on_change(callback),
        );
        picker.unmount();
        assert!(!picker.is_mounted());
        assert!(picker.display_sequence().is_empty());
        picker.layout(Rect::new(0.0, 0.0, 150.0, 200.0));
        assert_eq!(indices(&log), vec![2, 2]);
    }

    // =========================================================================
    // Scroll offsets
    // =========================================================================

    #[test]
    fn test_offset_120_selects_b() {
        let (log, callback) = recorder();
        let mut picker = mounted(WheelPicker::new().items(abc()).on_change(callback));
        let changed = picker.on_scroll_offset(120.0);
        assert_eq!(changed.map(|c| c.item.label), Some("B".to_string()));
        assert_eq!(indices(&log), vec![1]);
    }

    #[test]
    fn test_sentinel_offset_is_ignored() {
        let mut picker = mounted(WheelPicker::new().items(abc()));
        picker.on_scroll_offset(160.0);
        assert!(picker.on_scroll_offset(40.0).is_none());
        assert_eq!(picker.selected_index_value(), 2);
    }

    #[test]
    fn test_haptic_only_for_touch_with_flag() {
        let engine = Arc::new(RecordingHaptics::new());
        let mut picker = mounted(
            WheelPicker::new()
                .items(abc())
                .haptics(true)
                .haptic_engine(engine.clone()),
        );
        picker.on_scroll_offset(120.0);
        assert_eq!(engine.count(), 0);

        picker.touch_started(Point::new(75.0, 100.0));
        picker.on_scroll_offset(160.0);
        assert_eq!(engine.pulses(), vec![ImpactStyle::Light]);

        picker.on_scroll_offset(160.0);
        assert_eq!(engine.count(), 1);
    }

    #[test]
    fn test_haptics_disabled_never_pulses() {
        let engine = Arc::new(RecordingHaptics::new());
        let mut picker = mounted(WheelPicker::new().items(abc()).haptic_engine(engine.clone()));
        picker.touch_started(Point::new(75.0, 100.0));
        picker.on_scroll_offset(120.0);
        assert_eq!(engine.count(), 0);
    }

    #[test]
    fn test_haptic_failure_does_not_block_selection() {
        let engine = Arc::new(RecordingHaptics::failing(HapticError::Unavailable));
        let mut picker = mounted(
            WheelPicker::new()
                .items(abc())
                .haptics(true)
                .haptic_engine(engine.clone()),
        );
        picker.touch_started(Point::new(75.0, 100.0));
        assert!(picker.on_scroll_offset(120.0).is_some());
        assert_eq!(picker.selected_index_value(), 1);
        assert_eq!(engine.count(), 1);
    }

    // =========================================================================
    // External selection
    // =========================================================================

    #[test]
    fn test_external_out_of_range_ignored() {
        let (log, callback) = recorder();
        let mut picker = mounted(WheelPicker::new().items(abc()).on_change(callback));
        picker.set_selected_index(Some(5));
        assert_eq!(picker.selected_index_value(), 0);
        assert!(log.lock().unwrap().is_empty());
        assert!(picker.take_scroll_commands().is_empty());
    }

    #[test]
    fn test_external_change_scrolls_without_haptic() {
        let engine = Arc::new(RecordingHaptics::new());
        let (log, callback) = recorder();
        let mut picker = mounted(
            WheelPicker::new()
                .items(abc())
                .haptics(true)
                .haptic_engine(engine.clone())
                .on_change(callback),
        );
        picker.touch_started(Point::new(75.0, 100.0));
        picker.set_selected_index(Some(2));
        assert_eq!(indices(&log), vec![2]);
        assert_eq!(picker.scroll_offset(), 160.0);
        assert_eq!(picker.take_scroll_commands(), vec![ScrollCommand::animated(2)]);
        assert_eq!(engine.count(), 0);
    }

    #[test]
    fn test_external_same_value_is_idempotent() {
        let (log, callback) = recorder();
        let mut picker = mounted(WheelPicker::new().items(abc()).on_change(callback));
        picker.set_selected_index(Some(1));
        picker.set_selected_index(Some(1));
        assert_eq!(indices(&log), vec![1]);
    }

    #[test]
    fn test_set_items_shrink_clamps_selection() {
        let mut picker = mounted(WheelPicker::new().items(abc()));
        picker.on_scroll_offset(160.0);
        picker.set_items(abc().into_iter().take(2).collect());
        assert_eq!(picker.selected_index_value(), 1);
        assert_eq!(picker.display_sequence().len(), 6);
        assert_eq!(picker.scroll_offset(), 120.0);
    }

    #[test]
    fn test_set_items_resyncs_controlled_index() {
        let (log, callback) = recorder();
        let mut picker = mounted(
            WheelPicker::new()
                .items(abc())
                .selected_index(1)
                .on_change(callback),
        );
        picker.set_items(vec![WheelItem::simple("X"), WheelItem::simple("Y")]);
        let calls = log.lock().unwrap().clone();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[1].item.label, "Y");
    }

    #[test]
    fn test_set_height_rescales() {
        let mut picker = mounted(WheelPicker::new().items(abc()));
        picker.on_scroll_offset(120.0);
        picker.set_height(Some(250.0));
        assert_eq!(picker.row_height(), 50.0);
        assert_eq!(picker.scroll_offset(), 150.0);
        assert_eq!(picker.selected_index_value(), 1);
    }

    // =========================================================================
    // Events
    // =========================================================================

    #[test]
    fn test_touch_drag_selects_and_snaps() {
        let mut picker = mounted(WheelPicker::new().items(abc()));
        assert!(picker.event(&touch_start(100.0)).is_none());
        let moved = picker.event(&touch_move(60.0));
        let changed = moved.and_then(|m| m.downcast::<SelectionChanged>().ok());
        assert_eq!(changed.map(|c| c.index), Some(1));

        picker.event(&touch_move(55.0));
        assert_eq!(picker.scroll_offset(), 125.0);
        picker.event(&touch_end(55.0));
        assert_eq!(picker.scroll_offset(), 120.0);
        assert_eq!(picker.selected_index_value(), 1);
    }

    #[test]
    fn test_drag_is_clamped_to_extent() {
        let mut picker = mounted(WheelPicker::new().items(abc()));
        picker.event(&touch_start(100.0));
        picker.event(&touch_move(-1000.0));
        assert_eq!(picker.scroll_offset(), 240.0);
        assert_eq!(picker.selected_index_value(), 0);
        picker.event(&touch_end(-1000.0));
        assert_eq!(picker.scroll_offset(), 160.0);
        assert_eq!(picker.selected_index_value(), 2);
    }

    #[test]
    fn test_touch_tap_selects_row() {
        let engine = Arc::new(RecordingHaptics::new());
        let mut picker = mounted(
            WheelPicker::new()
                .items(abc())
                .haptics(true)
                .haptic_engine(engine.clone()),
        );
        picker.event(&touch_start(150.0));
        let changed = picker
            .event(&touch_end(151.0))
            .and_then(|m| m.downcast::<SelectionChanged>().ok());
        assert_eq!(changed.map(|c| c.index), Some(1));
        assert_eq!(picker.take_scroll_commands(), vec![ScrollCommand::animated(1)]);
        assert_eq!(engine.count(), 1);
    }

    #[test]
    fn test_tap_on_sentinel_does_nothing() {
        let mut picker = mounted(WheelPicker::new().items(abc()));
        let event = Event::MouseDown {
            position: Point::new(75.0, 10.0),
            button: MouseButton::Left,
        };
        assert!(picker.event(&event).is_none());
        assert!(picker.take_scroll_commands().is_empty());
    }

    #[test]
    fn test_gesture_tap_selects_with_haptic() {
        let engine = Arc::new(RecordingHaptics::new());
        let mut picker = mounted(
            WheelPicker::new()
                .items(abc())
                .haptics(true)
                .haptic_engine(engine.clone()),
        );
        let changed = picker
            .event(&Event::GestureTap {
                position: Point::new(75.0, 170.0),
            })
            .and_then(|m| m.downcast::<SelectionChanged>().ok());
        assert_eq!(changed.map(|c| c.index), Some(2));
        assert_eq!(picker.selected_index_value(), 2);
        assert_eq!(picker.take_scroll_commands(), vec![ScrollCommand::animated(2)]);
        assert_eq!(engine.pulses(), vec![ImpactStyle::Light]);
    }

    #[test]
    fn test_gesture_tap_on_sentinel_does_nothing() {
        let engine = Arc::new(RecordingHaptics::new());
        let (log, on_change) = recorder();
        let mut picker = mounted(
            WheelPicker::new()
                .items(abc())
                .haptics(true)
                .haptic_engine(engine.clone())
                .on_change(on_change),
        );
        let tap = Event::GestureTap {
            position: Point::new(75.0, 30.0),
        };
        assert!(picker.event(&tap).is_none());
        assert_eq!(picker.selected_index_value(), 0);
        assert!(picker.take_scroll_commands().is_empty());
        assert!(indices(&log).is_empty());
        assert_eq!(engine.count(), 0);
    }

    #[test]
    fn test_second_finger_does_not_steal_drag() {
        let mut picker = mounted(WheelPicker::new().items(abc()));
        let other = TouchId::new(2);
        picker.event(&touch_start(100.0));
        picker.event(&Event::TouchStart {
            id: other,
            position: Point::new(75.0, 20.0),
        });
        picker.event(&Event::TouchMove {
            id: other,
            position: Point::new(75.0, 180.0),
        });
        assert_eq!(picker.scroll_offset(), 80.0);

        picker.event(&touch_move(60.0));
        assert_eq!(picker.scroll_offset(), 120.0);
        picker.event(&Event::TouchEnd {
            id: other,
            position: Point::new(75.0, 180.0),
        });
        picker.event(&Event::TouchCancel { id: other });
        assert_eq!(picker.scroll_offset(), 120.0);

        picker.event(&touch_end(58.0));
        assert_eq!(picker.scroll_offset(), 120.0);
        assert_eq!(picker.selected_index_value(), 1);
    }

    #[test]
    fn test_negative_height_scroll_does_not_panic() {
        let mut picker = WheelPicker::new().items(abc()).height(-100.0);
        picker.layout(Rect::new(0.0, 0.0, 150.0, 100.0));
        picker.event(&Event::Scroll {
            delta_x: 0.0,
            delta_y: 1.0,
        });
        picker.event(&touch_start(50.0));
        picker.event(&touch_move(20.0));
        picker.event(&touch_end(20.0));
        assert!(picker.selected_index_value() < 3);
    }

    #[test]
    fn test_mouse_click_selects_without_haptic() {
        let engine = Arc::new(RecordingHaptics::new());
        let mut picker = mounted(
            WheelPicker::new()
                .items(abc())
                .haptics(true)
                .haptic_engine(engine.clone()),
        );
        picker.event(&Event::MouseDown {
            position: Point::new(75.0, 170.0),
            button: MouseButton::Left,
        });
        assert_eq!(picker.selected_index_value(), 2);
        assert_eq!(engine.count(), 0);
    }

    #[test]
    fn test_wheel_scroll_moves_one_row() {
        let mut picker = mounted(WheelPicker::new().items(abc()));
        picker.event(&Event::Scroll {
            delta_x: 0.0,
            delta_y: 1.0,
        });
        assert_eq!(picker.selected_index_value(), 1);
        picker.event(&Event::Scroll {
            delta_x: 0.0,
            delta_y: 10.0,
        });
        assert_eq!(picker.selected_index_value(), 2);
        assert_eq!(picker.scroll_offset(), 160.0);
    }

    #[test]
    fn test_keyboard_navigation() {
        let mut picker = mounted(WheelPicker::new().items(abc()));
        let key = |key| Event::KeyDown { key };
        picker.event(&key(Key::Up));
        assert_eq!(picker.selected_index_value(), 0);
        picker.event(&key(Key::Down));
        assert_eq!(picker.selected_index_value(), 1);
        picker.event(&key(Key::End));
        assert_eq!(picker.selected_index_value(), 2);
        picker.event(&key(Key::Down));
        assert_eq!(picker.selected_index_value(), 2);
        picker.event(&key(Key::Home));
        assert_eq!(picker.selected_index_value(), 0);
    }

    #[test]
    fn test_touch_start_hook_composed() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let mut picker = mounted(
            WheelPicker::new()
                .items(abc())
                .scroll_options(ScrollOptions::new().on_touch_start(move |p| {
                    sink.lock().unwrap().push(p);
                })),
        );
        picker.event(&touch_start(42.0));
        assert_eq!(*seen.lock().unwrap(), vec![Point::new(75.0, 42.0)]);
        assert!(picker.selection.is_user_gesture());
    }

    #[test]
    fn test_no_snap_keeps_raw_offset() {
        let mut picker = mounted(
            WheelPicker::new()
                .items(abc())
                .scroll_options(ScrollOptions::new().snap(false)),
        );
        picker.event(&Event::Scroll {
            delta_x: 0.0,
            delta_y: 0.75,
        });
        assert_eq!(picker.scroll_offset(), 110.0);
        assert_eq!(picker.selected_index_value(), 1);
    }

    #[test]
    fn test_events_ignored_before_mount() {
        let mut picker = WheelPicker::new().items(abc());
        assert!(picker.event(&touch_start(100.0)).is_none());
        assert!(!picker.selection.is_user_gesture());
    }

    // =========================================================================
    // Measure and paint
    // =========================================================================

    #[test]
    fn test_measure() {
        let constraints = Constraints::loose(Size::new(300.0, 500.0));
        assert_eq!(WheelPicker::new().measure(constraints), Size::ZERO);
        assert_eq!(
            WheelPicker::new().items(abc()).measure(constraints),
            Size::new(150.0, 200.0)
        );
        assert_eq!(
            WheelPicker::new()
                .items(abc())
                .width(WheelWidth::Fill)
                .height(250.0)
                .measure(constraints),
            Size::new(300.0, 250.0)
        );
    }

    #[test]
    fn test_empty_items_paint_nothing() {
        let picker = mounted(WheelPicker::new());
        let mut canvas = RecordingCanvas::new();
        picker.paint(&mut canvas);
        assert!(canvas.is_empty());
    }

    #[test]
    fn test_paint_font_tiers() {
        let picker = mounted(WheelPicker::new().items(abc()));
        let mut canvas = RecordingCanvas::new();
        picker.paint(&mut canvas);

        let texts: Vec<(String, f32)> = canvas
            .texts()
            .into_iter()
            .map(|(t, s)| (t.to_string(), s.size))
            .collect();
        assert_eq!(texts.len(), 3);
        assert_eq!(texts[0], ("A".to_string(), 20.0));
        assert_eq!(texts[1].0, "B");
        assert!((texts[1].1 - 13.333_333).abs() < 1e-4);
        assert_eq!(texts[2], ("C".to_string(), 10.0));
        assert_eq!(canvas.clip_depth(), 0);
    }

    #[test]
    fn test_paint_gradients_use_platform_alpha() {
        let picker = mounted(
            WheelPicker::new()
                .items(abc())
                .platform(Platform::Ios)
                .background_color(Color::new(0.0, 0.0, 0.5, 0.3)),
        );
        let mut canvas = RecordingCanvas::new();
        picker.paint(&mut canvas);

        let bg = Color::new(0.0, 0.0, 0.5, 1.0);
        let gradients = canvas.gradients();
        assert_eq!(gradients.len(), 2);
        assert_eq!(gradients[0], (Rect::new(0.0, 0.0, 150.0, 80.0), bg, bg.with_alpha(0.2)));
        assert_eq!(
            gradients[1],
            (Rect::new(0.0, 120.0, 150.0, 80.0), bg.with_alpha(0.2), bg)
        );
        assert_eq!(canvas.texts()[0].1.color, Color::WHITE);
    }

    #[test]
    fn test_paint_selected_style_border() {
        let red = Color::rgb(1.0, 0.0, 0.0);
        let picker = mounted(WheelPicker::new().items(abc()).selected_style(SelectedStyle {
            border_color: Some(red),
            border_width: 1.5,
        }));
        let mut canvas = RecordingCanvas::new();
        picker.paint(&mut canvas);

        let lines: Vec<(Point, Point)> = canvas
            .commands()
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Line {
                    from, to, color, ..
                } if *color == red => Some((*from, *to)),
                _ => None,
            })
            .collect();
        assert_eq!(
            lines,
            vec![
                (Point::new(0.0, 80.0), Point::new(150.0, 80.0)),
                (Point::new(0.0, 120.0), Point::new(150.0, 120.0)),
            ]
        );
    }

    #[test]
    fn test_paint_custom_rows() {
        let picker = mounted(WheelPicker::new().items(abc()).render_row(|props, rect, canvas| {
            if !props.label.is_empty() {
                canvas.draw_text(
                    &props.label.to_lowercase(),
                    rect.origin(),
                    &wheelpick_core::TextStyle::default(),
                );
            }
        }));
        let mut canvas = RecordingCanvas::new();
        picker.paint(&mut canvas);
        let labels: Vec<&str> = canvas.texts().into_iter().map(|(t, _)| t).collect();
        assert_eq!(labels, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_paint_indicator() {
        let picker = mounted(
            WheelPicker::new()
                .items(abc())
                .scroll_options(ScrollOptions::new().shows_indicator(true)),
        );
        let mut with = RecordingCanvas::new();
        picker.paint(&mut with);
        let plain = mounted(WheelPicker::new().items(abc()));
        let mut without = RecordingCanvas::new();
        plain.paint(&mut without);
        assert_eq!(with.command_count(), without.command_count() + 1);
    }

    // =========================================================================
    // Brick
    // =========================================================================

    #[test]
    fn test_brick_verify() {
        let picker = WheelPicker::new().items(abc());
        assert_eq!(picker.brick_name(), "WheelPicker");
        assert!(picker.verify().is_valid());
        assert!(!WheelPicker::new().verify().is_valid());
    }

    #[test]
    fn test_brick_html() {
        let picker = mounted(
            WheelPicker::new()
                .items(vec![WheelItem::simple("<A>"), WheelItem::simple("B")])
                .with_test_id("fruit")
                .with_accessible_name("Fruit"),
        );
        let html = picker.to_html();
        assert!(html.starts_with(
            r#"<ul class="brick-wheel-picker" role="listbox" data-testid="fruit" aria-label="Fruit">"#
        ));
        assert!(html.contains(r#"<li role="option" aria-selected="true">&lt;A&gt;</li>"#));
        assert!(picker.to_css().contains("height: 200px"));
        assert_eq!(picker.accessible_role(), AccessibleRole::ListBox);
        assert_eq!(Widget::test_id(&picker), Some("fruit"));
    }
}
