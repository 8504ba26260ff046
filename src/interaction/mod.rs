use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::render::RenderFrame;

/// Offset applied from the pointer position to the tooltip anchor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipOffset {
    pub dx: f64,
    pub dy: f64,
}

impl Default for TooltipOffset {
    fn default() -> Self {
        Self {
            dx: 10.0,
            dy: -28.0,
        }
    }
}

/// Public tooltip state exposed to hosts.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TooltipState {
    pub visible: bool,
    pub content: String,
    pub x: f64,
    pub y: f64,
}

/// Single shared overlay reused by every hoverable mark.
///
/// Hiding keeps the last content; the overlay is never torn down.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Tooltip {
    state: TooltipState,
    offset: TooltipOffset,
}

impl Tooltip {
    #[must_use]
    pub fn new(offset: TooltipOffset) -> Self {
        Self {
            state: TooltipState::default(),
            offset,
        }
    }

    #[must_use]
    pub fn state(&self) -> &TooltipState {
        &self.state
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.state.visible
    }

    #[must_use]
    pub fn offset(&self) -> TooltipOffset {
        self.offset
    }

    pub fn show(&mut self, content: impl Into<String>, pointer_x: f64, pointer_y: f64) {
        self.state.content = content.into();
        self.state.visible = true;
        self.move_to(pointer_x, pointer_y);
    }

    /// Repositions the tooltip next to the pointer without touching content.
    pub fn move_to(&mut self, pointer_x: f64, pointer_y: f64) {
        self.state.x = pointer_x + self.offset.dx;
        self.state.y = pointer_y + self.offset.dy;
    }

    pub fn hide(&mut self) {
        self.state.visible = false;
    }
}

/// Hover state of the hoverable marks in the active frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HoverPhase {
    Idle,
    Hover { target: usize },
}

/// Outcome of one pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HoverTransition {
    /// Pointer moved over empty space while idle.
    None,
    Enter { target: usize },
    Move { target: usize },
    Leave { target: usize },
    /// Pointer went straight from one mark to another.
    Switch { from: usize, to: usize },
}

#[derive(Debug, Clone, PartialEq)]
pub struct InteractionState {
    phase: HoverPhase,
    tooltip: Tooltip,
    cursor_x: f64,
    cursor_y: f64,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self::new(TooltipOffset::default())
    }
}

impl InteractionState {
    #[must_use]
    pub fn new(tooltip_offset: TooltipOffset) -> Self {
        Self {
            phase: HoverPhase::Idle,
            tooltip: Tooltip::new(tooltip_offset),
            cursor_x: 0.0,
            cursor_y: 0.0,
        }
    }

    #[must_use]
    pub fn phase(&self) -> HoverPhase {
        self.phase
    }

    #[must_use]
    pub fn tooltip(&self) -> &Tooltip {
        &self.tooltip
    }

    #[must_use]
    pub fn cursor(&self) -> (f64, f64) {
        (self.cursor_x, self.cursor_y)
    }

    /// Runs the hover state machine against the circles of `frame`.
    ///
    /// Only circles carrying hover text take part; the topmost one under the
    /// pointer wins.
    pub fn on_pointer_move(&mut self, frame: &RenderFrame, x: f64, y: f64) -> HoverTransition {
        self.cursor_x = x;
        self.cursor_y = y;

        let hit = frame
            .hit_test_circle(x, y)
            .and_then(|index| {
                frame.circles[index]
                    .hover_text
                    .as_deref()
                    .map(|text| (index, text))
            });

        let transition = match (self.phase, hit) {
            (HoverPhase::Idle, None) => HoverTransition::None,
            (HoverPhase::Idle, Some((index, text))) => {
                self.tooltip.show(text, x, y);
                self.phase = HoverPhase::Hover { target: index };
                HoverTransition::Enter { target: index }
            }
            (HoverPhase::Hover { target }, Some((index, _))) if target == index => {
                self.tooltip.move_to(x, y);
                HoverTransition::Move { target }
            }
            (HoverPhase::Hover { target }, Some((index, text))) => {
                self.tooltip.show(text, x, y);
                self.phase = HoverPhase::Hover { target: index };
                HoverTransition::Switch {
                    from: target,
                    to: index,
                }
            }
            (HoverPhase::Hover { target }, None) => {
                self.tooltip.hide();
                self.phase = HoverPhase::Idle;
                HoverTransition::Leave { target }
            }
        };

        trace!(?transition, x, y, "pointer move");
        transition
    }

    /// Pointer left the drawing surface.
    pub fn on_pointer_leave(&mut self) -> HoverTransition {
        match self.phase {
            HoverPhase::Idle => HoverTransition::None,
            HoverPhase::Hover { target } => {
                self.tooltip.hide();
                self.phase = HoverPhase::Idle;
                HoverTransition::Leave { target }
            }
        }
    }

    /// Drops hover state when the underlying frame is replaced.
    pub fn reset(&mut self) {
        self.tooltip.hide();
        self.phase = HoverPhase::Idle;
    }
}
