//! TUI application state and event handling.
//!
//! The [`App`] wraps a [`SessionController`] with everything that only matters on screen:
//!
//! - **Drag gesture**: mouse drags and key nudges mapped onto offset units
//! - **Animations**: the exiting card and the short-lived vote acknowledgment
//! - **Sharing**: share targets on the results screen, with clipboard fallback
//! - **Status messages**: transient feedback for share outcomes and errors
//! - **Dirty state tracking**: redraw only when state changes or something is animating

use std::time::{Duration, Instant};

use anyhow::Result;
use ratatui::Terminal;
use ratatui::backend::Backend;
use ratatui::layout::{Position, Rect};

use super::animation::{ExitAnimation, VoteFeedback};
use super::events::{Action, poll_event};
use super::layout::{AppLayout, shifted};
use super::rendering::{CardView, RenderState, render_ui};
use crate::clipboard::{ClipboardProvider, SystemClipboard};
use crate::config::{Config, CopyConfig, InputConfig};
use crate::session::{
    Direction, DragGesture, ReleaseOutcome, SessionController, SessionPhase, drag_progress,
};
use crate::share::{SharePlatform, ShareRequest, ShareTarget, TerminalPlatform, share};

/// Duration for success status messages (milliseconds)
const STATUS_SUCCESS_DURATION_MS: u64 = 3000;
/// Duration for error status messages (milliseconds)
const STATUS_ERROR_DURATION_MS: u64 = 5000;

/// Poll timeout while something is moving (~60fps)
const ANIMATION_POLL: Duration = Duration::from_millis(16);
const IDLE_POLL: Duration = Duration::from_millis(100);

/// Type of status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Success,
    Error,
}

/// Transient status message with expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub message_type: MessageType,
    pub expires_at: Instant,
}

pub struct App {
    session: SessionController,
    copy: CopyConfig,
    input: InputConfig,
    page_url: String,
    gesture: DragGesture,
    exit: Option<ExitAnimation>,
    vote: Option<VoteFeedback>,
    platform: Box<dyn SharePlatform>,
    clipboard: Box<dyn ClipboardProvider>,
    status_message: Option<StatusMessage>,
    should_quit: bool,
    // Dirty state tracking for efficient rendering
    needs_redraw: bool,
    last_draw_time: Instant,
    last_area: Rect,
}

impl App {
    pub fn new(session: SessionController, config: &Config) -> Self {
        Self {
            session,
            copy: config.copy.clone(),
            input: config.input.clone(),
            page_url: config.share.page_url.clone(),
            gesture: DragGesture::new(),
            exit: None,
            vote: None,
            platform: Box::new(TerminalPlatform),
            clipboard: Box::new(SystemClipboard::new()),
            status_message: None,
            needs_redraw: true,
            should_quit: false,
            last_draw_time: Instant::now(),
            last_area: Rect::default(),
        }
    }

    /// Replace the share platform and clipboard
    pub fn with_share_backends(
        mut self,
        platform: Box<dyn SharePlatform>,
        clipboard: Box<dyn ClipboardProvider>,
    ) -> Self {
        self.platform = platform;
        self.clipboard = clipboard;
        self
    }

    pub fn session(&self) -> &SessionController {
        &self.session
    }

    /// Set a transient status message with automatic expiry
    fn set_status(&mut self, text: impl Into<String>, message_type: MessageType, duration_ms: u64) {
        self.status_message = Some(StatusMessage {
            text: text.into(),
            message_type,
            expires_at: Instant::now() + Duration::from_millis(duration_ms),
        });
        self.needs_redraw = true;
    }

    /// Check and clear expired status messages
    fn check_and_clear_expired_status(&mut self) {
        let should_clear = self
            .status_message
            .as_ref()
            .map(|msg| Instant::now() >= msg.expires_at)
            .unwrap_or(false);
        if should_clear {
            self.status_message = None;
            self.needs_redraw = true;
        }
    }

    fn is_animating(&self) -> bool {
        self.exit.is_some() || self.vote.is_some() || self.session.reset_pending()
    }

    /// Advance timers: the deferred tally reset and finished animations
    fn tick(&mut self, now: Instant) {
        if self.session.tick(now) {
            self.needs_redraw = true;
        }
        if self.exit.as_ref().is_some_and(|exit| exit.is_done(now)) {
            self.exit = None;
            self.needs_redraw = true;
        }
        if self.vote.is_some_and(|vote| vote.is_expired(now)) {
            self.vote = None;
            self.needs_redraw = true;
        }
    }

    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while !self.should_quit {
            let now = Instant::now();
            self.tick(now);
            self.check_and_clear_expired_status();

            // Draw if dirty, animating, or if it's been >100ms (for terminal resize handling)
            let animating = self.is_animating();
            let elapsed = now.duration_since(self.last_draw_time);
            if self.needs_redraw || animating || elapsed >= IDLE_POLL {
                let area = {
                    let state = self.render_state(now);
                    terminal.draw(|f| render_ui(f, &state))?.area
                };
                self.last_area = area;
                self.needs_redraw = false;
                self.last_draw_time = now;
            }

            let action = poll_event(if animating { ANIMATION_POLL } else { IDLE_POLL })?;
            let area = self.last_area;
            self.handle_action(action, Instant::now(), area);
        }

        Ok(())
    }

    fn to_columns(&self, offset: f32) -> i32 {
        (offset / self.input.cell_width).round() as i32
    }

    fn render_state(&self, now: Instant) -> RenderState<'_> {
        let session = &self.session;
        let offset = self.gesture.offset();
        let direction = session.direction();

        let front = session.front().map(|item| CardView {
            item,
            offset_cols: self.to_columns(offset),
            tint: (!direction.is_none())
                .then(|| (direction, drag_progress(offset, session.thresholds()))),
        });
        let exiting = self.exit.as_ref().map(|exit| CardView {
            item: &exit.item,
            offset_cols: self.to_columns(exit.offset(now)),
            tint: Some((exit.direction, 1.0)),
        });

        RenderState {
            title: &self.copy.title,
            welcome_text: &self.copy.welcome_text,
            phase: session.phase(),
            position: if front.is_some() { session.committed() + 1 } else { 0 },
            total: session.original_len(),
            front,
            next: session.next(),
            exiting,
            feedback: session.feedback_visible().then_some(direction),
            vote: self.vote.map(|vote| vote.direction),
            results: session.results(),
            closing: session.closing_results(now),
            status_message: self.status_message.as_ref(),
        }
    }

    /// Handle a user action (extracted for testing)
    fn handle_action(&mut self, action: Action, now: Instant, area: Rect) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Confirm => match self.session.phase() {
                SessionPhase::NotStarted => self.session.start(),
                SessionPhase::InProgress => {
                    if let Some(dx) = self.gesture.release() {
                        self.finish_drag(dx, now);
                    }
                }
                SessionPhase::Finished => self.restart(now),
            },
            Action::NudgeLeft => self.nudge(-self.input.key_step),
            Action::NudgeRight => self.nudge(self.input.key_step),
            Action::FlingLeft => self.fling(Direction::Left, now),
            Action::FlingRight => self.fling(Direction::Right, now),
            Action::Cancel => {
                self.gesture.cancel();
                self.session.set_direction(Direction::None);
            }
            Action::Restart => self.restart(now),
            Action::Share(target) => self.share(target),
            Action::PointerDown { column, row } => {
                if self.hits_front_card(column, row, area) {
                    self.gesture.begin(column as f32 * self.input.cell_width);
                }
            }
            Action::PointerDrag { column } => {
                if self.gesture.is_active() {
                    let dx = self.gesture.update(column as f32 * self.input.cell_width);
                    self.session.drag(dx);
                }
            }
            Action::PointerUp { column } => {
                if self.gesture.is_active() {
                    self.gesture.update(column as f32 * self.input.cell_width);
                    if let Some(dx) = self.gesture.release() {
                        self.finish_drag(dx, now);
                    }
                }
            }
            Action::Resize => {}
            Action::None => return,
        }
        self.needs_redraw = true;
    }

    fn hits_front_card(&self, column: u16, row: u16, area: Rect) -> bool {
        if self.session.phase() != SessionPhase::InProgress || self.session.front().is_none() {
            return false;
        }
        let layout = AppLayout::new(area);
        shifted(layout.card_area, self.to_columns(self.gesture.offset()), layout.main_area)
            .is_some_and(|card| card.contains(Position::new(column, row)))
    }

    fn nudge(&mut self, delta: f32) {
        if self.session.phase() != SessionPhase::InProgress {
            return;
        }
        let dx = self.gesture.nudge(delta);
        self.session.drag(dx);
    }

    fn fling(&mut self, direction: Direction, now: Instant) {
        self.gesture.cancel();
        let dx = direction.sign() * self.session.thresholds().commit;
        self.finish_drag(dx, now);
    }

    fn finish_drag(&mut self, dx: f32, now: Instant) {
        if let ReleaseOutcome::Committed { record, exit_x } = self.session.release(dx) {
            self.vote = Some(VoteFeedback::new(record.direction, now));
            self.exit = Some(ExitAnimation::new(record.item, record.direction, dx, exit_x, now));
        }
    }

    fn restart(&mut self, now: Instant) {
        self.gesture.cancel();
        self.exit = None;
        self.vote = None;
        self.session.restart(now);
    }

    fn share(&mut self, target: ShareTarget) {
        let Some(result) = self.session.results() else {
            return;
        };
        let request = ShareRequest {
            title: format!("My result on {}", self.copy.title),
            text: result.summary(&self.copy.results_text),
            page_url: self.page_url.clone(),
        };

        match share(target, &request, self.platform.as_mut(), self.clipboard.as_mut()) {
            Ok(outcome) => {
                self.set_status(outcome.notice(), MessageType::Success, STATUS_SUCCESS_DURATION_MS)
            }
            Err(e) => {
                tracing::warn!(share_target = target.label(), "share failed: {:#}", e);
                self.set_status(
                    format!("✗ Could not share: {:#}", e),
                    MessageType::Error,
                    STATUS_ERROR_DURATION_MS,
                );
            }
        }
    }
}
