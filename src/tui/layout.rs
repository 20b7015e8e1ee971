use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Largest card drawn, in cells
const CARD_MAX_WIDTH: u16 = 44;
const CARD_MAX_HEIGHT: u16 = 14;

/// Screen layout for the swipe view
pub struct AppLayout {
    pub header_area: Rect,
    pub main_area: Rect,
    /// Resting position of the front card, centered in the main area
    pub card_area: Rect,
    pub feedback_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    /// Create layout:
    /// - Header: top row
    /// - Main area: remaining rows, card centered inside
    /// - Feedback row: below the main area
    /// - Status bar: bottom row
    pub fn new(area: Rect) -> Self {
        let vertical_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Header
                Constraint::Min(3),    // Cards
                Constraint::Length(1), // Feedback
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let main_area = vertical_chunks[1];

        Self {
            header_area: vertical_chunks[0],
            main_area,
            card_area: centered(main_area, CARD_MAX_WIDTH, CARD_MAX_HEIGHT),
            feedback_area: vertical_chunks[2],
            status_area: vertical_chunks[3],
        }
    }
}

/// Rect of at most `width` x `height` centered in `area`, keeping a one-cell margin
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(2)).max(area.width.min(1));
    let height = height.min(area.height.saturating_sub(2)).max(area.height.min(1));
    Rect::new(
        area.x + (area.width.saturating_sub(width)) / 2,
        area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    )
}

/// Shift `rect` horizontally by `dx` cells, clipped to `bounds`. `None` once fully off-screen.
pub fn shifted(rect: Rect, dx: i32, bounds: Rect) -> Option<Rect> {
    let left = (rect.x as i32 + dx).max(bounds.x as i32);
    let right = (rect.right() as i32 + dx).min(bounds.right() as i32);
    if right <= left {
        return None;
    }
    Some(Rect::new(left as u16, rect.y, (right - left) as u16, rect.height))
}
