/// Tracks a single horizontal drag on the front card.
///
/// Positions are in offset units; the TUI scales terminal columns before feeding them in.
/// Keyboard nudges are modelled as relative moves on the same gesture.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DragGesture {
    origin: Option<f32>,
    dx: f32,
}

impl DragGesture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a drag at pointer position `x`. Restarting mid-drag keeps the current offset.
    pub fn begin(&mut self, x: f32) {
        self.origin = Some(x - self.dx);
    }

    /// Move the pointer to `x` and return the new offset. Ignored when no drag is active.
    pub fn update(&mut self, x: f32) -> f32 {
        if let Some(origin) = self.origin {
            self.dx = x - origin;
        }
        self.dx
    }

    /// Shift the offset by `delta`, starting a gesture if none is active
    pub fn nudge(&mut self, delta: f32) -> f32 {
        if self.origin.is_none() {
            self.origin = Some(0.0);
        }
        self.dx += delta;
        if let Some(origin) = self.origin.as_mut() {
            *origin -= delta;
        }
        self.dx
    }

    /// End the gesture, returning the final offset if a drag was active
    pub fn release(&mut self) -> Option<f32> {
        let dx = self.origin.take().map(|_| self.dx);
        self.dx = 0.0;
        dx
    }

    /// Abandon the gesture; the card snaps back to center
    pub fn cancel(&mut self) {
        self.origin = None;
        self.dx = 0.0;
    }

    pub fn is_active(&self) -> bool {
        self.origin.is_some()
    }

    pub fn offset(&self) -> f32 {
        self.dx
    }
}
