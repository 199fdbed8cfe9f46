//! Pointer-event records and stroke accumulation.
//!
//! The capture layer delivers whitespace-separated `type x y` records
//! (1 start, 2 move, 3 end, 4 explore). Coordinates from remote sources
//! arrive normalized to `[0, 1]` and are scaled to canvas pixels before
//! the matching core ever sees a point. [`StrokeBuilder`] owns the
//! Idle/Active gesture state machine and hands out each completed stroke
//! exactly once.

use crate::geometry::Point;

const CODE_START: u8 = 1;
const CODE_MOVE: u8 = 2;
const CODE_END: u8 = 3;
const CODE_EXPLORE: u8 = 4;

/// A single pointer event in canvas space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Start(Point),
    Move(Point),
    /// Hover movement from remote sources; treated like `Move` while a
    /// stroke is active.
    Explore(Point),
    End(Point),
}

impl PointerEvent {
    /// Parse one `type x y` record. Unknown type codes and malformed
    /// records yield `None`; callers drop them, matching the capture
    /// protocol. Trailing tokens are ignored.
    pub fn parse_line(line: &str) -> Option<Self> {
        let mut parts = line.split_whitespace();
        let code: u8 = parts.next()?.parse().ok()?;
        let x: f64 = parts.next()?.parse().ok()?;
        let y: f64 = parts.next()?.parse().ok()?;
        let pos = Point::new(x, y);
        match code {
            CODE_START => Some(Self::Start(pos)),
            CODE_MOVE => Some(Self::Move(pos)),
            CODE_END => Some(Self::End(pos)),
            CODE_EXPLORE => Some(Self::Explore(pos)),
            _ => None,
        }
    }

    pub fn pos(&self) -> Point {
        match *self {
            Self::Start(p) | Self::Move(p) | Self::Explore(p) | Self::End(p) => p,
        }
    }

    /// Scale fractional `[0, 1]` coordinates to canvas pixels.
    pub fn denormalized(self, width: f64, height: f64) -> Self {
        let scale = |p: Point| Point::new(p.x * width, p.y * height);
        match self {
            Self::Start(p) => Self::Start(scale(p)),
            Self::Move(p) => Self::Move(scale(p)),
            Self::Explore(p) => Self::Explore(scale(p)),
            Self::End(p) => Self::End(scale(p)),
        }
    }
}

/// Whether a gesture is currently being captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeState {
    Idle,
    Active,
}

/// Append-only accumulator for the stroke being drawn.
///
/// Point events delivered while idle are discarded no-ops. The completed
/// stroke is handed out exactly once, on `End`, and always contains at
/// least the start point.
#[derive(Debug)]
pub struct StrokeBuilder {
    state: StrokeState,
    points: Vec<Point>,
}

impl StrokeBuilder {
    pub fn new() -> Self {
        Self {
            state: StrokeState::Idle,
            points: Vec::new(),
        }
    }

    pub fn state(&self) -> StrokeState {
        self.state
    }

    /// Feed one event through the state machine. Returns the accumulated
    /// stroke when `event` completes a gesture.
    pub fn push(&mut self, event: PointerEvent) -> Option<Vec<Point>> {
        match event {
            PointerEvent::Start(pos) => {
                self.points.clear();
                self.points.push(pos);
                self.state = StrokeState::Active;
                None
            }
            PointerEvent::Move(pos) | PointerEvent::Explore(pos) => {
                if self.state == StrokeState::Active {
                    self.points.push(pos);
                }
                None
            }
            PointerEvent::End(pos) => {
                if self.state != StrokeState::Active {
                    return None;
                }
                self.points.push(pos);
                self.state = StrokeState::Idle;
                Some(std::mem::take(&mut self.points))
            }
        }
    }
}

impl Default for StrokeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_event_kinds() {
        assert_eq!(
            PointerEvent::parse_line("1 0.5 0.25"),
            Some(PointerEvent::Start(Point::new(0.5, 0.25)))
        );
        assert_eq!(
            PointerEvent::parse_line("2 1 2"),
            Some(PointerEvent::Move(Point::new(1.0, 2.0)))
        );
        assert_eq!(
            PointerEvent::parse_line("3 0 0"),
            Some(PointerEvent::End(Point::new(0.0, 0.0)))
        );
        assert_eq!(
            PointerEvent::parse_line("4 3 4"),
            Some(PointerEvent::Explore(Point::new(3.0, 4.0)))
        );
    }

    #[test]
    fn rejects_unknown_codes_and_garbage() {
        assert_eq!(PointerEvent::parse_line("9 0.1 0.2"), None);
        assert_eq!(PointerEvent::parse_line("1 x y"), None);
        assert_eq!(PointerEvent::parse_line("1 0.5"), None);
        assert_eq!(PointerEvent::parse_line(""), None);
    }

    #[test]
    fn denormalize_scales_to_canvas() {
        let ev = PointerEvent::parse_line("2 0.5 0.5").unwrap();
        assert_eq!(ev.denormalized(450.0, 450.0).pos(), Point::new(225.0, 225.0));
    }
}
