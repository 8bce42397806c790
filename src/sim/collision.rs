//! Ball overlap tests against the screen edges and the two paddles
//!
//! Everything here works on the ball's axis-aligned box at a candidate
//! position. The step decides what to do with the result.

use glam::Vec2;

use crate::consts::*;

/// Which side of the playfield
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Axis-aligned box around the ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallBounds {
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
}

impl BallBounds {
    pub fn at(centre: Vec2) -> Self {
        Self {
            top: centre.y - BALL_RADIUS,
            bottom: centre.y + BALL_RADIUS,
            left: centre.x - BALL_RADIUS,
            right: centre.x + BALL_RADIUS,
        }
    }

    /// Vertical extent overlaps a paddle whose top edge is at `paddle_y`
    #[inline]
    fn overlaps_paddle_rows(&self, paddle_y: f32) -> bool {
        self.top < paddle_y + PADDLE_HEIGHT && self.bottom > paddle_y
    }
}

/// Everything the candidate box touches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Hits {
    pub left_wall: bool,
    pub right_wall: bool,
    pub top_wall: bool,
    pub bottom_wall: bool,
    pub left_paddle: bool,
    pub right_paddle: bool,
}

impl Hits {
    /// Classify a ball box against walls and paddles (paddle positions are
    /// top-left corners)
    pub fn classify(bounds: &BallBounds, left_paddle: Vec2, right_paddle: Vec2) -> Self {
        Self {
            left_wall: bounds.left < 0.0,
            right_wall: bounds.right > SCREEN_WIDTH,
            top_wall: bounds.top < 0.0,
            bottom_wall: bounds.bottom > SCREEN_HEIGHT,
            left_paddle: bounds.left < left_paddle.x + PADDLE_WIDTH
                && bounds.overlaps_paddle_rows(left_paddle.y),
            right_paddle: bounds.right > right_paddle.x
                && bounds.overlaps_paddle_rows(right_paddle.y),
        }
    }

    #[inline]
    pub fn x_out_of_bounds(&self) -> bool {
        self.left_wall || self.right_wall
    }

    #[inline]
    pub fn y_out_of_bounds(&self) -> bool {
        self.top_wall || self.bottom_wall
    }

    /// Paddle that was hit, left checked first
    #[inline]
    pub fn paddle(&self) -> Option<Side> {
        if self.left_paddle {
            Some(Side::Left)
        } else if self.right_paddle {
            Some(Side::Right)
        } else {
            None
        }
    }

    /// Side wall that was crossed, left checked first
    #[inline]
    pub fn side_wall(&self) -> Option<Side> {
        if self.left_wall {
            Some(Side::Left)
        } else if self.right_wall {
            Some(Side::Right)
        } else {
            None
        }
    }

    /// Corner hit: out vertically while also out horizontally or on a paddle
    #[inline]
    pub fn is_corner(&self) -> bool {
        self.y_out_of_bounds()
            && (self.x_out_of_bounds() || self.left_paddle || self.right_paddle)
    }
}

/// Fraction of this step's travel that happened past the contact edge.
///
/// Not clamped: a deep overlap gives a value above 1.
#[inline]
pub fn penetration_fraction(overlap: f32, step_distance: f32) -> f32 {
    overlap.abs() / step_distance
}

/// Overlap of the box past a paddle's inner face
pub fn paddle_overlap(bounds: &BallBounds, side: Side, left_paddle: Vec2, right_paddle: Vec2) -> f32 {
    match side {
        Side::Left => left_paddle.x + PADDLE_WIDTH - bounds.left,
        Side::Right => right_paddle.x - bounds.right,
    }
}

/// Overlap of the box past a side wall
pub fn side_wall_overlap(bounds: &BallBounds, side: Side) -> f32 {
    match side {
        Side::Left => bounds.left,
        Side::Right => bounds.right - SCREEN_WIDTH,
    }
}

/// Overlap of the box past the top or bottom wall (top checked first)
pub fn end_wall_overlap(bounds: &BallBounds, hits: &Hits) -> f32 {
    if hits.top_wall {
        bounds.top
    } else {
        SCREEN_HEIGHT - bounds.bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paddles() -> (Vec2, Vec2) {
        (Vec2::new(0.0, 415.0), Vec2::new(SCREEN_WIDTH - PADDLE_WIDTH, 415.0))
    }

    #[test]
    fn test_centre_hits_nothing() {
        let (lp, rp) = paddles();
        let hits = Hits::classify(&BallBounds::at(Vec2::new(960.0, 540.0)), lp, rp);
        assert_eq!(hits, Hits::default());
        assert!(hits.paddle().is_none());
        assert!(!hits.is_corner());
    }

    #[test]
    fn test_left_paddle_overlap() {
        let (lp, rp) = paddles();
        let bounds = BallBounds::at(Vec2::new(50.0, 500.0));
        let hits = Hits::classify(&bounds, lp, rp);
        assert!(hits.left_paddle);
        assert!(!hits.left_wall);
        assert_eq!(hits.paddle(), Some(Side::Left));
        assert_eq!(paddle_overlap(&bounds, Side::Left, lp, rp), 5.0);
    }

    #[test]
    fn test_paddle_needs_vertical_overlap() {
        let (lp, rp) = paddles();
        // Ball bottom exactly on the paddle top edge does not count
        let hits = Hits::classify(&BallBounds::at(Vec2::new(40.0, 390.0)), lp, rp);
        assert!(!hits.left_paddle);
        let hits = Hits::classify(&BallBounds::at(Vec2::new(40.0, 391.0)), lp, rp);
        assert!(hits.left_paddle);
    }

    #[test]
    fn test_right_side_and_corner() {
        let (lp, rp) = paddles();
        let bounds = BallBounds::at(Vec2::new(1910.0, 10.0));
        let hits = Hits::classify(&bounds, lp, rp);
        assert!(hits.right_wall);
        assert!(hits.top_wall);
        assert!(!hits.right_paddle);
        assert_eq!(hits.side_wall(), Some(Side::Right));
        assert!(hits.is_corner());
        assert_eq!(side_wall_overlap(&bounds, Side::Right), 15.0);
        assert_eq!(end_wall_overlap(&bounds, &hits), -15.0);
    }

    #[test]
    fn test_penetration_fraction_is_unclamped() {
        assert_eq!(penetration_fraction(-5.0, 10.0), 0.5);
        assert_eq!(penetration_fraction(30.0, 10.0), 3.0);
    }
}
