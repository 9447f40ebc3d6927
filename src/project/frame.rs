use crate::types::config::DisplayConfig;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Line {
    pub from: Position,
    pub to: Position,
}

/// Plot area for a 0–100 × 0–100 scatter.
///
/// Origin is the top-left pixel; `x` grows rightwards with score and `y` shrinks
/// as score grows, so high scores sit up and to the right.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotFrame {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
}

impl From<DisplayConfig> for PlotFrame {
    fn from(display: DisplayConfig) -> Self {
        Self {
            width: display.width,
            height: display.height,
            margin: display.margin,
        }
    }
}

impl PlotFrame {
    pub fn x(&self, score: f64) -> f64 {
        self.margin + (score / 100.0) * self.width
    }

    pub fn y(&self, score: f64) -> f64 {
        self.margin + self.height - (score / 100.0) * self.height
    }

    pub fn project(&self, x_score: f64, y_score: f64) -> Position {
        Position {
            x: self.x(x_score),
            y: self.y(y_score),
        }
    }

    /// The "perfect agreement" line from (0, 0) to (100, 100).
    pub fn diagonal(&self) -> Line {
        Line {
            from: self.project(0.0, 0.0),
            to: self.project(100.0, 100.0),
        }
    }
}
