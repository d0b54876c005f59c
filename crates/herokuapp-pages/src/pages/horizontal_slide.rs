// Horizontal Slider - a range input (0 to 5, step 0.5) with its value echoed
// in a #range label
//
// The slider can be moved two ways:
// - keyboard: arrow presses, each moving one step
// - mouse: press at the left edge and drag to a fraction of the width

use crate::driver::{SharedDriver, Target};
use crate::error::{Error, Result};
use crate::pages::{repeat, trimmed_text};
use std::str::FromStr;

/// Which way to move the slider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Arrow key that moves the slider this way
    pub fn key(self) -> &'static str {
        match self {
            Direction::Left => "ArrowLeft",
            Direction::Right => "ArrowRight",
        }
    }

    /// Parses a direction the forgiving way: anything other than "left"
    /// (in any case) means right.
    ///
    /// Unrecognized values are logged. Prefer [`str::parse`] where a typo
    /// should be an error.
    pub fn lenient(value: &str) -> Self {
        match value.parse() {
            Ok(direction) => direction,
            Err(_) => {
                tracing::warn!(value, "unrecognized slider direction, moving right");
                Direction::Right
            }
        }
    }
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("left") {
            Ok(Direction::Left)
        } else if s.eq_ignore_ascii_case("right") {
            Ok(Direction::Right)
        } else {
            Err(Error::InvalidDirection(s.to_string()))
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Left => f.write_str("left"),
            Direction::Right => f.write_str("right"),
        }
    }
}

#[derive(Clone)]
pub struct HorizontalSlidePage {
    driver: SharedDriver,
    slider: Target,
    label: Target,
}

impl HorizontalSlidePage {
    pub fn new(driver: SharedDriver) -> Self {
        Self {
            driver,
            slider: Target::css(r#"input[type="range"]"#),
            label: Target::css("#range"),
        }
    }

    /// Presses the arrow key for `direction` `count` times.
    ///
    /// With `focus_first` the slider is clicked beforehand, which also moves
    /// it to the click point (the middle). Pass `false` to continue from
    /// wherever a previous move left it.
    pub async fn move_slider_with_keyboard(
        &self,
        direction: Direction,
        count: u32,
        focus_first: bool,
    ) -> Result<()> {
        tracing::debug!(%direction, count, focus_first, "moving slider with keyboard");
        if focus_first {
            self.driver.click(&self.slider).await?;
        }
        repeat(count, || self.driver.press_key(direction.key())).await
    }

    /// Drags the slider handle from the left edge to `fraction` of its width.
    ///
    /// `fraction` is clamped to `[0, 1]`; 0.5 lands on the midpoint value.
    pub async fn move_slider_with_mouse(&self, fraction: f64) -> Result<()> {
        let fraction = fraction.clamp(0.0, 1.0);
        let bounds = self.driver.bounding_box(&self.slider).await?;
        let y = bounds.center_y();
        tracing::debug!(fraction, ?bounds, "dragging slider");

        self.driver.mouse_move(bounds.x, y).await?;
        self.driver.mouse_down().await?;
        self.driver
            .mouse_move(bounds.x + bounds.width * fraction, y)
            .await?;
        self.driver.mouse_up().await
    }

    /// Value shown next to the slider (e.g. "2.5")
    pub async fn slider_value(&self) -> Result<String> {
        trimmed_text(&self.driver, &self.label).await
    }
}
