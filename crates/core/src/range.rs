use std::iter::FusedIterator;

use crate::color::Color;
use crate::distribute::{distribute, Distribute};

/// Generate `n` colors from `start` to `end`, both inclusive.
///
/// Each channel is interpolated independently with [`distribute`] and the
/// samples are truncated back to integers, so intermediate waypoints round
/// toward zero.
///
/// ```
/// use colorlab_core::{color_range, Color};
///
/// let white = Color::new(255.0, 255.0, 255.0);
/// let black = Color::new(0.0, 0.0, 0.0);
/// let colors: Vec<String> = color_range(white, black, 3).map(|c| c.to_string()).collect();
/// assert_eq!(colors, ["<Color 255, 255, 255>", "<Color 127, 127, 127>", "<Color 0, 0, 0>"]);
/// ```
pub fn color_range(start: Color, end: Color, n: usize) -> ColorRange {
    ColorRange::new(start, end, n)
}

/// Iterator returned by [`color_range`].
#[derive(Debug, Clone)]
pub struct ColorRange {
    red: Distribute,
    green: Distribute,
    blue: Distribute,
}

impl ColorRange {
    fn new(start: Color, end: Color, n: usize) -> Self {
        let red = distribute(start.r() as f64, end.r() as f64, n);
        let green = distribute(start.g() as f64, end.g() as f64, n);
        let blue = distribute(start.b() as f64, end.b() as f64, n);
        debug_assert!(red.len() == green.len() && green.len() == blue.len());

        log::debug!("Color range {} -> {} in {} steps", start, end, n);

        Self { red, green, blue }
    }
}

impl Iterator for ColorRange {
    type Item = Color;

    fn next(&mut self) -> Option<Color> {
        match (self.red.next(), self.green.next(), self.blue.next()) {
            (Some(r), Some(g), Some(b)) => Some(Color::new(r, g, b)),
            (None, None, None) => None,
            _ => unreachable!("channel samples out of lockstep"),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.red.size_hint()
    }
}

impl ExactSizeIterator for ColorRange {}

impl FusedIterator for ColorRange {}
