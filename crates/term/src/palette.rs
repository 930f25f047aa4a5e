//! Concrete styles for each [`Paint`] kind.

use crate::fb::{CellStyle, Rgb};
use crate::types::Paint;

const BLACK: Rgb = Rgb::new(0, 0, 0);

/// Heart: red on black.
pub const HEART: CellStyle = CellStyle {
    fg: Rgb::new(220, 40, 40),
    bg: BLACK,
    bold: true,
    reverse: false,
};

/// Border: a reverse-video blank, so the cell shows as a solid block of the
/// foreground color.
pub const BORDER: CellStyle = CellStyle {
    fg: Rgb::new(220, 220, 220),
    bg: BLACK,
    bold: false,
    reverse: true,
};

pub const TEXT: CellStyle = CellStyle {
    fg: Rgb::new(200, 200, 200),
    bg: BLACK,
    bold: false,
    reverse: false,
};

pub const STATUS: CellStyle = CellStyle {
    fg: Rgb::new(140, 180, 220),
    bg: BLACK,
    bold: false,
    reverse: false,
};

pub fn style_for(paint: Paint) -> CellStyle {
    match paint {
        Paint::Blank => CellStyle::default(),
        Paint::Heart => HEART,
        Paint::Border => BORDER,
        Paint::Text => TEXT,
        Paint::Status => STATUS,
    }
}
