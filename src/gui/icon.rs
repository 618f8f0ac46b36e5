// src/gui/icon.rs
// Window icon drawn in memory: three rising bars.

use eframe::egui::IconData;
use image::{Rgba, RgbaImage};

const SIZE: u32 = 32;
const FILL: Rgba<u8> = Rgba([76, 114, 176, 255]);
const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);

// (first column, last column exclusive, height)
const BARS: [(u32, u32, u32); 3] = [(4, 10, 12), (13, 19, 20), (22, 28, 28)];

fn icon_image() -> RgbaImage {
    RgbaImage::from_fn(SIZE, SIZE, |x, y| {
        let filled = BARS
            .iter()
            .any(|&(from, to, height)| (from..to).contains(&x) && y >= SIZE - height);
        if filled { FILL } else { CLEAR }
    })
}

pub fn app_icon() -> IconData {
    let rgba = icon_image();
    let (w, h) = rgba.dimensions();
    IconData { rgba: rgba.into_raw(), width: w, height: h }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_is_square_rgba() {
        let icon = app_icon();
        assert_eq!((icon.width, icon.height), (SIZE, SIZE));
        assert_eq!(icon.rgba.len(), (SIZE * SIZE * 4) as usize);
    }

    #[test]
    fn bars_rise_left_to_right() {
        let img = icon_image();
        assert_eq!(*img.get_pixel(5, SIZE - 1), FILL);
        assert_eq!(*img.get_pixel(5, SIZE - 13), CLEAR);
        assert_eq!(*img.get_pixel(25, 4), FILL);
        assert_eq!(*img.get_pixel(11, SIZE - 1), CLEAR);
    }
}
