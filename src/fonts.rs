//! egui's bundled fonts have no Thai glyphs, so borrow one from the system.

use eframe::egui;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, warn};

const THAI_FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/noto/NotoSansThai-Regular.ttf",
    "/usr/share/fonts/noto/NotoSansThai-Regular.ttf",
    "/usr/share/fonts/google-noto/NotoSansThai-Regular.ttf",
    "/usr/share/fonts/truetype/tlwg/Garuda.ttf",
    "/usr/share/fonts/truetype/tlwg/Loma.ttf",
    "/System/Library/Fonts/Thonburi.ttc",
    "/Library/Fonts/Thonburi.ttf",
    "C:\\Windows\\Fonts\\LeelawUI.ttf",
    "C:\\Windows\\Fonts\\tahoma.ttf",
];

const FALLBACK_NAME: &str = "thai-fallback";

pub fn install_thai_fallback(ctx: &egui::Context) {
    let found = THAI_FONT_CANDIDATES
        .iter()
        .map(Path::new)
        .find_map(|path| std::fs::read(path).ok().map(|bytes| (path, bytes)));

    match found {
        Some((path, bytes)) => {
            debug!(path = %path.display(), "Using Thai fallback font");
            let mut fonts = egui::FontDefinitions::default();
            add_fallback(&mut fonts, FALLBACK_NAME, bytes);
            ctx.set_fonts(fonts);
        }
        None => warn!("No Thai font found; labels may render as boxes"),
    }
}

/// Appends `bytes` as the last resort for both font families.
fn add_fallback(fonts: &mut egui::FontDefinitions, name: &str, bytes: Vec<u8>) {
    fonts
        .font_data
        .insert(name.to_owned(), Arc::new(egui::FontData::from_owned(bytes)));
    for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .push(name.to_owned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_goes_last_in_each_family() {
        let mut fonts = egui::FontDefinitions::default();
        add_fallback(&mut fonts, "extra", vec![0u8; 4]);

        assert!(fonts.font_data.contains_key("extra"));
        for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
            assert_eq!(
                fonts.families[&family].last().map(String::as_str),
                Some("extra")
            );
        }
    }
}
