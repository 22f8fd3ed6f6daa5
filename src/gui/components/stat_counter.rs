// src/gui/components/stat_counter.rs
use eframe::egui::{ self, RichText };

/// 12345 -> "12,345"
pub fn thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Share of a tile that must be on screen before its count-up starts.
pub const VISIBLE_THRESHOLD: f32 = 0.4;

/// Fraction of `rect` inside `clip`, 0.0 for an empty rect.
pub fn visible_share(clip: egui::Rect, rect: egui::Rect) -> f32 {
    let area = rect.area();
    if !(area > 0.0) {
        return 0.0;
    }
    let shown = clip.intersect(rect);
    if shown.is_positive() { shown.area() / area } else { 0.0 }
}

pub fn is_shown(clip: egui::Rect, rect: egui::Rect) -> bool {
    visible_share(clip, rect) >= VISIBLE_THRESHOLD
}

/// Draw one counter tile and return its rect (for the visibility check).
pub fn draw(ui: &mut egui::Ui, label: &str, value: u64) -> egui::Rect {
    egui::Frame::group(ui.style())
        .show(ui, |ui| {
            ui.set_min_width(150.0);
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(thousands(value)).size(26.0).strong());
                ui.label(RichText::new(label).weak());
            });
        })
        .response
        .rect
}
