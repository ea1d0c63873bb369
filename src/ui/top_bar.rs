//! Top bar UI: brand, language toggle, and contact button.

use super::colors;
use crate::i18n::{Language, Text};
use crate::state::AppState;
use eframe::egui::{self, RichText};
use egui_phosphor::regular as icons;

pub fn render_top_bar(ctx: &egui::Context, state: &mut AppState) {
    let lang = state.language();

    egui::TopBottomPanel::top("top_bar")
        .exact_height(44.0)
        .frame(egui::Frame::NONE.fill(colors::page::BAR).inner_margin(egui::Margin::symmetric(16, 0)))
        .show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                ui.label(
                    RichText::new(format!("{} IQ Travel", icons::GLOBE_HEMISPHERE_EAST))
                        .strong()
                        .size(17.0)
                        .color(colors::page::TEXT),
                );

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let contact = ui.button(
                        RichText::new(format!(
                            "{} {}",
                            icons::ENVELOPE_SIMPLE,
                            lang.text(Text::NavContact)
                        ))
                        .color(colors::page::ACCENT_BRIGHT),
                    );
                    if contact.clicked() {
                        state.contact.open();
                    }

                    ui.separator();

                    if ui
                        .button(language_toggle_label(lang))
                        .on_hover_text(lang.toggled().label())
                        .clicked()
                    {
                        state.toggle_language();
                    }

                    ui.separator();

                    let mut reduced = state.settings.reduced_motion;
                    if ui
                        .checkbox(
                            &mut reduced,
                            RichText::new(lang.text(Text::ReducedMotion))
                                .size(12.0)
                                .color(colors::page::MUTED),
                        )
                        .changed()
                    {
                        state.set_reduced_motion(reduced);
                    }
                });
            });
        });
}

/// "EL | EN" with the active language first and highlighted.
fn language_toggle_label(active: Language) -> RichText {
    RichText::new(format!(
        "{} {} | {}",
        icons::TRANSLATE,
        active.label(),
        active.toggled().label()
    ))
    .size(13.0)
    .color(colors::page::TEXT)
}
