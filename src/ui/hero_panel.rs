//! Central hero panel: animated map with the headline overlay on top.

use super::colors;
use crate::hero::{hovered_marker, render_hero_scene, render_marker_label};
use crate::i18n::{Language, Text};
use crate::state::{AppState, IntroItem, IntroTimeline};
use eframe::egui::{self, Align, Layout, Rect, RichText, Sense, Vec2};
use egui_phosphor::regular as icons;
use web_time::Instant;

/// Fixed vertical room reserved per overlay row so sliding rows don't reflow.
const ROW_SLIDE: f32 = crate::state::INTRO_RISE;

pub fn render_hero_panel(ctx: &egui::Context, state: &mut AppState) {
    egui::CentralPanel::default()
        .frame(egui::Frame::NONE.fill(colors::page::BACKGROUND))
        .show(ctx, |ui| {
            let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::hover());
            let rect = response.rect;

            drive_scene(ctx, state, rect);

            render_hero_scene(&painter, rect, &state.hero);

            if let Some(pos) = response.hover_pos() {
                if let Some(marker) = hovered_marker(rect, &state.hero, pos) {
                    render_marker_label(&painter, rect, &state.hero, marker);
                }
            }

            draw_overlay(ui, rect, state);
        });
}

/// Feeds viewport and pointer into the scene and ticks its loop.
fn drive_scene(ctx: &egui::Context, state: &mut AppState, rect: Rect) {
    let scene = &mut state.hero;
    scene.camera.sync_viewport(rect.size());

    if let Some(pos) = ctx.input(|i| i.pointer.latest_pos()) {
        scene.pointer_moved(pos - rect.min, rect.size());
    }

    let now = Instant::now();
    if !state.settings.reduced_motion && !scene.frame_loop.is_running() {
        scene.frame_loop.start(now);
    }

    if scene.advance(now) {
        ctx.request_repaint();
    }
}

fn draw_overlay(ui: &mut egui::Ui, rect: Rect, state: &mut AppState) {
    if rect.width() <= 0.0 || rect.height() <= 0.0 {
        return;
    }

    let lang = state.language();
    let t = state.intro_time();

    let margin = (rect.width() * 0.06).clamp(16.0, 64.0);
    let width = (rect.width() * 0.46).clamp(280.0, 560.0).min(rect.width() - margin);
    let overlay_rect = Rect::from_min_size(
        rect.left_top() + Vec2::new(margin, rect.height() * 0.18),
        Vec2::new(width, rect.height() * 0.78),
    );

    let mut open_contact = false;

    ui.scope_builder(egui::UiBuilder::new().max_rect(overlay_rect), |ui| {
        ui.with_layout(Layout::top_down(Align::Min), |ui| {
            let intro = &state.intro;

            intro_row(ui, intro, IntroItem::Badge, t, |ui| {
                egui::Frame::NONE
                    .fill(colors::page::BADGE_FILL)
                    .corner_radius(12.0)
                    .inner_margin(egui::Margin::symmetric(10, 4))
                    .show(ui, |ui| {
                        ui.label(
                            RichText::new(format!("{} {}", icons::MAP_PIN, lang.text(Text::HeroBadge)))
                                .size(13.0)
                                .color(colors::page::ACCENT_BRIGHT),
                        );
                    });
            });

            intro_row(ui, intro, IntroItem::TitleLine1, t, |ui| {
                ui.label(
                    RichText::new(lang.text(Text::HeroTitleLine1))
                        .strong()
                        .size(44.0)
                        .color(colors::page::TEXT),
                );
            });

            intro_row(ui, intro, IntroItem::TitleLine2, t, |ui| {
                ui.label(
                    RichText::new(lang.text(Text::HeroTitleLine2))
                        .strong()
                        .size(44.0)
                        .color(colors::page::ACCENT),
                );
            });

            intro_row(ui, intro, IntroItem::Subtitle, t, |ui| {
                ui.label(
                    RichText::new(lang.text(Text::HeroSubtitle))
                        .size(17.0)
                        .color(colors::page::MUTED),
                );
            });

            intro_row(ui, intro, IntroItem::Buttons, t, |ui| {
                let cta = egui::Button::new(
                    RichText::new(format!("{} {}", icons::PAPER_PLANE_TILT, lang.text(Text::HeroCta)))
                        .size(16.0)
                        .color(colors::page::BACKGROUND),
                )
                .fill(colors::page::ACCENT)
                .min_size(Vec2::new(180.0, 40.0));

                if ui.add(cta).clicked() {
                    open_contact = true;
                }
            });

            intro_row(ui, intro, IntroItem::Stats, t, |ui| {
                draw_stats(ui, intro, lang, t);
            });
        });
    });

    if open_contact {
        state.contact.open();
    }
}

/// Adds one overlay row faded and slid according to its tween.
fn intro_row(
    ui: &mut egui::Ui,
    intro: &IntroTimeline,
    item: IntroItem,
    t: f32,
    add_contents: impl FnOnce(&mut egui::Ui),
) {
    let (opacity, offset) = intro.item(item, t);

    ui.add_space(offset);
    ui.scope(|ui| {
        ui.multiply_opacity(opacity);
        add_contents(ui);
    });
    ui.add_space(ROW_SLIDE - offset);
}

fn draw_stats(ui: &mut egui::Ui, intro: &IntroTimeline, lang: Language, t: f32) {
    let stats = [
        (intro.destinations.value(t).to_string(), Text::StatDestinations),
        (intro.hubs.value(t).to_string(), Text::StatHubs),
        (format!("{}/7", intro.support_hours.value(t)), Text::StatSupportHours),
    ];

    ui.horizontal(|ui| {
        for (i, (value, label)) in stats.iter().enumerate() {
            if i > 0 {
                ui.add_space(28.0);
            }
            ui.vertical(|ui| {
                ui.label(
                    RichText::new(value)
                        .strong()
                        .size(30.0)
                        .color(colors::page::ACCENT_BRIGHT),
                );
                ui.label(
                    RichText::new(lang.text(*label))
                        .size(12.0)
                        .color(colors::page::MUTED),
                );
            });
        }
    });
}
