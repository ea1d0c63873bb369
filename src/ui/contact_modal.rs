//! Contact modal: form, inline errors, sending state and success panel.

use super::colors;
use crate::contact::{ContactChannel, Field, FieldError};
use crate::i18n::{Language, Text};
use crate::state::{AppState, ContactStatus};
use eframe::egui::{self, RichText};
use egui_phosphor::regular as icons;
use web_time::Instant;

pub fn render_contact_modal(ctx: &egui::Context, state: &mut AppState, channel: &mut ContactChannel) {
    if !state.contact.open {
        return;
    }

    let lang = state.language();
    let mut close_clicked = false;
    let mut submit_clicked = false;

    let modal = egui::Modal::new(egui::Id::new("contact_modal")).show(ctx, |ui| {
        ui.set_width(420.0);

        ui.horizontal(|ui| {
            ui.label(
                RichText::new(lang.text(Text::ContactTitle))
                    .strong()
                    .size(20.0)
                    .color(colors::page::TEXT),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .button(RichText::new(icons::X).size(16.0))
                    .on_hover_text(lang.text(Text::Close))
                    .clicked()
                {
                    close_clicked = true;
                }
            });
        });
        ui.add_space(4.0);

        let contact = &mut state.contact;

        if let ContactStatus::Sent { .. } = contact.status {
            draw_success(ui, lang);
            return;
        }

        ui.label(
            RichText::new(lang.text(Text::ContactIntro))
                .size(13.0)
                .color(colors::page::MUTED),
        );
        ui.add_space(10.0);

        let name_error = contact.field_error(Field::Name);
        let email_error = contact.field_error(Field::Email);
        let message_error = contact.field_error(Field::Message);

        form_field(
            ui,
            lang,
            Text::FieldName,
            Text::PlaceholderName,
            &mut contact.form.name,
            name_error,
            false,
        );
        form_field(
            ui,
            lang,
            Text::FieldEmail,
            Text::PlaceholderEmail,
            &mut contact.form.email,
            email_error,
            false,
        );
        form_field(
            ui,
            lang,
            Text::FieldSubject,
            Text::SubjectDefault,
            &mut contact.form.subject,
            None,
            false,
        );
        form_field(
            ui,
            lang,
            Text::FieldMessage,
            Text::PlaceholderMessage,
            &mut contact.form.message,
            message_error,
            true,
        );

        if let ContactStatus::Failed(err) = &contact.status {
            ui.add_space(4.0);
            ui.label(
                RichText::new(format!("{} {}", icons::WARNING_CIRCLE, err.user_message(lang)))
                    .size(13.0)
                    .color(colors::form::ERROR),
            );
        }

        ui.add_space(8.0);

        let sending = contact.is_sending() || channel.is_sending();
        let label = if sending {
            lang.text(Text::Sending)
        } else {
            lang.text(Text::Submit)
        };
        let button = egui::Button::new(
            RichText::new(format!("{} {}", icons::PAPER_PLANE_TILT, label))
                .size(15.0)
                .color(colors::page::BACKGROUND),
        )
        .fill(colors::page::ACCENT)
        .min_size(egui::vec2(ui.available_width(), 36.0));

        if ui.add_enabled(!sending, button).clicked() {
            submit_clicked = true;
        }
    });

    if submit_clicked {
        submit(ctx, state, channel);
    }

    if close_clicked || modal.should_close() {
        state.contact.close();
    }
}

/// Validates the form and hands the payload to the channel.
fn submit(ctx: &egui::Context, state: &mut AppState, channel: &mut ContactChannel) {
    let lang = state.language();

    match state.contact.form.validate(lang) {
        Ok(payload) => {
            if channel.submit(ctx, &state.settings.contact_endpoint, payload) {
                state.contact.begin_sending();
            }
        }
        Err(e) => {
            log::debug!("Contact form rejected locally: {}", e);
            state.contact.finish(Err(e), Instant::now());
        }
    }
}

fn form_field(
    ui: &mut egui::Ui,
    lang: Language,
    label: Text,
    hint: Text,
    value: &mut String,
    error: Option<FieldError>,
    multiline: bool,
) {
    ui.label(
        RichText::new(lang.text(label))
            .size(12.0)
            .color(colors::form::LABEL),
    );

    let edit = if multiline {
        egui::TextEdit::multiline(value).desired_rows(4)
    } else {
        egui::TextEdit::singleline(value)
    };
    ui.add(edit.hint_text(lang.text(hint)).desired_width(f32::INFINITY));

    if let Some(error) = error {
        ui.label(
            RichText::new(lang.text(error.text()))
                .size(11.0)
                .color(colors::form::ERROR),
        );
    }
    ui.add_space(6.0);
}

fn draw_success(ui: &mut egui::Ui, lang: Language) {
    ui.add_space(16.0);
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new(icons::CHECK_CIRCLE)
                .size(44.0)
                .color(colors::form::SUCCESS),
        );
        ui.label(
            RichText::new(lang.text(Text::SuccessTitle))
                .strong()
                .size(20.0)
                .color(colors::page::TEXT),
        );
        ui.label(
            RichText::new(lang.text(Text::SuccessBody))
                .size(14.0)
                .color(colors::page::MUTED),
        );
    });
    ui.add_space(16.0);
}
