#![warn(clippy::all)]

//! IQ Travel landing page.
//!
//! An animated map of Greece with pulsing location markers, drifting ambient
//! particles and pointer parallax, a Greek/English language toggle, and a
//! contact modal that relays messages to a configured HTTP endpoint.

mod anim;
mod contact;
mod geo;
mod hero;
mod i18n;
mod state;
mod ui;

use contact::ContactChannel;
use eframe::egui;
use state::{AppState, Settings};
use web_time::Instant;

// Native entry point
#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    env_logger::init();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("IQ Travel")
            .with_inner_size([1280.0, 800.0]),
        ..Default::default()
    };

    eframe::run_native(
        "IQ Travel",
        native_options,
        Box::new(|cc| Ok(Box::new(LandingApp::new(cc)))),
    )
}

// WASM entry point - main is not called on wasm32
#[cfg(target_arch = "wasm32")]
fn main() {}

/// Element id of the canvas the hero renders into.
#[cfg(target_arch = "wasm32")]
const CANVAS_ID: &str = "hero_canvas";

/// Entry point for the WASM application.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub async fn start() {
    use eframe::wasm_bindgen::JsCast as _;

    // Redirect `log` messages to `console.log`:
    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::warn!("No document available, hero not started");
            return;
        };

        // A page without the hero canvas simply has no hero
        let Some(canvas) = document
            .get_element_by_id(CANVAS_ID)
            .and_then(|el| el.dyn_into::<web_sys::HtmlCanvasElement>().ok())
        else {
            log::warn!("Canvas #{} not found, hero not started", CANVAS_ID);
            return;
        };

        let start_result = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| Ok(Box::new(LandingApp::new(cc)))),
            )
            .await;

        // Remove the loading text once the app has loaded:
        if let Some(loading_text) = document.get_element_by_id("loading_text") {
            match start_result {
                Ok(_) => {
                    loading_text.remove();
                }
                Err(e) => {
                    loading_text.set_inner_html(
                        "<p>The page failed to start. See the developer console for details.</p>",
                    );
                    log::error!("Failed to start eframe: {e:?}");
                }
            }
        }
    });
}

/// Main application state and logic.
pub struct LandingApp {
    /// Application state containing all sub-states
    state: AppState,

    /// Channel for background contact submissions
    contact_channel: ContactChannel,
}

impl LandingApp {
    /// Creates a new LandingApp instance.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);
        cc.egui_ctx.set_visuals(egui::Visuals::dark());

        let settings = Settings::load();
        if !settings.is_contact_configured() {
            log::warn!("No contact endpoint configured, the form will report it is not connected");
        }

        Self {
            state: AppState::new(settings),
            contact_channel: ContactChannel::new(),
        }
    }

    /// Applies a finished submission and schedules the success auto-close.
    fn poll_contact(&mut self, ctx: &egui::Context) {
        let now = Instant::now();

        if let Some(result) = self.contact_channel.try_recv() {
            self.state.contact.finish(result, now);
        }

        if let Some(remaining) = self.state.contact.tick(now) {
            ctx.request_repaint_after(remaining);
        }
    }
}

impl eframe::App for LandingApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_contact(ctx);

        ui::render_top_bar(ctx, &mut self.state);
        ui::render_hero_panel(ctx, &mut self.state);
        ui::render_contact_modal(ctx, &mut self.state, &mut self.contact_channel);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.state.hero.frame_loop.stop();
        self.state.settings.save();
    }
}
