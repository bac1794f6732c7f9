/**
 * egui Native Desktop App - Main Entry Point
 *
 * Boots the study group tracker client. Each frame drains finished async
 * work, renders the top bar and the active screen, and schedules a repaint
 * while anything is still in flight.
 */
use eframe::egui;

use code_kimbap::egui_app::{views, AppState, Screen};

fn main() -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 640.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "코드 김밥",
        options,
        Box::new(|_cc| Ok(Box::new(KimbapApp::default()))),
    )
}

/// Main application
struct KimbapApp {
    state: AppState,
}

impl Default for KimbapApp {
    fn default() -> Self {
        Self {
            state: AppState::new(),
        }
    }
}

impl eframe::App for KimbapApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.state.poll_results();

        views::render_top_bar(ctx, &mut self.state, frame);

        egui::CentralPanel::default().show(ctx, |ui| match self.state.screen {
            Screen::Login => views::login_view::render(ui, &mut self.state),
            Screen::Signup => views::signup_view::render(ui, &mut self.state),
            Screen::Entry => views::entry_header::render(ui, &mut self.state),
        });

        if self.state.has_pending_work() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
