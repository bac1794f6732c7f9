use eframe::egui;

use crate::egui_app::state::{AppState, Screen, UserSlot};
use crate::egui_app::theme::colors;

pub mod entry_header;
pub mod login_view;
pub mod signup_view;

/// Top bar with the app title and, when signed in, the sign-out action.
///
/// Sign-out triggers session termination and a full navigation back to the
/// login screen; the call's own outcome is not surfaced.
pub fn render_top_bar(ctx: &egui::Context, state: &mut AppState, _frame: &mut eframe::Frame) {
    let frame_style = egui::Frame::default()
        .fill(colors::PANEL_BG)
        .inner_margin(egui::Margin::symmetric(12, 8));

    egui::TopBottomPanel::top("top_panel")
        .frame(frame_style)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(
                    colors::TEXT_LIGHT,
                    egui::RichText::new("🍙 코드 김밥").size(18.0).strong(),
                );

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add_space(16.0);
                    let signed_in = matches!(
                        (state.screen, &state.current_user),
                        (Screen::Entry, UserSlot::Ready(Some(_)))
                    );
                    if signed_in {
                        if ui
                            .button(egui::RichText::new("로그아웃").color(colors::TEXT_SECONDARY))
                            .clicked()
                        {
                            state.handle_sign_out();
                        }
                    }
                });
            });
        });
}
