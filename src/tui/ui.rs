use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::core::route::Route;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::input_box::INPUT_HEIGHT;
use crate::tui::components::{MessageList, TitleBar};

/// Draws the screen for the current route.
pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    let area = frame.area();
    match app.route {
        Route::Landing => tui.landing.render(frame, area),
        Route::Chatbot => draw_chat(frame, area, app, tui, spinner_frame),
    }
}

fn draw_chat(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let [title_area, main_area, input_area] =
        Layout::vertical([Length(1), Min(0), Length(INPUT_HEIGHT)]).areas(area);

    TitleBar::new(
        app.client.endpoint().to_string(),
        app.status_message.clone(),
    )
    .render(frame, title_area);

    MessageList::new(
        &mut tui.message_list,
        &app.session.transcript,
        app.session.is_awaiting(),
        spinner_frame,
    )
    .render(frame, main_area);

    tui.input_box.disabled = app.session.is_awaiting();
    tui.input_box.render(frame, input_area);
}
