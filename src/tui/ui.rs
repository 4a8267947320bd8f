//! Screen composition: carves the frame into panes and hands each one to
//! its component. The welcome page short-circuits everything else until
//! the user dismisses it.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;

use crate::core::state::{App, Page};
use crate::tui::component::Component;
use crate::tui::components::{
    CountryInfo, Favorites, GemList, MapView, SearchBox, TitleBar, WelcomePage,
};
use crate::tui::{Focus, TuiState};

/// Width of the favorites sidebar, shown on every page.
const SIDEBAR_WIDTH: u16 = 30;
/// Height of the fact pane under the map.
const INFO_HEIGHT: u16 = 12;

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    if !app.session.welcome_dismissed() {
        WelcomePage::new(tui.pulse_value).render(frame, frame.area());
        return;
    }

    use Constraint::{Length, Min};
    let [title_area, main_area, help_area] =
        Layout::vertical([Length(1), Min(0), Length(1)]).areas(frame.area());

    TitleBar::new(app.page, app.notice.clone(), app.is_loading(), spinner_frame)
        .render(frame, title_area);

    let [content_area, sidebar_area] =
        Layout::horizontal([Min(0), Length(SIDEBAR_WIDTH)]).areas(main_area);

    match app.page {
        Page::Home => draw_home(frame, content_area, app, tui),
        Page::HiddenGems => draw_gems(frame, content_area, app, tui),
    }

    let favorites_focused = app.page == Page::Home && tui.focus == Focus::Favorites;
    Favorites::new(&mut tui.favorites_state, app.session.favorites(), favorites_focused)
        .render(frame, sidebar_area);

    draw_help(frame, help_area, app, tui);
}

fn draw_home(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let [search_area, map_area, info_area] =
        Layout::vertical([Length(SearchBox::HEIGHT), Min(0), Length(INFO_HEIGHT)]).areas(area);

    let selected_country = app
        .session
        .selected()
        .and_then(|name| app.countries.find(name));
    MapView::new(app.countries.countries(), app.session.favorites(), selected_country)
        .render(frame, map_area);

    CountryInfo::new(app.detail.as_ref(), app.session.selected(), app.is_fetching_detail)
        .render(frame, info_area);

    // Rendered last so the suggestion dropdown overlays the map.
    tui.search_box.render(frame, search_area);
}

fn draw_gems(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let [location_area, gems_area] =
        Layout::vertical([Length(SearchBox::HEIGHT), Min(0)]).areas(area);

    GemList::new(
        &mut tui.gem_list_state,
        app.gems.as_deref(),
        app.gems_location.as_deref(),
        app.is_fetching_gems,
    )
    .render(frame, gems_area);

    tui.location_box.render(frame, location_area);
}

fn draw_help(frame: &mut Frame, area: Rect, app: &App, tui: &TuiState) {
    let text = match app.page {
        Page::Home if tui.focus == Focus::Favorites => {
            " Up/Down Move  Enter Open  d Remove  Esc Back  ^C Quit "
        }
        Page::Home => {
            " Enter Select  Tab Gems  ^R Random  ^F Fav  ^U Unfav  ^L Clear  ^O Favorites  F5 Refresh  ^C Quit "
        }
        Page::HiddenGems => " Enter Search  Tab Map  PgUp/PgDn Scroll  ^C Quit ",
    };
    frame.render_widget(
        Line::styled(text, Style::default().fg(Color::DarkGray)),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::core::state::Notice;
    use crate::test_support::test_app;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw_to_text(app: &App, tui: &mut TuiState) -> String {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui, 0)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_welcome_page_gates_everything() {
        let app = test_app();
        let mut tui = TuiState::new();
        let text = draw_to_text(&app, &mut tui);
        assert!(text.contains("Welcome to Treasure Hunter"));
        assert!(!text.contains("World Map"));
    }

    #[test]
    fn test_home_page_panes() {
        let mut app = test_app();
        update(&mut app, Action::DismissWelcome);
        let mut tui = TuiState::new();
        let text = draw_to_text(&app, &mut tui);
        assert!(text.contains("Treasure Hunter"));
        assert!(text.contains("Search for a Country"));
        assert!(text.contains("World Map"));
        assert!(text.contains("Country Information"));
        assert!(text.contains("My Favorites"));
    }

    #[test]
    fn test_gems_page_panes() {
        let mut app = test_app();
        update(&mut app, Action::DismissWelcome);
        update(&mut app, Action::SwitchPage);
        let mut tui = TuiState::new();
        let text = draw_to_text(&app, &mut tui);
        assert!(text.contains("Enter the country to find hidden gems"));
        assert!(text.contains("Hidden Gems"));
        assert!(text.contains("My Favorites"));
    }

    #[test]
    fn test_help_line_names_the_focus_bindings() {
        let mut app = test_app();
        update(&mut app, Action::DismissWelcome);
        let mut tui = TuiState::new();
        let text = draw_to_text(&app, &mut tui);
        // Ctrl+O focuses the sidebar; Ctrl+F favorites the selection.
        assert!(text.contains("^O Favorites"));
        assert!(text.contains("^F Fav"));

        tui.focus = Focus::Favorites;
        let text = draw_to_text(&app, &mut tui);
        assert!(text.contains("Enter Open"));
        assert!(text.contains("Esc Back"));
    }

    #[test]
    fn test_notice_appears_in_title_bar() {
        let mut app = test_app();
        update(&mut app, Action::DismissWelcome);
        app.notice = Some(Notice::success("Added Nepal to favorites!"));
        let mut tui = TuiState::new();
        let text = draw_to_text(&app, &mut tui);
        assert!(text.contains("Added Nepal to favorites!"));
    }

    #[test]
    fn test_selected_country_appears_on_map() {
        let mut app = test_app();
        update(&mut app, Action::DismissWelcome);
        update(
            &mut app,
            Action::CountriesLoaded(vec![crate::api::Country {
                name: "Nepal".to_string(),
                latitude: 28.0,
                longitude: 84.0,
            }]),
        );
        update(&mut app, Action::Select("nepal".to_string()));
        let mut tui = TuiState::new();
        let text = draw_to_text(&app, &mut tui);
        assert!(text.contains("Selected Country: Nepal"));
        assert!(text.contains("Information about Nepal"));
    }
}
