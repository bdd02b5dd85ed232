use crate::app::state::AppState;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::modals::ModalManager;
use crate::components::page::PageView;
use crate::components::search_bar::SearchBar;
use crate::components::toast::ToastStack;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

pub struct AppLayout {
    pub header: Rect,
    pub search_bar: Rect,
    pub body: Rect,
    pub footer: Rect,
}

pub fn get_layout(area: Rect) -> AppLayout {
    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(3), // Search bar
            Constraint::Min(0),    // Page
            Constraint::Length(1), // Footer
        ])
        .split(area);

    // Keep the search bar to a readable width on wide terminals.
    let search_width = area.width.min(80);
    let search_bar = Rect {
        x: main[1].x + (main[1].width.saturating_sub(search_width)) / 2,
        width: search_width.min(main[1].width),
        ..main[1]
    };

    AppLayout {
        header: main[0],
        search_bar,
        body: main[2],
        footer: main[3],
    }
}

pub fn draw(f: &mut Frame, app_state: &AppState) {
    let area = f.area();
    if area.width == 0 || area.height == 0 {
        return;
    }

    let theme = &app_state.theme;
    let layout = get_layout(area);

    if layout.header.height > 0 {
        f.render_widget(
            Header {
                route: &app_state.route,
                recent_count: app_state.recent_searches.len(),
                theme,
            },
            layout.header,
        );
    }

    if layout.search_bar.height > 0 {
        f.render_widget(
            SearchBar {
                theme,
                open_hint: app_state.keymap.label_for(&crate::app::action::Action::OpenPalette),
                focused: app_state.command_palette.is_some(),
            },
            layout.search_bar,
        );
    }

    if layout.body.height > 0 {
        f.render_widget(
            PageView {
                route: &app_state.route,
                search: &app_state.search,
                theme,
            },
            layout.body,
        );
    }

    if layout.footer.height > 0 {
        f.render_widget(
            Footer {
                state: app_state,
                theme,
            },
            layout.footer,
        );
    }

    f.render_widget(
        ModalManager {
            theme,
            app_state,
        },
        area,
    );

    if !app_state.toasts.is_empty() {
        f.render_widget(
            ToastStack {
                toasts: &app_state.toasts,
                theme,
            },
            layout.body,
        );
    }
}
