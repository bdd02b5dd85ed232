use crate::app::state::ToastStore;
use crate::domain::models::ToastKind;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

const TOAST_WIDTH: u16 = 36;
const TOAST_HEIGHT: u16 = 4;

/// Newest toast at the top-right corner, older ones stacked beneath.
pub struct ToastStack<'a> {
    pub toasts: &'a ToastStore,
    pub theme: &'a Theme,
}

impl Widget for ToastStack<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(buf.area);
        if area.width < TOAST_WIDTH + 2 || area.height < TOAST_HEIGHT {
            return;
        }

        let x = area.right() - TOAST_WIDTH - 1;
        for (i, toast) in self.toasts.iter().rev().enumerate() {
            let y = area.y + i as u16 * TOAST_HEIGHT;
            if y + TOAST_HEIGHT > area.bottom() {
                break;
            }
            let rect = Rect::new(x, y, TOAST_WIDTH, TOAST_HEIGHT);
            let style = match toast.notification.kind {
                ToastKind::Info => self.theme.toast_info,
                ToastKind::Success => self.theme.toast_success,
                ToastKind::Warning => self.theme.toast_warn,
                ToastKind::Error => self.theme.toast_error,
            };

            Clear.render(rect, buf);
            Paragraph::new(vec![
                Line::from(Span::styled(toast.notification.title.as_str(), style)),
                Line::from(Span::styled(
                    toast.notification.description.as_str(),
                    self.theme.page_text,
                )),
            ])
            .block(Block::default().borders(Borders::ALL).border_style(style))
            .render(rect, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::Notification;

    #[test]
    fn test_newest_toast_on_top() {
        let mut store = ToastStore::default();
        store.push(Notification::info("First", "one"));
        store.push(Notification::warning("Second", "two"));
        let theme = Theme::default();

        let area = Rect::new(0, 0, 60, 12);
        let mut buf = Buffer::empty(area);
        ToastStack {
            toasts: &store,
            theme: &theme,
        }
        .render(area, &mut buf);

        let row = |y: u16| -> String {
            (0..area.width)
                .map(|x| buf[(x, y)].symbol().to_string())
                .collect()
        };
        assert!(row(1).contains("Second"));
        assert!(row(5).contains("First"));
    }
}
