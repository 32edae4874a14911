use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::{draw_article_list, draw_empty_state};
use crate::app::{App, DraftField};
use crate::views::article_count_label;

pub(super) fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let labels = app.labels();
    let [form, list] =
        Layout::horizontal([Constraint::Percentage(35), Constraint::Percentage(65)]).areas(area);

    draw_form(frame, app, form);

    let count = article_count_label(app.store.len(), labels.locale);
    let title = Line::from(format!(" {} · {} ", labels.published_articles, count));
    let articles = app.visible_articles();

    if articles.is_empty() {
        draw_empty_state(frame, list, title, labels.no_articles, labels.admin_empty_hint);
        return;
    }

    draw_article_list(frame, list, &articles, app.selected, title, true);
}

fn draw_form(frame: &mut Frame, app: &App, area: Rect) {
    let labels = app.labels();
    let mut lines = Vec::new();

    for field in DraftField::ALL {
        let focused = app.draft.focus == field;
        let label_style = if focused {
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };

        lines.push(Line::from(Span::styled(labels.field(field), label_style)));

        let mut value = vec![Span::raw(app.draft.value(field).to_string())];
        if focused {
            value.push(Span::styled("█", Style::default().fg(Color::DarkGray)));
        }
        lines.push(Line::from(value));
        lines.push(Line::default());
    }

    let publish_style = if app.draft.can_publish() {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Magenta)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    lines.push(Line::from(Span::styled(labels.publish, publish_style)));

    let form = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(labels.new_article),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(form, area);
}
