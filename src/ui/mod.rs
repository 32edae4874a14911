mod admin;
mod browse;

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::models::{Article, Screen};

pub fn draw(frame: &mut Frame, app: &App) {
    let [body, status] =
        Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(frame.area());

    match app.screen {
        Screen::Browse => browse::draw(frame, app, body),
        Screen::Admin => admin::draw(frame, app, body),
    }

    draw_status(frame, app, status);
}

fn draw_status(frame: &mut Frame, app: &App, area: Rect) {
    let labels = app.labels();
    let hints = match app.screen {
        Screen::Browse => labels.browse_keys,
        Screen::Admin => labels.admin_keys,
    };

    let line = match &app.status {
        Some(msg) => Line::from(vec![
            Span::styled(msg.as_str(), Style::default().fg(Color::Yellow)),
            Span::raw("  "),
            Span::styled(hints, Style::default().fg(Color::DarkGray)),
        ]),
        None => Line::from(Span::styled(hints, Style::default().fg(Color::DarkGray))),
    };

    frame.render_widget(Paragraph::new(line), area);
}

/// One card per article: title and category, wrapped excerpt, date and
/// read time, image URL.
fn article_card(article: &Article, width: u16, show_excerpt: bool) -> ListItem<'static> {
    let mut lines = vec![Line::from(vec![
        Span::styled(
            article.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            format!("[{}]", article.category),
            Style::default().fg(Color::Cyan),
        ),
    ])];

    if show_excerpt {
        let wrap_width = usize::from(width.saturating_sub(4)).max(10);
        for chunk in textwrap::wrap(&article.excerpt, wrap_width) {
            lines.push(Line::from(Span::styled(
                chunk.into_owned(),
                Style::default().fg(Color::Gray),
            )));
        }
    }

    lines.push(Line::from(Span::styled(
        format!("{} · {}", article.date, article.read_time),
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(Span::styled(
        article.image.clone(),
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    )));
    lines.push(Line::default());

    ListItem::new(lines)
}

fn draw_article_list(
    frame: &mut Frame,
    area: Rect,
    articles: &[Article],
    selected: usize,
    title: Line<'static>,
    show_excerpt: bool,
) {
    let items: Vec<ListItem> = articles
        .iter()
        .map(|a| article_card(a, area.width, show_excerpt))
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().bg(Color::Rgb(40, 40, 60)))
        .highlight_symbol("▌ ");

    let mut state = ListState::default();
    if !articles.is_empty() {
        state.select(Some(selected.min(articles.len() - 1)));
    }

    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_empty_state(frame: &mut Frame, area: Rect, title: Line<'static>, heading: &str, hint: &str) {
    let text = vec![
        Line::default(),
        Line::from(Span::styled(
            heading.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            hint.to_string(),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title(title))
        .alignment(ratatui::layout::Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}
