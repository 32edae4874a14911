use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use super::{draw_article_list, draw_empty_state};
use crate::app::App;
use crate::models::Tab;

pub(super) fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let [header, body] = Layout::vertical([Constraint::Length(3), Constraint::Min(3)]).areas(area);

    draw_header(frame, app, header);

    match app.tab {
        Tab::Home => draw_home(frame, app, body),
        Tab::Search => draw_search(frame, app, body),
        Tab::News => draw_news(frame, app, body),
    }
}

fn draw_header(frame: &mut Frame, app: &App, area: Rect) {
    let labels = app.labels();
    let titles: Vec<Line> = Tab::ALL
        .iter()
        .enumerate()
        .map(|(i, tab)| Line::from(format!("{} {}", i + 1, labels.tab(*tab))))
        .collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(
                    " newsdesk ",
                    Style::default()
                        .fg(Color::Magenta)
                        .add_modifier(Modifier::BOLD),
                ))
                .title_bottom(Line::from(labels.admin_shortcut).right_aligned()),
        )
        .select(app.tab.index())
        .highlight_style(
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        );

    frame.render_widget(tabs, area);
}

fn draw_home(frame: &mut Frame, app: &App, area: Rect) {
    let labels = app.labels();
    let title = Line::from(labels.latest_articles);
    let articles = app.visible_articles();

    if articles.is_empty() {
        draw_empty_state(frame, area, title, labels.no_articles, labels.no_articles_hint);
        return;
    }

    draw_article_list(frame, area, &articles, app.selected, title, true);
}

fn draw_search(frame: &mut Frame, app: &App, area: Rect) {
    let labels = app.labels();
    let [input, results] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(3)]).areas(area);

    let query = Paragraph::new(Line::from(vec![
        Span::raw(app.search_query.as_str()),
        Span::styled("█", Style::default().fg(Color::DarkGray)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(labels.search_prompt),
    );
    frame.render_widget(query, input);

    let articles = app.visible_articles();
    let searching = !app.search_query.trim().is_empty();
    let title = if searching {
        Line::from(labels.found(articles.len()))
    } else {
        Line::from(labels.all_articles)
    };

    if articles.is_empty() {
        let (heading, hint) = if searching {
            (labels.nothing_found, labels.nothing_found_hint)
        } else {
            (labels.no_articles, labels.no_articles_hint)
        };
        draw_empty_state(frame, results, title, heading, hint);
        return;
    }

    draw_article_list(frame, results, &articles, app.selected, title, false);
}

fn draw_news(frame: &mut Frame, app: &App, area: Rect) {
    let labels = app.labels();
    let title = Line::from(labels.news_title);
    let articles = app.visible_articles();

    if articles.is_empty() {
        let hint = labels.add_news_hint(app.news.categories());
        draw_empty_state(frame, area, title, labels.no_news, &hint);
        return;
    }

    draw_article_list(frame, area, &articles, app.selected, title, true);
}
