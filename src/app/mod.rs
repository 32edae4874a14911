mod draft;

pub use draft::{Draft, DraftField};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::labels::{labels, Labels};
use crate::models::{Article, Screen, Tab};
use crate::store::ArticleStore;
use crate::views::{search, NewsFilter};

/// Application state shared by the browse and admin screens.
///
/// There is exactly one `ArticleStore`; both screens read and write it.
pub struct App {
    pub store: ArticleStore,
    pub news: NewsFilter,
    pub screen: Screen,
    pub tab: Tab,
    pub search_query: String,
    pub draft: Draft,
    pub selected: usize,
    pub should_quit: bool,
    pub status: Option<String>,
}

impl App {
    pub fn new(store: ArticleStore, news: NewsFilter) -> Self {
        Self {
            store,
            news,
            screen: Screen::default(),
            tab: Tab::default(),
            search_query: String::new(),
            draft: Draft::default(),
            selected: 0,
            should_quit: false,
            status: None,
        }
    }

    /// Screen text for the configured locale.
    pub fn labels(&self) -> &'static Labels {
        labels(self.store.settings().locale)
    }

    /// Articles shown by the current screen and tab, in store order.
    pub fn visible_articles(&self) -> Vec<Article> {
        match (self.screen, self.tab) {
            (Screen::Admin, _) | (Screen::Browse, Tab::Home) => self.store.list(),
            (Screen::Browse, Tab::Search) => search(&self.search_query, self.store.articles()),
            (Screen::Browse, Tab::News) => self.news.news_feed(self.store.articles()),
        }
    }

    pub fn selected_article(&self) -> Option<Article> {
        self.visible_articles().into_iter().nth(self.selected)
    }

    /// Publishes the draft. Leaves the draft untouched if it is incomplete.
    pub fn publish(&mut self) -> Option<Article> {
        if !self.draft.can_publish() {
            self.status = Some(self.labels().draft_incomplete.to_string());
            return None;
        }

        let article = self.store.add(self.draft.to_new_article())?;
        tracing::info!("Published article {}: {}", article.id, article.title);
        self.draft.clear();
        self.selected = 0;
        self.status = Some(self.labels().published(&article.title));
        Some(article)
    }

    /// Deletes the highlighted article right away.
    pub fn delete_selected(&mut self) -> Option<Article> {
        let id = self.selected_article()?.id;
        let removed = self.store.remove(id)?;
        tracing::info!("Deleted article {}: {}", removed.id, removed.title);
        self.clamp_selection();
        self.status = Some(self.labels().deleted(&removed.title));
        Some(removed)
    }

    pub fn set_tab(&mut self, tab: Tab) {
        self.tab = tab;
        self.selected = 0;
    }

    pub fn open_admin(&mut self) {
        self.screen = Screen::Admin;
        self.selected = 0;
        self.status = None;
    }

    pub fn close_admin(&mut self) {
        self.screen = Screen::Browse;
        self.selected = 0;
        self.status = None;
    }

    pub fn select_next(&mut self) {
        let len = self.visible_articles().len();
        if len > 0 && self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        let len = self.visible_articles().len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match self.screen {
            Screen::Browse => self.handle_browse_key(key),
            Screen::Admin => self.handle_admin_key(key),
        }
    }

    fn handle_browse_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab => self.set_tab(self.tab.cycle()),
            KeyCode::BackTab => self.set_tab(self.tab.cycle_back()),
            KeyCode::Down => self.select_next(),
            KeyCode::Up => self.select_prev(),
            _ if self.tab == Tab::Search => self.handle_search_key(key),
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('a') => self.open_admin(),
            KeyCode::Char('/') | KeyCode::Char('2') => self.set_tab(Tab::Search),
            KeyCode::Char('1') => self.set_tab(Tab::Home),
            KeyCode::Char('3') => self.set_tab(Tab::News),
            KeyCode::Char('j') => self.select_next(),
            KeyCode::Char('k') => self.select_prev(),
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.set_tab(Tab::Home),
            KeyCode::Backspace => {
                self.search_query.pop();
                self.selected = 0;
            }
            KeyCode::Char(c) => {
                self.search_query.push(c);
                self.selected = 0;
            }
            _ => {}
        }
    }

    fn handle_admin_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.close_admin(),
            KeyCode::Tab => self.draft.focus_next(),
            KeyCode::BackTab => self.draft.focus_prev(),
            KeyCode::Enter => {
                self.publish();
            }
            KeyCode::Delete => {
                self.delete_selected();
            }
            KeyCode::Char('d') if ctrl => {
                self.delete_selected();
            }
            KeyCode::Down => self.select_next(),
            KeyCode::Up => self.select_prev(),
            KeyCode::Backspace => self.draft.pop_char(),
            KeyCode::Char(c) if !ctrl => self.draft.push_char(c),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dates::FixedClock;
    use crate::models::NewArticle;
    use chrono::NaiveDate;

    fn app() -> App {
        let store = ArticleStore::default()
            .with_clock(FixedClock(NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()));
        App::new(store, NewsFilter::new(["Tech"]))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn titles(articles: &[Article]) -> Vec<&str> {
        articles.iter().map(|a| a.title.as_str()).collect()
    }

    // ==================== shared store ====================

    #[test]
    fn test_admin_publish_visible_on_browse() {
        let mut app = app();
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.screen, Screen::Admin);

        type_str(&mut app, "AI");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "Tech");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "about AI");
        press(&mut app, KeyCode::Enter);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.screen, Screen::Browse);
        assert_eq!(titles(&app.visible_articles()), vec!["AI"]);
    }

    #[test]
    fn test_scenario_search_and_news() {
        let mut app = app();
        app.store.add(NewArticle::new("AI", "about AI", "Tech"));
        app.store.add(NewArticle::new("Design 101", "about design", "Design"));

        assert_eq!(titles(&app.visible_articles()), vec!["Design 101", "AI"]);

        app.set_tab(Tab::Search);
        app.search_query = "design".to_string();
        assert_eq!(titles(&app.visible_articles()), vec!["Design 101"]);

        app.set_tab(Tab::News);
        assert_eq!(titles(&app.visible_articles()), vec!["AI"]);
    }

    // ==================== publish ====================

    #[test]
    fn test_publish_clears_draft() {
        let mut app = app();
        app.open_admin();
        app.draft.title = "AI".to_string();
        app.draft.category = "Tech".to_string();
        app.draft.excerpt = "about AI".to_string();
        app.draft.image = "https://img.test/ai.png".to_string();

        let article = app.publish().unwrap();
        assert_eq!(article.id, 1);
        assert_eq!(article.image, "https://img.test/ai.png");
        assert!(app.draft.title.is_empty());
        assert!(app.draft.image.is_empty());
        assert_eq!(app.store.len(), 1);
    }

    #[test]
    fn test_status_messages_follow_locale() {
        let mut app = app();
        app.open_admin();
        app.publish();
        assert_eq!(
            app.status.as_deref(),
            Some("Заполните заголовок, категорию и описание")
        );

        app.draft.title = "AI".to_string();
        app.draft.category = "Tech".to_string();
        app.draft.excerpt = "about AI".to_string();
        app.publish();
        assert_eq!(app.status.as_deref(), Some("Опубликовано: «AI»"));

        app.delete_selected();
        assert_eq!(app.status.as_deref(), Some("Удалено: «AI»"));
    }

    #[test]
    fn test_publish_incomplete_draft_is_noop() {
        let mut app = app();
        app.open_admin();
        app.draft.title = "AI".to_string();

        assert!(app.publish().is_none());
        assert!(app.store.is_empty());
        // Draft is kept so the operator can finish it
        assert_eq!(app.draft.title, "AI");
        assert!(app.status.is_some());
    }

    // ==================== delete ====================

    #[test]
    fn test_delete_selected_removes_that_article() {
        let mut app = app();
        app.store.add(NewArticle::new("A", "a", "x"));
        app.store.add(NewArticle::new("B", "b", "x"));
        app.store.add(NewArticle::new("C", "c", "x"));
        app.open_admin();

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Delete);

        assert_eq!(titles(&app.store.list()), vec!["C", "A"]);
        assert_eq!(app.selected, 1);
    }

    #[test]
    fn test_delete_last_clamps_selection() {
        let mut app = app();
        app.store.add(NewArticle::new("A", "a", "x"));
        app.store.add(NewArticle::new("B", "b", "x"));
        app.open_admin();
        app.selected = 1;

        app.handle_key(KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL));

        assert_eq!(titles(&app.store.list()), vec!["B"]);
        assert_eq!(app.selected, 0);
        // Ctrl-D must not type into the draft
        assert!(app.draft.title.is_empty());
    }

    #[test]
    fn test_delete_on_empty_list() {
        let mut app = app();
        app.open_admin();
        assert!(app.delete_selected().is_none());
    }

    // ==================== navigation ====================

    #[test]
    fn test_tab_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.tab, Tab::News);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.tab, Tab::Home);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.tab, Tab::News);
        press(&mut app, KeyCode::Char('/'));
        assert_eq!(app.tab, Tab::Search);
    }

    #[test]
    fn test_search_tab_captures_typing() {
        let mut app = app();
        app.store.add(NewArticle::new("Quantum", "q", "Science"));
        app.set_tab(Tab::Search);

        type_str(&mut app, "qa");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.search_query, "q");
        assert!(!app.should_quit);
        assert_eq!(app.screen, Screen::Browse);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.tab, Tab::Home);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);

        let mut app = self::app();
        app.set_tab(Tab::Search);
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn test_selection_stays_in_bounds() {
        let mut app = app();
        app.store.add(NewArticle::new("A", "a", "x"));
        app.store.add(NewArticle::new("B", "b", "x"));

        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.selected, 1);
        press(&mut app, KeyCode::Char('k'));
        press(&mut app, KeyCode::Char('k'));
        assert_eq!(app.selected, 0);
    }
}
