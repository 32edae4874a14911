use crate::config::Config;
use crate::dates::{format_date, Clock, DisplayLocale, SystemClock};
use crate::models::{Article, NewArticle};

pub const DEFAULT_PLACEHOLDER_IMAGE: &str =
    "https://images.unsplash.com/photo-1486312338219-ce68d2c6f44d?w=800&q=80";
pub const DEFAULT_READ_TIME: &str = "5 мин";

/// Values stamped onto every new article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreSettings {
    pub placeholder_image: String,
    pub read_time: String,
    pub locale: DisplayLocale,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            placeholder_image: DEFAULT_PLACEHOLDER_IMAGE.to_string(),
            read_time: DEFAULT_READ_TIME.to_string(),
            locale: DisplayLocale::default(),
        }
    }
}

impl From<&Config> for StoreSettings {
    fn from(config: &Config) -> Self {
        Self {
            placeholder_image: config.placeholder_image.clone(),
            read_time: config.read_time.clone(),
            locale: config.locale,
        }
    }
}

/// The session's article collection, newest first.
///
/// Ids come from a counter that only moves forward, so an id is never handed
/// out twice even after the article holding it was removed. Once the id
/// space is used up, further adds are rejected.
pub struct ArticleStore {
    articles: Vec<Article>,
    next_id: Option<u64>,
    settings: StoreSettings,
    clock: Box<dyn Clock>,
}

impl ArticleStore {
    pub fn new(settings: StoreSettings) -> Self {
        Self::with_articles(settings, Vec::new())
    }

    /// Seeds the store. `seed` is taken in display order (newest first).
    pub fn with_articles(settings: StoreSettings, seed: Vec<Article>) -> Self {
        let next_id = seed
            .iter()
            .map(|a| a.id)
            .max()
            .map_or(Some(1), |max| max.checked_add(1));
        Self {
            articles: seed,
            next_id,
            settings,
            clock: Box::new(SystemClock),
        }
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Publishes an article at the front of the list.
    ///
    /// Returns `None` without touching the store if title, excerpt or
    /// category is empty after trimming, or if no ids are left.
    pub fn add(&mut self, input: NewArticle) -> Option<Article> {
        if !input.is_complete() {
            tracing::debug!("Rejected article with missing required fields");
            return None;
        }

        let Some(id) = self.next_id else {
            tracing::warn!("Rejected article: article ids exhausted");
            return None;
        };

        let article = Article {
            id,
            title: input.title.trim().to_string(),
            excerpt: input.excerpt.trim().to_string(),
            category: input.category.trim().to_string(),
            date: format_date(self.clock.today(), self.settings.locale),
            read_time: self.settings.read_time.clone(),
            image: input
                .image_url()
                .unwrap_or(self.settings.placeholder_image.as_str())
                .to_string(),
        };
        self.next_id = id.checked_add(1);

        tracing::debug!("Added article {} ({})", article.id, article.title);
        self.articles.insert(0, article.clone());
        Some(article)
    }

    /// Removes the article with `id`. Unknown ids are ignored.
    pub fn remove(&mut self, id: u64) -> Option<Article> {
        let pos = self.articles.iter().position(|a| a.id == id)?;
        let removed = self.articles.remove(pos);
        tracing::debug!("Removed article {} ({})", removed.id, removed.title);
        Some(removed)
    }

    pub fn list(&self) -> Vec<Article> {
        self.articles.clone()
    }

    /// Borrowed view of the current list, newest first.
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn get(&self, id: u64) -> Option<&Article> {
        self.articles.iter().find(|a| a.id == id)
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    pub fn settings(&self) -> &StoreSettings {
        &self.settings
    }
}

impl Default for ArticleStore {
    fn default() -> Self {
        Self::new(StoreSettings::default())
    }
}
