use crate::dates::DisplayLocale;
use crate::models::Article;

pub const DEFAULT_NEWS_CATEGORIES: [&str; 2] = ["Технологии", "Наука"];

/// Articles whose title, excerpt or category contains `query`, ignoring case
/// and surrounding whitespace. A blank query matches everything.
pub fn search(query: &str, articles: &[Article]) -> Vec<Article> {
    let needle = query.trim().to_lowercase();
    articles
        .iter()
        .filter(|a| {
            a.title.to_lowercase().contains(&needle)
                || a.excerpt.to_lowercase().contains(&needle)
                || a.category.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// News feed using the default categories.
pub fn news_feed(articles: &[Article]) -> Vec<Article> {
    NewsFilter::default().news_feed(articles)
}

/// Allow-list of categories shown on the News tab. Matching is exact and
/// case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsFilter {
    categories: Vec<String>,
}

impl NewsFilter {
    pub fn new<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            categories: categories.into_iter().map(Into::into).collect(),
        }
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn matches(&self, article: &Article) -> bool {
        self.categories.iter().any(|c| *c == article.category)
    }

    pub fn news_feed(&self, articles: &[Article]) -> Vec<Article> {
        articles
            .iter()
            .filter(|a| self.matches(a))
            .cloned()
            .collect()
    }
}

impl Default for NewsFilter {
    fn default() -> Self {
        Self::new(DEFAULT_NEWS_CATEGORIES)
    }
}

/// Label for the admin header badge, e.g. "5 статей".
pub fn article_count_label(count: usize, locale: DisplayLocale) -> String {
    match locale {
        DisplayLocale::Ru => {
            let word = match (count % 10, count % 100) {
                (_, 11..=14) => "статей",
                (1, _) => "статья",
                (2..=4, _) => "статьи",
                _ => "статей",
            };
            format!("{} {}", count, word)
        }
        DisplayLocale::En if count == 1 => "1 article".to_string(),
        DisplayLocale::En => format!("{} articles", count),
    }
}
