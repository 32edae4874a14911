use crate::app::DraftField;
use crate::dates::DisplayLocale;
use crate::models::Tab;

/// Screen text for one display locale.
#[derive(Debug)]
pub struct Labels {
    pub locale: DisplayLocale,
    pub tab_home: &'static str,
    pub tab_search: &'static str,
    pub tab_news: &'static str,
    pub admin_shortcut: &'static str,
    pub latest_articles: &'static str,
    pub all_articles: &'static str,
    pub news_title: &'static str,
    pub search_prompt: &'static str,
    pub no_articles: &'static str,
    pub no_articles_hint: &'static str,
    pub nothing_found: &'static str,
    pub nothing_found_hint: &'static str,
    pub no_news: &'static str,
    pub no_news_categories: &'static str,
    pub new_article: &'static str,
    pub field_title: &'static str,
    pub field_category: &'static str,
    pub field_excerpt: &'static str,
    pub field_image: &'static str,
    pub publish: &'static str,
    pub published_articles: &'static str,
    pub admin_empty_hint: &'static str,
    pub draft_incomplete: &'static str,
    pub browse_keys: &'static str,
    pub admin_keys: &'static str,
}

pub static RU: Labels = Labels {
    locale: DisplayLocale::Ru,
    tab_home: "Главная",
    tab_search: "Поиск",
    tab_news: "Новости",
    admin_shortcut: " a: админ ",
    latest_articles: " Последние статьи ",
    all_articles: " Все статьи ",
    news_title: " Новости ",
    search_prompt: " Поиск по заголовкам, описанию или категории ",
    no_articles: "Статей пока нет",
    no_articles_hint: "Начните публиковать статьи через админ-панель (клавиша a)",
    nothing_found: "Ничего не найдено",
    nothing_found_hint: "Попробуйте изменить поисковый запрос",
    no_news: "Новостей пока нет",
    no_news_categories: "Категории новостей не настроены",
    new_article: " Новая статья ",
    field_title: "Заголовок",
    field_category: "Категория",
    field_excerpt: "Краткое описание",
    field_image: "URL изображения (опционально)",
    publish: " Опубликовать (Enter) ",
    published_articles: "Опубликованные статьи",
    admin_empty_hint: "Начните с создания первой статьи через форму слева",
    draft_incomplete: "Заполните заголовок, категорию и описание",
    browse_keys: "Tab вкладки  ↑↓ выбор  / поиск  a админ  q выход",
    admin_keys: "Tab поле  Enter опубликовать  Del/^D удалить  ↑↓ выбор  Esc назад",
};

pub static EN: Labels = Labels {
    locale: DisplayLocale::En,
    tab_home: "Home",
    tab_search: "Search",
    tab_news: "News",
    admin_shortcut: " a: admin ",
    latest_articles: " Latest articles ",
    all_articles: " All articles ",
    news_title: " News ",
    search_prompt: " Search titles, excerpts or categories ",
    no_articles: "No articles yet",
    no_articles_hint: "Start publishing articles from the admin panel (press a)",
    nothing_found: "Nothing found",
    nothing_found_hint: "Try a different search query",
    no_news: "No news yet",
    no_news_categories: "No news categories are configured",
    new_article: " New article ",
    field_title: "Title",
    field_category: "Category",
    field_excerpt: "Excerpt",
    field_image: "Image URL (optional)",
    publish: " Publish (Enter) ",
    published_articles: "Published articles",
    admin_empty_hint: "Fill in the form on the left to publish the first one",
    draft_incomplete: "Title, category and excerpt are required",
    browse_keys: "Tab switch  ↑↓ select  / search  a admin  q quit",
    admin_keys: "Tab next field  Enter publish  Del/^D delete  ↑↓ select  Esc back",
};

pub fn labels(locale: DisplayLocale) -> &'static Labels {
    match locale {
        DisplayLocale::Ru => &RU,
        DisplayLocale::En => &EN,
    }
}

impl Labels {
    pub fn tab(&self, tab: Tab) -> &'static str {
        match tab {
            Tab::Home => self.tab_home,
            Tab::Search => self.tab_search,
            Tab::News => self.tab_news,
        }
    }

    pub fn field(&self, field: DraftField) -> &'static str {
        match field {
            DraftField::Title => self.field_title,
            DraftField::Category => self.field_category,
            DraftField::Excerpt => self.field_excerpt,
            DraftField::Image => self.field_image,
        }
    }

    pub fn found(&self, count: usize) -> String {
        match self.locale {
            DisplayLocale::Ru => format!(" Найдено: {} ", count),
            DisplayLocale::En => format!(" Found: {} ", count),
        }
    }

    pub fn published(&self, title: &str) -> String {
        match self.locale {
            DisplayLocale::Ru => format!("Опубликовано: «{}»", title),
            DisplayLocale::En => format!("Published \"{}\"", title),
        }
    }

    pub fn deleted(&self, title: &str) -> String {
        match self.locale {
            DisplayLocale::Ru => format!("Удалено: «{}»", title),
            DisplayLocale::En => format!("Deleted \"{}\"", title),
        }
    }

    /// Empty-news hint naming the categories that feed the tab.
    pub fn add_news_hint(&self, categories: &[String]) -> String {
        if categories.is_empty() {
            return self.no_news_categories.to_string();
        }

        let (joiner, lead) = match self.locale {
            DisplayLocale::Ru => (" или ", "Добавьте статьи с категориями"),
            DisplayLocale::En => (" or ", "Add articles with the category"),
        };
        let quoted = categories
            .iter()
            .map(|c| format!("\"{}\"", c))
            .collect::<Vec<_>>()
            .join(joiner);
        format!("{} {}", lead, quoted)
    }
}
