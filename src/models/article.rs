use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: u64,
    pub title: String,
    pub excerpt: String,
    pub category: String,
    pub date: String,
    #[serde(rename = "readTime")]
    pub read_time: String,
    #[serde(default)]
    pub image: String,
}

/// Input for publishing an article. Empty or whitespace-only `image` means
/// "use the placeholder".
#[derive(Debug, Clone, Default)]
pub struct NewArticle {
    pub title: String,
    pub excerpt: String,
    pub category: String,
    pub image: Option<String>,
}

impl NewArticle {
    pub fn new(
        title: impl Into<String>,
        excerpt: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            excerpt: excerpt.into(),
            category: category.into(),
            image: None,
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// True when title, excerpt and category are all non-empty after trimming.
    pub fn is_complete(&self) -> bool {
        is_filled(&self.title) && is_filled(&self.excerpt) && is_filled(&self.category)
    }

    /// Trimmed image URL, if one was given.
    pub fn image_url(&self) -> Option<&str> {
        self.image
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

fn is_filled(value: &str) -> bool {
    !value.trim().is_empty()
}
