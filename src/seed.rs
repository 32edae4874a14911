use std::collections::HashSet;
use std::path::Path;

use crate::error::{AppError, Result};
use crate::models::Article;

pub fn parse_seed_file(path: &Path, placeholder_image: &str) -> Result<Vec<Article>> {
    let content = std::fs::read_to_string(path)?;
    parse_seed_string(&content, placeholder_image)
}

/// Parse a JSON array of articles, newest first.
pub fn parse_seed_string(content: &str, placeholder_image: &str) -> Result<Vec<Article>> {
    let mut articles: Vec<Article> = serde_json::from_str(content)?;

    let mut seen = HashSet::new();
    for article in &mut articles {
        if article.id == u64::MAX {
            return Err(AppError::Seed(format!(
                "article id {} leaves no room for new articles",
                article.id
            )));
        }

        if !seen.insert(article.id) {
            return Err(AppError::Seed(format!("duplicate article id {}", article.id)));
        }

        for (field, value) in [
            ("title", &article.title),
            ("excerpt", &article.excerpt),
            ("category", &article.category),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::Seed(format!(
                    "article {} has an empty {}",
                    article.id, field
                )));
            }
        }

        if article.image.trim().is_empty() {
            article.image = placeholder_image.to_string();
        }
    }

    Ok(articles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const PLACEHOLDER: &str = "https://img.example.com/placeholder.png";

    #[test]
    fn test_parse_seed_list() {
        let content = r#"[
  {"id": 2, "title": "Квантовые компьютеры", "excerpt": "Новый прорыв", "category": "Наука",
   "date": "3 марта 2025 г.", "readTime": "8 мин", "image": "https://img.example.com/q.jpg"},
  {"id": 1, "title": "AI", "excerpt": "about AI", "category": "Технологии",
   "date": "1 марта 2025 г.", "readTime": "5 мин"}
]"#;

        let articles = parse_seed_string(content, PLACEHOLDER).unwrap();

        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].id, 2);
        assert_eq!(articles[0].read_time, "8 мин");
        assert_eq!(articles[0].image, "https://img.example.com/q.jpg");
        assert_eq!(articles[1].title, "AI");
        assert_eq!(articles[1].image, PLACEHOLDER);
    }

    #[test]
    fn test_parse_empty_seed() {
        let articles = parse_seed_string("[]", PLACEHOLDER).unwrap();
        assert!(articles.is_empty());
    }

    #[test]
    fn test_parse_duplicate_ids_rejected() {
        let content = r#"[
  {"id": 1, "title": "a", "excerpt": "b", "category": "c", "date": "d", "readTime": "5 мин"},
  {"id": 1, "title": "e", "excerpt": "f", "category": "g", "date": "h", "readTime": "5 мин"}
]"#;

        let result = parse_seed_string(content, PLACEHOLDER);
        assert!(matches!(result, Err(AppError::Seed(_))));
    }

    #[test]
    fn test_parse_max_id_rejected() {
        let content = r#"[
  {"id": 18446744073709551615, "title": "a", "excerpt": "b", "category": "c", "date": "d", "readTime": "5 мин"}
]"#;

        let result = parse_seed_string(content, PLACEHOLDER);
        assert!(matches!(result, Err(AppError::Seed(_))));
    }

    #[test]
    fn test_parse_blank_required_field_rejected() {
        let content = r#"[
  {"id": 1, "title": "  ", "excerpt": "b", "category": "c", "date": "d", "readTime": "5 мин"}
]"#;

        let result = parse_seed_string(content, PLACEHOLDER);
        match result {
            Err(AppError::Seed(msg)) => assert!(msg.contains("title")),
            other => panic!("expected seed error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_missing_read_time_rejected() {
        let content = r#"[{"id": 1, "title": "a", "excerpt": "b", "category": "c", "date": "d"}]"#;
        let result = parse_seed_string(content, PLACEHOLDER);
        assert!(matches!(result, Err(AppError::Json(_))));
    }

    #[test]
    fn test_parse_malformed_seed() {
        let result = parse_seed_string("this is not json at all", PLACEHOLDER);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_seed_file_not_found() {
        let result = parse_seed_file(Path::new("/nonexistent/path/seed.json"), PLACEHOLDER);
        assert!(matches!(result, Err(AppError::Io(_))));
    }

    #[test]
    fn test_parse_seed_file_from_disk() {
        let content = r#"[{"id": 5, "title": "Disk", "excerpt": "x", "category": "Наука",
  "date": "1 мая 2025 г.", "readTime": "5 мин", "image": ""}]"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let articles = parse_seed_file(temp_file.path(), PLACEHOLDER).unwrap();

        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].title, "Disk");
        assert_eq!(articles[0].image, PLACEHOLDER);
    }
}
