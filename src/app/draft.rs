use crate::models::NewArticle;

/// Form fields in the order they are laid out on the admin screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DraftField {
    #[default]
    Title,
    Category,
    Excerpt,
    Image,
}

impl DraftField {
    pub const ALL: [DraftField; 4] = [
        DraftField::Title,
        DraftField::Category,
        DraftField::Excerpt,
        DraftField::Image,
    ];

    pub fn next(&self) -> Self {
        match self {
            DraftField::Title => DraftField::Category,
            DraftField::Category => DraftField::Excerpt,
            DraftField::Excerpt => DraftField::Image,
            DraftField::Image => DraftField::Title,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            DraftField::Title => DraftField::Image,
            DraftField::Category => DraftField::Title,
            DraftField::Excerpt => DraftField::Category,
            DraftField::Image => DraftField::Excerpt,
        }
    }
}

/// Unpublished admin form state. Lives apart from the store until publish.
#[derive(Debug, Clone, Default)]
pub struct Draft {
    pub title: String,
    pub category: String,
    pub excerpt: String,
    pub image: String,
    pub focus: DraftField,
}

impl Draft {
    pub fn value(&self, field: DraftField) -> &str {
        match field {
            DraftField::Title => &self.title,
            DraftField::Category => &self.category,
            DraftField::Excerpt => &self.excerpt,
            DraftField::Image => &self.image,
        }
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            DraftField::Title => &mut self.title,
            DraftField::Category => &mut self.category,
            DraftField::Excerpt => &mut self.excerpt,
            DraftField::Image => &mut self.image,
        }
    }

    pub fn push_char(&mut self, c: char) {
        self.focused_mut().push(c);
    }

    pub fn pop_char(&mut self) {
        self.focused_mut().pop();
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn to_new_article(&self) -> NewArticle {
        NewArticle {
            title: self.title.clone(),
            excerpt: self.excerpt.clone(),
            category: self.category.clone(),
            image: Some(self.image.clone()),
        }
    }

    /// Same rule the store applies on add.
    pub fn can_publish(&self) -> bool {
        self.to_new_article().is_complete()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
