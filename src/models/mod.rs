mod article;
mod view;

pub use article::{Article, NewArticle};
pub use view::{Screen, Tab};
