//! Article desk: one shared in-memory article store with search and news
//! views, driven by a terminal UI.

pub mod app;
pub mod config;
pub mod dates;
pub mod error;
pub mod labels;
pub mod models;
pub mod seed;
pub mod store;
pub mod ui;
pub mod views;

pub use app::App;
pub use config::Config;
pub use error::{AppError, Result};
pub use models::{Article, NewArticle};
pub use store::{ArticleStore, StoreSettings};
pub use views::{news_feed, search, NewsFilter};
