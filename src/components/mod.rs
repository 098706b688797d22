pub mod article_card;
pub mod header;
pub mod login_form;
pub mod navigation;
pub mod register_form;
pub mod sentiment_badge;
pub mod spinner;

pub use article_card::ArticleCard;
pub use header::Header;
pub use login_form::LoginForm;
pub use navigation::{Navigation, Tab};
pub use register_form::RegisterForm;
pub use sentiment_badge::SentimentBadge;
pub use spinner::LoadingSpinner;
