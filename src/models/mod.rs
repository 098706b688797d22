pub mod article;
pub mod auth;
pub mod competitor;
pub mod dashboard;
pub mod mention;
pub mod translations;

pub use article::{Article, Sentiment, TechNewsResponse};
pub use auth::{AuthResponse, LoginRequest, RegisterRequest, Session, User};
pub use competitor::{
    Competitor, CompetitorCreatedResponse, CompetitorDeletedResponse, CompetitorsResponse,
    NewCompetitor,
};
pub use dashboard::{DashboardStats, RecentActivityResponse, StatsResponse};
pub use mention::{Mention, MentionsResponse, PublicMetrics};
pub use translations::TranslationsResponse;
