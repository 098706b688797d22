pub mod competitor_monitoring;
pub mod credibility_monitoring;
pub mod dashboard;
pub mod marketing_monitoring;
pub mod tech_monitoring;

pub use competitor_monitoring::CompetitorMonitoring;
pub use credibility_monitoring::CredibilityMonitoring;
pub use dashboard::Dashboard;
pub use marketing_monitoring::MarketingMonitoring;
pub use tech_monitoring::TechMonitoring;
