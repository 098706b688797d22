use serde::Deserialize;

use super::article::Article;
use super::mention::Mention;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SentimentSummary {
    #[serde(default)]
    pub positive: u64,
    #[serde(default)]
    pub neutral: u64,
    #[serde(default)]
    pub negative: u64,
}

/// Aggregate counters shown on the dashboard stat cards.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DashboardStats {
    #[serde(default)]
    pub tech_news_count: u64,
    #[serde(default)]
    pub twitter_mentions_count: u64,
    #[serde(default)]
    pub competitors_count: u64,
    #[serde(default)]
    pub sentiment_summary: SentimentSummary,
}

/// Envelope of `/api/dashboard/stats`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatsResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub stats: Option<DashboardStats>,
}

/// Envelope of `/api/dashboard/recent-activity`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecentActivityResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub recent_news: Vec<Article>,
    #[serde(default)]
    pub recent_tweets: Vec<Mention>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_stats_envelope() {
        let response: StatsResponse = serde_json::from_str(
            r#"{
                "success": true,
                "stats": {
                    "tech_news_count": 42,
                    "twitter_mentions_count": 7,
                    "competitors_count": 3,
                    "sentiment_summary": {"positive": 4, "negative": 1, "neutral": 2}
                }
            }"#,
        )
        .unwrap();

        let stats = response.stats.unwrap();
        assert_eq!(stats.tech_news_count, 42);
        assert_eq!(stats.sentiment_summary.positive, 4);
    }

    #[test]
    fn empty_activity_parses_to_empty_lists() {
        let response: RecentActivityResponse =
            serde_json::from_str(r#"{"success": true}"#).unwrap();

        assert!(response.recent_news.is_empty());
        assert!(response.recent_tweets.is_empty());
    }
}
