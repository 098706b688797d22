use serde::Deserialize;

use super::article::Sentiment;

/// Engagement counters reported by the social API.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PublicMetrics {
    #[serde(default)]
    pub like_count: u64,
    #[serde(default)]
    pub retweet_count: u64,
    #[serde(default)]
    pub reply_count: u64,
}

/// A social-media mention. Read-only and re-fetched wholesale on each query.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Mention {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub sentiment: Option<Sentiment>,
    #[serde(default)]
    pub public_metrics: Option<PublicMetrics>,
}

/// Envelope of `/api/monitoring/twitter-mentions`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MentionsResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub tweets: Vec<Mention>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_mentions_with_partial_metrics() {
        let response: MentionsResponse = serde_json::from_str(
            r#"{
                "success": true,
                "tweets": [{
                    "text": "Simba-Watch looks promising",
                    "created_at": "2024-11-02T09:30:00Z",
                    "public_metrics": {"like_count": 3},
                    "sentiment": {"sentiment": "positive", "polarity": 0.6}
                }]
            }"#,
        )
        .unwrap();

        let metrics = response.tweets[0].public_metrics.clone().unwrap();
        assert_eq!(metrics.like_count, 3);
        assert_eq!(metrics.retweet_count, 0);
        assert_eq!(metrics.reply_count, 0);
    }

    #[test]
    fn twitter_error_envelope_parses() {
        let response: MentionsResponse =
            serde_json::from_str(r#"{"success": false, "error": "Twitter API error: 429"}"#)
                .unwrap();

        assert!(!response.success);
        assert!(response.tweets.is_empty());
    }
}
