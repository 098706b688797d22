use serde::Deserialize;

/// Sentiment label attached to articles and mentions by the backend.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Sentiment {
    #[serde(default)]
    pub sentiment: Option<String>,
    #[serde(default)]
    pub polarity: Option<f64>,
    #[serde(default)]
    pub subjectivity: Option<f64>,
}

impl Sentiment {
    pub fn label(&self) -> &str {
        self.sentiment.as_deref().unwrap_or("neutral")
    }
}

/// Read-only news article from the tech-news endpoint. Fields are tolerant of
/// gaps because the backend passes through whatever the news provider gave it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Article {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub sentiment: Option<Sentiment>,
}

/// Envelope of `/api/monitoring/tech-news`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TechNewsResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub articles: Vec<Article>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_wire_shaped_article_payload() {
        let response: TechNewsResponse = serde_json::from_str(
            r#"{
                "success": true,
                "count": 1,
                "articles": [{
                    "id": "a-1",
                    "title": "AI chips hit a new milestone",
                    "description": "Benchmarks across the board.",
                    "url": "https://news.example/ai-chips",
                    "source": "TechWire",
                    "image_url": null,
                    "sentiment": {"sentiment": "positive", "polarity": 0.4, "subjectivity": 0.3}
                }]
            }"#,
        )
        .unwrap();

        assert!(response.success);
        assert_eq!(response.articles.len(), 1);
        let article = &response.articles[0];
        assert_eq!(article.source.as_deref(), Some("TechWire"));
        assert_eq!(article.sentiment.as_ref().unwrap().label(), "positive");
    }

    #[test]
    fn failure_envelope_parses_without_articles() {
        let response: TechNewsResponse =
            serde_json::from_str(r#"{"success": false, "error": "Failed to fetch news"}"#).unwrap();

        assert!(!response.success);
        assert!(response.articles.is_empty());
    }

    #[test]
    fn missing_sentiment_defaults_to_neutral_label() {
        let sentiment = Sentiment {
            sentiment: None,
            polarity: None,
            subjectivity: None,
        };
        assert_eq!(sentiment.label(), "neutral");
    }
}
