use std::collections::HashMap;

/// Built-in English translation set used when the translations endpoint is
/// unreachable or rejects the request. Covers every key the UI renders, so a
/// failed fetch never leaves a screen without labels.
pub fn fallback_translations() -> HashMap<String, String> {
    let pairs = [
        ("app_name", "Simba-Watch"),
        ("dashboard", "Dashboard"),
        ("technology_monitoring", "Technology Monitoring"),
        ("competitive_monitoring", "Competitive Monitoring"),
        ("credibility_monitoring", "Credibility Monitoring"),
        ("marketing_monitoring", "Marketing Monitoring"),
        ("recent_news", "Recent News"),
        ("recent_mentions", "Recent Mentions"),
        ("competitors", "Competitors"),
        ("add_competitor", "Add Competitor"),
        ("sentiment_analysis", "Sentiment Analysis"),
        ("positive", "Positive"),
        ("negative", "Negative"),
        ("neutral", "Neutral"),
        ("login", "Login"),
        ("register", "Register"),
        ("logout", "Logout"),
    ];

    pairs
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_covers_every_rendered_key() {
        let set = fallback_translations();
        for key in [
            "app_name",
            "dashboard",
            "technology_monitoring",
            "competitive_monitoring",
            "credibility_monitoring",
            "marketing_monitoring",
            "recent_news",
            "recent_mentions",
            "add_competitor",
            "login",
            "register",
            "logout",
        ] {
            assert!(set.contains_key(key), "missing fallback for {}", key);
        }
    }

    #[test]
    fn fallback_app_name_is_stable() {
        assert_eq!(
            fallback_translations().get("app_name").map(String::as_str),
            Some("Simba-Watch")
        );
    }
}
