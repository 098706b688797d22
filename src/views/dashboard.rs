use yew::prelude::*;

use crate::components::{LoadingSpinner, SentimentBadge};
use crate::context::use_language;
use crate::models::{
    DashboardStats, RecentActivityResponse, StatsResponse, User,
};
use crate::services::ApiClient;

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    pub user: User,
    pub token: String,
}

/// Landing tab: aggregate counters plus the most recent news and mentions.
#[function_component(Dashboard)]
pub fn dashboard(props: &DashboardProps) -> Html {
    let stats = use_state(|| None::<DashboardStats>);
    let activity = use_state(|| None::<RecentActivityResponse>);
    let is_loading = use_state(|| true);
    let lang = use_language();

    {
        let stats = stats.clone();
        let activity = activity.clone();
        let is_loading = is_loading.clone();
        use_effect_with(props.token.clone(), move |token| {
            let token = token.clone();
            wasm_bindgen_futures::spawn_local(async move {
                is_loading.set(true);
                let client = ApiClient::new();

                match client
                    .get::<StatsResponse>("/api/dashboard/stats", Some(&token))
                    .await
                {
                    Ok(response) if response.success => stats.set(response.stats),
                    Ok(_) => log::warn!("dashboard stats request rejected"),
                    Err(e) => log::error!("error fetching dashboard stats: {}", e),
                }

                match client
                    .get::<RecentActivityResponse>("/api/dashboard/recent-activity", Some(&token))
                    .await
                {
                    Ok(response) if response.success => activity.set(Some(response)),
                    Ok(_) => log::warn!("recent-activity request rejected"),
                    Err(e) => log::error!("error fetching recent activity: {}", e),
                }

                is_loading.set(false);
            });
            || ()
        });
    }

    if *is_loading {
        return html! { <LoadingSpinner /> };
    }

    let stats = (*stats).clone().unwrap_or_default();

    html! {
        <div class="view">
            <div class="view-header">
                <h2>{ format!("Welcome back, {}!", props.user.username) }</h2>
                <p class="view-subtitle">
                    { "Here's what's happening with your monitoring activities." }
                </p>
            </div>

            <div class="stat-grid">
                { stat_card("Tech News", stats.tech_news_count, "📰") }
                { stat_card("Social Mentions", stats.twitter_mentions_count, "🐦") }
                { stat_card("Competitors", stats.competitors_count, "🏢") }
                <div class="stat-card">
                    <div>
                        <p class="stat-label">{ lang.get("sentiment_analysis") }</p>
                        <div class="stat-sentiment">
                            <span class="sentiment-positive">
                                { format!("+{}", stats.sentiment_summary.positive) }
                            </span>
                            <span class="sentiment-neutral">
                                { format!("◯{}", stats.sentiment_summary.neutral) }
                            </span>
                            <span class="sentiment-negative">
                                { format!("-{}", stats.sentiment_summary.negative) }
                            </span>
                        </div>
                    </div>
                    <div class="stat-icon">{ "😊" }</div>
                </div>
            </div>

            <div class="activity-grid">
                <div class="activity-panel">
                    <h3>{ lang.get("recent_news") }</h3>
                    {
                        match activity.as_ref().filter(|a| !a.recent_news.is_empty()) {
                            Some(activity) => activity.recent_news.iter().map(|article| html! {
                                <div class="activity-item activity-news">
                                    <h4>{ article.title.clone().unwrap_or_default() }</h4>
                                    <p class="activity-source">{ article.source.clone().unwrap_or_default() }</p>
                                    <SentimentBadge sentiment={article.sentiment.clone()} />
                                </div>
                            }).collect::<Html>(),
                            None => html! {
                                <p class="empty-state">{ "No recent news available" }</p>
                            },
                        }
                    }
                </div>

                <div class="activity-panel">
                    <h3>{ lang.get("recent_mentions") }</h3>
                    {
                        match activity.as_ref().filter(|a| !a.recent_tweets.is_empty()) {
                            Some(activity) => activity.recent_tweets.iter().map(|mention| {
                                let metrics = mention.public_metrics.clone().unwrap_or_default();
                                html! {
                                    <div class="activity-item activity-mention">
                                        <p>{ mention.text.clone().unwrap_or_default() }</p>
                                        <div class="activity-meta">
                                            <SentimentBadge sentiment={mention.sentiment.clone()} />
                                            <span class="activity-metrics">
                                                { format!("👍 {} | 🔄 {}", metrics.like_count, metrics.retweet_count) }
                                            </span>
                                        </div>
                                    </div>
                                }
                            }).collect::<Html>(),
                            None => html! {
                                <p class="empty-state">{ "No recent mentions available" }</p>
                            },
                        }
                    }
                </div>
            </div>
        </div>
    }
}

fn stat_card(label: &'static str, value: u64, icon: &'static str) -> Html {
    html! {
        <div class="stat-card">
            <div>
                <p class="stat-label">{ label }</p>
                <p class="stat-value">{ value }</p>
            </div>
            <div class="stat-icon">{ icon }</div>
        </div>
    }
}
