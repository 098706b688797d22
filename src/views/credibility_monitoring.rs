use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::{LoadingSpinner, SentimentBadge};
use crate::context::use_language;
use crate::models::{Mention, MentionsResponse, PublicMetrics};
use crate::services::{with_keywords, ApiClient};

#[derive(Properties, PartialEq)]
pub struct CredibilityMonitoringProps {
    pub token: String,
}

/// Social-media mentions tab, searching by free-text keywords (typically the
/// business name).
#[function_component(CredibilityMonitoring)]
pub fn credibility_monitoring(props: &CredibilityMonitoringProps) -> Html {
    let mentions = use_state(Vec::<Mention>::new);
    let is_loading = use_state(|| false);
    let keywords_ref = use_node_ref();
    let lang = use_language();

    let run_search = {
        let mentions = mentions.clone();
        let is_loading = is_loading.clone();
        let token = props.token.clone();

        Callback::from(move |query: String| {
            let mentions = mentions.clone();
            let is_loading = is_loading.clone();
            let token = token.clone();

            wasm_bindgen_futures::spawn_local(async move {
                is_loading.set(true);

                let client = ApiClient::new();
                let path = with_keywords("/api/monitoring/twitter-mentions", &query);
                match client.get::<MentionsResponse>(&path, Some(&token)).await {
                    Ok(response) if response.success => mentions.set(response.tweets),
                    Ok(_) => log::warn!("mentions request rejected, keeping previous results"),
                    Err(e) => log::error!("error fetching mentions: {}", e),
                }

                is_loading.set(false);
            });
        })
    };

    {
        let run_search = run_search.clone();
        use_effect_with(props.token.clone(), move |_| {
            run_search.emit(String::new());
            || ()
        });
    }

    let on_search = {
        let keywords_ref = keywords_ref.clone();
        let run_search = run_search.clone();
        Callback::from(move |_: MouseEvent| {
            let query = keywords_ref
                .cast::<HtmlInputElement>()
                .map(|input| input.value())
                .unwrap_or_default();
            run_search.emit(query);
        })
    };

    html! {
        <div class="view">
            <div class="view-header">
                <h2>{ lang.get("credibility_monitoring") }</h2>
                <div class="search-bar">
                    <input
                        type="text"
                        placeholder="Enter keywords to monitor (e.g., your business name)"
                        ref={keywords_ref}
                    />
                    <button class="btn-primary" onclick={on_search} disabled={*is_loading}>
                        { if *is_loading { "Loading..." } else { "Search Mentions" } }
                    </button>
                </div>
            </div>

            if *is_loading {
                <LoadingSpinner />
            } else if mentions.is_empty() {
                <p class="empty-state">{ "No mentions found. Try different keywords." }</p>
            } else {
                <div class="mention-list">
                    {
                        mentions.iter().map(render_mention).collect::<Html>()
                    }
                </div>
            }
        </div>
    }
}

fn render_mention(mention: &Mention) -> Html {
    let metrics = mention.public_metrics.clone().unwrap_or_default();
    let polarity = mention
        .sentiment
        .as_ref()
        .and_then(|s| s.polarity)
        .map(|p| format!("{:.2}", p))
        .unwrap_or_else(|| "N/A".to_string());

    html! {
        <div class="mention-card">
            <div class="mention-head">
                <div class="mention-source">
                    <span class="mention-icon">{ "🐦" }</span>
                    <div>
                        <p class="mention-network">{ "Twitter" }</p>
                        if let Some(created_at) = &mention.created_at {
                            <p class="mention-date">{ crate::utils::time::format_date(created_at) }</p>
                        }
                    </div>
                </div>
                <SentimentBadge sentiment={mention.sentiment.clone()} />
            </div>

            <p class="mention-text">{ mention.text.clone().unwrap_or_default() }</p>

            <div class="mention-foot">
                <div class="mention-metrics">
                    { engagement(&metrics) }
                </div>
                <span class="mention-polarity">{ format!("Polarity: {}", polarity) }</span>
            </div>
        </div>
    }
}

fn engagement(metrics: &PublicMetrics) -> Html {
    html! {
        <>
            <span>{ format!("👍 {}", metrics.like_count) }</span>
            <span>{ format!("🔄 {}", metrics.retweet_count) }</span>
            <span>{ format!("💬 {}", metrics.reply_count) }</span>
        </>
    }
}
