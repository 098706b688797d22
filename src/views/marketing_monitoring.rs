use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::{ArticleCard, LoadingSpinner};
use crate::context::use_language;
use crate::models::{Article, TechNewsResponse};
use crate::services::{with_keywords, ApiClient};

/// Default search the marketing tab runs against the news endpoint until the
/// user types their own keywords.
const MARKETING_KEYWORDS: &str = "marketing,digital marketing,social media marketing";

/// Keywords actually sent: the user's input, or the marketing defaults when
/// the field is empty.
fn search_keywords(input: &str) -> &str {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        MARKETING_KEYWORDS
    } else {
        trimmed
    }
}

#[derive(Properties, PartialEq)]
pub struct MarketingMonitoringProps {
    pub token: String,
}

/// Marketing news tab. Fetches the default keyword set on mount; the search
/// button re-fetches with whatever the user typed instead.
#[function_component(MarketingMonitoring)]
pub fn marketing_monitoring(props: &MarketingMonitoringProps) -> Html {
    let campaigns = use_state(Vec::<Article>::new);
    let is_loading = use_state(|| false);
    let keywords_ref = use_node_ref();
    let lang = use_language();

    let run_search = {
        let campaigns = campaigns.clone();
        let is_loading = is_loading.clone();
        let token = props.token.clone();

        Callback::from(move |query: String| {
            let campaigns = campaigns.clone();
            let is_loading = is_loading.clone();
            let token = token.clone();

            wasm_bindgen_futures::spawn_local(async move {
                is_loading.set(true);

                let client = ApiClient::new();
                let path = with_keywords("/api/monitoring/tech-news", &query);
                match client.get::<TechNewsResponse>(&path, Some(&token)).await {
                    Ok(response) if response.success => campaigns.set(response.articles),
                    Ok(_) => log::warn!("marketing news request rejected, keeping previous results"),
                    Err(e) => log::error!("error fetching marketing news: {}", e),
                }

                is_loading.set(false);
            });
        })
    };

    {
        let run_search = run_search.clone();
        use_effect_with(props.token.clone(), move |_| {
            run_search.emit(MARKETING_KEYWORDS.to_string());
            || ()
        });
    }

    let on_search = {
        let keywords_ref = keywords_ref.clone();
        let run_search = run_search.clone();
        Callback::from(move |_: MouseEvent| {
            let input = keywords_ref
                .cast::<HtmlInputElement>()
                .map(|input| input.value())
                .unwrap_or_default();
            run_search.emit(search_keywords(&input).to_string());
        })
    };

    html! {
        <div class="view">
            <div class="view-header">
                <h2>{ lang.get("marketing_monitoring") }</h2>
                <p class="view-subtitle">
                    { "Stay updated with the latest marketing trends and campaigns." }
                </p>
                <div class="search-bar">
                    <input
                        type="text"
                        placeholder={format!("Enter keywords (default: {})", MARKETING_KEYWORDS)}
                        ref={keywords_ref}
                    />
                    <button class="btn-primary" onclick={on_search} disabled={*is_loading}>
                        { if *is_loading { "Loading..." } else { "Search Campaigns" } }
                    </button>
                </div>
            </div>

            if *is_loading {
                <LoadingSpinner />
            } else if campaigns.is_empty() {
                <p class="empty-state">{ "No marketing content found." }</p>
            } else {
                <div class="card-grid">
                    {
                        campaigns.iter().cloned().map(|article| html! {
                            <ArticleCard {article} />
                        }).collect::<Html>()
                    }
                </div>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_searches_the_marketing_defaults() {
        assert_eq!(search_keywords(""), MARKETING_KEYWORDS);
        assert_eq!(search_keywords("   "), MARKETING_KEYWORDS);
    }

    #[test]
    fn typed_keywords_override_the_defaults() {
        assert_eq!(search_keywords("influencer campaigns"), "influencer campaigns");
        assert_eq!(search_keywords("  seo  "), "seo");
    }
}
