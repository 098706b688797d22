use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::{ArticleCard, LoadingSpinner};
use crate::context::use_language;
use crate::models::{Article, TechNewsResponse};
use crate::services::{with_keywords, ApiClient};

#[derive(Properties, PartialEq)]
pub struct TechMonitoringProps {
    pub token: String,
}

/// Technology news tab. Fetches on mount and again when the search button is
/// pressed; a rejected payload keeps the previous results on screen.
#[function_component(TechMonitoring)]
pub fn tech_monitoring(props: &TechMonitoringProps) -> Html {
    let articles = use_state(Vec::<Article>::new);
    let is_loading = use_state(|| false);
    let keywords_ref = use_node_ref();
    let lang = use_language();

    let run_search = {
        let articles = articles.clone();
        let is_loading = is_loading.clone();
        let token = props.token.clone();

        Callback::from(move |query: String| {
            let articles = articles.clone();
            let is_loading = is_loading.clone();
            let token = token.clone();

            wasm_bindgen_futures::spawn_local(async move {
                is_loading.set(true);

                let client = ApiClient::new();
                let path = with_keywords("/api/monitoring/tech-news", &query);
                match client.get::<TechNewsResponse>(&path, Some(&token)).await {
                    Ok(response) if response.success => articles.set(response.articles),
                    Ok(_) => log::warn!("tech news request rejected, keeping previous results"),
                    Err(e) => log::error!("error fetching tech news: {}", e),
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
                <h2>{ lang.get("technology_monitoring") }</h2>
                <div class="search-bar">
                    <input
                        type="text"
                        placeholder="Enter keywords (e.g., AI, blockchain, fintech)"
                        ref={keywords_ref}
                    />
                    <button class="btn-primary" onclick={on_search} disabled={*is_loading}>
                        { if *is_loading { "Loading..." } else { "Search News" } }
                    </button>
                </div>
            </div>

            if *is_loading {
                <LoadingSpinner />
            } else if articles.is_empty() {
                <p class="empty-state">{ "No articles found. Try different keywords." }</p>
            } else {
                <div class="card-grid">
                    {
                        articles.iter().cloned().map(|article| html! {
                            <ArticleCard {article} />
                        }).collect::<Html>()
                    }
                </div>
            }
        </div>
    }
}
