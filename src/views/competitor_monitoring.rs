use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::LoadingSpinner;
use crate::context::use_language;
use crate::models::{
    Competitor, CompetitorCreatedResponse, CompetitorDeletedResponse, CompetitorsResponse,
    NewCompetitor,
};
use crate::services::ApiClient;
use crate::utils::time::format_date;

#[derive(Properties, PartialEq)]
pub struct CompetitorMonitoringProps {
    pub token: String,
}

/// Competitor tab. The list is a best-effort local cache: create appends and
/// delete removes locally once the server confirms, with no reconciliation
/// against concurrent edits from other clients (last local write wins).
#[function_component(CompetitorMonitoring)]
pub fn competitor_monitoring(props: &CompetitorMonitoringProps) -> Html {
    let competitors = use_state(Vec::<Competitor>::new);
    let is_loading = use_state(|| false);
    let show_add_form = use_state(|| false);
    let name_ref = use_node_ref();
    let website_ref = use_node_ref();
    let description_ref = use_node_ref();
    let lang = use_language();

    {
        let competitors = competitors.clone();
        let is_loading = is_loading.clone();
        use_effect_with(props.token.clone(), move |token| {
            let token = token.clone();
            wasm_bindgen_futures::spawn_local(async move {
                is_loading.set(true);

                let client = ApiClient::new();
                match client
                    .get::<CompetitorsResponse>("/api/monitoring/competitors", Some(&token))
                    .await
                {
                    Ok(response) if response.success => competitors.set(response.competitors),
                    Ok(_) => log::warn!("competitor list request rejected"),
                    Err(e) => log::error!("error fetching competitors: {}", e),
                }

                is_loading.set(false);
            });
            || ()
        });
    }

    let toggle_add_form = {
        let show_add_form = show_add_form.clone();
        Callback::from(move |_: MouseEvent| show_add_form.set(!*show_add_form))
    };

    let on_add = {
        let competitors = competitors.clone();
        let show_add_form = show_add_form.clone();
        let name_ref = name_ref.clone();
        let website_ref = website_ref.clone();
        let description_ref = description_ref.clone();
        let token = props.token.clone();

        Callback::from(move |_: MouseEvent| {
            let Some(name_input) = name_ref.cast::<HtmlInputElement>() else {
                return;
            };
            let name = name_input.value();
            if name.trim().is_empty() {
                return;
            }

            let website = website_ref
                .cast::<HtmlInputElement>()
                .map(|input| input.value())
                .filter(|value| !value.trim().is_empty());
            let description = description_ref
                .cast::<HtmlTextAreaElement>()
                .map(|area| area.value())
                .filter(|value| !value.trim().is_empty());

            let request = NewCompetitor {
                name,
                website,
                description,
            };

            let competitors = competitors.clone();
            let show_add_form = show_add_form.clone();
            let name_ref = name_ref.clone();
            let website_ref = website_ref.clone();
            let description_ref = description_ref.clone();
            let token = token.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let client = ApiClient::new();
                match client
                    .post::<_, CompetitorCreatedResponse>(
                        "/api/monitoring/competitors",
                        &request,
                        Some(&token),
                    )
                    .await
                {
                    Ok(response) if response.success => {
                        if let Some(created) = response.competitor {
                            // Optimistic local append; the next full fetch is
                            // the only reconciliation with other clients.
                            competitors.set(append_confirmed(&competitors, created));

                            if let Some(input) = name_ref.cast::<HtmlInputElement>() {
                                input.set_value("");
                            }
                            if let Some(input) = website_ref.cast::<HtmlInputElement>() {
                                input.set_value("");
                            }
                            if let Some(area) = description_ref.cast::<HtmlTextAreaElement>() {
                                area.set_value("");
                            }
                            show_add_form.set(false);
                        }
                    }
                    Ok(_) => log::warn!("add-competitor request rejected"),
                    Err(e) => log::error!("error adding competitor: {}", e),
                }
            });
        })
    };

    let on_delete = {
        let competitors = competitors.clone();
        let token = props.token.clone();

        Callback::from(move |competitor_id: String| {
            let competitors = competitors.clone();
            let token = token.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let client = ApiClient::new();
                let path = format!("/api/monitoring/competitors/{}", competitor_id);
                match client
                    .delete::<CompetitorDeletedResponse>(&path, Some(&token))
                    .await
                {
                    Ok(response) if response.success => {
                        competitors.set(remove_by_id(&competitors, &competitor_id));
                    }
                    Ok(_) => log::warn!("delete-competitor request rejected"),
                    Err(e) => log::error!("error deleting competitor: {}", e),
                }
            });
        })
    };

    html! {
        <div class="view">
            <div class="view-header">
                <div class="view-header-row">
                    <h2>{ lang.get("competitive_monitoring") }</h2>
                    <button class="btn-primary" onclick={toggle_add_form}>
                        { lang.get("add_competitor") }
                    </button>
                </div>

                if *show_add_form {
                    <div class="add-competitor-form">
                        <h3>{ "Add New Competitor" }</h3>
                        <div class="form-group">
                            <label for="competitor-name">{ "Company Name *" }</label>
                            <input
                                type="text"
                                id="competitor-name"
                                placeholder="Enter competitor name"
                                ref={name_ref.clone()}
                            />
                        </div>
                        <div class="form-group">
                            <label for="competitor-website">{ "Website" }</label>
                            <input
                                type="url"
                                id="competitor-website"
                                placeholder="https://example.com"
                                ref={website_ref.clone()}
                            />
                        </div>
                        <div class="form-group">
                            <label for="competitor-description">{ "Description" }</label>
                            <textarea
                                id="competitor-description"
                                rows="3"
                                placeholder="Brief description of the competitor"
                                ref={description_ref.clone()}
                            />
                        </div>
                        <div class="form-actions">
                            <button class="btn-primary" onclick={on_add}>
                                { "Add Competitor" }
                            </button>
                            <button class="btn-secondary" onclick={{
                                let show_add_form = show_add_form.clone();
                                Callback::from(move |_: MouseEvent| show_add_form.set(false))
                            }}>
                                { "Cancel" }
                            </button>
                        </div>
                    </div>
                }
            </div>

            if *is_loading {
                <LoadingSpinner />
            } else if competitors.is_empty() {
                <p class="empty-state">
                    { "No competitors added yet. Add your first competitor to start monitoring." }
                </p>
            } else {
                <div class="card-grid">
                    {
                        competitors.iter().map(|competitor| {
                            render_competitor(competitor, &on_delete)
                        }).collect::<Html>()
                    }
                </div>
            }
        </div>
    }
}

/// Append the server-confirmed record to the local list.
fn append_confirmed(list: &[Competitor], created: Competitor) -> Vec<Competitor> {
    let mut next = list.to_vec();
    next.push(created);
    next
}

/// Drop the entry whose id matches; all other entries are untouched.
fn remove_by_id(list: &[Competitor], id: &str) -> Vec<Competitor> {
    list.iter().filter(|c| c.id != id).cloned().collect()
}

fn render_competitor(competitor: &Competitor, on_delete: &Callback<String>) -> Html {
    let id = competitor.id.clone();
    let onclick = on_delete.reform(move |_: MouseEvent| id.clone());

    html! {
        <div class="competitor-card" key={competitor.id.clone()}>
            <div class="competitor-head">
                <h3>{ competitor.name.clone() }</h3>
                <button class="btn-delete" {onclick}>{ "✕" }</button>
            </div>

            if let Some(website) = &competitor.website {
                <a class="competitor-website" href={website.clone()} target="_blank" rel="noopener noreferrer">
                    { website.clone() }
                </a>
            }

            if let Some(description) = &competitor.description {
                <p class="competitor-description">{ description.clone() }</p>
            }

            if let Some(created_at) = &competitor.created_at {
                <div class="competitor-added">{ format!("Added: {}", format_date(created_at)) }</div>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn competitor(id: &str, name: &str) -> Competitor {
        Competitor {
            id: id.to_string(),
            name: name.to_string(),
            website: None,
            description: None,
            created_at: None,
        }
    }

    #[test]
    fn confirmed_add_appends_exactly_one_entry() {
        let list = vec![competitor("c-1", "Globex")];
        let next = append_confirmed(&list, competitor("c-2", "Acme"));

        assert_eq!(next.len(), 2);
        assert_eq!(next.iter().filter(|c| c.name == "Acme").count(), 1);
        assert_eq!(next[0].name, "Globex");
    }

    #[test]
    fn confirmed_delete_removes_exactly_one_entry() {
        let list = vec![
            competitor("c-1", "Globex"),
            competitor("c-2", "Acme"),
            competitor("c-3", "Initech"),
        ];
        let next = remove_by_id(&list, "c-2");

        let names: Vec<_> = next.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Globex", "Initech"]);
    }

    #[test]
    fn deleting_an_unknown_id_leaves_the_list_unchanged() {
        let list = vec![competitor("c-1", "Globex")];
        assert_eq!(remove_by_id(&list, "c-9"), list);
    }
}
