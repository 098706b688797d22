use yew::prelude::*;

use crate::models::Sentiment;

#[derive(Properties, PartialEq)]
pub struct SentimentBadgeProps {
    pub sentiment: Option<Sentiment>,
}

/// Colored pill showing the sentiment label the backend attached to an
/// article or mention. Missing sentiment renders as neutral.
#[function_component(SentimentBadge)]
pub fn sentiment_badge(props: &SentimentBadgeProps) -> Html {
    let label = props
        .sentiment
        .as_ref()
        .map(Sentiment::label)
        .unwrap_or("neutral")
        .to_string();

    let class = match label.as_str() {
        "positive" => "badge badge-positive",
        "negative" => "badge badge-negative",
        _ => "badge badge-neutral",
    };

    html! {
        <span class={class}>{ label }</span>
    }
}
