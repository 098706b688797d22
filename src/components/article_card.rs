use yew::prelude::*;

use super::SentimentBadge;
use crate::models::Article;

#[derive(Properties, PartialEq)]
pub struct ArticleCardProps {
    pub article: Article,
}

/// News card shared by the tech and marketing monitoring views.
#[function_component(ArticleCard)]
pub fn article_card(props: &ArticleCardProps) -> Html {
    let article = &props.article;

    html! {
        <div class="article-card">
            if let Some(image_url) = &article.image_url {
                <img class="article-image" src={image_url.clone()} alt="" />
            }
            <div class="article-body">
                <h3 class="article-title">
                    { article.title.clone().unwrap_or_else(|| "Untitled".to_string()) }
                </h3>
                if let Some(description) = &article.description {
                    <p class="article-description">{ description.clone() }</p>
                }
                <div class="article-meta">
                    <span class="article-source">
                        { article.source.clone().unwrap_or_default() }
                    </span>
                    <SentimentBadge sentiment={article.sentiment.clone()} />
                </div>
                if let Some(url) = &article.url {
                    <a class="article-link" href={url.clone()} target="_blank" rel="noopener noreferrer">
                        { "Read More" }
                    </a>
                }
            </div>
        </div>
    }
}
