use yew::prelude::*;

use crate::context::use_language;

/// The monitoring tabs of the authenticated shell. Dashboard is the tab the
/// app lands on after login and the one logout resets to.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Tab {
    #[default]
    Dashboard,
    Tech,
    Competitor,
    Credibility,
    Marketing,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::Dashboard,
        Tab::Tech,
        Tab::Competitor,
        Tab::Credibility,
        Tab::Marketing,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Tab::Dashboard => "dashboard",
            Tab::Tech => "tech",
            Tab::Competitor => "competitor",
            Tab::Credibility => "credibility",
            Tab::Marketing => "marketing",
        }
    }

    /// Translation key of the tab label.
    pub fn label_key(&self) -> &'static str {
        match self {
            Tab::Dashboard => "dashboard",
            Tab::Tech => "technology_monitoring",
            Tab::Competitor => "competitive_monitoring",
            Tab::Credibility => "credibility_monitoring",
            Tab::Marketing => "marketing_monitoring",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Tab::Dashboard => "📊",
            Tab::Tech => "🔬",
            Tab::Competitor => "🏢",
            Tab::Credibility => "🌐",
            Tab::Marketing => "📈",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct NavigationProps {
    pub active_tab: Tab,
    pub on_select: Callback<Tab>,
}

#[function_component(Navigation)]
pub fn navigation(props: &NavigationProps) -> Html {
    let lang = use_language();

    html! {
        <nav class="tab-nav">
            <div class="tab-nav-inner">
                {
                    Tab::ALL.into_iter().map(|tab| {
                        let class = if tab == props.active_tab { "tab-button active" } else { "tab-button" };
                        let onclick = props.on_select.reform(move |_| tab);
                        html! {
                            <button key={tab.id()} {class} {onclick}>
                                <span class="tab-icon">{ tab.icon() }</span>
                                <span class="tab-label">{ lang.get(tab.label_key()) }</span>
                            </button>
                        }
                    }).collect::<Html>()
                }
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tab_is_dashboard() {
        assert_eq!(Tab::default(), Tab::Dashboard);
    }

    #[test]
    fn tab_ids_match_backend_identifiers() {
        let ids: Vec<_> = Tab::ALL.iter().map(|t| t.id()).collect();
        assert_eq!(
            ids,
            ["dashboard", "tech", "competitor", "credibility", "marketing"]
        );
    }

    #[test]
    fn every_tab_has_icon_and_label_key() {
        for tab in Tab::ALL {
            assert!(!tab.icon().is_empty());
            assert!(!tab.label_key().is_empty());
        }
    }
}
