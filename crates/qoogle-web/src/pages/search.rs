//! AI Search Page

use std::rc::Rc;

use qoogle_core::utils::source_host;
use qoogle_core::{SearchConfig, SearchResult, SearchService};
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Key baked in at build time; unset means canned results
const API_KEY: Option<&str> = option_env!("API_KEY");

pub enum SearchMsg {
    QueryChanged(String),
    Submit,
    Completed(Result<SearchResult, String>),
}

pub struct SearchPage {
    service: Rc<SearchService>,
    query: String,
    loading: bool,
    error: Option<String>,
    result: Option<SearchResult>,
}

impl Component for SearchPage {
    type Message = SearchMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let config = SearchConfig::default().with_api_key(API_KEY.map(String::from));
        Self {
            service: Rc::new(SearchService::from_config(&config)),
            query: String::new(),
            loading: false,
            error: None,
            result: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            SearchMsg::QueryChanged(query) => {
                self.query = query;
                true
            }
            SearchMsg::Submit => {
                if self.loading || self.query.trim().is_empty() {
                    return false;
                }
                self.loading = true;
                self.error = None;
                self.result = None;

                let service = self.service.clone();
                let prompt = self.query.clone();
                ctx.link().send_future(async move {
                    SearchMsg::Completed(service.search(&prompt).await.map_err(|e| e.to_string()))
                });
                true
            }
            SearchMsg::Completed(outcome) => {
                self.loading = false;
                match outcome {
                    Ok(result) => self.result = Some(result),
                    Err(e) => self.error = Some(e),
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_input = ctx.link().callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            SearchMsg::QueryChanged(input.value())
        });

        let on_submit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            SearchMsg::Submit
        });

        html! {
            <div class="search-page">
                if self.shows_hero() {
                    <div class="search-hero">
                        <h1 class="brand">{ "Qoogle" }</h1>
                        <p class="muted">{ "Ask anything. Answers are grounded in Google Search." }</p>
                    </div>
                }

                <form class="search-bar" onsubmit={on_submit}>
                    <input
                        type="text"
                        placeholder="Ask Qoogle..."
                        value={self.query.clone()}
                        oninput={on_input}
                        disabled={self.loading}
                    />
                    <button type="submit" class="btn-primary" disabled={self.loading}>{ "Search" }</button>
                </form>

                if self.loading {
                    <div class="search-loading">
                        <div class="spinner"></div>
                        <span>{ "Thinking..." }</span>
                    </div>
                }

                if let Some(ref error) = self.error {
                    <div class="error-message">{ error }</div>
                }

                if let Some(ref result) = self.result {
                    { self.view_result(result) }
                }
            </div>
        }
    }
}

impl SearchPage {
    /// The hero stays up until a search is in flight or has an answer
    fn shows_hero(&self) -> bool {
        self.result.is_none() && !self.loading
    }

    fn view_result(&self, result: &SearchResult) -> Html {
        html! {
            <div class="search-result">
                <div class="result-text">
                    { for result.text.split('\n').map(|line| html! { <p>{ line }</p> }) }
                </div>

                if !result.sources.is_empty() {
                    <div class="result-sources">
                        <h3>{ "Sources" }</h3>
                        <ul>
                            { for result.sources.iter().map(|chunk| html! {
                                <li>
                                    <a href={chunk.web.uri.clone()} target="_blank" rel="noopener noreferrer" title={chunk.web.title.clone()}>
                                        { source_host(&chunk.web.uri) }
                                    </a>
                                </li>
                            }) }
                        </ul>
                    </div>
                }
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qoogle_core::mock_result;

    fn page() -> SearchPage {
        SearchPage {
            service: Rc::new(SearchService::from_config(&SearchConfig::default())),
            query: String::new(),
            loading: false,
            error: None,
            result: None,
        }
    }

    #[test]
    fn test_hero_stays_visible_with_error() {
        let mut page = page();
        assert!(page.shows_hero());

        page.error = Some("Failed to fetch search results from Gemini API.".to_string());
        assert!(page.shows_hero());

        page.loading = true;
        assert!(!page.shows_hero());

        page.loading = false;
        page.error = None;
        page.result = Some(mock_result());
        assert!(!page.shows_hero());
    }
}
