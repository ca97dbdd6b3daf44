use dioxus::prelude::*;

use crate::{
    client::{
        component::{ErrorPage, LoadingPage, Page},
        model::error::ApiError,
        route::site::format_date,
        router::Route,
    },
    model::profile::NoteDto,
};

#[cfg(feature = "web")]
use crate::client::api::page::get_note;

#[component]
pub fn SitePost(site: String, page: String) -> Element {
    let mut note = use_signal(|| None::<Result<NoteDto, ApiError>>);

    #[cfg(feature = "web")]
    {
        let handle = site.clone();
        let note_id = page.clone();
        let future = use_resource(move || {
            let handle = handle.clone();
            let note_id = note_id.clone();
            async move { get_note(&handle, &note_id).await }
        });
        use_effect(move || {
            if let Some(result) = future.read_unchecked().as_ref() {
                note.set(Some(result.clone()));
            }
        });
    }

    let content = match note() {
        Some(Ok(note)) => {
            let title = note.title.clone().unwrap_or_default();
            let date = note.date_published.as_ref().map(format_date);
            let body = note
                .body
                .as_ref()
                .map(|body| render_markdown(&body.content))
                .unwrap_or_default();
            rsx! {
                Title { "{title}" }
                Page {
                    article {
                        class: "post",
                        h1 { "{title}" }
                        if let Some(date) = date {
                            div { class: "post-date", "{date}" }
                        }
                        div {
                            class: "post-body",
                            dangerous_inner_html: "{body}",
                        }
                        Link {
                            class: "post-back",
                            to: Route::SiteHome { site: site.clone() },
                            "← Back"
                        }
                    }
                }
            }
        }
        Some(Err(err)) => rsx! {
            ErrorPage { status: err.status, message: err.message }
        },
        None => rsx! {
            LoadingPage {}
        },
    };

    rsx! {
        {content}
    }
}

fn render_markdown(source: &str) -> String {
    let parser = pulldown_cmark::Parser::new(source);
    let mut html = String::new();
    pulldown_cmark::html::push_html(&mut html, parser);
    html
}
