mod post;

pub use post::SitePost;

use chrono::{DateTime, Utc};
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{EmptyState, ErrorPage, LoadingPage, Page},
        model::error::ApiError,
        router::Route,
    },
    model::{
        profile::{NotesDto, ProfileDto},
        site::{SubscribeDto, SubscriptionDto},
    },
};

#[cfg(feature = "web")]
use crate::client::api::{
    page::get_notes,
    site::{get_site, get_subscription, subscribe, unsubscribe},
};

/// How many posts the homepage requests at once.
const HOME_NOTES_TAKE: u64 = 1000;

pub(super) fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}

#[component]
pub fn SiteHome(site: String) -> Element {
    let mut profile = use_signal(|| None::<Result<ProfileDto, ApiError>>);
    let mut notes = use_signal(|| None::<Result<NotesDto, ApiError>>);

    #[cfg(feature = "web")]
    {
        let handle = site.clone();
        let profile_future = use_resource(move || {
            let handle = handle.clone();
            async move { get_site(&handle).await }
        });
        use_effect(move || {
            if let Some(result) = profile_future.read_unchecked().as_ref() {
                profile.set(Some(result.clone()));
            }
        });

        let handle = site.clone();
        let notes_future = use_resource(move || {
            let handle = handle.clone();
            async move { get_notes(&handle, HOME_NOTES_TAKE).await }
        });
        use_effect(move || {
            if let Some(result) = notes_future.read_unchecked().as_ref() {
                notes.set(Some(result.clone()));
            }
        });
    }

    let content = match profile() {
        Some(Ok(profile)) => {
            let title = profile.name.clone().unwrap_or_else(|| profile.username.clone());
            rsx! {
                Title { "{title}" }
                Page {
                    header {
                        class: "site-home-header",
                        h1 { "{title}" }
                        if let Some(bio) = profile.bio {
                            p { class: "site-home-bio", "{bio}" }
                        }
                        SubscribeButton { site: site.clone() }
                    }
                    PostList { site: site.clone(), notes }
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

/// Subscribe/unsubscribe toggle for the viewer.
///
/// A missing subscription and a logged-out viewer both render the subscribe
/// state; the API rejects the action itself when not logged in.
#[component]
fn SubscribeButton(site: String) -> Element {
    let mut subscription = use_signal(|| None::<Option<SubscriptionDto>>);
    let mut refetch_trigger = use_signal(|| 0u32);

    #[cfg(feature = "web")]
    {
        let handle = site.clone();
        let future = use_resource(move || {
            let handle = handle.clone();
            async move {
                let _ = refetch_trigger();
                get_subscription(&handle).await
            }
        });
        use_effect(move || {
            if let Some(result) = future.read_unchecked().as_ref() {
                match result {
                    Ok(sub) => subscription.set(Some(Some(sub.clone()))),
                    Err(_) => subscription.set(Some(None)),
                }
            }
        });
    }

    let handle = site.clone();

    match subscription() {
        Some(Some(_)) => rsx! {
            button {
                class: "button-quiet",
                onclick: move |_| {
                    #[cfg(feature = "web")]
                    {
                        let handle = handle.clone();
                        spawn(async move {
                            if let Err(err) = unsubscribe(&handle).await {
                                tracing::error!("Failed to unsubscribe: {}", err);
                            }
                            refetch_trigger.set(refetch_trigger() + 1);
                        });
                    }
                },
                "Unsubscribe"
            }
        },
        Some(None) => rsx! {
            button {
                onclick: move |_| {
                    #[cfg(feature = "web")]
                    {
                        let handle = handle.clone();
                        spawn(async move {
                            let payload = SubscribeDto { email: Some(true) };
                            if let Err(err) = subscribe(&handle, &payload).await {
                                tracing::error!("Failed to subscribe: {}", err);
                            }
                            refetch_trigger.set(refetch_trigger() + 1);
                        });
                    }
                },
                "Subscribe"
            }
        },
        None => rsx! {},
    }
}

#[component]
fn PostList(site: String, notes: Signal<Option<Result<NotesDto, ApiError>>>) -> Element {
    let content = match notes() {
        Some(Ok(notes)) if notes.total == 0 => rsx! {
            EmptyState {}
        },
        Some(Ok(notes)) => rsx! {
            div {
                class: "post-list",
                for post in notes.list {
                    {
                        let title = post.title.clone().unwrap_or_default();
                        let excerpt = post.summary.as_ref().map(|s| s.content.clone());
                        let date = post.date_published.as_ref().map(format_date);
                        rsx! {
                            Link {
                                key: "{post.id}",
                                class: "post-list-item",
                                to: Route::SitePost {
                                    site: site.clone(),
                                    page: post.id.clone(),
                                },
                                h3 { "{title}" }
                                if let Some(date) = date {
                                    div { class: "post-list-date", "{date}" }
                                }
                                if let Some(excerpt) = excerpt {
                                    div { class: "post-list-excerpt", "{excerpt}..." }
                                }
                            }
                        }
                    }
                }
            }
        },
        Some(Err(err)) => rsx! {
            p { class: "form-error", "{err.message}" }
        },
        None => rsx! {
            p { "Loading..." }
        },
    };

    rsx! {
        {content}
    }
}
