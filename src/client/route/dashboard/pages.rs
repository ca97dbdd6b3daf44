use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{ErrorPage, LoadingPage, Page},
        constant::SITE_NAME,
        model::error::ApiError,
    },
    model::page::{PageDto, PageVisibility, PaginatedPagesDto},
};

#[cfg(feature = "web")]
use crate::{
    client::api::page::{delete_page, get_pages},
    model::page::PageKind,
};

const PER_PAGE: u64 = 20;

const VISIBILITY_TABS: &[(PageVisibility, &str)] = &[
    (PageVisibility::All, "All"),
    (PageVisibility::Published, "Published"),
    (PageVisibility::Draft, "Drafts"),
    (PageVisibility::Scheduled, "Scheduled"),
];

#[component]
pub fn DashboardPages(subdomain: String) -> Element {
    rsx! {
        PagesManager { subdomain, is_post: false }
    }
}

#[component]
pub fn DashboardPosts(subdomain: String) -> Element {
    rsx! {
        PagesManager { subdomain, is_post: true }
    }
}

#[component]
fn PagesManager(subdomain: String, is_post: bool) -> Element {
    let mut visibility = use_signal(|| PageVisibility::All);
    let mut page_index = use_signal(|| 0u64);
    let refetch_trigger = use_signal(|| 0u32);
    let mut pages = use_signal(|| None::<Result<PaginatedPagesDto, ApiError>>);

    #[cfg(feature = "web")]
    {
        let handle = subdomain.clone();
        let future = use_resource(move || {
            let handle = handle.clone();
            async move {
                let _ = refetch_trigger();
                let kind = if is_post { PageKind::Post } else { PageKind::Page };
                get_pages(&handle, kind, visibility(), page_index(), PER_PAGE).await
            }
        });
        use_effect(move || {
            if let Some(result) = future.read_unchecked().as_ref() {
                pages.set(Some(result.clone()));
            }
        });
    }

    let heading = if is_post { "Posts" } else { "Pages" };

    let content = match pages() {
        Some(Ok(paginated)) => rsx! {
            Page {
                div {
                    class: "dashboard",
                    h1 { "{heading}" }
                    div {
                        class: "dashboard-tabs",
                        for (tab, label) in VISIBILITY_TABS.iter().copied() {
                            button {
                                key: "{label}",
                                class: if visibility() == tab { "tab tab-active" } else { "tab" },
                                onclick: move |_| {
                                    visibility.set(tab);
                                    page_index.set(0);
                                },
                                "{label}"
                            }
                        }
                    }
                    PagesTable { pages: paginated.pages.clone(), refetch_trigger }
                    Pagination {
                        page_index,
                        total_pages: paginated.total_pages,
                    }
                }
            }
        },
        Some(Err(err)) => rsx! {
            ErrorPage { status: err.status, message: err.message }
        },
        None => rsx! {
            LoadingPage {}
        },
    };

    rsx! {
        Title { "Dashboard - {heading} | {SITE_NAME}" }
        {content}
    }
}

#[component]
fn PagesTable(pages: Vec<PageDto>, refetch_trigger: Signal<u32>) -> Element {
    if pages.is_empty() {
        return rsx! {
            div { class: "dashboard-empty", "Nothing here yet." }
        };
    }

    rsx! {
        table {
            class: "dashboard-table",
            thead {
                tr {
                    th { "Title" }
                    th { "Slug" }
                    th { "Status" }
                    th { "Published" }
                    th { "" }
                }
            }
            tbody {
                for page in pages {
                    {
                        let page_id = page.id;
                        let date = crate::client::route::site::format_date(&page.published_at);
                        rsx! {
                            tr {
                                key: "{page.id}",
                                td { "{page.title}" }
                                td { "/{page.slug}" }
                                td { "{page.status}" }
                                td { "{date}" }
                                td {
                                    button {
                                        class: "button-danger",
                                        onclick: move |_| {
                                            #[cfg(feature = "web")]
                                            spawn(async move {
                                                match delete_page(page_id).await {
                                                    Ok(()) => {
                                                        refetch_trigger.set(refetch_trigger() + 1);
                                                    }
                                                    Err(err) => {
                                                        tracing::error!("Failed to delete page: {}", err);
                                                    }
                                                }
                                            });
                                        },
                                        "Delete"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Pagination(page_index: Signal<u64>, total_pages: u64) -> Element {
    if total_pages <= 1 {
        return rsx! {};
    }

    let current = page_index() + 1;
    let on_last_page = current >= total_pages;

    rsx! {
        div {
            class: "dashboard-pagination",
            button {
                disabled: page_index() == 0,
                onclick: move |_| {
                    let current = page_index();
                    page_index.set(current.saturating_sub(1));
                },
                "Previous"
            }
            span { "Page {current} of {total_pages}" }
            button {
                disabled: on_last_page,
                onclick: move |_| page_index.set(page_index() + 1),
                "Next"
            }
        }
    }
}
