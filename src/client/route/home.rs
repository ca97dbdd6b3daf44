use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{ErrorPage, LoadingPage, Page},
        constant::SITE_NAME,
        model::error::ApiError,
        router::Route,
    },
    model::{
        profile::ProfileDto,
        site::CreateSiteDto,
        user::{LoginDto, UserDto},
    },
};

#[cfg(feature = "web")]
use crate::client::api::{
    auth::{get_user, login, logout},
    site::{check_subdomain, create_site, get_user_sites},
};

#[component]
pub fn Home() -> Element {
    let mut viewer = use_signal(|| None::<Result<UserDto, ApiError>>);
    let mut sites = use_signal(|| None::<Result<Vec<ProfileDto>, ApiError>>);
    let mut refetch_trigger = use_signal(|| 0u32);

    #[cfg(feature = "web")]
    {
        let viewer_future = use_resource(move || async move {
            let _ = refetch_trigger();
            get_user().await
        });
        use_effect(move || {
            if let Some(result) = viewer_future.read_unchecked().as_ref() {
                viewer.set(Some(result.clone()));
            }
        });

        let sites_future = use_resource(move || async move {
            let _ = refetch_trigger();
            get_user_sites().await
        });
        use_effect(move || {
            if let Some(result) = sites_future.read_unchecked().as_ref() {
                sites.set(Some(result.clone()));
            }
        });
    }

    let content = match viewer() {
        Some(Ok(user)) => rsx! {
            Page {
                div {
                    class: "home",
                    div {
                        class: "home-header",
                        h1 { "Welcome back, {user.name}" }
                        button {
                            class: "button-quiet",
                            onclick: move |_| {
                                #[cfg(feature = "web")]
                                spawn(async move {
                                    if let Err(err) = logout().await {
                                        tracing::error!("Failed to log out: {}", err);
                                    }
                                    refetch_trigger.set(refetch_trigger() + 1);
                                });
                            },
                            "Sign out"
                        }
                    }
                    SiteList { sites }
                    CreateSiteForm { refetch_trigger }
                }
            }
        },
        Some(Err(err)) if err.is_unauthorized() => rsx! {
            LoginPrompt { refetch_trigger }
        },
        Some(Err(err)) => rsx! {
            ErrorPage { status: err.status, message: err.message }
        },
        None => rsx! {
            LoadingPage {}
        },
    };

    rsx! {
        Title { "{SITE_NAME}" }
        {content}
    }
}

#[component]
fn SiteList(sites: Signal<Option<Result<Vec<ProfileDto>, ApiError>>>) -> Element {
    let content = match sites() {
        Some(Ok(list)) if list.is_empty() => rsx! {
            p { class: "site-list-empty", "You don't have a site yet." }
        },
        Some(Ok(list)) => rsx! {
            ul {
                for profile in list {
                    {
                        let label = profile
                            .name
                            .clone()
                            .unwrap_or_else(|| profile.username.clone());
                        rsx! {
                            li {
                                key: "{profile.username}",
                                Link {
                                    to: Route::SiteHome { site: profile.username.clone() },
                                    "{label}"
                                }
                                " — "
                                Link {
                                    to: Route::DashboardPosts { subdomain: profile.username.clone() },
                                    "dashboard"
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
        section {
            class: "site-list",
            h2 { "Your sites" }
            {content}
        }
    }
}

#[component]
fn LoginPrompt(refetch_trigger: Signal<u32>) -> Element {
    let mut address = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);

    rsx! {
        Page {
            class: "page-centered",
            div {
                class: "login-prompt",
                h1 { "Sign in to {SITE_NAME}" }
                p { "Enter your account address to continue." }
                input {
                    r#type: "text",
                    placeholder: "0x…",
                    value: "{address}",
                    oninput: move |event| address.set(event.value()),
                }
                button {
                    onclick: move |_| {
                        #[cfg(feature = "web")]
                        spawn(async move {
                            let payload = LoginDto {
                                address: address(),
                                name: None,
                            };
                            match login(&payload).await {
                                Ok(_) => {
                                    error.set(None);
                                    refetch_trigger.set(refetch_trigger() + 1);
                                }
                                Err(err) => {
                                    tracing::error!("Failed to log in: {}", err);
                                    error.set(Some(err.message));
                                }
                            }
                        });
                    },
                    "Sign in"
                }
                if let Some(message) = error() {
                    p { class: "form-error", "{message}" }
                }
            }
        }
    }
}

#[component]
fn CreateSiteForm(refetch_trigger: Signal<u32>) -> Element {
    let mut name = use_signal(String::new);
    let mut subdomain = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let nav = use_navigator();

    rsx! {
        section {
            class: "create-site",
            h2 { "Create a site" }
            input {
                r#type: "text",
                placeholder: "Site name",
                value: "{name}",
                oninput: move |event| name.set(event.value()),
            }
            input {
                r#type: "text",
                placeholder: "subdomain",
                value: "{subdomain}",
                oninput: move |event| subdomain.set(event.value()),
            }
            button {
                onclick: move |_| {
                    #[cfg(feature = "web")]
                    spawn(async move {
                        let payload = CreateSiteDto {
                            name: name(),
                            subdomain: subdomain(),
                        };
                        if let Err(err) = check_subdomain(&payload.subdomain, None).await {
                            error.set(Some(err.message));
                            return;
                        }
                        match create_site(&payload).await {
                            Ok(site) => {
                                error.set(None);
                                refetch_trigger.set(refetch_trigger() + 1);
                                nav.push(Route::DashboardPosts {
                                    subdomain: site.subdomain,
                                });
                            }
                            Err(err) => {
                                tracing::error!("Failed to create site: {}", err);
                                error.set(Some(err.message));
                            }
                        }
                    });
                },
                "Create site"
            }
            if let Some(message) = error() {
                p { class: "form-error", "{message}" }
            }
        }
    }
}
