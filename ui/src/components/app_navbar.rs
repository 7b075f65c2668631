use crate::i18n;
use crate::t;
use dioxus::prelude::*;
use once_cell::sync::OnceCell;

/// Platforms register a `NavBuilder` providing fully constructed `Link`
/// elements, so `ui` does not need to know each platform's `Route` enum.
///
/// Example (in platform crate):
/// ```ignore
/// use ui::components::app_navbar::{NavBuilder, register_nav};
/// fn nav_home(label: &str) -> Element {
///     rsx!(Link { class: "navbar__link", to: Route::Home {}, "{label}" })
/// }
/// register_nav(NavBuilder { home: nav_home, admin: nav_admin });
/// ```
///
/// Each builder receives the localized label and returns a link that contains
/// it, so switching language re-renders the links with fresh strings.
pub struct NavBuilder {
    pub home: fn(label: &str) -> Element,
    pub admin: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

/// Application header: brand, navigation and the language picker.
#[component]
pub fn AppNavbar() -> Element {
    // Global language code signal, if the platform provided one.
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    // The navbar is remounted on every switch, so start from the language in effect.
    let mut current_lang = use_signal(|| match lang_code_ctx {
        Some(code) => String::clone(&code.peek()),
        None => i18n::current_language(),
    });
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;

    let on_change = move |evt: FormEvent| {
        let val = evt.value();
        match i18n::set_language(&val) {
            Ok(()) => {
                current_lang.set(val.clone());
                if let Some(mut code) = lang_code_ctx {
                    code.set(val);
                }
            }
            Err(err) => tracing::warn!(language = %val, error = %err, "language switch failed"),
        }
    };

    let links = NAV_BUILDER.get().map(|b| {
        let home = (b.home)(&t!("nav-home"));
        let admin = (b.admin)(&t!("nav-admin"));
        (home, admin)
    });

    let tagline = t!("tagline");

    rsx! {
        header {
            id: "navbar",
            class: "navbar",
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-link",
                        span { class: "navbar__brand-spark", aria_hidden: "true" }
                        span { class: "navbar__brand-mark", "Keyscore" }
                    }
                    span { class: "navbar__brand-subtitle", "{tagline}" }
                }

                if let Some((home, admin)) = links {
                    nav { class: "navbar__links",
                        {home}
                        {admin}
                    }
                }

                if show_switcher {
                    div { class: "navbar__locale",
                        label {
                            class: "visually-hidden",
                            r#for: "locale-select",
                            {t!("nav-language-label")}
                        }
                        select {
                            id: "locale-select",
                            value: "{current_lang()}",
                            oninput: on_change,
                            { langs().iter().map(|code| {
                                let c = code.clone();
                                rsx!{
                                    option { key: "{c}", value: "{c}", "{c}" }
                                }
                            })}
                        }
                    }
                }
            }
        }
    }
}
