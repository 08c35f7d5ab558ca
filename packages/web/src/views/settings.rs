//! Settings: profile summary and highlight-theme picker with live preview.

use dioxus::prelude::*;
use store::CodeTheme;
use ui::components::CodeBlock;
use ui::display::age_label_now;
use ui::{use_code_theme, use_session};

const PREVIEW_SNIPPET: &str = "function greet(name) {\n  const message = `Hello, ${name}!`;\n  console.log(message);\n  return message;\n}\n\ngreet('ClipIt');";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tab {
    Profile,
    Theme,
}

#[component]
pub fn Settings() -> Element {
    let mut tab = use_signal(|| Tab::Profile);

    rsx! {
        section {
            class: "flex flex-col gap-4",
            h1 { class: "text-neutral-800 font-bold text-2xl", "Settings" }
            div {
                class: "flex gap-2 border-b border-neutral-200",
                button {
                    class: if tab() == Tab::Profile { "tab active" } else { "tab" },
                    onclick: move |_| tab.set(Tab::Profile),
                    "Profile"
                }
                button {
                    class: if tab() == Tab::Theme { "tab active" } else { "tab" },
                    onclick: move |_| tab.set(Tab::Theme),
                    "Code theme"
                }
            }
            match tab() {
                Tab::Profile => rsx! { ProfileTab {} },
                Tab::Theme => rsx! { ThemeTab {} },
            }
        }
    }
}

#[component]
fn ProfileTab() -> Element {
    let session = use_session();
    let Some(user) = session.read().user().cloned() else {
        return rsx! {};
    };
    let joined = user.created_at.as_deref().map(age_label_now);

    rsx! {
        dl {
            class: "grid grid-cols-[8rem_1fr] gap-y-2 text-sm",
            dt { class: "text-neutral-500", "Name" }
            dd { "{user.display_name()}" }
            dt { class: "text-neutral-500", "Email" }
            dd { "{user.email}" }
            if let Some(joined) = joined {
                dt { class: "text-neutral-500", "Joined" }
                dd { "{joined}" }
            }
        }
    }
}

#[component]
fn ThemeTab() -> Element {
    let mut preference = use_code_theme();
    let mut draft = use_signal(|| preference.peek().get());
    let mut saved = use_signal(|| false);
    let dirty = draft() != preference.read().get();

    rsx! {
        div {
            class: "flex flex-col gap-4",
            div {
                class: "grid grid-cols-2 md:grid-cols-3 gap-2",
                for theme in CodeTheme::ALL {
                    label {
                        key: "{theme.key()}",
                        class: "flex items-center gap-2 text-sm",
                        input {
                            r#type: "radio",
                            name: "code-theme",
                            checked: draft() == theme,
                            onchange: move |_| {
                                draft.set(theme);
                                saved.set(false);
                            },
                        }
                        "{theme.label()}"
                    }
                }
            }
            CodeBlock { code: PREVIEW_SNIPPET.to_string(), language: "javascript", theme: draft() }
            div {
                class: "flex items-center gap-3",
                button {
                    class: "btn btn-primary",
                    disabled: !dirty,
                    onclick: move |_| {
                        preference.write().set(draft());
                        tracing::info!("code theme set to {}", draft());
                        saved.set(true);
                    },
                    "Save"
                }
                if saved() {
                    span { class: "text-sm text-green-700", "Saved." }
                }
            }
        }
    }
}
