use dioxus::prelude::*;
use store::CodeTheme;

use crate::theme::use_code_theme;

/// Code snippet rendered in the user's highlight theme. `theme` overrides the
/// stored preference, which the settings preview uses.
#[component]
pub fn CodeBlock(code: String, language: String, theme: Option<CodeTheme>) -> Element {
    let preference = use_code_theme();
    let theme = theme.unwrap_or_else(|| preference.read().get());

    rsx! {
        pre {
            class: "code-block theme-{theme.key()}",
            "data-language": "{language}",
            code {
                class: "language-{language}",
                "{code}"
            }
        }
    }
}
