use dioxus::prelude::*;

use crate::components::CodeBlock;
use crate::post_form::{PostForm, DESCRIPTION_MAX_CHARS, LANGUAGES, TITLE_MAX_CHARS};

/// Form shared by the create and edit screens. The parent validates the
/// submitted [`PostForm`] and owns the error text.
#[component]
pub fn PostEditor(
    initial: PostForm,
    submit_label: String,
    #[props(default = false)] busy: bool,
    error: Option<String>,
    on_submit: EventHandler<PostForm>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut form = use_signal(|| initial.clone());

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        on_submit.call(form());
    };

    let handle_tag_key = move |evt: KeyboardEvent| {
        if evt.key() == Key::Enter {
            evt.prevent_default();
            form.write().add_tag();
        }
    };

    let title_count = form.read().title.chars().count();
    let description_count = form.read().description.chars().count();
    let preview_code = form.read().code.clone();
    let preview_language = form.read().language.clone();

    rsx! {
        form {
            onsubmit: handle_submit,
            class: "flex flex-col gap-3",

            if let Some(err) = error {
                div {
                    class: "px-2.5 py-2.5 bg-red-50 border border-red-200 rounded text-red-600 text-[0.8125rem]",
                    "{err}"
                }
            }

            label { class: "field-label", "Title ({title_count}/{TITLE_MAX_CHARS})" }
            input {
                class: "input",
                r#type: "text",
                placeholder: "Title",
                value: form.read().title.clone(),
                oninput: move |evt: FormEvent| form.write().title = evt.value(),
            }

            label { class: "field-label", "Description ({description_count}/{DESCRIPTION_MAX_CHARS})" }
            textarea {
                class: "input",
                rows: 2,
                placeholder: "What does this snippet do?",
                value: form.read().description.clone(),
                oninput: move |evt: FormEvent| form.write().description = evt.value(),
            }

            label { class: "field-label", "Language" }
            select {
                class: "input",
                value: form.read().language.clone(),
                onchange: move |evt: FormEvent| form.write().language = evt.value(),
                for (value, label) in LANGUAGES {
                    option { key: "{value}", value: value, "{label}" }
                }
            }

            label { class: "field-label", "Code" }
            textarea {
                class: "input font-mono",
                rows: 12,
                spellcheck: false,
                value: form.read().code.clone(),
                oninput: move |evt: FormEvent| form.write().code = evt.value(),
            }

            label { class: "field-label", "Tags" }
            div {
                class: "flex gap-2",
                input {
                    class: "input flex-1",
                    r#type: "text",
                    placeholder: "Add a tag and press Enter",
                    value: form.read().tag_input.clone(),
                    oninput: move |evt: FormEvent| form.write().tag_input = evt.value(),
                    onkeydown: handle_tag_key,
                }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| {
                        form.write().add_tag();
                    },
                    crate::Icon { width: 12, height: 12, icon: crate::icons::FaPlus }
                }
            }
            div {
                class: "flex flex-wrap gap-1",
                for tag in form.read().tags.clone() {
                    span {
                        key: "{tag}",
                        class: "tag-chip small",
                        "#{tag} "
                        button {
                            r#type: "button",
                            class: "tag-remove",
                            onclick: move |_| form.write().remove_tag(&tag),
                            "×"
                        }
                    }
                }
            }

            if !preview_code.trim().is_empty() {
                label { class: "field-label", "Preview" }
                CodeBlock { code: preview_code, language: preview_language }
            }

            div {
                class: "flex justify-end gap-2 mt-2",
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    disabled: busy,
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: busy,
                    if busy { "Saving..." } else { "{submit_label}" }
                }
            }
        }
    }
}
