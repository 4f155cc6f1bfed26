//! Full pages, rendered on the server with `dioxus-ssr`.

use dioxus::prelude::*;
use shared_types::{messages, LookupResponse};

use crate::ui::{Card, CsrfField, PageShell, ResultsPanel};

/// Last submitted address, echoed back into the form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddressFields {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

#[derive(Props, Clone, PartialEq)]
pub struct PasswordPageProps {
    pub title: String,
    pub csrf_token: String,
    /// False when no access password has been set yet.
    pub configured: bool,
    pub message: Option<String>,
}

#[derive(Props, Clone, PartialEq)]
pub struct ToolPageProps {
    pub title: String,
    pub instructions: String,
    pub csrf_token: String,
    pub maps_api_key: Option<String>,
    pub fields: AddressFields,
    pub error: Option<String>,
    pub result: Option<LookupResponse>,
}

#[allow(non_snake_case)]
pub fn PasswordPage(props: PasswordPageProps) -> Element {
    rsx! {
        PageShell { title: props.title.clone(),
            Card { class: "plu-password-card",
                h2 { class: "plu-password-title", "{props.title}" }
                p { class: "plu-password-subtitle", "This tool is password protected." }
                if props.configured {
                    form { method: "post", action: "/access", class: "plu-password-form",
                        CsrfField { token: props.csrf_token.clone() }
                        label { class: "plu-label",
                            "Access Password"
                            input {
                                r#type: "password",
                                id: "plu-password",
                                name: "password",
                                class: "plu-input",
                                autocomplete: "current-password",
                            }
                        }
                        button { r#type: "submit", class: "plu-btn plu-btn-primary plu-btn-full",
                            "Access Tool"
                        }
                    }
                    if let Some(message) = &props.message {
                        div { class: "plu-message plu-message-error", "{message}" }
                    }
                } else {
                    div { class: "plu-notice", {messages::NOT_CONFIGURED} }
                }
            }
        }
    }
}

#[component]
fn AddressInput(
    id: &'static str,
    name: &'static str,
    label: &'static str,
    value: String,
    #[props(default)] placeholder: &'static str,
    #[props(default)] class: &'static str,
) -> Element {
    rsx! {
        div { class: "plu-field {class}",
            label { class: "plu-label",
                "{label}"
                input {
                    r#type: "text",
                    id: "{id}",
                    name: "{name}",
                    class: "plu-input",
                    value: "{value}",
                    placeholder: "{placeholder}",
                    autocomplete: "off",
                }
            }
        }
    }
}

#[allow(non_snake_case)]
pub fn ToolPage(props: ToolPageProps) -> Element {
    let fields = &props.fields;

    rsx! {
        PageShell { title: props.title.clone(), maps_api_key: props.maps_api_key.clone(),
            div { class: "plu-toolbar",
                div { class: "plu-toolbar-brand", span { "{props.title}" } }
                form { method: "post", action: "/sign-out",
                    CsrfField { token: props.csrf_token.clone() }
                    button { r#type: "submit", class: "plu-btn plu-btn-ghost plu-btn-sm", "Sign Out" }
                }
            }
            Card { class: "plu-search-card",
                if !props.instructions.trim().is_empty() {
                    p { class: "plu-instructions", "{props.instructions}" }
                }
                form { method: "post", action: "/lookup", id: "plu-lookup-form",
                    CsrfField { token: props.csrf_token.clone() }
                    div { class: "plu-search-row",
                        AddressInput {
                            id: "plu-street",
                            name: "street",
                            label: "Street Address",
                            value: fields.street.clone(),
                            placeholder: "e.g. 350 N Orleans St",
                            class: "plu-field-grow",
                        }
                        AddressInput {
                            id: "plu-city",
                            name: "city",
                            label: "City",
                            value: fields.city.clone(),
                        }
                        AddressInput {
                            id: "plu-state",
                            name: "state",
                            label: "State",
                            value: fields.state.clone(),
                            class: "plu-field-narrow",
                        }
                        AddressInput {
                            id: "plu-zip",
                            name: "zip",
                            label: "ZIP",
                            value: fields.zip.clone(),
                            class: "plu-field-narrow",
                        }
                    }
                    div { class: "plu-search-action",
                        button { r#type: "submit", id: "plu-lookup", class: "plu-btn plu-btn-primary",
                            "Look Up Property"
                        }
                    }
                }
                if let Some(error) = &props.error {
                    div { class: "plu-message plu-message-error", id: "plu-lookup-error", "{error}" }
                }
            }
            if let Some(result) = &props.result {
                ResultsPanel { response: result.clone() }
            }
        }
    }
}

fn render_dom(mut dom: VirtualDom) -> String {
    dom.rebuild_in_place();
    format!(
        "<!DOCTYPE html><html lang=\"en\">{}</html>",
        dioxus_ssr::render(&dom)
    )
}

pub fn render_password_page(props: PasswordPageProps) -> String {
    render_dom(VirtualDom::new_with_props(PasswordPage, props))
}

pub fn render_tool_page(props: ToolPageProps) -> String {
    render_dom(VirtualDom::new_with_props(ToolPage, props))
}
