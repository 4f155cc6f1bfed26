use dioxus::prelude::*;

pub const STYLESHEET_PATH: &str = "/assets/lookup.css";
pub const SCRIPT_PATH: &str = "/assets/lookup.js";

/// Google Maps JS loader for the Places library.
///
/// The callback is defined in `lookup.js`, which must load first.
pub fn maps_script_src(api_key: &str) -> String {
    format!(
        "https://maps.googleapis.com/maps/api/js?key={}&libraries=places&callback=pluInitAutocomplete",
        urlencoding::encode(api_key)
    )
}

/// Head and body of a page; the caller supplies the `<html>` element.
#[component]
pub fn PageShell(
    title: String,
    /// Loads the address autocomplete scripts when set.
    #[props(default)]
    maps_api_key: Option<String>,
    children: Element,
) -> Element {
    let maps_src = maps_api_key.as_deref().map(maps_script_src);

    rsx! {
        head {
            meta { charset: "utf-8" }
            meta { name: "viewport", content: "width=device-width, initial-scale=1" }
            title { "{title}" }
            link { rel: "stylesheet", href: STYLESHEET_PATH }
        }
        body {
            div { class: "plu-wrap", id: "plu-root", {children} }
            if let Some(src) = maps_src {
                script { src: SCRIPT_PATH }
                script { src: "{src}" }
            }
        }
    }
}

/// Hidden anti-forgery field included in every form.
#[component]
pub fn CsrfField(token: String) -> Element {
    rsx! {
        input { r#type: "hidden", name: "csrf_token", value: "{token}" }
    }
}
