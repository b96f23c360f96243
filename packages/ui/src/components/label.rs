use dioxus::prelude::*;

/// Form label associated with an input by id.
#[component]
pub fn Label(
    html_for: String,
    #[props(default = String::new())] class: String,
    children: Element,
) -> Element {
    rsx! {
        label {
            r#for: "{html_for}",
            class: "label {class}",
            {children}
        }
    }
}
