//! Partner sign-in page.

use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, Input, Label};
use ui::use_toast;

use crate::Route;

/// Sign-in page component.
///
/// Partners authenticate with a link sent to their email, so the form only
/// collects the address and asks the server to send the link.
#[component]
pub fn SignIn() -> Element {
    let toasts = use_toast();
    let mut email = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    let handle_sign_in = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            submitting.set(true);
            match api::send_authentication_link(email()).await {
                Ok(()) => {
                    toasts.success(
                        "Enviamos um link de autenticação para seu e-mail.",
                        None,
                    );
                }
                Err(_) => {
                    toasts.error("Credenciais inválidas.");
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        document::Title { "Login" }

        div {
            class: "auth-page",

            Link {
                to: Route::SignUp {},
                class: "btn btn-ghost auth-switch",
                "Novo estabelecimento"
            }

            div {
                class: "auth-card",

                div {
                    class: "auth-heading",
                    h1 { "Acessar painel" }
                    p { "Acompanhe suas vendas pelo painel do parceiro!" }
                }

                form {
                    onsubmit: handle_sign_in,
                    class: "auth-form",

                    div {
                        class: "form-field",
                        Label { html_for: "email", "Seu e-mail" }
                        Input {
                            id: "email",
                            r#type: "email",
                            value: email(),
                            oninput: move |evt: FormEvent| email.set(evt.value()),
                        }
                    }

                    Button {
                        variant: ButtonVariant::Primary,
                        class: "w-full",
                        r#type: "submit",
                        disabled: submitting(),
                        if submitting() { "Enviando..." } else { "Acessar painel" }
                    }
                }
            }
        }
    }
}
