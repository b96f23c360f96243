//! Restaurant sign-up page.

use api::SignUpRequest;
use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, Input, Label};
use ui::{use_toast, ToastAction};

use crate::Route;

/// Sign-up page component.
///
/// Builds a [`SignUpRequest`] from the form fields on submit and forwards it
/// through [`api::register_restaurant`]. The outcome is reported with a
/// toast; the success toast carries a "Login" action that navigates to the
/// sign-in page. The submit button is disabled while a submission is in
/// flight.
#[component]
pub fn SignUp() -> Element {
    let nav = use_navigator();
    let toasts = use_toast();
    let mut restaurant_name = use_signal(String::new);
    let mut manager_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    let go_to_login = use_callback(move |()| {
        nav.push(Route::SignIn {});
    });

    let handle_sign_up = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let request = match SignUpRequest::parse(
                email(),
                restaurant_name(),
                phone(),
                manager_name(),
            ) {
                Ok(request) => request,
                Err(e) => {
                    error.set(Some(e.to_string()));
                    return;
                }
            };

            submitting.set(true);
            match api::register_restaurant(request).await {
                Ok(()) => {
                    toasts.success(
                        "Restaurante cadastrado com sucesso!",
                        Some(ToastAction {
                            label: "Login".to_string(),
                            on_select: go_to_login,
                        }),
                    );
                }
                Err(_) => {
                    toasts.error("Erro ao cadastrar restaurante.");
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        document::Title { "Cadastro" }

        div {
            class: "auth-page",

            Link {
                to: Route::SignIn {},
                class: "btn btn-ghost auth-switch",
                "Fazer login"
            }

            div {
                class: "auth-card",

                div {
                    class: "auth-heading",
                    h1 { "Criar conta grátis" }
                    p { "Seja um parceiro e comece suas vendas!" }
                }

                form {
                    onsubmit: handle_sign_up,
                    class: "auth-form",

                    if let Some(err) = error() {
                        div { class: "form-error", "{err}" }
                    }

                    div {
                        class: "form-field",
                        Label { html_for: "restaurant-name", "Nome do estabelecimento" }
                        Input {
                            id: "restaurant-name",
                            r#type: "text",
                            value: restaurant_name(),
                            oninput: move |evt: FormEvent| restaurant_name.set(evt.value()),
                        }
                    }

                    div {
                        class: "form-field",
                        Label { html_for: "manager-name", "Seu nome" }
                        Input {
                            id: "manager-name",
                            r#type: "text",
                            value: manager_name(),
                            oninput: move |evt: FormEvent| manager_name.set(evt.value()),
                        }
                    }

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

                    div {
                        class: "form-field",
                        Label { html_for: "phone", "Seu celular" }
                        Input {
                            id: "phone",
                            r#type: "tel",
                            value: phone(),
                            oninput: move |evt: FormEvent| phone.set(evt.value()),
                        }
                    }

                    Button {
                        variant: ButtonVariant::Primary,
                        class: "w-full",
                        r#type: "submit",
                        disabled: submitting(),
                        if submitting() { "Enviando..." } else { "Finalizar cadastro" }
                    }

                    p {
                        class: "auth-terms",
                        "Ao continuar, você concorda com nossos "
                        a { href: "", "Termos de serviço" }
                        " e "
                        a { href: "", "políticas de privacidade" }
                        "."
                    }
                }
            }
        }
    }
}
