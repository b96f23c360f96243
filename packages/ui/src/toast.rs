//! Transient notification service.
//!
//! [`ToastProvider`] owns the toast stack and renders it in a fixed viewport
//! above the rest of the app. Any component below the provider can grab a
//! [`Toasts`] handle with [`use_toast`] and push success or error messages,
//! optionally with a single action button (for example "Login" on a
//! successful registration). Toasts auto-dismiss after a few seconds and can
//! be dismissed manually.

use std::time::Duration;

use dioxus::prelude::*;

/// How long a plain toast stays on screen.
const DISMISS_AFTER: Duration = Duration::from_secs(5);
/// Toasts carrying an action stay longer so the user can reach the button.
const DISMISS_AFTER_WITH_ACTION: Duration = Duration::from_secs(8);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// Action button attached to a toast.
#[derive(Clone, PartialEq)]
pub struct ToastAction {
    pub label: String,
    pub on_select: Callback<()>,
}

#[derive(Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
    pub action: Option<ToastAction>,
}

/// The ordered set of live toasts. Ids are monotonic and never reused.
#[derive(Clone, Default, PartialEq)]
pub struct ToastStack {
    pub toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastStack {
    pub fn push(
        &mut self,
        kind: ToastKind,
        message: String,
        action: Option<ToastAction>,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            kind,
            message,
            action,
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }
}

/// Handle for pushing notifications from anywhere below the provider.
#[derive(Clone, Copy, PartialEq)]
pub struct Toasts(Signal<ToastStack>);

/// Get the toast handle from context.
pub fn use_toast() -> Toasts {
    use_context::<Toasts>()
}

impl Toasts {
    pub fn success(self, message: impl Into<String>, action: Option<ToastAction>) {
        self.show(ToastKind::Success, message.into(), action);
    }

    pub fn error(self, message: impl Into<String>) {
        self.show(ToastKind::Error, message.into(), None);
    }

    pub fn dismiss(self, id: u64) {
        let mut stack = self.0;
        stack.write().dismiss(id);
    }

    fn show(self, kind: ToastKind, message: String, action: Option<ToastAction>) {
        let mut stack = self.0;
        let timeout = if action.is_some() {
            DISMISS_AFTER_WITH_ACTION
        } else {
            DISMISS_AFTER
        };
        let id = stack.write().push(kind, message, action);
        spawn(async move {
            sleep(timeout).await;
            stack.write().dismiss(id);
        });
    }
}

/// Provider component that owns the toast stack.
/// Wrap the router with this component to enable notifications.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let mut stack = use_signal(ToastStack::default);
    let toasts = use_context_provider(|| Toasts(stack));

    rsx! {
        {children}

        div {
            class: "toast-viewport",
            role: "region",
            aria_label: "Notificações",

            for toast in stack().toasts {
                div {
                    key: "{toast.id}",
                    class: match toast.kind {
                        ToastKind::Success => "toast toast-success",
                        ToastKind::Error => "toast toast-error",
                    },
                    role: "status",

                    span { class: "toast-message", "{toast.message}" }

                    if let Some(action) = toast.action {
                        {
                            let id = toast.id;
                            let on_select = action.on_select;
                            rsx! {
                                button {
                                    class: "toast-action",
                                    onclick: move |_| {
                                        on_select.call(());
                                        toasts.dismiss(id);
                                    },
                                    "{action.label}"
                                }
                            }
                        }
                    }

                    {
                        let id = toast.id;
                        rsx! {
                            button {
                                class: "toast-close",
                                aria_label: "Fechar",
                                onclick: move |_| stack.write().dismiss(id),
                                "×"
                            }
                        }
                    }
                }
            }
        }
    }
}

async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_monotonic_ids() {
        let mut stack = ToastStack::default();
        let first = stack.push(ToastKind::Success, "ok".to_string(), None);
        let second = stack.push(ToastKind::Error, "fail".to_string(), None);
        assert_eq!(first, 0);
        assert_eq!(second, 1);
        assert_eq!(stack.toasts.len(), 2);
    }

    #[test]
    fn test_dismiss_removes_only_target() {
        let mut stack = ToastStack::default();
        let first = stack.push(ToastKind::Success, "ok".to_string(), None);
        let second = stack.push(ToastKind::Error, "fail".to_string(), None);

        stack.dismiss(first);

        assert_eq!(stack.toasts.len(), 1);
        assert_eq!(stack.toasts[0].id, second);
        assert_eq!(stack.toasts[0].kind, ToastKind::Error);
    }

    #[test]
    fn test_dismiss_unknown_id_is_a_noop() {
        let mut stack = ToastStack::default();
        stack.push(ToastKind::Success, "ok".to_string(), None);
        stack.dismiss(42);
        assert_eq!(stack.toasts.len(), 1);
    }

    #[test]
    fn test_ids_are_not_reused_after_dismiss() {
        let mut stack = ToastStack::default();
        let first = stack.push(ToastKind::Success, "ok".to_string(), None);
        stack.dismiss(first);
        let second = stack.push(ToastKind::Success, "again".to_string(), None);
        assert_ne!(first, second);
    }
}
