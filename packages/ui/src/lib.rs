//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub mod components;

mod toast;
pub use toast::{use_toast, Toast, ToastAction, ToastKind, ToastProvider, ToastStack, Toasts};

pub const UI_CSS: Asset = asset!("/assets/ui.css");
