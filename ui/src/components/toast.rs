use std::time::Duration;

use dioxus::prelude::*;

const DISMISS_AFTER: Duration = Duration::from_secs(4);

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastStack {
    entries: Vec<Toast>,
    next_id: u64,
}

impl ToastStack {
    fn push(&mut self, kind: ToastKind, message: String) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.entries.push(Toast { id, kind, message });
        id
    }

    fn dismiss(&mut self, id: u64) {
        self.entries.retain(|toast| toast.id != id);
    }

    pub fn entries(&self) -> &[Toast] {
        &self.entries
    }
}

/// Get the toast stack for the application.
pub fn use_toasts() -> Signal<ToastStack> {
    use_context::<Signal<ToastStack>>()
}

pub fn show_success(toasts: &mut Signal<ToastStack>, message: impl Into<String>) {
    show(toasts, ToastKind::Success, message.into());
}

pub fn show_error(toasts: &mut Signal<ToastStack>, message: impl Into<String>) {
    show(toasts, ToastKind::Error, message.into());
}

fn show(toasts: &mut Signal<ToastStack>, kind: ToastKind, message: String) {
    let id = toasts.write().push(kind, message);
    let mut toasts = *toasts;
    spawn(async move {
        #[cfg(target_arch = "wasm32")]
        gloo_timers::future::sleep(DISMISS_AFTER).await;
        #[cfg(not(target_arch = "wasm32"))]
        tokio::time::sleep(DISMISS_AFTER).await;

        toasts.write().dismiss(id);
    });
}

/// Provider that owns the toast stack and renders it above the app.
/// Wrap the router with this component.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let toasts = use_signal(ToastStack::default);
    use_context_provider(|| toasts);

    let entries = toasts().entries().to_vec();

    rsx! {
        {children}
        div {
            class: "toast-stack",
            for toast in entries {
                div {
                    key: "{toast.id}",
                    class: "{toast.kind.class()}",
                    "{toast.message}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_increasing_ids() {
        let mut stack = ToastStack::default();
        let a = stack.push(ToastKind::Success, "saved".to_string());
        let b = stack.push(ToastKind::Error, "failed".to_string());
        assert!(b > a);
        assert_eq!(stack.entries().len(), 2);
    }

    #[test]
    fn test_dismiss_removes_only_matching_toast() {
        let mut stack = ToastStack::default();
        let a = stack.push(ToastKind::Success, "first".to_string());
        let b = stack.push(ToastKind::Success, "second".to_string());
        stack.dismiss(a);
        assert_eq!(stack.entries().len(), 1);
        assert_eq!(stack.entries()[0].id, b);
    }
}
