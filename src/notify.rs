//! Transient user notifications ("toasts").

use std::sync::Mutex;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub title: String,
    pub description: Option<String>,
}

impl Toast {
    pub fn success(title: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            title: title.into(),
            description: None,
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            title: title.into(),
            description: Some(description.into()),
        }
    }
}

pub trait Notifier: Send + Sync {
    fn notify(&self, toast: Toast);

    fn success(&self, title: &str) {
        self.notify(Toast::success(title));
    }

    fn error(&self, title: &str, description: &str) {
        self.notify(Toast::error(title, description));
    }
}

/// Writes toasts to the terminal and the log.
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, toast: Toast) {
        match toast.kind {
            ToastKind::Success => {
                info!(title = %toast.title, "toast");
                println!("✔ {}", toast.title);
            }
            ToastKind::Error => {
                let description = toast.description.unwrap_or_default();
                warn!(title = %toast.title, description = %description, "toast");
                if description.is_empty() {
                    eprintln!("✘ {}", toast.title);
                } else {
                    eprintln!("✘ {}: {}", toast.title, description);
                }
            }
        }
    }
}

/// Keeps every toast in memory, in order.
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    toasts: Mutex<Vec<Toast>>,
}

impl MemoryNotifier {
    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.lock().map(|t| t.clone()).unwrap_or_default()
    }

    pub fn last(&self) -> Option<Toast> {
        self.toasts().pop()
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&self, toast: Toast) {
        if let Ok(mut toasts) = self.toasts.lock() {
            toasts.push(toast);
        }
    }
}
