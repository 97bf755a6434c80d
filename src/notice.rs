use std::time::Duration;

/// How long a toast stays on screen before it dismisses itself.
pub const TOAST_TTL: Duration = Duration::from_secs(4);

/// Older toasts are dropped once more than this many are showing.
pub const MAX_VISIBLE: usize = 3;

/// The user-facing outcomes of a contact submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Sent,
    Failed,
    NotConfigured,
}

impl Notice {
    pub fn text(self) -> &'static str {
        match self {
            Self::Sent => "Message sent successfully! I'll get back to you soon.",
            Self::Failed => "Could not send your message. Please try again.",
            Self::NotConfigured => "The contact service is not configured.",
        }
    }

    pub fn is_error(self) -> bool {
        !matches!(self, Self::Sent)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
}

#[derive(Debug, Clone, Default)]
pub struct ToastQueue {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    /// Queues a notice and returns the id needed to dismiss it.
    pub fn push(&mut self, notice: Notice) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast { id, notice });
        if self.toasts.len() > MAX_VISIBLE {
            let overflow = self.toasts.len() - MAX_VISIBLE;
            self.toasts.drain(..overflow);
        }
        id
    }

    /// Returns false when the toast was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
