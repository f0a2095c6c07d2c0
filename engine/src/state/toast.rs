use chrono::{DateTime, Duration, Utc};
use tokio::sync::watch;
use uuid::Uuid;

pub const MAX_TOASTS: usize = 5;
pub const PROCESSING_TOAST_MS: i64 = 3000;
pub const DEFAULT_TOAST_MS: i64 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Processing,
    Success,
    Error,
}

impl ToastKind {
    pub fn lifetime(self) -> Duration {
        match self {
            ToastKind::Processing => Duration::milliseconds(PROCESSING_TOAST_MS),
            ToastKind::Success | ToastKind::Error => Duration::milliseconds(DEFAULT_TOAST_MS),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub kind: ToastKind,
    pub title: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Toast {
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.created_at + self.kind.lifetime()
    }
}

/// Notification queue, newest first, capped at [`MAX_TOASTS`].
pub struct ToastStore {
    tx: watch::Sender<Vec<Toast>>,
}

impl ToastStore {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(Vec::new());
        Self { tx }
    }

    pub fn subscribe(&self) -> watch::Receiver<Vec<Toast>> {
        self.tx.subscribe()
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.tx.borrow().clone()
    }

    pub fn push(&self, kind: ToastKind, title: &str, description: Option<&str>) -> Uuid {
        self.push_at(kind, title, description, Utc::now())
    }

    pub fn push_at(&self, kind: ToastKind, title: &str, description: Option<&str>, now: DateTime<Utc>) -> Uuid {
        let toast = Toast {
            id: Uuid::new_v4(),
            kind,
            title: title.to_string(),
            description: description.map(str::to_string),
            created_at: now,
        };
        let id = toast.id;
        self.tx.send_modify(|toasts| {
            toasts.insert(0, toast);
            toasts.truncate(MAX_TOASTS);
        });
        id
    }

    pub fn remove(&self, id: Uuid) -> bool {
        self.tx.send_if_modified(|toasts| {
            let before = toasts.len();
            toasts.retain(|t| t.id != id);
            toasts.len() != before
        })
    }

    /// Drops toasts whose lifetime has elapsed at `now`. Returns how many went.
    pub fn prune_expired(&self, now: DateTime<Utc>) -> usize {
        let mut removed = 0;
        self.tx.send_if_modified(|toasts| {
            let before = toasts.len();
            toasts.retain(|t| t.expires_at() > now);
            removed = before - toasts.len();
            removed > 0
        });
        removed
    }

    pub fn reset(&self) {
        self.tx.send_replace(Vec::new());
    }
}

impl Default for ToastStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 9, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_newest_first_and_capped() {
        let store = ToastStore::new();
        let ids: Vec<Uuid> = (0..7)
            .map(|i| store.push_at(ToastKind::Success, &format!("Order {}", i), None, t0()))
            .collect();
        let toasts = store.toasts();
        assert_eq!(toasts.len(), MAX_TOASTS);
        assert_eq!(toasts[0].id, ids[6]);
        assert_eq!(toasts[0].title, "Order 6");
        assert_eq!(toasts[4].id, ids[2]);
    }

    #[test]
    fn test_remove() {
        let store = ToastStore::new();
        let id = store.push(ToastKind::Error, "Order failed", Some("Insufficient balance"));
        assert_eq!(store.toasts()[0].description.as_deref(), Some("Insufficient balance"));
        assert!(store.remove(id));
        assert!(!store.remove(id));
        assert!(store.toasts().is_empty());
    }

    #[test]
    fn test_prune_expired_by_kind() {
        let store = ToastStore::new();
        store.push_at(ToastKind::Processing, "Submitting", None, t0());
        store.push_at(ToastKind::Success, "Filled", None, t0());

        assert_eq!(store.prune_expired(t0() + Duration::milliseconds(2999)), 0);
        assert_eq!(store.prune_expired(t0() + Duration::milliseconds(3000)), 1);
        assert_eq!(store.toasts()[0].kind, ToastKind::Success);
        assert_eq!(store.prune_expired(t0() + Duration::milliseconds(5000)), 1);
        assert!(store.toasts().is_empty());
    }
}
