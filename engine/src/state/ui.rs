use shared::models::CardData;
use std::time::Duration;
use tokio::sync::watch;

/// Length of the right sidebar slide-out.
pub const RIGHT_SIDEBAR_CLOSE_DELAY: Duration = Duration::from_millis(220);
pub const WATCHLIST_CLOSE_DELAY: Duration = Duration::from_millis(200);

/// Visibility of a sliding panel. `Closing` lasts for the exit animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelState {
    #[default]
    Closed,
    Open,
    Closing,
}

impl PanelState {
    /// Still rendered, either fully open or animating out.
    pub fn is_visible(self) -> bool {
        self != PanelState::Closed
    }

    fn begin_close(&mut self) -> bool {
        if *self != PanelState::Open {
            return false;
        }
        *self = PanelState::Closing;
        true
    }

    fn finish_close(&mut self) -> bool {
        if *self != PanelState::Closing {
            return false;
        }
        *self = PanelState::Closed;
        true
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UiState {
    pub right_sidebar: PanelState,
    pub selected_card: Option<CardData>,
    pub watchlist: PanelState,
}

pub struct UiStore {
    tx: watch::Sender<UiState>,
}

impl UiStore {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(UiState::default());
        Self { tx }
    }

    pub fn subscribe(&self) -> watch::Receiver<UiState> {
        self.tx.subscribe()
    }

    pub fn snapshot(&self) -> UiState {
        self.tx.borrow().clone()
    }

    pub fn open_right_sidebar(&self, card: CardData) {
        tracing::debug!(card_id = %card.id, "Opening right sidebar");
        self.tx.send_modify(|s| {
            s.right_sidebar = PanelState::Open;
            s.selected_card = Some(card);
        });
    }

    /// Starts the exit animation. No-op unless the sidebar is open.
    pub fn close_right_sidebar(&self) -> bool {
        self.tx.send_if_modified(|s| s.right_sidebar.begin_close())
    }

    /// Completes a pending close. A sidebar reopened mid-animation stays open.
    pub fn finish_close_right_sidebar(&self) -> bool {
        self.tx.send_if_modified(|s| {
            if !s.right_sidebar.finish_close() {
                return false;
            }
            s.selected_card = None;
            true
        })
    }

    pub async fn close_right_sidebar_after_animation(&self) {
        if self.close_right_sidebar() {
            tokio::time::sleep(RIGHT_SIDEBAR_CLOSE_DELAY).await;
            self.finish_close_right_sidebar();
        }
    }

    pub fn open_watchlist(&self) {
        self.tx.send_if_modified(|s| {
            let changed = s.watchlist != PanelState::Open;
            s.watchlist = PanelState::Open;
            changed
        });
    }

    pub fn close_watchlist(&self) -> bool {
        self.tx.send_if_modified(|s| s.watchlist.begin_close())
    }

    pub fn finish_close_watchlist(&self) -> bool {
        self.tx.send_if_modified(|s| s.watchlist.finish_close())
    }

    pub async fn close_watchlist_after_animation(&self) {
        if self.close_watchlist() {
            tokio::time::sleep(WATCHLIST_CLOSE_DELAY).await;
            self.finish_close_watchlist();
        }
    }

    pub fn reset(&self) {
        self.tx.send_replace(UiState::default());
    }
}

impl Default for UiStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::demo_cards::demo_cards;

    #[test]
    fn test_right_sidebar_lifecycle() {
        let store = UiStore::new();
        assert!(!store.close_right_sidebar());

        store.open_right_sidebar(demo_cards()[1].clone());
        let s = store.snapshot();
        assert_eq!(s.right_sidebar, PanelState::Open);
        assert_eq!(s.selected_card.as_ref().map(|c| c.id.as_str()), Some("2"));

        assert!(store.close_right_sidebar());
        assert!(!store.close_right_sidebar());
        assert_eq!(store.snapshot().right_sidebar, PanelState::Closing);
        assert!(store.snapshot().right_sidebar.is_visible());

        assert!(store.finish_close_right_sidebar());
        let s = store.snapshot();
        assert_eq!(s.right_sidebar, PanelState::Closed);
        assert!(s.selected_card.is_none());
    }

    #[test]
    fn test_reopen_during_close_keeps_sidebar_open() {
        let store = UiStore::new();
        store.open_right_sidebar(demo_cards()[0].clone());
        store.close_right_sidebar();
        store.open_right_sidebar(demo_cards()[3].clone());
        assert!(!store.finish_close_right_sidebar());
        let s = store.snapshot();
        assert_eq!(s.right_sidebar, PanelState::Open);
        assert_eq!(s.selected_card.map(|c| c.id), Some("4".to_string()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_close_after_animation() {
        let store = UiStore::new();
        store.open_right_sidebar(demo_cards()[0].clone());
        store.open_watchlist();

        let start = tokio::time::Instant::now();
        store.close_right_sidebar_after_animation().await;
        assert!(start.elapsed() >= RIGHT_SIDEBAR_CLOSE_DELAY);
        assert_eq!(store.snapshot().right_sidebar, PanelState::Closed);

        store.close_watchlist_after_animation().await;
        assert_eq!(store.snapshot().watchlist, PanelState::Closed);

        // Nothing to close: returns without sleeping.
        let start = tokio::time::Instant::now();
        store.close_watchlist_after_animation().await;
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[test]
    fn test_reset() {
        let store = UiStore::new();
        store.open_watchlist();
        store.open_right_sidebar(demo_cards()[0].clone());
        store.reset();
        assert_eq!(store.snapshot(), UiState::default());
    }
}
