use shared::models::CardData;
use tokio::sync::watch;

/// Bookmarked cards in insertion order.
pub struct WatchlistStore {
    tx: watch::Sender<Vec<CardData>>,
}

impl WatchlistStore {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(Vec::new());
        Self { tx }
    }

    pub fn subscribe(&self) -> watch::Receiver<Vec<CardData>> {
        self.tx.subscribe()
    }

    pub fn items(&self) -> Vec<CardData> {
        self.tx.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.tx.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.tx.borrow().is_empty()
    }

    pub fn is_bookmarked(&self, id: &str) -> bool {
        self.tx.borrow().iter().any(|c| c.id == id)
    }

    /// Returns false if the card was already bookmarked.
    pub fn add(&self, card: CardData) -> bool {
        self.tx.send_if_modified(|items| {
            if items.iter().any(|c| c.id == card.id) {
                return false;
            }
            items.push(card);
            true
        })
    }

    pub fn remove(&self, id: &str) -> bool {
        self.tx.send_if_modified(|items| {
            let before = items.len();
            items.retain(|c| c.id != id);
            items.len() != before
        })
    }

    /// Returns the new bookmark state of the card.
    pub fn toggle(&self, card: CardData) -> bool {
        if self.remove(&card.id) {
            false
        } else {
            self.add(card)
        }
    }

    pub fn reset(&self) {
        self.tx.send_replace(Vec::new());
    }
}

impl Default for WatchlistStore {
    fn default() -> Self {
        Self::new()
    }
}
