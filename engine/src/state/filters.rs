use shared::models::CardData;
use shared::providers::ProviderKey;
use std::collections::BTreeSet;
use tokio::sync::watch;

fn all_providers() -> BTreeSet<ProviderKey> {
    ProviderKey::ALL.iter().copied().collect()
}

/// Selected providers. Every provider is selected until the user narrows it.
pub struct ProviderFilterStore {
    tx: watch::Sender<BTreeSet<ProviderKey>>,
}

impl ProviderFilterStore {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(all_providers());
        Self { tx }
    }

    pub fn subscribe(&self) -> watch::Receiver<BTreeSet<ProviderKey>> {
        self.tx.subscribe()
    }

    pub fn selected(&self) -> Vec<ProviderKey> {
        self.tx.borrow().iter().copied().collect()
    }

    pub fn is_selected(&self, provider: ProviderKey) -> bool {
        self.tx.borrow().contains(&provider)
    }

    pub fn add(&self, provider: ProviderKey) {
        self.tx.send_if_modified(|set| set.insert(provider));
    }

    pub fn remove(&self, provider: ProviderKey) {
        self.tx.send_if_modified(|set| set.remove(&provider));
    }

    pub fn clear(&self) {
        self.tx.send_if_modified(|set| {
            let changed = !set.is_empty();
            set.clear();
            changed
        });
    }

    pub fn set<I: IntoIterator<Item = ProviderKey>>(&self, providers: I) {
        self.tx.send_replace(providers.into_iter().collect());
    }

    pub fn reset(&self) {
        self.tx.send_replace(all_providers());
    }

    pub fn apply<'a>(&self, cards: &'a [CardData]) -> Vec<&'a CardData> {
        let selected = self.tx.borrow();
        cards.iter().filter(|c| selected.contains(&c.provider)).collect()
    }
}

impl Default for ProviderFilterStore {
    fn default() -> Self {
        Self::new()
    }
}
