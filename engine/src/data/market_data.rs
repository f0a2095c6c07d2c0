// In-memory catalog of market cards, keyed by card id
use shared::models::CardData;
use shared::providers::ProviderKey;
use std::collections::HashMap;

use super::demo_cards::demo_cards;
use crate::error::{ChartError, Result};
use crate::search::{filter_by_query, FieldGetter, SearchOptions};

pub struct MarketCatalog {
    cards: Vec<CardData>,
    index: HashMap<String, usize>,
}

impl MarketCatalog {
    pub fn new() -> Self {
        MarketCatalog {
            cards: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn with_demo_cards() -> Self {
        let mut catalog = Self::new();
        for card in demo_cards() {
            catalog.insert(card);
        }
        catalog
    }

    /// Inserts or replaces by id. A replaced card keeps its position.
    pub fn insert(&mut self, card: CardData) {
        match self.index.get(&card.id) {
            Some(&pos) => self.cards[pos] = card,
            None => {
                self.index.insert(card.id.clone(), self.cards.len());
                self.cards.push(card);
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&CardData> {
        self.index.get(id).map(|&pos| &self.cards[pos])
    }

    pub fn require(&self, id: &str) -> Result<&CardData> {
        self.get(id).ok_or_else(|| ChartError::CardNotFound(id.to_string()))
    }

    pub fn all(&self) -> &[CardData] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn by_provider(&self, provider: ProviderKey) -> Vec<&CardData> {
        self.cards.iter().filter(|c| c.provider == provider).collect()
    }

    /// Searches title, description and category.
    pub fn search(&self, query: &str) -> Vec<&CardData> {
        filter_by_query(&self.cards, query, &card_search_options())
    }
}

impl Default for MarketCatalog {
    fn default() -> Self {
        Self::new()
    }
}

pub fn card_search_options() -> SearchOptions<CardData> {
    let fields: Vec<FieldGetter<CardData>> = vec![
        Box::new(|c: &CardData| Some(c.title.clone())),
        Box::new(|c: &CardData| c.description.clone()),
        Box::new(|c: &CardData| c.category.clone()),
    ];
    SearchOptions::new(fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_catalog_lookup() {
        let catalog = MarketCatalog::with_demo_cards();
        assert_eq!(catalog.len(), 8);
        assert_eq!(catalog.get("2").unwrap().title, "Bitcoin tops $100k in 2025");
        assert!(catalog.get("missing").is_none());
        assert!(matches!(catalog.require("missing"), Err(ChartError::CardNotFound(id)) if id == "missing"));
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut catalog = MarketCatalog::with_demo_cards();
        let mut card = catalog.get("3").unwrap().clone();
        card.yes_percentage = 90.0;
        catalog.insert(card);
        assert_eq!(catalog.len(), 8);
        assert_eq!(catalog.all()[2].yes_percentage, 90.0);
    }

    #[test]
    fn test_by_provider() {
        let catalog = MarketCatalog::with_demo_cards();
        let ids: Vec<&str> = catalog.by_provider(ProviderKey::Kalshi).iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "4"]);
        assert!(MarketCatalog::new().by_provider(ProviderKey::Kalshi).is_empty());
    }

    #[test]
    fn test_search_cards() {
        let catalog = MarketCatalog::with_demo_cards();
        let hits = catalog.search("crypto");
        let ids: Vec<&str> = hits.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "6"]);
        assert_eq!(catalog.search("").len(), 8);
        // Matches description text only.
        assert_eq!(catalog.search("six-figure").len(), 1);
    }
}
