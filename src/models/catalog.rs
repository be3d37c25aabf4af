use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub id: u64,
    pub name: String,
    pub category: String,
    pub price_cents: u32,
    pub created_at: DateTime<Utc>,
}

/// Fixed, ordered list of items backing the demo routes.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    pub fn new(items: Vec<CatalogItem>) -> Self {
        Self { items }
    }

    /// The catalog the server starts with.
    pub fn seeded() -> Self {
        const SEED: [(&str, &str, u32); 12] = [
            ("Wooden block set", "toys", 2_499),
            ("Picture book: Seasons", "books", 1_299),
            ("Crayon pack (24)", "art", 599),
            ("Finger paint kit", "art", 1_499),
            ("Story cards", "books", 899),
            ("Shape sorter", "toys", 1_799),
            ("Music shaker pair", "music", 799),
            ("Mini xylophone", "music", 2_199),
            ("Sticker album", "art", 499),
            ("Counting beads", "toys", 1_099),
            ("Alphabet puzzle", "toys", 1_599),
            ("Bedtime stories", "books", 1_899),
        ];
        const FIRST_DAY: i64 = 1_704_067_200;

        let items = SEED
            .iter()
            .zip(0i64..)
            .map(|(&(name, category, price_cents), offset)| CatalogItem {
                id: (offset + 1) as u64,
                name: name.to_string(),
                category: category.to_string(),
                price_cents,
                created_at: DateTime::from_timestamp(FIRST_DAY + offset * 86_400, 0)
                    .unwrap_or_default(),
            })
            .collect();

        Self::new(items)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: u64) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Items starting at `offset`, at most `limit` of them, in catalog order.
    pub fn slice(&self, offset: usize, limit: usize) -> Vec<CatalogItem> {
        self.items.iter().skip(offset).take(limit).cloned().collect()
    }

    pub fn count_by_category(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for item in &self.items {
            *counts.entry(item.category.clone()).or_insert(0) += 1;
        }
        counts
    }
}
