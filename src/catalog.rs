//! Deterministic generation of the sample-key catalog
//!
//! The catalog is fixed: 500 flat keys (100 per data type), 500 keys spread
//! over five two-level categories, and 12 curated `sample:demo:` keys. Values
//! that look random (hash quantities, leaderboard scores) come from a
//! fixed-seed RNG so that two runs of the seeder produce identical data.

use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::SeedResult;

/// Seed for the value RNG. Changing it changes every generated quantity and
/// score, so keep it stable across releases.
const CATALOG_SEED: u64 = 6379;

/// Keys generated per data type in the flat tier
const FLAT_KEYS_PER_TYPE: usize = 100;

/// Keys generated per category in the hierarchy tier
const KEYS_PER_CATEGORY: usize = 100;

/// Two-level categories under the sample prefix
const CATEGORIES: [&str; 5] = ["users", "products", "orders", "sessions", "analytics"];

/// Filler fields added to the oversized demo hash
const FILLER_FIELD_COUNT: usize = 5000;

/// Value payload for one sample key, one variant per Redis data type
#[derive(Debug, Clone, PartialEq)]
pub enum SampleValue {
    String(String),
    Hash(Vec<(String, String)>),
    List(Vec<String>),
    Set(Vec<String>),
    SortedSet(Vec<(f64, String)>),
}

impl SampleValue {
    /// Redis type name, as shown in the final summary
    pub fn type_name(&self) -> &'static str {
        match self {
            SampleValue::String(_) => "String",
            SampleValue::Hash(_) => "Hash",
            SampleValue::List(_) => "List",
            SampleValue::Set(_) => "Set",
            SampleValue::SortedSet(_) => "ZSet",
        }
    }
}

/// One key to be written, identified by its full colon-delimited name
#[derive(Debug, Clone, PartialEq)]
pub struct SampleKey {
    pub name: String,
    pub value: SampleValue,
}

impl SampleKey {
    fn string<N: Into<String>, V: Into<String>>(name: N, value: V) -> Self {
        Self {
            name: name.into(),
            value: SampleValue::String(value.into()),
        }
    }
}

/// A labeled group of keys, written (and narrated) as one unit
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogSection {
    pub label: &'static str,
    pub keys: Vec<SampleKey>,
}

/// The full fixed catalog of sample keys
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    pub sections: Vec<CatalogSection>,
}

impl Catalog {
    /// Build the complete catalog. Deterministic: two calls return equal
    /// catalogs.
    pub fn build() -> SeedResult<Self> {
        let mut rng = StdRng::seed_from_u64(CATALOG_SEED);

        Ok(Self {
            sections: vec![
                string_section(),
                hash_section(&mut rng),
                list_section(),
                set_section(),
                zset_section(&mut rng),
                category_section(),
                demo_section()?,
            ],
        })
    }

    pub fn total_keys(&self) -> usize {
        self.sections.iter().map(|s| s.keys.len()).sum()
    }
}

fn string_section() -> CatalogSection {
    CatalogSection {
        label: "String keys",
        keys: (1..=FLAT_KEYS_PER_TYPE)
            .map(|i| SampleKey::string(format!("sample:string_{}", i), format!("String value {}", i)))
            .collect(),
    }
}

fn hash_section(rng: &mut StdRng) -> CatalogSection {
    CatalogSection {
        label: "Hash keys",
        keys: (1..=FLAT_KEYS_PER_TYPE)
            .map(|i| SampleKey {
                name: format!("sample:hash_{}", i),
                value: SampleValue::Hash(vec![
                    ("id".to_string(), i.to_string()),
                    ("name".to_string(), format!("Hash {}", i)),
                    ("value".to_string(), rng.gen_range(10..=1000).to_string()),
                ]),
            })
            .collect(),
    }
}

fn list_section() -> CatalogSection {
    CatalogSection {
        label: "List keys",
        keys: (1..=FLAT_KEYS_PER_TYPE)
            .map(|i| SampleKey {
                name: format!("sample:list_{}", i),
                value: SampleValue::List(vec![
                    "item1".to_string(),
                    "item2".to_string(),
                    "item3".to_string(),
                ]),
            })
            .collect(),
    }
}

fn set_section() -> CatalogSection {
    CatalogSection {
        label: "Set keys",
        keys: (1..=FLAT_KEYS_PER_TYPE)
            .map(|i| SampleKey {
                name: format!("sample:set_{}", i),
                value: SampleValue::Set(vec![
                    "member1".to_string(),
                    "member2".to_string(),
                    "member3".to_string(),
                ]),
            })
            .collect(),
    }
}

fn zset_section(rng: &mut StdRng) -> CatalogSection {
    CatalogSection {
        label: "ZSet keys",
        keys: (1..=FLAT_KEYS_PER_TYPE)
            .map(|i| SampleKey {
                name: format!("sample:zset_{}", i),
                value: SampleValue::SortedSet(
                    (1..=3)
                        .map(|p| (rng.gen_range(1..=1000) as f64, format!("player{}", p)))
                        .collect(),
                ),
            })
            .collect(),
    }
}

fn category_section() -> CatalogSection {
    let mut keys = Vec::with_capacity(CATEGORIES.len() * KEYS_PER_CATEGORY);
    for category in CATEGORIES {
        for i in 1..=KEYS_PER_CATEGORY {
            keys.push(SampleKey::string(
                format!("sample:{}:item_{}", category, i),
                format!("{} value {}", category, i),
            ));
        }
    }
    CatalogSection {
        label: "2-level directories",
        keys,
    }
}

fn demo_section() -> SeedResult<CatalogSection> {
    let keys = vec![
        SampleKey::string("sample:demo:user_email", "john.doe@example.com"),
        SampleKey::string("sample:demo:api_token", "sk_live_abc123xyz789"),
        SampleKey::string("sample:demo:page_views", "45231"),
        SampleKey::string("sample:demo:last_login", "2024-01-15T09:42:00Z"),
        SampleKey {
            name: "sample:demo:user_profile".to_string(),
            value: SampleValue::Hash(vec![
                ("user_id".to_string(), "12345".to_string()),
                ("username".to_string(), "johndoe".to_string()),
                ("email".to_string(), "john@example.com".to_string()),
                ("created_at".to_string(), "2024-01-01".to_string()),
            ]),
        },
        SampleKey {
            name: "sample:demo:product_info".to_string(),
            value: SampleValue::Hash(product_info_fields()?),
        },
        SampleKey {
            name: "sample:demo:shopping_cart".to_string(),
            value: SampleValue::List(vec![
                "item-123".to_string(),
                "item-456".to_string(),
                "item-789".to_string(),
            ]),
        },
        SampleKey {
            name: "sample:demo:recent_searches".to_string(),
            value: SampleValue::List(vec![
                "redis".to_string(),
                "database".to_string(),
                "cache".to_string(),
            ]),
        },
        SampleKey {
            name: "sample:demo:user_permissions".to_string(),
            value: SampleValue::Set(vec![
                "read".to_string(),
                "write".to_string(),
                "delete".to_string(),
                "admin".to_string(),
            ]),
        },
        SampleKey {
            name: "sample:demo:product_tags".to_string(),
            value: SampleValue::Set(vec![
                "electronics".to_string(),
                "laptop".to_string(),
                "business".to_string(),
                "premium".to_string(),
            ]),
        },
        SampleKey {
            name: "sample:demo:top_players".to_string(),
            value: SampleValue::SortedSet(vec![
                (9500.0, "Alice".to_string()),
                (8700.0, "Bob".to_string()),
                (8200.0, "Charlie".to_string()),
                (7900.0, "Diana".to_string()),
            ]),
        },
        SampleKey {
            name: "sample:demo:popular_posts".to_string(),
            value: SampleValue::SortedSet(vec![
                (1520.0, "post-101".to_string()),
                (1340.0, "post-205".to_string()),
                (980.0, "post-187".to_string()),
            ]),
        },
    ];

    Ok(CatalogSection {
        label: "demo directory examples",
        keys,
    })
}

/// Fields of the oversized `product_info` hash: four curated product fields
/// (one of them a pretty-printed JSON document) followed by 5000 filler
/// fields, enough to stress hash pagination in a GUI.
fn product_info_fields() -> SeedResult<Vec<(String, String)>> {
    let mut fields = Vec::with_capacity(4 + FILLER_FIELD_COUNT);
    fields.push(("product_id".to_string(), "PROD-001".to_string()));
    fields.push(("name".to_string(), "Laptop ThinkPad X1".to_string()));
    fields.push(("price".to_string(), "1299.99".to_string()));
    fields.push(("stock".to_string(), serde_json::to_string_pretty(&stock_document())?));

    for i in 1..=FILLER_FIELD_COUNT {
        fields.push((format!("field_{}", i), format!("value_{}", i)));
    }

    Ok(fields)
}

#[derive(Debug, Serialize)]
struct StockDocument {
    total_quantity: u32,
    available: u32,
    reserved: u32,
    warehouse: WarehouseBreakdown,
    history: Vec<StockEvent>,
    suppliers: BTreeMap<String, Supplier>,
    locations: BTreeMap<String, StorageLocation>,
    categories: BTreeMap<String, CategoryStock>,
    alerts: Vec<StockAlert>,
}

#[derive(Debug, Serialize)]
struct WarehouseBreakdown {
    main: u32,
    secondary: u32,
    retail: u32,
}

#[derive(Debug, Serialize)]
struct StockEvent {
    date: String,
    quantity: i64,
    action: &'static str,
}

#[derive(Debug, Serialize)]
struct Supplier {
    name: String,
    contact: String,
    quantity: u32,
    price: f64,
    delivery_time: String,
    rating: f64,
}

#[derive(Debug, Serialize)]
struct StorageLocation {
    warehouse_id: String,
    address: String,
    quantity: u32,
    capacity: u32,
    utilization: f64,
}

#[derive(Debug, Serialize)]
struct CategoryStock {
    name: String,
    quantity: u32,
    last_updated: String,
    trend: &'static str,
}

#[derive(Debug, Serialize)]
struct StockAlert {
    id: u32,
    #[serde(rename = "type")]
    kind: &'static str,
    message: String,
    priority: u32,
    timestamp: String,
}

fn stock_document() -> StockDocument {
    StockDocument {
        total_quantity: 5000,
        available: 4850,
        reserved: 150,
        warehouse: WarehouseBreakdown {
            main: 3000,
            secondary: 1500,
            retail: 500,
        },
        history: (1..=10)
            .map(|i| StockEvent {
                date: format!("2024-01-{:02}", i),
                quantity: 5000 - i * 10,
                action: if i % 2 == 0 { "restock" } else { "sale" },
            })
            .collect(),
        suppliers: (1..=5u32)
            .map(|i| {
                (
                    format!("supplier_{}", i),
                    Supplier {
                        name: format!("Supplier Company {}", i),
                        contact: format!("contact{}@example.com", i),
                        quantity: i * 100,
                        price: round2(1299.99 - f64::from(i) * 10.0),
                        delivery_time: format!("{} days", i * 2),
                        rating: round2(4.5 - f64::from(i) * 0.1),
                    },
                )
            })
            .collect(),
        locations: (1..=5u32)
            .map(|i| {
                (
                    format!("location_{}", i),
                    StorageLocation {
                        warehouse_id: format!("WH-{:03}", i),
                        address: format!("{} Main St, City {}", i * 100, i),
                        quantity: i * 200,
                        capacity: i * 300,
                        utilization: round2(f64::from(i * 200) / f64::from(i * 300) * 100.0),
                    },
                )
            })
            .collect(),
        categories: (1..=5u32)
            .map(|i| {
                (
                    format!("category_{}", i),
                    CategoryStock {
                        name: format!("Category {}", i),
                        quantity: i * 150,
                        last_updated: format!("2024-01-{:02}", i),
                        trend: if i % 2 == 0 { "up" } else { "down" },
                    },
                )
            })
            .collect(),
        alerts: (1..=5u32)
            .map(|i| StockAlert {
                id: i,
                kind: if i % 3 == 0 { "low_stock" } else { "reorder" },
                message: format!("Alert message {}", i),
                priority: i % 5,
                timestamp: format!("2024-01-12T{:02}:00:00Z", i),
            })
            .collect(),
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
