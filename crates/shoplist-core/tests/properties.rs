use chrono::{Datelike, NaiveDate, NaiveDateTime};
use proptest::prelude::*;
use proptest::test_runner::Config;
use shoplist_core::{Item, JsonFileStore, MemoryStore, ShoppingListService, Store};
use std::collections::HashSet;
use std::sync::Arc;

fn date() -> impl Strategy<Value = NaiveDateTime> {
    (0_i64..3_650, 0_u32..86_400, 0_u32..1_000_000).prop_map(|(days, secs, micros)| {
        NaiveDate::from_ymd_opt(2020, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
            + chrono::Duration::days(days)
            + chrono::Duration::seconds(secs as i64)
            + chrono::Duration::microseconds(micros as i64)
    })
}

fn item() -> impl Strategy<Value = Item> {
    let name = "\\PC{1,12}";
    // Amounts in whole cents
    let value = (0_u32..10_000_000).prop_map(|cents| cents as f64 / 100.0);
    prop_oneof![
        name.prop_map(Item::new),
        (name, value, date()).prop_map(|(n, v, d)| Item::purchased(n, v, d)),
    ]
}

fn collection() -> impl Strategy<Value = Vec<Item>> {
    prop::collection::vec(item(), 0..24).prop_map(|items| {
        let mut pending = HashSet::new();
        items
            .into_iter()
            .filter(|i| i.purchased || pending.insert(i.name.clone()))
            .collect()
    })
}

proptest! {
    #![proptest_config(Config::with_cases(64))]

    #[test]
    fn file_store_round_trip(items in collection()) {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("list.json"));
        store.save(&items).unwrap();
        prop_assert_eq!(store.load().unwrap(), items);
    }

    #[test]
    fn monthly_total_sums_matching_purchases(items in collection(), year in 2020_i32..2031, month in 1_u32..=12) {
        let expected = items
            .iter()
            .filter(|i| i.purchased)
            .filter(|i| i.date.map_or(false, |d| d.year() == year && d.month() == month))
            .fold(0.0, |total, i| total + i.value);

        let service = ShoppingListService::open(Arc::new(MemoryStore::with_items(items))).unwrap();
        prop_assert_eq!(service.monthly_total(year, month), expected);
    }

    #[test]
    fn add_twice_without_mark(items in collection(), name in "\\PC{1,12}") {
        let was_pending = items.iter().any(|i| i.is_pending(&name));
        let service = ShoppingListService::open(Arc::new(MemoryStore::with_items(items))).unwrap();

        prop_assert_eq!(service.add(&name).unwrap(), !was_pending);
        prop_assert!(!service.add(&name).unwrap());
        prop_assert_eq!(service.list().iter().filter(|i| i.is_pending(&name)).count(), 1);
    }
}
