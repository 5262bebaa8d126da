//! Plain-text rendering of server results

use shoplist_core::Item;

/// One line per item: `[x]` with amount and date once bought, `[ ]` before
pub fn format_items(items: &[Item]) -> String {
    if items.is_empty() {
        return "(empty)\n".to_string();
    }

    let width = items.iter().map(|i| i.name.chars().count()).max().unwrap_or(0);
    let mut out = String::new();
    for item in items {
        let pad = " ".repeat(width - item.name.chars().count());
        match item.date {
            Some(date) if item.purchased => out.push_str(&format!(
                "[x] {}{}  {:>10.2}  {}\n",
                item.name,
                pad,
                item.value,
                date.format("%Y-%m-%d %H:%M")
            )),
            _ => out.push_str(&format!("[ ] {}\n", item.name)),
        }
    }
    out
}

pub fn format_total(total: f64) -> String {
    format!("{:.2}", total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_format_items() {
        let at = NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(10, 15, 0)
            .unwrap();
        let items = vec![Item::new("bread"), Item::purchased("milk", 3.5, at)];

        assert_eq!(
            format_items(&items),
            "[ ] bread\n[x] milk         3.50  2024-05-01 10:15\n"
        );
    }

    #[test]
    fn test_format_empty_list() {
        assert_eq!(format_items(&[]), "(empty)\n");
    }

    #[test]
    fn test_format_total() {
        assert_eq!(format_total(0.0), "0.00");
        assert_eq!(format_total(3.5), "3.50");
    }
}
