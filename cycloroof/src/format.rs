//! Display formatting shared by the catalog, comparison and rentals screens.

use crate::config::CURRENCY_SYMBOL;

/// Group digits the Indian way: last three, then pairs (`2,75,000`).
pub fn group_digits(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

/// `₹2,75,000`
pub fn format_price(price: u64) -> String {
    format!("{CURRENCY_SYMBOL}{}", group_digits(price))
}

/// `35 km/l`; fractional figures keep one decimal.
pub fn format_mileage(mileage: f64) -> String {
    if mileage.fract() == 0.0 {
        format!("{mileage:.0} km/l")
    } else {
        format!("{mileage:.1} km/l")
    }
}
