//! Display formatting for listing values.

/// Whole dollars with thousands separators, e.g. `$1,250,000`
pub fn format_price(price: f64) -> String {
    let rounded = price.round();
    if rounded < 0.0 {
        format!("-${}", group_thousands(-rounded as u64))
    } else {
        format!("${}", group_thousands(rounded as u64))
    }
}

/// Thousands separators with up to three decimals kept, e.g. `12,345.5`
pub fn format_number(number: f64) -> String {
    let sign = if number < 0.0 { "-" } else { "" };
    let magnitude = (number.abs() * 1000.0).round() / 1000.0;
    let whole = magnitude.trunc() as u64;
    let fraction = format!("{:.3}", magnitude.fract());
    let fraction = fraction.trim_start_matches('0').trim_end_matches('0');

    if fraction == "." || fraction.is_empty() {
        format!("{}{}", sign, group_thousands(whole))
    } else {
        format!("{}{}{}", sign, group_thousands(whole), fraction)
    }
}

pub fn format_square_feet(square_feet: u32) -> String {
    format!("{} sqft", group_thousands(square_feet as u64))
}

pub fn format_bed_bath(bedrooms: f64, bathrooms: f64) -> String {
    format!("{}bd • {}ba", bedrooms, bathrooms)
}

pub fn format_address(address: &str, city: &str, state: &str) -> String {
    format!("{}, {}, {}", address, city, state)
}

/// Capitalize the first letter, e.g. `condo` -> `Condo`
pub fn format_property_type(property_type: &str) -> String {
    let mut chars = property_type.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
