use crate::models::PropertyType;

/// Render a price for display.
///
/// Rental listings read `"$2,500/month"`; everything else reads
/// `"$850,000"`. One fixed locale, comma grouping, no conversion.
pub fn format_price(price: u64, property_type: PropertyType) -> String {
    let grouped = group_thousands(price);
    match property_type {
        PropertyType::Rent => format!("${}/month", grouped),
        _ => format!("${}", grouped),
    }
}

/// Comma-group an integer, US convention.
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
