use super::domain::Receipt;

/// Compute the reward points for a receipt.
///
/// Pure and deterministic: the same receipt always scores the same total, and
/// the computation never fails. Numeric subfields that do not parse (price,
/// day, hour, total) degrade to zero for their rule instead of aborting the
/// whole score; rejecting malformed input is a submission-time concern.
pub fn compute_points(receipt: &Receipt) -> u64 {
    let mut points = alphanumeric_count(&receipt.retailer);

    // Total-based bonuses only apply when the total parses at all. A whole
    // dollar amount is also a quarter multiple, so both fire together.
    if let Ok(total) = receipt.total.parse::<f64>() {
        if receipt.total.ends_with(".00") {
            points += 50;
        }
        if total % 0.25 == 0.0 {
            points += 25;
        }
    }

    points += (receipt.items.len() / 2) as u64 * 5;

    for item in &receipt.items {
        let description = item.short_description.trim();
        // Length 0 is divisible by 3 and intentionally still earns the bonus;
        // the externally specified rule set reads that way.
        if description.len() % 3 == 0 {
            let price = item.price.parse::<f64>().unwrap_or(0.0);
            points += (price * 0.2).ceil() as u64;
        }
    }

    let day = receipt
        .purchase_date
        .split('-')
        .nth(2)
        .and_then(|raw| raw.parse::<u32>().ok())
        .unwrap_or(0);
    if day % 2 == 1 {
        points += 6;
    }

    let hour = receipt
        .purchase_time
        .split(':')
        .next()
        .and_then(|raw| raw.parse::<u32>().ok())
        .unwrap_or(0);
    if (14..16).contains(&hour) {
        points += 10;
    }

    points
}

fn alphanumeric_count(retailer: &str) -> u64 {
    retailer.chars().filter(|ch| ch.is_alphanumeric()).count() as u64
}
