//! Display formatting for estimates

/// Format a number with comma thousands separators
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    let len = s.len();

    for (i, c) in s.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    result
}

/// Format an amount with a currency symbol, e.g. "₹6,500,000"
pub fn format_currency(symbol: &str, amount: u64) -> String {
    format!("{}{}", symbol, format_number(amount))
}

pub fn format_months(months: u64) -> String {
    if months == 1 {
        "1 month".to_string()
    } else {
        format!("{} months", months)
    }
}

pub fn format_workers(workers: u64) -> String {
    if workers == 1 {
        "1 worker".to_string()
    } else {
        format!("{} workers", workers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(6_500_000), "6,500,000");
        assert_eq!(format_number(12_345_678_901), "12,345,678,901");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency("₹", 390_000), "₹390,000");
        assert_eq!(format_currency("$", 42), "$42");
    }

    #[test]
    fn test_units() {
        assert_eq!(format_months(1), "1 month");
        assert_eq!(format_months(2), "2 months");
        assert_eq!(format_workers(1), "1 worker");
        assert_eq!(format_workers(4), "4 workers");
    }
}
