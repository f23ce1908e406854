//! Sample order sets for demonstrations and tests.

use super::order::{Order, Side};

fn build(rows: &[(&str, &str, Side, u64, &str, &str)]) -> Vec<Order> {
    rows.iter()
        .map(|&(order_id, security_id, side, quantity, user, company)| {
            Order::new(order_id, security_id, side, quantity, user, company)
        })
        .collect()
}

/// Eight orders over three securities.
///
/// Matching sizes: SecId1 = 0 (both orders are CompanyA), SecId2 = 2700,
/// SecId3 = 0.
#[must_use]
pub fn specific_sample_orders() -> Vec<Order> {
    use Side::{Buy, Sell};
    build(&[
        ("OrdId1", "SecId1", Buy, 1000, "User1", "CompanyA"),
        ("OrdId2", "SecId2", Sell, 3000, "User2", "CompanyB"),
        ("OrdId3", "SecId1", Sell, 500, "User3", "CompanyA"),
        ("OrdId4", "SecId2", Buy, 600, "User4", "CompanyC"),
        ("OrdId5", "SecId2", Buy, 100, "User5", "CompanyB"),
        ("OrdId6", "SecId3", Buy, 1000, "User6", "CompanyD"),
        ("OrdId7", "SecId2", Buy, 2000, "User7", "CompanyE"),
        ("OrdId8", "SecId2", Sell, 5000, "User8", "CompanyE"),
    ])
}

/// Thirteen orders over three securities from two companies.
///
/// Matching sizes: SecId1 = 300, SecId2 = 1000, SecId3 = 600.
#[must_use]
pub fn orders_example_2() -> Vec<Order> {
    use Side::{Buy, Sell};
    build(&[
        ("OrdId1", "SecId1", Sell, 100, "User10", "Company2"),
        ("OrdId2", "SecId3", Sell, 200, "User8", "Company2"),
        ("OrdId3", "SecId1", Buy, 300, "User13", "Company2"),
        ("OrdId4", "SecId2", Sell, 400, "User12", "Company2"),
        ("OrdId5", "SecId3", Sell, 500, "User7", "Company2"),
        ("OrdId6", "SecId3", Buy, 600, "User3", "Company1"),
        ("OrdId7", "SecId1", Sell, 700, "User10", "Company2"),
        ("OrdId8", "SecId1", Sell, 800, "User2", "Company1"),
        ("OrdId9", "SecId2", Buy, 900, "User6", "Company2"),
        ("OrdId10", "SecId2", Sell, 1000, "User5", "Company1"),
        ("OrdId11", "SecId1", Sell, 1100, "User13", "Company2"),
        ("OrdId12", "SecId2", Buy, 1200, "User9", "Company2"),
        ("OrdId13", "SecId1", Sell, 1300, "User1", "Company1"),
    ])
}

/// Eleven orders over three securities from two companies.
///
/// Matching sizes: SecId1 = 900, SecId2 = 600, SecId3 = 0.
#[must_use]
pub fn orders_example_3() -> Vec<Order> {
    use Side::{Buy, Sell};
    build(&[
        ("OrdId1", "SecId3", Sell, 100, "User1", "Company1"),
        ("OrdId2", "SecId3", Sell, 200, "User3", "Company2"),
        ("OrdId3", "SecId1", Buy, 300, "User2", "Company1"),
        ("OrdId4", "SecId3", Sell, 400, "User5", "Company2"),
        ("OrdId5", "SecId2", Sell, 500, "User2", "Company1"),
        ("OrdId6", "SecId2", Buy, 600, "User3", "Company2"),
        ("OrdId7", "SecId2", Sell, 700, "User1", "Company1"),
        ("OrdId8", "SecId1", Sell, 800, "User2", "Company1"),
        ("OrdId9", "SecId1", Buy, 900, "User5", "Company2"),
        ("OrdId10", "SecId1", Sell, 1000, "User1", "Company1"),
        ("OrdId11", "SecId2", Sell, 1100, "User6", "Company2"),
    ])
}
