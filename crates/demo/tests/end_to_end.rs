use storefront_core::Money;
use storefront_demo::{DemoConfig, run_demo};

#[test]
fn demo_stocks_inventory_and_accepts_the_order() {
    let outcome = run_demo(&DemoConfig::default()).unwrap();

    let report = outcome.inventory_report();
    assert!(report.starts_with("Inventory Report:\n"));
    let mut lines: Vec<&str> = report.lines().skip(1).collect();
    lines.sort_unstable();
    assert_eq!(lines, vec!["Gadget: 50", "Lamp: 25", "Watch: 10"]);

    assert!(outcome.order_accepted);
    assert_eq!(outcome.customer.income(), Money::from_cents(9140));
    assert_eq!(
        outcome.sales_report(),
        "Sales Report:\nOrder ID: 10, Customer: John Doe, Total Cost: 8.60\n"
    );
}

#[test]
fn customer_with_exactly_the_order_total_is_turned_away() {
    let config = DemoConfig {
        income: Money::from_cents(860),
        ..DemoConfig::default()
    };
    let outcome = run_demo(&config).unwrap();

    assert!(!outcome.order_accepted);
    assert_eq!(outcome.customer.income(), Money::from_cents(860));
    assert!(outcome.ledger.is_empty());
    assert_eq!(outcome.sales_report(), "Sales Report:\n");
}

#[test]
fn reports_are_stable_across_calls() {
    let outcome = run_demo(&DemoConfig::default()).unwrap();
    assert_eq!(outcome.inventory_report(), outcome.inventory_report());
    assert_eq!(outcome.sales_report(), outcome.sales_report());
}
