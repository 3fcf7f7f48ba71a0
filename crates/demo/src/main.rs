use anyhow::Context;

fn main() -> anyhow::Result<()> {
    storefront_observability::init().context("invalid logging configuration")?;

    let config = storefront_demo::DemoConfig::from_env()?;
    let outcome = storefront_demo::run_demo(&config)?;

    if config.json {
        println!("{}", serde_json::to_string_pretty(&outcome.to_json()?)?);
    } else {
        println!("{}", outcome.inventory_report());
        println!("{}", outcome.sales_report());
    }

    tracing::info!(
        accepted = outcome.order_accepted,
        remaining_income = %outcome.customer.income(),
        "demo finished"
    );
    Ok(())
}
