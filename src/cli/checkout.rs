use anyhow::{anyhow, bail, Context, Result};
use taste_tailor::{data, Config};
use taste_tailor_cart::{Cart, CheckoutSummary, LineSelection};

/// `ID` or `ID:QTY` as given to `--item`.
fn parse_item_spec(spec: &str) -> Result<(u32, u32)> {
    let (id, quantity) = match spec.split_once(':') {
        Some((id, quantity)) => (id, quantity),
        None => (spec, "1"),
    };

    let id = id
        .trim()
        .parse()
        .with_context(|| format!("invalid item id in '{spec}'"))?;
    let quantity = quantity
        .trim()
        .parse()
        .with_context(|| format!("invalid quantity in '{spec}'"))?;

    Ok((id, quantity))
}

#[tracing::instrument(skip(config))]
pub fn checkout(config: Config, items: Vec<String>, json: bool) -> Result<()> {
    if items.is_empty() {
        bail!("at least one --item is required");
    }

    let catalog = data::load_catalog(&config.data.catalog_path)?;
    let mut cart = Cart::new();

    for spec in &items {
        let (id, quantity) = parse_item_spec(spec)?;
        let item = catalog
            .get(id)
            .ok_or_else(|| anyhow!("menu item {id} not found in catalog"))?;
        cart.add_item(item, quantity, LineSelection::default())
            .with_context(|| format!("cannot add '{spec}' to cart"))?;
    }

    let summary = CheckoutSummary::for_cart(&cart, &config.checkout);
    tracing::info!(
        lines = cart.items().len(),
        items = summary.item_count,
        total = summary.total,
        "checkout summarized"
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    for line in cart.items() {
        println!(
            "{:>3} x {:<28} {:>8.2}",
            line.quantity,
            line.name,
            line.line_total()
        );
    }
    println!("Subtotal      {:>8.2}", summary.subtotal);
    println!("Delivery fee  {:>8.2}", summary.delivery_fee);
    println!("VAT           {:>8.2}", summary.vat);
    println!("Total         {:>8.2}", summary.total);

    Ok(())
}
