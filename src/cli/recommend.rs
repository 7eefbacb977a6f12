use anyhow::Result;
use taste_tailor::{data, Config};
use taste_tailor_catalog::describe_taste;
use taste_tailor_recommend::{PastOrderRecord, TasteAffinityIndex, HIGH_AFFINITY_RATING};

#[tracing::instrument(skip(config))]
pub fn recommend(config: Config, json: bool) -> Result<()> {
    let history = data::load_orders(&config.data.orders_path)?;
    let ranked = history.recommendations();

    tracing::info!(
        orders = history.len(),
        awaiting_review = history.awaiting_review().len(),
        "recommendations ranked"
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&ranked)?);
        return Ok(());
    }

    let index = TasteAffinityIndex::build(history.orders());
    let favourites: Vec<&str> = index
        .ranked_tags()
        .into_iter()
        .filter(|tag| index.is_high_affinity(tag))
        .collect();
    if !favourites.is_empty() {
        println!("Favourite tastes: {}", favourites.join(", "));
    }

    for order in ranked {
        println!("{}", summary_line(order));
        for note in taste_notes(order) {
            println!("        {note}");
        }
    }

    Ok(())
}

fn summary_line(order: &PastOrderRecord) -> String {
    let rating = if order.is_rated() {
        format!("{}/5", order.rating)
    } else {
        "unrated".to_string()
    };

    format!(
        "{:>4}  {:<28} {:<8} {:>7.2}  {}  [{}]",
        order.id,
        order.item_name,
        rating,
        order.total_price(),
        order.delivered_at.format("%Y-%m-%d"),
        order.taste_tags.join(", ")
    )
}

/// Taste blurbs for orders the user liked; empty for unrated or low-rated ones.
fn taste_notes(order: &PastOrderRecord) -> Vec<&'static str> {
    if !order.is_rated() || order.rating < HIGH_AFFINITY_RATING {
        return Vec::new();
    }

    order
        .taste_tags
        .iter()
        .filter_map(|tag| describe_taste(tag))
        .collect()
}
