use anyhow::Result;
use clap::Args;
use taste_tailor::{data, Config};
use taste_tailor_catalog::{
    parse_price_option, parse_rating_floor, CuisineScope, FeeCeiling, FilterCriteria, MenuItem,
    RestaurantBrowser, SortKey,
};

#[derive(Debug, Args)]
pub struct BrowseArgs {
    /// Case-insensitive substring of the item name
    #[arg(long)]
    search: Option<String>,

    /// Exact cuisine tag, e.g. "Thai"
    #[arg(long)]
    cuisine: Option<String>,

    /// Delivery fee option: "$1", "$3", "$5" or "$5+"
    #[arg(long)]
    fee: Option<String>,

    /// Rating option: "3+", "3.5+", "4+", "4.5+" or "5"
    #[arg(long)]
    rating: Option<String>,

    /// Price option: "$" to "$$$$"
    #[arg(long)]
    price: Option<String>,

    /// Sort label: "Delivery Fee", "Rating" or "Price"
    #[arg(long)]
    sort: Option<String>,

    /// Let a selected cuisine replace the search term
    #[arg(long)]
    rebase_cuisine: bool,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

impl BrowseArgs {
    fn criteria(&self, default_scope: CuisineScope) -> Result<FilterCriteria> {
        Ok(FilterCriteria {
            search_term: self.search.clone().unwrap_or_default(),
            cuisine: self.cuisine.clone(),
            max_delivery_fee: self.fee.as_deref().map(FeeCeiling::parse),
            min_rating: self.rating.as_deref().map(parse_rating_floor),
            price_tier: self.price.as_deref().map(parse_price_option).transpose()?,
            sort_key: self.sort.as_deref().map(SortKey::from_label).transpose()?,
            cuisine_scope: if self.rebase_cuisine {
                CuisineScope::Rebase
            } else {
                default_scope
            },
        })
    }
}

#[tracing::instrument(skip(config))]
pub fn browse(config: Config, args: BrowseArgs) -> Result<()> {
    let criteria = args.criteria(config.browse.cuisine_scope)?;
    let catalog = data::load_catalog(&config.data.catalog_path)?;
    let browser = RestaurantBrowser::with_criteria(catalog, criteria);

    let visible = browser.visible();
    tracing::info!(
        catalog = browser.catalog().len(),
        visible = visible.len(),
        "catalog browsed"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&visible)?);
        return Ok(());
    }

    for item in visible {
        println!("{}", summary_line(item));
    }

    Ok(())
}

fn summary_line(item: &MenuItem) -> String {
    format!(
        "{:>3}  {:<28} {:<10} {:>4}  {:<4} {}",
        item.id,
        item.name,
        item.cuisine,
        item.rating,
        item.price_tier.symbol(),
        item.delivery_fee
    )
}
