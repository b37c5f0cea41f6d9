//! Product catalog commands.

use bramble_client::remote::CatalogClient;
use bramble_client::{ClientConfig, ProductView};
use bramble_core::{CATEGORIES, ProductDraft, ProductId};

use super::auth;
use super::basket;

type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Reject drafts with a category the catalog service will not accept.
fn validate_category(draft: &ProductDraft) -> CommandResult {
    if CATEGORIES.contains(&draft.category.as_str()) {
        Ok(())
    } else {
        Err(format!(
            "unknown category {:?}; valid categories: {}",
            draft.category,
            CATEGORIES.join(", ")
        )
        .into())
    }
}

/// List the catalog, annotated with local cart/wishlist state.
#[allow(clippy::print_stdout)]
pub async fn list(config: &ClientConfig) -> CommandResult {
    let session = auth::load_session(config);
    let catalog = CatalogClient::new(&config.catalog_service_url);
    let products = catalog.fetch_catalog(&session).await?;

    if products.is_empty() {
        println!("No products available at the moment");
        return Ok(());
    }

    let sync = basket::build_synchronizer(config)?;
    for product in &products {
        let view = ProductView::derive(product, &sync);
        let mut markers = String::new();
        if view.in_cart {
            markers.push_str(" [cart]");
        }
        if view.in_wishlist {
            markers.push_str(" [wishlist]");
        }

        let stock = if view.available {
            "available"
        } else {
            "out of stock"
        };
        println!(
            "{}  {}  {}  {} ({}){markers}",
            view.id, view.name, view.price, stock, view.category
        );
    }
    Ok(())
}

/// Show one product in full.
#[allow(clippy::print_stdout)]
pub async fn show(config: &ClientConfig, id: &str) -> CommandResult {
    let session = auth::load_session(config);
    let catalog = CatalogClient::new(&config.catalog_service_url);
    let product = catalog.get_product(&ProductId::new(id), &session).await?;

    println!("id:          {}", product.id);
    println!("name:        {}", product.name);
    println!("description: {}", product.description);
    println!("category:    {}", product.category);
    println!("image:       {}", product.image_url);
    println!("stock:       {}", product.stock);
    println!("price:       {} (minor units)", product.price_minor_units);
    println!("available:   {}", product.available);
    Ok(())
}

/// Create a product (sellers only).
#[allow(clippy::print_stdout)]
pub async fn create(config: &ClientConfig, draft: ProductDraft) -> CommandResult {
    validate_category(&draft)?;
    let session = auth::load_session(config);
    let catalog = CatalogClient::new(&config.catalog_service_url);
    let ack = catalog.create_product(&draft, &session).await?;

    println!(
        "{}",
        ack.message
            .unwrap_or_else(|| format!("Created {}", draft.name))
    );
    Ok(())
}

/// Update a product (sellers only).
#[allow(clippy::print_stdout)]
pub async fn update(config: &ClientConfig, id: &str, draft: ProductDraft) -> CommandResult {
    validate_category(&draft)?;
    let session = auth::load_session(config);
    let catalog = CatalogClient::new(&config.catalog_service_url);
    let ack = catalog
        .update_product(&ProductId::new(id), &draft, &session)
        .await?;

    println!(
        "{}",
        ack.message.unwrap_or_else(|| format!("Updated {id}"))
    );
    Ok(())
}
