//! Development entry point: load the catalog once and log what came back.

use foodie_client::{ClientConfig, LoadOutcome, Storefront};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    foodie_observability::init();

    let config = ClientConfig::from_env();
    tracing::info!(backend_url = %config.backend_url, "starting storefront");

    let mut storefront = Storefront::from_config(&config)?;

    match storefront.load().await {
        LoadOutcome::Loaded { .. } => {
            for product in storefront.visible() {
                tracing::info!(
                    id = %product.id_typed(),
                    title = product.title(),
                    category = product.category(),
                    price = %product.price(),
                    in_stock = product.in_stock(),
                    "product"
                );
            }
        }
        LoadOutcome::Failed(_) => {
            tracing::warn!("catalog unavailable; the storefront will show an empty grid");
        }
        LoadOutcome::AlreadyAttempted => {}
    }

    tracing::info!(
        session_id = %storefront.session_id(),
        categories = ?storefront.categories(),
        visible = storefront.visible().len(),
        theme = %storefront.theme(),
        "storefront ready"
    );

    Ok(())
}
