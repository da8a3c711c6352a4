use inventory_app::config::load_settings;
use inventory_app::lifecycle::InventorySystem;
use inventory_app::model::ProductDraft;
use inventory_app::query::QuerySpec;
use store_framework::tracing::setup_tracing;
use tracing::{info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let settings = load_settings();
    info!(storage_dir = %settings.storage_dir.display(), "Starting inventory app");

    let system = InventorySystem::new(&settings);
    let client = &system.client;

    // Browse: electronics only, first page
    let mut query = QuerySpec::new(settings.default_page_size);
    query.set_category(Some("Electronics".into()));
    let page = client.render(query).await.map_err(|e| e.to_string())?;
    info!(
        matched = page.total_matched,
        pages = page.total_pages,
        percent = page.percent_shown,
        "Electronics"
    );

    // Add a product through the form
    let span = tracing::info_span!("add_product");
    let state = async {
        client.on_add_clicked().await?;
        client
            .on_form_submit(ProductDraft::new("Desk Lamp", 19.99, "Home", 5, true))
            .await
    }
    .instrument(span)
    .await
    .map_err(|e| e.to_string())?;
    if let Some(alert) = state.alert.alert() {
        info!(message = %alert.message, "Alert");
    }

    // Delete it again, confirming in the modal
    let products = client.products().await.map_err(|e| e.to_string())?;
    if let Some(lamp) = products.iter().rev().find(|p| p.name == "Desk Lamp") {
        let span = tracing::info_span!("delete_product", id = %lamp.id);
        let state = async {
            let pending = client.on_delete_clicked(lamp.id.clone()).await?;
            if let Some(prompt) = pending.delete_confirmation.prompt() {
                info!(%prompt, "Confirmation");
            }
            client.on_confirm_delete().await
        }
        .instrument(span)
        .await
        .map_err(|e| e.to_string())?;
        if let Some(alert) = state.alert.alert() {
            info!(message = %alert.message, "Alert");
        }
    }

    let categories = client.categories().await.map_err(|e| e.to_string())?;
    info!(?categories, "Categories");

    client.on_logout().await.map_err(|e| e.to_string())?;

    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
