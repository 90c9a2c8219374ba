use chrono::Local;
use opme::api::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = std::env::args()
        .nth(1)
        .ok_or("usage: backend_client <api-base-url>")?;

    let client = ApiClient::new(HttpTransport::builder(base_url).build()?);

    println!("backend: {}", client.transport().base_url());
    println!("health: {}", client.health().await?);
    println!("mainô reachable: {}", client.test_maino_connection().await?);

    let page = client
        .consult_balances(&BalanceFilters::default(), PageRequest::default())
        .await?;
    let pagination = page.pagination_or_missing();
    println!(
        "{} ({})",
        opme::pluralize(pagination.total, "resultado", "resultados"),
        pagination.label()
    );

    let (start, end) = sync_period(Local::now().date_naive(), 7);
    println!("sync {start}..{end}: {}", client.sync_maino(start, end).await?);
    Ok(())
}
