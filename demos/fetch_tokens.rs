//! Fetch the token list once and print it, driven by the view model signals.
//!
//! Set `TOKEN_LIST_API_URL` (or put it in `.env`) to point at another server.
//!
//! ```bash
//! cargo run --example fetch_tokens
//! ```

use futures_util::StreamExt;
use token_list_sdk::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let mut builder = TokenListClient::builder();
    if let Ok(url) = std::env::var("TOKEN_LIST_API_URL") {
        builder = builder.base_url(&url);
    }
    let view_model = TokenListViewModel::new(builder.build()?);

    let mut loading = view_model.outputs().loading().stream();
    let mut errors = view_model.outputs().errors().stream();
    let mut renders = view_model.outputs().render_changed().stream();

    let fetch = view_model.inputs().load_tokens();

    // Loading toggles true then false for every fetch.
    while let Some(is_loading) = loading.next().await {
        println!("loading: {}", is_loading);
        if !is_loading {
            break;
        }
    }
    fetch.await?;

    if let Some(Some(message)) = futures_util::FutureExt::now_or_never(errors.next()) {
        eprintln!("error: {}", message);
        return Ok(());
    }

    if futures_util::FutureExt::now_or_never(renders.next()).flatten().is_some() {
        if let Some(state) = view_model.outputs().state() {
            for section in state.sections() {
                println!("{:?} ({} tokens)", section.id, section.items.len());
                for item in &section.items {
                    let row = item.row();
                    println!("  {:<10} {:<30} {:>14}", row.symbol, row.name, row.price_text);
                }
            }
        }
    }

    Ok(())
}
