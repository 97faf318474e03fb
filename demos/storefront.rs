//! Storefront Demo
//!
//! Drives the storefront the way the UI would: browse the catalog with a
//! radius filter, optionally search it, fill a cart, and check out.
//!
//! Use `-r` to filter by radius in kilometers
//! Use `-q` to search the catalog
//! Use `-a` to set the delivery address

use anyhow::Result;
use clap::Parser;

use mandi::{
    catalog::{CatalogService, DEFAULT_RADIUS_KM},
    context::Storefront,
    orders::{NewOrder, OrdersService},
    session::Session,
    utils::StorefrontDemoArgs,
};

/// Storefront Demo
#[expect(clippy::print_stdout, reason = "Example code")]
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = StorefrontDemoArgs::parse();

    let storefront = Storefront::from_fixture()?;
    let mut session = Session::new();

    let (lat, lng) = session.coords();
    let radius = args.radius.unwrap_or(DEFAULT_RADIUS_KM);

    let products = storefront
        .catalog
        .list_products(Some(radius), Some(lat), Some(lng))
        .await?;

    println!("{} products within {radius} km:", products.len());

    for product in &products {
        println!(
            "  #{} {} at ₹{}/{} ({} km, {} stars)",
            product.id, product.name, product.price, product.unit, product.distance_km,
            product.rating
        );
    }

    if let Some(query) = args.query.as_deref() {
        let matches = storefront.catalog.search_products(query).await?;

        println!("\n{} matches for {query:?}:", matches.len());

        for product in &matches {
            println!("  #{} {} ({})", product.id, product.name, product.category);
        }
    }

    // Shop like a buyer would: two of the closest listing, one of the next.
    let mut nearest = products.iter();

    if let Some(product) = nearest.next() {
        session.cart.add(product.clone(), 2);
    }

    if let Some(product) = nearest.next() {
        session.cart.add(product.clone(), 1);
    }

    println!(
        "\nCart: {} items, ₹{}",
        session.cart.total_items(),
        session.cart.total_price()
    );

    for line in session.cart.iter() {
        println!(
            "  {} x{} = ₹{}",
            line.product().name,
            line.quantity(),
            line.subtotal()
        );
    }

    let order = NewOrder {
        items: session.cart.order_items(),
        delivery_address: args.address,
    };

    let confirmation = storefront.orders.place_order(order).await?;

    session.cart.clear();

    println!(
        "\nOrder {} ({:?}) placed at {}",
        confirmation.order_id, confirmation.status, confirmation.placed_at
    );

    Ok(())
}
