//! # Till CLI
//!
//! The binary is intentionally thin: argument parsing lives in `args.rs`,
//! terminal output in `render.rs`, and this file wires subcommands to the
//! [`TillApi`] facade. Everything from the API inward is UI-agnostic; this
//! layer is the only place that knows about stdout, stderr, and exit
//! codes.
//!
//! The CLI holds no authoritative state. Every mutating call returns the
//! full updated document, and listings re-query the store.

use anyhow::{anyhow, bail, Result};
use chrono::Utc;
use clap::Parser;
use std::path::PathBuf;
use tillapp::api::{ProductFilter, TillApi};
use tillapp::model::Product;
use tillapp::paths::default_data_file;
use tillapp::store::fs::FileStore;

mod args;
mod render;

use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: TillApi<FileStore>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::List { search, category }) => handle_list(&ctx, search, category),
        Some(Commands::Add {
            name,
            category,
            cost,
            price,
            quantity,
            low_stock,
        }) => handle_add(&mut ctx, name, category, cost, price, quantity, low_stock),
        Some(Commands::Edit {
            product,
            name,
            category,
            cost,
            price,
            quantity,
            low_stock,
        }) => handle_edit(
            &mut ctx, &product, name, category, cost, price, quantity, low_stock,
        ),
        Some(Commands::Delete { product }) => handle_delete(&mut ctx, &product),
        Some(Commands::Category { name }) => handle_category(&mut ctx, &name),
        Some(Commands::Sell { product, quantity }) => handle_sell(&mut ctx, &product, quantity),
        Some(Commands::Report { date }) => handle_report(&ctx, date),
        Some(Commands::Path) => handle_path(&ctx),
        None => handle_list(&ctx, None, None),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_file: PathBuf = match &cli.data_file {
        Some(path) => path.clone(),
        None => default_data_file()?,
    };
    Ok(AppContext {
        api: TillApi::new(FileStore::new(data_file)),
    })
}

/// Resolve a user-facing selector to a product id: exact id, unique id
/// prefix, or exact name (case-insensitive), in that order.
fn resolve_product_id(ctx: &AppContext, selector: &str) -> Result<String> {
    let products = ctx.api.list_products(&ProductFilter::default())?;

    if let Some(product) = products.iter().find(|p| p.id == selector) {
        return Ok(product.id.clone());
    }

    let by_prefix: Vec<&Product> = products
        .iter()
        .filter(|p| p.id.starts_with(selector))
        .collect();
    match by_prefix.as_slice() {
        [product] => return Ok(product.id.clone()),
        [_, ..] => bail!("Ambiguous product id prefix: {selector}"),
        [] => {}
    }

    let by_name: Vec<&Product> = products
        .iter()
        .filter(|p| p.name.eq_ignore_ascii_case(selector))
        .collect();
    match by_name.as_slice() {
        [product] => Ok(product.id.clone()),
        [] => Err(anyhow!("No product matches {selector:?}")),
        _ => bail!("Multiple products are named {selector:?}; use the id"),
    }
}

fn handle_list(
    ctx: &AppContext,
    search: Option<String>,
    category: Option<String>,
) -> Result<()> {
    let products = ctx.api.list_products(&ProductFilter { search, category })?;
    render::render_product_table(&products);
    Ok(())
}

fn handle_add(
    ctx: &mut AppContext,
    name: String,
    category: String,
    cost: f64,
    price: f64,
    quantity: u32,
    low_stock: u32,
) -> Result<()> {
    let result = ctx.api.save_product(Product {
        id: String::new(),
        name,
        category: category.clone(),
        cost_price: cost,
        selling_price: price,
        quantity,
        low_stock_alert: low_stock,
    })?;
    if !category.is_empty() {
        // Keep the category set in step with the catalog, like the
        // category dialog in a graphical client would. Only after the
        // product passed validation, so a rejected add leaves no trace.
        ctx.api.save_category(&category)?;
    }
    render::print_messages(&result.messages);
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn handle_edit(
    ctx: &mut AppContext,
    selector: &str,
    name: Option<String>,
    category: Option<String>,
    cost: Option<f64>,
    price: Option<f64>,
    quantity: Option<u32>,
    low_stock: Option<u32>,
) -> Result<()> {
    let id = resolve_product_id(ctx, selector)?;
    let mut product = ctx
        .api
        .load_data()?
        .find_product(&id)
        .cloned()
        .ok_or_else(|| anyhow!("No product matches {selector:?}"))?;

    if let Some(name) = name {
        product.name = name;
    }
    if let Some(category) = &category {
        product.category = category.clone();
    }
    if let Some(cost) = cost {
        product.cost_price = cost;
    }
    if let Some(price) = price {
        product.selling_price = price;
    }
    if let Some(quantity) = quantity {
        product.quantity = quantity;
    }
    if let Some(low_stock) = low_stock {
        product.low_stock_alert = low_stock;
    }

    let result = ctx.api.save_product(product)?;
    if let Some(category) = category {
        ctx.api.save_category(&category)?;
    }
    render::print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, selector: &str) -> Result<()> {
    // Deleting something that is not there is a no-op, so fall back to
    // the raw selector when nothing resolves.
    let id = resolve_product_id(ctx, selector).unwrap_or_else(|_| selector.to_string());
    let result = ctx.api.delete_product(&id)?;
    render::print_messages(&result.messages);
    Ok(())
}

fn handle_category(ctx: &mut AppContext, name: &str) -> Result<()> {
    let result = ctx.api.save_category(name)?;
    render::print_messages(&result.messages);
    Ok(())
}

fn handle_sell(ctx: &mut AppContext, selector: &str, quantity: u32) -> Result<()> {
    let id = resolve_product_id(ctx, selector)?;
    let result = ctx.api.record_sale(&id, quantity)?;
    render::print_messages(&result.messages);
    Ok(())
}

fn handle_report(ctx: &AppContext, date: Option<chrono::NaiveDate>) -> Result<()> {
    let date = date.unwrap_or_else(|| Utc::now().date_naive());
    let result = ctx.api.daily_report(date)?;
    render::render_report(&result);
    Ok(())
}

fn handle_path(ctx: &AppContext) -> Result<()> {
    println!("{}", ctx.api.store().path().display());
    Ok(())
}
