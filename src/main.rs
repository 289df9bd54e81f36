use clap::Parser;
use directories::ProjectDirs;
use std::io::{self, Write};
use std::path::PathBuf;
use stockpad::api::InventoryApi;
use stockpad::config::StockpadConfig;
use stockpad::error::{Result, StockpadError};
use stockpad::model::{Product, ProductDraft, SortField, SortOrder};
use stockpad::query;
use stockpad::store::fs::FileBackend;
use uuid::Uuid;

mod args;
mod print;
use args::{Cli, Commands};
use print::{
    print_category_chart, print_field_errors, print_messages, print_stock_chart, print_summary,
    print_table,
};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: InventoryApi<FileBackend>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::Add {
            name,
            category,
            price,
            quantity,
            description,
        }) => handle_add(&mut ctx, name, category, price, quantity, description),
        Some(Commands::List { search, sort, desc }) => handle_list(&mut ctx, search, sort, desc),
        Some(Commands::Update {
            number,
            name,
            category,
            price,
            quantity,
            description,
        }) => handle_update(&mut ctx, number, name, category, price, quantity, description),
        Some(Commands::Delete { number, yes }) => handle_delete(&mut ctx, number, yes),
        Some(Commands::Stats) => handle_stats(&mut ctx),
        Some(Commands::Chart) => handle_chart(&mut ctx),
        None => handle_list(&mut ctx, None, SortField::Name, false),
    }
}

fn init_context() -> Result<AppContext> {
    let data_dir = match std::env::var_os("STOCKPAD_HOME") {
        Some(dir) => PathBuf::from(dir),
        None => ProjectDirs::from("com", "stockpad", "stockpad")
            .ok_or_else(|| StockpadError::Store("Could not determine data dir".to_string()))?
            .data_dir()
            .to_path_buf(),
    };

    let config = StockpadConfig::load(&data_dir).unwrap_or_default();
    let backend = FileBackend::new(data_dir);
    let api = InventoryApi::new(backend, config);

    Ok(AppContext { api })
}

fn handle_add(
    ctx: &mut AppContext,
    name: Option<String>,
    category: Option<String>,
    price: Option<String>,
    quantity: Option<String>,
    description: Option<String>,
) -> Result<()> {
    let draft = ProductDraft {
        name: name.unwrap_or_default(),
        category: category.unwrap_or_default(),
        price: price.unwrap_or_default(),
        quantity: quantity.unwrap_or_default(),
        description: description.unwrap_or_default(),
    };

    ctx.api.open_create()?;
    let result = ctx.api.submit(&draft)?;
    print_messages(&result.messages);
    print_field_errors(&result.field_errors);

    if !result.field_errors.is_empty() {
        ctx.api.cancel();
        return Err(StockpadError::Api("invalid product input".to_string()));
    }
    Ok(())
}

fn handle_list(
    ctx: &mut AppContext,
    search: Option<String>,
    sort: SortField,
    desc: bool,
) -> Result<()> {
    if let Some(term) = &search {
        ctx.api.set_search_term(term);
    }
    ctx.api.set_sort_field(sort);
    ctx.api.set_sort_order(if desc {
        SortOrder::Descending
    } else {
        SortOrder::Ascending
    });

    let view = ctx.api.derived();
    if view.is_empty() {
        if search.is_some() {
            println!("No products found matching your search.");
        } else {
            println!("No products yet. Add one with `stockpad add`.");
        }
    } else {
        let rows = numbered_rows(&ctx.api, view);
        print_table(&rows, ctx.api.low_stock_threshold());
        println!();
        print_summary(&ctx.api.summary());
    }

    surface_warning(ctx);
    Ok(())
}

fn handle_update(
    ctx: &mut AppContext,
    number: usize,
    name: Option<String>,
    category: Option<String>,
    price: Option<String>,
    quantity: Option<String>,
    description: Option<String>,
) -> Result<()> {
    let id = resolve_number(&ctx.api, number)?;
    let opened = ctx.api.open_edit(&id)?;
    print_messages(&opened.messages);
    let prefill = match opened.draft {
        Some(draft) => draft,
        None => return Ok(()),
    };

    let draft = ProductDraft {
        name: name.unwrap_or(prefill.name),
        category: category.unwrap_or(prefill.category),
        price: price.unwrap_or(prefill.price),
        quantity: quantity.unwrap_or(prefill.quantity),
        description: description.unwrap_or(prefill.description),
    };

    let result = ctx.api.submit(&draft)?;
    print_messages(&result.messages);
    print_field_errors(&result.field_errors);

    if !result.field_errors.is_empty() {
        ctx.api.cancel();
        return Err(StockpadError::Api("invalid product input".to_string()));
    }
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, number: usize, skip_confirm: bool) -> Result<()> {
    let id = resolve_number(&ctx.api, number)?;
    let request = ctx.api.request_delete(&id)?;
    print_messages(&request.messages);
    if request.affected.is_empty() {
        return Ok(());
    }

    if !skip_confirm {
        print!("[y/N] ");
        io::stdout().flush().map_err(StockpadError::Io)?;

        let mut input = String::new();
        io::stdin().read_line(&mut input).map_err(StockpadError::Io)?;

        if !input.trim().eq_ignore_ascii_case("y") {
            ctx.api.cancel_delete();
            println!("Operation cancelled.");
            return Ok(());
        }
    }

    let result = ctx.api.confirm_delete()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_stats(ctx: &mut AppContext) -> Result<()> {
    print_summary(&ctx.api.summary());
    surface_warning(ctx);
    Ok(())
}

fn handle_chart(ctx: &mut AppContext) -> Result<()> {
    if ctx.api.products().is_empty() {
        println!("No products yet. Add one with `stockpad add`.");
        return Ok(());
    }
    print_stock_chart(&ctx.api.stock_chart());
    println!();
    print_category_chart(&ctx.api.category_chart());
    surface_warning(ctx);
    Ok(())
}

/// Positions in the plain listing (no filter, name ascending). Row numbers
/// shown by `list` and accepted by `update`/`delete` always mean this
/// ordering, whatever sort or search was asked for.
fn default_listing(api: &InventoryApi<FileBackend>) -> Vec<Product> {
    query::derive(api.products(), "", SortField::Name, SortOrder::Ascending)
}

fn resolve_number(api: &InventoryApi<FileBackend>, number: usize) -> Result<Uuid> {
    number
        .checked_sub(1)
        .and_then(|i| default_listing(api).get(i).map(|p| p.id))
        .ok_or_else(|| StockpadError::Api(format!("No product at row {}", number)))
}

fn numbered_rows(api: &InventoryApi<FileBackend>, view: Vec<Product>) -> Vec<(usize, Product)> {
    let order: Vec<Uuid> = default_listing(api).iter().map(|p| p.id).collect();
    view.into_iter()
        .map(|product| {
            let number = order
                .iter()
                .position(|id| *id == product.id)
                .map(|i| i + 1)
                .unwrap_or(0);
            (number, product)
        })
        .collect()
}

fn surface_warning(ctx: &mut AppContext) {
    if let Some(warning) = ctx.api.pending_warning() {
        print_messages(&[warning]);
    }
}
