use colored::Colorize;
use stockpad::api::{CmdMessage, MessageLevel};
use stockpad::model::Product;
use stockpad::stats::{StockLevel, Summary};
use stockpad::validate::FieldError;
use unicode_width::UnicodeWidthStr;

const BAR_WIDTH: usize = 40;
const LABEL_WIDTH: usize = 15;
const DESCRIPTION_WIDTH: usize = 40;

pub(crate) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(crate) fn print_field_errors(errors: &[FieldError]) {
    for error in errors {
        println!("  {} {}", format!("{}:", error.field).bold(), error.message.red());
    }
}

/// Render the product table. Each row carries its stable display number (its
/// position in the plain, unfiltered listing), so numbers stay valid targets
/// for `update`/`delete` under any sort or search.
pub(crate) fn print_table(rows: &[(usize, Product)], threshold: u32) {
    let headers = ["#", "Name", "Category", "Price", "Qty", "Status", "Description"];
    let mut table: Vec<[String; 7]> = Vec::with_capacity(rows.len());
    for (number, product) in rows {
        table.push([
            format!("{}.", number),
            product.name.clone(),
            product.category.clone(),
            format!("${:.2}", product.price),
            product.quantity.to_string(),
            StockLevel::of(product.quantity, threshold).label().to_string(),
            truncate(&product.description, DESCRIPTION_WIDTH),
        ]);
    }

    let mut widths: [usize; 7] = [0; 7];
    for (i, header) in headers.iter().enumerate() {
        widths[i] = header.width();
    }
    for row in &table {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.width());
        }
    }

    println!("{}", format_row(&headers.map(String::from), &widths).bold());
    for (row, (_, product)) in table.iter().zip(rows) {
        let line = format_row(row, &widths);
        match StockLevel::of(product.quantity, threshold) {
            StockLevel::OutOfStock => println!("{}", line.red()),
            StockLevel::LowStock => println!("{}", line.yellow()),
            StockLevel::InStock => println!("{}", line),
        }
    }
}

fn format_row(cells: &[String; 7], widths: &[usize; 7]) -> String {
    let mut line = String::new();
    for (i, cell) in cells.iter().enumerate() {
        line.push_str(cell);
        if i + 1 < cells.len() {
            // Pad by display width, not byte length.
            let pad = widths[i].saturating_sub(cell.width()) + 2;
            line.push_str(&" ".repeat(pad));
        }
    }
    line
}

pub(crate) fn print_summary(summary: &Summary) {
    println!(
        "{} products   {} units   {} low stock   total value {}",
        summary.total_products.to_string().bold(),
        summary.total_units.to_string().bold(),
        summary.low_stock.to_string().yellow(),
        format!("${:.2}", summary.total_value).green()
    );
}

pub(crate) fn print_stock_chart(products: &[Product]) {
    println!("{}", "Stock levels (top products by quantity)".bold());
    let max = products.iter().map(|p| p.quantity).max().unwrap_or(0).max(1);
    for product in products {
        let filled = (product.quantity as usize * BAR_WIDTH) / max as usize;
        println!(
            "  {:<label$}  {} {}",
            truncate(&product.name, LABEL_WIDTH),
            "█".repeat(filled).blue(),
            product.quantity,
            label = LABEL_WIDTH
        );
    }
}

pub(crate) fn print_category_chart(slices: &[(String, usize)]) {
    println!("{}", "Category distribution".bold());
    let max = slices.iter().map(|(_, count)| *count).max().unwrap_or(0).max(1);
    for (category, count) in slices {
        let filled = (count * BAR_WIDTH) / max;
        println!(
            "  {:<label$}  {} {}",
            truncate(category, LABEL_WIDTH),
            "█".repeat(filled).cyan(),
            count,
            label = LABEL_WIDTH
        );
    }
}

fn truncate(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let cut: String = text.chars().take(limit.saturating_sub(3)).collect();
    format!("{}...", cut)
}
