//! Turning replies and errors into printable text.

use core::str::FromStr;

use serde_json::json;

use stockroom_core::InventoryError;
use stockroom_inventory::ContentRow;

use crate::dispatcher::{DispatchError, Reply};

/// How listings and errors are printed.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Plain text, columns separated by tabs.
    #[default]
    Table,
    /// One JSON document per line.
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format {other:?} (expected table|json)")),
        }
    }
}

/// Stable machine-readable code for an error kind.
pub fn error_code(err: &InventoryError) -> &'static str {
    match err {
        InventoryError::DuplicateSku(_) => "duplicate_sku",
        InventoryError::DuplicateWarehouse(_) => "duplicate_warehouse",
        InventoryError::UnknownSku(_) => "unknown_sku",
        InventoryError::UnknownWarehouse(_) => "unknown_warehouse",
        InventoryError::NotStocked { .. } => "not_stocked",
        InventoryError::EmptyWarehouse(_) => "empty_warehouse",
        InventoryError::InvalidQuantity(_) => "invalid_quantity",
        InventoryError::MalformedCommand(_) => "malformed_command",
    }
}

/// Output lines for a successful command. Mutations print nothing.
pub fn render_reply(reply: &Reply, format: OutputFormat) -> Vec<String> {
    match format {
        OutputFormat::Table => render_table(reply),
        OutputFormat::Json => render_json(reply).into_iter().collect(),
    }
}

pub fn render_error(err: &DispatchError, format: OutputFormat) -> String {
    match format {
        OutputFormat::Table => err.to_string(),
        OutputFormat::Json => json!({
            "error": error_code(&err.source),
            "operation": err.operation.as_str(),
            "message": err.source.to_string(),
        })
        .to_string(),
    }
}

fn render_table(reply: &Reply) -> Vec<String> {
    match reply {
        Reply::WarehouseAdded(_) | Reply::ProductAdded(_) | Reply::Stocked(_) | Reply::Unstocked(_) => {
            Vec::new()
        }
        Reply::Products(products) => products
            .iter()
            .map(|p| format!("{} {}", p.name(), p.sku()))
            .collect(),
        Reply::Warehouses(ids) => std::iter::once("WAREHOUSES".to_string())
            .chain(ids.iter().map(ToString::to_string))
            .collect(),
        Reply::Contents { rows, .. } => contents_table(rows),
    }
}

const NAME_HEADER: &str = "ITEM_NAME";
const SKU_HEADER: &str = "ITEM_SKU";
const QTY_HEADER: &str = "QTY";

/// Tab-separated columns padded to the widest name and SKU.
fn contents_table(rows: &[ContentRow]) -> Vec<String> {
    let name_width = rows
        .iter()
        .map(|r| r.name.chars().count())
        .chain(std::iter::once(NAME_HEADER.len()))
        .max()
        .unwrap_or(0);
    let sku_width = rows
        .iter()
        .map(|r| r.sku.as_str().chars().count())
        .chain(std::iter::once(SKU_HEADER.len()))
        .max()
        .unwrap_or(0);

    let header = format!("{NAME_HEADER:<name_width$}\t{SKU_HEADER:<sku_width$}\t{QTY_HEADER}");
    std::iter::once(header)
        .chain(rows.iter().map(|r| {
            format!(
                "{:<name_width$}\t{:<sku_width$}\t{}",
                r.name,
                r.sku.as_str(),
                r.quantity
            )
        }))
        .collect()
}

fn render_json(reply: &Reply) -> Option<String> {
    let value = match reply {
        Reply::WarehouseAdded(_) | Reply::ProductAdded(_) | Reply::Stocked(_) | Reply::Unstocked(_) => {
            return None;
        }
        Reply::Products(products) => json!({ "products": products }),
        Reply::Warehouses(ids) => json!({ "warehouses": ids }),
        Reply::Contents { warehouse, rows } => json!({ "warehouse": warehouse, "items": rows }),
    };
    Some(value.to_string())
}
