//! Command grammar.
//!
//! ```text
//! ADD WAREHOUSE <id> [<limit>]
//! ADD PRODUCT "<name with spaces>" <sku>
//! STOCK <sku> <warehouse> <qty>
//! UNSTOCK <sku> <warehouse> <qty>
//! LIST PRODUCTS
//! LIST WAREHOUSES
//! LIST <warehouse>
//! ```
//!
//! Keywords are case-sensitive. Blank lines and lines starting with `#` are
//! comments.

use stockroom_core::{InventoryError, InventoryResult, Quantity, Sku, WarehouseId};

/// A parsed, well-formed command. References are not checked yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddWarehouse {
        id: WarehouseId,
        limit: Option<Quantity>,
    },
    AddProduct {
        name: String,
        sku: Sku,
    },
    Stock {
        sku: Sku,
        warehouse: WarehouseId,
        quantity: Quantity,
    },
    Unstock {
        sku: Sku,
        warehouse: WarehouseId,
        quantity: Quantity,
    },
    ListProducts,
    ListWarehouses,
    ListWarehouse(WarehouseId),
}

/// Returns `true` for lines that carry no command.
pub fn is_comment(line: &str) -> bool {
    let line = line.trim();
    line.is_empty() || line.starts_with('#')
}

/// Parse one input line. Comments yield `Ok(None)`.
pub fn parse_line(line: &str) -> InventoryResult<Option<Command>> {
    if is_comment(line) {
        return Ok(None);
    }
    let line = line.trim();
    let tokens: Vec<&str> = line.split_whitespace().collect();

    let command = match tokens.as_slice() {
        ["ADD", "WAREHOUSE", id] => Command::AddWarehouse {
            id: id.parse()?,
            limit: None,
        },
        ["ADD", "WAREHOUSE", id, limit] => Command::AddWarehouse {
            id: id.parse()?,
            limit: Some(limit.parse()?),
        },
        ["ADD", "WAREHOUSE", ..] => {
            return Err(InventoryError::malformed("usage: ADD WAREHOUSE <id> [<limit>]"));
        }
        ["ADD", "PRODUCT", ..] => parse_add_product(skip_tokens(line, 2))?,
        ["ADD", ..] => {
            return Err(InventoryError::malformed("expected ADD WAREHOUSE or ADD PRODUCT"));
        }
        ["STOCK", sku, warehouse, quantity] => Command::Stock {
            sku: sku.parse()?,
            warehouse: warehouse.parse()?,
            quantity: quantity.parse()?,
        },
        ["UNSTOCK", sku, warehouse, quantity] => Command::Unstock {
            sku: sku.parse()?,
            warehouse: warehouse.parse()?,
            quantity: quantity.parse()?,
        },
        [verb @ ("STOCK" | "UNSTOCK"), ..] => {
            return Err(InventoryError::malformed(format!(
                "usage: {verb} <sku> <warehouse> <qty>"
            )));
        }
        ["LIST", "PRODUCTS"] => Command::ListProducts,
        ["LIST", "WAREHOUSES"] => Command::ListWarehouses,
        ["LIST", warehouse] => Command::ListWarehouse(warehouse.parse()?),
        ["LIST", ..] => {
            return Err(InventoryError::malformed(
                "usage: LIST PRODUCTS | LIST WAREHOUSES | LIST <warehouse>",
            ));
        }
        [verb, ..] => {
            return Err(InventoryError::malformed(format!("unknown command {verb:?}")));
        }
        [] => return Ok(None),
    };

    Ok(Some(command))
}

/// `"<name>" <sku>`; inner spacing of the name is kept as typed.
fn parse_add_product(rest: &str) -> InventoryResult<Command> {
    let usage = || InventoryError::malformed("usage: ADD PRODUCT \"<name>\" <sku>");

    let (quoted, sku) = rest.rsplit_once(char::is_whitespace).ok_or_else(usage)?;
    let quoted = quoted.trim();
    let name = quoted
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .ok_or_else(|| InventoryError::malformed("product name must be wrapped in double quotes"))?
        .trim();

    if name.is_empty() {
        return Err(InventoryError::malformed("product name cannot be empty"));
    }

    Ok(Command::AddProduct {
        name: name.to_string(),
        sku: sku.parse()?,
    })
}

/// The remainder of `line` after its first `n` whitespace-separated tokens.
fn skip_tokens(line: &str, n: usize) -> &str {
    let mut rest = line;
    for _ in 0..n {
        rest = rest.trim_start();
        let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        rest = &rest[end..];
    }
    rest.trim()
}
