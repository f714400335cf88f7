use std::path::Path;

use comfy_table::{ContentArrangement, Table};

pub fn run(board: Option<&Path>) -> Result<(), String> {
    let board = super::load_board(board)?;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "#", "Name", "Kind", "Group", "Price", "Rent", "Owner", "Buildings",
    ]);

    for cell in board.iter() {
        let (price, rent) = if cell.is_purchasable() {
            (format!("₽{}", cell.price), format!("₽{}", cell.current_rent()))
        } else {
            ("-".to_string(), "-".to_string())
        };
        let owner = cell
            .owner
            .map(|id| id.to_string())
            .unwrap_or_else(|| "-".to_string());
        table.add_row(vec![
            cell.position.to_string(),
            cell.name.clone(),
            cell.kind.to_string(),
            cell.color.to_string(),
            price,
            rent,
            owner,
            cell.buildings_label(),
        ]);
    }

    println!("{table}");
    println!();
    let for_sale = board.iter().filter(|c| c.is_for_sale()).count();
    println!("  {} cells, {for_sale} for sale", board.len());
    Ok(())
}
