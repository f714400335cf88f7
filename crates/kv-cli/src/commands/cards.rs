use comfy_table::{ContentArrangement, Table};

use kv_engine::CHANCE_CARDS;

pub fn run() -> Result<(), String> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Card", "Effect"]);

    for card in &CHANCE_CARDS {
        table.add_row(vec![
            card.id.to_string(),
            card.text.to_string(),
            card.effect.to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} cards, drawn with replacement", CHANCE_CARDS.len());
    Ok(())
}
