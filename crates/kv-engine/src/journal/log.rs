//! Journal storage and export.

use serde::{Deserialize, Serialize};

use super::entry::JournalEntry;

/// A chronological log of game events.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Journal {
    entries: Vec<JournalEntry>,
}

impl Journal {
    /// Create an empty journal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry to the journal.
    pub fn append(&mut self, entry: JournalEntry) {
        self.entries.push(entry);
    }

    /// Get all entries.
    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the journal is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Export the journal as markdown.
    pub fn export_markdown(&self) -> String {
        let mut out = String::from("# Game Journal\n\n");
        for entry in &self.entries {
            let line = match entry {
                JournalEntry::Roll {
                    player,
                    dice,
                    to,
                    cell,
                    ..
                } => format!(
                    "**{player}** rolled {} + {} and moved to **{cell}** ({to})",
                    dice[0], dice[1]
                ),
                JournalEntry::PassedStart { player, bonus, .. } => {
                    format!("*{player} passed Start*: +₽{bonus}")
                }
                JournalEntry::ChanceDrawn {
                    player,
                    card,
                    effect,
                    ..
                } => format!("**Chance** ({player}): {card} ({effect})"),
                JournalEntry::RentPaid {
                    payer,
                    owner,
                    cell,
                    amount,
                    ..
                } => format!("**Rent**: {payer} paid {owner} ₽{amount} for {cell}"),
                JournalEntry::Purchase {
                    player,
                    cell,
                    price,
                    ..
                } => format!("**Purchase**: {player} bought {cell} for ₽{price}"),
                JournalEntry::HouseBuilt {
                    player,
                    cell,
                    houses,
                    cost,
                    ..
                } => format!("**House**: {player} built house {houses} on {cell} (₽{cost})"),
                JournalEntry::HotelBuilt {
                    player,
                    cell,
                    cost,
                    ..
                } => format!("**Hotel**: {player} built a hotel on {cell} (₽{cost})"),
                JournalEntry::Chat { player, text, .. } => format!("> {player}: {text}"),
            };
            out.push_str(&line);
            out.push_str("\n\n");
        }
        out
    }

    /// Export the journal as plain text.
    pub fn export_text(&self) -> String {
        let mut out = String::from("Game Journal\n============\n\n");
        for entry in &self.entries {
            let time = entry.timestamp().format("%H:%M:%S");
            let line = match entry {
                JournalEntry::Roll {
                    player,
                    dice,
                    from,
                    to,
                    cell,
                    ..
                } => format!(
                    "{player} rolled {} + {}: {from} -> {to} ({cell})",
                    dice[0], dice[1]
                ),
                JournalEntry::PassedStart { player, bonus, .. } => {
                    format!("{player} passed Start: +{bonus}")
                }
                JournalEntry::ChanceDrawn {
                    player,
                    card,
                    effect,
                    ..
                } => format!("Chance ({player}): {card} [{effect}]"),
                JournalEntry::RentPaid {
                    payer,
                    owner,
                    cell,
                    amount,
                    ..
                } => format!("Rent: {payer} -> {owner}, {amount} for {cell}"),
                JournalEntry::Purchase {
                    player,
                    cell,
                    price,
                    ..
                } => format!("Purchase: {player} bought {cell} for {price}"),
                JournalEntry::HouseBuilt {
                    player,
                    cell,
                    houses,
                    cost,
                    ..
                } => format!("House: {player} built house {houses} on {cell} for {cost}"),
                JournalEntry::HotelBuilt {
                    player,
                    cell,
                    cost,
                    ..
                } => format!("Hotel: {player} built a hotel on {cell} for {cost}"),
                JournalEntry::Chat { player, text, .. } => format!("Chat: {player}: {text}"),
            };
            out.push_str(&format!("[{time}] {line}\n"));
        }
        out
    }

    /// Export the journal as pretty JSON.
    pub fn export_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
