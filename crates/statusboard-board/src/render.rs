//! Turns a [`StatusMapping`] into a display document.
//!
//! A [`Document`] is a platform-neutral description of an embed: title,
//! body, optional fields, footer and timestamp. The Discord layer converts
//! it to its own builder type.

use crate::mapping::StatusMapping;
use chrono::{DateTime, Utc};
use statusboard_common::truncate_string;
use tracing::warn;

/// Title of the status board.
pub const BOARD_TITLE: &str = "STATUS OF PRODUCTS";

/// Description shown under the title when nothing is tracked.
pub const BOARD_DESCRIPTION: &str =
    "View status for each product. Note that this is kept up to date by admins.";

/// Board accent colour, matching Discord's dark theme.
pub const BOARD_COLOUR: u32 = 0x002F_3136;

/// Footer placed next to the generation timestamp.
pub const BOARD_FOOTER: &str = "Last updated";

/// Placeholder field name for an empty board.
pub const EMPTY_BOARD_HEADING: &str = "No Products Tracked";

/// Placeholder field value telling admins how to start.
pub const EMPTY_BOARD_HINT: &str = "Use `/addgame` to start tracking products";

/// Title of the private list shown by `/listgames`.
pub const LIST_TITLE: &str = "📋 Tracked Games";

/// Accent colour of the list.
pub const LIST_COLOUR: u32 = 0x0058_65F2;

/// Discord rejects embed descriptions longer than this.
pub const MAX_DESCRIPTION_CHARS: usize = 4096;

/// Fits `body` into an embed description, warning when entries are cut off.
fn fit_description(body: &str, tracked: usize) -> String {
    let length = body.chars().count();
    if length > MAX_DESCRIPTION_CHARS {
        warn!(
            "Rendered text for {} entries is {} characters, truncating to {}; trailing entries are not shown",
            tracked, length, MAX_DESCRIPTION_CHARS
        );
    }
    truncate_string(body, MAX_DESCRIPTION_CHARS)
}

/// A named block inside a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentField {
    /// Field heading.
    pub name: String,
    /// Field body.
    pub value: String,
}

/// Rendered, non-interactive display document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Title line.
    pub title: String,
    /// Main body.
    pub description: Option<String>,
    /// Additional blocks below the body.
    pub fields: Vec<DocumentField>,
    /// Footer text.
    pub footer: Option<String>,
    /// Accent colour as 0xRRGGBB.
    pub colour: u32,
    /// When the document was generated.
    pub timestamp: Option<DateTime<Utc>>,
}

/// Renders the status board, stamped with the current time.
pub fn render(mapping: &StatusMapping) -> Document {
    render_at(mapping, Utc::now())
}

/// Renders the status board stamped with `generated_at`.
pub fn render_at(mapping: &StatusMapping, generated_at: DateTime<Utc>) -> Document {
    let (description, fields) = if mapping.is_empty() {
        (
            BOARD_DESCRIPTION.to_string(),
            vec![DocumentField {
                name: EMPTY_BOARD_HEADING.to_string(),
                value: EMPTY_BOARD_HINT.to_string(),
            }],
        )
    } else {
        let blocks: Vec<String> = mapping
            .sorted()
            .into_iter()
            .map(|(name, status)| format!("## {} {}\n• {}", status.symbol(), name, status.label()))
            .collect();
        (blocks.join("\n\n"), Vec::new())
    };

    Document {
        title: BOARD_TITLE.to_string(),
        description: Some(fit_description(&description, mapping.len())),
        fields,
        footer: Some(BOARD_FOOTER.to_string()),
        colour: BOARD_COLOUR,
        timestamp: Some(generated_at),
    }
}

/// Renders the compact list shown privately by `/listgames`.
pub fn render_list(mapping: &StatusMapping) -> Document {
    let lines: Vec<String> = mapping
        .sorted()
        .into_iter()
        .map(|(name, status)| format!("{} **{}** - {}", status.symbol(), name, status.label()))
        .collect();

    Document {
        title: LIST_TITLE.to_string(),
        description: Some(fit_description(&lines.join("\n"), mapping.len())),
        fields: Vec::new(),
        footer: Some(format!("Total: {} games", mapping.len())),
        colour: LIST_COLOUR,
        timestamp: None,
    }
}
