use serde::Serialize;

use crate::model::config::RenderConfig;
use crate::model::layout::{Layout, LayoutStats};
use crate::ops::check::CheckResult;
use crate::ops::slots::{Draggable, DropTarget};
use crate::util::unicode::fit_to_width;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct SlotsJson<'a> {
    pub drop_targets: &'a [DropTarget],
    pub draggables: &'a [Draggable],
}

pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

// ---------------------------------------------------------------------------
// Text rendering
// ---------------------------------------------------------------------------

/// Indented tree: one line per row, one per container with its blocks as
/// fixed-width bracketed labels.
pub fn render_layout(layout: &Layout, config: &RenderConfig) -> String {
    if layout.is_empty() {
        return "(empty layout)".to_string();
    }
    let mut lines = Vec::new();
    for (r, row) in layout.rows.iter().enumerate() {
        lines.push(format!(
            "row {}{} ({})",
            r,
            id_suffix(row.id, config),
            row.orientation
        ));
        for (c, container) in row.containers.iter().enumerate() {
            let mut line = format!(
                "  {}/{}{} ({})",
                r,
                c,
                id_suffix(container.id, config),
                container.orientation
            );
            for block in &container.blocks {
                line.push_str(&format!(
                    " [{}]{}",
                    fit_to_width(&one_line(&block.text), config.block_width),
                    id_suffix(block.id, config)
                ));
            }
            lines.push(line);
        }
    }
    lines.join("\n")
}

pub fn render_stats(stats: &LayoutStats) -> String {
    format!(
        "rows: {}\ncontainers: {}\nblocks: {}",
        stats.rows, stats.containers, stats.blocks
    )
}

pub fn render_slots(targets: &[DropTarget], items: &[Draggable]) -> String {
    let mut lines = vec!["Drop targets:".to_string()];
    for t in targets {
        lines.push(format!("  {:<8} {}", t.address.to_string(), t.address.kind()));
    }
    lines.push(String::new());
    lines.push("Draggables:".to_string());
    for d in items {
        lines.push(format!("  {:<9} {}", d.kind.to_string(), d.address));
    }
    lines.join("\n")
}

pub fn render_check(result: &CheckResult) -> String {
    let mut lines = Vec::new();
    if !result.errors.is_empty() {
        lines.push("Errors:".to_string());
        for err in &result.errors {
            lines.push(format!("  {}", err));
        }
    }
    if !result.warnings.is_empty() {
        if !result.errors.is_empty() {
            lines.push(String::new());
        }
        lines.push("Warnings:".to_string());
        for warn in &result.warnings {
            lines.push(format!("  {}", warn));
        }
    }
    if result.valid {
        lines.push("✓ layout is valid".to_string());
    } else {
        lines.push("✗ layout has errors".to_string());
    }
    lines.join("\n")
}

fn id_suffix(id: u64, config: &RenderConfig) -> String {
    if config.show_ids {
        format!(" #{}", id)
    } else {
        String::new()
    }
}

fn one_line(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}
