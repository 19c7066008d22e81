//! Startup banner.

use crate::component::ComponentRole;
use crate::registry::Summary;

/// Render a boxed banner with the service identity and per-role counts.
///
/// Roles absent from `summary` are shown as 0.
pub fn render(service_name: &str, version: &str, summary: &Summary) -> String {
    let title = format!("{service_name} v{version}");
    let rows: Vec<String> = ComponentRole::ALL
        .iter()
        .map(|role| {
            let count = summary.get(role).copied().unwrap_or(0);
            format!("{:<12}{:>6}", format!("{role}s"), count)
        })
        .collect();

    let width = rows
        .iter()
        .map(|row| row.chars().count())
        .chain(std::iter::once(title.chars().count()))
        .max()
        .unwrap_or(0);
    let border = format!("+{}+", "-".repeat(width + 2));

    let mut out = String::new();
    out.push_str(&border);
    out.push('\n');
    out.push_str(&format!("| {title:<width$} |\n"));
    out.push_str(&border);
    out.push('\n');
    for row in rows {
        out.push_str(&format!("| {row:<width$} |\n"));
    }
    out.push_str(&border);
    out
}
