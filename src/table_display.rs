use crate::extract::ExtractionReport;
use crate::generate::{CampaignField, CampaignLineItem};
use crate::help::Tool;
use crate::items::LineItem;
use crate::storage::Theme;
use crate::text::{Comparison, TextCounts};
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};
use crossterm::style::Stylize;

fn accent(theme: Theme) -> Color {
    match theme {
        Theme::Dark => Color::Cyan,
        Theme::Light => Color::DarkBlue,
    }
}

fn new_table<I, S>(headers: I, theme: Theme) -> Table
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(
        headers
            .into_iter()
            .map(|h| {
                Cell::new(h.into())
                    .add_attribute(Attribute::Bold)
                    .fg(accent(theme))
            })
            .collect::<Vec<_>>(),
    );
    table
}

pub fn extraction_table(report: &ExtractionReport, label: &str, theme: Theme) -> Table {
    let mut table = new_table([label, "Count"], theme);
    for item in &report.items {
        table.add_row(vec![item.value.clone(), item.count.to_string()]);
    }
    table
}

pub fn counts_table(counts: &TextCounts, theme: Theme) -> Table {
    let mut table = new_table(["Metric", "Value"], theme);
    for (label, value) in counts.rows() {
        table.add_row(vec![label.to_string(), value.to_string()]);
    }
    table
}

pub fn comparison_table(comparison: &Comparison, theme: Theme) -> Table {
    let mut table = new_table(["Only in A", "Only in B", "In both"], theme);
    let rows = comparison
        .unique_a
        .len()
        .max(comparison.unique_b.len())
        .max(comparison.in_both.len());
    let cell = |list: &[String], i: usize| list.get(i).cloned().unwrap_or_default();
    for i in 0..rows {
        table.add_row(vec![
            cell(&comparison.unique_a, i),
            cell(&comparison.unique_b, i),
            cell(&comparison.in_both, i),
        ]);
    }
    table
}

pub fn line_list_table(items: &[LineItem], theme: Theme) -> Table {
    let mut table = new_table(["#", "Id", "Text", "Copied"], theme);
    for (i, item) in items.iter().enumerate() {
        let copied = if item.copied { "yes" } else { "" };
        table.add_row(vec![
            (i + 1).to_string(),
            item.id.clone(),
            item.text.clone(),
            copied.to_string(),
        ]);
    }
    table
}

pub fn campaign_table(rows: &[CampaignLineItem], theme: Theme) -> Table {
    let mut headers = vec!["#".to_string()];
    headers.extend(CampaignField::ALL.iter().map(|f| f.to_string()));
    let mut table = new_table(headers, theme);
    for (i, row) in rows.iter().enumerate() {
        let mut cells = vec![(i + 1).to_string()];
        cells.extend(
            CampaignField::ALL
                .iter()
                .map(|f| row.field(*f).unwrap_or("").to_string()),
        );
        table.add_row(cells);
    }
    table
}

pub fn help_text(tool: Tool) -> String {
    let mut text = format!("How to use the {}\n\n{}\n", tool.title(), tool.description());
    for faq in tool.faqs() {
        text.push_str(&format!("\n{}\n  {}\n", faq.question, faq.answer));
    }
    text
}

pub fn print_success(message: &str) {
    eprintln!("{}", message.green());
}

pub fn print_warning(message: &str) {
    eprintln!("{}", message.yellow());
}

pub fn print_error(message: &str) {
    eprintln!("{}", message.red());
}
