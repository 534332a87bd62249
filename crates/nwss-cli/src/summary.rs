//! Terminal tables for validation results and the field dictionary.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use nwss_model::{Category, FieldKind, FieldSpec, RecordSchema};

use crate::pipeline::ValidationRun;

pub fn print_summary(run: &ValidationRun) {
    println!("Validation date: {}", run.context.today());
    println!("{}", summary_table(run));
    if let Some(table) = issue_table(run) {
        println!();
        println!("Issues:");
        println!("{table}");
    }
}

/// One row per input file plus a total row.
pub fn summary_table(run: &ValidationRun) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Records"),
        header_cell("Valid"),
        header_cell("Invalid"),
        header_cell("Field errors"),
        header_cell("Rule violations"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 1..6 {
        align_column(&mut table, index, CellAlignment::Right);
    }

    let mut totals = [0usize; 4];
    for file in &run.files {
        let batch = &file.batch;
        let invalid = batch.invalid_count();
        let counts = [
            batch.len() - invalid,
            invalid,
            batch.field_error_count(),
            batch.rule_violation_count(),
        ];
        for (total, count) in totals.iter_mut().zip(counts) {
            *total += count;
        }
        table.add_row(vec![
            Cell::new(file.display_name()),
            Cell::new(batch.len()),
            Cell::new(counts[0]).fg(Color::Green),
            count_cell(counts[1], Color::Red),
            count_cell(counts[2], Color::Red),
            count_cell(counts[3], Color::Yellow),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(run.record_count()).add_attribute(Attribute::Bold),
        Cell::new(totals[0]).add_attribute(Attribute::Bold),
        count_cell(totals[1], Color::Red).add_attribute(Attribute::Bold),
        count_cell(totals[2], Color::Red).add_attribute(Attribute::Bold),
        count_cell(totals[3], Color::Yellow).add_attribute(Attribute::Bold),
    ]);
    table
}

/// Every field error and rule violation, or `None` for a clean run.
pub fn issue_table(run: &ValidationRun) -> Option<Table> {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Record"),
        header_cell("Category"),
        header_cell("Check"),
        header_cell("Fields"),
        header_cell("Message"),
        header_cell("Value"),
    ]);
    apply_issue_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);

    let mut rows = 0usize;
    for file in &run.files {
        let name = file.display_name();
        for record in &file.batch.records {
            for error in &record.field_errors {
                table.add_row(vec![
                    Cell::new(&name),
                    Cell::new(record.index + 1),
                    category_cell(error.category()),
                    Cell::new(error.kind.label()),
                    Cell::new(&error.field),
                    Cell::new(&error.message),
                    error
                        .value
                        .as_deref()
                        .map_or_else(|| dim_cell("-"), Cell::new),
                ]);
                rows += 1;
            }
            for violation in &record.rule_violations {
                table.add_row(vec![
                    Cell::new(&name),
                    Cell::new(record.index + 1),
                    category_cell(Category::Consistency),
                    Cell::new(&violation.rule),
                    Cell::new(violation.fields.join(", ")),
                    Cell::new(&violation.message),
                    dim_cell("-"),
                ]);
                rows += 1;
            }
        }
    }
    (rows > 0).then_some(table)
}

/// The data dictionary, grouped in record order.
pub fn fields_table(schema: &RecordSchema) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Group"),
        header_cell("Field"),
        header_cell("Kind"),
        header_cell("Required"),
        header_cell("Nullable"),
        header_cell("Constraints"),
        header_cell("Unit"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Center);
    align_column(&mut table, 4, CellAlignment::Center);

    for group in schema.groups() {
        for name in &group.fields {
            let Some(field) = schema.field(name) else {
                continue;
            };
            table.add_row(vec![
                Cell::new(&group.name),
                Cell::new(&field.name).add_attribute(Attribute::Bold),
                Cell::new(field.kind.as_str()),
                flag_cell(field.required),
                flag_cell(field.nullable),
                Cell::new(describe_constraints(field)),
                field.unit.as_deref().map_or_else(|| dim_cell("-"), Cell::new),
            ]);
        }
    }
    table
}

/// Short constraint summary, e.g. `one of: jurisdiction; length 5..5`.
pub fn describe_constraints(field: &FieldSpec) -> String {
    let mut parts = Vec::new();
    if let FieldKind::Enum(set) = &field.kind {
        parts.push(format!("one of: {set}"));
    }
    let constraints = &field.constraints;
    if let Some(range) = &constraints.range {
        parts.push(range.describe());
    }
    if let Some(length) = &constraints.length {
        let bound = |value: Option<usize>| value.map(|v| v.to_string()).unwrap_or_default();
        parts.push(format!("length {}..{}", bound(length.min), bound(length.max)));
    }
    if let Some(pattern) = &constraints.pattern {
        parts.push(format!("pattern {}", pattern.as_str()));
    }
    if constraints.not_in_future {
        parts.push("not in future".to_string());
    }
    if parts.is_empty() {
        "-".to_string()
    } else {
        parts.join("; ")
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value.to_string()).fg(Color::DarkGrey)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn flag_cell(flag: bool) -> Cell {
    if flag {
        Cell::new("✓").fg(Color::Green)
    } else {
        dim_cell("-")
    }
}

fn category_cell(category: Category) -> Cell {
    let color = match category {
        Category::Presence => Color::Red,
        Category::Format => Color::Magenta,
        Category::Terminology => Color::Yellow,
        Category::Limit => Color::Blue,
        Category::Consistency => Color::Cyan,
    };
    Cell::new(category.label()).fg(color)
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(160);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_issue_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(200);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
