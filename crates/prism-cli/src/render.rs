//! Plain-text tables.

use prism_core::Page;
use prism_models::{
    Assignment, ConfirmedCheater, Course, FlaggedStudent, Semester, SimilarityPair, Student,
};

fn pad_row<S: AsRef<str>>(cells: &[S], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell.as_ref()))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

/// Left-aligned columns padded to the widest cell.
pub fn table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    let mut out = Vec::with_capacity(rows.len() + 2);
    out.push(pad_row(headers, &widths));
    out.push(pad_row(&rule, &widths));
    out.extend(rows.iter().map(|row| pad_row(row, &widths)));
    out.join("\n")
}

fn or_dash<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

pub fn semesters(items: &[Semester]) -> String {
    let rows: Vec<Vec<String>> = items
        .iter()
        .map(|s| vec![s.id.to_string(), s.name.clone(), or_dash(s.year), or_dash(s.term.as_deref())])
        .collect();
    table(&["ID", "NAME", "YEAR", "TERM"], &rows)
}

pub fn courses(items: &[Course]) -> String {
    let rows: Vec<Vec<String>> = items
        .iter()
        .map(|c| vec![c.id.to_string(), c.display_name()])
        .collect();
    table(&["ID", "COURSE"], &rows)
}

pub fn assignments(items: &[Assignment]) -> String {
    let rows: Vec<Vec<String>> = items
        .iter()
        .map(|a| {
            vec![
                a.id.to_string(),
                a.label(),
                or_dash(a.due_date),
                or_dash(a.language.as_deref()),
            ]
        })
        .collect();
    table(&["ID", "ASSIGNMENT", "DUE", "LANGUAGE"], &rows)
}

pub fn students(items: &[Student]) -> String {
    let rows: Vec<Vec<String>> = items
        .iter()
        .map(|s| vec![s.id.to_string(), s.full_name(), or_dash(s.email.as_deref())])
        .collect();
    table(&["ID", "NAME", "EMAIL"], &rows)
}

pub fn pairs(items: &[SimilarityPair]) -> String {
    let rows: Vec<Vec<String>> = items
        .iter()
        .map(|p| {
            vec![
                p.id.to_string(),
                format!("{:.0}%", p.percentage),
                p.submission_id_1.to_string(),
                p.submission_id_2.to_string(),
                p.file_name.clone(),
            ]
        })
        .collect();
    table(&["ID", "MATCH", "SUBMISSION A", "SUBMISSION B", "FILE"], &rows)
}

/// Pairs plus a `page N of M` footer.
pub fn pair_page(page: &Page<SimilarityPair>, page_number: u32, page_size: u32) -> String {
    let pages = page.count.div_ceil(u64::from(page_size.max(1))).max(1);
    format!(
        "{}\n\npage {page_number} of {pages} ({} pairs)",
        pairs(&page.results),
        page.count
    )
}

pub fn flagged(items: &[FlaggedStudent]) -> String {
    let rows: Vec<Vec<String>> = items
        .iter()
        .map(|f| {
            vec![
                f.id.to_string(),
                f.student.to_string(),
                or_dash(f.similarity),
                if f.generative_ai { "yes" } else { "no" }.to_string(),
            ]
        })
        .collect();
    table(&["ID", "STUDENT", "PAIR", "GEN AI"], &rows)
}

pub fn confirmed(items: &[ConfirmedCheater]) -> String {
    let rows: Vec<Vec<String>> = items
        .iter()
        .map(|c| {
            vec![
                c.id.to_string(),
                c.student.to_string(),
                c.assignment.to_string(),
                format!("{}%", c.threshold_used),
                c.confirmed_date.to_string(),
            ]
        })
        .collect();
    table(&["ID", "STUDENT", "ASSIGNMENT", "THRESHOLD", "CONFIRMED"], &rows)
}
