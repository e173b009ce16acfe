//! Read-only members list view.

use member_admin_core::model::MemberSummary;

const HEADERS: [&str; 4] = ["Name", "Email", "Phone Number", "Role"];

/// Renders members as an aligned text table; missing fields show `N/A`.
pub fn render_members(members: &[MemberSummary]) -> String {
    let rows: Vec<[&str; 4]> = members.iter().map(MemberSummary::cells).collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &HEADERS, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    let rule: Vec<&str> = rule.iter().map(String::as_str).collect();
    push_line(&mut out, &rule, &widths);
    for row in &rows {
        push_line(&mut out, row, &widths);
    }
    if rows.is_empty() {
        out.push_str("(no members)\n");
    }
    out
}

fn push_line(out: &mut String, cells: &[&str], widths: &[usize; 4]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths.iter())
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect();
    out.push_str(line.join("  ").trim_end());
    out.push('\n');
}
