//! Plain-text KPI summary.

use super::tables::{DashboardTables, ProjectHighlight};
use std::fmt::Write;

/// Render the KPI row of the dashboard as text
///
/// **Public** - printed by `report --summary`
pub fn render_summary(tables: &DashboardTables) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Total Projects: {}", tables.total_projects);
    let _ = writeln!(out);

    write_ranking(&mut out, "Top Categories by Project Count", &tables.top_categories);
    write_ranking(&mut out, "Top Sub Categories by Project Count", &tables.top_sub_categories);
    write_ranking(&mut out, "Top Client Countries by Project Count", &tables.top_client_countries);

    write_highlight(&mut out, "Project with Highest Budget", tables.highest_budget.as_ref());
    write_highlight(&mut out, "Project with Lowest Budget", tables.lowest_budget.as_ref());

    let _ = writeln!(out, "Note: hourly projects are excluded from budget figures.");

    out
}

fn write_ranking(out: &mut String, heading: &str, entries: &[String]) {
    let _ = writeln!(out, "{}:", heading);
    if entries.is_empty() {
        let _ = writeln!(out, "  (no projects)");
    }
    for (i, entry) in entries.iter().enumerate() {
        let _ = writeln!(out, "  {}) {} {}", i + 1, medal(i + 1), entry);
    }
    let _ = writeln!(out);
}

fn write_highlight(out: &mut String, heading: &str, highlight: Option<&ProjectHighlight>) {
    let _ = writeln!(out, "{}:", heading);
    match highlight {
        Some(h) => {
            let _ = writeln!(out, "  Budget:       {} {:.2}", h.currency, h.budget);
            let _ = writeln!(out, "  Category:     {}", h.category);
            let _ = writeln!(out, "  Sub Category: {}", h.sub_category);
        }
        None => {
            let _ = writeln!(out, "  (no fixed-price projects in range)");
        }
    }
    let _ = writeln!(out);
}

fn medal(place: usize) -> &'static str {
    match place {
        1 => "🥇",
        2 => "🥈",
        3 => "🥉",
        _ => "  ",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::TableOptions;

    #[test]
    fn test_summary_mentions_rankings_and_budgets() {
        let mut tables = DashboardTables::build(&[], &[], &TableOptions::default());
        tables.total_projects = 3;
        tables.top_categories = vec!["Design".to_string(), "Writing".to_string()];
        tables.highest_budget = Some(ProjectHighlight {
            budget: 600.0,
            currency: "USD".to_string(),
            category: "Design".to_string(),
            sub_category: "Logo".to_string(),
            title: "Logo".to_string(),
            row: 1,
        });

        let text = render_summary(&tables);

        assert!(text.contains("Total Projects: 3"));
        assert!(text.contains("1) 🥇 Design"));
        assert!(text.contains("2) 🥈 Writing"));
        assert!(text.contains("USD 600.00"));
        assert!(text.contains("(no fixed-price projects in range)"));
    }
}
