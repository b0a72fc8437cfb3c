//! Terminal tables for the course data and test results.

use std::fmt::{self, Display, Formatter};

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::*;

use crate::{ColumnRef, CourseData, Mean, Statistic, SugarCategory, TestResult};

/// Most frequent label; ties go to the lower label.
fn mode(labels: &[SugarCategory]) -> Option<(SugarCategory, usize)> {
    SugarCategory::ALL
        .into_iter()
        .map(|c| (c, labels.iter().filter(|x| **x == c).count()))
        .filter(|(_, n)| *n > 0)
        .fold(None, |best, (c, n)| match best {
            Some((_, m)) if m >= n => best,
            _ => Some((c, n)),
        })
}

fn titled(title: &str) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .add_row(vec![Cell::new(title).set_alignment(CellAlignment::Center)]);
    table
}

fn body(header: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        // Column keys are long; never wrap them.
        .set_content_arrangement(ContentArrangement::Disabled)
        .set_header(
            header
                .iter()
                .map(|h| Cell::new(h).set_alignment(CellAlignment::Center))
                .collect::<Vec<_>>(),
        );
    table
}

impl CourseData {
    /// Summary of every column: kind, size, centre (mean or mode), range.
    pub fn display(&self) -> String {
        let mut table = body(&["Column", "Kind", "n", "Centre", "Min", "Max"]);

        for (key, column) in self.iter() {
            let (kind, centre, min, max) = match column {
                ColumnRef::Numeric(values) => {
                    let mean: f64 = Mean.compute(&values);
                    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
                    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
                    ("numeric", format!("{mean:.4}"), format!("{min}"), format!("{max}"))
                }
                ColumnRef::Categorical(labels) => {
                    let centre = mode(labels)
                        .map_or_else(|| "-".to_string(), |(label, n)| format!("{label} ({n})"));
                    ("categorical", centre, "-".to_string(), "-".to_string())
                }
            };

            table.add_row(vec![
                Cell::new(key).set_alignment(CellAlignment::Left),
                Cell::new(kind).set_alignment(CellAlignment::Left),
                Cell::new(column.len()).set_alignment(CellAlignment::Right),
                Cell::new(centre).set_alignment(CellAlignment::Right),
                Cell::new(min).set_alignment(CellAlignment::Right),
                Cell::new(max).set_alignment(CellAlignment::Right),
            ]);
        }

        format!("{}\n{}", titled("Course data"), table)
    }
}

impl Display for CourseData {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

impl TestResult {
    /// Two-row table of statistic and p-value, titled `name`.
    pub fn display(&self, name: &str) -> String {
        let p_display = if self.p_value < 0.0001 {
            "< 0.0001".to_string()
        } else {
            format!("{:.4}", self.p_value)
        };
        let verdict = if self.p_value < 0.05 {
            "🔴 Reject H₀ at 5%"
        } else if self.p_value < 0.10 {
            "🟠 Weak evidence against H₀"
        } else {
            "🟢 Cannot reject H₀"
        };

        let mut table = body(&["Metric", "Value", "Interpretation"]);
        table
            .add_row(vec![
                Cell::new("Statistic").set_alignment(CellAlignment::Left),
                Cell::new(format!("{:.4}", self.statistic)).set_alignment(CellAlignment::Right),
                Cell::new(""),
            ])
            .add_row(vec![
                Cell::new("p-value").set_alignment(CellAlignment::Left),
                Cell::new(p_display).set_alignment(CellAlignment::Right),
                Cell::new(verdict).set_alignment(CellAlignment::Left),
            ]);

        format!("{}\n{}", titled(name), table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{define_data, keys};

    #[test]
    fn summary_lists_every_column() {
        let text = define_data().to_string();
        for (key, _, _) in crate::LAYOUT {
            assert!(text.contains(key), "{key}");
        }
        assert!(text.contains("S1 (12)"));
        assert!(text.contains("60.0500"));
        assert!(text.contains(keys::SAMPLE_PROPORTIONS));
    }

    #[test]
    fn mode_prefers_lower_label_on_ties() {
        use SugarCategory::*;
        assert_eq!(mode(&[S3, S2, S3, S2]), Some((S2, 2)));
        assert_eq!(mode(&[]), None);
    }

    #[test]
    fn test_result_table_reports_verdict() {
        let text = TestResult { statistic: 2.5, p_value: 0.00001 }.display("t-test");
        assert!(text.contains("t-test"));
        assert!(text.contains("< 0.0001"));
        assert!(text.contains("Reject"));
    }
}
