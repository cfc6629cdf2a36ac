use crate::stats::LanguageStat;

const COLUMNS: [&str; 4] = [
    "Language",
    "Vacancies found",
    "Vacancies processed",
    "Average salary",
];

/// Render statistic rows as a bordered ASCII grid under a title line.
pub fn build_table(title: &str, stats: &[LanguageStat]) -> String {
    let mut rows: Vec<[String; 4]> = Vec::with_capacity(stats.len() + 1);
    rows.push(COLUMNS.map(String::from));
    for stat in stats {
        rows.push([
            stat.language.clone(),
            stat.total_found.to_string(),
            stat.processed.to_string(),
            stat.average_salary.to_string(),
        ]);
    }

    let mut widths = [0usize; 4];
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let border = widths.iter().fold(String::from("+"), |mut line, width| {
        line.push_str(&"-".repeat(width + 2));
        line.push('+');
        line
    });

    let mut table = format!("{title}\n{border}\n");
    for (i, row) in rows.iter().enumerate() {
        table.push('|');
        for (&width, cell) in widths.iter().zip(row) {
            table.push_str(&format!(" {cell:<width$} |"));
        }
        table.push('\n');
        if i == 0 {
            table.push_str(&border);
            table.push('\n');
        }
    }
    table.push_str(&border);
    table
}
