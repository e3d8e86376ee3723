use colored::Colorize;

use crate::models::Recommendation;

const BAR_WIDTH: usize = 20;

/// Format a text bar chart of sustainability scores.
pub fn format_sustainability_chart(recs: &[Recommendation]) -> String {
    let mut output = String::new();
    output.push_str(&format!("\n{}\n", "Sustainability".bold().green()));
    output.push_str(&format!("{}\n", "=".repeat(40)));

    if recs.is_empty() {
        output.push_str("  No data available.\n");
        return output;
    }

    for rec in recs {
        let filled = (rec.sustainability as usize * BAR_WIDTH + 50) / 100;
        let filled = filled.min(BAR_WIDTH);
        let bar = "\u{2588}".repeat(filled);
        let rest = "\u{2591}".repeat(BAR_WIDTH - filled);

        output.push_str(&format!(
            "  {:<10} {}{} {:>3}%\n",
            rec.crop,
            bar.green(),
            rest.dimmed(),
            rec.sustainability
        ));
    }

    output.push('\n');
    output
}

/// Print a text bar chart of sustainability scores.
pub fn print_sustainability_chart(recs: &[Recommendation]) {
    print!("{}", format_sustainability_chart(recs));
}
