use colored::Colorize;
use sonority_core::{Category, Tally};

pub(crate) const RULE: &str = "-----------------------------------------";

/// Count block: one `Name = n` line per category, then the total.
pub(crate) fn count_lines(tally: &Tally, categories: &[Category]) -> Vec<String> {
    let mut lines = Vec::with_capacity(categories.len() + 4);
    lines.push(RULE.to_string());
    for category in categories {
        lines.push(format!("{} = {}", category.name(), tally.count(*category)));
    }
    lines.push(RULE.to_string());
    lines.push(format!("TOTAL = {}", tally.total()));
    lines.push(RULE.to_string());
    lines
}

/// Categories that occurred, most frequent first.
pub(crate) fn ranked_lines(tally: &Tally) -> Vec<String> {
    tally
        .ranked()
        .into_iter()
        .enumerate()
        .map(|(i, (category, n))| format!("{:>3}. {} ({})", i + 1, category.name(), n))
        .collect()
}

pub(crate) fn print_counts(title: &str, tally: &Tally, categories: &[Category], ranked: bool) {
    println!("\n{}", title.bold());
    for line in count_lines(tally, categories) {
        println!("{}", line);
    }
    if ranked && !tally.is_empty() {
        println!("{}", "Ranked:".dimmed());
        for line in ranked_lines(tally) {
            println!("{}", line);
        }
    }
}

pub(crate) fn print_rows(lines: &[String]) {
    for line in lines {
        println!("{}", line.dimmed());
    }
}

pub(crate) fn print_file_error(file: &str, err: &anyhow::Error) {
    eprintln!("  {} {}: {:#}", "x".red(), file, err);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_count_block() {
        let tally: Tally = [Category::Perfect, Category::Rest, Category::Perfect]
            .into_iter()
            .collect();
        let lines = count_lines(&tally, &[Category::Perfect, Category::Mixed, Category::Rest]);
        assert_eq!(
            lines,
            vec![
                RULE.to_string(),
                "Perfect = 2".to_string(),
                "Mixed = 0".to_string(),
                "Rest = 1".to_string(),
                RULE.to_string(),
                "TOTAL = 3".to_string(),
                RULE.to_string(),
            ]
        );
    }

    #[test]
    fn test_ranked_lines() {
        let tally: Tally = [Category::Imperfect, Category::Dissonant, Category::Dissonant]
            .into_iter()
            .collect();
        assert_eq!(
            ranked_lines(&tally),
            vec!["  1. Dissonant (2)", "  2. Imperfect (1)"]
        );
    }
}
