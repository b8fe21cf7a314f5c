use anyhow::Result;
use colored::Colorize;
use multiples_app::DIVISOR_TABLE;

use super::classify::paint;

pub fn run() -> Result<()> {
    println!("{:<10} {:<10} {}", "DIVISOR".bold(), "COLOR".bold(), "EXAMPLES".bold());

    for rule in DIVISOR_TABLE.iter() {
        let examples: Vec<String> = rule
            .sample_multiples(5)
            .iter()
            .map(u64::to_string)
            .collect();
        println!(
            "{:<10} {:<10} {}, ...",
            rule.divisor,
            paint(rule.color.name(), rule.color),
            examples.join(", ")
        );
    }

    println!();
    println!(
        "{} When several divisors match, the smallest one decides the color.",
        "ℹ".blue()
    );
    Ok(())
}
