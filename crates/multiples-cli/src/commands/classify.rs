use anyhow::Result;
use colored::{ColoredString, Colorize};
use multiples_app::{
    ClassificationRecord, ClassificationResult, Config, DisplayColor, MultiplesApp, DIVISOR_TABLE,
};

pub async fn run(config: Config, bound: &str, json: bool, columns: u16) -> Result<()> {
    let app = MultiplesApp::new(config);
    let result = app.calculator().calculate(bound).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(result.as_ref())?);
        return Ok(());
    }

    print_grid(&result, usize::from(columns));
    println!();
    print_summary(&result);

    Ok(())
}

/// Apply a display color to terminal text
pub fn paint(text: &str, color: DisplayColor) -> ColoredString {
    match color {
        DisplayColor::Green => text.green(),
        DisplayColor::Red => text.red(),
        DisplayColor::Blue => text.blue(),
        DisplayColor::Neutral => text.normal(),
    }
}

fn format_cell(record: &ClassificationRecord, width: usize) -> String {
    let divisors: Vec<String> = record.divisors().iter().map(u64::to_string).collect();
    let tag = if divisors.is_empty() {
        String::new()
    } else {
        format!("({})", divisors.join(","))
    };
    format!("{:>width$} {:<7}", record.number(), tag, width = width)
}

fn print_grid(result: &ClassificationResult, columns: usize) {
    let width = result.bound().to_string().len();
    for row in result.records().chunks(columns) {
        let line: Vec<String> = row
            .iter()
            .map(|record| paint(&format_cell(record, width), record.color()).to_string())
            .collect();
        println!("{}", line.join("  ").trim_end());
    }
}

fn print_summary(result: &ClassificationResult) {
    for rule in DIVISOR_TABLE.iter() {
        println!(
            "  {} {}",
            paint(&format!("Múltiplos de {}:", rule.divisor), rule.color),
            result.count_for(rule.divisor)
        );
    }
}
