//! Self-contained HTML for the home and calculator pages.
//!
//! Pages carry their own inline CSS and load nothing external.

use crate::classifier::{ClassificationRecord, ClassificationResult};
use crate::types::divisor::{DisplayColor, DIVISOR_TABLE};

const STYLE: &str = r#"
body { margin: 0; font-family: system-ui, sans-serif; background: #f9fafb; }
nav { background: #1f2937; padding: 1rem; }
nav .bar { max-width: 80rem; margin: 0 auto; display: flex; justify-content: space-between; align-items: center; }
nav a { color: #d1d5db; text-decoration: none; margin-left: 1.5rem; }
nav a:hover { color: #f3f4f6; }
nav a.brand { color: #22c55e; font-weight: bold; font-size: 1.25rem; margin-left: 0; }
main { max-width: 80rem; margin: 0 auto; padding: 2rem 1rem; }
.card { background: #fff; border-radius: 0.5rem; box-shadow: 0 10px 15px rgba(0,0,0,0.1); padding: 2rem; }
h1, h2 { color: #111827; }
p { color: #4b5563; }
.cards { display: grid; grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr)); gap: 1.5rem; }
.example { border-radius: 0.5rem; padding: 1.5rem; }
.example.green { background: #f0fdf4; color: #166534; }
.example.red { background: #fef2f2; color: #991b1b; }
.example.blue { background: #eff6ff; color: #1e40af; }
form { display: flex; gap: 1rem; }
form input { flex: 1; padding: 0.5rem 1rem; border: 1px solid #d1d5db; border-radius: 0.5rem; }
form button { background: #22c55e; color: #fff; border: 0; padding: 0.5rem 1.5rem; border-radius: 0.5rem; }
form button:hover { background: #16a34a; }
.error { margin-top: 1rem; color: #b91c1c; }
.grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(9rem, 1fr)); gap: 1rem; }
.cell { padding: 0.75rem; border: 1px solid #e5e7eb; border-radius: 0.5rem; text-align: center; }
.cell .number { font-size: 1.125rem; font-weight: bold; }
.cell .divisors { color: #6b7280; font-size: 0.875rem; }
.text-green-500 { color: #22c55e; }
.text-red-500 { color: #ef4444; }
.text-blue-500 { color: #3b82f6; }
.text-black { color: #000; }
"#;

pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="es">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>{STYLE}</style>
</head>
<body>
<nav><div class="bar">
<a class="brand" href="/">MathApp</a>
<div><a href="/">Inicio</a><a href="/calculator">Calculadora</a></div>
</div></nav>
<main><div class="card">
{body}
</div></main>
</body>
</html>
"#,
        title = escape_html(title),
    )
}

fn example_class(color: DisplayColor) -> &'static str {
    match color {
        DisplayColor::Neutral => "",
        other => other.name(),
    }
}

/// Home page explaining what multiples are
pub fn home_page() -> String {
    let cards: String = DIVISOR_TABLE
        .iter()
        .map(|rule| {
            let samples: Vec<String> = rule
                .sample_multiples(5)
                .iter()
                .map(u64::to_string)
                .collect();
            format!(
                "<div class=\"example {}\"><h3>{}</h3><p>{}, ...</p></div>\n",
                example_class(rule.color),
                escape_html(rule.label),
                samples.join(", ")
            )
        })
        .collect();

    let body = format!(
        r#"<h1>Matemáticas y Múltiplos</h1>
<p>Bienvenido a nuestra aplicación de matemáticas. Aquí aprenderás sobre
múltiplos y sus propiedades de una manera interactiva y visual.</p>
<h2>¿Qué son los múltiplos?</h2>
<p>Los múltiplos son números que resultan de multiplicar un número por
los números naturales. En esta aplicación, trabajaremos
específicamente con múltiplos de 3, 5 y 7.</p>
<div class="cards">
{cards}</div>"#
    );

    layout("MathApp", &body)
}

fn render_cell(record: &ClassificationRecord) -> String {
    let divisors = if record.divisors().is_empty() {
        String::new()
    } else {
        let list: Vec<String> = record.divisors().iter().map(u64::to_string).collect();
        format!(
            "<div class=\"divisors\">Múltiplo de: {}</div>",
            list.join(", ")
        )
    };

    format!(
        "<div class=\"cell\"><span class=\"number {}\">{}</span>{}</div>\n",
        record.color().css_class(),
        record.number(),
        divisors
    )
}

/// Result grid, one cell per record
pub fn render_grid(result: &ClassificationResult) -> String {
    let cells: String = result.iter().map(render_cell).collect();
    format!("<div class=\"results\"><h3>Resultados:</h3>\n<div class=\"grid\">\n{cells}</div></div>")
}

/// Calculator page. `error` replaces the grid when input was rejected.
pub fn calculator_page(
    input: &str,
    max_bound: u64,
    result: Option<&ClassificationResult>,
    error: Option<&str>,
) -> String {
    let mut body = format!(
        r#"<h2>Calculadora de Múltiplos</h2>
<form method="post" action="/calculator">
<input type="number" name="number" value="{}" placeholder="Ingresa un número" min="0" max="{}" required>
<button type="submit">Calcular</button>
</form>
"#,
        escape_html(input),
        max_bound
    );

    match (error, result) {
        (Some(error), _) => {
            body.push_str(&format!("<p class=\"error\">{}</p>", escape_html(error)));
        }
        (None, Some(result)) if !result.is_empty() => body.push_str(&render_grid(result)),
        _ => {}
    }

    layout("Calculadora de Múltiplos", &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<script>alert("x&y")</script>"#),
            "&lt;script&gt;alert(&quot;x&amp;y&quot;)&lt;/script&gt;"
        );
    }

    #[test]
    fn test_home_page_lists_examples() {
        let page = home_page();
        assert!(page.contains("Múltiplos de 3"));
        assert!(page.contains("3, 6, 9, 12, 15, ..."));
        assert!(page.contains("5, 10, 15, 20, 25, ..."));
        assert!(page.contains("7, 14, 21, 28, 35, ..."));
    }

    #[test]
    fn test_cells_carry_color_and_divisors() {
        let result = classify(15);
        let html = render_grid(&result);

        assert!(html.contains(
            "<span class=\"number text-green-500\">15</span><div class=\"divisors\">Múltiplo de: 3, 5</div>"
        ));
        assert!(html.contains("<span class=\"number text-red-500\">10</span>"));
        assert!(html.contains("<span class=\"number text-blue-500\">14</span>"));
        assert!(html.contains("<span class=\"number text-black\">1</span></div>"));
    }

    #[test]
    fn test_error_hides_grid_and_escapes_input() {
        let result = classify(3);
        let page = calculator_page("<b>", 100, Some(&result), Some("bad input"));

        assert!(page.contains("value=\"&lt;b&gt;\""));
        assert!(page.contains("<p class=\"error\">bad input</p>"));
        assert!(!page.contains("Resultados:"));
    }

    #[test]
    fn test_empty_calculator_page() {
        let page = calculator_page("", 250, None, None);
        assert!(page.contains("Calculadora de Múltiplos"));
        assert!(page.contains("min=\"0\" max=\"250\""));
        assert!(!page.contains("Resultados:"));
    }
}
