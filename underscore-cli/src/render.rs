use nu_ansi_term::Color;

/// Paint a whole block red or green, leaving it untouched without color
pub fn paint(text: &str, ok: bool, use_color: bool) -> String {
    if !use_color || text.is_empty() {
        return text.to_string();
    }

    let color = if ok { Color::Green } else { Color::Red };
    text.lines()
        .map(|line| format!("{}\n", color.paint(line)))
        .collect()
}
