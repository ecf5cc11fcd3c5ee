//! Line colour lookup.

/// Colour for lines missing from the table.
pub const FALLBACK_COLOR: &str = "#666666";

/// Display colour for a subway line identifier.
///
/// Unknown lines get [`FALLBACK_COLOR`].
pub fn line_color(line: &str) -> &'static str {
    match line {
        "1" => "#0052A4",
        "2" => "#00A84D",
        "3" => "#EF7C1C",
        "4" => "#00A5DE",
        "5" => "#996CAC",
        "6" => "#CD7C2F",
        "7" => "#747F00",
        "8" => "#E6186C",
        "9" => "#BDB092",
        "분당" => "#FABE00",
        "수인분당" => "#FABE00",
        "경춘" => "#0C8E72",
        "신분당" => "#D4003B",
        "공항철도" => "#0065A3",
        "경의중앙" => "#77C4A3",
        "수도권" => "#F5A200",
        _ => FALLBACK_COLOR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_lines_resolve() {
        assert_eq!(line_color("2"), "#00A84D");
        assert_eq!(line_color("신분당"), "#D4003B");
    }

    #[test]
    fn unknown_lines_fall_back_to_gray() {
        assert_eq!(line_color("99"), "#666666");
        assert_eq!(line_color(""), FALLBACK_COLOR);
    }
}
