//! Display formatting helpers shared by the list and detail screens.
//! Pure functions only; no I/O.

/// Format a raw API name into a human-friendly form: first character
/// upper-cased, internal hyphens replaced with spaces.
///
/// Examples: `pikachu` -> `Pikachu`, `great-tusk` -> `Great tusk`.
/// The empty string maps to itself.
pub fn format_name(raw: &str) -> String {
    let replaced = raw.replace('-', " ");
    let mut chars = replaced.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

/// Abbreviate the six canonical stat identifiers; anything else falls
/// back to [`format_name`].
pub fn format_stat_name(raw: &str) -> String {
    match raw {
        "hp" => "HP".to_string(),
        "attack" => "Attack".to_string(),
        "defense" => "Defense".to_string(),
        "special-attack" => "Sp. Atk".to_string(),
        "special-defense" => "Sp. Def".to_string(),
        "speed" => "Speed".to_string(),
        other => format_name(other),
    }
}

/// The API reports height in decimetres.
pub fn format_height(height: u32) -> String {
    format!("{:.1} m", height as f64 / 10.0)
}

/// The API reports weight in hectograms.
pub fn format_weight(weight: u32) -> String {
    format!("{:.1} kg", weight as f64 / 10.0)
}

/// National dex number padded to four digits: `25` -> `#0025`.
pub fn format_dex_number(id: u32) -> String {
    format!("#{:04}", id)
}

/// Wrap text into lines no longer than `width` (simple greedy algorithm).
pub fn text_to_lines(s: &str, width: usize) -> Vec<String> {
    let mut lines = vec![];
    let mut current = String::new();
    for word in s.split_whitespace() {
        if current.len() + word.len() + 1 > width && !current.is_empty() {
            lines.push(current.clone());
            current.clear();
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_name_capitalizes_and_replaces_hyphens() {
        assert_eq!(format_name("pikachu"), "Pikachu");
        assert_eq!(format_name("great-tusk"), "Great tusk");
        assert_eq!(format_name("mr-mime"), "Mr mime");
    }

    #[test]
    fn format_name_of_empty_is_empty() {
        assert_eq!(format_name(""), "");
    }

    #[test]
    fn stat_names_use_the_closed_map() {
        assert_eq!(format_stat_name("hp"), "HP");
        assert_eq!(format_stat_name("attack"), "Attack");
        assert_eq!(format_stat_name("defense"), "Defense");
        assert_eq!(format_stat_name("special-attack"), "Sp. Atk");
        assert_eq!(format_stat_name("special-defense"), "Sp. Def");
        assert_eq!(format_stat_name("speed"), "Speed");
    }

    #[test]
    fn unknown_stat_falls_back_to_format_name() {
        assert_eq!(
            format_stat_name("totally-unknown"),
            format_name("totally-unknown")
        );
    }

    #[test]
    fn physical_units_scale_by_a_tenth() {
        assert_eq!(format_weight(69), "6.9 kg");
        assert_eq!(format_height(7), "0.7 m");
        assert_eq!(format_height(40), "4.0 m");
    }

    #[test]
    fn dex_numbers_pad_to_four_digits() {
        assert_eq!(format_dex_number(25), "#0025");
        assert_eq!(format_dex_number(1000), "#1000");
    }

    #[test]
    fn text_wrapping_respects_width() {
        let lines = text_to_lines("alpha beta gamma delta", 11);
        assert_eq!(lines, vec!["alpha beta", "gamma delta"]);
    }
}
