pub fn format_weight(weight: f64) -> String {
    if weight > 0.0 && weight < 0.05 {
        "<0.1".to_string()
    } else {
        format!("{weight:.1}")
    }
}

/// Gene symbol used to group every state of a gene: ASCII alphanumerics only,
/// uppercased.
pub fn gene_label(text: &str) -> String {
    text.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|ch| ch.to_ascii_uppercase())
        .collect()
}

pub fn safe_property(text: &str) -> String {
    text.to_uppercase()
        .chars()
        .map(|ch| match ch {
            ' ' | '/' | '\\' | '#' | '.' | ':' | ';' | '"' | '\'' => '_',
            other => other,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gene_label_strips_punctuation() {
        assert_eq!(gene_label("tp53"), "TP53");
        assert_eq!(gene_label("HLA-DRB1"), "HLADRB1");
        assert_eq!(gene_label("  "), "");
    }

    #[test]
    fn safe_property_replaces_separators() {
        assert_eq!(safe_property("Cancer Cell Map"), "CANCER_CELL_MAP");
        assert_eq!(safe_property("nci.nature:pid"), "NCI_NATURE_PID");
    }

    #[test]
    fn format_weight_marks_tiny_values() {
        assert_eq!(format_weight(0.0), "0.0");
        assert_eq!(format_weight(f64::MIN_POSITIVE), "<0.1");
        assert_eq!(format_weight(62.54), "62.5");
    }
}
