//! Formatting helpers shared by list, favorites and details views.

/// Upper-case the first character: `pikachu` -> `Pikachu`.
pub fn display_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Catalogue number padded to three digits: `25` -> `#025`.
pub fn dex_number(id: u32) -> String {
    format!("#{:03}", id)
}

/// Normalize a free-text name or number query.
///
/// Returns `None` for blank input, in which case no lookup should be issued.
pub fn normalize_query(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}
