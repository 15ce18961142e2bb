//! Case conversion for route parameters.

/// Convert a kebab-case path segment to PascalCase.
///
/// `"real-estate-deal-makers"` becomes `"RealEstateDealMakers"`. Each word
/// is lowercased before its first character is capitalized, so mixed-case
/// input normalizes the same way as clean input.
pub fn kebab_to_pascal(input: &str) -> String {
    input
        .split('-')
        .map(|word| {
            let lower = word.to_lowercase();
            let mut chars = lower.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}
