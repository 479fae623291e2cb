use super::entity::Ingredient;

/// Parse a free-text ingredient block.
///
/// One ingredient per non-blank line, `Name: Measure`, split on the first `:`
/// with both sides trimmed. A line without `:` is still an ingredient, with
/// no measure. An empty measure (`Beef:`) is treated the same way.
pub fn parse_ingredients(text: &str) -> Vec<Ingredient> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(parse_line)
        .collect()
}

fn parse_line(line: &str) -> Ingredient {
    match line.split_once(':') {
        Some((name, measure)) => {
            let measure = measure.trim();
            Ingredient::new(
                name.trim(),
                (!measure.is_empty()).then(|| measure.to_string()),
            )
        }
        None => Ingredient::new(line, None),
    }
}

/// Inverse of `parse_ingredients`, used to pre-fill the edit form
pub fn format_ingredients(ingredients: &[Ingredient]) -> String {
    ingredients
        .iter()
        .map(|ingredient| match &ingredient.measure {
            Some(measure) => format!("{}: {}", ingredient.ingredient_name, measure),
            None => ingredient.ingredient_name.clone(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}
