use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::models::Recipe;

/// Integer or decimal number; the separator may be a period or a comma.
fn quantity_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"\d+(?:[.,]\d+)?").ok())
        .as_ref()
}

/// Rescales every number in `line` by `new / old`, leaving all other text untouched.
///
/// Results carry at most two decimals with trailing zeros removed, and keep a
/// comma separator when the source number used one (`1,5kg` -> `2,25kg`).
pub fn scale_quantity_line(line: &str, old: u32, new: u32) -> String {
    if old == 0 || new == 0 || old == new {
        return line.to_string();
    }
    let Some(pattern) = quantity_pattern() else {
        return line.to_string();
    };
    let ratio = f64::from(new) / f64::from(old);

    pattern
        .replace_all(line, |caps: &Captures| {
            let token = &caps[0];
            match token.replace(',', ".").parse::<f64>() {
                Ok(value) => format_quantity(value * ratio, token.contains(',')),
                Err(_) => token.to_string(),
            }
        })
        .into_owned()
}

fn format_quantity(value: f64, comma: bool) -> String {
    // Ties round away from zero; `{:.2}` alone would round them to even.
    let rounded = (value * 100.0).round() / 100.0;
    let fixed = format!("{:.2}", rounded);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if comma {
        trimmed.replace('.', ",")
    } else {
        trimmed.to_string()
    }
}

/// Ingredient lines of `recipe` scaled to `servings`.
///
/// Without a base serving count there is nothing to scale from and the
/// original lines come back as they are.
pub fn update_ingredient_quantities(recipe: &Recipe, servings: u32) -> Vec<String> {
    match recipe.base_servings() {
        Some(base) => recipe
            .ingredients
            .iter()
            .map(|line| scale_quantity_line(line, base, servings))
            .collect(),
        None => recipe.ingredients.clone(),
    }
}
