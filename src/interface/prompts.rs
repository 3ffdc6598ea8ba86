use dialoguer::{Confirm, Select};
use strsim::jaro_winkler;

use crate::error::{CoachError, Result};
use crate::models::Drink;
use crate::state::find_drink;

/// Resolve a drink name against the catalog, with fuzzy fallback.
///
/// Exact id/name matches win; otherwise jaro-winkler candidates above 0.7
/// are offered for confirmation or selection.
pub fn prompt_drink<'a>(catalog: &'a [Drink], query: &str) -> Result<&'a Drink> {
    if let Some(drink) = find_drink(catalog, query) {
        return Ok(drink);
    }

    let mut candidates: Vec<(&Drink, f64)> = catalog
        .iter()
        .map(|d| {
            let score = jaro_winkler(&d.name.to_lowercase(), &query.to_lowercase())
                .max(jaro_winkler(&d.key(), &query.to_lowercase()));
            (d, score)
        })
        .filter(|(_, score)| *score > 0.7)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    if candidates.is_empty() {
        return Err(CoachError::DrinkNotFound(query.to_string()));
    }

    if candidates.len() == 1 {
        let drink = candidates[0].0;
        let confirm = Confirm::new()
            .with_prompt(format!("Did you mean '{}'?", drink.name))
            .default(true)
            .interact()?;

        return if confirm {
            Ok(drink)
        } else {
            Err(CoachError::DrinkNotFound(query.to_string()))
        };
    }

    // Multiple matches - let the user pick
    let options: Vec<String> = candidates
        .iter()
        .take(5)
        .map(|(d, _)| d.name.clone())
        .collect();

    let mut selection_options = options.clone();
    selection_options.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt("Which did you mean?")
        .items(&selection_options)
        .default(0)
        .interact()?;

    if selection < options.len() {
        Ok(candidates[selection].0)
    } else {
        Err(CoachError::DrinkNotFound(query.to_string()))
    }
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
