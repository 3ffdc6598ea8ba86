use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{CoachError, Result};
use crate::models::{Category, Drink};

/// Built-in drink catalog. Loaded once; read-only for the process
/// lifetime.
pub fn default_catalog() -> Vec<Drink> {
    vec![
        Drink::new("drip_coffee", "Drip Coffee", Category::Brewed, 95.0),
        Drink::new("pour_over", "Pour Over", Category::Brewed, 120.0),
        Drink::new("french_press", "French Press", Category::Brewed, 107.0),
        Drink::new("decaf_coffee", "Decaf Coffee", Category::Brewed, 2.0).with_tags(&["decaf"]),
        Drink::new("espresso", "Espresso", Category::Espresso, 75.0),
        Drink::new("americano", "Americano", Category::Espresso, 75.0),
        Drink::new("macchiato", "Macchiato", Category::Espresso, 75.0),
        Drink::new("cortado", "Cortado", Category::Espresso, 75.0),
        Drink::new("latte", "Latte", Category::Milk, 80.0),
        Drink::new("cappuccino", "Cappuccino", Category::Milk, 75.0),
        Drink::new("flat_white", "Flat White", Category::Milk, 130.0),
        Drink::new("mocha", "Mocha", Category::Milk, 90.0),
        Drink::new("cold_brew", "Cold Brew", Category::Cold, 155.0),
        Drink::new("iced_coffee", "Iced Coffee", Category::Cold, 90.0),
        Drink::new("nitro_cold_brew", "Nitro Cold Brew", Category::Cold, 215.0),
        Drink::new("black_tea", "Black Tea", Category::Tea, 47.0),
        Drink::new("green_tea", "Green Tea", Category::Tea, 28.0).with_tags(&["low_caffeine"]),
        Drink::new("white_tea", "White Tea", Category::Tea, 18.0).with_tags(&["low_caffeine"]),
        Drink::new("herbal_tea", "Herbal Tea", Category::Tea, 0.0)
            .with_tags(&["decaf", "low_caffeine"]),
        Drink::new("chai_latte", "Chai Latte", Category::Tea, 50.0).with_tags(&["low_caffeine"]),
        Drink::new("matcha_latte", "Matcha Latte", Category::Specialty, 70.0),
        Drink::new("hot_chocolate", "Hot Chocolate", Category::Specialty, 5.0)
            .with_tags(&["low_caffeine"]),
        Drink::new("golden_milk", "Golden Milk", Category::Specialty, 0.0)
            .with_tags(&["decaf", "low_caffeine"]),
        Drink::new("energy_drink", "Energy Drink", Category::Energy, 160.0),
        Drink::new("energy_shot", "Energy Shot", Category::Energy, 200.0),
        Drink::new("cola", "Cola", Category::Soda, 34.0).with_tags(&["low_caffeine"]),
        Drink::new("citrus_soda", "Citrus Soda", Category::Soda, 0.0)
            .with_tags(&["decaf", "low_caffeine"]),
    ]
}

/// Load a catalog from a JSON file.
///
/// The catalog is an ordered sequence: file order is preserved.
/// Duplicates collapse onto their first position with the last
/// occurrence's values. Entries with negative caffeine are rejected, and
/// an empty catalog is an error: nothing downstream can work without
/// drinks.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<Drink>> {
    let content = fs::read_to_string(path)?;
    let drinks: Vec<Drink> = serde_json::from_str(&content)?;

    let mut catalog: Vec<Drink> = Vec::with_capacity(drinks.len());
    let mut positions: HashMap<String, usize> = HashMap::new();
    for drink in drinks {
        if !drink.is_valid() {
            return Err(CoachError::InvalidInput(format!(
                "invalid catalog entry: {}",
                drink.id
            )));
        }
        match positions.get(&drink.key()) {
            Some(&i) => catalog[i] = drink,
            None => {
                positions.insert(drink.key(), catalog.len());
                catalog.push(drink);
            }
        }
    }

    if catalog.is_empty() {
        return Err(CoachError::EmptyCatalog);
    }

    Ok(catalog)
}

/// Case-insensitive lookup by id, then by display name.
pub fn find_drink<'a>(catalog: &'a [Drink], query: &str) -> Option<&'a Drink> {
    let query = query.to_lowercase();
    catalog
        .iter()
        .find(|d| d.key() == query)
        .or_else(|| catalog.iter().find(|d| d.name.to_lowercase() == query))
}
