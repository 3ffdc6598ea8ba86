use serde::{Deserialize, Serialize};

/// Drink category from the fixed catalog taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Brewed,
    Espresso,
    Milk,
    Cold,
    Tea,
    Specialty,
    Energy,
    Soda,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Brewed => "brewed",
            Category::Espresso => "espresso",
            Category::Milk => "milk",
            Category::Cold => "cold",
            Category::Tea => "tea",
            Category::Specialty => "specialty",
            Category::Energy => "energy",
            Category::Soda => "soda",
        }
    }
}

/// A catalog drink. Immutable for the lifetime of the process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Drink {
    pub id: String,

    pub name: String,

    pub category: Category,

    /// Nominal caffeine content in milligrams, before any serving adjustment.
    pub caffeine_mg: f64,

    /// Free-form tags, e.g. "decaf", "low_caffeine".
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Drink {
    pub fn new(id: &str, name: &str, category: Category, caffeine_mg: f64) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            category,
            caffeine_mg,
            tags: Vec::new(),
        }
    }

    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Basic validation: non-negative caffeine and a non-empty id.
    pub fn is_valid(&self) -> bool {
        self.caffeine_mg >= 0.0 && !self.id.is_empty()
    }

    /// Canonical key for lookups (lowercase id).
    pub fn key(&self) -> String {
        self.id.to_lowercase()
    }
}

impl PartialEq for Drink {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Drink {}

impl std::hash::Hash for Drink {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}
