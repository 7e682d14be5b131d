//! Recipes bundled with the crate, usable without any network access.

use crate::model::{Difficulty, Ingredient, Recipe};

struct CatalogEntry {
    id: &'static str,
    name: &'static str,
    category: &'static str,
    area: &'static str,
    instructions: &'static str,
    image: Option<&'static str>,
    ingredients: &'static [(&'static str, &'static str)],
    difficulty: Difficulty,
    time: u32,
}

const CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        id: "1",
        name: "Spaghetti Carbonara",
        category: "Pasta",
        area: "Italian",
        instructions: "Boil pasta. Fry pancetta. Mix eggs and cheese. Combine all.",
        image: Some("https://www.themealdb.com/images/media/meals/llcbn01574260722.jpg"),
        ingredients: &[
            ("Spaghetti", "400g"),
            ("Pancetta", "150g"),
            ("Eggs", "4"),
            ("Parmesan", "100g"),
        ],
        difficulty: Difficulty::Medium,
        time: 20,
    },
    CatalogEntry {
        id: "2",
        name: "Grilled Chicken Salad",
        category: "Salad",
        area: "American",
        instructions: "Grill chicken. Chop veggies. Mix dressing. Toss salad.",
        image: None,
        ingredients: &[
            ("Chicken Breast", "2"),
            ("Lettuce", "1 head"),
            ("Tomatoes", "2"),
            ("Cucumber", "1"),
        ],
        difficulty: Difficulty::Easy,
        time: 15,
    },
    CatalogEntry {
        id: "3",
        name: "Vegetable Stir Fry",
        category: "Vegetarian",
        area: "Asian",
        instructions: "Chop veggies. Stir fry with sauce. Serve with rice.",
        image: None,
        ingredients: &[
            ("Broccoli", "1 head"),
            ("Carrots", "2"),
            ("Soy Sauce", "2 tbsp"),
            ("Rice", "1 cup"),
        ],
        difficulty: Difficulty::Easy,
        time: 25,
    },
    CatalogEntry {
        id: "4",
        name: "Beef Stew",
        category: "Meat",
        area: "French",
        instructions: "Brown meat. Add veggies and broth. Simmer for hours.",
        image: None,
        ingredients: &[
            ("Beef Chuck", "500g"),
            ("Potatoes", "4"),
            ("Carrots", "3"),
            ("Beef Broth", "1L"),
        ],
        difficulty: Difficulty::Hard,
        time: 120,
    },
    CatalogEntry {
        id: "5",
        name: "Fish and Chips",
        category: "Seafood",
        area: "British",
        instructions: "Batter fish. Fry fish and chips. Serve with tartar sauce.",
        image: None,
        ingredients: &[
            ("Cod Fillet", "2"),
            ("Potatoes", "4"),
            ("Flour", "1 cup"),
            ("Beer", "1 cup"),
        ],
        difficulty: Difficulty::Medium,
        time: 45,
    },
];

impl CatalogEntry {
    fn to_recipe(&self) -> Recipe {
        Recipe {
            id: self.id.to_string(),
            name: self.name.to_string(),
            category: self.category.to_string(),
            area: Some(self.area.to_string()),
            instructions: Some(self.instructions.to_string()),
            image: self.image.map(str::to_string),
            tags: None,
            youtube: None,
            ingredients: self
                .ingredients
                .iter()
                .map(|(name, measure)| Ingredient {
                    name: name.to_string(),
                    measure: measure.to_string(),
                })
                .collect(),
            difficulty: Some(self.difficulty),
            time: Some(self.time),
        }
    }
}

/// The five bundled recipes, ids "1" through "5", in catalog order.
pub fn fallback_recipes() -> Vec<Recipe> {
    CATALOG.iter().map(CatalogEntry::to_recipe).collect()
}
