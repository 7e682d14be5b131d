use crate::mealdb::raw::{MealSummary, RawMeal, MAX_INGREDIENTS};
use crate::model::{Ingredient, Recipe, DEFAULT_DIFFICULTY, DEFAULT_TIME_MINUTES};

/// Map a full meal record into a [`Recipe`].
///
/// Identifier and name are passed through unchecked; the meal database has no
/// difficulty or time, so those are always the defaults.
pub fn normalize_meal(meal: RawMeal) -> Recipe {
    let ingredients = extract_ingredients(&meal);
    let tags = split_tags(meal.str_tags.as_deref());

    Recipe {
        id: meal.id_meal.unwrap_or_default(),
        name: meal.str_meal.unwrap_or_default(),
        category: meal.str_category.unwrap_or_default(),
        area: meal.str_area,
        instructions: meal.str_instructions,
        image: meal.str_meal_thumb,
        tags: Some(tags),
        youtube: meal.str_youtube,
        ingredients,
        difficulty: Some(DEFAULT_DIFFICULTY),
        time: Some(DEFAULT_TIME_MINUTES),
    }
}

/// Collect ingredient pairs in position order, skipping blank names.
pub fn extract_ingredients(meal: &RawMeal) -> Vec<Ingredient> {
    let mut ingredients = Vec::new();

    for position in 1..=MAX_INGREDIENTS {
        let Some((Some(name), measure)) = meal.ingredient_slot(position) else {
            continue;
        };
        if name.trim().is_empty() {
            continue;
        }
        ingredients.push(Ingredient {
            name: name.to_string(),
            measure: measure.unwrap_or_default().to_string(),
        });
    }

    ingredients
}

/// Split the comma-delimited tag field. Tags are not trimmed.
pub fn split_tags(tags: Option<&str>) -> Vec<String> {
    match tags {
        Some(tags) if !tags.is_empty() => tags.split(',').map(str::to_string).collect(),
        _ => Vec::new(),
    }
}

/// Build a partial recipe from a `filter.php` entry.
///
/// The category is the one that was asked for, not anything the server says.
pub fn partial_recipe(summary: MealSummary, category: &str) -> Recipe {
    Recipe {
        id: summary.id_meal.unwrap_or_default(),
        name: summary.str_meal.unwrap_or_default(),
        category: category.to_string(),
        image: summary.str_meal_thumb,
        ingredients: Vec::new(),
        difficulty: Some(DEFAULT_DIFFICULTY),
        time: Some(DEFAULT_TIME_MINUTES),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Difficulty;

    fn meal_from_json(json: &str) -> RawMeal {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_salt_and_pepper() {
        let meal = meal_from_json(
            r#"{
                "idMeal": "1",
                "strMeal": "Seasoning",
                "strIngredient1": "Salt",
                "strIngredient2": "",
                "strMeasure2": "2 cups",
                "strIngredient3": "Pepper",
                "strMeasure3": "1 tsp"
            }"#,
        );

        assert_eq!(
            extract_ingredients(&meal),
            vec![
                Ingredient {
                    name: "Salt".to_string(),
                    measure: "".to_string()
                },
                Ingredient {
                    name: "Pepper".to_string(),
                    measure: "1 tsp".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_whitespace_names_are_skipped() {
        let meal = meal_from_json(
            r#"{
                "strIngredient1": "   ",
                "strMeasure1": "1 tbsp",
                "strIngredient2": "\t\n",
                "strIngredient3": null,
                "strMeasure3": "pinch",
                "strIngredient4": "Butter",
                "strMeasure4": null
            }"#,
        );

        let ingredients = extract_ingredients(&meal);
        assert_eq!(ingredients.len(), 1);
        assert_eq!(ingredients[0].name, "Butter");
        assert_eq!(ingredients[0].measure, "");
    }

    #[test]
    fn test_names_and_measures_keep_surrounding_whitespace() {
        let meal = meal_from_json(r#"{"strIngredient1": " Flour ", "strMeasure1": " 200g "}"#);

        let ingredients = extract_ingredients(&meal);
        assert_eq!(ingredients[0].name, " Flour ");
        assert_eq!(ingredients[0].measure, " 200g ");
    }

    #[test]
    fn test_all_twenty_positions_in_order() {
        let mut fields = serde_json::Map::new();
        for n in 1..=20 {
            // leave every third position blank
            let name = if n % 3 == 0 { String::new() } else { format!("item{n}") };
            fields.insert(format!("strIngredient{n}"), name.into());
            fields.insert(format!("strMeasure{n}"), format!("{n}g").into());
        }
        let meal: RawMeal = serde_json::from_value(fields.into()).unwrap();

        let ingredients = extract_ingredients(&meal);
        let expected: Vec<String> = (1..=20)
            .filter(|n| n % 3 != 0)
            .map(|n| format!("item{n}"))
            .collect();
        let names: Vec<String> = ingredients.iter().map(|i| i.name.clone()).collect();
        assert_eq!(names, expected);
        assert_eq!(ingredients.last().unwrap().measure, "20g");
    }

    #[test]
    fn test_split_tags() {
        assert_eq!(split_tags(None), Vec::<String>::new());
        assert_eq!(split_tags(Some("")), Vec::<String>::new());
        assert_eq!(split_tags(Some("a,b,c")), vec!["a", "b", "c"]);
        assert_eq!(split_tags(Some("Soup, Warming")), vec!["Soup", " Warming"]);
        assert_eq!(split_tags(Some("Meat,Meat")), vec!["Meat", "Meat"]);
    }

    #[test]
    fn test_normalize_meal() {
        let meal = meal_from_json(
            r#"{
                "idMeal": "52772",
                "strMeal": "Teriyaki Chicken Casserole",
                "strCategory": "Chicken",
                "strArea": "Japanese",
                "strInstructions": "Preheat oven to 350.",
                "strMealThumb": "https://www.themealdb.com/images/media/meals/wvpsxx1468256321.jpg",
                "strTags": "Meat,Casserole",
                "strYoutube": "https://www.youtube.com/watch?v=4aZr5hZXP_s",
                "strIngredient1": "soy sauce",
                "strMeasure1": "3/4 cup"
            }"#,
        );

        let recipe = normalize_meal(meal);
        assert_eq!(recipe.id, "52772");
        assert_eq!(recipe.name, "Teriyaki Chicken Casserole");
        assert_eq!(recipe.category, "Chicken");
        assert_eq!(recipe.area.as_deref(), Some("Japanese"));
        assert_eq!(recipe.instructions.as_deref(), Some("Preheat oven to 350."));
        assert_eq!(recipe.tags, Some(vec!["Meat".to_string(), "Casserole".to_string()]));
        assert!(recipe.youtube.unwrap().contains("youtube.com"));
        assert_eq!(recipe.ingredients.len(), 1);
        assert_eq!(recipe.difficulty, Some(Difficulty::Medium));
        assert_eq!(recipe.time, Some(30));
    }

    #[test]
    fn test_normalize_meal_without_tags() {
        let recipe = normalize_meal(meal_from_json(r#"{"idMeal": "7", "strMeal": "Toast"}"#));
        assert_eq!(recipe.tags, Some(Vec::new()));
        assert!(recipe.ingredients.is_empty());
        assert_eq!(recipe.category, "");
        assert!(recipe.area.is_none());
    }

    #[test]
    fn test_partial_recipe_echoes_requested_category() {
        let summary = MealSummary {
            id_meal: Some("52959".to_string()),
            str_meal: Some("Baked salmon with fennel & tomatoes".to_string()),
            str_meal_thumb: Some("https://example.com/salmon.jpg".to_string()),
        };

        let recipe = partial_recipe(summary, "Seafood");
        assert_eq!(recipe.id, "52959");
        assert_eq!(recipe.category, "Seafood");
        assert_eq!(recipe.image.as_deref(), Some("https://example.com/salmon.jpg"));
        assert!(recipe.ingredients.is_empty());
        assert!(recipe.tags.is_none());
        assert_eq!(recipe.difficulty, Some(Difficulty::Medium));
        assert_eq!(recipe.time, Some(30));
    }
}
