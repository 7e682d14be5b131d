//! Wire types for TheMealDB JSON responses.
//!
//! Every field is optional: the API sends `null`, `""` or omits keys freely.

use serde::Deserialize;

/// Number of numbered ingredient/measure pairs a meal record can carry.
pub const MAX_INGREDIENTS: usize = 20;

/// `{ "meals": [...] | null }`, the envelope shared by every endpoint
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Meals<T> {
    #[serde(default)]
    pub meals: Option<Vec<T>>,
}

/// Entry returned by `filter.php`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealSummary {
    pub id_meal: Option<String>,
    pub str_meal: Option<String>,
    pub str_meal_thumb: Option<String>,
}

/// Entry returned by `list.php?c=list`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryEntry {
    pub str_category: Option<String>,
}

macro_rules! raw_meal {
    ($($position:literal => $ingredient:ident, $measure:ident;)+) => {
        /// Full meal record returned by `random.php` and `lookup.php`
        #[derive(Debug, Default, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct RawMeal {
            pub id_meal: Option<String>,
            pub str_meal: Option<String>,
            pub str_category: Option<String>,
            pub str_area: Option<String>,
            pub str_instructions: Option<String>,
            pub str_meal_thumb: Option<String>,
            /// Comma-delimited
            pub str_tags: Option<String>,
            pub str_youtube: Option<String>,
            $(
                pub $ingredient: Option<String>,
                pub $measure: Option<String>,
            )+
        }

        impl RawMeal {
            /// Ingredient name and measure stored at `position` (1-based).
            ///
            /// Returns `None` for positions outside `1..=MAX_INGREDIENTS`.
            pub fn ingredient_slot(&self, position: usize) -> Option<(Option<&str>, Option<&str>)> {
                match position {
                    $($position => Some((self.$ingredient.as_deref(), self.$measure.as_deref())),)+
                    _ => None,
                }
            }
        }
    };
}

raw_meal! {
    1 => str_ingredient1, str_measure1;
    2 => str_ingredient2, str_measure2;
    3 => str_ingredient3, str_measure3;
    4 => str_ingredient4, str_measure4;
    5 => str_ingredient5, str_measure5;
    6 => str_ingredient6, str_measure6;
    7 => str_ingredient7, str_measure7;
    8 => str_ingredient8, str_measure8;
    9 => str_ingredient9, str_measure9;
    10 => str_ingredient10, str_measure10;
    11 => str_ingredient11, str_measure11;
    12 => str_ingredient12, str_measure12;
    13 => str_ingredient13, str_measure13;
    14 => str_ingredient14, str_measure14;
    15 => str_ingredient15, str_measure15;
    16 => str_ingredient16, str_measure16;
    17 => str_ingredient17, str_measure17;
    18 => str_ingredient18, str_measure18;
    19 => str_ingredient19, str_measure19;
    20 => str_ingredient20, str_measure20;
}
