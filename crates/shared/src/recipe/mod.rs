use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Diet classification of a recipe. Ids grow with strictness: a recipe tagged
/// with a stricter diet is also suitable for every laxer one.
#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum DietType {
    #[default]
    Classic = 1,
    Pescatarian = 2,
    Vegetarian = 3,
    Vegan = 4,
}

impl DietType {
    pub fn id(self) -> i64 {
        self as i64
    }

    pub fn from_id(id: i64) -> Option<Self> {
        Self::VARIANTS.iter().copied().find(|d| d.id() == id)
    }
}

/// The diet hierarchy rule: a recipe qualifies for a requested diet when its
/// own diet type id is at least the requested one. Not an equality test.
///
/// Out of range ids are compared as plain integers, so `0` admits every
/// recipe and anything above [`DietType::Vegan`] admits none.
pub fn diet_type_qualifies(recipe_diet_type_id: i64, requested_diet_type_id: i64) -> bool {
    recipe_diet_type_id >= requested_diet_type_id
}

/// Allergen tags. A recipe associated with a tag contains that allergen.
#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum Allergy {
    Celery = 1,
    Gluten = 2,
    Seafood = 3,
    Eggs = 4,
    Lupin = 5,
    Mustard = 6,
    #[strum(serialize = "tree nuts")]
    TreeNuts = 7,
    Peanuts = 8,
    #[strum(serialize = "sesame seeds")]
    SesameSeeds = 9,
    Soybeans = 10,
    #[strum(serialize = "sulphur/sulphites")]
    SulphurSulphites = 11,
}

impl Allergy {
    pub fn id(self) -> i64 {
        self as i64
    }

    pub fn from_id(id: i64) -> Option<Self> {
        Self::VARIANTS.iter().copied().find(|a| a.id() == id)
    }
}
