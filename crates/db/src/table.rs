use sea_query::Iden;

#[derive(Iden, Clone)]
pub enum Recipes {
    Table,
    RecipeId,
    RecipeName,
    Photo,
    Serves,
    CookTime,
    PrepTime,
    TotalTime,
}

#[derive(Iden, Clone)]
pub enum RecipeIngredients {
    Table,
    RecipeIngredientId,
    RecipeId,
    Ingredient,
}

#[derive(Iden, Clone)]
pub enum RecipeInstructions {
    Table,
    RecipeInstructionId,
    RecipeId,
    StepNum,
    StepDescription,
}

#[derive(Iden, Clone)]
pub enum NutritionValues {
    Table,
    NutritionValueId,
    RecipeId,
    Calories,
    Fats,
    Saturates,
    Carbs,
    Sugars,
    Fibres,
    Proteins,
    Salts,
}

#[derive(Iden, Clone)]
pub enum DietTypes {
    Table,
    DietTypeId,
    DietName,
}

#[derive(Iden, Clone)]
pub enum RecipeDietTypes {
    Table,
    RecipeId,
    DietTypeId,
}

#[derive(Iden, Clone)]
pub enum Allergies {
    Table,
    AllergyId,
    AllergyName,
}

#[derive(Iden, Clone)]
pub enum RecipeAllergies {
    Table,
    RecipeId,
    AllergyId,
}

/// Alias given to the allergy blacklist subquery when it is joined back
/// against the catalog.
#[derive(Iden, Clone)]
pub enum Blacklist {
    Table,
    RecipeId,
}

#[derive(Iden, Clone)]
pub enum Users {
    Table,
    Id,
    FirstName,
    LastName,
    Email,
}

#[derive(Iden, Clone)]
pub enum UserDietPreferences {
    Table,
    UserId,
    DietTypeId,
}

#[derive(Iden, Clone)]
pub enum UserAllergies {
    Table,
    UserId,
    AllergyId,
}

#[derive(Iden, Clone)]
pub enum UserFavouriteRecipes {
    Table,
    UserId,
    RecipeId,
}

#[derive(Iden, Clone)]
pub enum MealPlans {
    Table,
    MealplanId,
    UserId,
    CreatedAt,
}

#[derive(Iden, Clone)]
pub enum MealPlanRecipes {
    Table,
    MealplanId,
    RecipeId,
    SelectedServings,
}
