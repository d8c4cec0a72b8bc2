use crate::fitness::dto::UserProfile;

/// Titles for the `---` separated parts of a fitness plan, in the order the prompt asks for them.
pub const PLAN_SECTION_TITLES: [&str; 5] = [
    "Overview Summary",
    "Weekly Workout Plan",
    "Daily Nutrition Guidelines",
    "Supplement Recommendations",
    "Lifestyle & Safety",
];

pub const SECTION_DELIMITER: &str = "---";

pub fn fitness_plan_prompt(profile: &UserProfile) -> String {
    let notes = match profile.notes.trim() {
        "" => "None provided",
        n => n,
    };
    format!(
        r#"You are an expert fitness coach with years of experience training people of every age group and gender. Build a personalized fitness and nutrition plan for the individual below.

The user's profile:
- Height: {height} cm
- Weight: {weight} kg
- Age: {age} years
- Gender: {gender}
- Primary Goal: {goal} (options: Cutting, Bulking, Recomp)
- Special Notes: {notes} (may include allergies, past injuries, diet preferences, equipment limits, time availability)

Answer in exactly five sections, in this order, separated by a line containing only {delim}. Do not use {delim} anywhere else. Avoid tables and keep formatting plain.

1. {t0}: how the profile affects the fitness journey and why the goal fits, considering age and gender.
2. {t1}: a Push-Pull-Legs plan from Sunday to Saturday, every day different, with approximate calories burned per session.
3. {t2}: daily calories, protein, carbs and fats, with Indian food suggestions and both vegetarian and non-vegetarian options unless restricted.
4. {t3}: only common, relevant supplements with natural alternatives and no medical claims.
5. {t4}: rest, hydration, posture, warm-ups, cool-downs and injury precautions.

Use plain English with a professional, friendly tone. No nested bullet points."#,
        height = profile.height_cm,
        weight = profile.weight_kg,
        age = profile.age,
        gender = profile.gender,
        goal = profile.goal,
        notes = notes,
        delim = SECTION_DELIMITER,
        t0 = PLAN_SECTION_TITLES[0],
        t1 = PLAN_SECTION_TITLES[1],
        t2 = PLAN_SECTION_TITLES[2],
        t3 = PLAN_SECTION_TITLES[3],
        t4 = PLAN_SECTION_TITLES[4],
    )
}

const CALORIE_INSTRUCTIONS: &str = r#"You are an expert nutritionist. Identify the food items in the image and calculate the total calories. List every item with its calories in this format:

1. Item 1 - no of calories
2. Item 2 - no of calories
----

Finish with the total calories, then give both the pros and cons of eating that food."#;

/// The user's own question is appended after the fixed instructions.
pub fn calorie_prompt(user_input: &str) -> String {
    match user_input.trim() {
        "" => CALORIE_INSTRUCTIONS.to_string(),
        input => format!("{CALORIE_INSTRUCTIONS}\n\nUser note: {input}"),
    }
}
