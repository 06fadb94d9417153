mod extract;

pub use extract::extract_json;

use crate::server::PlanRequest;

/// Builds the plan-generation prompt. User fields are interpolated
/// verbatim, matching the deployed prompt template.
pub fn build_prompt(request: &PlanRequest) -> String {
    format!(
        r#"Act as a fitness API. Return ONLY raw JSON. No introductory text.
User: {}, Goal: {}, Level: {}, Diet: {}.

Required JSON Structure:
{{
  "motivation": "A short quote",
  "tips": ["Tip 1", "Tip 2"],
  "weekly_workout": [
    {{ "day": "Day 1", "exercises": [{{ "name": "Pushups", "sets": "3", "reps": "12", "rest": "60s" }}] }}
  ],
  "weekly_diet": [
    {{ "day": "Day 1", "meals": {{ "breakfast": "Oats", "lunch": "Rice", "dinner": "Salad", "snacks": "Nuts" }} }}
  ]
}}"#,
        request.name, request.goal, request.level, request.dietary
    )
}
