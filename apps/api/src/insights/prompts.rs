// All LLM prompt constants for the Insights module.

/// System prompt for insight generation — enforces JSON-only output.
pub const INSIGHT_SYSTEM: &str =
    "You are a labor-market analyst producing current, realistic industry data \
    for a career-coaching product. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or notes.";

/// Insight generation prompt template. Replace `{industry}` before sending.
pub const INSIGHT_PROMPT_TEMPLATE: &str = r#"Analyze the current state of the {industry} industry and provide insights in ONLY the following JSON format without any additional notes or explanations:

{
  "salaryRanges": [
    {"role": "string", "min": number, "median": number, "max": number, "location": "string"}
  ],
  "growthRate": number,
  "demandLevel": "High" | "Medium" | "Low",
  "marketOutlook": "Positive" | "Neutral" | "Negative",
  "topSkills": ["skill1", "skill2"],
  "keyTrends": ["trend1", "trend2"],
  "recommendedSkills": ["skill1", "skill2"]
}

Rules:
- growthRate is an annual percentage (e.g. 6.5 means 6.5% growth)
- Include at least 5 common roles in salaryRanges with realistic USD figures
- Include at least 5 entries each in topSkills, keyTrends, and recommendedSkills

INDUSTRY:
{industry}"#;
