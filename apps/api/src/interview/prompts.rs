// All LLM prompt constants for the Interview module.

/// System prompt for quiz generation — enforces JSON-only output.
pub const QUIZ_SYSTEM: &str =
    "You are a senior technical interviewer writing realistic screening \
    questions. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Quiz generation prompt template.
/// Replace `{industry}` and `{skills_clause}` before sending.
pub const QUIZ_PROMPT_TEMPLATE: &str = r#"Generate 10 technical interview questions for a {industry} professional{skills_clause}.

Each question should be multiple choice with 4 options.

Return the response in ONLY this JSON format without any additional text:
{
  "questions": [
    {
      "question": "string",
      "options": ["string", "string", "string", "string"],
      "correctAnswer": "string",
      "explanation": "string"
    }
  ]
}"#;

/// System prompt for the post-quiz improvement tip — short plain text.
pub const TIP_SYSTEM: &str =
    "You are an encouraging career coach. \
    Respond with plain text only, no markdown and no preamble.";

/// Improvement tip prompt template.
/// Replace `{industry}` and `{wrong_questions}` before sending.
pub const TIP_PROMPT_TEMPLATE: &str = r#"The user got the following {industry} technical interview questions wrong:

{wrong_questions}

Based on these mistakes, provide a concise, specific improvement tip.
Focus on the knowledge gaps revealed by these wrong answers.
Keep the response under 2 sentences and make it encouraging.
Don't explicitly mention the mistakes, instead focus on what to learn and practice."#;
