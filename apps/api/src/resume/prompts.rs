// All LLM prompt constants for the Resume module.

/// System prompt for entry improvement — enforces plain-text output.
pub const IMPROVE_SYSTEM: &str =
    "You are an expert resume writer. \
    Respond with the improved text only, as a single paragraph. \
    Do NOT include headings, bullet points, quotes, or commentary. \
    Do NOT use markdown code fences.";

/// Entry improvement prompt template.
/// Replace `{entry_kind}`, `{industry}` and `{current}` before sending.
pub const IMPROVE_PROMPT_TEMPLATE: &str = r#"As an expert resume writer, improve the following {entry_kind} description for a {industry} professional.
Make it more impactful, quantifiable, and aligned with industry standards.

Current content:
"{current}"

Requirements:
1. Use action verbs
2. Include metrics and results where possible
3. Highlight relevant technical skills
4. Keep it concise but detailed
5. Focus on achievements over responsibilities
6. Use industry-specific keywords

Format the response as a single paragraph without any additional text or explanations."#;
