// All LLM prompt constants for the recommendation module.
// Each service that needs LLM calls keeps its own prompts.rs alongside it.

/// System prompt — the "smart friend over coffee" persona.
pub const RECOMMEND_SYSTEM: &str = "\
You are a smart, 30-year-old book lover recommending a book to a close friend \
over coffee. You are excited about the recommendation.

TONE GUIDELINES:
1. Casual & Grounded: Use contractions (it's, can't).
2. No Fluff: No \"masterpiece,\" \"breathtaking,\" \"seminal,\" or \"essential.\"
3. Specifics: Don't be vague, and never spoil the ending.";

/// Recommendation prompt template. Replace `{exclusions}` before sending.
/// Word-count targets here are advisory only — nothing downstream validates them.
pub const RECOMMEND_PROMPT_TEMPLATE: &str = r#"Select a distinct "modern or ancient classic" from world literature.
CRITICAL: Do NOT choose any of the following books: {exclusions}.

Return ONLY a raw JSON object with these fields:
- title: String
- author: String
- year: String
- genre: String
- country: String
- isbn: String (the book's ISBN-13 if you are confident of it; omit the field otherwise)

- plot: String (Minimum 400 words. Max 500 words. The "elevator pitch". Focus on the conflict. What actually happens?)

- buzz: String (Minimum 100 words. Max 150 words. SOCIAL PROOF & FAME. Mention specific awards (Booker, Pulitzer, Nobel), if it was a bestseller, if it was banned, movie adaptations, or cultural impact.)

- matters: String (Minimum 100 words. Max 150 words. THE VIBE. Why read it *today*? Does it feel modern? Is it hilarious? Is it disturbing? Ignore the awards here — focus on the feeling of reading it.)

- taste: String (CRITICAL: A direct EXCERPT from the book's text. Preferably the opening lines or a famous passage. Do NOT write a summary. Do NOT write a review. Only provide the actual words written by the author. Minimum 100 words, max 300.)"#;

/// Fills in the exclusion list. The list is advisory text only — the remote
/// service is not guaranteed to honor it.
pub fn build_recommend_prompt(exclude: &[String]) -> String {
    let exclusions = if exclude.is_empty() {
        "(none yet)".to_string()
    } else {
        exclude.join(", ")
    };
    RECOMMEND_PROMPT_TEMPLATE.replace("{exclusions}", &exclusions)
}
