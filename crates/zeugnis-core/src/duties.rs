//! Duty bullets from free text

/// Glyphs accepted as a bullet prefix
pub const BULLET_GLYPHS: [char; 3] = ['•', '-', '*'];

/// Split free-text duties into bullet items
///
/// Blank lines are dropped, one leading bullet glyph is stripped from each
/// line along with surrounding whitespace, and lines left empty by the
/// stripping are dropped too.
///
/// ```
/// use zeugnis_core::duties::derive_duty_bullets;
///
/// let bullets = derive_duty_bullets("- Managed client onboarding\n\n• Led a team of 4\n");
/// assert_eq!(bullets, vec!["Managed client onboarding", "Led a team of 4"]);
/// ```
pub fn derive_duty_bullets(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| line.strip_prefix(BULLET_GLYPHS).unwrap_or(line).trim())
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
