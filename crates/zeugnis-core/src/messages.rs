//! User-facing refusal messages

use crate::dates::primary_language;

/// Message shown when required fields are empty
pub fn required_fields_message(language: &str) -> &'static str {
    match primary_language(language) {
        "de" => "Bitte füllen Sie alle Pflichtfelder aus.",
        "id" => "Harap lengkapi semua bidang yang wajib diisi.",
        _ => "Please fill in all required fields.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_fields_message() {
        assert_eq!(required_fields_message("de"), "Bitte füllen Sie alle Pflichtfelder aus.");
        assert_eq!(
            required_fields_message("id"),
            "Harap lengkapi semua bidang yang wajib diisi."
        );
        assert_eq!(required_fields_message("en"), "Please fill in all required fields.");
        assert_eq!(required_fields_message("nl"), "Please fill in all required fields.");
    }
}
