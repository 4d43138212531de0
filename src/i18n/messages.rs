//! Localized notification templates
//!
//! Static lookup tables for the texts the dispatch job sends alongside a
//! channel post, keyed by user language and post category. These are fixed
//! at compile time; user-facing conversational texts live with the bot
//! layer, not here.

use crate::models::{Category, Language};

/// Notification body for a post in the given category.
///
/// `None` is the catch-all used when a post carries no category tag.
pub fn notification_text(language: Language, category: Option<Category>) -> &'static str {
    match (language, category) {
        (Language::En, Some(Category::Extracurriculars)) => {
            "Hey! You have a new opportunity on extracurricular activities."
        }
        (Language::En, Some(Category::EducationalOpportunities)) => {
            "Hey! You have a new educational opportunity."
        }
        (Language::En, Some(Category::Internships)) => {
            "Hey! You have a new internship opportunity."
        }
        (Language::En, Some(Category::Olympiads)) => {
            "Hey! You have a new Olympiad opportunity."
        }
        (Language::En, None) => "Hey! You have a new opportunity!",

        (Language::Ru, Some(Category::Extracurriculars)) => {
            "Привет! У вас появилась новая возможность для внеклассных мероприятий."
        }
        (Language::Ru, Some(Category::EducationalOpportunities)) => {
            "Привет! У вас появилась новая образовательная возможность."
        }
        (Language::Ru, Some(Category::Internships)) => {
            "Привет! У вас появилась новая возможность для стажировки."
        }
        (Language::Ru, Some(Category::Olympiads)) => {
            "Привет! У вас появилась новая возможность участвовать в олимпиаде."
        }
        (Language::Ru, None) => "Привет! У вас появилась новая возможность!",

        (Language::Uz, Some(Category::Extracurriculars)) => {
            "Salom! Sizda maktabdandasturi uchun yangi imkoniyat mavjud."
        }
        (Language::Uz, Some(Category::EducationalOpportunities)) => {
            "Salom! Sizda yangi ta'lim imkoniyati mavjud."
        }
        (Language::Uz, Some(Category::Internships)) => {
            "Salom! Sizda yangi stajirovka imkoniyati mavjud."
        }
        (Language::Uz, Some(Category::Olympiads)) => {
            "Salom! Sizda yangi olimpiada imkoniyati mavjud."
        }
        (Language::Uz, None) => "Salom! Sizda yangi imkoniyat mavjud!",
    }
}

/// Caption of the inline button linking to the post
pub fn button_text(language: Language) -> &'static str {
    match language {
        Language::En => "Click here to go to the post!",
        Language::Ru => "Нажмите здесь, чтобы перейти к посту!",
        Language::Uz => "Postga o'tish uchun shu erni bosing!",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LANGUAGES: [Language; 3] = [Language::En, Language::Ru, Language::Uz];

    #[test]
    fn test_every_pair_has_text() {
        for language in LANGUAGES {
            assert!(!notification_text(language, None).is_empty());
            assert!(!button_text(language).is_empty());
            for category in Category::ALL {
                assert!(!notification_text(language, Some(category)).is_empty());
            }
        }
    }

    #[test]
    fn test_texts_differ_by_category() {
        let internship = notification_text(Language::En, Some(Category::Internships));
        let olympiad = notification_text(Language::En, Some(Category::Olympiads));
        assert_ne!(internship, olympiad);
    }
}
