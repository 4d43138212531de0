//! User record model and typed field updates

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, QueryBuilder, Sqlite};
use std::fmt;
use std::str::FromStr;

use crate::utils::errors::StorageError;

/// UI locale chosen by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Ru,
    Uz,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ru => "ru",
            Language::Uz => "uz",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = StorageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Language::En),
            "ru" => Ok(Language::Ru),
            "uz" => Ok(Language::Uz),
            other => Err(StorageError::UnknownLanguage(other.to_string())),
        }
    }
}

/// Content category a user can opt in or out of
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Internships,
    Extracurriculars,
    EducationalOpportunities,
    Olympiads,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Internships,
        Category::Extracurriculars,
        Category::EducationalOpportunities,
        Category::Olympiads,
    ];

    /// Column holding the opt-in flag for this category
    pub fn column(&self) -> &'static str {
        match self {
            Category::Internships => "internships",
            Category::Extracurriculars => "extracurriculars",
            Category::EducationalOpportunities => "educational_opportunities",
            Category::Olympiads => "olympiads",
        }
    }

    /// Short code used by channel post tags and message templates
    pub fn code(&self) -> &'static str {
        match self {
            Category::Internships => "int",
            Category::Extracurriculars => "ec",
            Category::EducationalOpportunities => "edu",
            Category::Olympiads => "olym",
        }
    }
}

impl FromStr for Category {
    type Err = StorageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "int" => Ok(Category::Internships),
            "ec" => Ok(Category::Extracurriculars),
            "edu" => Ok(Category::EducationalOpportunities),
            "olym" => Ok(Category::Olympiads),
            other => Err(StorageError::UnknownCategory(other.to_string())),
        }
    }
}

/// One row of the users table
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserRecord {
    pub user_id: i64,
    pub language: Option<Language>,
    pub last_verified: Option<DateTime<Utc>>,
    /// Minimum gap in seconds before re-verification is allowed
    pub verification_cooldown: Option<i64>,
    pub is_verified: bool,
    pub internships: bool,
    pub extracurriculars: bool,
    pub educational_opportunities: bool,
    pub olympiads: bool,
}

impl UserRecord {
    /// Opt-in flag for the given category
    pub fn opted_in(&self, category: Category) -> bool {
        match category {
            Category::Internships => self.internships,
            Category::Extracurriculars => self.extracurriculars,
            Category::EducationalOpportunities => self.educational_opportunities,
            Category::Olympiads => self.olympiads,
        }
    }

    /// Whether a fresh channel-membership check is allowed at `now`.
    /// Without a recorded verification or a cooldown there is nothing to wait for.
    pub fn verification_due(&self, now: DateTime<Utc>) -> bool {
        match (self.last_verified, self.verification_cooldown) {
            (Some(last), Some(cooldown)) => now >= last + Duration::seconds(cooldown),
            _ => true,
        }
    }
}

/// A single field-and-value pair accepted by the upsert path.
///
/// The set of writable columns is closed at compile time; callers can never
/// smuggle an arbitrary column name into the generated SQL.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UserField {
    Language(Option<Language>),
    LastVerified(Option<DateTime<Utc>>),
    VerificationCooldown(Option<i64>),
    IsVerified(bool),
    Internships(bool),
    Extracurriculars(bool),
    EducationalOpportunities(bool),
    Olympiads(bool),
}

impl UserField {
    /// Opt-in flag field for a category
    pub fn category(category: Category, enabled: bool) -> Self {
        match category {
            Category::Internships => UserField::Internships(enabled),
            Category::Extracurriculars => UserField::Extracurriculars(enabled),
            Category::EducationalOpportunities => UserField::EducationalOpportunities(enabled),
            Category::Olympiads => UserField::Olympiads(enabled),
        }
    }

    /// Column name this field writes to
    pub fn column(&self) -> &'static str {
        match self {
            UserField::Language(_) => "language",
            UserField::LastVerified(_) => "last_verified",
            UserField::VerificationCooldown(_) => "verification_cooldown",
            UserField::IsVerified(_) => "is_verified",
            UserField::Internships(_) => "internships",
            UserField::Extracurriculars(_) => "extracurriculars",
            UserField::EducationalOpportunities(_) => "educational_opportunities",
            UserField::Olympiads(_) => "olympiads",
        }
    }

    /// Bind this field's value as the next query argument
    pub fn push_bind(&self, builder: &mut QueryBuilder<'_, Sqlite>) {
        match *self {
            UserField::Language(value) => builder.push_bind(value),
            UserField::LastVerified(value) => builder.push_bind(value),
            UserField::VerificationCooldown(value) => builder.push_bind(value),
            UserField::IsVerified(value) => builder.push_bind(value),
            UserField::Internships(value) => builder.push_bind(value),
            UserField::Extracurriculars(value) => builder.push_bind(value),
            UserField::EducationalOpportunities(value) => builder.push_bind(value),
            UserField::Olympiads(value) => builder.push_bind(value),
        };
    }
}
