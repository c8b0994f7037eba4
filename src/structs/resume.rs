use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ResumeRecord {
    pub id: String,
    pub name: String,
    pub birthday: String,
    pub introduction: String,
    pub linkedin: String,
    pub github: String,
    pub bitbucket: String,
    pub city: String,
    pub phone: String,
    pub degree: String,
    pub image: String,
    pub conclusion: String,
}

impl ResumeRecord {
    /// Looks up a field by its stored name, as used by key queries.
    pub fn get(&self, field_name: &str) -> Option<&str> {
        let field = ResumeField::from_name(field_name)?;
        Some(match field {
            ResumeField::Id => &self.id,
            ResumeField::Name => &self.name,
            ResumeField::Birthday => &self.birthday,
            ResumeField::Introduction => &self.introduction,
            ResumeField::Linkedin => &self.linkedin,
            ResumeField::Github => &self.github,
            ResumeField::Bitbucket => &self.bitbucket,
            ResumeField::City => &self.city,
            ResumeField::Phone => &self.phone,
            ResumeField::Degree => &self.degree,
            ResumeField::Image => &self.image,
            ResumeField::Conclusion => &self.conclusion,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResumeField {
    Id,
    Name,
    Birthday,
    Introduction,
    Linkedin,
    Github,
    Bitbucket,
    City,
    Phone,
    Degree,
    Image,
    Conclusion,
}

impl ResumeField {
    pub const ALL: [ResumeField; 12] = [
        ResumeField::Id,
        ResumeField::Name,
        ResumeField::Birthday,
        ResumeField::Introduction,
        ResumeField::Linkedin,
        ResumeField::Github,
        ResumeField::Bitbucket,
        ResumeField::City,
        ResumeField::Phone,
        ResumeField::Degree,
        ResumeField::Image,
        ResumeField::Conclusion,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResumeField::Id => "id",
            ResumeField::Name => "name",
            ResumeField::Birthday => "birthday",
            ResumeField::Introduction => "introduction",
            ResumeField::Linkedin => "linkedin",
            ResumeField::Github => "github",
            ResumeField::Bitbucket => "bitbucket",
            ResumeField::City => "city",
            ResumeField::Phone => "phone",
            ResumeField::Degree => "degree",
            ResumeField::Image => "image",
            ResumeField::Conclusion => "conclusion",
        }
    }

    pub fn from_name(name: &str) -> Option<ResumeField> {
        ResumeField::ALL.into_iter().find(|field| field.as_str() == name)
    }
}

impl fmt::Display for ResumeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
