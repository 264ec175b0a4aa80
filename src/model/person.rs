//! Person vertex attributes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Stable person identifier. Equal to the person's index in the graph arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PersonId(pub u32);

impl PersonId {
    /// Position of this person in the `people` arena.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<usize> for PersonId {
    fn from(index: usize) -> Self {
        Self(index as u32)
    }
}

impl std::fmt::Display for PersonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Profile attributes of one person.
///
/// Immutable once the factory hands it over. The friend relation is not part
/// of this type: it lives in the graph's friend table, next to its locks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Person {
    #[serde(rename = "ID")]
    pub id: PersonId,
    pub name: String,
    pub age: u32,
    pub profession: String,
    pub hobbies: Vec<String>,
    pub city: String,
    pub salary: f64,
    pub is_married: bool,
    pub children: u32,
    pub pets: Vec<Pet>,
    pub skills: BTreeMap<String, u8>,
    pub education: Vec<Education>,
    pub social_media: SocialMedia,
}

impl Person {
    /// A person with the given id and name and every other attribute empty.
    pub fn new(id: PersonId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            age: 0,
            profession: String::new(),
            hobbies: Vec::new(),
            city: String::new(),
            salary: 0.0,
            is_married: false,
            children: 0,
            pets: Vec::new(),
            skills: BTreeMap::new(),
            education: Vec::new(),
            social_media: SocialMedia::for_user(id),
        }
    }

    pub fn with_age(mut self, age: u32) -> Self {
        self.age = age;
        self
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    pub fn with_profession(mut self, profession: impl Into<String>) -> Self {
        self.profession = profession.into();
        self
    }

    pub fn with_hobbies(mut self, hobbies: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.hobbies = hobbies.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_skill(mut self, skill: impl Into<String>, level: u8) -> Self {
        self.skills.insert(skill.into(), level);
        self
    }
}

/// A pet owned by a person.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Pet {
    pub name: String,
    #[serde(rename = "Type")]
    pub kind: String,
    pub age: u32,
    pub favorite: bool,
}

/// One completed education entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub year: u32,
    #[serde(rename = "GPA")]
    pub gpa: f64,
}

/// Social network handles.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SocialMedia {
    pub facebook: String,
    pub instagram: String,
    pub twitter: String,
    #[serde(rename = "LinkedIn")]
    pub linkedin: String,
}

impl SocialMedia {
    /// Handles derived from the person id (`fb.com/user7`, ...).
    pub fn for_user(id: PersonId) -> Self {
        Self {
            facebook: format!("fb.com/user{id}"),
            instagram: format!("instagram.com/user{id}"),
            twitter: format!("twitter.com/user{id}"),
            linkedin: format!("linkedin.com/in/user{id}"),
        }
    }
}
