//! Console rendering of profiles, friend lists and network statistics.

use std::fmt;

use crate::graph::{PersonRef, Profile};
use crate::model::NetworkStats;

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = &self.person;
        writeln!(f, "=== Profile of {} ===", p.name)?;
        writeln!(f, "ID: {}", p.id)?;
        writeln!(f, "Name: {} ({} years)", p.name, p.age)?;
        writeln!(f, "City: {}", p.city)?;
        writeln!(f, "Profession: {} (salary: {:.2})", p.profession, p.salary)?;
        writeln!(f, "Status: {}", if p.is_married { "married" } else { "single" })?;
        writeln!(f, "Children: {}", p.children)?;

        if !p.hobbies.is_empty() {
            writeln!(f, "\nHobbies:")?;
            for hobby in &p.hobbies {
                writeln!(f, "- {hobby}")?;
            }
        }

        if !p.pets.is_empty() {
            writeln!(f, "\nPets:")?;
            for pet in &p.pets {
                let mark = if pet.favorite { " (favorite)" } else { "" };
                writeln!(f, "- {} ({}, {} years){}", pet.name, pet.kind, pet.age, mark)?;
            }
        }

        writeln!(f, "\nEducation:")?;
        for edu in &p.education {
            writeln!(f, "- {}, {} ({}) - GPA: {:.2}", edu.institution, edu.degree, edu.year, edu.gpa)?;
        }

        writeln!(f, "\nSkills:")?;
        for (skill, level) in &p.skills {
            writeln!(f, "- {}: {}", skill, "*".repeat(usize::from(*level)))?;
        }

        writeln!(
            f,
            "\nSocial: {} | {} | {} | {}",
            p.social_media.facebook,
            p.social_media.instagram,
            p.social_media.twitter,
            p.social_media.linkedin,
        )
    }
}

/// A person's friend list, resolved against the graph at render time.
pub struct FriendsView<'g>(pub PersonRef<'g>);

impl fmt::Display for FriendsView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let friends = self.0.friends();
        if friends.is_empty() {
            return writeln!(f, "No friends yet");
        }
        writeln!(f, "Friends ({}):", friends.len())?;
        for friend in friends {
            let p = friend.person();
            writeln!(f, "- {} ({} years) - {} from {}", p.name, p.age, p.profession, p.city)?;
        }
        Ok(())
    }
}

/// Network summary for a population of `population` people.
pub struct StatsReport<'a> {
    pub population: usize,
    pub stats: &'a NetworkStats,
}

impl fmt::Display for StatsReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Network statistics:")?;
        writeln!(f, "People: {}", self.population)?;
        writeln!(f, "Connections: {}", self.stats.total_connections)?;
        match self.stats.average_age {
            Some(age) => writeln!(f, "Average age: {age:.1}")?,
            None => writeln!(f, "Average age: n/a")?,
        }

        writeln!(f, "\nPopular hobbies:")?;
        for (hobby, count) in self.stats.hobbies_ranked() {
            writeln!(f, "- {hobby}: {count}")?;
        }

        writeln!(f, "\nCities:")?;
        for (city, count) in self.stats.cities_ranked() {
            writeln!(f, "- {city}: {count}")?;
        }
        Ok(())
    }
}
