//! Person factories.
//!
//! A factory turns an id into a fully populated `Person`. The builder calls
//! it from many worker threads at once, so implementations must not share a
//! mutable random source between calls. `RandomPersonFactory` derives a fresh
//! generator from `(seed, id)` on every call instead.

use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::model::{Education, Person, PersonId, Pet, SocialMedia};

/// Produces the person stored at index `id`.
pub trait PersonFactory: Sync {
    fn create(&self, id: PersonId) -> Person;
}

impl<F> PersonFactory for F
where
    F: Fn(PersonId) -> Person + Sync,
{
    fn create(&self, id: PersonId) -> Person {
        self(id)
    }
}

// ============================================================================
// Attribute pools
// ============================================================================

const FIRST_NAMES: &[&str] = &[
    "Alexander", "Maria", "Ivan", "Elena", "Dmitry", "Anna", "Sergey", "Olga", "Mikhail", "Tatiana",
];
const SURNAMES: &[&str] = &[
    "Ivanov", "Petrov", "Sidorov", "Smirnov", "Kuznetsov", "Popov", "Vasiliev", "Sokolov",
];
const PROFESSIONS: &[&str] = &[
    "Programmer", "Teacher", "Doctor", "Engineer", "Painter", "Designer", "Architect", "Manager",
];
const HOBBIES: &[&str] = &[
    "Reading", "Travel", "Sport", "Music", "Cooking", "Photography", "Yoga", "Drawing",
];
const CITIES: &[&str] = &[
    "Moscow", "Saint Petersburg", "Novosibirsk", "Yekaterinburg", "Kazan", "Nizhny Novgorod",
];
const PET_NAMES: &[&str] = &["Barsik", "Murka", "Sharik", "Rex", "Pushok", "Lyusya"];
const PET_KINDS: &[&str] = &["Cat", "Dog", "Hamster", "Parrot"];
const INSTITUTIONS: &[&str] = &["MSU", "SPbU", "MIPT", "HSE", "BMSTU"];
const DEGREES: &[&str] = &["Bachelor", "Master", "Specialist", "Postgraduate"];
const SKILLS: &[&str] = &[
    "Programming", "Analytics", "Project management", "Communication", "Foreign languages",
];

/// Stream tag mixed into the seed so profile and edge generators never share
/// a sequence for the same id.
pub(crate) const PROFILE_STREAM: u64 = 0x5052_4f46_494c_4531;

/// Seed for one `(base, id, stream)` triple.
pub(crate) fn derive_seed(base: u64, id: PersonId, stream: u64) -> u64 {
    base ^ stream ^ (u64::from(id.0) + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

// ============================================================================
// RandomPersonFactory
// ============================================================================

/// Draws every attribute from the built-in pools.
#[derive(Debug, Clone, Copy)]
pub struct RandomPersonFactory {
    seed: u64,
}

impl RandomPersonFactory {
    /// Same seed, same population.
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl PersonFactory for RandomPersonFactory {
    fn create(&self, id: PersonId) -> Person {
        let mut rng = StdRng::seed_from_u64(derive_seed(self.seed, id, PROFILE_STREAM));

        let name = format!("{} {}", pick(&mut rng, FIRST_NAMES), pick(&mut rng, SURNAMES));
        let age = rng.gen_range(20..60);
        let profession = pick(&mut rng, PROFESSIONS).to_string();
        let city = pick(&mut rng, CITIES).to_string();
        let salary = f64::from(rng.gen_range(50_000u32..200_000));
        let is_married = rng.gen_bool(0.5);
        let children = rng.gen_range(0..3);

        let mut hobbies: Vec<String> = Vec::new();
        for _ in 0..rng.gen_range(1..=4) {
            let hobby = pick(&mut rng, HOBBIES);
            if !hobbies.iter().any(|h| h == hobby) {
                hobbies.push(hobby.to_string());
            }
        }

        let pets = (0..rng.gen_range(0..3))
            .map(|i| Pet {
                name: pick(&mut rng, PET_NAMES).to_string(),
                kind: pick(&mut rng, PET_KINDS).to_string(),
                age: rng.gen_range(1..=10),
                favorite: i == 0,
            })
            .collect();

        let education = (0..rng.gen_range(1..=2))
            .map(|_| Education {
                institution: pick(&mut rng, INSTITUTIONS).to_string(),
                degree: pick(&mut rng, DEGREES).to_string(),
                year: rng.gen_range(2010..=2022),
                gpa: rng.gen_range(0.0..4.0),
            })
            .collect();

        let mut skills: BTreeMap<String, u8> = BTreeMap::new();
        for _ in 0..rng.gen_range(2..=5) {
            let skill = pick(&mut rng, SKILLS);
            let level = rng.gen_range(1..=5);
            skills.entry(skill.to_string()).or_insert(level);
        }

        Person {
            id,
            name,
            age,
            profession,
            hobbies,
            city,
            salary,
            is_married,
            children,
            pets,
            skills,
            education,
            social_media: SocialMedia::for_user(id),
        }
    }
}

fn pick<'a>(rng: &mut StdRng, pool: &'a [&'a str]) -> &'a str {
    // Pools are non-empty constants.
    pool.choose(rng).copied().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_ranges() {
        let factory = RandomPersonFactory::new(42);
        for i in 0..200 {
            let p = factory.create(PersonId(i));
            assert_eq!(p.id, PersonId(i));
            assert!((20..60).contains(&p.age));
            assert!((50_000.0..200_000.0).contains(&p.salary));
            assert!(p.children <= 2);
            assert!((1..=4).contains(&p.hobbies.len()));
            assert!(p.pets.len() <= 2);
            assert!((1..=2).contains(&p.education.len()));
            assert!(!p.skills.is_empty() && p.skills.len() <= 5);
            assert!(p.skills.values().all(|l| (1..=5).contains(l)));
            assert!(p.education.iter().all(|e| (0.0..4.0).contains(&e.gpa)));
            assert_eq!(p.social_media.facebook, format!("fb.com/user{i}"));
        }
    }

    #[test]
    fn test_hobbies_are_unique() {
        let factory = RandomPersonFactory::new(7);
        for i in 0..100 {
            let p = factory.create(PersonId(i));
            let mut sorted = p.hobbies.clone();
            sorted.sort();
            sorted.dedup();
            assert_eq!(sorted.len(), p.hobbies.len());
        }
    }

    #[test]
    fn test_first_pet_is_favorite() {
        let factory = RandomPersonFactory::new(3);
        for i in 0..100 {
            let p = factory.create(PersonId(i));
            for (n, pet) in p.pets.iter().enumerate() {
                assert_eq!(pet.favorite, n == 0);
            }
        }
    }

    #[test]
    fn test_same_seed_same_person() {
        let a = RandomPersonFactory::new(99).create(PersonId(5));
        let b = RandomPersonFactory::new(99).create(PersonId(5));
        assert_eq!(a, b);
    }

    #[test]
    fn test_closure_factory() {
        let factory = |id: PersonId| Person::new(id, "Fixed");
        assert_eq!(factory.create(PersonId(2)).name, "Fixed");
    }
}
