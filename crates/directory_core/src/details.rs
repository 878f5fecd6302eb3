//! Derived values for the detail view and the statistics panel.

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};
use shared::domain::{Gender, UserId, UserRecord};

use crate::favorites::FavoriteSet;

/// Whole years elapsed, counting the birthday only once it has been reached.
pub fn age_on(date_of_birth: NaiveDate, today: NaiveDate) -> u32 {
    let mut age = today.year() - date_of_birth.year();
    if (today.month(), today.day()) < (date_of_birth.month(), date_of_birth.day()) {
        age -= 1;
    }
    u32::try_from(age).unwrap_or(0)
}

pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

const ZODIAC_RANGES: [(ZodiacSign, (u32, u32), (u32, u32)); 12] = [
    (ZodiacSign::Aries, (3, 21), (4, 19)),
    (ZodiacSign::Taurus, (4, 20), (5, 20)),
    (ZodiacSign::Gemini, (5, 21), (6, 20)),
    (ZodiacSign::Cancer, (6, 21), (7, 22)),
    (ZodiacSign::Leo, (7, 23), (8, 22)),
    (ZodiacSign::Virgo, (8, 23), (9, 22)),
    (ZodiacSign::Libra, (9, 23), (10, 22)),
    (ZodiacSign::Scorpio, (10, 23), (11, 21)),
    (ZodiacSign::Sagittarius, (11, 22), (12, 21)),
    (ZodiacSign::Capricorn, (12, 22), (1, 19)),
    (ZodiacSign::Aquarius, (1, 20), (2, 18)),
    (ZodiacSign::Pisces, (2, 19), (3, 20)),
];

impl ZodiacSign {
    pub fn of(date: NaiveDate) -> Self {
        let (month, day) = (date.month(), date.day());
        ZODIAC_RANGES
            .iter()
            .find(|(_, (start_month, start_day), (end_month, end_day))| {
                (month == *start_month && day >= *start_day)
                    || (month == *end_month && day <= *end_day)
            })
            .map(|(sign, _, _)| *sign)
            .unwrap_or(ZodiacSign::Capricorn)
    }

    pub fn name(self) -> &'static str {
        match self {
            ZodiacSign::Aries => "Aries",
            ZodiacSign::Taurus => "Taurus",
            ZodiacSign::Gemini => "Gemini",
            ZodiacSign::Cancer => "Cancer",
            ZodiacSign::Leo => "Leo",
            ZodiacSign::Virgo => "Virgo",
            ZodiacSign::Libra => "Libra",
            ZodiacSign::Scorpio => "Scorpio",
            ZodiacSign::Sagittarius => "Sagittarius",
            ZodiacSign::Capricorn => "Capricorn",
            ZodiacSign::Aquarius => "Aquarius",
            ZodiacSign::Pisces => "Pisces",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDetails {
    pub id: UserId,
    pub picture_url: String,
    pub full_name: String,
    pub birth_date: String,
    pub age: u32,
    pub zodiac: ZodiacSign,
    pub gender_label: &'static str,
    pub phone: String,
    pub mobile: String,
    pub email: String,
    pub address: String,
    pub registered: String,
    pub favorite: bool,
}

impl UserDetails {
    pub fn from_record(record: &UserRecord, today: NaiveDate) -> Self {
        let birth_date = record.date_of_birth.date_naive();
        Self {
            id: record.id,
            picture_url: record.picture.large.clone(),
            full_name: record.full_name(),
            birth_date: format_long_date(birth_date),
            age: age_on(birth_date, today),
            zodiac: ZodiacSign::of(birth_date),
            gender_label: match record.gender {
                Gender::Male => "Male",
                Gender::Female => "Female",
            },
            phone: record.phone.clone(),
            mobile: record.mobile.clone(),
            email: record.email.clone(),
            address: record.location.address_line(),
            registered: format_long_date(record.registered_at.date_naive()),
            favorite: record.favorite,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirectoryStats {
    pub total: usize,
    pub male: usize,
    pub female: usize,
    pub countries: usize,
    pub average_age: u32,
    pub favorites: usize,
}

impl DirectoryStats {
    pub fn compute(records: &[UserRecord], favorites: &FavoriteSet) -> Self {
        let male = records
            .iter()
            .filter(|record| record.gender == Gender::Male)
            .count();
        let countries = records
            .iter()
            .map(|record| record.location.country.as_str())
            .collect::<HashSet<_>>()
            .len();
        let average_age = if records.is_empty() {
            0
        } else {
            let sum: u64 = records.iter().map(|record| u64::from(record.age)).sum();
            (sum as f64 / records.len() as f64).round() as u32
        };

        Self {
            total: records.len(),
            male,
            female: records.len() - male,
            countries,
            average_age,
            favorites: favorites.len(),
        }
    }
}

#[cfg(test)]
#[path = "tests/details_tests.rs"]
mod tests;
