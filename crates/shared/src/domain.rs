use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::UnknownOption;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub Uuid);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for UserId {
    type Err = uuid::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(value.trim()).map(Self)
    }
}

/// Declares a closed set of UI options with a canonical lowercase text form.
macro_rules! option_enum {
    ($(#[$meta:meta])* $name:ident, $kind:literal, default = $default:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $text)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text,)+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownOption;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                match value.trim().to_ascii_lowercase().as_str() {
                    $($text => Ok($name::$variant),)+
                    _ => Err(UnknownOption::new(
                        $kind,
                        value,
                        Self::ALL.iter().map(|option| option.as_str()),
                    )),
                }
            }
        }
    };
}

option_enum!(Gender, "gender", default = Male {
    Male => "male",
    Female => "female",
});

option_enum!(
    /// Which text of a record the free-text search looks at.
    SearchField, "search field", default = Name {
        Name => "name",
        Location => "location",
        Email => "email",
    }
);

option_enum!(GenderFilter, "gender filter", default = All {
    All => "all",
    Male => "male",
    Female => "female",
});

option_enum!(
    /// Age brackets offered by the filter. Ages below 18 only match `All`.
    AgeBracket, "age bracket", default = All {
        All => "all",
        From18To30 => "18-30",
        From31To50 => "31-50",
        From51 => "51+",
    }
);

option_enum!(SortKey, "sort key", default = Name {
    Name => "name",
    Age => "age",
    Location => "location",
});

option_enum!(ViewMode, "view mode", default = Grid {
    Grid => "grid",
    List => "list",
});

impl GenderFilter {
    pub fn matches(self, gender: Gender) -> bool {
        match self {
            GenderFilter::All => true,
            GenderFilter::Male => gender == Gender::Male,
            GenderFilter::Female => gender == Gender::Female,
        }
    }
}

impl AgeBracket {
    pub fn contains(self, age: u32) -> bool {
        match self {
            AgeBracket::All => true,
            AgeBracket::From18To30 => (18..=30).contains(&age),
            AgeBracket::From31To50 => (31..=50).contains(&age),
            AgeBracket::From51 => age >= 51,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonName {
    pub title: String,
    pub first: String,
    pub last: String,
}

impl PersonName {
    pub fn full(&self) -> String {
        format!("{} {}", self.first, self.last)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Street {
    pub number: u32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub street: Street,
    pub city: String,
    pub state: String,
    pub country: String,
}

impl Location {
    pub fn city_country(&self) -> String {
        format!("{} {}", self.city, self.country)
    }

    pub fn address_line(&self) -> String {
        format!(
            "{} {}, {}, {}, {}",
            self.street.number, self.street.name, self.city, self.state, self.country
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pictures {
    pub large: String,
    pub medium: String,
    pub thumbnail: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: UserId,
    pub name: PersonName,
    pub gender: Gender,
    pub date_of_birth: DateTime<Utc>,
    /// Age as reported by the directory API at fetch time.
    pub age: u32,
    pub email: String,
    pub phone: String,
    pub mobile: String,
    pub location: Location,
    pub picture: Pictures,
    pub registered_at: DateTime<Utc>,
    pub nationality: String,
    pub favorite: bool,
}

impl UserRecord {
    pub fn full_name(&self) -> String {
        self.name.full()
    }

    pub fn search_text(&self, field: SearchField) -> String {
        match field {
            SearchField::Name => self.name.full(),
            SearchField::Location => self.location.city_country(),
            SearchField::Email => self.email.clone(),
        }
    }
}

#[cfg(test)]
#[path = "tests/domain_tests.rs"]
mod tests;
