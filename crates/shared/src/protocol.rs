//! Wire format of the randomuser.me `/api` endpoint.
//!
//! Only the fields the directory reads are modeled; everything else in the
//! payload (postcode, coordinates, credentials, ...) is ignored on decode.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Gender, Location, PersonName, Pictures, Street, UserId, UserRecord};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsersResponse {
    pub results: Vec<RawUser>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawUser {
    pub gender: Gender,
    pub name: RawName,
    pub location: RawLocation,
    pub email: String,
    pub login: RawLogin,
    pub dob: RawDated,
    pub registered: RawDated,
    pub phone: String,
    pub cell: String,
    pub picture: RawPicture,
    #[serde(default)]
    pub nat: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawName {
    #[serde(default)]
    pub title: String,
    pub first: String,
    pub last: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawStreet {
    pub number: u32,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawLocation {
    pub street: RawStreet,
    pub city: String,
    pub state: String,
    pub country: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawLogin {
    pub uuid: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawDated {
    pub date: DateTime<Utc>,
    pub age: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawPicture {
    pub large: String,
    pub medium: String,
    pub thumbnail: String,
}

impl RawUser {
    pub fn id(&self) -> UserId {
        UserId(self.login.uuid)
    }

    pub fn into_record(self, favorite: bool) -> UserRecord {
        UserRecord {
            id: UserId(self.login.uuid),
            name: PersonName {
                title: self.name.title,
                first: self.name.first,
                last: self.name.last,
            },
            gender: self.gender,
            date_of_birth: self.dob.date,
            age: self.dob.age,
            email: self.email,
            phone: self.phone,
            mobile: self.cell,
            location: Location {
                street: Street {
                    number: self.location.street.number,
                    name: self.location.street.name,
                },
                city: self.location.city,
                state: self.location.state,
                country: self.location.country,
            },
            picture: Pictures {
                large: self.picture.large,
                medium: self.picture.medium,
                thumbnail: self.picture.thumbnail,
            },
            registered_at: self.registered.date,
            nationality: self.nat,
            favorite,
        }
    }
}

#[cfg(test)]
#[path = "tests/protocol_tests.rs"]
mod tests;
