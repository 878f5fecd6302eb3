use super::*;

const SAMPLE: &str = r#"{
  "results": [
    {
      "gender": "female",
      "name": { "title": "Miss", "first": "Jennie", "last": "Nichols" },
      "location": {
        "street": { "number": 8929, "name": "Valwood Pkwy" },
        "city": "Billings",
        "state": "Michigan",
        "country": "United States",
        "postcode": "63104",
        "coordinates": { "latitude": "-69.8246", "longitude": "134.8719" },
        "timezone": { "offset": "+9:30", "description": "Adelaide, Darwin" }
      },
      "email": "jennie.nichols@example.com",
      "login": {
        "uuid": "7a0eed16-9430-4d68-901f-c0d4c1c3bf00",
        "username": "yellowpeacock117",
        "password": "addison"
      },
      "dob": { "date": "1992-03-08T15:13:16.688Z", "age": 30 },
      "registered": { "date": "2007-07-09T05:51:59.390Z", "age": 14 },
      "phone": "(272) 790-0888",
      "cell": "(489) 330-2385",
      "id": { "name": "SSN", "value": "405-88-3636" },
      "picture": {
        "large": "https://randomuser.me/api/portraits/women/75.jpg",
        "medium": "https://randomuser.me/api/portraits/med/women/75.jpg",
        "thumbnail": "https://randomuser.me/api/portraits/thumb/women/75.jpg"
      },
      "nat": "US"
    }
  ],
  "info": { "seed": "abc", "results": 1, "page": 1, "version": "1.4" }
}"#;

#[test]
fn decodes_randomuser_payload_ignoring_extra_fields() {
    let response: UsersResponse = serde_json::from_str(SAMPLE).expect("decode");
    assert_eq!(response.results.len(), 1);

    let user = &response.results[0];
    assert_eq!(user.gender, Gender::Female);
    assert_eq!(user.dob.age, 30);
    assert_eq!(user.location.street.number, 8929);
}

#[test]
fn maps_login_uuid_to_record_identity() {
    let response: UsersResponse = serde_json::from_str(SAMPLE).expect("decode");
    let raw = response.results.into_iter().next().expect("one user");
    let expected_id: UserId = "7a0eed16-9430-4d68-901f-c0d4c1c3bf00".parse().expect("uuid");
    assert_eq!(raw.id(), expected_id);

    let record = raw.into_record(true);
    assert_eq!(record.id, expected_id);
    assert!(record.favorite);
    assert_eq!(record.full_name(), "Jennie Nichols");
    assert_eq!(record.mobile, "(489) 330-2385");
    assert_eq!(record.nationality, "US");
    assert_eq!(record.location.city_country(), "Billings United States");
}

#[test]
fn missing_results_is_a_decode_error() {
    assert!(serde_json::from_str::<UsersResponse>(r#"{"info": null}"#).is_err());
}
