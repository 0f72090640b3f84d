//! Typed model of the external profile document.
//!
//! The game-statistics API guarantees nothing about which fields are present
//! or what JSON shape a given field takes: scalar slots switch between
//! numbers and strings across API versions, flag fields show up as numbers or
//! booleans, and whole sections can be missing. Every field here is therefore
//! optional, and parsing is lenient at the field level: a slot holding
//! something unexpected parses as absent instead of failing the document.
//! Downstream formatting code substitutes placeholders for absent values, so
//! a partially populated profile still renders.

use std::fmt;

use serde::{Deserialize, Deserializer};

/// A JSON scalar as the API is known to emit them.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl Scalar {
    /// Whether the scalar is a truthy flag: non-zero number, `true`, or a
    /// non-empty string.
    pub fn is_truthy(&self) -> bool {
        match self {
            Scalar::Bool(value) => *value,
            Scalar::Int(value) => *value != 0,
            Scalar::Float(value) => *value != 0.0,
            Scalar::Text(value) => !value.is_empty(),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(value) => write!(f, "{}", value),
            Scalar::Int(value) => write!(f, "{}", value),
            Scalar::Float(value) => write!(f, "{}", value),
            Scalar::Text(value) => write!(f, "{}", value),
        }
    }
}

fn scalar_from_value(value: serde_json::Value) -> Option<Scalar> {
    match value {
        serde_json::Value::Bool(value) => Some(Scalar::Bool(value)),
        serde_json::Value::Number(value) => match value.as_i64() {
            Some(int) => Some(Scalar::Int(int)),
            None => value.as_f64().map(Scalar::Float),
        },
        serde_json::Value::String(value) => Some(Scalar::Text(value)),
        _ => None,
    }
}

/// Deserializes a scalar slot, mapping nulls, arrays, and objects to `None`
/// instead of failing the whole document.
fn lenient_scalar<'de, D>(deserializer: D) -> Result<Option<Scalar>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(scalar_from_value))
}

/// Deserializes a nested section, mapping anything that is not the expected
/// object shape to `None`.
fn lenient_section<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|value| serde_json::from_value(value).ok()))
}

/// Deserializes an item list, dropping entries that are not item records and
/// treating a non-array slot as empty.
fn lenient_items<'de, D>(deserializer: D) -> Result<Vec<EquippedItem>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    let entries = match value {
        Some(serde_json::Value::Array(entries)) => entries,
        _ => return Ok(Vec::new()),
    };
    Ok(entries
        .into_iter()
        .filter_map(|entry| serde_json::from_value(entry).ok())
        .collect())
}

/// A player profile as returned by the profile lookup endpoint.
///
/// Field renames follow the API's wire names verbatim, including the
/// misspelled `EquippedTittle`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PlayerProfile {
    #[serde(rename = "AccountName", deserialize_with = "lenient_scalar")]
    pub account_name: Option<Scalar>,

    #[serde(rename = "AccountLevel", deserialize_with = "lenient_scalar")]
    pub account_level: Option<Scalar>,

    #[serde(rename = "AccountRegion", deserialize_with = "lenient_scalar")]
    pub account_region: Option<Scalar>,

    #[serde(rename = "AccountLikes", deserialize_with = "lenient_scalar")]
    pub account_likes: Option<Scalar>,

    #[serde(rename = "AccountAvatarId", deserialize_with = "lenient_scalar")]
    pub account_avatar_id: Option<Scalar>,

    #[serde(rename = "AccountBannerId", deserialize_with = "lenient_scalar")]
    pub account_banner_id: Option<Scalar>,

    #[serde(rename = "EquippedTittle", deserialize_with = "lenient_scalar")]
    pub equipped_title_id: Option<Scalar>,

    #[serde(rename = "ReleaseVersion", deserialize_with = "lenient_scalar")]
    pub release_version: Option<Scalar>,

    /// Booyah-pass id; any truthy value means the elite pass is owned.
    #[serde(rename = "AccountBPID", deserialize_with = "lenient_scalar")]
    pub booyah_pass_id: Option<Scalar>,

    #[serde(rename = "BrRank", deserialize_with = "lenient_scalar")]
    pub br_rank: Option<Scalar>,

    #[serde(rename = "BrMaxRank", deserialize_with = "lenient_scalar")]
    pub br_max_rank: Option<Scalar>,

    #[serde(rename = "CsRank", deserialize_with = "lenient_scalar")]
    pub cs_rank: Option<Scalar>,

    #[serde(rename = "CsMaxRank", deserialize_with = "lenient_scalar")]
    pub cs_max_rank: Option<Scalar>,

    /// Account creation time: epoch seconds or `DD/MM/YYYY : hh:mm:ss AM/PM`.
    #[serde(rename = "AccountCreateTime", deserialize_with = "lenient_scalar")]
    pub account_create_time: Option<Scalar>,

    /// Last login time, same shapes as `account_create_time`.
    #[serde(rename = "AccountLastLogin", deserialize_with = "lenient_scalar")]
    pub account_last_login: Option<Scalar>,

    #[serde(rename = "Guild Information", deserialize_with = "lenient_section")]
    pub guild: Option<GuildInfo>,

    #[serde(rename = "Pet Information", deserialize_with = "lenient_section")]
    pub pet: Option<PetInfo>,

    #[serde(rename = "Equipped Items", deserialize_with = "lenient_section")]
    pub equipment: Option<EquippedItems>,
}

/// Guild membership details.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GuildInfo {
    #[serde(rename = "GuildName", deserialize_with = "lenient_scalar")]
    pub name: Option<Scalar>,

    #[serde(rename = "GuildID", deserialize_with = "lenient_scalar")]
    pub id: Option<Scalar>,

    #[serde(rename = "GuildLevel", deserialize_with = "lenient_scalar")]
    pub level: Option<Scalar>,

    #[serde(rename = "GuildMember", deserialize_with = "lenient_scalar")]
    pub member_count: Option<Scalar>,

    #[serde(rename = "GuildCapacity", deserialize_with = "lenient_scalar")]
    pub capacity: Option<Scalar>,

    #[serde(rename = "LeaderInfo", deserialize_with = "lenient_section")]
    pub leader: Option<GuildLeader>,
}

/// Nested leader record inside the guild section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GuildLeader {
    #[serde(rename = "AccountName", deserialize_with = "lenient_scalar")]
    pub account_name: Option<Scalar>,
}

/// Pet companion details.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PetInfo {
    /// Equipped flag; the API emits the numeric flag `1` when a pet is
    /// equipped.
    #[serde(rename = "Equipped?", deserialize_with = "lenient_scalar")]
    pub equipped: Option<Scalar>,

    #[serde(rename = "PetName", deserialize_with = "lenient_scalar")]
    pub name: Option<Scalar>,

    #[serde(rename = "PetLevel", deserialize_with = "lenient_scalar")]
    pub level: Option<Scalar>,

    #[serde(rename = "PetEXP", deserialize_with = "lenient_scalar")]
    pub exp: Option<Scalar>,

    #[serde(rename = "SkinID", deserialize_with = "lenient_scalar")]
    pub skin_id: Option<Scalar>,
}

impl PetInfo {
    /// Whether the profile reports the pet as equipped.
    pub fn is_equipped(&self) -> bool {
        match &self.equipped {
            Some(Scalar::Int(value)) => *value == 1,
            Some(Scalar::Float(value)) => *value == 1.0,
            Some(Scalar::Bool(value)) => *value,
            _ => false,
        }
    }
}

/// Currently equipped cosmetics, weapons, and skills.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EquippedItems {
    #[serde(rename = "EquippedOutfit", deserialize_with = "lenient_items")]
    pub outfit: Vec<EquippedItem>,

    #[serde(rename = "EquippedWeapon", deserialize_with = "lenient_items")]
    pub weapons: Vec<EquippedItem>,

    /// Skill references; shape varies (scalar or list), kept raw for the
    /// formatter to render.
    #[serde(rename = "EquippedSkills")]
    pub skills: Option<serde_json::Value>,
}

/// A single equipped item record.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EquippedItem {
    #[serde(rename = "Items ID", deserialize_with = "lenient_scalar")]
    pub id: Option<Scalar>,

    #[serde(rename = "Items Icon", deserialize_with = "lenient_scalar")]
    pub icon: Option<Scalar>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// Tests parsing a fully populated profile document.
    ///
    /// Verifies that wire names (including `EquippedTittle` and the spaced
    /// section keys) map onto the typed model and that nested sections come
    /// through.
    ///
    /// Expected: every accessed field is Some with the wire value
    #[test]
    fn parses_populated_document() {
        let document = json!({
            "AccountName": "Foo",
            "AccountLevel": 42,
            "AccountRegion": "SG",
            "AccountLikes": "1234",
            "AccountAvatarId": 102000007,
            "AccountBannerId": 901000009,
            "EquippedTittle": 904090024,
            "ReleaseVersion": "OB48",
            "AccountBPID": 1001000081,
            "BrRank": "Heroic",
            "BrMaxRank": 3200,
            "CsRank": "Diamond",
            "CsMaxRank": 45,
            "AccountCreateTime": 1722778962,
            "AccountLastLogin": "05/08/2024 : 02:15:30 PM",
            "Guild Information": {
                "GuildName": "Legends",
                "GuildID": 3050129000i64,
                "GuildLevel": 5,
                "GuildMember": 38,
                "GuildCapacity": 50,
                "LeaderInfo": { "AccountName": "Bar" }
            },
            "Pet Information": {
                "Equipped?": 1,
                "PetName": "Rockie",
                "PetLevel": 7,
                "PetEXP": 3000,
                "SkinID": 1300000113
            },
            "Equipped Items": {
                "EquippedOutfit": [
                    { "Items ID": 203000001, "Items Icon": "https://icons.example/203000001.png" }
                ],
                "EquippedWeapon": [],
                "EquippedSkills": [16, 706, 1206]
            }
        });

        let profile: PlayerProfile = serde_json::from_value(document).unwrap();

        assert_eq!(profile.account_name, Some(Scalar::Text("Foo".to_string())));
        assert_eq!(profile.account_level, Some(Scalar::Int(42)));
        assert_eq!(profile.account_likes, Some(Scalar::Text("1234".to_string())));
        assert_eq!(
            profile.account_create_time,
            Some(Scalar::Int(1722778962))
        );

        let guild = profile.guild.unwrap();
        assert_eq!(guild.name, Some(Scalar::Text("Legends".to_string())));
        assert_eq!(
            guild.leader.unwrap().account_name,
            Some(Scalar::Text("Bar".to_string()))
        );

        let pet = profile.pet.unwrap();
        assert!(pet.is_equipped());
        assert_eq!(pet.name, Some(Scalar::Text("Rockie".to_string())));

        let equipment = profile.equipment.unwrap();
        assert_eq!(equipment.outfit.len(), 1);
        assert_eq!(equipment.outfit[0].id, Some(Scalar::Int(203000001)));
        assert!(equipment.weapons.is_empty());
        assert!(equipment.skills.is_some());
    }

    /// Tests parsing an entirely empty document.
    ///
    /// Verifies that no field is required: every slot is absent rather than
    /// producing a parse error.
    ///
    /// Expected: Ok with all fields None/empty
    #[test]
    fn parses_empty_document_to_all_absent() {
        let profile: PlayerProfile = serde_json::from_value(json!({})).unwrap();

        assert!(profile.account_name.is_none());
        assert!(profile.account_level.is_none());
        assert!(profile.guild.is_none());
        assert!(profile.pet.is_none());
        assert!(profile.equipment.is_none());
    }

    /// Tests leniency for wrong-typed slots.
    ///
    /// Verifies that a scalar slot holding an object, a section holding an
    /// array, and an item list holding junk all parse as absent/empty instead
    /// of failing the document.
    ///
    /// Expected: Ok with the malformed slots absent
    #[test]
    fn tolerates_wrong_typed_slots() {
        let document = json!({
            "AccountName": { "unexpected": "object" },
            "AccountLevel": null,
            "Guild Information": ["not", "an", "object"],
            "Equipped Items": {
                "EquippedOutfit": "not-a-list",
                "EquippedWeapon": [
                    { "Items ID": 1, "Items Icon": "https://icons.example/1.png" },
                    "junk-entry"
                ]
            }
        });

        let profile: PlayerProfile = serde_json::from_value(document).unwrap();

        assert!(profile.account_name.is_none());
        assert!(profile.account_level.is_none());
        assert!(profile.guild.is_none());

        let equipment = profile.equipment.unwrap();
        assert!(equipment.outfit.is_empty());
        assert_eq!(equipment.weapons.len(), 1);
    }

    /// Tests the pet equipped flag across the shapes the API emits.
    ///
    /// Expected: 1/1.0/true are equipped; 0, strings, and absence are not
    #[test]
    fn pet_equipped_flag_shapes() {
        let equipped = |value: serde_json::Value| -> bool {
            let pet: PetInfo = serde_json::from_value(json!({ "Equipped?": value })).unwrap();
            pet.is_equipped()
        };

        assert!(equipped(json!(1)));
        assert!(equipped(json!(1.0)));
        assert!(equipped(json!(true)));
        assert!(!equipped(json!(0)));
        assert!(!equipped(json!("1")));
        assert!(!PetInfo::default().is_equipped());
    }

    /// Tests scalar truthiness used for flag-like fields.
    ///
    /// Expected: zero and empty-string are falsy, everything else truthy
    #[test]
    fn scalar_truthiness() {
        assert!(Scalar::Int(1001000081).is_truthy());
        assert!(Scalar::Text("OB48".to_string()).is_truthy());
        assert!(Scalar::Bool(true).is_truthy());
        assert!(!Scalar::Int(0).is_truthy());
        assert!(!Scalar::Float(0.0).is_truthy());
        assert!(!Scalar::Text(String::new()).is_truthy());
        assert!(!Scalar::Bool(false).is_truthy());
    }
}
