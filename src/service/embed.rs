//! Profile reply embed composition.
//!
//! Section bodies are built as plain strings so their content can be tested
//! without a Discord connection; `build_profile_embed` assembles them into
//! the final embed. Every lookup tolerates absence - a profile missing every
//! optional field still composes a complete message of placeholders.

use serenity::all::{CreateEmbed, CreateEmbedFooter};

use crate::model::profile::{EquippedItems, GuildInfo, PetInfo, PlayerProfile, Scalar};
use crate::util::format::{
    display_or_na, escape_markdown, format_items, format_skills, format_timestamp, NA,
};

/// Icon library endpoint; cosmetic and item ids resolve to images here.
pub const ICON_LIBRARY_URL: &str = "https://ff-community-api.vercel.app/library/icons";

/// Public account page linked from the embed title.
pub const ACCOUNT_PAGE_URL: &str = "https://ff.garena.com/account";

const EMBED_COLOR: u32 = 0x3498DB;
const FOOTER_TEXT: &str = "🔥 Powered by META's API | 📧 Contact: @jackson_tn";
const FOOTER_ICON_URL: &str = "https://emoji.discord.st/emojis/7692_ff.png";

fn icon_url(id: &Scalar) -> String {
    format!("{}?id={}", ICON_LIBRARY_URL, id)
}

fn display_name(profile: &PlayerProfile) -> String {
    profile
        .account_name
        .as_ref()
        .map(Scalar::to_string)
        .unwrap_or_else(|| "Unknown".to_string())
}

/// Basic account info, rendered as a `diff` fenced block.
pub fn profile_section(profile: &PlayerProfile, uid: &str) -> String {
    let title_id = profile
        .equipped_title_id
        .as_ref()
        .map(Scalar::to_string)
        .unwrap_or_default();

    format!(
        "```diff\n\
         + Name: {name}\n\
         + UID: {uid}\n\
         + Level: {level} 🌟\n\
         + Region: {region} 🌍\n\
         + Likes: {likes} ❤️\n\
         + Title: [Equipped Title]({icons}?id={title_id})\n\
         ```",
        name = escape_markdown(&display_name(profile)),
        uid = uid,
        level = display_or_na(profile.account_level.as_ref()),
        region = display_or_na(profile.account_region.as_ref()),
        likes = display_or_na(profile.account_likes.as_ref()),
        icons = ICON_LIBRARY_URL,
        title_id = title_id,
    )
}

/// Version, pass, rank, and login activity, rendered as a `yaml` fenced block.
pub fn activity_section(profile: &PlayerProfile) -> String {
    let booyah_pass = if profile
        .booyah_pass_id
        .as_ref()
        .is_some_and(Scalar::is_truthy)
    {
        "Elite"
    } else {
        "Free"
    };

    format!(
        "```yaml\n\
         Version: {version} 🛠️\n\
         Booyah Pass: {booyah_pass} 🎫\n\
         BR Rank: {br_rank} ({br_max} pts) 🏆\n\
         CS Rank: {cs_rank} ({cs_max} pts) 🔫\n\
         Created: {created} 🕰️\n\
         Last Login: {last_login} ⏳\n\
         ```",
        version = display_or_na(profile.release_version.as_ref()),
        booyah_pass = booyah_pass,
        br_rank = display_or_na(profile.br_rank.as_ref()),
        br_max = display_or_na(profile.br_max_rank.as_ref()),
        cs_rank = display_or_na(profile.cs_rank.as_ref()),
        cs_max = display_or_na(profile.cs_max_rank.as_ref()),
        created = format_timestamp(profile.account_create_time.as_ref()),
        last_login = format_timestamp(profile.account_last_login.as_ref()),
    )
}

/// Equipped outfit, weapons, and skills with bold sub-headers.
pub fn equipment_section(equipment: Option<&EquippedItems>) -> String {
    let outfit = equipment
        .map(|items| format_items(&items.outfit))
        .unwrap_or_else(|| NA.to_string());
    let weapons = equipment
        .map(|items| format_items(&items.weapons))
        .unwrap_or_else(|| NA.to_string());
    let skills = format_skills(equipment.and_then(|items| items.skills.as_ref()));

    format!(
        "\n**🎭 OUTFIT ITEMS**\n{outfit}\n\
         **🔫 WEAPON LOADOUT**\n{weapons}\n\
         **🦸 CHARACTER SKILLS**\n{skills}"
    )
}

/// Pet companion details, rendered as a `diff` fenced block.
///
/// Only attached to the embed when the pet is reported as equipped.
pub fn pet_section(pet: &PetInfo) -> String {
    let skin_id = pet
        .skin_id
        .as_ref()
        .map(Scalar::to_string)
        .unwrap_or_default();

    format!(
        "```diff\n\
         + Name: {name}\n\
         + Level: {level} 🐾\n\
         + EXP: {exp} XP\n\
         + Skin: [ID {skin}]({icons}?id={skin_id})\n\
         ```",
        name = display_or_na(pet.name.as_ref()),
        level = display_or_na(pet.level.as_ref()),
        exp = display_or_na(pet.exp.as_ref()),
        skin = display_or_na(pet.skin_id.as_ref()),
        icons = ICON_LIBRARY_URL,
        skin_id = skin_id,
    )
}

/// Guild membership details, rendered as a `fix` fenced block.
pub fn guild_section(guild: Option<&GuildInfo>) -> String {
    let leader_name = guild
        .and_then(|guild| guild.leader.as_ref())
        .and_then(|leader| leader.account_name.as_ref());

    format!(
        "```fix\n\
         Name: {name}\n\
         ID: {id}\n\
         Level: {level} 🏰\n\
         Members: {members}/{capacity} 👥\n\
         Leader: {leader}\n\
         ```",
        name = escape_markdown(&display_or_na(guild.and_then(|guild| guild.name.as_ref()))),
        id = display_or_na(guild.and_then(|guild| guild.id.as_ref())),
        level = display_or_na(guild.and_then(|guild| guild.level.as_ref())),
        members = display_or_na(guild.and_then(|guild| guild.member_count.as_ref())),
        capacity = display_or_na(guild.and_then(|guild| guild.capacity.as_ref())),
        leader = escape_markdown(&display_or_na(leader_name)),
    )
}

/// Assembles the full profile reply embed.
///
/// Section order is fixed: profile, activity, equipment, pet (only when
/// equipped), guild. Thumbnail and banner are attached only when the profile
/// carries the corresponding ids.
pub fn build_profile_embed(profile: &PlayerProfile, uid: &str) -> CreateEmbed {
    let mut embed = CreateEmbed::new()
        .title(format!(
            "🎮 {}'s PROFILE",
            escape_markdown(&display_name(profile))
        ))
        .url(format!("{}/{}", ACCOUNT_PAGE_URL, uid))
        .color(EMBED_COLOR);

    if let Some(avatar_id) = profile
        .account_avatar_id
        .as_ref()
        .filter(|id| id.is_truthy())
    {
        embed = embed.thumbnail(icon_url(avatar_id));
    }
    if let Some(banner_id) = profile
        .account_banner_id
        .as_ref()
        .filter(|id| id.is_truthy())
    {
        embed = embed.image(icon_url(banner_id));
    }

    embed = embed
        .field("📜 PLAYER PROFILE", profile_section(profile, uid), false)
        .field("📈 ACTIVITY STATS", activity_section(profile), false)
        .field(
            "🎒 EQUIPMENT",
            equipment_section(profile.equipment.as_ref()),
            false,
        );

    if let Some(pet) = profile.pet.as_ref().filter(|pet| pet.is_equipped()) {
        embed = embed.field("🐾 PET COMPANION", pet_section(pet), false);
    }

    embed
        .field("🏰 GUILD DETAILS", guild_section(profile.guild.as_ref()), false)
        .footer(CreateEmbedFooter::new(FOOTER_TEXT).icon_url(FOOTER_ICON_URL))
}
