use serde::Deserialize;

/// `{ name, url }` pair PokeAPI uses for every cross-reference.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// First page of the roster index (`GET /pokemon?limit=N`).
#[derive(Debug, Deserialize, Clone)]
pub struct PokemonIndex {
    pub results: Vec<PokemonSummary>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PokemonSummary {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// Full detail payload for one Pokémon (`GET /pokemon/{name}`).
///
/// Optional sections (artwork, held items, historical types/abilities)
/// decode to empty/None when the API omits them.
#[derive(Debug, Deserialize, Clone)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub base_experience: Option<u32>,
    pub height: u32,
    pub weight: u32,
    #[serde(default)]
    pub order: Option<i32>,
    #[serde(default)]
    pub is_default: bool,
    pub types: Vec<TypeSlot>,
    #[serde(default)]
    pub past_types: Vec<PastTypes>,
    pub stats: Vec<StatSlot>,
    #[serde(default)]
    pub abilities: Vec<AbilitySlot>,
    #[serde(default)]
    pub past_abilities: Vec<PastAbilities>,
    pub sprites: SpriteSet,
    pub species: NamedResource,
    #[serde(default)]
    pub held_items: Vec<HeldItem>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TypeSlot {
    pub slot: u8,
    #[serde(rename = "type")]
    pub type_info: NamedResource,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PastTypes {
    pub generation: NamedResource,
    pub types: Vec<TypeSlot>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StatSlot {
    pub base_stat: u32,
    #[serde(default)]
    pub effort: u32,
    pub stat: NamedResource,
}

/// `ability` is nullable: historical entries can name a generation where
/// the slot existed but the ability itself was since removed.
#[derive(Debug, Deserialize, Clone)]
pub struct AbilitySlot {
    pub ability: Option<NamedResource>,
    #[serde(default)]
    pub is_hidden: bool,
    #[serde(default)]
    pub slot: u8,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PastAbilities {
    pub generation: NamedResource,
    pub abilities: Vec<AbilitySlot>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct SpriteSet {
    pub front_default: Option<String>,
    pub back_default: Option<String>,
    pub front_shiny: Option<String>,
    pub back_shiny: Option<String>,
    #[serde(default)]
    pub other: Option<OtherSprites>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: Option<ArtworkSprites>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ArtworkSprites {
    pub front_default: Option<String>,
    pub front_shiny: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct HeldItem {
    pub item: NamedResource,
    #[serde(default)]
    pub version_details: Vec<HeldItemVersion>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct HeldItemVersion {
    pub version: NamedResource,
    pub rarity: u32,
}

impl Pokemon {
    /// Type names in slot order, as the API returns them.
    pub fn type_names(&self) -> Vec<String> {
        self.types
            .iter()
            .map(|slot| slot.type_info.name.clone())
            .collect()
    }

    /// High-resolution artwork URL, when the sprite set carries one.
    pub fn artwork_url(&self) -> Option<&str> {
        self.sprites
            .other
            .as_ref()
            .and_then(|other| other.official_artwork.as_ref())
            .and_then(|art| art.front_default.as_deref())
    }
}

/// Projection of one roster entry for the list screen.
#[derive(Debug, Clone)]
pub struct PokemonRow {
    pub name: String,
    pub front_sprite: Option<String>,
    pub back_sprite: Option<String>,
    pub types: Vec<String>,
}

impl PokemonRow {
    /// Build a row from the index entry's name plus the fetched record.
    /// Only these four fields of the record are ever consumed by the list.
    pub fn from_record(name: &str, record: &Pokemon) -> Self {
        Self {
            name: name.to_string(),
            front_sprite: record.sprites.front_default.clone(),
            back_sprite: record.sprites.back_default.clone(),
            types: record.type_names(),
        }
    }
}
