use serde::{Deserialize, Serialize};

/// A selectable airframe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ship {
    pub id: String,
    pub name: String,
    pub manufacturer: String,
    pub focus: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// The ships offered for selection.
#[derive(Debug, Clone)]
pub struct ShipCatalog {
    ships: Vec<Ship>,
}

impl ShipCatalog {
    pub fn new(ships: Vec<Ship>) -> Self {
        Self { ships }
    }

    /// The built-in airframe list.
    pub fn builtin() -> Self {
        let ships = BUILTIN_SHIPS
            .iter()
            .map(|&(id, name, manufacturer, focus, description, image)| Ship {
                id: id.to_string(),
                name: name.to_string(),
                manufacturer: manufacturer.to_string(),
                focus: focus.to_string(),
                description: description.to_string(),
                image: image.map(|slug| format!("{}/{}/store_slideshow_large.jpg", MEDIA, slug)),
            })
            .collect();
        Self { ships }
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn by_id(&self, id: &str) -> Option<&Ship> {
        self.ships.iter().find(|s| s.id == id)
    }

    /// Ships whose name, manufacturer or focus contains `query`,
    /// case-insensitively. An empty query returns every ship.
    pub fn search(&self, query: &str) -> Vec<&Ship> {
        let needle = query.to_lowercase();
        self.ships
            .iter()
            .filter(|s| {
                s.name.to_lowercase().contains(&needle)
                    || s.manufacturer.to_lowercase().contains(&needle)
                    || s.focus.to_lowercase().contains(&needle)
            })
            .collect()
    }
}

impl Default for ShipCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

const MEDIA: &str = "https://media.robertsspaceindustries.com";

// (id, name, manufacturer, focus, description, media slug)
type ShipRow = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    Option<&'static str>,
);

const BUILTIN_SHIPS: &[ShipRow] = &[
    (
        "arrow",
        "Anvil Arrow",
        "Anvil Aerospace",
        "Light Fighter",
        "Agile and lethal light fighter with a focus on speed and evasion.",
        Some("v8tjs6y8y20w5"),
    ),
    (
        "titan",
        "Avenger Titan",
        "Aegis Dynamics",
        "Multirole",
        "The legendary workhorse, perfect for starters who want to do a bit of everything.",
        Some("xsc0n97n8dshw"),
    ),
    (
        "gladius",
        "Gladius",
        "Aegis Dynamics",
        "Light Fighter",
        "A quintessential light fighter used by the UEE Navy.",
        Some("v86e2469b0gty"),
    ),
    (
        "cutlass_black",
        "Cutlass Black",
        "Drake Interplanetary",
        "Multirole",
        "A versatile ship favored by militias and less-than-legal entrepreneurs.",
        Some("7p6p6u8p7n2p9"),
    ),
    (
        "prospector",
        "Prospector",
        "MISC",
        "Mining",
        "The gold standard for solo mining operations.",
        Some("6v6p6u8p7n2p9"),
    ),
    (
        "c8x_pisces",
        "C8X Pisces Expedition",
        "Anvil Aerospace",
        "Pathfinder",
        "Small shuttle designed for exploration and quick transport.",
        None,
    ),
    (
        "constellation_andromeda",
        "Constellation Andromeda",
        "RSI",
        "Gunship",
        "Multi-crew freighter with a massive missile loadout.",
        Some("8p6p6u8p7n2p9"),
    ),
    (
        "corsair",
        "Drake Corsair",
        "Drake Interplanetary",
        "Exploration",
        "Deep space explorer with enough firepower to defend itself.",
        None,
    ),
    (
        "mercury",
        "Mercury Star Runner",
        "Crusader Industries",
        "Courier",
        "The ultimate data runner and blockade runner.",
        Some("vsc0n97n8dshw"),
    ),
];
