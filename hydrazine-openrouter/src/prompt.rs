//! Prompt text sent to the recommender.

use hydrazine_core::MissionRequest;

const SYSTEM_CONTEXT: &str = "\
You are a Star Citizen loadout and logistics expert.

CONTEXT:
The Stanton system consists of major planets (Crusader, Hurston, ArcCorp, microTech), \
their moons (Cellin, Yela, Daymar, Magda, Ita, Arial, Aberdeen, Wala, Lyria, Calliope, Clio, Euterpe), \
and orbital stations (Seraphim, Everus Harbor, Port Tressler, Bajini Point).";

const RESPONSE_SHAPE: &str = r#"Return ONLY a JSON object with this structure:
{
  "ship": "Ship Name",
  "goal": "Goal",
  "components": [
    { "name": "Component Name", "type": "Shield/Weapon/etc", "size": 1, "location": "City Name", "shopName": "Shop Name", "price": 0, "description": "Why this one?" }
  ],
  "totalCost": 0,
  "route": ["Starting Point", "Shop Location 1", "Shop Location 2"],
  "totalJumps": 0,
  "estimatedTravelTime": "..."
}
Required: ship, components (each with name, type, location, shopName), route, totalJumps, estimatedTravelTime."#;

pub fn system_prompt() -> String {
    format!("{}\n\n{}", SYSTEM_CONTEXT, RESPONSE_SHAPE)
}

pub fn user_prompt(request: &MissionRequest) -> String {
    let ship = request.ship_name.as_deref().unwrap_or("ship of your choice");
    format!(
        "The user is currently at: \"{start}\".\n\
         They want to configure a {ship} for: \"{intent}\".\n\
         Optimization Priority: {priority}.\n\n\
         TASK:\n\
         1. Recommend the absolute best components (Shields, Weapons, Power Plant, Coolers, Quantum Drive) for the specified intent.\n\
         2. Find reputable shops (e.g., Center Mass, Dumper's Depot, Platinum Bay, Omega Pro) that stock these.\n\
         3. Calculate an optimized route starting exactly from \"{start}\".\n\
         4. Include intermediate quantum jumps if a cross-system trip is required.\n\n\
         Ensure shop locations match real shop locations (e.g., New Babbage, Area18, Orison, Lorville, GrimHEX, or specific moons).",
        start = request.start_location,
        ship = ship,
        intent = request.intent,
        priority = request.priority.describe(),
    )
}
