// Persistence
pub const STORAGE_KEY: &str = "hugoland_game_state";

// Starting snapshot
pub const STARTING_COINS: u64 = 100;
pub const STARTING_ZONE: u32 = 1;
pub const BASE_PLAYER_ATK: u32 = 50;
pub const BASE_PLAYER_DEF: u32 = 0;
pub const BASE_PLAYER_HP: u32 = 200;
pub const PREMIUM_ZONE: u32 = 50;

// Rarity roulette: [common, rare, epic, legendary, mythical], sums to 100
pub const DEFAULT_RARITY_WEIGHTS: [u32; 5] = [40, 30, 20, 8, 2];

// Gear rolls, indexed by rarity order
pub const WEAPON_ATK_FLOORS: [u32; 5] = [15, 25, 40, 60, 100];
pub const WEAPON_ATK_JITTER: u32 = 10;
pub const ARMOR_DEF_FLOORS: [u32; 5] = [8, 15, 25, 40, 70];
pub const ARMOR_DEF_JITTER: u32 = 5;
pub const GEAR_UPGRADE_COSTS: [u64; 5] = [5, 10, 20, 40, 50];
pub const DURABILITY_BY_RARITY: [u32; 5] = [50, 75, 100, 150, 200];
pub const WEAPON_SELL_RATIO: f64 = 0.5;
pub const ARMOR_SELL_RATIO: f64 = 0.75;
pub const ENCHANT_CHANCE: f64 = 0.05;
pub const ENCHANT_MULTIPLIER: u32 = 2;

// Gear upgrades
pub const WEAPON_ATK_PER_LEVEL: u32 = 10;
pub const ARMOR_DEF_PER_LEVEL: u32 = 5;

// Relics
pub const RELIC_ATK_MIN: u32 = 80;
pub const RELIC_ATK_SPREAD: u32 = 40;
pub const RELIC_DEF_MIN: u32 = 60;
pub const RELIC_DEF_SPREAD: u32 = 30;
pub const RELIC_COST_PER_POINT: u64 = 5;
pub const RELIC_BASE_UPGRADE_COST: u64 = 25;
pub const RELIC_ATK_PER_LEVEL: u32 = 22;
pub const RELIC_DEF_PER_LEVEL: u32 = 15;
pub const MAX_EQUIPPED_RELICS: usize = 5;

// Yojef market
pub const MARKET_MIN_OFFERS: usize = 3;
pub const MARKET_MAX_OFFERS: usize = 5;
pub const MARKET_REFRESH_SECONDS: i64 = 5 * 60;

// Research: cost = BASE + level * STEP, bonus = level * PERCENT
pub const RESEARCH_BASE_COST: u64 = 100;
pub const RESEARCH_COST_STEP: u64 = 25;
pub const RESEARCH_PERCENT_PER_LEVEL: u32 = 10;

// Enemy scaling
pub const ENEMY_BASE_HP: u32 = 200;
pub const ENEMY_HP_PER_ZONE: u32 = 15;
pub const ENEMY_BASE_ATK: u32 = 20;
pub const ENEMY_ATK_PER_ZONE: u32 = 8;
pub const ENEMY_DEF_PER_ZONE: u32 = 2;
pub const ENEMY_SCALING_START_ZONE: u32 = 10;
pub const ENEMY_HP_GROWTH: f64 = 1.1;
pub const ENEMY_ATK_GROWTH: f64 = 1.08;
pub const ENEMY_DEF_GROWTH: f64 = 1.05;
pub const ZONES_PER_ENEMY_TIER: u32 = 5;
pub const ITEM_DROP_MIN_ZONE: u32 = 10;
pub const ITEM_DROP_CHANCE: f64 = 0.15;

// Crazy mode enemy multipliers: (hp, atk, def)
pub const CRAZY_ENEMY_MULTIPLIERS: (u32, u32, u32) = (3, 3, 2);

// Combat rewards
pub const COINS_PER_ZONE: u64 = 8;
pub const COIN_REWARD_JITTER: u64 = 15;
pub const GEM_REWARD_JITTER: u64 = 3;

// Chests
pub const CHEST_MIN_ITEMS: u32 = 2;
pub const CHEST_MAX_ITEMS: u32 = 4;
pub const CHEST_BONUS_GEMS_MIN: u64 = 10;
pub const CHEST_BONUS_GEMS_MAX: u64 = 25;
pub const MYTHICAL_COST: u64 = 50_000;

// Knowledge streak
pub const STREAK_STEP: u32 = 5;
pub const STREAK_BONUS_PER_STEP: f64 = 0.1;
pub const STREAK_MAX_MULTIPLIER: f64 = 2.0;

// Mining
pub const MINING_GRID_SIZE: u32 = 5;
pub const SHINY_DROP_CHANCE: f64 = 0.10;
pub const SHINY_DROP_GEMS: u64 = 10;
pub const SHINY_EXCHANGE_RATE: u64 = 10;
pub const STARTING_MINING_EFFICIENCY: u64 = 1;

// Passive income
pub const PASSIVE_GEMS_PER_MINUTE: u64 = 2;
