//! Headless line-oriented driver. Reads one command per line from stdin,
//! runs it against the saved game and prints the result and any effects.

use chrono::Utc;
use hugoland::achievements::ALL_ACHIEVEMENTS;
use hugoland::character::research::{research_cost, ResearchTrack};
use hugoland::core::game_mode::GameMode;
use hugoland::economy::cheats::CheatKind;
use hugoland::economy::mining::MiningTool;
use hugoland::effects::VisualEffect;
use hugoland::game::{ActionError, Game};
use hugoland::items::types::{EquipmentSlot, Item, Rarity};
use hugoland::persistence::store::{FileStore, KeyValueStore};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, PartialEq)]
enum Command {
    Help,
    Status,
    Inventory,
    Market,
    Achievements,
    Fight,
    Answer { hit: bool, category: Option<String> },
    Equip(EquipmentSlot, String),
    Unequip(EquipmentSlot),
    Upgrade(EquipmentSlot, String),
    Sell(EquipmentSlot, String),
    Discard(EquipmentSlot, String),
    Chest(u64),
    Mythical,
    Obtain(EquipmentSlot, Rarity),
    Anvil(EquipmentSlot, String, String),
    ResetItem(EquipmentSlot, String),
    Research(ResearchTrack),
    BuyRelic(String),
    UpgradeRelic(String),
    EquipRelic(String),
    UnequipRelic(String),
    SellRelic(String),
    Mine(u32, u32),
    Tool(MiningTool),
    Exchange(u64),
    Promo(String),
    Cheat(CheatKind),
    Mode(GameMode),
    Reset,
    Quit,
}

fn parse_slot(s: &str) -> Result<EquipmentSlot, String> {
    match s.to_ascii_lowercase().as_str() {
        "weapon" | "w" => Ok(EquipmentSlot::Weapon),
        "armor" | "a" => Ok(EquipmentSlot::Armor),
        other => Err(format!("unknown slot '{other}' (weapon or armor)")),
    }
}

fn parse_rarity(s: &str) -> Result<Rarity, String> {
    Rarity::ALL
        .into_iter()
        .find(|r| r.name().eq_ignore_ascii_case(s))
        .ok_or_else(|| format!("unknown rarity '{s}'"))
}

fn parse_track(s: &str) -> Result<ResearchTrack, String> {
    ResearchTrack::ALL
        .into_iter()
        .find(|t| t.name().eq_ignore_ascii_case(s))
        .ok_or_else(|| format!("unknown research track '{s}' (atk, def or hp)"))
}

fn parse_cheat(s: &str) -> Result<CheatKind, String> {
    match s.to_ascii_lowercase().as_str() {
        "coins" | "infinite_coins" => Ok(CheatKind::InfiniteCoins),
        "gems" | "infinite_gems" => Ok(CheatKind::InfiniteGems),
        "items" | "obtain_any_item" => Ok(CheatKind::ObtainAnyItem),
        other => Err(format!("unknown cheat '{other}' (coins, gems or items)")),
    }
}

fn parse_number<T: std::str::FromStr>(s: &str) -> Result<T, String> {
    s.parse().map_err(|_| format!("'{s}' is not a number"))
}

fn parse_command(line: &str) -> Result<Command, String> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let Some((&verb, args)) = words.split_first() else {
        return Err("empty command".to_string());
    };
    let arg = |i: usize| {
        args.get(i)
            .copied()
            .ok_or_else(|| format!("'{verb}' is missing an argument, try 'help'"))
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        "help" | "?" => Command::Help,
        "status" | "s" => Command::Status,
        "inventory" | "inv" => Command::Inventory,
        "market" => Command::Market,
        "achievements" => Command::Achievements,
        "fight" => Command::Fight,
        "hit" | "miss" => Command::Answer {
            hit: verb.eq_ignore_ascii_case("hit"),
            category: args.first().map(|c| c.to_string()),
        },
        "equip" => Command::Equip(parse_slot(arg(0)?)?, arg(1)?.to_string()),
        "unequip" => Command::Unequip(parse_slot(arg(0)?)?),
        "upgrade" => Command::Upgrade(parse_slot(arg(0)?)?, arg(1)?.to_string()),
        "sell" => Command::Sell(parse_slot(arg(0)?)?, arg(1)?.to_string()),
        "discard" => Command::Discard(parse_slot(arg(0)?)?, arg(1)?.to_string()),
        "chest" => Command::Chest(parse_number(arg(0)?)?),
        "mythical" => Command::Mythical,
        "obtain" => Command::Obtain(parse_slot(arg(0)?)?, parse_rarity(arg(1)?)?),
        "anvil" => Command::Anvil(
            parse_slot(arg(0)?)?,
            arg(1)?.to_string(),
            arg(2)?.to_string(),
        ),
        "reset-item" => Command::ResetItem(parse_slot(arg(0)?)?, arg(1)?.to_string()),
        "research" => Command::Research(parse_track(arg(0)?)?),
        "buy-relic" => Command::BuyRelic(arg(0)?.to_string()),
        "upgrade-relic" => Command::UpgradeRelic(arg(0)?.to_string()),
        "equip-relic" => Command::EquipRelic(arg(0)?.to_string()),
        "unequip-relic" => Command::UnequipRelic(arg(0)?.to_string()),
        "sell-relic" => Command::SellRelic(arg(0)?.to_string()),
        "mine" => Command::Mine(parse_number(arg(0)?)?, parse_number(arg(1)?)?),
        "tool" => Command::Tool(args.join(" ").parse().map_err(|e: ActionError| e.to_string())?),
        "exchange" => Command::Exchange(parse_number(arg(0)?)?),
        "promo" => Command::Promo(arg(0)?.to_string()),
        "cheat" => Command::Cheat(parse_cheat(arg(0)?)?),
        "mode" => Command::Mode(
            GameMode::from_name(arg(0)?).ok_or_else(|| format!("unknown mode '{}'", args[0]))?,
        ),
        "reset-game" => Command::Reset,
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(format!("unknown command '{other}', try 'help'")),
    };
    Ok(command)
}

fn describe_item(item: &Item, equipped: bool) -> String {
    format!(
        "{}{} [{}] {} Lv{} power {} dur {}/{}{}",
        if equipped { "* " } else { "  " },
        item.id,
        item.rarity.name(),
        item.name,
        item.level,
        item.effective_power(),
        item.durability,
        item.max_durability,
        if item.is_enchanted { " (enchanted)" } else { "" }
    )
}

fn render<S: KeyValueStore, R: Rng>(game: &Game<S, R>, command: &Command, now: i64) -> String {
    let s = game.state();
    match command {
        Command::Status => {
            let stats = &s.player_stats;
            let mut out = format!(
                "Zone {}{} | {} coins, {} gems, {} shiny | HP {}/{} ATK {} DEF {} | streak {} (best {}) | mode {}",
                s.zone,
                if s.is_premium { " (premium)" } else { "" },
                s.coins,
                s.gems,
                s.shiny_gems,
                stats.hp,
                stats.max_hp,
                stats.atk,
                stats.def,
                s.knowledge_streak.current,
                s.knowledge_streak.best,
                s.game_mode.current.name(),
            );
            if let Some(enemy) = &s.combat.current_enemy {
                out.push_str(&format!(
                    "\nFighting {}: HP {}/{} ATK {} DEF {}",
                    enemy.name, enemy.hp, enemy.max_hp, enemy.atk, enemy.def
                ));
            }
            for track in ResearchTrack::ALL {
                let level = s.research.level(track);
                out.push_str(&format!(
                    "\n{} research Lv{} (next {} coins)",
                    track.name(),
                    level,
                    research_cost(level)
                ));
            }
            out
        }
        Command::Inventory => {
            let inv = &s.inventory;
            let mut lines = Vec::new();
            for slot in [EquipmentSlot::Weapon, EquipmentSlot::Armor] {
                lines.push(format!("{}s:", slot.name()));
                for item in inv.items(slot) {
                    lines.push(describe_item(item, inv.is_equipped(slot, &item.id)));
                }
            }
            lines.push("Relics:".to_string());
            for relic in &inv.relics {
                lines.push(format!(
                    "{}{} {} ({}) Lv{} power {}",
                    if inv.is_relic_equipped(&relic.id) { "* " } else { "  " },
                    relic.id,
                    relic.name,
                    relic.slot.name(),
                    relic.level,
                    relic.effective_power()
                ));
            }
            lines.join("\n")
        }
        Command::Market => {
            let market = &s.yojef_market;
            let mut lines = vec![format!(
                "Yojef market, refresh in {}s:",
                market.seconds_until_refresh(now)
            )];
            for relic in &market.items {
                lines.push(format!(
                    "  {} {} ({}) power {} - {} coins",
                    relic.id,
                    relic.name,
                    relic.slot.name(),
                    relic.base_power,
                    relic.cost
                ));
            }
            lines.join("\n")
        }
        Command::Achievements => ALL_ACHIEVEMENTS
            .iter()
            .map(|def| {
                format!(
                    "[{}] {} - {}",
                    if s.achievements.is_unlocked(def.id) { "x" } else { " " },
                    def.name,
                    def.description
                )
            })
            .collect::<Vec<_>>()
            .join("\n"),
        _ => String::new(),
    }
}

fn execute<S: KeyValueStore, R: Rng>(
    game: &mut Game<S, R>,
    command: Command,
    now: i64,
) -> Result<String, ActionError> {
    let message = match command {
        Command::Help => HELP.to_string(),
        Command::Status | Command::Inventory | Command::Market | Command::Achievements => {
            render(game, &command, now)
        }
        Command::Fight => {
            let enemy = game.start_combat();
            format!(
                "A {} (zone {}) appears: HP {} ATK {} DEF {}",
                enemy.name, enemy.zone, enemy.hp, enemy.atk, enemy.def
            )
        }
        Command::Answer { hit, category } => {
            let outcome = game.attack(hit, category.as_deref(), now)?;
            if outcome.encounter_log.is_empty() {
                game.state().combat.log.last().cloned().unwrap_or_default()
            } else {
                outcome.encounter_log.join("\n")
            }
        }
        Command::Equip(slot, id) => game.equip(slot, &id).map(|()| format!("Equipped {id}"))?,
        Command::Unequip(slot) => {
            if game.unequip(slot) {
                format!("{} unequipped", slot.name())
            } else {
                "Nothing equipped there".to_string()
            }
        }
        Command::Upgrade(slot, id) => {
            let level = game.upgrade_item(slot, &id)?;
            format!("{id} is now level {level}")
        }
        Command::Sell(slot, id) => format!("Sold for {} coins", game.sell_item(slot, &id)?),
        Command::Discard(slot, id) => game.discard_item(slot, &id).map(|()| format!("Discarded {id}"))?,
        Command::Chest(cost) => {
            let reward = game.open_chest(cost)?;
            let mut lines: Vec<String> = reward
                .items
                .iter()
                .map(|i| describe_item(i, false))
                .collect();
            lines.push(format!("+{} bonus gems", reward.bonus_gems));
            lines.join("\n")
        }
        Command::Mythical => describe_item(&game.purchase_mythical()?, false),
        Command::Obtain(slot, rarity) => describe_item(&game.obtain_item(slot, rarity)?, false),
        Command::Anvil(slot, target, sacrifice) => {
            let durability = game.repair_with_anvil(slot, &target, &sacrifice)?;
            format!("{target} durability is now {durability}")
        }
        Command::ResetItem(slot, id) => {
            let consumed = game.reset_item_with_sacrifice(slot, &id)?;
            format!("{id} reset, {} items sacrificed", consumed.len())
        }
        Command::Research(track) => {
            let level = game.upgrade_research(track)?;
            format!("{} research is now level {level}", track.name())
        }
        Command::BuyRelic(id) => format!("Bought {}", game.purchase_relic(&id)?.name),
        Command::UpgradeRelic(id) => format!("Relic is now level {}", game.upgrade_relic(&id)?),
        Command::EquipRelic(id) => game.equip_relic(&id).map(|()| format!("Equipped {id}"))?,
        Command::UnequipRelic(id) => game.unequip_relic(&id).map(|()| format!("Unequipped {id}"))?,
        Command::SellRelic(id) => format!("Sold for {} coins", game.sell_relic(&id)?),
        Command::Mine(x, y) => {
            let mined = game.mine_gem(x, y)?;
            format!("+{} gems, +{} shiny", mined.gems, mined.shiny_gems)
        }
        Command::Tool(tool) => format!(
            "Mining efficiency is now {}",
            game.purchase_mining_tool(tool)?
        ),
        Command::Exchange(amount) => format!("+{} gems", game.exchange_shiny_gems(amount)?),
        Command::Promo(code) => {
            let reward = game.redeem_promo_code(&code)?;
            format!("+{} coins, +{} gems", reward.coins, reward.gems)
        }
        Command::Cheat(kind) => {
            let on = game.toggle_cheat(kind);
            format!("{} {}", kind.name(), if on { "on" } else { "off" })
        }
        Command::Mode(mode) => {
            game.set_game_mode(mode);
            format!("Mode set to {}", mode.name())
        }
        Command::Reset => {
            game.reset_game();
            "Game reset".to_string()
        }
        Command::Quit => String::new(),
    };
    Ok(message)
}

fn print_effects(effects: Vec<VisualEffect>) {
    for effect in effects {
        match effect {
            VisualEffect::FloatingText { text, color } => println!("  ~ {text} ({color:?})"),
            VisualEffect::ScreenShake => println!("  ~ *shake*"),
            VisualEffect::Particles { color } => println!("  ~ *sparkle* ({color:?})"),
        }
    }
}

const HELP: &str = "\
status | inventory | market | achievements
fight                         start a fight in the current zone
hit [category] | miss [category]
equip|unequip|upgrade|sell|discard <weapon|armor> [id]
chest <cost> | mythical | obtain <slot> <rarity>
anvil <slot> <target> <sacrifice> | reset-item <slot> <id>
research <atk|def|hp>
buy-relic|upgrade-relic|equip-relic|unequip-relic|sell-relic <id>
mine <x> <y> | tool <name> | exchange <n> | promo <code>
cheat <coins|gems|items> | mode <normal|blitz|bloodlust|crazy>
reset-game | quit";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let store = match FileStore::open_default() {
        Ok(store) => store,
        Err(err) => {
            eprintln!("Could not open the save directory: {err}");
            return ExitCode::FAILURE;
        }
    };
    tracing::debug!("save directory {}", store.base_dir().display());

    let mut game = Game::load(store, ChaCha8Rng::from_entropy(), Utc::now().timestamp());
    game.tick(Utc::now().timestamp());
    println!("Hugoland v{} - type 'help' for commands", env!("CARGO_PKG_VERSION"));

    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(err) => {
                eprintln!("Failed to read input: {err}");
                break;
            }
        }
        if line.trim().is_empty() {
            continue;
        }

        let now = Utc::now().timestamp();
        let tick = game.tick(now);
        if tick.market_refreshed {
            println!("(the Yojef market has new stock)");
        }

        match parse_command(&line) {
            Ok(Command::Quit) => break,
            Ok(command) => match execute(&mut game, command, now) {
                Ok(message) if message.is_empty() => {}
                Ok(message) => println!("{message}"),
                Err(err) => println!("Can't do that: {err}"),
            },
            Err(message) => println!("{message}"),
        }
        print_effects(game.drain_effects());
    }

    game.save();
    ExitCode::SUCCESS
}
