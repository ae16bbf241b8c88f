//! Scripted session exercising every collaborator.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use clap::builder::{PossibleValuesParser, TypedValueParser};
use console::style;
use strum::VariantNames;
use world_core::{GameLogic, Position};
use world_runtime::{Difficulty, GameInitializer, PlayerActions, RuntimeConfig, StateSerializer};

use super::{open_repository, print_audit, print_state};

/// Play a scripted session, save it, reset and reload
#[derive(Parser)]
pub struct Demo {
    /// Difficulty preset
    #[arg(
        short,
        long,
        default_value = "normal",
        ignore_case = true,
        value_parser = PossibleValuesParser::new(Difficulty::VARIANTS.iter().copied())
            .try_map(|name| name.parse::<Difficulty>()),
    )]
    difficulty: Difficulty,

    /// Slot to save into (defaults to WORLD_SAVE_SLOT)
    #[arg(short, long, value_name = "SLOT")]
    slot: Option<String>,
}

impl Demo {
    pub fn execute(self, config: &RuntimeConfig) -> Result<ExitCode> {
        let slot = self.slot.as_deref().unwrap_or(&config.save_slot);
        let repository = open_repository(config)?;

        let initializer = GameInitializer::new();
        let mut engine = initializer.create_new_game();
        engine.subscribe(|state| {
            println!(
                "  {} hp {}/{} at {}",
                style("update").dim(),
                state.player.health,
                state.player.max_health,
                state.player.position
            );
        });
        initializer.apply_difficulty(&mut engine, self.difficulty)?;

        println!("{}", style("Collecting the potion and the key").bold());
        {
            let mut player = PlayerActions::new(&mut engine);
            player.move_to(Position::new(5.0, 3.0))?;
            player.pick_up("potion1")?;
            player.move_to(Position::new(8.0, 2.0))?;
            player.pick_up("key1")?;
        }

        println!("{}", style("Opening the door").bold());
        PlayerActions::new(&mut engine).move_to(Position::new(10.0, 1.0))?;
        GameLogic::new(&mut engine).unlock_door("door1")?;
        PlayerActions::new(&mut engine).interact("door1")?;

        println!("{}", style("Stepping on a trap, then drinking").bold());
        PlayerActions::new(&mut engine).receive_damage(60.0)?;
        match GameLogic::new(&mut engine).auto_heal_player()? {
            Some(potion) => println!("  drank {potion}"),
            None => println!("  no potion needed"),
        }

        StateSerializer::new(&mut engine, &repository)
            .save(slot)
            .context("Failed to save demo session")?;
        println!("{} {}", style("Saved to slot").bold().cyan(), slot);

        if let Some(item) = engine.query().find_nearest_item(None) {
            println!(
                "{} {} ({}) at {}",
                style("Nearest item:").bold().cyan(),
                item.id,
                item.kind,
                item.position
            );
        }

        println!("{}", style("Resetting and reloading").bold());
        initializer.reset_game(&mut engine);
        StateSerializer::new(&mut engine, &repository)
            .load(slot)
            .context("Failed to reload demo session")?;

        println!();
        print_state(engine.state(), config.map_size);
        println!();
        print_audit(engine.state());

        Ok(ExitCode::SUCCESS)
    }
}
