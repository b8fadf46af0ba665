//! A headless run: content loading, the tick loop and its reports.
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use raven_content::{BrainConfigLoader, ContentFactory, ScenarioLoader};
use raven_core::{BrainConfig, ScenarioSpec};
use raven_runtime::{RuntimeConfig, World, WorldEvent};

use crate::config::{ClientConfig, ReportFormat};

/// Event totals of a finished run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub ticks: u64,
    pub goal_changes: u64,
    pub shots: u64,
    pub kills: u64,
    pub pickups: u64,
}

impl RunSummary {
    fn record(&mut self, event: &WorldEvent) {
        match event {
            WorldEvent::GoalChanged { .. } => self.goal_changes += 1,
            WorldEvent::WeaponFired { .. } => self.shots += 1,
            WorldEvent::BotKilled { .. } => self.kills += 1,
            WorldEvent::ItemPickedUp { .. } => self.pickups += 1,
            WorldEvent::ItemRespawned { .. } | WorldEvent::BotRespawned { .. } => {}
        }
    }
}

/// A world built from client configuration, plus how to report on it.
pub struct Session {
    world: World,
    ticks: u64,
    report_every: u64,
    report_format: ReportFormat,
}

impl Session {
    /// Loads the scenario and brain config named by `config` and builds the
    /// world.
    pub fn load(config: &ClientConfig) -> Result<Self> {
        let factory = config
            .data_dir
            .clone()
            .map(ContentFactory::new)
            .unwrap_or_else(ContentFactory::bundled);

        let scenario = load_scenario(&factory, config)?;
        let brain = load_brain(&factory, config.brain_config.as_deref())?;

        let runtime = RuntimeConfig {
            brain,
            seed: config.seed,
            ..RuntimeConfig::default()
        };
        let world = World::from_scenario(&scenario, runtime)
            .with_context(|| format!("building world for scenario {}", scenario.name))?;

        Ok(Self::new(world, config))
    }

    /// Wraps an already built world.
    pub fn new(world: World, config: &ClientConfig) -> Self {
        Self {
            world,
            ticks: config.ticks,
            report_every: config.report_every,
            report_format: config.report_format,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// Runs every configured tick, dumping diagnostics to `out` periodically
    /// and once more at the end, followed by the scoreboard.
    pub fn run(&mut self, out: &mut impl Write) -> Result<RunSummary> {
        tracing::info!(
            scenario = self.world.name(),
            ticks = self.ticks,
            bots = self.world.bots().len(),
            "starting run"
        );

        let mut summary = RunSummary::default();
        for _ in 0..self.ticks {
            let report = self.world.tick();
            for event in &report.events {
                summary.record(event);
            }
            summary.ticks += 1;

            if self.report_every > 0 && summary.ticks % self.report_every == 0 {
                self.dump(out)?;
            }
        }

        if self.report_every == 0 || summary.ticks % self.report_every != 0 {
            self.dump(out)?;
        }
        self.scoreboard(out)?;

        tracing::info!(
            ticks = summary.ticks,
            shots = summary.shots,
            kills = summary.kills,
            pickups = summary.pickups,
            "run finished"
        );
        Ok(summary)
    }

    /// Writes the diagnostics of every bot in the configured format.
    pub fn dump(&self, out: &mut impl Write) -> Result<()> {
        let now = self.world.now();
        match self.report_format {
            ReportFormat::Text => {
                writeln!(
                    out,
                    "== {} tick {} ({:.1}s) ==",
                    self.world.name(),
                    now,
                    self.world.config().seconds(now.0)
                )?;
                for bot in self.world.bots() {
                    let state = if bot.is_alive() { "alive" } else { "dead" };
                    writeln!(
                        out,
                        "{} [{state}] health {} at {}",
                        bot.name(),
                        bot.body().health(),
                        bot.body().position()
                    )?;
                    write!(out, "{}", bot.report())?;
                }
            }
            ReportFormat::Json => {
                for bot in self.world.bots() {
                    let json = bot.snapshot().to_json().context("serializing snapshot")?;
                    writeln!(out, "{json}")?;
                }
            }
        }
        Ok(())
    }

    /// Writes kills, deaths and the current goal of every bot, best first.
    pub fn scoreboard(&self, out: &mut impl Write) -> Result<()> {
        let mut bots: Vec<_> = self.world.bots().iter().collect();
        bots.sort_by(|a, b| {
            b.stats()
                .kills
                .cmp(&a.stats().kills)
                .then(a.stats().deaths.cmp(&b.stats().deaths))
                .then(a.name().cmp(b.name()))
        });

        writeln!(out, "{:<12} {:>5} {:>6}  goal", "bot", "kills", "deaths")?;
        for bot in bots {
            let goal = bot
                .current_goal()
                .map_or_else(|| "-".to_owned(), |kind| kind.to_string());
            writeln!(
                out,
                "{:<12} {:>5} {:>6}  {goal}",
                bot.name(),
                bot.stats().kills,
                bot.stats().deaths
            )?;
        }
        Ok(())
    }
}

fn load_scenario(factory: &ContentFactory, config: &ClientConfig) -> Result<ScenarioSpec> {
    let scenario = if config.scenario_is_path() {
        ScenarioLoader::load(Path::new(&config.scenario))
    } else {
        factory.load_scenario(&config.scenario)
    };
    scenario.with_context(|| format!("loading scenario {}", config.scenario))
}

fn load_brain(factory: &ContentFactory, path: Option<&Path>) -> Result<BrainConfig> {
    let brain = match path {
        Some(path) => BrainConfigLoader::load(path),
        None => factory.load_brain_config(),
    };
    brain.context("loading brain config")
}
