//! Run configuration: environment variables first, then command-line flags.

use std::path::PathBuf;

use anyhow::{anyhow, Result};

use crate::core::{PieceFactory, ScriptedShapes, ShapeSampler, SimpleRng, SupplyController};
use crate::types::{PieceKind, Variant};

pub const USAGE: &str = "\
usage: tetris-supply [--basic | --advanced] [--seed N] [--shapes IOTL]
                     [--script TOLI] [--log PATH] [--plain]

environment:
  TETRIS_SUPPLY_VARIANT   basic | advanced (default: advanced)
  TETRIS_SUPPLY_SEED      RNG seed (default: time based)
  TETRIS_SUPPLY_SHAPES    shape set drawn from (default: IOTL)
  TETRIS_SUPPLY_SCRIPT    fixed shape sequence to replay instead of the RNG;
                          every kind must be in the shape set
  TETRIS_SUPPLY_LOG_PATH  append a JSON line per action to this file
  NO_COLOR                disable coloured output
  RUST_LOG                diagnostic log filter (default: warn)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupplyConfig {
    pub variant: Variant,
    /// `None` seeds from the clock.
    pub seed: Option<u32>,
    pub shapes: Vec<PieceKind>,
    /// Replay these shapes in order instead of sampling.
    pub script: Option<Vec<PieceKind>>,
    pub log_path: Option<PathBuf>,
    pub color: bool,
}

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Run(SupplyConfig),
    Help,
}

impl Default for SupplyConfig {
    fn default() -> Self {
        Self {
            variant: Variant::Advanced,
            seed: None,
            shapes: PieceKind::ALL.to_vec(),
            script: None,
            log_path: None,
            color: true,
        }
    }
}

/// Parse a run of shape symbols such as `"IOTL"`. Whitespace and commas are
/// ignored.
pub fn parse_kinds(s: &str) -> Option<Vec<PieceKind>> {
    s.chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .map(PieceKind::from_char)
        .collect()
}

impl SupplyConfig {
    /// Create from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary variable lookup.
    ///
    /// Unusable values are ignored with a warning so a stale variable never
    /// keeps the game from starting.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(v) = lookup("TETRIS_SUPPLY_VARIANT") {
            match Variant::from_str(&v) {
                Some(variant) => config.variant = variant,
                None => log::warn!("ignoring TETRIS_SUPPLY_VARIANT={v:?}"),
            }
        }

        if let Some(v) = lookup("TETRIS_SUPPLY_SEED") {
            match v.trim().parse::<u32>() {
                Ok(seed) => config.seed = Some(seed),
                Err(_) => log::warn!("ignoring TETRIS_SUPPLY_SEED={v:?}"),
            }
        }

        if let Some(v) = lookup("TETRIS_SUPPLY_SHAPES") {
            match parse_kinds(&v).filter(|k| !k.is_empty()) {
                Some(shapes) => config.shapes = shapes,
                None => log::warn!("ignoring TETRIS_SUPPLY_SHAPES={v:?}"),
            }
        }

        if let Some(v) = lookup("TETRIS_SUPPLY_SCRIPT") {
            match parse_kinds(&v).filter(|k| !k.is_empty()) {
                Some(script) => config.script = Some(script),
                None => log::warn!("ignoring TETRIS_SUPPLY_SCRIPT={v:?}"),
            }
        }

        if let Some(kind) = config.script_kind_outside_shapes() {
            log::warn!("ignoring TETRIS_SUPPLY_SCRIPT: {kind} is not in the shape set");
            config.script = None;
        }

        config.log_path = lookup("TETRIS_SUPPLY_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) });

        // https://no-color.org: any non-empty value disables colour.
        if lookup("NO_COLOR").is_some_and(|v| !v.is_empty()) {
            config.color = false;
        }

        config
    }

    /// Apply command-line flags on top of this configuration.
    pub fn apply_args(mut self, args: &[String]) -> Result<Invocation> {
        let mut i = 0usize;
        while i < args.len() {
            match args[i].as_str() {
                "-h" | "--help" => return Ok(Invocation::Help),
                "--basic" => self.variant = Variant::Basic,
                "--advanced" => self.variant = Variant::Advanced,
                "--plain" => self.color = false,
                "--seed" => {
                    let v = flag_value(args, &mut i)?;
                    let seed = v
                        .parse::<u32>()
                        .map_err(|_| anyhow!("invalid --seed value: {}", v))?;
                    self.seed = Some(seed);
                }
                "--shapes" => {
                    let v = flag_value(args, &mut i)?;
                    let shapes = parse_kinds(v)
                        .filter(|k| !k.is_empty())
                        .ok_or_else(|| anyhow!("invalid --shapes value: {}", v))?;
                    self.shapes = shapes;
                }
                "--script" => {
                    let v = flag_value(args, &mut i)?;
                    let script = parse_kinds(v)
                        .filter(|k| !k.is_empty())
                        .ok_or_else(|| anyhow!("invalid --script value: {}", v))?;
                    self.script = Some(script);
                }
                "--log" => {
                    let v = flag_value(args, &mut i)?;
                    self.log_path = Some(PathBuf::from(v));
                }
                other => return Err(anyhow!("unknown argument: {}", other)),
            }
            i += 1;
        }
        self.check_script()?;
        Ok(Invocation::Run(self))
    }

    /// First scripted kind that the shape set does not contain.
    fn script_kind_outside_shapes(&self) -> Option<PieceKind> {
        self.script
            .iter()
            .flatten()
            .copied()
            .find(|kind| !self.shapes.contains(kind))
    }

    /// A script may only replay kinds from the configured shape set.
    pub fn check_script(&self) -> Result<()> {
        match self.script_kind_outside_shapes() {
            Some(kind) => Err(anyhow!(
                "script piece {} is not in the shape set {:?}",
                kind,
                self.shapes
            )),
            None => Ok(()),
        }
    }

    /// The shape source this configuration asks for.
    pub fn sampler(&self) -> Box<dyn ShapeSampler> {
        match (&self.script, self.seed) {
            (Some(script), _) => Box::new(ScriptedShapes::new(script.clone())),
            (None, Some(seed)) => Box::new(SimpleRng::new(seed)),
            (None, None) => Box::new(SimpleRng::from_time()),
        }
    }

    /// Build the controller for this run, queue already filled.
    pub fn build_controller(&self) -> Result<SupplyController<Box<dyn ShapeSampler>>> {
        self.check_script()?;
        let factory = PieceFactory::with_shapes(self.sampler(), &self.shapes)?;
        Ok(SupplyController::new(self.variant, factory))
    }
}

/// Environment, then `args` (program name already stripped).
pub fn parse_invocation(args: &[String]) -> Result<Invocation> {
    SupplyConfig::from_env().apply_args(args)
}

fn flag_value<'a>(args: &'a [String], i: &mut usize) -> Result<&'a str> {
    let flag = &args[*i];
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("missing value for {}", flag))
}
