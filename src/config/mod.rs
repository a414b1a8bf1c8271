use anyhow::Result;
use crossbeam_channel::Receiver;
use notify::{RecommendedWatcher, RecursiveMode, Watcher};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const DEFAULT_CONFIG: &str = include_str!("../../assets/default_config.toml");

/// Tuning constants for the kinetic feel. Velocities are in surface units
/// per millisecond.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Kinetics {
    /// Release velocity (either axis) that must be exceeded before
    /// inertial scrolling starts at all.
    #[serde(default = "default_velocity_start_min")]
    pub velocity_start_min: f32,
    /// Velocity below which a decaying axis snaps to zero.
    #[serde(default = "default_velocity_cut_off")]
    pub velocity_cut_off: f32,
    /// Braking strength applied each animation frame.
    #[serde(default = "default_friction_coefficient")]
    pub friction_coefficient: f32,
    /// K in the velocity estimator's `alpha = 1 / (K + 1)` blend factor.
    /// Higher values smooth more and react slower.
    #[serde(default = "default_smoothing_samples")]
    pub smoothing_samples: u32,
}

fn default_velocity_start_min() -> f32 { 15.0 / 1000.0 }
fn default_velocity_cut_off() -> f32 { 30.0 / 1000.0 }
fn default_friction_coefficient() -> f32 { 0.5 }
fn default_smoothing_samples() -> u32 { 3 }

impl Default for Kinetics {
    fn default() -> Self {
        Self {
            velocity_start_min: default_velocity_start_min(),
            velocity_cut_off: default_velocity_cut_off(),
            friction_coefficient: default_friction_coefficient(),
            smoothing_samples: default_smoothing_samples(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub kinetics: Kinetics,
}

impl Config {
    pub fn config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("~/.config"));
        base.join("kinetic_scroll").join("config.toml")
    }

    pub fn load_or_default() -> Self {
        let path = Self::config_path();
        if path.exists() {
            match std::fs::read_to_string(&path) {
                Ok(contents) => match toml::from_str(&contents) {
                    Ok(cfg) => return cfg,
                    Err(e) => {
                        log::warn!("Failed to parse config at {:?}: {}", path, e);
                    }
                },
                Err(e) => {
                    log::warn!("Failed to read config at {:?}: {}", path, e);
                }
            }
        } else {
            // Write default config
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = std::fs::write(&path, DEFAULT_CONFIG);
        }
        toml::from_str(DEFAULT_CONFIG).unwrap_or_default()
    }

    /// Watch the config file for changes, for live re-tuning of the feel.
    /// Each write lands as one unit on the returned channel; callers re-run
    /// `load_or_default` when it fires. The watcher must stay alive for as
    /// long as notifications are wanted.
    pub fn watch() -> Result<(RecommendedWatcher, Receiver<()>)> {
        let config_path = Self::config_path();
        let (tx, rx) = crossbeam_channel::bounded::<()>(1);
        let watch_path = config_path.clone();
        let mut watcher =
            notify::recommended_watcher(move |res: notify::Result<notify::Event>| {
                if let Ok(event) = res {
                    if (event.kind.is_modify() || event.kind.is_create())
                        && event.paths.iter().any(|p| p == &watch_path)
                    {
                        let _ = tx.try_send(());
                    }
                }
            })?;
        if let Some(dir) = config_path.parent() {
            watcher.watch(dir, RecursiveMode::NonRecursive)?;
        }
        Ok((watcher, rx))
    }
}
