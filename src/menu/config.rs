//! Menu configuration loaded from external RON file.
//!
//! Clip timings stand in for animation clip lengths, so menu pacing can be
//! tuned without recompilation.

use bevy::prelude::*;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;

const CONFIG_PATH: &str = "assets/data/menu/menu_config.ron";

/// Timing and opacity ramp of one named clip.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ClipDef {
    /// Clip length in seconds
    pub duration: f32,
    /// Panel opacity at clip start and end
    #[serde(default = "default_opacity")]
    pub opacity: (f32, f32),
}

fn default_opacity() -> (f32, f32) {
    (1.0, 1.0)
}

impl ClipDef {
    pub fn new(duration: f32, opacity: (f32, f32)) -> Self {
        Self { duration, opacity }
    }
}

/// Duration table keyed by clip name.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct ClipTable(HashMap<String, ClipDef>);

impl ClipTable {
    pub fn get(&self, name: &str) -> Option<&ClipDef> {
        self.0.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn insert(&mut self, name: impl Into<String>, clip: ClipDef) {
        self.0.insert(name.into(), clip);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, ClipDef)> for ClipTable {
    fn from_iter<I: IntoIterator<Item = (S, ClipDef)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(name, clip)| (name.into(), clip)).collect())
    }
}

/// Menu configuration loaded from assets/data/menu/menu_config.ron.
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    // Hover feedback
    pub hover_scale: f32,
    pub tween_rate: f32,
    pub close_spin_degrees: f32,
    // Background blur
    pub blur_radius_clear: f32,
    pub blur_radius_max: f32,
    // Rooms
    pub max_players: u32,
    pub clips: ClipTable,
}

impl Default for MenuConfig {
    fn default() -> Self {
        let enter = (0.0, 1.0);
        let exit = (1.0, 0.0);
        Self {
            hover_scale: 1.2,
            tween_rate: 10.0,
            close_spin_degrees: 90.0,
            blur_radius_clear: 1.0,
            blur_radius_max: 4.0,
            max_players: 3,
            clips: [
                ("OnEnable_StartMenuButtons", ClipDef::new(0.5, enter)),
                ("OnDisable_StartMenuButtons", ClipDef::new(0.35, exit)),
                ("Title_OnEnable", ClipDef::new(0.6, enter)),
                ("Title_OnDisable", ClipDef::new(0.4, exit)),
                ("OnEnable_SignIn", ClipDef::new(0.4, enter)),
                ("OnDisable_SignIn", ClipDef::new(0.3, exit)),
                ("OnEnable_SignUp", ClipDef::new(0.4, enter)),
                ("OnDisable_SignUp", ClipDef::new(0.3, exit)),
                ("OnEnable_RoomListAnimation", ClipDef::new(0.45, enter)),
                ("OnDisable_RoomListAnimation", ClipDef::new(0.3, exit)),
                ("OnEnable_CreateRoom", ClipDef::new(0.4, enter)),
                ("OnDisable_CreateRoom", ClipDef::new(0.3, exit)),
            ]
            .into_iter()
            .collect(),
        }
    }
}

impl MenuConfig {
    /// Load menu config from RON file.
    pub fn load() -> Self {
        match fs::read_to_string(CONFIG_PATH) {
            Ok(contents) => match Self::from_ron(&contents) {
                Ok(config) => {
                    info!("Loaded menu config from {} ({} clips)", CONFIG_PATH, config.clips.len());
                    config
                }
                Err(e) => {
                    error!("Failed to parse {}: {}. Using defaults.", CONFIG_PATH, e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Could not read {}: {}. Using defaults.", CONFIG_PATH, e);
                Self::default()
            }
        }
    }

    pub fn from_ron(contents: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(contents)
    }
}
