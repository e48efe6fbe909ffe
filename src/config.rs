// src/config.rs

use crate::model::element::Family;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

// --- Enums ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageFormat {
    Png,
    Svg,
}

impl ImageFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Svg => "svg",
        }
    }
}

// --- Main Config Struct ---

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    /// Directory the orbital diagrams are rendered into and looked up
    /// from when showing element cards.
    #[serde(default = "default_images_dir")]
    pub images_dir: PathBuf,

    #[serde(default = "default_image_format")]
    pub image_format: ImageFormat,

    #[serde(default = "default_image_size")]
    pub image_size: u32,

    /// Families left out of quiz question pools.
    #[serde(default = "default_excluded_families")]
    pub excluded_families: Vec<Family>,

    #[serde(default)]
    pub relativistic_orbitals: bool,

    #[serde(default)]
    pub verbose_logging: bool,
}

fn default_images_dir() -> PathBuf {
    if let Some(proj) = ProjectDirs::from("com", "example", "ptview") {
        proj.data_dir().join("orbitals")
    } else {
        PathBuf::from("orbitals")
    }
}

fn default_image_format() -> ImageFormat {
    ImageFormat::Png
}

fn default_image_size() -> u32 {
    640
}

fn default_excluded_families() -> Vec<Family> {
    vec![Family::TransitionMetal, Family::Lanthanide, Family::Actinide]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            images_dir: default_images_dir(),
            image_format: default_image_format(),
            image_size: default_image_size(),
            excluded_families: default_excluded_families(),
            relativistic_orbitals: false,
            verbose_logging: false,
        }
    }
}

impl Config {
    /// Loads config from standard OS location (e.g., ~/.config/ptview/settings.json)
    pub fn load() -> (Self, String) {
        let path = Self::get_path();
        if path.exists() {
            match File::open(&path) {
                Ok(file) => {
                    let reader = BufReader::new(file);
                    match serde_json::from_reader(reader) {
                        Ok(cfg) => (cfg, format!("Config loaded from {:?}", path)),
                        Err(e) => (Self::default(), format!("Error parsing config: {}", e)),
                    }
                }
                Err(e) => (Self::default(), format!("Error opening config: {}", e)),
            }
        } else {
            (
                Self::default(),
                "No config found. Using defaults.".to_string(),
            )
        }
    }

    /// Saves config to standard OS location
    pub fn save(&self) -> String {
        let path = Self::get_path();
        if let Some(parent) = path.parent() {
            let _ = fs::create_dir_all(parent);
        }

        match File::create(&path) {
            Ok(file) => {
                let writer = BufWriter::new(file);
                match serde_json::to_writer_pretty(writer, self) {
                    Ok(_) => format!("Config saved to {:?}", path),
                    Err(e) => format!("Failed to save config: {}", e),
                }
            }
            Err(e) => format!("Could not create config file: {}", e),
        }
    }

    fn get_path() -> PathBuf {
        if let Some(proj) = ProjectDirs::from("com", "example", "ptview") {
            proj.config_dir().join("settings.json")
        } else {
            PathBuf::from("settings.json")
        }
    }
}
