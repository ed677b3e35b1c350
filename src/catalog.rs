//! Weapon catalog
//!
//! Loaded once before the match and never mutated by the engine.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A weapon definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Weapon {
    /// Type name ("pistol", "rifle", ...)
    #[serde(rename = "type")]
    pub name: String,
    /// Damage per hit
    pub damage: f32,
    /// Rounds per clip
    pub clip_size: u32,
    /// Projectile speed (units/second)
    pub projectile_speed: f32,
    /// Maximum projectile travel (units)
    pub range: f32,
    /// Ammo label for the HUD
    pub ammo_type: String,
}

impl Weapon {
    pub fn new(
        name: &str,
        damage: f32,
        clip_size: u32,
        projectile_speed: f32,
        range: f32,
        ammo_type: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            damage,
            clip_size,
            projectile_speed,
            range,
            ammo_type: ammo_type.to_string(),
        }
    }
}

/// Errors from loading a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read weapon catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed weapon catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("weapon catalog is empty")]
    Empty,
}

/// Read-only weapon table, never empty
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Weapon>", into = "Vec<Weapon>")]
pub struct WeaponCatalog {
    weapons: Vec<Weapon>,
}

impl TryFrom<Vec<Weapon>> for WeaponCatalog {
    type Error = CatalogError;

    fn try_from(weapons: Vec<Weapon>) -> Result<Self, Self::Error> {
        Self::new(weapons)
    }
}

impl From<WeaponCatalog> for Vec<Weapon> {
    fn from(catalog: WeaponCatalog) -> Self {
        catalog.weapons
    }
}

impl Default for WeaponCatalog {
    fn default() -> Self {
        Self {
            weapons: vec![
                Weapon::new("pistol", 20.0, 12, 750.0, 250.0, "9mm"),
                Weapon::new("rifle", 30.0, 30, 750.0, 400.0, "5.56"),
                Weapon::new("shotgun", 60.0, 8, 600.0, 150.0, "12ga"),
                Weapon::new("sniper", 100.0, 5, 1200.0, 700.0, ".308"),
            ],
        }
    }
}

impl WeaponCatalog {
    /// Build a catalog from a list; rejects an empty list
    pub fn new(weapons: Vec<Weapon>) -> Result<Self, CatalogError> {
        if weapons.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self { weapons })
    }

    /// Parse a JSON array of weapons
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let weapons: Vec<Weapon> = serde_json::from_str(json)?;
        Self::new(weapons)
    }

    /// Load a JSON catalog from disk
    pub fn load(path: &std::path::Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&json)?;
        log::info!("Loaded {} weapons from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    pub fn weapons(&self) -> &[Weapon] {
        &self.weapons
    }

    pub fn len(&self) -> usize {
        self.weapons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weapons.is_empty()
    }

    /// Look up a weapon by type name
    pub fn get(&self, name: &str) -> Option<&Weapon> {
        self.weapons.iter().find(|w| w.name == name)
    }

    /// First `n` weapons (the player's starting loadout)
    pub fn loadout(&self, n: usize) -> Vec<Weapon> {
        self.weapons.iter().take(n).cloned().collect()
    }
}
