use std::fmt;
use std::str::FromStr;

use flashblocks_protocol::ThemeToken;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("unknown building {0:?} (expected one of: burj, eiffel, empire)")]
    UnknownBuilding(String),
}

/// The buildings the demo can race. A closed set: every id always resolves
/// to a catalog entry, so lookups are infallible and an invalid id is
/// unrepresentable past the parsing boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuildingId {
    BurjKhalifa,
    EiffelTower,
    EmpireState,
}

impl BuildingId {
    pub const ALL: [BuildingId; 3] = [
        BuildingId::BurjKhalifa,
        BuildingId::EiffelTower,
        BuildingId::EmpireState,
    ];

    /// Stable string key, used on the command line and in group ids.
    pub fn key(self) -> &'static str {
        match self {
            Self::BurjKhalifa => "burj",
            Self::EiffelTower => "eiffel",
            Self::EmpireState => "empire",
        }
    }

    /// The static catalog entry for this building.
    pub fn spec(self) -> &'static BuildingSpec {
        match self {
            Self::BurjKhalifa => &BURJ_KHALIFA,
            Self::EiffelTower => &EIFFEL_TOWER,
            Self::EmpireState => &EMPIRE_STATE,
        }
    }
}

impl fmt::Display for BuildingId {
    // Display is the human name; `key()` is the stable machine key.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.spec().name)
    }
}

impl FromStr for BuildingId {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "burj" => Ok(Self::BurjKhalifa),
            "eiffel" => Ok(Self::EiffelTower),
            "empire" => Ok(Self::EmpireState),
            other => Err(CatalogError::UnknownBuilding(other.to_string())),
        }
    }
}

/// Static attributes of one building.
///
/// `height` only scales the illustration; animation timing depends solely
/// on `floors`.
#[derive(Debug, Clone, Serialize)]
pub struct BuildingSpec {
    pub id: BuildingId,
    pub name: &'static str,
    pub floors: u32,
    pub height: f64,
    pub primary: ThemeToken,
    pub accent: ThemeToken,
    pub glass: Option<ThemeToken>,
    /// Human-readable real-world construction duration.
    pub real_construction_time: &'static str,
    /// Real-world construction duration in months, for the comparison math.
    pub real_construction_months: f64,
}

static BURJ_KHALIFA: BuildingSpec = BuildingSpec {
    id: BuildingId::BurjKhalifa,
    name: "Burj Khalifa",
    floors: 40,
    height: 400.0,
    primary: ThemeToken::BurjPrimary,
    accent: ThemeToken::BurjAccent,
    glass: Some(ThemeToken::BurjGlass),
    real_construction_time: "6 years (2004-2010)",
    real_construction_months: 72.0,
};

static EIFFEL_TOWER: BuildingSpec = BuildingSpec {
    id: BuildingId::EiffelTower,
    name: "Eiffel Tower",
    floors: 30,
    height: 300.0,
    primary: ThemeToken::EiffelPrimary,
    accent: ThemeToken::EiffelAccent,
    glass: None,
    real_construction_time: "2 years, 2 months, 5 days (1887-1889)",
    real_construction_months: 26.0,
};

static EMPIRE_STATE: BuildingSpec = BuildingSpec {
    id: BuildingId::EmpireState,
    name: "Empire State Building",
    floors: 35,
    height: 350.0,
    primary: ThemeToken::EmpirePrimary,
    accent: ThemeToken::EmpireAccent,
    glass: None,
    real_construction_time: "1 year and 45 days (1930-1931)",
    real_construction_months: 13.0,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_id_resolves_to_a_spec_with_positive_floors() {
        for id in BuildingId::ALL {
            let spec = id.spec();
            assert_eq!(spec.id, id);
            assert!(spec.floors > 0);
            assert!(spec.real_construction_months > 0.0);
        }
    }

    #[test]
    fn keys_parse_back_to_their_id() {
        for id in BuildingId::ALL {
            assert_eq!(id.key().parse::<BuildingId>().unwrap(), id);
        }
    }

    #[test]
    fn unknown_key_is_rejected() {
        let err = "chrysler".parse::<BuildingId>().unwrap_err();
        assert!(matches!(err, CatalogError::UnknownBuilding(s) if s == "chrysler"));
    }
}
