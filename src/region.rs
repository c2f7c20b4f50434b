use rand::Rng;
use serde::Serialize;

/// Province-level division addressed by the first two digits of an identifier.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Region {
    pub code: &'static str,
    pub name: &'static str,
}

macro_rules! region {
    ($code:expr, $name:expr) => {
        Region {
            code: $code,
            name: $name,
        }
    };
}

static REGIONS: &[Region] = &[
    region!("11", "Beijing"),
    region!("12", "Tianjin"),
    region!("13", "Hebei"),
    region!("14", "Shanxi"),
    region!("15", "Inner Mongolia"),
    region!("21", "Liaoning"),
    region!("22", "Jilin"),
    region!("23", "Heilongjiang"),
    region!("31", "Shanghai"),
    region!("32", "Jiangsu"),
    region!("33", "Zhejiang"),
    region!("34", "Anhui"),
    region!("35", "Fujian"),
    region!("36", "Jiangxi"),
    region!("37", "Shandong"),
    region!("41", "Henan"),
    region!("42", "Hubei"),
    region!("43", "Hunan"),
    region!("44", "Guangdong"),
    region!("45", "Guangxi"),
    region!("46", "Hainan"),
    region!("50", "Chongqing"),
    region!("51", "Sichuan"),
    region!("52", "Guizhou"),
    region!("53", "Yunnan"),
    region!("54", "Tibet"),
    region!("61", "Shaanxi"),
    region!("62", "Gansu"),
    region!("63", "Qinghai"),
    region!("64", "Ningxia"),
    region!("65", "Xinjiang"),
    region!("71", "Taiwan"),
    region!("81", "Hong Kong"),
    region!("82", "Macau"),
];

/// Read-only view over the built-in region table.
pub struct RegionTable;

impl RegionTable {
    /// All regions in declaration order.
    pub fn list() -> &'static [Region] {
        REGIONS
    }

    /// Resolve a two-digit code to its display name.
    pub fn lookup(code: &str) -> Option<&'static str> {
        REGIONS.iter().find(|r| r.code == code).map(|r| r.name)
    }

    pub fn contains(code: &str) -> bool {
        Self::lookup(code).is_some()
    }

    /// Pick a region uniformly at random.
    pub fn choose<R: Rng + ?Sized>(rng: &mut R) -> &'static Region {
        &REGIONS[rng.random_range(0..REGIONS.len())]
    }
}
