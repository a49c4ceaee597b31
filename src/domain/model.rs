use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CpuBrand {
    Intel,
    Amd,
}

impl fmt::Display for CpuBrand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CpuBrand::Intel => write!(f, "Intel"),
            CpuBrand::Amd => write!(f, "AMD"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CpuFamily {
    I,
    Ryzen,
}

impl CpuFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            CpuFamily::I => "i",
            CpuFamily::Ryzen => "ryzen",
        }
    }
}

/// Reserved suffix value for records that carry no qualifier.
pub const NO_SUFFIX: &str = "none";

/// A fully validated CPU. Invalid input never produces one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CpuRecord {
    pub brand: CpuBrand,
    pub family: CpuFamily,
    pub series: u32,
    pub suffix: String,
}

/// A parsed GPU. `series` and `suffix` are lowercased and capped at nine characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GpuRecord {
    pub series: String,
    pub model_number: u32,
    pub suffix: String,
}

/// How many digits the CPU series parser reads after the family prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesDigits {
    /// `i15` reads as series 1.
    #[default]
    Single,
    /// `i15` reads as series 15.
    Multi,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CpuTier {
    EntryLevel,
    SolidMidrange,
    HighEnd,
    Enthusiast,
}

impl CpuTier {
    pub fn label(&self) -> &'static str {
        match self {
            CpuTier::EntryLevel => "entry level",
            CpuTier::SolidMidrange => "solid midrange",
            CpuTier::HighEnd => "high end",
            CpuTier::Enthusiast => "enthusiast level",
        }
    }
}

impl fmt::Display for CpuTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// GPUs suggested for a CPU tier, grouped by vendor line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GpuPicks {
    pub rtx: &'static [&'static str],
    pub rx: &'static [&'static str],
}

impl GpuPicks {
    /// Full model names, e.g. `RTX 4070 Ti`.
    pub fn models(&self) -> Vec<String> {
        self.rtx
            .iter()
            .map(|m| format!("RTX {}", m))
            .chain(self.rx.iter().map(|m| format!("RX {}", m)))
            .collect()
    }

    /// Grouped form: `RTX 4080 / 4090 or RX 7900 XTX`.
    pub fn summary(&self) -> String {
        format!("RTX {} or RX {}", self.rtx.join(" / "), self.rx.join(" / "))
    }
}

/// CPU families recommended for a GPU tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CpuPick {
    I3Ryzen3,
    I5Ryzen5,
    I7Ryzen7,
    I7I9Ryzen7To9,
    I9Ryzen9,
}

impl CpuPick {
    pub fn from_tier(tier: u32) -> Option<Self> {
        match tier {
            50 => Some(CpuPick::I3Ryzen3),
            60 => Some(CpuPick::I5Ryzen5),
            70 => Some(CpuPick::I7Ryzen7),
            80 => Some(CpuPick::I7I9Ryzen7To9),
            90 => Some(CpuPick::I9Ryzen9),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CpuPick::I3Ryzen3 => "i3 or Ryzen 3",
            CpuPick::I5Ryzen5 => "i5 or Ryzen 5",
            CpuPick::I7Ryzen7 => "i7 or Ryzen 7",
            CpuPick::I7I9Ryzen7To9 => "i7 / i9 or Ryzen 7 / 9",
            CpuPick::I9Ryzen9 => "i9 or Ryzen 9",
        }
    }
}

impl fmt::Display for CpuPick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of GPU classification. `Unmatched` is a normal outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GpuClassification {
    Matched { tier: u32, pick: CpuPick },
    Unmatched { tier: u32 },
}

impl GpuClassification {
    pub fn tier(&self) -> u32 {
        match self {
            GpuClassification::Matched { tier, .. } | GpuClassification::Unmatched { tier } => {
                *tier
            }
        }
    }

    pub fn pick(&self) -> Option<CpuPick> {
        match self {
            GpuClassification::Matched { pick, .. } => Some(*pick),
            GpuClassification::Unmatched { .. } => None,
        }
    }
}

/// Which component the user starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Flow {
    Cpu,
    Gpu,
}

impl Flow {
    pub fn from_choice(choice: i64) -> Option<Self> {
        match choice {
            1 => Some(Flow::Cpu),
            2 => Some(Flow::Gpu),
            _ => None,
        }
    }
}
