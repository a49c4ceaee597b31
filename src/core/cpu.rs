//! CPU pipeline: brand validation, series token parsing, tier classification
//! and the CPU to GPU recommendation table.

use crate::domain::model::{
    CpuBrand, CpuFamily, CpuRecord, CpuTier, GpuPicks, SeriesDigits, NO_SUFFIX,
};
use crate::utils::error::ParseError;
use crate::utils::text::{case_equal, to_lower, truncate, FIELD_CAP};

const RYZEN_PREFIX: &str = "ryzen";

/// Accepts `intel` or `amd` in any case. Input is capped at nine characters first.
pub fn parse_cpu_brand(token: &str) -> Result<CpuBrand, ParseError> {
    let brand = truncate(token, FIELD_CAP);
    if case_equal(brand, "intel") {
        Ok(CpuBrand::Intel)
    } else if case_equal(brand, "amd") {
        Ok(CpuBrand::Amd)
    } else {
        tracing::debug!("Rejected CPU brand: {:?}", token);
        Err(ParseError::InvalidBrand {
            input: token.to_string(),
        })
    }
}

/// Parses `i<digit>` or `ryzen<digit>` in any case. Characters after the series are ignored.
pub fn parse_cpu_series(token: &str, digits: SeriesDigits) -> Result<(CpuFamily, u32), ParseError> {
    let lower = to_lower(token);

    let parsed = if let Some(rest) = lower.strip_prefix('i') {
        read_series(rest, digits).map(|s| (CpuFamily::I, s))
    } else if let Some(rest) = lower.strip_prefix(RYZEN_PREFIX) {
        read_series(rest, digits).map(|s| (CpuFamily::Ryzen, s))
    } else {
        None
    };

    parsed.ok_or_else(|| {
        tracing::debug!("Rejected CPU series token: {:?}", token);
        ParseError::InvalidSeriesFormat {
            input: token.to_string(),
        }
    })
}

fn read_series(rest: &str, digits: SeriesDigits) -> Option<u32> {
    match digits {
        SeriesDigits::Single => rest.chars().next()?.to_digit(10),
        SeriesDigits::Multi => {
            let end = rest
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(rest.len());
            rest[..end].parse().ok()
        }
    }
}

/// Parses a brand and series token with the single-digit series rule.
pub fn parse_cpu(brand_token: &str, series_token: &str) -> Result<CpuRecord, ParseError> {
    parse_cpu_with(brand_token, series_token, SeriesDigits::Single)
}

/// The brand is checked first; a bad brand short-circuits series parsing.
pub fn parse_cpu_with(
    brand_token: &str,
    series_token: &str,
    digits: SeriesDigits,
) -> Result<CpuRecord, ParseError> {
    let brand = parse_cpu_brand(brand_token)?;
    let (family, series) = parse_cpu_series(series_token, digits)?;
    Ok(CpuRecord {
        brand,
        family,
        series,
        suffix: NO_SUFFIX.to_string(),
    })
}

pub fn cpu_tier_for_series(series: u32) -> CpuTier {
    match series {
        0..=3 => CpuTier::EntryLevel,
        5 => CpuTier::SolidMidrange,
        7 => CpuTier::HighEnd,
        _ => CpuTier::Enthusiast,
    }
}

pub fn classify_cpu(cpu: &CpuRecord) -> CpuTier {
    let tier = cpu_tier_for_series(cpu.series);
    tracing::debug!("{} {}{} classified as {}", cpu.brand, cpu.family.as_str(), cpu.series, tier);
    tier
}

pub fn gpu_picks_for_tier(tier: CpuTier) -> GpuPicks {
    match tier {
        CpuTier::EntryLevel => GpuPicks {
            rtx: &["3050", "3060"],
            rx: &["6600"],
        },
        CpuTier::SolidMidrange => GpuPicks {
            rtx: &["3060 Ti", "4060", "4070"],
            rx: &["6700 XT", "7700 XT"],
        },
        CpuTier::HighEnd => GpuPicks {
            rtx: &["4070 Super", "4070 Ti", "4080"],
            rx: &["7800 XT", "7900 XT"],
        },
        CpuTier::Enthusiast => GpuPicks {
            rtx: &["4080", "4090"],
            rx: &["7900 XTX"],
        },
    }
}

/// GPUs to pair with a CPU, bucketed exactly like [`classify_cpu`].
pub fn recommend_gpus(cpu: &CpuRecord) -> GpuPicks {
    gpu_picks_for_tier(cpu_tier_for_series(cpu.series))
}
