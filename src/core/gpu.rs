//! GPU pipeline: line tokenizing, number/suffix extraction and tier
//! classification with the round-number override.

use crate::domain::model::{CpuPick, GpuClassification, GpuRecord, NO_SUFFIX};
use crate::utils::error::ParseError;
use crate::utils::text::{bounded_lower, to_lower};

/// Up to three whitespace-separated words of a GPU line. Extra words are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GpuTokens<'a> {
    pub series: &'a str,
    pub number: &'a str,
    pub suffix: Option<&'a str>,
}

pub fn tokenize_gpu_line(line: &str) -> Result<GpuTokens<'_>, ParseError> {
    let mut words = line.split_whitespace();
    match (words.next(), words.next()) {
        (Some(series), Some(number)) => Ok(GpuTokens {
            series,
            number,
            suffix: words.next(),
        }),
        (first, _) => {
            let tokens = usize::from(first.is_some());
            tracing::debug!("GPU line has {} token(s): {:?}", tokens, line);
            Err(ParseError::InvalidGpuLineShape { tokens })
        }
    }
}

/// Splits `4070ti` into `(4070, "ti")`. A token without leading digits is rejected,
/// as is a digit run too large for a model number.
pub fn extract_number_suffix(token: &str) -> Result<(u32, String), ParseError> {
    let split = token
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(token.len());
    let (digits, rest) = token.split_at(split);

    let model_number = digits.parse::<u32>().map_err(|_| {
        tracing::debug!("No usable model number in {:?}", token);
        ParseError::InvalidGpuNumber {
            input: token.to_string(),
        }
    })?;

    let suffix = if rest.is_empty() {
        NO_SUFFIX.to_string()
    } else {
        bounded_lower(rest)
    };
    Ok((model_number, suffix))
}

/// Parses a raw line such as `RTX 4070 Ti`. A standalone third word replaces any
/// suffix glued to the number.
pub fn parse_gpu(raw_line: &str) -> Result<GpuRecord, ParseError> {
    let tokens = tokenize_gpu_line(raw_line)?;
    let (model_number, embedded) = extract_number_suffix(&to_lower(tokens.number))?;

    let suffix = match tokens.suffix {
        Some(word) => bounded_lower(word),
        None => embedded,
    };

    Ok(GpuRecord {
        series: bounded_lower(tokens.series),
        model_number,
        suffix,
    })
}

/// `model_number mod 100`, except that round numbers from 7700 up map to 70/80/90.
pub fn gpu_tier(model_number: u32) -> u32 {
    match model_number % 100 {
        0 if model_number >= 7900 => 90,
        0 if model_number >= 7800 => 80,
        0 if model_number >= 7700 => 70,
        tier => tier,
    }
}

pub fn classify_gpu(gpu: &GpuRecord) -> GpuClassification {
    let tier = gpu_tier(gpu.model_number);
    let classification = match CpuPick::from_tier(tier) {
        Some(pick) => GpuClassification::Matched { tier, pick },
        None => GpuClassification::Unmatched { tier },
    };
    tracing::debug!(
        "{} {} {} -> {:?}",
        gpu.series,
        gpu.model_number,
        gpu.suffix,
        classification
    );
    classification
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rtx_4070_ti() {
        let gpu = parse_gpu("RTX 4070 Ti").unwrap();
        assert_eq!(gpu.series, "rtx");
        assert_eq!(gpu.model_number, 4070);
        assert_eq!(gpu.suffix, "ti");
        let classification = classify_gpu(&gpu);
        assert_eq!(classification.tier(), 70);
        assert_eq!(classification.pick().unwrap().label(), "i7 or Ryzen 7");
    }

    #[test]
    fn test_round_number_overrides() {
        let rx7900 = parse_gpu("RX 7900").unwrap();
        assert_eq!(rx7900.model_number, 7900);
        assert_eq!(rx7900.suffix, "none");
        assert_eq!(
            classify_gpu(&rx7900),
            GpuClassification::Matched {
                tier: 90,
                pick: CpuPick::I9Ryzen9
            }
        );

        let rx7800 = parse_gpu("RX 7800 XT").unwrap();
        assert_eq!(rx7800.suffix, "xt");
        assert_eq!(classify_gpu(&rx7800).pick(), Some(CpuPick::I7I9Ryzen7To9));

        assert_eq!(gpu_tier(7700), 70);
        assert_eq!(gpu_tier(7600), 0);
        assert_eq!(gpu_tier(8000), 90);
        assert_eq!(gpu_tier(4090), 90);
    }

    #[test]
    fn test_round_number_below_threshold_is_unmatched() {
        let gpu = parse_gpu("RX 6600").unwrap();
        assert_eq!(classify_gpu(&gpu), GpuClassification::Unmatched { tier: 0 });
    }

    #[test]
    fn test_embedded_suffix() {
        let gpu = parse_gpu("rtx 4070TI").unwrap();
        assert_eq!(gpu.model_number, 4070);
        assert_eq!(gpu.suffix, "ti");
    }

    #[test]
    fn test_standalone_suffix_overrides_embedded() {
        let gpu = parse_gpu("RX 7900xt XTX").unwrap();
        assert_eq!(gpu.suffix, "xtx");
    }

    #[test]
    fn test_fields_are_capped_at_nine() {
        let gpu = parse_gpu("GEFORCERTX 4070SUPERDUPERX SUPERCALIFRAGILISTIC").unwrap();
        assert_eq!(gpu.series, "geforcert");
        assert_eq!(gpu.suffix, "supercali");

        let (_, suffix) = extract_number_suffix("4070superduperx").unwrap();
        assert_eq!(suffix, "superdupe");
    }

    #[test]
    fn test_extra_words_ignored() {
        let gpu = parse_gpu("RTX 4060 Ti 16GB edition").unwrap();
        assert_eq!(gpu.model_number, 4060);
        assert_eq!(gpu.suffix, "ti");
    }

    #[test]
    fn test_line_shape_errors() {
        assert_eq!(
            parse_gpu("onlyoneword").unwrap_err(),
            ParseError::InvalidGpuLineShape { tokens: 1 }
        );
        assert_eq!(
            parse_gpu("   ").unwrap_err(),
            ParseError::InvalidGpuLineShape { tokens: 0 }
        );
    }

    #[test]
    fn test_number_errors() {
        assert!(matches!(
            parse_gpu("RTX abcd").unwrap_err(),
            ParseError::InvalidGpuNumber { .. }
        ));
        assert!(matches!(
            parse_gpu("RTX ti 4070").unwrap_err(),
            ParseError::InvalidGpuNumber { .. }
        ));
        assert!(matches!(
            parse_gpu("RTX 99999999999").unwrap_err(),
            ParseError::InvalidGpuNumber { .. }
        ));
    }

    #[test]
    fn test_tokenize_keeps_three() {
        let tokens = tokenize_gpu_line("  RX\t7800   XT  extra").unwrap();
        assert_eq!(tokens.series, "RX");
        assert_eq!(tokens.number, "7800");
        assert_eq!(tokens.suffix, Some("XT"));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Tiers outside the rule table classify as unmatched, never as an error.
        #[test]
        fn unmatched_outside_rule_table(model_number: u32) {
            let gpu = GpuRecord {
                series: "rtx".to_string(),
                model_number,
                suffix: NO_SUFFIX.to_string(),
            };
            let classification = classify_gpu(&gpu);
            let tier = gpu_tier(model_number);
            prop_assert_eq!(classification.tier(), tier);
            if [50, 60, 70, 80, 90].contains(&tier) {
                prop_assert!(classification.pick().is_some());
            } else {
                prop_assert_eq!(classification, GpuClassification::Unmatched { tier });
            }
        }

        /// Non-round numbers keep their last two digits as the tier.
        #[test]
        fn baseline_tier_is_mod_100(model_number in 1u32..1_000_000) {
            prop_assume!(model_number % 100 != 0);
            prop_assert_eq!(gpu_tier(model_number), model_number % 100);
        }

        #[test]
        fn parsed_fields_are_lowercase(
            series in "[A-Za-z]{1,12}",
            number in 0u32..100_000,
            suffix in "[A-Za-z]{1,12}",
        ) {
            let gpu = parse_gpu(&format!("{} {}{}", series, number, suffix)).unwrap();
            prop_assert_eq!(gpu.model_number, number);
            prop_assert_eq!(gpu.series.clone(), gpu.series.to_ascii_lowercase());
            prop_assert_eq!(gpu.suffix.clone(), gpu.suffix.to_ascii_lowercase());
            prop_assert!(gpu.series.chars().count() <= 9);
            prop_assert!(gpu.suffix.chars().count() <= 9);
        }
    }
}
