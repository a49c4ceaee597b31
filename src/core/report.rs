//! Outcome of one interaction and its text/JSON renderings.

use crate::core::cpu::{classify_cpu, parse_cpu_brand, parse_cpu_with, recommend_gpus};
use crate::core::gpu::{classify_gpu, parse_gpu};
use crate::domain::model::{
    CpuRecord, CpuTier, Flow, GpuClassification, GpuRecord, SeriesDigits,
};
use crate::utils::error::{ParseError, Result, RigError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CpuVerdict {
    pub cpu: CpuRecord,
    pub tier: CpuTier,
    pub label: &'static str,
    pub gpus: Vec<String>,
    #[serde(skip)]
    pub gpu_summary: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GpuVerdict {
    pub gpu: GpuRecord,
    pub classification: GpuClassification,
    pub recommendation: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Report {
    Cpu(CpuVerdict),
    Gpu(GpuVerdict),
    Rejected {
        flow: Flow,
        kind: &'static str,
        message: String,
    },
    InputError {
        flow: Flow,
    },
    InvalidSelection,
}

impl Report {
    pub fn rejected(flow: Flow, err: &ParseError) -> Self {
        tracing::info!("{:?} input rejected: {:?}", flow, err);
        Report::Rejected {
            flow,
            kind: err.kind(),
            message: err.to_string(),
        }
    }

    pub fn from_cpu(cpu: CpuRecord) -> Self {
        let tier = classify_cpu(&cpu);
        let picks = recommend_gpus(&cpu);
        Report::Cpu(CpuVerdict {
            cpu,
            tier,
            label: tier.label(),
            gpus: picks.models(),
            gpu_summary: picks.summary(),
        })
    }

    pub fn from_gpu(gpu: GpuRecord) -> Self {
        let classification = classify_gpu(&gpu);
        Report::Gpu(GpuVerdict {
            gpu,
            classification,
            recommendation: classification.pick().map(|p| p.label()),
        })
    }

    /// One-shot CPU classification from a brand and a series token.
    pub fn for_cpu(brand_token: &str, series_token: &str, digits: SeriesDigits) -> Self {
        match parse_cpu_with(brand_token, series_token, digits) {
            Ok(cpu) => Self::from_cpu(cpu),
            Err(e) => Self::rejected(Flow::Cpu, &e),
        }
    }

    /// Brand check alone, used by the shell before it asks for the series.
    pub fn check_cpu_brand(brand_token: &str) -> Option<Self> {
        parse_cpu_brand(brand_token)
            .err()
            .map(|e| Self::rejected(Flow::Cpu, &e))
    }

    pub fn for_gpu(raw_line: &str) -> Self {
        match parse_gpu(raw_line) {
            Ok(gpu) => Self::from_gpu(gpu),
            Err(e) => Self::rejected(Flow::Gpu, &e),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Report::Cpu(_) | Report::Gpu(_))
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.render_text()),
            OutputFormat::Json => self.to_json(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        let mut json = serde_json::to_string_pretty(self).map_err(RigError::from)?;
        json.push('\n');
        Ok(json)
    }

    /// The terminal text printed after the prompts.
    pub fn render_text(&self) -> String {
        match self {
            Report::Cpu(v) => format!(
                "\n--- CPU check ---\nCPU is {}.\n\n--- GPU recommendations ---\n\
                 Recommended GPUs for your CPU:\n- {}\n\n",
                v.label, v.gpu_summary
            ),
            Report::Gpu(v) => {
                let line = match v.recommendation {
                    Some(label) => format!("Recommended CPUs: {}", label),
                    None => "No rule for this GPU tier yet.".to_string(),
                };
                format!("\n--- CPU recommendations ---\n{}\n\n", line)
            }
            Report::Rejected { flow, message, .. } => {
                format!("{}\n{}", message, empty_sections(*flow))
            }
            Report::InputError { flow } => format!("Input error.\n{}", empty_sections(*flow)),
            Report::InvalidSelection => "Invalid selection.\n".to_string(),
        }
    }
}

fn empty_sections(flow: Flow) -> &'static str {
    match flow {
        Flow::Cpu => "\n--- CPU check ---\n\n--- GPU recommendations ---\n\n",
        Flow::Gpu => "\n--- CPU recommendations ---\n\n",
    }
}
