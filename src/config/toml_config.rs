use crate::core::taxes::{TaxesCalculator, GARDEN_AREA_TAX_RATE, LIVING_AREA_TAX_RATE};
use crate::utils::error::{Result, TownError};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TownConfig {
    pub taxes: Option<TaxesConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxesConfig {
    pub living_area_rate: Option<f64>,
    pub garden_area_rate: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub verbose: Option<bool>,
    pub json: Option<bool>,
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("static regex is valid"))
}

impl TownConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${LIVING_RATE})，找不到的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn taxes_calculator(&self) -> TaxesCalculator {
        let taxes = self.taxes.as_ref();
        TaxesCalculator::new(
            taxes
                .and_then(|t| t.living_area_rate)
                .unwrap_or(LIVING_AREA_TAX_RATE),
            taxes
                .and_then(|t| t.garden_area_rate)
                .unwrap_or(GARDEN_AREA_TAX_RATE),
        )
    }

    pub fn verbose(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.verbose)
            .unwrap_or(false)
    }

    pub fn json_logs(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }
}

impl Validate for TownConfig {
    fn validate(&self) -> Result<()> {
        self.taxes_calculator().validate()
    }
}

impl std::str::FromStr for TownConfig {
    type Err = TownError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_toml_str(s)
    }
}
