//! Page configuration from the optional
//! `<script type="application/json" id="portfolioConfig">` block.

use pf_types::PortfolioConfig;

use crate::dom::Elements;

pub fn load(els: &Elements) -> PortfolioConfig {
    let Some(script) = &els.config_script else {
        gloo_console::debug!("portfolio: no #portfolioConfig, using defaults");
        return PortfolioConfig::default();
    };
    let raw = script.text_content().unwrap_or_default();
    match PortfolioConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            gloo_console::warn!(format!("portfolio: {err}; using defaults"));
            PortfolioConfig::default()
        }
    }
}
