// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Config command - get or set configuration values

use crate::config;
use anyhow::Result;
use std::path::Path;

/// Run the config command. `allowed_operators` is set as a
/// comma-separated list.
pub fn run(data_dir: &Path, key: &str, value: Option<String>) -> Result<()> {
    let mut cfg = config::load(data_dir)?;

    match (key, value) {
        ("log_level", Some(v)) => {
            cfg.log_level = v.clone();
            config::save(&cfg, data_dir)?;
            println!("log_level = {v}");
        }
        ("log_level", None) => println!("{}", cfg.log_level),

        ("allowed_operators", Some(v)) => {
            cfg.allowed_operators = v
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();
            config::save(&cfg, data_dir)?;
            println!("allowed_operators = {}", cfg.allowed_operators.join(", "));
        }
        ("allowed_operators", None) => {
            if cfg.allowed_operators.is_empty() {
                println!("(empty - gate open)");
            } else {
                println!("{}", cfg.allowed_operators.join(", "));
            }
        }

        ("data_dir", None) => println!("{}", data_dir.display()),
        ("data_dir", Some(_)) => {
            anyhow::bail!("data_dir is set via --data-dir or MUSTERBOOK_DATA_DIR");
        }

        (other, _) => {
            anyhow::bail!(
                "Unknown config key: {}. Valid: log_level, allowed_operators, data_dir",
                other
            );
        }
    }

    Ok(())
}
