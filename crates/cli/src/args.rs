use std::{fs, path::PathBuf};

use anyhow::{Context, Result, ensure};
use clap::{Parser, ValueEnum};
use extin_core::{Boundary, Config};

/// Resample an external input table on a simulation time grid.
///
/// Prints one CSV row per grid time with the value of every input.
#[derive(Debug, Parser)]
#[command(name = "extin", version)]
pub struct Args {
    /// CSV file holding the input table
    #[arg(long = "input-csv", value_name = "FILE")]
    pub input_csv: Option<PathBuf>,

    /// Directory the input file is resolved against
    #[arg(long = "input-path", value_name = "DIR")]
    pub input_path: Option<PathBuf>,

    /// TOML config file; command-line flags take precedence
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Comma-separated input names, in simulation order
    #[arg(long, value_name = "NAMES", value_delimiter = ',')]
    pub inputs: Vec<String>,

    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub start: f64,

    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    pub stop: f64,

    #[arg(long, default_value_t = 0.1)]
    pub step: f64,

    /// Behavior outside the table's time range
    #[arg(long, value_enum)]
    pub boundary: Option<BoundaryArg>,

    /// Field delimiter used when the file has no `sep=` line
    #[arg(long, default_value_t = ',')]
    pub delimiter: char,

    /// Log the resolved input table after loading
    #[arg(long, default_value_t = false)]
    pub dump: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BoundaryArg {
    Extrapolate,
    Clamp,
    Error,
}

impl From<BoundaryArg> for Boundary {
    fn from(value: BoundaryArg) -> Self {
        match value {
            BoundaryArg::Extrapolate => Boundary::Extrapolate,
            BoundaryArg::Clamp => Boundary::Clamp,
            BoundaryArg::Error => Boundary::Error,
        }
    }
}

impl Args {
    /// Builds the load config from the config file, then applies flags on top.
    pub fn config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("failed to read config `{}`", path.display()))?;
                toml::from_str(&text)
                    .with_context(|| format!("invalid config `{}`", path.display()))?
            }
            None => Config::default(),
        };

        if let Some(file) = &self.input_csv {
            config.input_file = Some(file.clone());
        }
        if let Some(dir) = &self.input_path {
            config.input_dir = Some(dir.clone());
        }
        if let Some(boundary) = self.boundary {
            config.boundary = boundary.into();
        }
        config.dump_table |= self.dump;

        Ok(config)
    }

    pub fn delimiter(&self) -> Result<u8> {
        ensure!(
            self.delimiter.is_ascii(),
            "delimiter must be an ASCII character, got `{}`",
            self.delimiter
        );
        Ok(self.delimiter as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::path::Path;

    #[test]
    fn flags_build_config() {
        let args = Args::try_parse_from([
            "extin",
            "--input-csv",
            "inputs.csv",
            "--input-path",
            "data",
            "--inputs",
            "u1,u2",
            "--boundary",
            "clamp",
            "--start",
            "-1",
        ])
        .unwrap();

        let config = args.config().unwrap();
        assert_eq!(config.resolved_path(), Some(Path::new("data").join("inputs.csv")));
        assert_eq!(config.boundary, Boundary::Clamp);
        assert!(!config.dump_table);
        assert_eq!(args.inputs, vec!["u1", "u2"]);
        assert!((args.start + 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn no_input_file_gives_inactive_config() {
        let args = Args::try_parse_from(["extin", "--inputs", "u"]).unwrap();
        assert_eq!(args.config().unwrap().resolved_path(), None);
    }

    #[test]
    fn flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("extin.toml");
        fs::write(
            &path,
            "input_file = \"from_file.csv\"\nboundary = \"error\"\ndump_table = true\n",
        )
        .unwrap();

        let args = Args::try_parse_from([
            "extin",
            "--config",
            path.to_str().unwrap(),
            "--input-csv",
            "from_flag.csv",
        ])
        .unwrap();
        let config = args.config().unwrap();

        assert_eq!(config.input_file, Some(PathBuf::from("from_flag.csv")));
        assert_eq!(config.boundary, Boundary::Error);
        assert!(config.dump_table);
    }

    #[test]
    fn invalid_config_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("extin.toml");
        fs::write(&path, "input_csv = \"typo.csv\"\n").unwrap();

        let args = Args::try_parse_from(["extin", "--config", path.to_str().unwrap()]).unwrap();
        assert!(args.config().is_err());
    }

    #[test]
    fn delimiter_must_be_ascii() {
        let args = Args::try_parse_from(["extin", "--delimiter", ";"]).unwrap();
        assert_eq!(args.delimiter().unwrap(), b';');

        let args = Args::try_parse_from(["extin", "--delimiter", "é"]).unwrap();
        assert!(args.delimiter().is_err());
    }
}
