//! Argument handling and dispatch to the collectors.

use clap::Parser;
use clap::error::ErrorKind;
use serde::Serialize;

use crate::collector::{
    AllInfo, CpuInfo, DiskInfo, MemoryInfo, MetricsSource, NetworkInfo, Outcome, get_all_info,
    get_cpu_info, get_disk_info, get_memory_info, get_network_info,
};

/// Report host cpu, memory, disk and network metrics as JSON.
#[derive(Parser, Debug)]
#[command(name = "hostinfo", version, about)]
pub struct Cli {
    /// Metric category: cpu, memory, disk, network or all (unknown values mean all)
    #[arg(long = "type", value_name = "INFO_TYPE", default_value = "all")]
    pub info_type: String,
}

/// Which collector(s) to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selector {
    Cpu,
    Memory,
    Disk,
    Network,
    #[default]
    All,
}

impl Selector {
    /// Case-insensitive; anything unrecognised selects `All`.
    pub fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "cpu" => Selector::Cpu,
            "memory" => Selector::Memory,
            "disk" => Selector::Disk,
            "network" => Selector::Network,
            _ => Selector::All,
        }
    }

    /// Scan arguments (program name excluded) for the first `--type <value>` pair.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            let arg = arg.as_ref();
            if arg == "--type" {
                // A trailing `--type` with no value leaves the default.
                return args
                    .next()
                    .map(|value| Selector::parse(value.as_ref()))
                    .unwrap_or_default();
            }
            if let Some(value) = arg.strip_prefix("--type=") {
                return Selector::parse(value);
            }
        }

        Selector::default()
    }
}

/// Resolve the selector from the full argv.
///
/// `--help` and `--version` print and exit through clap. Any other clap error
/// is ignored in favour of the lenient scan, so bad input never fails the run.
pub fn parse_args(argv: &[String]) -> Selector {
    match Cli::try_parse_from(argv) {
        Ok(cli) => Selector::parse(&cli.info_type),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(_) => Selector::from_args(argv.iter().skip(1)),
    }
}

/// One report, shaped by the selector.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Report {
    Cpu(CpuInfo),
    Memory(Outcome<MemoryInfo>),
    Disk(Outcome<DiskInfo>),
    Network(Outcome<NetworkInfo>),
    All(Box<AllInfo>),
}

pub fn collect(selector: Selector, source: &impl MetricsSource) -> Report {
    match selector {
        Selector::Cpu => Report::Cpu(get_cpu_info(source)),
        Selector::Memory => Report::Memory(get_memory_info(source)),
        Selector::Disk => Report::Disk(get_disk_info(source)),
        Selector::Network => Report::Network(get_network_info(source)),
        Selector::All => Report::All(Box::new(get_all_info(source))),
    }
}

/// Pretty JSON, two-space indent, non-ASCII left as is.
pub fn render(report: &Report) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> Vec<String> {
        std::iter::once("hostinfo")
            .chain(args.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_default_is_all() {
        assert_eq!(Selector::from_args(Vec::<String>::new()), Selector::All);
        assert_eq!(parse_args(&argv(&[])), Selector::All);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(Selector::from_args(["--type", "CPU"]), Selector::Cpu);
        assert_eq!(Selector::from_args(["--type", "Memory"]), Selector::Memory);
        assert_eq!(parse_args(&argv(&["--type", "DISK"])), Selector::Disk);
    }

    #[test]
    fn test_unknown_value_falls_back_to_all() {
        assert_eq!(Selector::from_args(["--type", "bogus"]), Selector::All);
        assert_eq!(parse_args(&argv(&["--type", "bogus"])), Selector::All);
    }

    #[test]
    fn test_first_match_wins() {
        let args = argv(&["--type", "network", "--type", "cpu"]);
        assert_eq!(Selector::from_args(args.iter().skip(1)), Selector::Network);
        assert_eq!(parse_args(&args), Selector::Network);
    }

    #[test]
    fn test_trailing_flag_without_value() {
        assert_eq!(Selector::from_args(["--type"]), Selector::All);
        assert_eq!(parse_args(&argv(&["--type"])), Selector::All);
    }

    #[test]
    fn test_stray_arguments_are_ignored() {
        let args = argv(&["extra", "--verbose", "--type", "disk"]);
        assert_eq!(parse_args(&args), Selector::Disk);
    }

    #[test]
    fn test_joined_form() {
        assert_eq!(Selector::from_args(["--type=network"]), Selector::Network);
        assert_eq!(parse_args(&argv(&["--type=Network"])), Selector::Network);
    }
}
