//! CLI 模块

use clap::Parser;

#[derive(Parser)]
#[command(name = "tally")]
#[command(version)]
#[command(about = "A minimal to-do list for your terminal")]
pub struct Cli {
    /// 本次会话使用的主题 (Auto / Dark / Light / Dracula)，不写入配置
    #[arg(short, long)]
    pub theme: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_theme_flag() {
        let cli = Cli::try_parse_from(["tally", "--theme", "Dracula"]).unwrap();
        assert_eq!(cli.theme.as_deref(), Some("Dracula"));

        let cli = Cli::try_parse_from(["tally"]).unwrap();
        assert!(cli.theme.is_none());
    }
}
