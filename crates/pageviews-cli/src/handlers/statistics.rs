use anyhow::Result;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use pageviews_engine::supported_statistics;

pub fn handle() -> Result<()> {
    let statistics = supported_statistics();
    let max_len = statistics.iter().map(|s| s.name.len()).max().unwrap_or(0);
    let color = std::io::stdout().is_terminal();

    for statistic in statistics {
        let name = format!("{:<max_len$}", statistic.name);
        if color {
            println!("  {}  {}", name.green(), statistic.description);
        } else {
            println!("  {}  {}", name, statistic.description);
        }
    }

    Ok(())
}
