pub mod analysis;
pub mod compare;
pub mod report;

pub use analysis::{SiteAnalysis, analyze_dataset, analyze_records};
pub use compare::{SiteComparison, compare_sites};

use colored::Colorize;

pub fn print_banner() {
    let banner = r#"
      _             _
  ___| |_ _ __ __ _| |_ __ _
 / __| __| '__/ _` | __/ _` |
 \__ \ |_| | | (_| | || (_| |
 |___/\__|_|  \__,_|\__\__,_|
"#;
    println!("{}", banner.bright_cyan());
    println!(
        "{} {}",
        "Strata - site structure analytics".bright_white(),
        format!("v{}", env!("CARGO_PKG_VERSION")).bright_blue()
    );
    println!();
}
