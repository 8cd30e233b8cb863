//! SafeLaunch Guard - Webacy-powered token security audit CLI
//!
//! One audit per invocation:
//!   safelaunch_guard audit <address> [chain]
//!   safelaunch_guard stats
//!   safelaunch_guard reset
//!
//! Environment:
//!   WEBACY_API_KEY        - Webacy API key (required for audits)
//!   GUARD_GRANT_LIMIT     - Grant credit ceiling (default: 2000)
//!   GUARD_LEDGER_PATH     - Usage ledger file (default: usage_ledger.json)
//!   RUST_LOG              - Log level (default: info)

use eyre::Result;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use safelaunch_guard::{Auditor, Chain, GuardConfig, UsageLedger};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .init();

    print_banner();

    let config = match GuardConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.message);
            std::process::exit(1);
        }
    };

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("audit") => {
            let address = args.get(1).map(String::as_str).unwrap_or("");
            let chain = match args.get(2) {
                Some(raw) => match Chain::parse(raw) {
                    Ok(chain) => chain,
                    Err(e) => {
                        eprintln!("❌ {}", e.message);
                        eprintln!(
                            "   Supported networks: {}",
                            Chain::ALL.map(|c| c.display_name()).join(", ")
                        );
                        std::process::exit(1);
                    }
                },
                None => Chain::Base,
            };
            run_audit(config, address, chain).await;
        }
        Some("stats") => print_stats(&config),
        Some("reset") => {
            let mut ledger = UsageLedger::load(&config.ledger_path, config.baseline_count);
            ledger.reset();
            println!("🔄 Session counter reset to baseline {}.", config.baseline_count);
        }
        _ => {
            print_usage();
            std::process::exit(2);
        }
    }

    Ok(())
}

/// Run one audit and render the assessment. Every error kind is handled
/// here and shown as a message; nothing panics.
async fn run_audit(config: GuardConfig, address: &str, chain: Chain) {
    let grant_limit = config.grant_limit;

    let mut auditor = match Auditor::new(config) {
        Ok(auditor) => auditor,
        Err(e) => {
            eprintln!("❌ {}", e.message);
            std::process::exit(1);
        }
    };

    println!("🛡️  Analyzing Webacy Threat Intelligence...");

    match auditor.run_audit(address, chain).await {
        Ok(outcome) => {
            println!("{}", outcome.summary());

            // Report artifact
            match std::fs::write(&outcome.report_filename, &outcome.report) {
                Ok(()) => println!("📥 Audit report saved to {}", outcome.report_filename),
                Err(e) => eprintln!("⚠️  Could not save report: {}", e),
            }

            println!("🔗 Share: {}", outcome.share_url);
            if let Some(badge) = &outcome.badge_markdown {
                println!("🏅 Badge: {}", badge);
            }

            let ledger = auditor.ledger();
            println!(
                "\n📊 Credits: {} remaining ({})",
                ledger.remaining(grant_limit),
                ledger.credit_status(grant_limit).as_str()
            );
        }
        Err(e) => {
            eprintln!("❌ {}", e.message);
            std::process::exit(1);
        }
    }
}

/// Render the usage tracker: credits, health, recent audits.
fn print_stats(config: &GuardConfig) {
    let ledger = UsageLedger::load(&config.ledger_path, config.baseline_count);
    let remaining = ledger.remaining(config.grant_limit);

    println!("📊 Project Stats");
    println!("   Audits recorded: {}", ledger.count());
    println!(
        "   Credits:         {} of {} remaining ({})",
        remaining,
        config.grant_limit,
        ledger.credit_status(config.grant_limit).as_str()
    );

    let recent = ledger.recent();
    if recent.is_empty() {
        println!("   Recent audits:   none");
    } else {
        println!("   Recent audits:");
        for entry in recent {
            println!("     {} -> safety {}/100", entry.addr, entry.score);
        }
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  safelaunch_guard audit <address> [chain]   Run a security audit");
    eprintln!("  safelaunch_guard stats                     Show grant usage");
    eprintln!("  safelaunch_guard reset                     Reset the session counter");
    eprintln!();
    eprintln!(
        "Networks: {} (default: Base)",
        Chain::ALL.map(|c| c.display_name()).join(", ")
    );
}

fn print_banner() {
    println!(
        r#"
    ╔══════════════════════════════════════════════╗
    ║          🛡️  S A F E L A U N C H             ║
    ║               G U A R D  v0.1.0              ║
    ║     Webacy-Powered Token Security Audit      ║
    ╚══════════════════════════════════════════════╝
    "#
    );
}
