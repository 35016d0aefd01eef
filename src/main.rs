use clap::Parser;
use spacex_dash::core::ConfigProvider;
use spacex_dash::core::layout::SliderSettings;
use spacex_dash::utils::error::{DashError, ErrorSeverity};
use spacex_dash::utils::monitor::ProcessMonitor;
use spacex_dash::utils::{logger, validation::Validate};
use spacex_dash::{app, CliConfig, DashboardSettings, DashboardState, LaunchTable, LocalStorage};

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    // 載入並合併配置
    let settings = match cli.resolve() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ Failed to load configuration: {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 初始化日誌
    if settings.json_logs {
        logger::init_json_logger(settings.verbose);
    } else {
        logger::init_cli_logger(settings.verbose);
    }

    tracing::info!("Starting spacex-dash");
    tracing::debug!("Effective settings: {:?}", settings);

    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let monitor = ProcessMonitor::new(cli.monitor);
    if monitor.is_enabled() {
        tracing::info!("🔍 Process monitoring enabled");
    }

    if let Err(e) = run(&settings, &monitor).await {
        tracing::error!(
            "❌ Dashboard failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}

async fn run(settings: &DashboardSettings, monitor: &ProcessMonitor) -> Result<(), DashError> {
    let storage = LocalStorage::default();
    let table =
        LaunchTable::load(&storage, settings.dataset_path(), settings.delimiter()).await?;
    if table.is_empty() {
        tracing::warn!("⚠️ Dataset has no usable rows, charts will be empty");
    }
    monitor.log_stats("Dataset loaded");

    let slider = SliderSettings {
        step: settings.slider_step(),
        mark_interval: settings.slider_mark_interval(),
    };
    let state = DashboardState::new(table, slider);
    app::serve(state, settings.bind_addr()).await?;

    monitor.log_stats("Shutdown");
    Ok(())
}
