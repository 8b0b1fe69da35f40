use anyhow::Result;
use directory_uploader::app::DirectoryUploader;
use directory_uploader::config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "directory_uploader=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([820.0, 900.0])
            .with_min_inner_size([520.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Directory Bulk Upload",
        options,
        Box::new(move |cc: &eframe::CreationContext<'_>| match DirectoryUploader::new(cc, &config) {
            Ok(app) => Box::new(app) as Box<dyn eframe::App>,
            Err(e) => {
                tracing::error!(error = %e, "failed to start directory uploader");
                std::process::exit(1);
            }
        }),
    )
    .map_err(|e| anyhow::anyhow!("{}", e))
}
