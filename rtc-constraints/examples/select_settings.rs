use std::io::Write;
use std::str::FromStr;

use clap::Parser;
use serde_json::json;

use rtc_constraints::audio_options::AudioProcessingOptions;
use rtc_constraints::constraint_set::MediaTrackConstraints;
use rtc_constraints::device::CameraDeviceInfo;
use rtc_constraints::selector::{
    DEFAULT_FRAME_RATE, DEFAULT_HEIGHT, DEFAULT_WIDTH, SelectorConfig,
};
use rtc_constraints::track_capabilities::MediaTrackCapabilities;
use rtc_constraints::track_settings::MediaTrackSettings;

#[derive(Parser)]
#[command(name = "Select Settings")]
#[command(author = "Rusty Rain <y@ngr.tc>")]
#[command(version = "0.1.0")]
#[command(about = "An example of camera capture settings selection", long_about = None)]
struct Cli {
    /// path to a JSON camera catalog, e.g. 'rtc-constraints/examples/cameras.json'
    #[arg(long)]
    catalog: String,

    /// track constraints as JSON, e.g. '{"width": {"ideal": 1280}, "advanced": [{"facingMode": "environment"}]}'
    #[arg(long, default_value_t = format!("true"))]
    constraints: String,

    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    default_width: i32,
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    default_height: i32,
    #[arg(long, default_value_t = DEFAULT_FRAME_RATE)]
    default_frame_rate: f64,

    /// print the capabilities of every catalog device
    #[arg(long)]
    capabilities: bool,

    #[arg(short, long)]
    debug: bool,
    #[arg(long, default_value_t = format!("INFO"))]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if cli.debug {
        let log_level =
            log::LevelFilter::from_str(&cli.log_level).unwrap_or(log::LevelFilter::Info);
        env_logger::Builder::new()
            .format(|buf, record| {
                writeln!(
                    buf,
                    "{}:{} [{}] {} - {}",
                    record.file().unwrap_or("unknown"),
                    record.line().unwrap_or(0),
                    record.level(),
                    chrono::Local::now().format("%H:%M:%S.%6f"),
                    record.args()
                )
            })
            .filter(None, log_level)
            .init();
    }

    let catalog = std::fs::read_to_string(&cli.catalog)?;
    let devices: Vec<CameraDeviceInfo> = serde_json::from_str(&catalog)?;
    let constraints = MediaTrackConstraints::from_json_str(&cli.constraints)?;
    log::info!("constraints {constraints}");
    log::info!(
        "audio options {}",
        AudioProcessingOptions::from_constraints(Some(&constraints))
    );

    if cli.capabilities {
        for device in &devices {
            let capabilities = MediaTrackCapabilities::from_device(device);
            println!("{}", serde_json::to_string_pretty(&capabilities)?);
        }
    }

    let config = SelectorConfig {
        default_width: cli.default_width,
        default_height: cli.default_height,
        default_frame_rate: cli.default_frame_rate,
    };

    let output = match config.select(&devices, &constraints) {
        Ok(setting) => {
            let settings = devices
                .iter()
                .find(|device| device.device_id == setting.device_id)
                .map(|device| MediaTrackSettings::from_selection(device, &setting));
            json!({
                "ok": true,
                "selection": setting,
                "settings": settings
            })
        }
        Err(err) => json!({
            "ok": false,
            "failedConstraintName": err.failed_constraint_name().unwrap_or_default(),
            "error": err.to_string()
        }),
    };
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
