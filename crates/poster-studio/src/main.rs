use std::path::PathBuf;
use std::sync::Arc;

use eyre::Result;
use poster_bedrock::bedrock::BedrockGenerator;
use poster_bedrock::generator::ContentGenerator;
use poster_core::models::layout::LayoutId;
use poster_export::deck::plan_deck;
use poster_export::page::deck_file_name;
use poster_export::svg::to_svg;
use poster_studio::aws::{build_aws_config, check_credentials};
use poster_studio::config::{self, StudioConfig};
use poster_studio::preview::preview_size;
use poster_studio::session::EditingSession;
use poster_studio::store::DocumentStore;
use tracing_subscriber::EnvFilter;

const SVG_FILE_NAME: &str = "science-poster.svg";

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let config = config::load_or_default()?;
    init_tracing(&config);
    tracing::info!(
        config = ?config::config_info(&config),
        from_disk = config::has_config(),
        "configuration loaded"
    );

    let store = initial_store(&config)?;
    let notes = prompt()?;
    let generator = match notes {
        Some(_) => {
            let sdk = build_aws_config(&config.region, &config.credentials).await;
            check_credentials(&sdk).await.is_available().then(|| {
                Arc::new(BedrockGenerator::new(&sdk, config.model_id.clone()))
                    as Arc<dyn ContentGenerator>
            })
        }
        None => None,
    };
    let session = EditingSession::new(store, generator);

    if let Some(notes) = notes {
        match session.generate(&notes).await {
            Ok(tx) => tracing::info!(
                transaction_id = %tx.id,
                input_tokens = tx.input_tokens,
                output_tokens = tx.output_tokens,
                "generated content merged"
            ),
            Err(e) => tracing::warn!(error = %e, "continuing with the starter content"),
        }
    }

    let out_dir = std::env::var("POSTER_OUT")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."));
    std::fs::create_dir_all(&out_dir)?;

    let store = session.store();
    let store = store.lock().await;
    let tree = store.render();
    let preview = preview_size(&tree, config.preview_zoom);
    tracing::info!(
        layout = %tree.layout,
        theme = tree.theme_id,
        preview_width = preview.width,
        preview_height = preview.height,
        "rendered poster"
    );

    let svg_path = out_dir.join(SVG_FILE_NAME);
    std::fs::write(&svg_path, to_svg(&tree))?;
    tracing::info!(path = %svg_path.display(), "wrote SVG");

    let plan = plan_deck(store.document(), store.theme(), store.layout());
    let plan_name = deck_file_name(store.layout()).replace(".pptx", ".deck.json");
    let plan_path = out_dir.join(plan_name);
    std::fs::write(&plan_path, serde_json::to_string_pretty(&plan)?)?;
    tracing::info!(path = %plan_path.display(), items = plan.items.len(), "wrote deck plan");

    Ok(())
}

fn init_tracing(config: &StudioConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if config.json_logs {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

/// Document store seeded from the config, with `POSTER_THEME` and
/// `POSTER_LAYOUT` taking precedence.
fn initial_store(config: &StudioConfig) -> Result<DocumentStore> {
    let mut store = DocumentStore::default();

    let theme = std::env::var("POSTER_THEME").unwrap_or_else(|_| config.default_theme.clone());
    store.select_theme(&theme)?;

    let layout = match std::env::var("POSTER_LAYOUT") {
        Ok(raw) => raw.parse::<LayoutId>()?,
        Err(_) => config.default_layout,
    };
    store.select_layout(layout);

    Ok(store)
}

/// Notes to generate from: `POSTER_PROMPT`, else the file named by the
/// first argument.
fn prompt() -> Result<Option<String>> {
    if let Ok(notes) = std::env::var("POSTER_PROMPT") {
        return Ok(Some(notes));
    }
    match std::env::args_os().nth(1) {
        Some(path) => Ok(Some(std::fs::read_to_string(path)?)),
        None => Ok(None),
    }
}
