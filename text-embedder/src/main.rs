use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};

use text_embedder::{embedder::openai::OpenAiEmbedder, Config, EmbedderClient};

/// Built-in texts embedded when none are given on the command line.
const SAMPLE_TEXTS: [&str; 5] = [
    "田中太郎は、大阪生まれの28歳のデザイナーです。趣味は絵を描くこととギター演奏。創造的なプロジェクトに取り組むことが大好きです。",
    "鈴木花子は、福岡生まれの32歳のマーケティングマネージャーです。趣味は料理とランニング。新しいレシピに挑戦することが楽しみです。",
    "高橋次郎は、京都生まれの40歳のデータアナリストです。趣味は読書とチェス。複雑な問題を解決することにやりがいを感じています。",
    "山本美咲は、札幌生まれの27歳の教師です。趣味は映画鑑賞とヨガ。生徒と一緒に成長することが喜びです。",
    "小林健太は、名古屋生まれの30歳のエンジニアです。趣味はサイクリングとボードゲーム。チームでの協力が得意です。",
];

#[derive(Parser)]
#[command(name = "text-embedder")]
#[command(about = "Embed texts and save the vectors as JSON")]
struct Cli {
    /// Texts to embed. Falls back to the built-in sample set.
    texts: Vec<String>,

    /// Read texts from a file, one per line. Blank lines are skipped.
    #[arg(short, long, conflicts_with = "texts")]
    input: Option<PathBuf>,

    /// Destination JSON file.
    #[arg(short, long, default_value = "sample_data.json")]
    output: PathBuf,

    /// Embedding model; overrides `EMBEDDING_MODEL`.
    #[arg(short, long)]
    model: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // .env is optional; load it first so RUST_LOG from it applies.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("text_embedder=info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = Config::from_env().map_err(|e| {
        error!("Configuration error: {}", e);
        e
    })?;
    if let Some(model) = cli.model {
        config.model = model;
    }

    let texts = load_texts(cli.texts, cli.input.as_deref()).await?;
    let texts: Vec<&str> = texts.iter().map(String::as_str).collect();

    info!(model = %config.model, count = texts.len(), "embedding texts");

    let embedder = OpenAiEmbedder::from_config(&config);
    let written = embedder.save(&texts, &cli.output).await.map_err(|e| {
        error!("Save failed: {}", e);
        e
    })?;

    info!(path = %cli.output.display(), records = written, "saved");
    Ok(())
}

async fn load_texts(args: Vec<String>, input: Option<&std::path::Path>) -> anyhow::Result<Vec<String>> {
    if let Some(path) = input {
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Cannot read input file '{}'", path.display()))?;
        return Ok(content
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(ToOwned::to_owned)
            .collect());
    }

    if args.is_empty() {
        return Ok(SAMPLE_TEXTS.iter().map(|s| s.to_string()).collect());
    }
    Ok(args)
}
