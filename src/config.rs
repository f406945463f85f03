// src/config.rs

use anyhow::Context;
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::{env, time::Duration};

use crate::{
    db::{BillRepository, CreditCardRepository, MasterBillRepository, SettingsRepository, SummaryRepository},
    services::{BillService, CreditCardService, MasterBillService, SummaryService},
};

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    /// Única origem liberada no CORS (o front do painel)
    pub cors_origin: String,
    pub max_connections: u32,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").context("DATABASE_URL deve ser definida")?;

        let port = match env::var("PORT") {
            Ok(raw) => raw.parse().with_context(|| format!("PORT inválida: {raw}"))?,
            Err(_) => DEFAULT_PORT,
        };

        let max_connections = match env::var("DATABASE_MAX_CONNECTIONS") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("DATABASE_MAX_CONNECTIONS inválida: {raw}"))?,
            Err(_) => DEFAULT_MAX_CONNECTIONS,
        };

        let cors_origin = env::var("CORS_ORIGIN").unwrap_or_else(|_| DEFAULT_CORS_ORIGIN.to_string());

        Ok(Self {
            database_url,
            port,
            cors_origin,
            max_connections,
        })
    }
}

// O estado compartilhado que será acessível em toda a aplicação
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub config: Config,
    pub bill_service: BillService,
    pub master_bill_service: MasterBillService,
    pub credit_card_service: CreditCardService,
    pub summary_service: SummaryService,
    pub settings_repo: SettingsRepository,
}

impl AppState {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let db_pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&config.database_url)
            .await
            .context("Falha ao conectar ao banco de dados")?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        Ok(Self::with_pool(db_pool, config))
    }

    // --- Monta o gráfico de dependências ---
    pub fn with_pool(db_pool: PgPool, config: Config) -> Self {
        let bill_repo = BillRepository::new();
        let master_bill_repo = MasterBillRepository::new();
        let credit_card_repo = CreditCardRepository::new();
        let settings_repo = SettingsRepository::new();

        let bill_service = BillService::new(bill_repo.clone(), master_bill_repo.clone());
        let master_bill_service = MasterBillService::new(master_bill_repo);
        let credit_card_service = CreditCardService::new(credit_card_repo.clone());
        let summary_service = SummaryService::new(
            SummaryRepository::new(),
            bill_repo,
            credit_card_repo,
            settings_repo.clone(),
        );

        Self {
            db_pool,
            config,
            bill_service,
            master_bill_service,
            credit_card_service,
            summary_service,
            settings_repo,
        }
    }
}
