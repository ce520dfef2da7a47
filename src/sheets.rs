//! Sheet loader.
//! Fetches the published Google Sheet as CSV and turns rows into clients.
//! Never fails: any fetch error falls back to three built-in sample clients.
//! Parsing is a plain comma split; a comma inside a cell shifts the columns.

use reqwest::StatusCode;
use std::time::Duration;

use crate::client::Client;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("request to sheet failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("sheet responded with status {0}")]
    Status(StatusCode),
}

/// Where the raw CSV comes from.
pub trait CsvSource {
    async fn fetch_csv(&self) -> Result<String, LoadError>;
}

/// Published sheet reached over HTTP.
pub struct HttpSheet {
    client: reqwest::Client,
    url: String,
}

impl HttpSheet {
    pub fn new(url: &str, timeout: Duration) -> Result<Self, LoadError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.to_string(),
        })
    }
}

impl CsvSource for HttpSheet {
    async fn fetch_csv(&self) -> Result<String, LoadError> {
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(LoadError::Status(status));
        }
        Ok(response.text().await?)
    }
}

// *************** Public API ***************

/// Loads clients from `source`, substituting the fallback list on any error.
pub async fn load_clients<S: CsvSource>(source: &S) -> Vec<Client> {
    match source.fetch_csv().await {
        Ok(csv) => {
            let clients = parse_clients(&csv);
            tracing::info!(count = clients.len(), "loaded clients from sheet");
            clients
        }
        Err(e) => {
            tracing::warn!(error = %e, "could not load sheet, using sample clients");
            fallback_clients()
        }
    }
}

/// Loads clients from the sheet at `url`. A client that cannot be built
/// counts as a failed load too.
pub async fn load_from_url(url: &str, timeout: Duration) -> Vec<Client> {
    match HttpSheet::new(url, timeout) {
        Ok(sheet) => load_clients(&sheet).await,
        Err(e) => {
            tracing::warn!(error = %e, "could not build HTTP client, using sample clients");
            fallback_clients()
        }
    }
}

/// Parses the sheet export. Columns: id, name, image url, description,
/// then optionally emoji and forced boutique. Rows with fewer than four
/// columns are dropped.
pub fn parse_clients(csv: &str) -> Vec<Client> {
    csv.lines()
        .skip(1)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(parse_row)
        .collect()
}

fn parse_row(line: &str) -> Option<Client> {
    let columns: Vec<String> = line.split(',').map(|c| c.replace('"', "")).collect();
    if columns.len() < 4 {
        tracing::debug!(line, "dropping short row");
        return None;
    }

    let optional = |i: usize| {
        columns
            .get(i)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    };

    Some(Client {
        id: columns[0].clone(),
        name: columns[1].clone(),
        image_url: columns[2].clone(),
        description: columns[3].clone(),
        emoji: optional(4),
        forced: optional(5),
    })
}

/// Sample clients shown when the sheet cannot be reached.
pub fn fallback_clients() -> Vec<Client> {
    vec![
        Client::new(
            "1",
            "Alice la Collectionneuse",
            "https://via.placeholder.com/200x200/ffb3d1/ffffff?text=Alice",
            "Adore les objets anciens et les curiosités. Toujours à la recherche de pièces uniques pour sa collection.",
        ),
        Client::new(
            "2",
            "Bob le Gourmand",
            "https://via.placeholder.com/200x200/d1ffb3/ffffff?text=Bob",
            "Passionné de gastronomie, il recherche des épices rares et des ingrédients exotiques.",
        ),
        Client::new(
            "3",
            "Clara la Jardinière",
            "https://via.placeholder.com/200x200/b3d1ff/ffffff?text=Clara",
            "Aime tout ce qui concerne le jardinage. Elle cherche des graines rares et des outils originaux.",
        ),
    ]
}

// *************** Tests ***************
