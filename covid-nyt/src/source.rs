//! The three remote datasets the dashboard is built from.

#[cfg(feature = "api")]
use log::info;
#[cfg(feature = "api")]
use reqwest::Client;
use std::path::Path;

/// NYT cumulative cases per county per day.
pub const CASES_URL: &str =
    "https://raw.githubusercontent.com/nytimes/covid-19-data/master/us-counties.csv";

/// County centroids published with the Plotly opioid-epidemic sample app.
pub const COUNTY_LOCATIONS_URL: &str = "https://raw.githubusercontent.com/plotly/dash-sample-apps/master/apps/dash-opioid-epidemic/data/lat_lon_counties.csv";

/// NYT mask-use survey estimates per county (July 2020).
pub const MASK_USE_URL: &str =
    "https://raw.githubusercontent.com/nytimes/covid-19-data/master/mask-use/mask-use-by-county.csv";

/// A remote CSV dataset.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum DataSource {
    Cases,
    CountyLocations,
    MaskUse,
}

impl DataSource {
    pub const ALL: [DataSource; 3] = [
        DataSource::Cases,
        DataSource::CountyLocations,
        DataSource::MaskUse,
    ];

    pub fn url(&self) -> &'static str {
        match self {
            DataSource::Cases => CASES_URL,
            DataSource::CountyLocations => COUNTY_LOCATIONS_URL,
            DataSource::MaskUse => MASK_USE_URL,
        }
    }

    /// File name used when the dataset is mirrored to a local directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            DataSource::Cases => "us-counties.csv",
            DataSource::CountyLocations => "lat_lon_counties.csv",
            DataSource::MaskUse => "mask-use-by-county.csv",
        }
    }

    /// Download the dataset. Single attempt; a non-success status is an error.
    #[cfg(feature = "api")]
    pub async fn fetch(&self, client: &Client) -> anyhow::Result<String> {
        info!("Fetching {:?} from {}", self, self.url());
        let response = client.get(self.url()).send().await?;
        if !response.status().is_success() {
            anyhow::bail!(
                "Bad response status for {:?} ({}): {}",
                self,
                self.url(),
                response.status()
            );
        }
        let body = response.text().await?;
        info!("Fetched {:?}: {} bytes", self, body.len());
        Ok(body)
    }
}

/// Raw CSV text of the three remote datasets.
#[derive(Debug, Clone, Default)]
pub struct RawDatasets {
    pub cases: String,
    pub county_locations: String,
    pub mask_use: String,
}

impl RawDatasets {
    pub fn get(&self, source: DataSource) -> &str {
        match source {
            DataSource::Cases => &self.cases,
            DataSource::CountyLocations => &self.county_locations,
            DataSource::MaskUse => &self.mask_use,
        }
    }

    /// Download all three datasets, one after another.
    #[cfg(feature = "api")]
    pub async fn fetch(client: &Client) -> anyhow::Result<RawDatasets> {
        Ok(RawDatasets {
            cases: DataSource::Cases.fetch(client).await?,
            county_locations: DataSource::CountyLocations.fetch(client).await?,
            mask_use: DataSource::MaskUse.fetch(client).await?,
        })
    }

    /// Read datasets previously mirrored into `dir` under their
    /// [`DataSource::file_name`]s.
    pub fn read_dir(dir: &Path) -> anyhow::Result<RawDatasets> {
        let read = |source: DataSource| -> anyhow::Result<String> {
            let path = dir.join(source.file_name());
            std::fs::read_to_string(&path)
                .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))
        };
        Ok(RawDatasets {
            cases: read(DataSource::Cases)?,
            county_locations: read(DataSource::CountyLocations)?,
            mask_use: read(DataSource::MaskUse)?,
        })
    }
}
