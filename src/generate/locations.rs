use crate::error::{Result, ToolError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info};

/// Built-in UK location list
pub const UK_LOCATIONS: &[&str] = &[
    "London",
    "Birmingham",
    "Manchester",
    "Liverpool",
    "Leeds",
    "Sheffield",
    "Bristol",
    "Newcastle upon Tyne",
    "Nottingham",
    "Leicester",
    "Coventry",
    "Bradford",
    "Southampton",
    "Portsmouth",
    "Plymouth",
    "Reading",
    "Derby",
    "Stoke-on-Trent",
    "Wolverhampton",
    "Sunderland",
    "Brighton",
    "Hull",
    "Preston",
    "Norwich",
    "Oxford",
    "Cambridge",
    "York",
    "Exeter",
    "Bath",
    "Milton Keynes",
    "Luton",
    "Northampton",
    "Peterborough",
    "Ipswich",
    "Bournemouth",
    "Swindon",
    "Middlesbrough",
    "Blackpool",
    "Bolton",
    "Huddersfield",
    "Glasgow",
    "Edinburgh",
    "Aberdeen",
    "Dundee",
    "Inverness",
    "Stirling",
    "Perth",
    "Cardiff",
    "Swansea",
    "Newport",
    "Wrexham",
    "Bangor",
    "Belfast",
    "Derry",
    "Lisburn",
    "Newry",
    "Armagh",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Uk,
    Usa,
    Canada,
    Australia,
}

impl Region {
    pub const ALL: [Region; 4] = [Region::Uk, Region::Usa, Region::Canada, Region::Australia];

    pub fn key(&self) -> &'static str {
        match self {
            Region::Uk => "uk",
            Region::Usa => "usa",
            Region::Canada => "canada",
            Region::Australia => "australia",
        }
    }

    pub fn country_name(&self) -> &'static str {
        match self {
            Region::Uk => "UK",
            Region::Usa => "USA",
            Region::Canada => "Canada",
            Region::Australia => "Australia",
        }
    }

    /// Regions whose list ships with the binary
    pub fn static_locations(&self) -> Option<&'static [&'static str]> {
        match self {
            Region::Uk => Some(UK_LOCATIONS),
            _ => None,
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.country_name())
    }
}

impl FromStr for Region {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_ascii_lowercase();
        Region::ALL
            .into_iter()
            .find(|r| r.key() == key)
            .ok_or_else(|| {
                ToolError::validation(format!(
                    "unknown region '{s}' (expected uk, usa, canada or australia)"
                ))
            })
    }
}

/// Somewhere to get a region's location list from
pub trait LocationSource {
    fn locations(&self, region: Region) -> Result<Vec<String>>;
}

/// Split a newline-delimited flat file into location names
pub fn parse_location_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

/// Remote flat-file URLs for the regions without a built-in list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationUrls {
    pub usa: String,
    pub canada: String,
    pub australia: String,
}

impl Default for LocationUrls {
    fn default() -> Self {
        Self {
            usa: "https://gist.githubusercontent.com/muhammad-arsalan-niazi/c0d488a59241df57e48cfd01af218f75/raw/8fa40eafd560dcb518298b4a935c191284f58737/usa-cities.txt".to_string(),
            canada: "https://gist.githubusercontent.com/muhammad-arsalan-niazi/3c5e16d74cec41768aa369fdc331e251/raw/33604f883f36e22802dfb6f2cd1a90728f6ec50c/canada-cities.txt".to_string(),
            australia: "https://gist.githubusercontent.com/muhammad-arsalan-niazi/54596d3ae4ff138a010d1a03490efbf4/raw/b0da7afc68ec1359ba6b1a32647c123e61b27299/australia-cities.txt".to_string(),
        }
    }
}

impl LocationUrls {
    pub fn url_for(&self, region: Region) -> Option<&str> {
        match region {
            Region::Uk => None,
            Region::Usa => Some(&self.usa),
            Region::Canada => Some(&self.canada),
            Region::Australia => Some(&self.australia),
        }
    }
}

/// Built-in lists, with a single blocking HTTP GET for the rest
pub struct HttpLocationSource {
    client: reqwest::blocking::Client,
    urls: LocationUrls,
}

impl HttpLocationSource {
    pub fn new(urls: LocationUrls) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            urls,
        }
    }

    fn fetch(&self, region: Region, url: &str) -> Result<String> {
        let fetch_error = |reason: String| ToolError::Fetch {
            region: region.country_name().to_string(),
            reason,
        };

        debug!(target: "locations", "Fetching {} locations from {}", region, url);
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| fetch_error(e.to_string()))?;

        if !response.status().is_success() {
            return Err(fetch_error(format!("HTTP {}", response.status())));
        }
        response.text().map_err(|e| fetch_error(e.to_string()))
    }
}

impl LocationSource for HttpLocationSource {
    fn locations(&self, region: Region) -> Result<Vec<String>> {
        if let Some(list) = region.static_locations() {
            return Ok(list.iter().map(|l| l.to_string()).collect());
        }
        let url = self
            .urls
            .url_for(region)
            .ok_or_else(|| ToolError::validation(format!("no location list for {region}")))?;
        let locations = parse_location_list(&self.fetch(region, url)?);
        info!(target: "locations", "Fetched {} locations for {}", locations.len(), region);
        Ok(locations)
    }
}
