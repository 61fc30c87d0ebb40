use crate::error::{Result, ToolError};
use crate::generate::locations::{LocationSource, Region};
use tracing::info;

/// `"<service> in <location>"` for each location
pub fn format_queries<S: AsRef<str>>(service: &str, locations: &[S]) -> Vec<String> {
    let service = service.trim();
    locations
        .iter()
        .map(|location| format!("{} in {}", service, location.as_ref()))
        .collect()
}

pub struct QueryGenerator<'a> {
    source: &'a dyn LocationSource,
}

impl<'a> QueryGenerator<'a> {
    pub fn new(source: &'a dyn LocationSource) -> Self {
        Self { source }
    }

    /// One search query per location of `region`.
    ///
    /// A blank service is rejected before any fetch; a failed fetch returns
    /// the error and produces nothing.
    pub fn generate(&self, service: &str, region: Option<Region>) -> Result<Vec<String>> {
        let region = match region {
            Some(region) if !service.trim().is_empty() => region,
            _ => {
                return Err(ToolError::validation(
                    "Please enter a service name and select a country.",
                ))
            }
        };

        let locations = self.source.locations(region)?;
        let queries = format_queries(service, &locations);
        info!(target: "query", "Generated {} queries for {}", queries.len(), region);
        Ok(queries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct FixedSource {
        calls: Cell<usize>,
        result: fn(Region) -> Result<Vec<String>>,
    }

    impl LocationSource for FixedSource {
        fn locations(&self, region: Region) -> Result<Vec<String>> {
            self.calls.set(self.calls.get() + 1);
            (self.result)(region)
        }
    }

    fn two_cities(_: Region) -> Result<Vec<String>> {
        Ok(vec!["Austin".to_string(), "Boston".to_string()])
    }

    fn offline(region: Region) -> Result<Vec<String>> {
        Err(ToolError::Fetch {
            region: region.country_name().to_string(),
            reason: "offline".to_string(),
        })
    }

    #[test]
    fn test_format_queries() {
        assert_eq!(
            format_queries("  plumbers ", &["Leeds", "York"]),
            vec!["plumbers in Leeds", "plumbers in York"]
        );
    }

    #[test]
    fn test_generate() {
        let source = FixedSource { calls: Cell::new(0), result: two_cities };
        let queries = QueryGenerator::new(&source)
            .generate("dentist", Some(Region::Usa))
            .unwrap();
        assert_eq!(queries, vec!["dentist in Austin", "dentist in Boston"]);
    }

    #[test]
    fn test_validation_happens_before_fetch() {
        let source = FixedSource { calls: Cell::new(0), result: two_cities };
        let generator = QueryGenerator::new(&source);
        assert!(matches!(generator.generate("  ", Some(Region::Usa)), Err(ToolError::Validation(_))));
        assert!(matches!(generator.generate("dentist", None), Err(ToolError::Validation(_))));
        assert_eq!(source.calls.get(), 0);
    }

    #[test]
    fn test_fetch_failure_propagates() {
        let source = FixedSource { calls: Cell::new(0), result: offline };
        let result = QueryGenerator::new(&source).generate("dentist", Some(Region::Canada));
        assert!(matches!(result, Err(ToolError::Fetch { .. })));
    }
}
