use crate::{
    api_client::ApiClient,
    args::Args,
    config::Configuration,
    render::{self, OutputMode},
    search::{self, QueryRequest},
    summary,
    time_bound::{self, TimeField},
};
use anyhow::Result;
use std::{path::Path, time::Instant};

#[derive(Debug)]
pub struct Runner {
    client: ApiClient,
    config: Configuration,
}

impl Runner {
    pub fn new(client: ApiClient, config: Configuration) -> Self {
        Self { client, config }
    }

    pub fn run(&self, query: &str, args: &Args) -> Result<()> {
        let request = self.build_request(query, args);

        let started = Instant::now();
        let results = search::execute_query(&self.client, &request)?;
        let finished = Instant::now();

        render::render_console(&results);

        if let Some(mode) = Self::output_mode(args.output.as_deref()) {
            for path in render::write_outputs(&results, mode, query, args.file.as_deref())? {
                println!("{}", saved_notice(&path));
            }
        }

        println!("{}", summary::summarize(results.len(), started, finished));
        Ok(())
    }

    fn build_request(&self, query: &str, args: &Args) -> QueryRequest {
        let mut request = QueryRequest::new(query, self.config.size());
        time_bound::apply_time_bound(
            args.start_time.as_deref(),
            TimeField::StartTime,
            &mut request,
        );
        time_bound::apply_time_bound(args.end_time.as_deref(), TimeField::EndTime, &mut request);
        request
    }

    fn output_mode(output: Option<&str>) -> Option<OutputMode> {
        match output?.parse() {
            Ok(mode) => Some(mode),
            Err(err) => {
                log::warn!("{}, no file written", err);
                None
            }
        }
    }
}

fn saved_notice(path: &Path) -> String {
    format!("[INFO] Saved results to {}", path.display())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saved_notice_names_the_file() {
        assert_eq!(
            saved_notice(Path::new("port_80.json")),
            "[INFO] Saved results to port_80.json"
        );
    }

    #[test]
    fn unknown_output_mode_writes_nothing() {
        assert_eq!(Runner::output_mode(Some("xml")), None);
        assert_eq!(Runner::output_mode(None), None);
        assert_eq!(Runner::output_mode(Some("all")), Some(OutputMode::All));
    }
}
