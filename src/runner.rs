//! Ordered scenario runner
//!
//! Logs in once, then executes every scenario in list order against one
//! authenticated client. A failing scenario is recorded and the run moves on;
//! only a failed login aborts it.

use std::process::ExitCode;
use std::time::Instant;

use crate::client::{self, StoryClient};
use crate::config::AppConfig;
use crate::errors::Error;
use crate::report::{Outcome, Report};
use crate::scenarios::{self, Scenario, ScenarioContext};

pub struct Runner {
    config: AppConfig,
    scenarios: Vec<Box<dyn Scenario>>,
}

impl Runner {
    /// Runner over the full story spoiler suite
    pub fn new(config: AppConfig) -> Self {
        Self::with_scenarios(config, scenarios::suite())
    }

    pub fn with_scenarios(config: AppConfig, scenarios: Vec<Box<dyn Scenario>>) -> Self {
        Self { config, scenarios }
    }

    pub fn scenarios(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.scenarios.iter().map(|scenario| scenario.name())
    }

    #[tracing::instrument(name = "suite", skip_all, fields(base_url = %self.config.backend.base_url))]
    pub async fn run(&self) -> Result<Report, Error> {
        let session = client::login(&self.config.backend, &self.config.credentials).await?;
        let mut context = ScenarioContext::new(
            StoryClient::new(session),
            self.config.scenarios.nonexistent_id.clone(),
        );

        let report = self.execute(&mut context).await;

        context.release();

        tracing::info!(
            passed = report.passed(),
            failed = report.failed(),
            "Suite finished"
        );

        Ok(report)
    }

    async fn execute(&self, context: &mut ScenarioContext) -> Report {
        let mut report = Report::default();

        for (index, scenario) in self.scenarios.iter().enumerate() {
            let order = index + 1;
            let name = scenario.name();
            let start = Instant::now();

            tracing::info!(order, scenario = name, "Running scenario");

            let result = scenario.run(context).await;
            let elapsed = start.elapsed();

            match &result {
                Ok(()) => tracing::info!(order, scenario = name, ?elapsed, "Scenario passed"),
                Err(e) => tracing::warn!(order, scenario = name, ?elapsed, error = %e, "Scenario failed"),
            }

            report.push(Outcome {
                order,
                name,
                elapsed,
                result,
            });
        }

        report
    }
}

/// Process exit status for a finished run: success only when login worked and
/// every scenario passed
pub fn exit_code(result: &Result<Report, Error>) -> ExitCode {
    match result {
        Ok(report) if report.is_success() => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    }
}
