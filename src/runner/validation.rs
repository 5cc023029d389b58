//! Validation run orchestration.

use tracing::{debug, info, warn};

use crate::checks::{
    evaluate, evaluate_time_sync, fold_group, Aggregate, CheckDescriptor, CheckShape,
    EvidenceSource, Observed, Severity, TimeSyncChecks,
};
use crate::config::{CheckGroup, ValidationConfig};
use crate::detection::{HostOs, JavaProperties};
use crate::error::{HostcheckError, Result};
use crate::report::ReportWriter;
use crate::shell::CommandRunner;
use crate::ui::{presenter, UserInterface};

/// Header shown above the time-sync composite.
pub const TIME_SYNC_HEADER: &str = "Time synchronisation";

/// One pass over a host's check tree.
///
/// Runs the platform groups in order, then the time-sync composite, then the
/// Java group. Every evaluated check is written to the report and shown on
/// the console as it completes.
pub struct ValidationRun<'r> {
    runner: &'r mut dyn CommandRunner,
    report: &'r ReportWriter,
    ui: &'r mut dyn UserInterface,
    java: Option<JavaProperties>,
    aggregate: Aggregate,
    halted: Option<HostcheckError>,
}

impl<'r> ValidationRun<'r> {
    /// Create a run writing to `report` and `ui`.
    pub fn new(
        runner: &'r mut dyn CommandRunner,
        report: &'r ReportWriter,
        ui: &'r mut dyn UserInterface,
    ) -> Self {
        Self {
            runner,
            report,
            ui,
            java: None,
            aggregate: Aggregate::new(),
            halted: None,
        }
    }

    /// Run every check configured for `os` and return the overall status.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedPlatform` before running anything on an OS without
    /// a check sequence, and `ReportWrite` as soon as the report cannot be
    /// appended to.
    pub fn execute(mut self, config: &ValidationConfig, os: &HostOs) -> Result<Severity> {
        if !os.is_supported() {
            return Err(HostcheckError::UnsupportedPlatform { os: os.to_string() });
        }
        info!(%os, report = %self.report.path().display(), "starting validation");

        match config.platform(os) {
            Some(platform) => {
                for group in &platform.groups {
                    self.run_group(group)?;
                }
                if let Some(time_sync) = &platform.time_sync {
                    self.run_time_sync(time_sync)?;
                }
            }
            None => warn!(%os, "no checks configured for this platform"),
        }

        if let Some(java) = &config.java {
            self.run_group(java)?;
        }

        let status = self.aggregate.status();
        info!(%status, "validation finished");
        self.ui.show_verdict(status);
        Ok(status)
    }

    fn run_group(&mut self, group: &CheckGroup) -> Result<()> {
        self.ui.show_header(&group.name);
        let outcome = fold_group(&group.checks, |descriptor| self.run_check(descriptor));
        self.settle()?;

        debug!(
            group = %group.name,
            status = %outcome.status,
            failed = outcome.failed.len(),
            "group finished"
        );
        self.aggregate.record(outcome.status);
        Ok(())
    }

    fn run_time_sync(&mut self, checks: &TimeSyncChecks) -> Result<()> {
        self.ui.show_header(TIME_SYNC_HEADER);
        let outcome = evaluate_time_sync(checks, |descriptor| self.run_check(descriptor));
        self.settle()?;

        debug!(status = %outcome.status(), outcome = ?outcome, "time sync finished");
        self.aggregate.record(outcome.status());
        Ok(())
    }

    /// Observe, evaluate, persist and show one check. Returns whether it passed.
    ///
    /// Configuration errors of the check itself are recorded and count as a
    /// failure; any other error halts the run.
    fn run_check(&mut self, descriptor: &CheckDescriptor) -> bool {
        if self.halted.is_some() {
            return false;
        }

        let observed = self.observe(descriptor);
        let (written, passed) = match evaluate(descriptor, observed) {
            Ok(result) => {
                let written = self.report.record(&result);
                if written.is_ok() {
                    presenter::present(&mut *self.ui, &result);
                }
                (written, result.passed)
            }
            Err(err) if err.is_check_error() => {
                warn!(check = %descriptor.name, error = %err, "check could not be evaluated");
                let written = self.report.record_error(descriptor, &err);
                if written.is_ok() {
                    presenter::present_error(&mut *self.ui, descriptor, &err);
                }
                (written, false)
            }
            Err(err) => (Err(err), false),
        };

        if let Err(err) = written {
            self.halted = Some(err);
        }
        passed
    }

    fn observe(&mut self, descriptor: &CheckDescriptor) -> Observed {
        match descriptor.source() {
            EvidenceSource::Property(name) => self.java_properties().get(name),
            EvidenceSource::Command(command) => {
                self.ui.show_command(command);
                debug!(check = %descriptor.name, %command, "running check command");
                match descriptor.shape {
                    CheckShape::Triple => self.runner.run_raw(command),
                    CheckShape::Scalar => self.runner.run(command),
                }
            }
            EvidenceSource::None => {
                debug!(check = %descriptor.name, "no evidence source on this platform");
                Observed::Absent
            }
        }
    }

    // Discovered on first use so runs without property checks never launch a JVM.
    fn java_properties(&mut self) -> &JavaProperties {
        self.java
            .get_or_insert_with(|| JavaProperties::discover(&mut *self.runner))
    }

    fn settle(&mut self) -> Result<()> {
        match self.halted.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
