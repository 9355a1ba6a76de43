//! Download orchestration
//!
//! Turns the current selection into a gateway download request, tracks one
//! progress notification and writes the result to a local file.
//! Failures are not propagated: every run ends in a [`DownloadOutcome`] and
//! settles its notification exactly once.

use std::path::PathBuf;
use std::sync::Arc;

use course_portal_gateway::{ContentGateway, GatewayError};

use crate::engine::{DownloadPermit, SelectionMachine};
use crate::error::CoreError;
use crate::services::NotificationTicket;
use crate::traits::FileSink;
use crate::types::{ClassSession, DownloadFile, DownloadRequest, ResourceKind};

/// What a download covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadScope {
    /// Every class of the current unit, merged into one document
    All,
    /// One class
    Single(ClassSession),
}

/// A validated download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadPlan {
    scope: DownloadScope,
    kind: ResourceKind,
    request: DownloadRequest,
    file_name: String,
}

impl DownloadPlan {
    /// Download every class of the current unit.
    ///
    /// `None` (silently skipped) when no course or unit is selected or the
    /// class list is empty.
    pub fn all(selection: &SelectionMachine, kind: ResourceKind) -> Option<Self> {
        let classes = selection.classes();
        if classes.is_empty() {
            return None;
        }
        let course = selection.selected_course()?;
        let unit = selection.selected_unit()?;
        let file_name = format!("{}_{}_{}.pdf", course.subject_name, unit.title, kind.label());
        Some(Self {
            scope: DownloadScope::All,
            kind,
            request: DownloadRequest {
                files: classes.iter().map(DownloadFile::from).collect(),
                course_id: course.id.clone(),
                course_name: course.subject_name.clone(),
                unit_name: unit.title.clone(),
                resource_type: kind,
            },
            file_name,
        })
    }

    /// Download one class.
    ///
    /// `None` (silently skipped) when no course or unit is selected.
    pub fn single(
        selection: &SelectionMachine,
        class: &ClassSession,
        kind: ResourceKind,
    ) -> Option<Self> {
        let course = selection.selected_course()?;
        let unit = selection.selected_unit()?;
        Some(Self {
            scope: DownloadScope::Single(class.clone()),
            kind,
            request: DownloadRequest {
                files: vec![DownloadFile::from(class)],
                course_id: course.id.clone(),
                course_name: course.subject_name.clone(),
                unit_name: unit.title.clone(),
                resource_type: kind,
            },
            file_name: format!("{}.pdf", class.title),
        })
    }

    pub fn scope(&self) -> &DownloadScope {
        &self.scope
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    pub fn request(&self) -> &DownloadRequest {
        &self.request
    }

    /// Local file name, sanitized and de-duplicated again on write
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// In-progress notification text
    pub fn progress_message(&self) -> String {
        match &self.scope {
            DownloadScope::All => format!("Preparing {} download...", self.kind.label()),
            DownloadScope::Single(class) => format!("Downloading {}...", class.title),
        }
    }

    fn success_message(&self) -> &'static str {
        match self.scope {
            DownloadScope::All => "Download started!",
            DownloadScope::Single(_) => "Download complete!",
        }
    }
}

/// Result of one download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    Saved(PathBuf),
    Failed(CoreError),
}

/// Download orchestration service.
pub struct DownloadService {
    gateway: Arc<dyn ContentGateway>,
    file_sink: Arc<dyn FileSink>,
}

impl DownloadService {
    #[must_use]
    pub fn new(
        gateway: Arc<dyn ContentGateway>,
        file_sink: Arc<dyn FileSink>,
    ) -> Self {
        Self { gateway, file_sink }
    }

    /// Run the download. `permit` is released on return.
    pub async fn execute(
        &self,
        plan: DownloadPlan,
        notice: NotificationTicket,
        permit: DownloadPermit,
    ) -> DownloadOutcome {
        let outcome = match self.gateway.create_download(plan.request()).await {
            Ok(file) => {
                if let Some(name) = &file.suggested_name {
                    log::debug!("Gateway suggested {name}, saving as {}", plan.file_name());
                }
                match self.file_sink.materialize(plan.file_name(), &file.bytes).await {
                    Ok(path) => {
                        notice.succeed(plan.success_message());
                        DownloadOutcome::Saved(path)
                    }
                    Err(e) => {
                        log::error!("Failed to save {}: {e}", plan.file_name());
                        notice.fail(format!("Failed to save {}", plan.file_name()));
                        DownloadOutcome::Failed(e)
                    }
                }
            }
            Err(e) => {
                let message = failure_message(&e);
                if e.is_transport() {
                    log::warn!("Download of {} failed: {e}", plan.file_name());
                } else {
                    log::error!("Download of {} failed: {e}", plan.file_name());
                }
                notice.fail(message);
                DownloadOutcome::Failed(CoreError::Gateway(e))
            }
        };
        permit.release();
        outcome
    }
}

fn failure_message(err: &GatewayError) -> &'static str {
    if err.is_transport() {
        "Error downloading file"
    } else {
        "Download failed"
    }
}
