//! Button actions of the vertex snapping tool window.
//!
//! Every action reports through a [`Feedback`] channel and never fails: the
//! errors of [`SnapSession`] end up as warnings here. The `*_label` methods
//! give the text the window's status fields show.

use crate::error::SnapError;
use crate::operations::SnapReport;
use crate::scene::{short_name, Feedback, Scene};
use crate::session::SnapSession;

/// Status text shown while no reference model is loaded.
pub const NO_SOURCE_PLACEHOLDER: &str = "No source loaded...";

/// Status text shown until a vertex set is loaded, and again after Clear.
pub const NO_VERTICES_PLACEHOLDER: &str = "No vertices loaded...";

/// The snapping tool: one session plus the channel it reports on.
pub struct SnapTool<F: Feedback> {
    session: SnapSession,
    feedback: F,
    source_label: Option<String>,
    sources_loaded: bool,
    targets_loaded: bool,
}

impl<F: Feedback> SnapTool<F> {
    /// Opens a tool window with a fresh session.
    #[must_use]
    pub fn new(feedback: F) -> Self {
        Self {
            session: SnapSession::new(),
            feedback,
            source_label: None,
            sources_loaded: false,
            targets_loaded: false,
        }
    }

    /// The session state behind the window.
    #[must_use]
    pub fn session(&self) -> &SnapSession {
        &self.session
    }

    /// The feedback channel.
    #[must_use]
    pub fn feedback(&self) -> &F {
        &self.feedback
    }

    // --- Auto Snap tab ---

    /// "Load Selected as Source". Returns `true` if a source was loaded.
    pub fn load_source<S: Scene + ?Sized>(&mut self, scene: &S) -> bool {
        match self.session.load_reference_model(scene) {
            Ok(source) => {
                self.source_label = scene
                    .object_name(source)
                    .ok()
                    .map(|name| short_name(&name).to_owned());
                true
            }
            Err(err) => {
                self.warn(&err);
                false
            }
        }
    }

    /// "Snap Selected Vertices to Source".
    pub fn snap_selected<S: Scene + ?Sized>(&mut self, scene: &mut S) -> Option<SnapReport> {
        let result = self.session.snap_to_reference_model(scene);
        self.finish(result)
    }

    // --- Manual Snap tab ---

    /// "Source": loads the selected vertices as reference positions.
    pub fn load_sources<S: Scene + ?Sized>(&mut self, scene: &S) -> usize {
        self.sources_loaded = true;
        self.session.load_reference_verts(scene)
    }

    /// Clears the loaded reference vertices.
    pub fn clear_sources(&mut self) {
        self.sources_loaded = false;
        self.session.clear_reference_verts();
    }

    /// "Target": loads the selected vertices as the ones to move.
    pub fn load_targets<S: Scene + ?Sized>(&mut self, scene: &S) -> usize {
        self.targets_loaded = true;
        self.session.load_verts_to_move(scene)
    }

    /// Clears the loaded target vertices.
    pub fn clear_targets(&mut self) {
        self.targets_loaded = false;
        self.session.clear_verts_to_move();
    }

    /// "Go": snaps the loaded targets onto the loaded sources.
    pub fn snap_loaded<S: Scene + ?Sized>(&mut self, scene: &mut S) -> Option<SnapReport> {
        let result = self.session.snap_loaded(scene);
        self.finish(result)
    }

    // --- Status fields ---

    /// Short name of the loaded source model.
    #[must_use]
    pub fn source_label(&self) -> &str {
        self.source_label.as_deref().unwrap_or(NO_SOURCE_PLACEHOLDER)
    }

    /// Status of the loaded reference vertices.
    #[must_use]
    pub fn sources_label(&self) -> String {
        count_label(
            self.sources_loaded,
            self.session.reference_verts().len(),
            "source",
        )
    }

    /// Status of the loaded target vertices.
    #[must_use]
    pub fn targets_label(&self) -> String {
        count_label(
            self.targets_loaded,
            self.session.verts_to_move().len(),
            "target",
        )
    }

    fn finish(&mut self, result: Result<SnapReport, SnapError>) -> Option<SnapReport> {
        match result {
            Ok(report) if report.is_empty() => {
                self.feedback.warning("No valid vertices were processed.");
                Some(report)
            }
            Ok(report) => {
                self.feedback.info(&format!("Snap succeeded: {report}."));
                Some(report)
            }
            Err(err) => {
                self.warn(&err);
                None
            }
        }
    }

    fn warn(&mut self, err: &SnapError) {
        self.feedback.warning(&err.to_string());
    }
}

fn count_label(loaded: bool, count: usize, role: &str) -> String {
    if loaded {
        format!("{count} {role} vert(s) loaded.")
    } else {
        NO_VERTICES_PLACEHOLDER.to_owned()
    }
}
