use crate::animation::ease::Ease;
use crate::animation::timeline::Glide;
use crate::fold::line::FoldKind;
use crate::fold::model::{Fold, FoldDirection};
use crate::fold::pattern;
use crate::foundation::core::{MAX_FOLD_ANGLE, Paper};
use crate::foundation::error::{PleatError, PleatResult};
use crate::render::crease::crease_segments;
use crate::render::sink::{RenderSink, SceneFrame};
use crate::render::tree::build_tree;

/// Playback progress units per fold: fold `i` animates over the raw
/// progress window `[i*100, (i+1)*100)`.
const PROGRESS_UNITS_PER_FOLD: f64 = 100.0;

/// Wall-clock duration of an [`FoldSession::animate_to`] glide.
const GLIDE_DURATION_MS: f64 = 1000.0;

/// What the session is currently doing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Mode {
    /// Editing: every fold is shown at its target angle.
    Config,
    /// Playback: fold angles follow the shared progress value.
    Play,
}

/// Where an [`FoldSession::animate_to`] glide is headed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackTarget {
    /// Progress 0: flat paper.
    Unfolded,
    /// Progress `folds.len() * 100`: every fold at its target angle.
    Folded,
}

/// Callback invoked after every fold-list mutation.
pub type FoldsChanged = Box<dyn FnMut(&[Fold])>;

/// Construction-time collaborators and settings for a [`FoldSession`].
///
/// Everything the session talks to is injected here; the engine reaches
/// into no ambient state.
pub struct SessionOptions {
    /// The sheet being folded.
    pub paper: Paper,
    /// Fold sequence the session starts with.
    pub initial_folds: Vec<Fold>,
    /// Emit crease-pattern segments with every frame.
    pub crease_overlay: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            paper: Paper::default(),
            initial_folds: Vec::new(),
            crease_overlay: false,
        }
    }
}

/// The engine's state machine: owns the fold list, switches between config
/// and play modes, interpolates playback, and re-renders through its sink.
///
/// Single-threaded and cooperative: the only suspension point is the host
/// calling [`FoldSession::tick`] once per animation frame while a glide is
/// active.
pub struct FoldSession {
    paper: Paper,
    folds: Vec<Fold>,
    mode: Mode,
    progress: f64,
    crease_overlay: bool,
    glide: Option<Glide>,
    sink: Box<dyn RenderSink>,
    on_change: Option<FoldsChanged>,
}

impl FoldSession {
    /// Build a session, validate the initial folds, and render the initial
    /// config view.
    pub fn new(options: SessionOptions, sink: Box<dyn RenderSink>) -> PleatResult<Self> {
        for fold in &options.initial_folds {
            fold.validate()?;
        }
        let mut session = Self {
            paper: options.paper,
            folds: options.initial_folds,
            mode: Mode::Config,
            progress: 0.0,
            crease_overlay: options.crease_overlay,
            glide: None,
            sink,
            on_change: None,
        };
        session.apply_config_state();
        Ok(session)
    }

    /// Register the change callback invoked after fold-list mutations.
    pub fn set_on_change(&mut self, callback: FoldsChanged) {
        self.on_change = Some(callback);
    }

    /// Current mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Current fold sequence.
    pub fn folds(&self) -> &[Fold] {
        &self.folds
    }

    /// Raw playback progress, `0..=folds.len()*100`.
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Whole-percent playback completion across the whole sequence.
    pub fn playback_percent(&self) -> f64 {
        if self.folds.is_empty() {
            return 0.0;
        }
        let total = self.progress / PROGRESS_UNITS_PER_FOLD;
        (total * 100.0 / self.folds.len() as f64).floor()
    }

    /// True while an [`FoldSession::animate_to`] glide is in flight.
    pub fn is_animating(&self) -> bool {
        self.glide.is_some()
    }

    /// Switch mode and re-render immediately.
    ///
    /// Config sets every current angle to its target; play resets progress
    /// to zero and renders the flat sheet.
    pub fn switch_mode(&mut self, mode: Mode) {
        self.mode = mode;
        match mode {
            Mode::Config => self.apply_config_state(),
            Mode::Play => self.apply_play_state(0.0),
        }
    }

    fn apply_config_state(&mut self) {
        for fold in &mut self.folds {
            fold.current_angle = fold.target_angle;
        }
        self.render();
    }

    /// Set playback progress and re-render.
    ///
    /// Progress is in units of 100 per fold step; folds animate strictly
    /// one after another, each easing through its own window.
    pub fn apply_play_state(&mut self, progress_raw: f64) {
        self.progress = progress_raw;
        apply_sequential_progress(&mut self.folds, progress_raw);
        self.render();
    }

    /// Append a fold of `kind` with default parameters.
    pub fn add_fold(&mut self, kind: FoldKind) {
        tracing::debug!(kind = kind.as_tag(), "add fold");
        self.folds.push(Fold::new(kind));
        self.after_mutation();
    }

    /// Remove the fold at `index`.
    pub fn remove_fold(&mut self, index: usize) -> PleatResult<()> {
        self.check_index(index)?;
        self.folds.remove(index);
        self.after_mutation();
        Ok(())
    }

    /// Set the target (and current) angle of the fold at `index`, clamped
    /// into `0..=179`.
    pub fn update_fold_angle(&mut self, index: usize, angle: f64) -> PleatResult<()> {
        self.check_index(index)?;
        let angle = if angle.is_finite() {
            angle.clamp(0.0, MAX_FOLD_ANGLE)
        } else {
            return Err(PleatError::validation("fold angle must be finite"));
        };
        self.folds[index].target_angle = angle;
        self.folds[index].current_angle = angle;
        self.after_mutation();
        Ok(())
    }

    /// Set the position percentage of the fold at `index`, clamped into
    /// `0..=100`.
    pub fn update_fold_position(&mut self, index: usize, position: f64) -> PleatResult<()> {
        self.check_index(index)?;
        if !position.is_finite() {
            return Err(PleatError::validation("fold position must be finite"));
        }
        self.folds[index].position = position.clamp(0.0, 100.0);
        self.after_mutation();
        Ok(())
    }

    /// Set the direction of the fold at `index`.
    pub fn update_fold_direction(
        &mut self,
        index: usize,
        direction: FoldDirection,
    ) -> PleatResult<()> {
        self.check_index(index)?;
        self.folds[index].direction = direction;
        self.after_mutation();
        Ok(())
    }

    /// Replace the fold list with a preset from the built-in catalog.
    pub fn load_preset(&mut self, key: &str) -> PleatResult<()> {
        let preset = crate::fold::presets::preset(key)
            .ok_or_else(|| PleatError::validation(format!("unknown preset '{key}'")))?;
        tracing::debug!(key, "load preset");
        self.folds = preset.instantiate();
        self.after_mutation();
        Ok(())
    }

    /// Replace the fold list wholesale.
    pub fn set_folds(&mut self, folds: Vec<Fold>) {
        self.folds = folds;
        self.after_mutation();
    }

    /// Export the current fold list as a pattern JSON document.
    pub fn export_folds(&self, name: &str) -> PleatResult<String> {
        pattern::export_folds(name, &self.folds)
    }

    /// Replace the fold list with one decoded from a pattern JSON document.
    ///
    /// On failure the existing fold list is left untouched.
    pub fn import_folds(&mut self, json: &str) -> PleatResult<()> {
        let folds = pattern::import_folds(json)?;
        self.folds = folds;
        self.after_mutation();
        Ok(())
    }

    /// Start a glide from the current progress to fully folded or fully
    /// unfolded, over one second with a cubic ease-out.
    ///
    /// Replaces (cancels) any glide already in flight; drive it with
    /// [`FoldSession::tick`].
    pub fn animate_to(&mut self, target: PlaybackTarget, now_ms: f64) {
        let end = match target {
            PlaybackTarget::Unfolded => 0.0,
            PlaybackTarget::Folded => self.folds.len() as f64 * PROGRESS_UNITS_PER_FOLD,
        };
        self.glide = Some(Glide::new(
            self.progress,
            end,
            now_ms,
            GLIDE_DURATION_MS,
            Ease::OutCubic,
        ));
    }

    /// Advance the active glide to `now_ms`, re-rendering at the sampled
    /// progress. Returns true while the glide is still in flight.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        let Some(glide) = self.glide else {
            return false;
        };
        let sample = glide.sample(now_ms);
        self.apply_play_state(sample.value);
        if sample.done {
            self.glide = None;
        }
        self.glide.is_some()
    }

    fn check_index(&self, index: usize) -> PleatResult<()> {
        if index >= self.folds.len() {
            return Err(PleatError::validation(format!(
                "fold index {index} out of bounds (len {})",
                self.folds.len()
            )));
        }
        Ok(())
    }

    fn after_mutation(&mut self) {
        if self.mode == Mode::Config {
            self.apply_config_state();
        }
        if let Some(callback) = self.on_change.as_mut() {
            callback(&self.folds);
        }
    }

    #[tracing::instrument(skip(self), fields(folds = self.folds.len()))]
    fn render(&mut self) {
        let tree = build_tree(&self.folds, self.paper.size_px);
        let creases = if self.crease_overlay {
            crease_segments(&self.folds, self.paper.size_px)
        } else {
            Vec::new()
        };
        self.sink.present(&SceneFrame { tree, creases });
    }
}

/// Interpolate a fold sequence at a raw progress value.
///
/// For the fold at index `i`, local progress is
/// `clamp(progress_raw / 100 - i, 0, 1)`, eased with a cubic in-out, and
/// the current angle is that fraction of the target. At
/// `progress_raw = folds.len() * 100` every fold reaches its target.
pub fn apply_sequential_progress(folds: &mut [Fold], progress_raw: f64) {
    let total = progress_raw / PROGRESS_UNITS_PER_FOLD;
    for (i, fold) in folds.iter_mut().enumerate() {
        let local_t = (total - i as f64).clamp(0.0, 1.0);
        fold.current_angle = Ease::InOutCubic.apply(local_t) * fold.target_angle;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/controller.rs"]
mod tests;
